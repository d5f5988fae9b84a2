// Copyright (C) 2015-2025 The Neo Project.
//
// contract_parameter.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use num_bigint::BigInt;
use num_traits::ToPrimitive;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Contract parameter types understood by the invocation RPC methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractParameterType {
    /// Indicates that the parameter is of Boolean type
    Boolean,

    /// Indicates that the parameter is an integer
    Integer,

    /// Indicates that the parameter is a 160-bit hash
    Hash160,

    /// Indicates that the parameter is a 256-bit hash
    Hash256,

    /// Indicates that the parameter is a byte array
    ByteArray,

    /// Indicates that the parameter is a string
    String,

    /// Indicates that the parameter is an array
    Array,
}

impl ContractParameterType {
    /// Returns the wire name for this parameter type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractParameterType::Boolean => "Boolean",
            ContractParameterType::Integer => "Integer",
            ContractParameterType::Hash160 => "Hash160",
            ContractParameterType::Hash256 => "Hash256",
            ContractParameterType::ByteArray => "ByteArray",
            ContractParameterType::String => "String",
            ContractParameterType::Array => "Array",
        }
    }
}

impl fmt::Display for ContractParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContractParameterType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Boolean" => Ok(ContractParameterType::Boolean),
            "Integer" => Ok(ContractParameterType::Integer),
            "Hash160" => Ok(ContractParameterType::Hash160),
            "Hash256" => Ok(ContractParameterType::Hash256),
            "ByteArray" => Ok(ContractParameterType::ByteArray),
            "String" => Ok(ContractParameterType::String),
            "Array" => Ok(ContractParameterType::Array),
            other => Err(format!("Unknown contract parameter type: {other}")),
        }
    }
}

impl Serialize for ContractParameterType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ContractParameterType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        ContractParameterType::from_str(&value).map_err(serde::de::Error::custom)
    }
}

/// A loosely typed client-side value passed to a contract invocation.
///
/// The wire type is inferred from the value's shape when the value is encoded,
/// unless it is wrapped in [`ContractArg::Typed`].
#[derive(Debug, Clone, PartialEq)]
pub enum ContractArg {
    Boolean(bool),
    Integer(BigInt),
    String(String),
    ByteArray(Vec<u8>),
    Array(Vec<ContractArg>),
    /// Explicit wire type for the wrapped value, bypassing inference.
    Typed(ContractParameterType, Box<ContractArg>),
    Null,
    Float(f64),
    Map(Vec<(ContractArg, ContractArg)>),
}

impl ContractArg {
    /// A raw binary blob.
    pub fn bytes(value: impl Into<Vec<u8>>) -> Self {
        ContractArg::ByteArray(value.into())
    }

    /// An ordered sequence of values.
    pub fn array<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ContractArg>,
    {
        ContractArg::Array(items.into_iter().map(Into::into).collect())
    }

    /// A value that is sent with the given wire type instead of an inferred one.
    pub fn typed(param_type: ContractParameterType, value: impl Into<ContractArg>) -> Self {
        ContractArg::Typed(param_type, Box::new(value.into()))
    }

    /// Short description of the value's kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            ContractArg::Boolean(_) => "boolean",
            ContractArg::Integer(_) => "integer",
            ContractArg::String(_) => "string",
            ContractArg::ByteArray(_) => "byte array",
            ContractArg::Array(_) => "array",
            ContractArg::Typed(..) => "typed value",
            ContractArg::Null => "null",
            ContractArg::Float(_) => "float",
            ContractArg::Map(_) => "map",
        }
    }
}

impl From<bool> for ContractArg {
    fn from(value: bool) -> Self {
        ContractArg::Boolean(value)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ContractArg {
                fn from(value: $ty) -> Self {
                    ContractArg::Integer(BigInt::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<BigInt> for ContractArg {
    fn from(value: BigInt) -> Self {
        ContractArg::Integer(value)
    }
}

impl From<f64> for ContractArg {
    fn from(value: f64) -> Self {
        ContractArg::Float(value)
    }
}

impl From<&str> for ContractArg {
    fn from(value: &str) -> Self {
        ContractArg::String(value.to_string())
    }
}

impl From<String> for ContractArg {
    fn from(value: String) -> Self {
        ContractArg::String(value)
    }
}

impl From<&String> for ContractArg {
    fn from(value: &String) -> Self {
        ContractArg::String(value.clone())
    }
}

impl From<&[u8]> for ContractArg {
    fn from(value: &[u8]) -> Self {
        ContractArg::ByteArray(value.to_vec())
    }
}

impl From<Vec<ContractArg>> for ContractArg {
    fn from(value: Vec<ContractArg>) -> Self {
        ContractArg::Array(value)
    }
}

impl<T: Into<ContractArg>> From<Option<T>> for ContractArg {
    fn from(value: Option<T>) -> Self {
        value.map_or(ContractArg::Null, Into::into)
    }
}

impl From<Value> for ContractArg {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => ContractArg::Null,
            Value::Bool(b) => ContractArg::Boolean(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    ContractArg::Integer(BigInt::from(i))
                } else if let Some(u) = n.as_u64() {
                    ContractArg::Integer(BigInt::from(u))
                } else {
                    ContractArg::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::String(s) => ContractArg::String(s),
            Value::Array(items) => ContractArg::array(items),
            Value::Object(map) => ContractArg::Map(
                map.into_iter()
                    .map(|(k, v)| (ContractArg::String(k), ContractArg::from(v)))
                    .collect(),
            ),
        }
    }
}

/// A tagged parameter as sent to the node: `{"type": ..., "value": ...}`.
#[derive(Debug, Clone, PartialEq)]
pub struct WireParameter {
    /// Parameter type tag
    pub param_type: ContractParameterType,

    /// Parameter value
    pub value: WireValue,
}

/// The value carried by a [`WireParameter`].
#[derive(Debug, Clone, PartialEq)]
pub enum WireValue {
    Boolean(bool),
    Integer(BigInt),
    /// Used by `String`, `Hash160` and `Hash256` parameters.
    Text(String),
    Bytes(Vec<u8>),
    Array(Vec<WireParameter>),
}

impl WireParameter {
    pub fn new(param_type: ContractParameterType, value: WireValue) -> Self {
        Self { param_type, value }
    }

    /// Converts to JSON
    pub fn to_json(&self) -> Value {
        let mut json = Map::new();
        json.insert(
            "type".to_string(),
            Value::String(self.param_type.as_str().to_string()),
        );
        json.insert("value".to_string(), self.value.to_json());
        Value::Object(json)
    }
}

impl WireValue {
    /// Converts to JSON.
    ///
    /// Integers outside the 64-bit range are sent as decimal strings and
    /// byte arrays as lowercase hex.
    pub fn to_json(&self) -> Value {
        match self {
            WireValue::Boolean(b) => Value::Bool(*b),
            WireValue::Integer(i) => {
                if let Some(v) = i.to_i64() {
                    Value::from(v)
                } else if let Some(v) = i.to_u64() {
                    Value::from(v)
                } else {
                    Value::String(i.to_string())
                }
            }
            WireValue::Text(s) => Value::String(s.clone()),
            WireValue::Bytes(bytes) => Value::String(hex::encode(bytes)),
            WireValue::Array(items) => {
                Value::Array(items.iter().map(WireParameter::to_json).collect())
            }
        }
    }
}

impl Serialize for WireParameter {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parameter_type_names_roundtrip() {
        for ty in [
            ContractParameterType::Boolean,
            ContractParameterType::Integer,
            ContractParameterType::Hash160,
            ContractParameterType::Hash256,
            ContractParameterType::ByteArray,
            ContractParameterType::String,
            ContractParameterType::Array,
        ] {
            assert_eq!(ty.as_str().parse::<ContractParameterType>().unwrap(), ty);
        }
        assert!("Map".parse::<ContractParameterType>().is_err());
    }

    #[test]
    fn wire_parameter_json_shape() {
        let param = WireParameter::new(
            ContractParameterType::Array,
            WireValue::Array(vec![
                WireParameter::new(ContractParameterType::Boolean, WireValue::Boolean(true)),
                WireParameter::new(
                    ContractParameterType::ByteArray,
                    WireValue::Bytes(b"test".to_vec()),
                ),
            ]),
        );
        assert_eq!(
            param.to_json(),
            json!({
                "type": "Array",
                "value": [
                    {"type": "Boolean", "value": true},
                    {"type": "ByteArray", "value": "74657374"}
                ]
            })
        );
        assert_eq!(serde_json::to_value(&param).unwrap(), param.to_json());
    }

    #[test]
    fn big_integers_are_sent_as_strings() {
        let small = WireValue::Integer(BigInt::from(-42));
        assert_eq!(small.to_json(), json!(-42));

        let big = WireValue::Integer(BigInt::from(u128::MAX));
        assert_eq!(big.to_json(), json!(u128::MAX.to_string()));
    }

    #[test]
    fn contract_arg_from_json_value() {
        let arg = ContractArg::from(json!([true, 7, "x", null, 1.5, {"k": 1}]));
        assert_eq!(
            arg,
            ContractArg::Array(vec![
                ContractArg::Boolean(true),
                ContractArg::Integer(BigInt::from(7)),
                ContractArg::String("x".to_string()),
                ContractArg::Null,
                ContractArg::Float(1.5),
                ContractArg::Map(vec![(
                    ContractArg::String("k".to_string()),
                    ContractArg::Integer(BigInt::from(1))
                )]),
            ])
        );
    }
}
