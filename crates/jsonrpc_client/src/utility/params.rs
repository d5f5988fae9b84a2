// Copyright (C) 2015-2025 The Neo Project.
//
// utility/params.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::error::EncodeError;
use crate::models::{ContractArg, ContractParameterType, WireParameter, WireValue};
use num_bigint::BigInt;
use std::str::FromStr;

/// Returns true if the string is a 64 character hex string (a SHA256 hash).
///
/// Surrounding whitespace is ignored.
pub fn is_hash256(s: &str) -> bool {
    let s = s.trim();
    s.len() == 64 && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Returns true if the string is exactly 40 hex characters (a RIPEMD160 hash).
pub fn is_hash160(s: &str) -> bool {
    s.len() == 40 && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Determines the wire type of a client value.
///
/// Rules are tried in order and the first match wins, since a hash-looking
/// value is also a valid string. Returns `None` for values no rule covers.
pub fn classify(arg: &ContractArg) -> Option<ContractParameterType> {
    match arg {
        ContractArg::Typed(param_type, _) => Some(*param_type),
        ContractArg::Boolean(_) => Some(ContractParameterType::Boolean),
        ContractArg::Integer(_) => Some(ContractParameterType::Integer),
        ContractArg::String(s) if is_hash256(s) => Some(ContractParameterType::Hash256),
        ContractArg::String(s) if is_hash160(s) => Some(ContractParameterType::Hash160),
        ContractArg::ByteArray(_) => Some(ContractParameterType::ByteArray),
        ContractArg::String(_) => Some(ContractParameterType::String),
        ContractArg::Array(_) => Some(ContractParameterType::Array),
        ContractArg::Null | ContractArg::Float(_) | ContractArg::Map(_) => None,
    }
}

/// Converts client values into the tagged parameter list consumed by the
/// invocation methods. Order is preserved and arrays are encoded recursively.
///
/// Values that match no parameter type are rejected rather than dropped.
pub fn encode_invocation_params(params: &[ContractArg]) -> Result<Vec<WireParameter>, EncodeError> {
    params.iter().map(encode_param).collect()
}

/// Encodes a single client value.
pub fn encode_param(arg: &ContractArg) -> Result<WireParameter, EncodeError> {
    let param_type = classify(arg).ok_or_else(|| unsupported(arg))?;
    match arg {
        ContractArg::Typed(_, inner) => encode_as(param_type, innermost(inner)),
        other => encode_as(param_type, other),
    }
}

fn innermost(arg: &ContractArg) -> &ContractArg {
    match arg {
        ContractArg::Typed(_, inner) => innermost(inner),
        other => other,
    }
}

fn encode_as(param_type: ContractParameterType, arg: &ContractArg) -> Result<WireParameter, EncodeError> {
    let value = match (param_type, arg) {
        (ContractParameterType::Boolean, ContractArg::Boolean(b)) => WireValue::Boolean(*b),
        (ContractParameterType::Integer, ContractArg::Integer(i)) => WireValue::Integer(i.clone()),
        (ContractParameterType::Integer, ContractArg::String(s)) => BigInt::from_str(s.trim())
            .map(WireValue::Integer)
            .map_err(|_| incompatible(param_type, arg))?,
        (ContractParameterType::Hash256, ContractArg::String(s)) if is_hash256(s) => {
            WireValue::Text(s.clone())
        }
        (ContractParameterType::Hash160, ContractArg::String(s)) if is_hash160(s) => {
            WireValue::Text(s.clone())
        }
        (ContractParameterType::ByteArray, ContractArg::ByteArray(bytes)) => {
            WireValue::Bytes(bytes.clone())
        }
        (ContractParameterType::ByteArray, ContractArg::String(s)) => {
            WireValue::Bytes(s.as_bytes().to_vec())
        }
        (ContractParameterType::String, ContractArg::String(s)) => WireValue::Text(s.clone()),
        (ContractParameterType::Array, ContractArg::Array(items)) => {
            WireValue::Array(encode_invocation_params(items)?)
        }
        _ => return Err(incompatible(param_type, arg)),
    };
    Ok(WireParameter::new(param_type, value))
}

fn unsupported(arg: &ContractArg) -> EncodeError {
    EncodeError::UnsupportedParameter(format!("{} value {:?}", arg.kind(), arg))
}

fn incompatible(param_type: ContractParameterType, arg: &ContractArg) -> EncodeError {
    EncodeError::IncompatibleOverride {
        target: param_type.as_str(),
        value: format!("{} value {:?}", arg.kind(), arg),
    }
}
