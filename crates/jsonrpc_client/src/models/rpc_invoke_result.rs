// Copyright (C) 2015-2025 The Neo Project.
//
// rpc_invoke_result.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use serde_json::{Map, Value};

/// Result of an `invoke`, `invokefunction` or `invokescript` call.
///
/// Only the stack is interpreted; every other field the node sends is kept
/// as-is, either in the named fields or in `extra`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RpcInvokeResult {
    /// VM execution state, e.g. `HALT, BREAK`
    pub state: Option<String>,

    /// Gas consumed during execution
    pub gas_consumed: Option<String>,

    /// The script that was invoked
    pub script: Option<String>,

    /// Decoded stack items, `None` when the node sent no stack
    pub stack: Option<Vec<RpcStackItem>>,

    /// Remaining fields, untouched
    pub extra: Map<String, Value>,

    /// A result that is not a JSON object, kept verbatim
    pub unstructured: Option<Value>,
}

/// A decoded stack item.
#[derive(Debug, Clone, PartialEq)]
pub struct RpcStackItem {
    /// Stack item type tag as sent by the node
    pub item_type: String,

    /// Stack item value, `None` when the entry has no `value` key
    pub value: Option<RpcStackValue>,

    /// Other keys of the entry (`interface`, `id`, ...), untouched
    pub extra: Map<String, Value>,
}

/// The value of a decoded stack item.
#[derive(Debug, Clone, PartialEq)]
pub enum RpcStackValue {
    /// Materialized `ByteArray` value.
    Bytes(Vec<u8>),
    /// Recursively decoded `Array` value.
    Array(Vec<RpcStackItem>),
    /// Any other value, passed through unchanged.
    Json(Value),
}

impl RpcInvokeResult {
    /// Whether the VM halted normally.
    pub fn is_halt(&self) -> bool {
        self.state
            .as_deref()
            .map(|state| state.starts_with("HALT"))
            .unwrap_or(false)
    }

    /// The bytes of the stack item at `index`, if it is a `ByteArray`.
    pub fn stack_bytes(&self, index: usize) -> Option<&[u8]> {
        match self.stack.as_ref()?.get(index)?.value {
            Some(RpcStackValue::Bytes(ref bytes)) => Some(bytes),
            _ => None,
        }
    }

    /// Converts back to JSON, re-encoding byte arrays as hex.
    pub fn to_json(&self) -> Value {
        if let Some(ref raw) = self.unstructured {
            return raw.clone();
        }
        let mut json = self.extra.clone();
        if let Some(ref state) = self.state {
            json.insert("state".to_string(), Value::String(state.clone()));
        }
        if let Some(ref gas) = self.gas_consumed {
            json.insert("gas_consumed".to_string(), Value::String(gas.clone()));
        }
        if let Some(ref script) = self.script {
            json.insert("script".to_string(), Value::String(script.clone()));
        }
        if let Some(ref stack) = self.stack {
            json.insert(
                "stack".to_string(),
                Value::Array(stack.iter().map(RpcStackItem::to_json).collect()),
            );
        }
        Value::Object(json)
    }
}

impl RpcStackItem {
    /// Creates an item with a value and no other keys.
    pub fn new(item_type: impl Into<String>, value: RpcStackValue) -> Self {
        Self {
            item_type: item_type.into(),
            value: Some(value),
            extra: Map::new(),
        }
    }

    /// Converts to JSON
    pub fn to_json(&self) -> Value {
        let mut json = self.extra.clone();
        json.insert("type".to_string(), Value::String(self.item_type.clone()));
        if let Some(ref value) = self.value {
            json.insert("value".to_string(), value.to_json());
        }
        Value::Object(json)
    }
}

impl RpcStackValue {
    /// Converts to JSON
    pub fn to_json(&self) -> Value {
        match self {
            RpcStackValue::Bytes(bytes) => Value::String(hex::encode(bytes)),
            RpcStackValue::Array(items) => {
                Value::Array(items.iter().map(RpcStackItem::to_json).collect())
            }
            RpcStackValue::Json(value) => value.clone(),
        }
    }
}
