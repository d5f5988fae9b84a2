// Copyright (C) 2015-2025 The Neo Project.
//
// utility/stack.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::error::DecodeError;
use crate::models::{RpcInvokeResult, RpcStackItem, RpcStackValue};
use serde_json::Value;

/// Decodes the values embedded in an invocation result.
///
/// `ByteArray` stack values are hex-decoded into bytes and `Array` values are
/// decoded recursively; every other item, key and field passes through
/// untouched. A result that is not a JSON object is kept verbatim. The input
/// is only borrowed.
pub fn decode_invocation_result(result: &Value) -> Result<RpcInvokeResult, DecodeError> {
    let Some(obj) = result.as_object() else {
        return Ok(RpcInvokeResult {
            unstructured: Some(result.clone()),
            ..RpcInvokeResult::default()
        });
    };

    let mut decoded = RpcInvokeResult::default();
    for (key, value) in obj {
        match (key.as_str(), value) {
            ("state", Value::String(state)) => decoded.state = Some(state.clone()),
            ("script", Value::String(script)) => decoded.script = Some(script.clone()),
            ("gas_consumed", Value::String(gas)) => decoded.gas_consumed = Some(gas.clone()),
            ("stack", Value::Array(items)) => decoded.stack = Some(decode_stack(items)?),
            _ => {
                decoded.extra.insert(key.clone(), value.clone());
            }
        }
    }
    Ok(decoded)
}

/// Decodes a list of `{type, value}` stack entries.
pub fn decode_stack(items: &[Value]) -> Result<Vec<RpcStackItem>, DecodeError> {
    items.iter().map(decode_stack_item).collect()
}

fn decode_stack_item(item: &Value) -> Result<RpcStackItem, DecodeError> {
    let Some(entry) = item.as_object() else {
        return Err(DecodeError::MalformedItem(item.to_string()));
    };
    let item_type = entry
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| DecodeError::MalformedItem(item.to_string()))?;

    let mut extra = entry.clone();
    extra.remove("type");
    let value = match extra.remove("value") {
        Some(value) => Some(decode_stack_value(item_type, value)?),
        None => None,
    };

    Ok(RpcStackItem {
        item_type: item_type.to_string(),
        value,
        extra,
    })
}

fn decode_stack_value(item_type: &str, value: Value) -> Result<RpcStackValue, DecodeError> {
    match (item_type, value) {
        ("ByteArray", Value::String(hex_value)) => match hex::decode(&hex_value) {
            Ok(bytes) => Ok(RpcStackValue::Bytes(bytes)),
            Err(source) => Err(DecodeError::InvalidHex {
                value: hex_value,
                source,
            }),
        },
        ("Array", Value::Array(items)) => Ok(RpcStackValue::Array(decode_stack(&items)?)),
        (tag @ ("ByteArray" | "Array"), other) => Err(DecodeError::InvalidValue {
            item_type: tag.to_string(),
            value: other.to_string(),
        }),
        (_, other) => Ok(RpcStackValue::Json(other)),
    }
}
