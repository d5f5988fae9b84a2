// Copyright (C) 2015-2025 The Neo Project.
//
// rpc_client/helpers.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::error::{RpcError, RpcResult};
use serde::de::DeserializeOwned;
use serde_json::Value;

pub(super) fn token_as_string(token: Value, method: &str) -> RpcResult<String> {
    match token {
        Value::String(value) => Ok(value),
        _ => Err(RpcError::unexpected_result(method, "string token")),
    }
}

pub(super) fn token_as_u64(token: Value, method: &str) -> RpcResult<u64> {
    token
        .as_u64()
        .ok_or_else(|| RpcError::unexpected_result(method, "unsigned integer token"))
}

pub(super) fn token_as_boolean(token: Value, method: &str) -> RpcResult<bool> {
    token
        .as_bool()
        .ok_or_else(|| RpcError::unexpected_result(method, "boolean token"))
}

pub(super) fn token_as_string_array(token: Value, method: &str) -> RpcResult<Vec<String>> {
    match token {
        Value::Array(items) => items
            .into_iter()
            .map(|item| token_as_string(item, method))
            .collect(),
        _ => Err(RpcError::unexpected_result(method, "array of strings")),
    }
}

pub(super) fn token_as_model<T: DeserializeOwned>(
    token: Value,
    method: &str,
    expected: &'static str,
) -> RpcResult<T> {
    serde_json::from_value(token).map_err(|_| RpcError::unexpected_result(method, expected))
}
