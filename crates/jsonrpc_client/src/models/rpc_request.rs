// Copyright (C) 2015-2025 The Neo Project.
//
// rpc_request.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// JSON-RPC protocol version sent with every request.
pub const JSON_RPC_VERSION: &str = "2.0";

/// JSON-RPC request envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcRequest {
    /// JSON-RPC version
    #[serde(rename = "jsonrpc")]
    pub json_rpc: String,

    /// Method name
    pub method: String,

    /// Method parameters
    #[serde(default)]
    pub params: Vec<Value>,

    /// Request ID
    pub id: u64,
}

impl RpcRequest {
    /// Creates a new RPC request
    pub fn new(id: u64, method: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            json_rpc: JSON_RPC_VERSION.to_string(),
            method: method.into(),
            params,
            id,
        }
    }

    /// Converts to JSON
    pub fn to_json(&self) -> Value {
        let mut json = Map::new();
        json.insert("jsonrpc".to_string(), Value::String(self.json_rpc.clone()));
        json.insert("method".to_string(), Value::String(self.method.clone()));
        json.insert("params".to_string(), Value::Array(self.params.clone()));
        json.insert("id".to_string(), Value::from(self.id));
        Value::Object(json)
    }
}

/// JSON-RPC response envelope.
///
/// `result` is `Some` whenever the key is present, even if its value is `null`.
#[derive(Debug, Clone, PartialEq)]
pub struct RpcResponse {
    /// Response ID
    pub id: Option<Value>,

    /// Result, if the key was present
    pub result: Option<Value>,

    /// Error, if a non-empty error was sent
    pub error: Option<RpcResponseError>,
}

/// Error object of a JSON-RPC response
#[derive(Debug, Clone, PartialEq)]
pub struct RpcResponseError {
    /// Error code, rendered as text (empty when absent)
    pub code: String,

    /// Error message (empty when absent)
    pub message: String,

    /// Additional error data
    pub data: Option<Value>,
}

impl RpcResponse {
    /// Creates from JSON.
    ///
    /// Returns `None` when the body is not a JSON object.
    pub fn from_json(json: &Value) -> Option<Self> {
        let obj = json.as_object()?;

        let error = obj
            .get("error")
            .filter(|error| is_truthy(error))
            .map(RpcResponseError::from_json);

        Some(Self {
            id: obj.get("id").cloned(),
            result: obj.get("result").cloned(),
            error,
        })
    }
}

impl RpcResponseError {
    /// Creates from JSON
    pub fn from_json(json: &Value) -> Self {
        match json {
            Value::Object(obj) => Self {
                code: obj.get("code").map(display_value).unwrap_or_default(),
                message: obj.get("message").map(display_value).unwrap_or_default(),
                data: obj.get("data").cloned(),
            },
            other => Self {
                code: String::new(),
                message: display_value(other),
                data: None,
            },
        }
    }
}

/// Whether a JSON value counts as present: `null`, `false`, zero and empty
/// strings, arrays or objects do not.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rpc_request_json_shape() {
        let req = RpcRequest::new(7, "getblock", vec![json!("0xabc"), json!(1)]);
        assert_eq!(
            req.to_json(),
            json!({"jsonrpc": "2.0", "method": "getblock", "params": ["0xabc", 1], "id": 7})
        );
        assert_eq!(serde_json::to_value(&req).unwrap(), req.to_json());
    }

    #[test]
    fn rpc_request_defaults_params() {
        let parsed: RpcRequest =
            serde_json::from_value(json!({"jsonrpc": "2.0", "method": "getversion", "id": 1}))
                .unwrap();
        assert!(parsed.params.is_empty());
    }

    #[test]
    fn null_result_counts_as_present() {
        let response = RpcResponse::from_json(&json!({"id": 1, "result": null})).unwrap();
        assert_eq!(response.result, Some(Value::Null));
        assert!(response.error.is_none());

        let response = RpcResponse::from_json(&json!({"id": 1})).unwrap();
        assert!(response.result.is_none());
    }

    #[test]
    fn empty_error_is_ignored() {
        let response = RpcResponse::from_json(&json!({"error": {}, "result": 3})).unwrap();
        assert!(response.error.is_none());
        let response = RpcResponse::from_json(&json!({"error": null})).unwrap();
        assert!(response.error.is_none());
    }

    #[test]
    fn error_fields_are_rendered() {
        let response = RpcResponse::from_json(&json!({
            "error": {"code": -32601, "message": "Method not found", "data": "x"}
        }))
        .unwrap();
        let error = response.error.unwrap();
        assert_eq!(error.code, "-32601");
        assert_eq!(error.message, "Method not found");
        assert_eq!(error.data, Some(json!("x")));

        let error = RpcResponseError::from_json(&json!({"message": "ERROR"}));
        assert_eq!(error.code, "");
        assert_eq!(error.message, "ERROR");
    }

    #[test]
    fn non_object_body_is_rejected() {
        assert!(RpcResponse::from_json(&json!([1, 2])).is_none());
    }

    #[test]
    fn truthiness() {
        for falsy in [json!(null), json!(false), json!(0), json!(""), json!([]), json!({})] {
            assert!(!is_truthy(&falsy), "{falsy}");
        }
        for truthy in [json!(true), json!(1), json!("0"), json!([0]), json!({"a": null})] {
            assert!(is_truthy(&truthy), "{truthy}");
        }
    }
}
