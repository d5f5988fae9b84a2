// Copyright (C) 2015-2025 The Neo Project.
//
// error.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Error types for RPC operations.

use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while talking to a Neo node.
///
/// The variants separate "could not reach or parse the node" ([`RpcError::Transport`]),
/// "node understood but rejected or errored" ([`RpcError::Protocol`]) and
/// "node returned unusable contract data" ([`RpcError::Decode`]).
#[derive(Error, Debug)]
pub enum RpcError {
    /// The HTTP exchange itself failed.
    #[error("{message}")]
    Transport {
        /// HTTP status code, `None` when no response was received at all.
        status: Option<u16>,
        /// Human readable description.
        message: String,
        /// Raw response body, when one was received.
        body: Option<String>,
    },

    /// The JSON-RPC envelope could not be used.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// An invocation result stack could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Invocation parameters could not be encoded.
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// The client could not be constructed from its configuration.
    #[error("Invalid client configuration: {0}")]
    Config(String),
}

/// Envelope-level failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProtocolError {
    /// The response body is not valid JSON.
    #[error("Unable to deserialize response body: {message}")]
    InvalidJson {
        /// Parser error message.
        message: String,
        /// Raw response body.
        body: String,
    },

    /// The node answered with a populated `error` object.
    #[error("Error[{code}] {message}")]
    Node {
        /// Error code as sent by the node (empty when absent).
        code: String,
        /// Error message as sent by the node (empty when absent).
        message: String,
        /// The whole decoded response.
        data: Value,
    },

    /// The response carries neither `error` nor `result`.
    #[error("Response is empty (result field is missing)")]
    MissingResult {
        /// The whole decoded response.
        data: Value,
    },

    /// The result does not have the shape the called method returns.
    #[error("{method}: expected {expected}")]
    UnexpectedResult {
        /// RPC method name.
        method: String,
        /// Description of the expected shape.
        expected: &'static str,
    },
}

/// Failures while decoding an invocation result stack.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    /// A `ByteArray` value is not valid hex.
    #[error("Invalid hex in ByteArray stack item '{value}': {source}")]
    InvalidHex {
        /// Offending value.
        value: String,
        /// Underlying hex error.
        #[source]
        source: hex::FromHexError,
    },

    /// A `ByteArray` or `Array` stack item carries a value of the wrong JSON type.
    #[error("Invalid {item_type} stack item value: {value}")]
    InvalidValue {
        /// Stack item type tag.
        item_type: String,
        /// Offending value, serialized.
        value: String,
    },

    /// A stack entry is not a `{type, value}` object.
    #[error("Malformed stack item: {0}")]
    MalformedItem(String),
}

/// Failures while encoding invocation parameters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// The value matches none of the contract parameter types.
    #[error("Unsupported parameter type: {0}")]
    UnsupportedParameter(String),

    /// An explicit type override cannot be applied to the given value.
    #[error("Cannot encode {value} as {target}")]
    IncompatibleOverride {
        /// Requested wire type.
        target: &'static str,
        /// Description of the value.
        value: String,
    },
}

impl RpcError {
    /// Create a transport error for a response with a non-success status.
    pub fn http_status(status: u16, body: String) -> Self {
        Self::Transport {
            status: Some(status),
            message: format!("Got unsuccessful response from server (status code: {status})"),
            body: Some(body),
        }
    }

    /// Create a transport error for a request that never got a response.
    pub fn connection<S: Into<String>>(message: S) -> Self {
        Self::Transport {
            status: None,
            message: message.into(),
            body: None,
        }
    }

    /// Create an unexpected result error.
    pub fn unexpected_result(method: &str, expected: &'static str) -> Self {
        Self::Protocol(ProtocolError::UnexpectedResult {
            method: method.to_string(),
            expected,
        })
    }

    /// Whether the failure happened at the HTTP channel level.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Whether the failure happened at the JSON-RPC envelope level.
    pub fn is_protocol(&self) -> bool {
        matches!(self, Self::Protocol(_))
    }

    /// Whether the failure happened while decoding an invocation result.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }

    /// Whether the failure happened while encoding invocation parameters.
    pub fn is_encode(&self) -> bool {
        matches!(self, Self::Encode(_))
    }

    /// The error code reported by the node, if any.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Protocol(ProtocolError::Node { code, .. }) => Some(code),
            _ => None,
        }
    }

    /// The HTTP status of a transport failure, if a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => *status,
            _ => None,
        }
    }
}

/// Result type for RPC operations.
pub type RpcResult<T> = std::result::Result<T, RpcError>;
