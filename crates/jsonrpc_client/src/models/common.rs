// Copyright (C) 2015-2025 The Neo Project.
//
// common.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use serde_json::Value;
use std::fmt;

/// A block hash or a block index (height).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockId {
    Hash(String),
    Index(u32),
}

impl BlockId {
    /// Converts to the JSON parameter form.
    pub fn to_json(&self) -> Value {
        match self {
            BlockId::Hash(hash) => Value::String(hash.clone()),
            BlockId::Index(index) => Value::from(*index),
        }
    }
}

impl From<u32> for BlockId {
    fn from(index: u32) -> Self {
        BlockId::Index(index)
    }
}

impl From<&str> for BlockId {
    fn from(hash: &str) -> Self {
        BlockId::Hash(hash.to_string())
    }
}

impl From<String> for BlockId {
    fn from(hash: String) -> Self {
        BlockId::Hash(hash)
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockId::Hash(hash) => f.write_str(hash),
            BlockId::Index(index) => write!(f, "{index}"),
        }
    }
}

/// Value returned by `getstorage`.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageValue {
    /// The stored value, hex-decoded.
    Bytes(Vec<u8>),
    /// The key was not found; holds the raw value the node sent (`null`, `""`, ...).
    Missing(Value),
}

impl StorageValue {
    /// The stored bytes, if the key was found.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            StorageValue::Bytes(bytes) => Some(bytes),
            StorageValue::Missing(_) => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, StorageValue::Missing(_))
    }

    /// Consumes the value, returning the stored bytes if any.
    pub fn into_bytes(self) -> Option<Vec<u8>> {
        match self {
            StorageValue::Bytes(bytes) => Some(bytes),
            StorageValue::Missing(_) => None,
        }
    }
}
