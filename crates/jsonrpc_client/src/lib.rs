// Copyright (C) 2015-2025 The Neo Project.
//
// lib.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Neo JSON-RPC Client Library
//!
//! A blocking client for the JSON-RPC interface of Neo nodes. It numbers and
//! sends requests, classifies failures into transport, protocol and decode
//! errors, encodes native values into typed contract parameters and decodes
//! the stacks returned by test invocations.

pub mod config;
pub mod error;
pub mod methods;
pub mod models;
pub mod transport;
pub mod utility;
mod contract_client;
mod rpc_client;

pub use config::{NetworkType, RpcClientConfig};
pub use contract_client::ContractClient;
pub use error::{DecodeError, EncodeError, ProtocolError, RpcError, RpcResult};
pub use methods::RpcMethod;
pub use rpc_client::{RpcClient, RpcClientBuilder};
pub use transport::{HttpTransport, Transport, TransportResponse};

// Re-export commonly used types
pub use models::{
    BlockId, ContractArg, ContractParameterType, RpcInvokeResult, RpcStackItem, RpcStackValue,
    StorageValue,
};
