// Copyright (C) 2015-2025 The Neo Project.
//
// models/mod.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! RPC Models
//!
//! Data models for RPC requests, responses and contract parameters.

mod common;
mod contract_parameter;
mod rpc_invoke_result;
mod rpc_peers;
mod rpc_request;
mod rpc_validate_address_result;
mod rpc_version;

pub use common::{BlockId, StorageValue};
pub use contract_parameter::{ContractArg, ContractParameterType, WireParameter, WireValue};
pub use rpc_invoke_result::{RpcInvokeResult, RpcStackItem, RpcStackValue};
pub use rpc_peers::{RpcPeer, RpcPeers};
pub use rpc_request::{is_truthy, RpcRequest, RpcResponse, RpcResponseError, JSON_RPC_VERSION};
pub use rpc_validate_address_result::RpcValidateAddressResult;
pub use rpc_version::RpcVersion;
