// Copyright (C) 2015-2025 The Neo Project.
//
// contract_client.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::error::RpcResult;
use crate::models::{ContractArg, RpcInvokeResult, StorageValue};
use crate::RpcClient;
use serde_json::Value;
use std::sync::Arc;

/// Calls the operations of a single deployed contract.
///
/// ```no_run
/// use neo_jsonrpc_client::{contract_call, ContractClient, RpcClient};
/// use std::sync::Arc;
///
/// let client = Arc::new(RpcClient::for_testnet()?);
/// let token = ContractClient::new(client, "ecc6b20d3ccac1ee9ef109af5a7cdb85706b1df9");
/// let result = contract_call!(token, balanceOf("AKkkumHbBipZ46UMZJoFynJMXzSRnBvKcs"))?;
/// println!("{:?}", result.stack_bytes(0));
/// # Ok::<(), neo_jsonrpc_client::RpcError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ContractClient {
    rpc_client: Arc<RpcClient>,
    script_hash: String,
}

impl ContractClient {
    pub fn new(rpc_client: Arc<RpcClient>, script_hash: impl Into<String>) -> Self {
        Self {
            rpc_client,
            script_hash: script_hash.into(),
        }
    }

    pub fn script_hash(&self) -> &str {
        &self.script_hash
    }

    pub fn rpc_client(&self) -> &RpcClient {
        &self.rpc_client
    }

    /// Test-invokes `operation` with positional arguments via `invokefunction`.
    pub fn call(&self, operation: &str, args: &[ContractArg]) -> RpcResult<RpcInvokeResult> {
        self.rpc_client
            .invoke_function(&self.script_hash, operation, args)
    }

    /// Test-invokes the contract with raw parameters via `invoke`.
    pub fn invoke(&self, params: &[ContractArg]) -> RpcResult<RpcInvokeResult> {
        self.rpc_client.invoke(&self.script_hash, params)
    }

    /// Reads a value from the contract's storage.
    pub fn get_storage(&self, key: &str) -> RpcResult<StorageValue> {
        self.rpc_client.get_storage(&self.script_hash, key)
    }

    /// Returns the contract state as reported by the node.
    pub fn get_state(&self) -> RpcResult<Value> {
        self.rpc_client.get_contract_state(&self.script_hash)
    }
}

/// Calls a contract operation with method-call syntax.
///
/// `contract_call!(contract, name(a, b))` expands to
/// `contract.call("name", &[a.into(), b.into()])`.
#[macro_export]
macro_rules! contract_call {
    ($contract:expr, $operation:ident ( $($arg:expr),* $(,)? )) => {
        $contract.call(
            stringify!($operation),
            &[$($crate::models::ContractArg::from($arg)),*],
        )
    };
}
