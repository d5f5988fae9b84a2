// Copyright (C) 2015-2025 The Neo Project.
//
// rpc_client/client.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use super::helpers::{
    token_as_boolean, token_as_model, token_as_string, token_as_string_array, token_as_u64,
};
use super::{RpcClient, RpcClientBuilder};
use crate::config::{NetworkType, RpcClientConfig};
use crate::error::{DecodeError, ProtocolError, RpcError, RpcResult};
use crate::methods::RpcMethod;
use crate::models::{
    is_truthy, BlockId, ContractArg, RpcInvokeResult, RpcPeers, RpcRequest, RpcResponse,
    RpcValidateAddressResult, RpcVersion, StorageValue, WireParameter,
};
use crate::transport::TransportResponse;
use crate::utility::{decode_invocation_result, encode_invocation_params};
use serde_json::Value;
use std::sync::atomic::Ordering;
use tracing::{debug, warn};
use url::Url;

impl RpcClient {
    /// Creates a configurable builder for the RPC client.
    #[must_use]
    pub fn builder() -> RpcClientBuilder {
        RpcClientBuilder::new()
    }

    /// Creates a client over HTTP for the given configuration.
    pub fn new(config: RpcClientConfig) -> RpcResult<Self> {
        RpcClientBuilder::new().config(config).build()
    }

    /// Creates a client for the Neo MainNet seed node.
    pub fn for_mainnet() -> RpcResult<Self> {
        Self::for_network(NetworkType::MainNet)
    }

    /// Creates a client for the Neo TestNet seed node.
    pub fn for_testnet() -> RpcResult<Self> {
        Self::for_network(NetworkType::TestNet)
    }

    pub fn for_network(network: NetworkType) -> RpcResult<Self> {
        Self::new(RpcClientConfig::for_network(network))
    }

    pub fn config(&self) -> &RpcClientConfig {
        &self.config
    }

    /// The endpoint every request is posted to.
    pub fn base_address(&self) -> &Url {
        &self.base_address
    }

    /// The id the next auto-numbered request will use.
    pub fn next_request_id(&self) -> u64 {
        self.id_counter.load(Ordering::SeqCst)
    }

    /// Calls `method` with an auto-assigned request id and returns its result.
    pub fn call(&self, method: &str, params: Vec<Value>) -> RpcResult<Value> {
        self.dispatch(method, params, None)
    }

    /// Calls `method` with the given request id. The id counter is left untouched.
    pub fn call_with_id(&self, method: &str, params: Vec<Value>, request_id: u64) -> RpcResult<Value> {
        self.dispatch(method, params, Some(request_id))
    }

    fn dispatch(&self, method: &str, params: Vec<Value>, request_id: Option<u64>) -> RpcResult<Value> {
        let id = request_id.unwrap_or_else(|| self.id_counter.fetch_add(1, Ordering::SeqCst));
        let request = RpcRequest::new(id, method, params);
        debug!(method, id, url = %self.base_address, "sending rpc request");

        let response = self
            .transport
            .post_json(&self.base_address, request.to_json().to_string())
            .and_then(Self::as_rpc_result);

        if let Err(ref err) = response {
            warn!(method, id, error = %err, "rpc request failed");
        }
        response
    }

    /// Classifies a raw HTTP response and extracts the result.
    fn as_rpc_result(response: TransportResponse) -> RpcResult<Value> {
        if !response.is_success() {
            return Err(RpcError::http_status(response.status, response.body));
        }

        let json: Value = serde_json::from_str(&response.body).map_err(|e| {
            ProtocolError::InvalidJson {
                message: e.to_string(),
                body: response.body.clone(),
            }
        })?;

        let Some(parsed) = RpcResponse::from_json(&json) else {
            return Err(ProtocolError::MissingResult { data: json }.into());
        };

        if let Some(error) = parsed.error {
            return Err(ProtocolError::Node {
                code: error.code,
                message: error.message,
                data: json,
            }
            .into());
        }

        parsed
            .result
            .ok_or_else(|| ProtocolError::MissingResult { data: json }.into())
    }

    fn rpc_send(&self, method: RpcMethod, params: Vec<Value>) -> RpcResult<Value> {
        self.call(method.as_str(), params)
    }

    fn rpc_invoke(&self, method: RpcMethod, params: Vec<Value>) -> RpcResult<RpcInvokeResult> {
        let result = self.rpc_send(method, params)?;
        Ok(decode_invocation_result(&result)?)
    }

    // Blockchain methods

    /// Returns the account state information associated with an address.
    pub fn get_account_state(&self, address: &str) -> RpcResult<Value> {
        self.rpc_send(RpcMethod::GetAccountState, vec![Value::from(address)])
    }

    /// Returns the asset information associated with an asset id.
    pub fn get_asset_state(&self, asset_id: &str) -> RpcResult<Value> {
        self.rpc_send(RpcMethod::GetAssetState, vec![Value::from(asset_id)])
    }

    /// Returns the hash of the tallest block in the main chain
    pub fn get_best_block_hash(&self) -> RpcResult<String> {
        let result = self.rpc_send(RpcMethod::GetBestBlockHash, vec![])?;
        token_as_string(result, RpcMethod::GetBestBlockHash.as_str())
    }

    /// Returns the block for a hash or an index.
    ///
    /// - `verbose = true` returns a JSON block object
    /// - `verbose = false` returns a raw hex string
    pub fn get_block(&self, block: impl Into<BlockId>, verbose: bool) -> RpcResult<Value> {
        self.rpc_send(
            RpcMethod::GetBlock,
            vec![block.into().to_json(), Value::from(u8::from(verbose))],
        )
    }

    /// Gets the number of blocks in the main chain
    pub fn get_block_count(&self) -> RpcResult<u64> {
        let result = self.rpc_send(RpcMethod::GetBlockCount, vec![])?;
        token_as_u64(result, RpcMethod::GetBlockCount.as_str())
    }

    /// Gets the hash of the block at `index`
    pub fn get_block_hash(&self, index: u32) -> RpcResult<String> {
        let result = self.rpc_send(RpcMethod::GetBlockHash, vec![Value::from(index)])?;
        token_as_string(result, RpcMethod::GetBlockHash.as_str())
    }

    /// Gets the system fees of the block at `index`, in NeoGas units.
    pub fn get_block_sys_fee(&self, index: u32) -> RpcResult<String> {
        let result = self.rpc_send(RpcMethod::GetBlockSysFee, vec![Value::from(index)])?;
        token_as_string(result, RpcMethod::GetBlockSysFee.as_str())
    }

    /// Gets the current number of connections of the node
    pub fn get_connection_count(&self) -> RpcResult<u64> {
        let result = self.rpc_send(RpcMethod::GetConnectionCount, vec![])?;
        token_as_u64(result, RpcMethod::GetConnectionCount.as_str())
    }

    /// Returns the contract information associated with a script hash.
    pub fn get_contract_state(&self, script_hash: &str) -> RpcResult<Value> {
        self.rpc_send(RpcMethod::GetContractState, vec![Value::from(script_hash)])
    }

    /// Returns the hashes of the unconfirmed transactions in memory.
    pub fn get_raw_mem_pool(&self) -> RpcResult<Vec<String>> {
        let result = self.rpc_send(RpcMethod::GetRawMemPool, vec![])?;
        token_as_string_array(result, RpcMethod::GetRawMemPool.as_str())
    }

    /// Returns a transaction by hash, as JSON (`verbose`) or as a hex string.
    pub fn get_raw_transaction(&self, tx_hash: &str, verbose: bool) -> RpcResult<Value> {
        self.rpc_send(
            RpcMethod::GetRawTransaction,
            vec![Value::from(tx_hash), Value::from(u8::from(verbose))],
        )
    }

    /// Returns the value stored under `key` in a contract's storage.
    pub fn get_storage(&self, script_hash: &str, key: &str) -> RpcResult<StorageValue> {
        self.get_storage_by_raw_key(script_hash, key.as_bytes())
    }

    /// Same as [`RpcClient::get_storage`] for a binary key.
    ///
    /// A non-empty hex result is decoded into bytes; any empty or falsy
    /// result means the key was not found and is returned as-is.
    pub fn get_storage_by_raw_key(&self, script_hash: &str, key: &[u8]) -> RpcResult<StorageValue> {
        let method = RpcMethod::GetStorage;
        let result = self.rpc_send(
            method,
            vec![Value::from(script_hash), Value::String(hex::encode(key))],
        )?;

        if !is_truthy(&result) {
            return Ok(StorageValue::Missing(result));
        }
        let hex_value = token_as_string(result, method.as_str())?;
        let bytes = hex::decode(&hex_value).map_err(|source| DecodeError::InvalidHex {
            value: hex_value.clone(),
            source,
        })?;
        Ok(StorageValue::Bytes(bytes))
    }

    /// Returns the output at `index` of a transaction.
    pub fn get_tx_out(&self, tx_hash: &str, index: u32) -> RpcResult<Value> {
        self.rpc_send(
            RpcMethod::GetTxOut,
            vec![Value::from(tx_hash), Value::from(index)],
        )
    }

    // Node methods

    /// Returns the peers the node is connected or disconnected from.
    pub fn get_peers(&self) -> RpcResult<RpcPeers> {
        let result = self.rpc_send(RpcMethod::GetPeers, vec![])?;
        token_as_model(result, RpcMethod::GetPeers.as_str(), "peers object")
    }

    /// Returns the node version details.
    pub fn get_version(&self) -> RpcResult<RpcVersion> {
        let result = self.rpc_send(RpcMethod::GetVersion, vec![])?;
        token_as_model(result, RpcMethod::GetVersion.as_str(), "version object")
    }

    // Smart contract methods

    /// Test-invokes a contract with the given parameters.
    ///
    /// The operation name, if any, must be part of `params`.
    pub fn invoke(&self, script_hash: &str, params: &[ContractArg]) -> RpcResult<RpcInvokeResult> {
        let contract_params = encode_params(params)?;
        self.rpc_invoke(
            RpcMethod::Invoke,
            vec![Value::from(script_hash), contract_params],
        )
    }

    /// Test-invokes `operation` of a contract with the given parameters.
    pub fn invoke_function(
        &self,
        script_hash: &str,
        operation: &str,
        params: &[ContractArg],
    ) -> RpcResult<RpcInvokeResult> {
        let contract_params = encode_params(params)?;
        self.rpc_invoke(
            RpcMethod::InvokeFunction,
            vec![
                Value::from(script_hash),
                Value::from(operation),
                contract_params,
            ],
        )
    }

    /// Runs a hex-encoded VM script without affecting the blockchain.
    pub fn invoke_script(&self, script: &str) -> RpcResult<RpcInvokeResult> {
        self.rpc_invoke(RpcMethod::InvokeScript, vec![Value::from(script)])
    }

    /// Same as [`RpcClient::invoke_script`] for a script given as bytes.
    pub fn invoke_script_bytes(&self, script: &[u8]) -> RpcResult<RpcInvokeResult> {
        self.invoke_script(&hex::encode(script))
    }

    // Transaction and wallet methods

    /// Broadcasts a hex-encoded signed transaction.
    pub fn send_raw_transaction(&self, hex_tx: &str) -> RpcResult<bool> {
        let result = self.rpc_send(RpcMethod::SendRawTransaction, vec![Value::from(hex_tx)])?;
        token_as_boolean(result, RpcMethod::SendRawTransaction.as_str())
    }

    /// Validates an address.
    pub fn validate_address(&self, address: &str) -> RpcResult<RpcValidateAddressResult> {
        let result = self.rpc_send(RpcMethod::ValidateAddress, vec![Value::from(address)])?;
        token_as_model(
            result,
            RpcMethod::ValidateAddress.as_str(),
            "address validation object",
        )
    }
}

fn encode_params(params: &[ContractArg]) -> RpcResult<Value> {
    let encoded = encode_invocation_params(params)?;
    Ok(Value::Array(
        encoded.iter().map(WireParameter::to_json).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_success_status_is_transport_error() {
        let err = RpcClient::as_rpc_result(TransportResponse::new(503, "down")).unwrap_err();
        assert_eq!(err.status(), Some(503));
        assert!(err.is_transport());
    }

    #[test]
    fn garbage_body_is_protocol_error() {
        let err = RpcClient::as_rpc_result(TransportResponse::new(200, "BAD")).unwrap_err();
        assert!(matches!(err, RpcError::Protocol(ProtocolError::InvalidJson { .. })));
    }

    #[test]
    fn node_error_is_formatted() {
        let body = r#"{"jsonrpc":"2.0","id":1,"error":{"code":-100,"message":"Unknown block"}}"#;
        let err = RpcClient::as_rpc_result(TransportResponse::new(200, body)).unwrap_err();
        assert_eq!(err.to_string(), "Error[-100] Unknown block");
    }

    #[test]
    fn missing_result_is_protocol_error() {
        for body in ["{}", "[]", "42"] {
            let err = RpcClient::as_rpc_result(TransportResponse::new(200, body)).unwrap_err();
            assert!(
                matches!(err, RpcError::Protocol(ProtocolError::MissingResult { .. })),
                "{body}"
            );
        }
    }

    #[test]
    fn result_is_returned() {
        let body = r#"{"jsonrpc":"2.0","id":1,"result":{"a":[1,2]}}"#;
        let result = RpcClient::as_rpc_result(TransportResponse::new(200, body)).unwrap();
        assert_eq!(result, serde_json::json!({"a": [1, 2]}));
    }
}
