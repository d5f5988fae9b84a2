// Copyright (C) 2015-2025 The Neo Project.
//
// methods.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use std::fmt;

/// JSON-RPC methods exposed by Neo nodes and wrapped by [`crate::RpcClient`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RpcMethod {
    /// Account asset information for an address.
    GetAccountState,
    /// Asset information for an asset id.
    GetAssetState,
    /// Hash of the tallest block in the main chain.
    GetBestBlockHash,
    /// Block information for a hash or index.
    GetBlock,
    /// Number of blocks in the chain.
    GetBlockCount,
    /// Hash of the block at an index.
    GetBlockHash,
    /// System fees of the block at an index.
    GetBlockSysFee,
    /// Number of connections of the node.
    GetConnectionCount,
    /// Contract information for a script hash.
    GetContractState,
    /// Unconfirmed transactions in memory.
    GetRawMemPool,
    /// Transaction information for a hash.
    GetRawTransaction,
    /// Value stored under a key of a contract's storage.
    GetStorage,
    /// Transaction output for a hash and index.
    GetTxOut,
    /// Peers the node is connected/disconnected from.
    GetPeers,
    /// Version information of the node.
    GetVersion,
    /// Test invocation of a contract with parameters.
    Invoke,
    /// Test invocation of a contract operation with parameters.
    InvokeFunction,
    /// Test run of a VM script.
    InvokeScript,
    /// Broadcast of a transaction.
    SendRawTransaction,
    /// Address validation.
    ValidateAddress,
}

impl RpcMethod {
    /// All wrapped methods.
    pub const ALL: [RpcMethod; 20] = [
        RpcMethod::GetAccountState,
        RpcMethod::GetAssetState,
        RpcMethod::GetBestBlockHash,
        RpcMethod::GetBlock,
        RpcMethod::GetBlockCount,
        RpcMethod::GetBlockHash,
        RpcMethod::GetBlockSysFee,
        RpcMethod::GetConnectionCount,
        RpcMethod::GetContractState,
        RpcMethod::GetRawMemPool,
        RpcMethod::GetRawTransaction,
        RpcMethod::GetStorage,
        RpcMethod::GetTxOut,
        RpcMethod::GetPeers,
        RpcMethod::GetVersion,
        RpcMethod::Invoke,
        RpcMethod::InvokeFunction,
        RpcMethod::InvokeScript,
        RpcMethod::SendRawTransaction,
        RpcMethod::ValidateAddress,
    ];

    /// The method name sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            RpcMethod::GetAccountState => "getaccountstate",
            RpcMethod::GetAssetState => "getassetstate",
            RpcMethod::GetBestBlockHash => "getbestblockhash",
            RpcMethod::GetBlock => "getblock",
            RpcMethod::GetBlockCount => "getblockcount",
            RpcMethod::GetBlockHash => "getblockhash",
            RpcMethod::GetBlockSysFee => "getblocksysfee",
            RpcMethod::GetConnectionCount => "getconnectioncount",
            RpcMethod::GetContractState => "getcontractstate",
            RpcMethod::GetRawMemPool => "getrawmempool",
            RpcMethod::GetRawTransaction => "getrawtransaction",
            RpcMethod::GetStorage => "getstorage",
            RpcMethod::GetTxOut => "gettxout",
            RpcMethod::GetPeers => "getpeers",
            RpcMethod::GetVersion => "getversion",
            RpcMethod::Invoke => "invoke",
            RpcMethod::InvokeFunction => "invokefunction",
            RpcMethod::InvokeScript => "invokescript",
            RpcMethod::SendRawTransaction => "sendrawtransaction",
            RpcMethod::ValidateAddress => "validateaddress",
        }
    }
}

impl fmt::Display for RpcMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
