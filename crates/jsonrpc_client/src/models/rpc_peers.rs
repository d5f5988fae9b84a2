// Copyright (C) 2015-2025 The Neo Project.
//
// rpc_peers.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use serde::{Deserialize, Serialize};

/// Peers known to the node, as returned by `getpeers`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RpcPeers {
    #[serde(default)]
    pub unconnected: Vec<RpcPeer>,
    #[serde(default)]
    pub bad: Vec<RpcPeer>,
    #[serde(default)]
    pub connected: Vec<RpcPeer>,
}

/// A single peer address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcPeer {
    pub address: String,
    pub port: u16,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_lists_default_to_empty() {
        let peers: RpcPeers = serde_json::from_value(json!({
            "connected": [{"address": "::ffff:70.73.16.236", "port": 10333}]
        }))
        .unwrap();
        assert_eq!(peers.connected.len(), 1);
        assert_eq!(peers.connected[0].port, 10333);
        assert!(peers.bad.is_empty());
        assert!(peers.unconnected.is_empty());
    }
}
