// Copyright (C) 2015-2025 The Neo Project.
//
// rpc_version.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use serde::{Deserialize, Serialize};

/// Node version information returned by `getversion`.
///
/// Older nodes report a single `port`, newer ones `tcpport`/`wsport`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcVersion {
    #[serde(rename = "tcpport", alias = "port", default)]
    pub tcp_port: Option<u16>,

    #[serde(rename = "wsport", default)]
    pub ws_port: Option<u16>,

    pub nonce: u64,

    #[serde(rename = "useragent")]
    pub user_agent: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_legacy_port_field() {
        let version: RpcVersion = serde_json::from_value(json!({
            "port": 20333,
            "nonce": 771199013,
            "useragent": "/NEO:2.7.6/"
        }))
        .unwrap();
        assert_eq!(version.tcp_port, Some(20333));
        assert_eq!(version.ws_port, None);
        assert_eq!(version.user_agent, "/NEO:2.7.6/");
    }

    #[test]
    fn parses_split_ports() {
        let version: RpcVersion = serde_json::from_value(json!({
            "tcpport": 10333,
            "wsport": 10334,
            "nonce": 1234567890,
            "useragent": "/Neo:3.6.0/"
        }))
        .unwrap();
        assert_eq!(version.tcp_port, Some(10333));
        assert_eq!(version.ws_port, Some(10334));
    }
}
