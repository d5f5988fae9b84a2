// Copyright (C) 2015-2025 The Neo Project.
//
// config.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Client configuration and well-known network presets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

/// Default RPC host
pub const DEFAULT_HOST: &str = "localhost";
/// Default RPC port
pub const DEFAULT_PORT: u16 = 30333;
/// Default number of transport retries
pub const DEFAULT_HTTP_MAX_RETRIES: u32 = 3;
/// Default HTTP timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Public seed node serving both presets
pub const SEED_HOST: &str = "seed3.neo.org";
/// MainNet RPC port of the seed node
pub const MAINNET_RPC_PORT: u16 = 10331;
/// TestNet RPC port of the seed node
pub const TESTNET_RPC_PORT: u16 = 20331;

/// Connection settings of an [`crate::RpcClient`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RpcClientConfig {
    /// Node host name or address
    pub host: String,

    /// Node RPC port
    pub port: u16,

    /// Use `https` instead of `http`
    pub tls: bool,

    /// Retries for requests that got no response
    pub http_max_retries: u32,

    /// Per-request timeout in milliseconds, `0` disables it
    pub timeout_ms: u64,
}

impl Default for RpcClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            tls: false,
            http_max_retries: DEFAULT_HTTP_MAX_RETRIES,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl RpcClientConfig {
    /// Configuration for one of the public networks.
    pub fn for_network(network: NetworkType) -> Self {
        Self {
            host: SEED_HOST.to_string(),
            port: network.rpc_port(),
            tls: true,
            ..Self::default()
        }
    }

    /// Parses a configuration from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// `https` when TLS is enabled, `http` otherwise.
    pub fn scheme(&self) -> &'static str {
        if self.tls {
            "https"
        } else {
            "http"
        }
    }

    /// The endpoint URL, `scheme://host:port`.
    pub fn base_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&format!("{}://{}:{}", self.scheme(), self.host, self.port))
    }

    /// The per-request timeout, `None` when disabled.
    pub fn timeout(&self) -> Option<Duration> {
        match self.timeout_ms {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        }
    }

    /// Sets the timeout, rounding sub-millisecond durations up so that a
    /// non-zero duration never disables it.
    pub fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout_ms = match timeout {
            None => 0,
            Some(timeout) if timeout.is_zero() => 0,
            Some(timeout) => u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX).max(1),
        };
    }
}

/// Public Neo networks with a known RPC endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NetworkType {
    MainNet,
    TestNet,
}

impl NetworkType {
    /// RPC port of the network's seed node
    pub fn rpc_port(&self) -> u16 {
        match self {
            NetworkType::MainNet => MAINNET_RPC_PORT,
            NetworkType::TestNet => TESTNET_RPC_PORT,
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkType::MainNet => write!(f, "mainnet"),
            NetworkType::TestNet => write!(f, "testnet"),
        }
    }
}

impl FromStr for NetworkType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" | "main" => Ok(NetworkType::MainNet),
            "testnet" | "test" => Ok(NetworkType::TestNet),
            _ => Err(format!("Unknown network type: {s}")),
        }
    }
}
