// Copyright (C) 2015-2025 The Neo Project.
//
// rpc_client/builder.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use super::RpcClient;
use crate::config::{NetworkType, RpcClientConfig};
use crate::error::{RpcError, RpcResult};
use crate::transport::{HttpTransport, Transport};
use std::sync::atomic::AtomicU64;
use std::sync::Arc;
use std::time::Duration;

/// Builder for [`RpcClient`].
#[derive(Default)]
pub struct RpcClientBuilder {
    config: RpcClientConfig,
    transport: Option<Arc<dyn Transport>>,
}

impl RpcClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole configuration.
    #[must_use]
    pub fn config(mut self, config: RpcClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Uses the endpoint of a public network.
    #[must_use]
    pub fn network(mut self, network: NetworkType) -> Self {
        let RpcClientConfig {
            http_max_retries,
            timeout_ms,
            ..
        } = self.config;
        self.config = RpcClientConfig {
            http_max_retries,
            timeout_ms,
            ..RpcClientConfig::for_network(network)
        };
        self
    }

    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    #[must_use]
    pub fn tls(mut self, tls: bool) -> Self {
        self.config.tls = tls;
        self
    }

    /// Retries for requests that got no response. Ignored with a custom transport.
    #[must_use]
    pub fn http_max_retries(mut self, retries: u32) -> Self {
        self.config.http_max_retries = retries;
        self
    }

    /// Per-request timeout. Ignored with a custom transport.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.set_timeout(Some(timeout));
        self
    }

    /// Disables the per-request timeout.
    #[must_use]
    pub fn no_timeout(mut self) -> Self {
        self.config.set_timeout(None);
        self
    }

    /// Sends requests through `transport` instead of the default HTTP transport.
    #[must_use]
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    pub fn build(self) -> RpcResult<RpcClient> {
        let base_address = self
            .config
            .base_url()
            .map_err(|e| RpcError::Config(format!("Invalid endpoint for {}: {e}", self.config.host)))?;

        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HttpTransport::new(
                self.config.http_max_retries,
                self.config.timeout(),
            )?),
        };

        Ok(RpcClient {
            config: self.config,
            base_address,
            transport,
            id_counter: AtomicU64::new(0),
        })
    }
}
