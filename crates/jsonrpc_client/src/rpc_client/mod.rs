// Copyright (C) 2015-2025 The Neo Project.
//
// rpc_client/mod.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

mod builder;
mod client;
mod helpers;

pub use builder::RpcClientBuilder;

use crate::config::RpcClientConfig;
use crate::transport::Transport;
use std::fmt;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;
use url::Url;

/// The RPC client to call Neo RPC methods.
///
/// Each call is one blocking HTTP round trip. Request ids come from a
/// per-instance atomic counter, so a client shared between threads never
/// reuses an id.
pub struct RpcClient {
    config: RpcClientConfig,
    base_address: Url,
    transport: Arc<dyn Transport>,
    id_counter: AtomicU64,
}

impl fmt::Debug for RpcClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RpcClient")
            .field("base_address", &self.base_address.as_str())
            .field("config", &self.config)
            .field("id_counter", &self.id_counter)
            .finish_non_exhaustive()
    }
}
