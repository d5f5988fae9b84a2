// Copyright (C) 2015-2025 The Neo Project.
//
// transport.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! HTTP channel used by the RPC client.

use crate::error::{RpcError, RpcResult};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use std::sync::Arc;
use std::time::Duration;
use tracing::{trace, warn};
use url::Url;

/// Status and body of an HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a JSON body with HTTP POST and returns the raw response.
///
/// Implementations report any received response, whatever its status, as
/// `Ok`; `Err` means no response was obtained.
pub trait Transport: Send + Sync {
    fn post_json(&self, url: &Url, body: String) -> RpcResult<TransportResponse>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn post_json(&self, url: &Url, body: String) -> RpcResult<TransportResponse> {
        (**self).post_json(url, body)
    }
}

/// Blocking HTTP transport backed by `reqwest`.
///
/// Requests that fail before a response arrives (connection errors and
/// timeouts) are retried up to `max_retries` more times.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http_client: Client,
    max_retries: u32,
}

impl HttpTransport {
    /// Creates a transport with its own HTTP client. `None` disables the timeout.
    pub fn new(max_retries: u32, timeout: Option<Duration>) -> RpcResult<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RpcError::Config(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self::with_client(http_client, max_retries))
    }

    /// Creates a transport with an existing HTTP client.
    pub fn with_client(http_client: Client, max_retries: u32) -> Self {
        Self {
            http_client,
            max_retries,
        }
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }
}

impl Transport for HttpTransport {
    fn post_json(&self, url: &Url, body: String) -> RpcResult<TransportResponse> {
        let mut attempt = 0;
        loop {
            let sent = self
                .http_client
                .post(url.clone())
                .header(CONTENT_TYPE, "application/json")
                .body(body.clone())
                .send();

            match sent {
                Ok(response) => {
                    let status = response.status().as_u16();
                    let content = response.text().map_err(|e| RpcError::Transport {
                        status: Some(status),
                        message: format!("Failed to read response: {e}"),
                        body: None,
                    })?;
                    trace!(status, body = %content, "received response");
                    return Ok(TransportResponse::new(status, content));
                }
                Err(err) if attempt < self.max_retries && (err.is_connect() || err.is_timeout()) => {
                    attempt += 1;
                    warn!(%url, attempt, max_retries = self.max_retries, error = %err, "retrying request");
                }
                Err(err) => return Err(RpcError::connection(format!("HTTP error: {err}"))),
            }
        }
    }
}
