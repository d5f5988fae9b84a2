//! HTTP transport tests against a local mock node.

use mockito::{Matcher, Server};
use neo_jsonrpc_client::{ContractArg, ProtocolError, RpcClient, RpcError, StorageValue};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

fn localhost_binding_permitted() -> bool {
    TcpListener::bind("127.0.0.1:0").is_ok()
}

fn client_for(server: &mockito::ServerGuard) -> RpcClient {
    let address = server.host_with_port();
    let (host, port) = address.rsplit_once(':').unwrap();
    RpcClient::builder()
        .host(host)
        .port(port.parse().unwrap())
        .http_max_retries(0)
        .build()
        .unwrap()
}

#[test]
fn get_block_count_over_http() {
    if !localhost_binding_permitted() {
        return;
    }
    let mut server = Server::new();
    let m = server
        .mock("POST", "/")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Regex(
            r#""method"\s*:\s*"getblockcount".*"params"\s*:\s*\[\s*\]"#.to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"jsonrpc":"2.0","id":0,"result":2351}"#)
        .create();

    let client = client_for(&server);
    assert_eq!(client.get_block_count().unwrap(), 2351);
    m.assert();
}

#[test]
fn get_storage_over_http() {
    if !localhost_binding_permitted() {
        return;
    }
    let mut server = Server::new();
    let _m = server
        .mock("POST", "/")
        .match_body(Matcher::Regex(
            r#""method"\s*:\s*"getstorage".*"params"\s*:\s*\[\s*"ecc6b20d3ccac1ee9ef109af5a7cdb85706b1df9"\s*,\s*"746f74616c537570706c79"\s*\]"#
                .to_string(),
        ))
        .with_status(200)
        .with_body(r#"{"jsonrpc":"2.0","id":0,"result":"00c040b571e803"}"#)
        .create();

    let client = client_for(&server);
    let value = client
        .get_storage("ecc6b20d3ccac1ee9ef109af5a7cdb85706b1df9", "totalSupply")
        .unwrap();
    assert_eq!(
        value,
        StorageValue::Bytes(vec![0x00, 0xc0, 0x40, 0xb5, 0x71, 0xe8, 0x03])
    );
}

#[test]
fn invoke_function_over_http() {
    if !localhost_binding_permitted() {
        return;
    }
    let mut server = Server::new();
    let _m = server
        .mock("POST", "/")
        .match_body(Matcher::Regex(
            r#""method"\s*:\s*"invokefunction".*"params"\s*:\s*\[\s*"ecc6b20d3ccac1ee9ef109af5a7cdb85706b1df9"\s*,\s*"decimals"\s*,\s*\[\s*\]\s*\]"#
                .to_string(),
        ))
        .with_status(200)
        .with_body(
            r#"{"jsonrpc":"2.0","id":0,"result":{"script":"00c108646563696d616c73","state":"HALT, BREAK","gas_consumed":"0.217","stack":[{"type":"Integer","value":"8"}]}}"#,
        )
        .create();

    let client = client_for(&server);
    let result = client
        .invoke_function(
            "ecc6b20d3ccac1ee9ef109af5a7cdb85706b1df9",
            "decimals",
            &[] as &[ContractArg],
        )
        .unwrap();
    assert!(result.is_halt());
    assert_eq!(result.stack.unwrap().len(), 1);
}

#[test]
fn server_error_status_over_http() {
    if !localhost_binding_permitted() {
        return;
    }
    let mut server = Server::new();
    let _m = server
        .mock("POST", "/")
        .with_status(500)
        .with_body("oops")
        .create();

    let client = client_for(&server);
    let err = client.get_version().unwrap_err();
    match err {
        RpcError::Transport { status, body, .. } => {
            assert_eq!(status, Some(500));
            assert_eq!(body.as_deref(), Some("oops"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn garbage_body_over_http() {
    if !localhost_binding_permitted() {
        return;
    }
    let mut server = Server::new();
    let _m = server
        .mock("POST", "/")
        .with_status(200)
        .with_body("<html>not json</html>")
        .create();

    let client = client_for(&server);
    let err = client.get_best_block_hash().unwrap_err();
    assert!(matches!(
        err,
        RpcError::Protocol(ProtocolError::InvalidJson { .. })
    ));
}

#[test]
fn unreachable_node_is_a_transport_error() {
    let port = match TcpListener::bind("127.0.0.1:0") {
        Ok(listener) => listener.local_addr().unwrap().port(),
        Err(_) => return,
    };

    let client = RpcClient::builder()
        .host("127.0.0.1")
        .port(port)
        .http_max_retries(2)
        .build()
        .unwrap();
    let err = client.get_connection_count().unwrap_err();
    assert!(err.is_transport());
    assert_eq!(err.status(), None);
    assert_eq!(client.next_request_id(), 1);
}

#[test]
fn sub_second_timeout_allows_fast_responses() {
    if !localhost_binding_permitted() {
        return;
    }
    let mut server = Server::new();
    let _m = server
        .mock("POST", "/")
        .with_status(200)
        .with_body(r#"{"jsonrpc":"2.0","id":0,"result":7}"#)
        .create();

    let address = server.host_with_port();
    let (host, port) = address.rsplit_once(':').unwrap();
    let client = RpcClient::builder()
        .host(host)
        .port(port.parse().unwrap())
        .timeout(Duration::from_millis(500))
        .build()
        .unwrap();

    assert_eq!(client.config().timeout_ms, 500);
    assert_eq!(client.get_block_count().unwrap(), 7);
}

/// Accepts connections without ever answering and counts them.
fn silent_node() -> Option<(u16, Arc<AtomicUsize>)> {
    let listener = TcpListener::bind("127.0.0.1:0").ok()?;
    let port = listener.local_addr().ok()?.port();
    let accepted = Arc::new(AtomicUsize::new(0));
    let counter = accepted.clone();
    std::thread::spawn(move || {
        let mut open = Vec::new();
        for stream in listener.incoming().flatten() {
            counter.fetch_add(1, Ordering::SeqCst);
            open.push(stream);
        }
    });
    Some((port, accepted))
}

fn attempts_against_silent_node(max_retries: u32) -> Option<usize> {
    let (port, accepted) = silent_node()?;
    let client = RpcClient::builder()
        .host("127.0.0.1")
        .port(port)
        .timeout(Duration::from_millis(200))
        .http_max_retries(max_retries)
        .build()
        .unwrap();

    let err = client.get_block_count().unwrap_err();
    assert!(err.is_transport());
    assert_eq!(err.status(), None);
    Some(accepted.load(Ordering::SeqCst))
}

#[test]
fn timed_out_requests_are_retried() {
    let Some(attempts) = attempts_against_silent_node(2) else {
        return;
    };
    assert_eq!(attempts, 3);
}

#[test]
fn no_retries_means_a_single_attempt() {
    let Some(attempts) = attempts_against_silent_node(0) else {
        return;
    };
    assert_eq!(attempts, 1);
}
