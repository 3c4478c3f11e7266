/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! `fetch_extra` against a local one-shot HTTP server.

#![cfg(not(target_arch = "wasm32"))]

use conference_meeting_client::{MetadataClient, MetadataError};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

const TOKEN: &str = "0123456789abcdefghijklmn";

/// Talks to the loopback server directly, whatever proxy the environment sets.
fn client(url: &str) -> MetadataClient {
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    MetadataClient::with_client(url, http)
}

/// Serve exactly one connection with `status_line` and `body`, then return
/// the request head the client sent.
async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/api.php", listener.local_addr().unwrap());
    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            head.extend_from_slice(&buf[..n]);
        }
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        String::from_utf8_lossy(&head).into_owned()
    });
    (url, server)
}

#[tokio::test]
async fn ok_response_yields_metadata_and_sends_the_token() {
    let (url, server) = serve_once(
        "200 OK",
        r#"{"status":"OK","data":[{"userName":"alice","roomName":"room1"}]}"#,
    )
    .await;

    let extra = client(&url).fetch_extra(TOKEN).await.unwrap();

    assert_eq!(extra.user_name, "alice");
    assert_eq!(extra.room_name, "room1");
    let head = server.await.unwrap();
    assert!(
        head.starts_with(&format!("GET /api.php?token={TOKEN} ")),
        "unexpected request: {head}"
    );
}

#[tokio::test]
async fn non_2xx_answer_is_a_status_error() {
    let (url, server) = serve_once("500 Internal Server Error", "oops").await;

    let err = client(&url).fetch_extra(TOKEN).await.unwrap_err();

    assert!(err.is_network());
    assert!(
        matches!(err, MetadataError::Status { status: 500, ref body } if body == "oops"),
        "got {err:?}"
    );
    server.await.unwrap();
}

#[tokio::test]
async fn ok_status_with_failed_payload_is_malformed() {
    let (url, server) = serve_once("200 OK", r#"{"status":"FAIL"}"#).await;

    let err = client(&url).fetch_extra(TOKEN).await.unwrap_err();

    assert!(err.is_malformed(), "got {err:?}");
    server.await.unwrap();
}

#[tokio::test]
async fn unreachable_endpoint_is_a_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(&format!("http://{addr}/api.php"))
        .fetch_extra(TOKEN)
        .await
        .unwrap_err();

    assert!(err.is_network());
    assert!(matches!(err, MetadataError::Network(_)), "got {err:?}");
}
