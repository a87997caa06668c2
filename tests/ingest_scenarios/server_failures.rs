//! Store and envelope faults

use serde_json::json;
use zoolanding::InvocationRecord;

use crate::test_utils::*;

#[tokio::test]
async fn store_failure_is_opaque() {
    let (store, pipeline) = pipeline();
    store.fail_with("AccessDenied: not allowed to write to zoolanding-data-raw");

    let response = invoke(&pipeline, r#"{"appName":"a","timestamp":1724832000}"#).await;

    assert_eq!(response.status_code, 500);
    assert_eq!(
        body_json(&response),
        json!({ "ok": false, "error": "Internal error" })
    );
    assert!(!response.body.contains("AccessDenied"));
    assert!(store.is_empty());
}

#[tokio::test]
async fn store_recovers_for_the_next_invocation() {
    let (store, pipeline) = pipeline();
    let body = r#"{"appName":"a","timestamp":1724832000}"#;

    store.fail_with("connection reset");
    assert_eq!(invoke(&pipeline, body).await.status_code, 500);

    store.clear_failure();
    assert_eq!(invoke(&pipeline, body).await.status_code, 200);
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn invalid_base64_is_a_server_error() {
    let (store, pipeline) = pipeline();

    let response = pipeline
        .handle(&InvocationRecord::with_base64_body("%%% not base64 %%%"), Some(REQUEST_ID))
        .await;

    assert_eq!(response.status_code(), 500);
    assert_eq!(response.body().error, Some("Internal error"));
    assert!(store.is_empty());
}

#[tokio::test]
async fn line_wrapped_base64_is_a_server_error() {
    let (store, pipeline) = pipeline();

    let response = pipeline
        .handle(
            &InvocationRecord::with_base64_body(
                "eyJhcHBOYW1lIjoiYSIs\nInRpbWVzdGFtcCI6MTcyNDgzMjAwMH0=",
            ),
            Some(REQUEST_ID),
        )
        .await;

    assert_eq!(response.status_code(), 500);
    assert!(store.is_empty());
}

#[tokio::test]
async fn base64_of_invalid_utf8_is_a_server_error() {
    let (_store, pipeline) = pipeline();

    // "/w==" decodes to the single byte 0xFF.
    let response = pipeline
        .handle(&InvocationRecord::with_base64_body("/w=="), Some(REQUEST_ID))
        .await;
    assert_eq!(response.status_code(), 500);
}

#[tokio::test]
async fn malformed_envelope_is_a_server_error() {
    let (_store, pipeline) = pipeline();

    let response = pipeline
        .handle_event(
            json!({ "body": "{}", "isBase64Encoded": "yes" }),
            Some(REQUEST_ID),
        )
        .await;
    assert_eq!(response.status_code(), 500);
}
