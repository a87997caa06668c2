//! Malformed requests

use serde_json::json;
use zoolanding::InvocationRecord;

use crate::test_utils::*;

async fn expect_client_error(body: &str, message: &str) {
    let (store, pipeline) = pipeline();

    let response = invoke(&pipeline, body).await;

    assert_eq!(response.status_code, 400, "body {body:?}");
    assert_eq!(body_json(&response), json!({ "ok": false, "error": message }));
    assert!(store.is_empty());
}

#[tokio::test]
async fn missing_body() {
    let (store, pipeline) = pipeline();

    let response = pipeline
        .handle_event(json!({ "isBase64Encoded": false }), Some(REQUEST_ID))
        .await
        .into_http();

    assert_eq!(response.status_code, 400);
    assert_eq!(body_json(&response)["error"], "Missing body");
    assert!(store.is_empty());
}

#[tokio::test]
async fn empty_body() {
    expect_client_error("", "Missing body").await;
}

#[tokio::test]
async fn body_is_not_json() {
    expect_client_error("not json", "Body is not valid JSON").await;
}

#[tokio::test]
async fn app_name_missing() {
    expect_client_error(r#"{"timestamp":123}"#, "Missing or invalid appName").await;
}

#[tokio::test]
async fn app_name_blank_or_wrong_type() {
    for body in [
        r#"{"appName":"","timestamp":1724832000}"#,
        r#"{"appName":"   ","timestamp":1724832000}"#,
        r#"{"appName":42,"timestamp":1724832000}"#,
        r#"{"appName":null,"timestamp":1724832000}"#,
    ] {
        expect_client_error(body, "Missing or invalid appName").await;
    }
}

#[tokio::test]
async fn timestamp_not_a_number() {
    expect_client_error(
        r#"{"appName":"x","timestamp":"not-a-number"}"#,
        "Missing or invalid timestamp",
    )
    .await;
}

#[tokio::test]
async fn timestamp_missing_or_wrong_type() {
    for body in [
        r#"{"appName":"x"}"#,
        r#"{"appName":"x","timestamp":null}"#,
        r#"{"appName":"x","timestamp":true}"#,
        r#"{"appName":"x","timestamp":[1724832000]}"#,
    ] {
        expect_client_error(body, "Missing or invalid timestamp").await;
    }
}

#[tokio::test]
async fn timestamp_off_the_calendar() {
    expect_client_error(
        r#"{"appName":"x","timestamp":1e300}"#,
        "Missing or invalid timestamp",
    )
    .await;
}

#[tokio::test]
async fn non_finite_number_literals_are_not_json() {
    expect_client_error(r#"{"appName":"x","timestamp":NaN}"#, "Body is not valid JSON").await;
    expect_client_error(r#"{"appName":"x","timestamp":1e400}"#, "Body is not valid JSON").await;
}

#[tokio::test]
async fn json_that_is_not_an_object() {
    expect_client_error("[1,2,3]", "Missing or invalid appName").await;
    expect_client_error("\"zoo\"", "Missing or invalid appName").await;
}

#[tokio::test]
async fn base64_flag_on_non_text_body() {
    let (_store, pipeline) = pipeline();
    let record = InvocationRecord {
        body: Some(json!({ "appName": "a", "timestamp": 1724832000 })),
        is_base64_encoded: Some(true),
    };

    let response = pipeline.handle(&record, Some(REQUEST_ID)).await;
    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn verdict_does_not_depend_on_previous_invocations() {
    let (_store, pipeline) = pipeline();
    let body = r#"{"appName":"x","timestamp":"soon"}"#;

    let first = invoke(&pipeline, body).await;
    let second = invoke(&pipeline, body).await;
    assert_eq!(first, second);
}
