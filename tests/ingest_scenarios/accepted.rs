//! Payloads that are stored

use base64::Engine as _;
use serde_json::json;
use zoolanding::{IngestConfig, InvocationRecord, DEFAULT_BUCKET};

use crate::test_utils::*;

#[tokio::test]
async fn millisecond_timestamp_is_kept() {
    let (store, pipeline) = pipeline();
    let body = r#"{"appName":"zoo_landing_page","timestamp":1756276595877,"name":"cta_click"}"#;

    let response = invoke(&pipeline, body).await;

    assert_eq!(response.status_code, 200);
    let parsed = body_json(&response);
    assert_eq!(parsed["ok"], true);
    assert_eq!(parsed["bucket"], DEFAULT_BUCKET);
    assert_eq!(
        parsed["key"],
        "zoo_landing_page/2025/08/27/1756276595877-567890ab.json"
    );
    assert_eq!(parsed["size"], body.len());
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn second_timestamp_is_scaled() {
    let (store, pipeline) = pipeline();

    let response = invoke(&pipeline, r#"{"appName":"a","timestamp":1724832000}"#).await;

    assert_eq!(response.status_code, 200);
    assert_eq!(
        body_json(&response)["key"],
        "a/2024/08/28/1724832000000-567890ab.json"
    );
    assert_eq!(
        store.keys(DEFAULT_BUCKET),
        vec!["a/2024/08/28/1724832000000-567890ab.json".to_string()]
    );
}

#[tokio::test]
async fn fractional_seconds_round_to_nearest_millisecond() {
    let (_store, pipeline) = pipeline();

    let response = invoke(&pipeline, r#"{"appName":"a","timestamp":1724832000.0006}"#).await;
    assert_eq!(
        body_json(&response)["key"],
        "a/2024/08/28/1724832000001-567890ab.json"
    );
}

#[tokio::test]
async fn stored_bytes_are_the_original_text() {
    let (store, pipeline) = pipeline();
    // Key order, spacing and number formatting must survive untouched.
    let body = "{ \"timestamp\" : 1.7248320E9,\n  \"appName\":\"zoo\", \"nested\": {\"b\":1,\"a\":[]} }";

    let response = invoke(&pipeline, body).await;
    let key = body_json(&response)["key"].as_str().unwrap().to_string();

    let object = store.get(DEFAULT_BUCKET, &key).unwrap();
    assert_eq!(object.body, body.as_bytes());
    assert_eq!(object.content_type, "application/json");
}

#[tokio::test]
async fn base64_body_is_decoded_before_storing() {
    let (store, pipeline) = pipeline();
    let body = json!({ "appName": "b64", "timestamp": 1724832000, "emoji": "🦒" }).to_string();
    let record = InvocationRecord::with_base64_body(
        base64::engine::general_purpose::STANDARD.encode(&body),
    );

    let response = pipeline.handle(&record, Some(REQUEST_ID)).await.into_http();

    assert_eq!(response.status_code, 200);
    let key = body_json(&response)["key"].as_str().unwrap().to_string();
    assert_eq!(store.get(DEFAULT_BUCKET, &key).unwrap().body, body.into_bytes());
}

#[tokio::test]
async fn missing_request_id_uses_generated_suffix() {
    let (_store, pipeline) = pipeline();

    let response = pipeline
        .handle(
            &InvocationRecord::with_body(r#"{"appName":"a","timestamp":1724832000}"#),
            None,
        )
        .await;

    assert_eq!(
        response.body().key,
        Some("a/2024/08/28/1724832000000-0000beef.json")
    );
}

#[tokio::test]
async fn app_name_is_used_verbatim() {
    let (_store, pipeline) = pipeline();

    let response = invoke(&pipeline, r#"{"appName":" zoo/landing ","timestamp":1724832000}"#).await;
    assert_eq!(
        body_json(&response)["key"],
        " zoo/landing /2024/08/28/1724832000000-567890ab.json"
    );
}

#[tokio::test]
async fn configured_bucket_is_reported() {
    let (store, pipeline) = pipeline_with(IngestConfig::default().bucket("analytics-raw-dev"));

    let response = invoke(&pipeline, r#"{"appName":"a","timestamp":1724832000}"#).await;

    assert_eq!(body_json(&response)["bucket"], "analytics-raw-dev");
    assert_eq!(store.keys("analytics-raw-dev").len(), 1);
    assert!(store.keys(DEFAULT_BUCKET).is_empty());
}

#[tokio::test]
async fn dry_run_skips_the_write() {
    let (store, pipeline) = pipeline_with(IngestConfig::default().dry_run(true));

    let response = invoke(&pipeline, r#"{"appName":"a","timestamp":1724832000}"#).await;

    assert_eq!(response.status_code, 200);
    let parsed = body_json(&response);
    assert_eq!(parsed["dryRun"], true);
    assert_eq!(parsed["key"], "a/2024/08/28/1724832000000-567890ab.json");
    assert!(store.is_empty());
}

#[tokio::test]
async fn production_response_has_no_dry_run_field() {
    let (_store, pipeline) = pipeline();

    let response = invoke(&pipeline, r#"{"appName":"a","timestamp":1724832000}"#).await;
    let parsed = body_json(&response);

    let mut fields: Vec<_> = parsed.as_object().unwrap().keys().cloned().collect();
    fields.sort();
    assert_eq!(fields, vec!["bucket", "key", "ok", "size"]);
    assert_eq!(response.headers["Content-Type"], "application/json");
}
