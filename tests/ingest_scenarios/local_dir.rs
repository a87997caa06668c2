//! Writing real files through `LocalDirStore`

use std::fs;

use zoolanding::{IngestConfig, IngestPipeline, InvocationRecord, LocalDirStore};

use crate::test_utils::*;

#[tokio::test]
async fn object_lands_under_bucket_directory() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = IngestPipeline::new(
        IngestConfig::default().bucket("raw"),
        LocalDirStore::new(dir.path()),
    );
    let body = r#"{"appName":"zoo_landing_page","timestamp":1756276595877,"name":"cta_click"}"#;

    let response = pipeline
        .handle(&InvocationRecord::with_body(body), Some(REQUEST_ID))
        .await;
    assert!(response.is_ok());

    let path = dir
        .path()
        .join("raw/zoo_landing_page/2025/08/27/1756276595877-567890ab.json");
    assert_eq!(fs::read_to_string(path).unwrap(), body);
}

#[tokio::test]
async fn traversal_in_app_name_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("store");
    let pipeline = IngestPipeline::new(IngestConfig::default(), LocalDirStore::new(&root));

    let response = pipeline
        .handle(
            &InvocationRecord::with_body(r#"{"appName":"../escape","timestamp":1724832000}"#),
            Some(REQUEST_ID),
        )
        .await;

    assert_eq!(response.status_code(), 500);
    assert!(!dir.path().join("escape").exists());
}
