//! Local harness
//!
//! Runs the pipeline once against a sample or user-supplied event, without
//! the Lambda runtime. Without an output directory nothing is written: the
//! run is forced into dry-run mode.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use serde_json::{json, Value};
use zoolanding_config::IngestConfig;
use zoolanding_core::HttpResponse;
use zoolanding_pipeline::IngestPipeline;
use zoolanding_storage::{InMemoryStore, LocalDirStore};

/// Request id used when the caller does not pick one.
pub const SAMPLE_REQUEST_ID: &str = "12345678-aaaa-bbbb-cccc-1234567890ab";

/// A typical landing page click, wrapped as a proxy event.
pub fn sample_event() -> Value {
    let payload = json!({
        "appName": "zoo_landing_page",
        "timestamp": 1756276595877i64,
        "name": "cta_click",
    });
    json!({
        "isBase64Encoded": false,
        "body": payload.to_string(),
    })
}

/// Read an event from a JSON file.
pub fn load_event(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read event file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("event file {} is not valid JSON", path.display()))
}

/// One local invocation.
#[derive(Debug, Clone)]
pub struct LocalRun {
    /// Event to feed the pipeline
    pub event: Value,
    /// Correlation id
    pub request_id: String,
    /// Write objects under this directory; `None` means dry-run
    pub out_dir: Option<PathBuf>,
}

impl LocalRun {
    /// Run with the sample event and request id.
    pub fn sample() -> Self {
        Self {
            event: sample_event(),
            request_id: SAMPLE_REQUEST_ID.to_string(),
            out_dir: None,
        }
    }

    /// Execute the invocation and return the HTTP-shaped response.
    pub async fn execute(self, config: IngestConfig) -> HttpResponse {
        let request_id = Some(self.request_id.as_str());
        let response = match self.out_dir {
            Some(root) => {
                IngestPipeline::new(config, LocalDirStore::new(root))
                    .handle_event(self.event, request_id)
                    .await
            }
            None => {
                IngestPipeline::new(config.dry_run(true), InMemoryStore::new())
                    .handle_event(self.event, request_id)
                    .await
            }
        };
        response.into_http()
    }
}
