//! Per-invocation outcome line
//!
//! Every invocation emits exactly one outcome event on the
//! `zoolanding::ingest` target: `info` when the payload was accepted, `error`
//! when it was not. Fields are filled in as the pipeline learns them, so a
//! failure after validation still carries the app name and timestamp.

use zoolanding_core::{IngestError, StorageKey};

/// Target for pipeline events.
pub const LOG_TARGET: &str = "zoolanding::ingest";

/// What is known about an invocation so far.
#[derive(Debug, Default, Clone)]
pub struct InvocationLog {
    request_id: Option<String>,
    app_name: Option<String>,
    timestamp_ms: Option<i64>,
    key: Option<String>,
}

impl InvocationLog {
    /// Start a log for an invocation.
    pub fn new(request_id: Option<&str>) -> Self {
        Self {
            request_id: request_id.map(str::to_string),
            ..Self::default()
        }
    }

    /// Correlation id, if the caller supplied one
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    pub(crate) fn set_app_name(&mut self, app_name: &str) {
        self.app_name = Some(app_name.to_string());
    }

    pub(crate) fn set_timestamp_ms(&mut self, timestamp_ms: i64) {
        self.timestamp_ms = Some(timestamp_ms);
    }

    pub(crate) fn set_key(&mut self, key: &StorageKey) {
        self.key = Some(key.to_string());
    }

    /// Emit the success line.
    pub fn stored(self, bucket: &str, size: usize, dry_run: bool) {
        let message = if dry_run {
            "Dry-run: would upload"
        } else {
            "Uploaded analytics payload"
        };
        tracing::info!(
            target: LOG_TARGET,
            request_id = self.request_id.as_deref(),
            app_name = self.app_name.as_deref(),
            timestamp_ms = self.timestamp_ms,
            bucket,
            key = self.key.as_deref(),
            size,
            dry_run,
            "{}",
            message
        );
    }

    /// Emit the failure line.
    pub fn failed(self, err: &IngestError) {
        let message = if err.is_client_error() {
            "Bad request"
        } else {
            "Ingest failed"
        };
        tracing::error!(
            target: LOG_TARGET,
            request_id = self.request_id.as_deref(),
            app_name = self.app_name.as_deref(),
            timestamp_ms = self.timestamp_ms,
            key = self.key.as_deref(),
            status = err.class().status_code(),
            error = %err,
            "{}",
            message
        );
    }
}
