//! Ingest pipeline
//!
//! Turns one invocation into one stored object:
//!
//! ```text
//! decode body -> parse JSON -> validate appName/timestamp -> normalize to ms
//!   -> UTC date -> key suffix -> storage key -> put original bytes -> respond
//! ```
//!
//! # Design
//!
//! [`IngestPipeline`] holds only immutable configuration and stateless
//! collaborators, so one instance serves every invocation of a process by
//! shared reference. The store, the calendar and the suffix source are type
//! parameters so tests can swap each of them.
//!
//! The pipeline never retries. A failed put is reported as a server error and
//! the caller decides whether to resend the whole invocation.
//!
//! # Example
//!
//! ```ignore
//! let pipeline = IngestPipeline::new(IngestConfig::from_env(), S3Store::from_env().await);
//! let response = pipeline.handle(&record, Some(&context.request_id)).await;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod outcome;

use zoolanding_config::IngestConfig;
use zoolanding_core::{
    short_id, ChronoCalendar, EventPayload, IngestError, IngestResponse, InvocationRecord,
    RandomHexSuffix, Result, StorageKey, SuffixSource, UtcCalendar,
};
use zoolanding_storage::{ObjectStore, PutObject};

pub use outcome::{InvocationLog, LOG_TARGET};

/// How many payload field names go into the debug line.
const DEBUG_FIELD_LIMIT: usize = 12;

/// A validated payload ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedUpload {
    /// Application name from the payload
    pub app_name: String,
    /// Normalized event time
    pub timestamp_ms: i64,
    /// Derived object key
    pub key: StorageKey,
    /// Original body text, byte for byte
    pub body: String,
}

impl PreparedUpload {
    /// Number of bytes that will be written.
    pub fn size(&self) -> usize {
        self.body.len()
    }
}

/// Validate-normalize-store pipeline
pub struct IngestPipeline<S, C = ChronoCalendar, R = RandomHexSuffix> {
    config: IngestConfig,
    store: S,
    calendar: C,
    suffixes: R,
}

impl<S: ObjectStore> IngestPipeline<S> {
    /// Create a pipeline with the chrono calendar and random suffixes.
    pub fn new(config: IngestConfig, store: S) -> Self {
        Self {
            config,
            store,
            calendar: ChronoCalendar,
            suffixes: RandomHexSuffix,
        }
    }
}

impl<S, C, R> IngestPipeline<S, C, R> {
    /// Replace the calendar.
    pub fn with_calendar<C2: UtcCalendar>(self, calendar: C2) -> IngestPipeline<S, C2, R> {
        IngestPipeline {
            config: self.config,
            store: self.store,
            calendar,
            suffixes: self.suffixes,
        }
    }

    /// Replace the source of suffixes for invocations without a request id.
    pub fn with_suffix_source<R2: SuffixSource>(self, suffixes: R2) -> IngestPipeline<S, C, R2> {
        IngestPipeline {
            config: self.config,
            store: self.store,
            calendar: self.calendar,
            suffixes,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &IngestConfig {
        &self.config
    }

    /// Underlying store
    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S, C, R> IngestPipeline<S, C, R>
where
    S: ObjectStore,
    C: UtcCalendar,
    R: SuffixSource,
{
    /// Handle a raw invocation event.
    ///
    /// The event must deserialize into an [`InvocationRecord`]; if it does
    /// not, the invocation fails as a server error.
    pub async fn handle_event(
        &self,
        event: serde_json::Value,
        request_id: Option<&str>,
    ) -> IngestResponse {
        match InvocationRecord::from_event(event) {
            Ok(record) => self.handle(&record, request_id).await,
            Err(err) => {
                InvocationLog::new(request_id).failed(&err);
                IngestResponse::from_error(&err)
            }
        }
    }

    /// Handle one invocation.
    ///
    /// Never fails: every error is classified into a client or server
    /// response and logged once.
    pub async fn handle(
        &self,
        record: &InvocationRecord,
        request_id: Option<&str>,
    ) -> IngestResponse {
        let mut log = InvocationLog::new(request_id);
        match self.ingest(record, &mut log).await {
            Ok(upload) => {
                let size = upload.size();
                log.stored(&self.config.bucket, size, self.config.dry_run);
                IngestResponse::Stored {
                    bucket: self.config.bucket.clone(),
                    key: upload.key.into_string(),
                    size,
                    dry_run: self.config.dry_run,
                }
            }
            Err(err) => {
                log.failed(&err);
                IngestResponse::from_error(&err)
            }
        }
    }

    async fn ingest(
        &self,
        record: &InvocationRecord,
        log: &mut InvocationLog,
    ) -> Result<PreparedUpload> {
        let upload = self.prepare(record, log)?;
        if self.config.dry_run {
            return Ok(upload);
        }

        let put = PutObject::json(
            self.config.bucket.clone(),
            upload.key.clone(),
            upload.body.as_bytes(),
        );
        self.store.put_object(put).await?;
        Ok(upload)
    }

    /// Run every step up to, but not including, the store write.
    pub fn prepare(
        &self,
        record: &InvocationRecord,
        log: &mut InvocationLog,
    ) -> Result<PreparedUpload> {
        let body = record.body_text()?;
        tracing::debug!(
            target: LOG_TARGET,
            request_id = log.request_id(),
            decoded_len = body.len(),
            base64 = record.is_base64(),
            "Decoded body"
        );

        let payload = EventPayload::parse(&body)?;

        let app_name = payload.app_name()?.to_string();
        log.set_app_name(&app_name);

        let timestamp_ms = payload.timestamp_ms()?;
        log.set_timestamp_ms(timestamp_ms);
        tracing::debug!(
            target: LOG_TARGET,
            request_id = log.request_id(),
            app_name = %app_name,
            timestamp_kind = payload.timestamp_kind(),
            timestamp_ms,
            keys = ?payload.field_names(DEBUG_FIELD_LIMIT),
            "Validated payload"
        );

        let date = self
            .calendar
            .date_of(timestamp_ms)
            .ok_or(IngestError::InvalidTimestamp)?;
        tracing::debug!(
            target: LOG_TARGET,
            request_id = log.request_id(),
            date = %date,
            "Derived date parts"
        );

        let suffix = short_id(log.request_id(), &self.suffixes);
        let key = StorageKey::derive(&app_name, date, timestamp_ms, &suffix);
        log.set_key(&key);

        Ok(PreparedUpload {
            app_name,
            timestamp_ms,
            key,
            body,
        })
    }
}
