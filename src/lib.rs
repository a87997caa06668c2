//! Zoolanding raw ingest
//!
//! Accepts one analytics event per invocation, checks that it names its
//! application and carries a timestamp, and writes the original bytes to an
//! object store under a date-partitioned key:
//!
//! ```text
//! <appName>/<YYYY>/<MM>/<DD>/<timestamp_ms>-<suffix>.json
//! ```
//!
//! # Quick Start
//!
//! ```
//! use zoolanding::{IngestConfig, IngestPipeline, InMemoryStore, InvocationRecord};
//!
//! # let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! # rt.block_on(async {
//! let pipeline = IngestPipeline::new(IngestConfig::default(), InMemoryStore::new());
//! let record = InvocationRecord::with_body(r#"{"appName":"zoo","timestamp":1724832000}"#);
//!
//! let response = pipeline.handle(&record, Some("12345678-aaaa-bbbb-cccc-1234567890ab")).await;
//! assert_eq!(response.status_code(), 200);
//! # });
//! ```
//!
//! The Lambda binary and the local harness live in `zoolanding-cli`.

pub use zoolanding_config::{IngestConfig, LogLevel, DEFAULT_BUCKET};
pub use zoolanding_core::{
    normalize_millis, short_id, ChronoCalendar, DateParts, ErrorClass, EventPayload,
    FixedSuffix, HttpResponse, IngestError, IngestResponse, InvocationRecord, RandomHexSuffix,
    StorageKey, SuffixSource, UtcCalendar,
};
pub use zoolanding_pipeline::{IngestPipeline, InvocationLog, PreparedUpload};
pub use zoolanding_storage::{
    InMemoryStore, LocalDirStore, ObjectStore, PutObject, StoreError, StoredObject,
};
