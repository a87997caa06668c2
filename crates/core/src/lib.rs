//! Core types for zoolanding raw ingest
//!
//! This crate holds everything an invocation needs that does not touch I/O:
//! - Invocation envelope and body extraction
//! - Payload parsing and required-field validation
//! - Timestamp normalization and UTC date derivation
//! - Storage key construction
//! - Error classification and response rendering

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod calendar;
pub mod error;
pub mod invocation;
pub mod key;
pub mod payload;
pub mod response;
pub mod suffix;
pub mod timestamp;

pub use calendar::{ChronoCalendar, DateParts, UtcCalendar};
pub use error::{ErrorClass, IngestError, Result, INTERNAL_ERROR_MESSAGE};
pub use invocation::InvocationRecord;
pub use key::StorageKey;
pub use payload::EventPayload;
pub use response::{HttpResponse, IngestResponse, ResponseBody};
pub use suffix::{short_id, FixedSuffix, RandomHexSuffix, SuffixSource, SUFFIX_LEN};
pub use timestamp::{normalize_millis, MILLIS_THRESHOLD};
