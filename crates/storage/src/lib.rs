//! Object store layer for zoolanding raw ingest
//!
//! The pipeline writes each accepted payload with a single [`ObjectStore::put_object`]
//! call. Backends:
//! - [`InMemoryStore`]: process-local map, for tests and the local harness
//! - [`LocalDirStore`]: files under a root directory, for local runs
//! - `S3Store` (feature `s3`): Amazon S3 via `aws-sdk-s3`
//!
//! A put is all or nothing. Backends never retry; a failed put surfaces
//! immediately as a [`StoreError`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod local;
pub mod memory;
#[cfg(feature = "s3")]
pub mod s3;

use std::future::Future;
use std::sync::Arc;

use thiserror::Error;
use zoolanding_core::{IngestError, StorageKey};

pub use local::LocalDirStore;
pub use memory::{InMemoryStore, StoredObject};
#[cfg(feature = "s3")]
pub use s3::S3Store;

/// Content type tag for stored payloads.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A single object write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutObject {
    /// Target bucket
    pub bucket: String,
    /// Object key
    pub key: StorageKey,
    /// Object bytes
    pub body: Vec<u8>,
    /// Content type tag
    pub content_type: String,
}

impl PutObject {
    /// A JSON object write.
    pub fn json(bucket: impl Into<String>, key: StorageKey, body: impl Into<Vec<u8>>) -> Self {
        Self {
            bucket: bucket.into(),
            key,
            body: body.into(),
            content_type: JSON_CONTENT_TYPE.to_string(),
        }
    }

    /// Size of the body in bytes.
    pub fn size(&self) -> usize {
        self.body.len()
    }
}

/// Object store failure
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend rejected or failed the request
    #[error("put {bucket}/{key} failed: {message}")]
    Backend {
        /// Target bucket
        bucket: String,
        /// Object key
        key: String,
        /// Backend error detail
        message: String,
    },

    /// Local filesystem error
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path being written
        path: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Key cannot be mapped onto this backend
    #[error("key {key:?} rejected: {reason}")]
    InvalidKey {
        /// Offending key
        key: String,
        /// Why it was rejected
        reason: &'static str,
    },
}

impl From<StoreError> for IngestError {
    fn from(err: StoreError) -> Self {
        IngestError::Store {
            reason: err.to_string(),
        }
    }
}

/// Destination for raw payloads.
pub trait ObjectStore: Send + Sync {
    /// Write one object, replacing any object already at that key.
    fn put_object(&self, object: PutObject)
        -> impl Future<Output = Result<(), StoreError>> + Send;
}

impl<T: ObjectStore> ObjectStore for Arc<T> {
    fn put_object(
        &self,
        object: PutObject,
    ) -> impl Future<Output = Result<(), StoreError>> + Send {
        (**self).put_object(object)
    }
}

impl<T: ObjectStore> ObjectStore for &T {
    fn put_object(
        &self,
        object: PutObject,
    ) -> impl Future<Output = Result<(), StoreError>> + Send {
        (**self).put_object(object)
    }
}
