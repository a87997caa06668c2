//! In-memory object store
//!
//! Keeps objects in a `BTreeMap` keyed by (bucket, key) behind a
//! `parking_lot::Mutex`. The lock is never held across an await point.
//!
//! # Failure injection
//!
//! [`InMemoryStore::fail_with`] makes every subsequent put fail with a backend
//! error, which is how tests exercise the storage-failure path.

use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::future::Future;

use crate::{ObjectStore, PutObject, StoreError};

/// An object as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    /// Object bytes
    pub body: Vec<u8>,
    /// Content type tag
    pub content_type: String,
}

/// Process-local object store
#[derive(Debug, Default)]
pub struct InMemoryStore {
    objects: Mutex<BTreeMap<(String, String), StoredObject>>,
    failure: Mutex<Option<String>>,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following put fail with `message`.
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.failure.lock() = Some(message.into());
    }

    /// Let puts succeed again.
    pub fn clear_failure(&self) {
        *self.failure.lock() = None;
    }

    /// Look up an object.
    pub fn get(&self, bucket: &str, key: &str) -> Option<StoredObject> {
        self.objects
            .lock()
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
    }

    /// All keys in a bucket, sorted.
    pub fn keys(&self, bucket: &str) -> Vec<String> {
        self.objects
            .lock()
            .keys()
            .filter(|(b, _)| b == bucket)
            .map(|(_, k)| k.clone())
            .collect()
    }

    /// Number of objects across all buckets
    pub fn len(&self) -> usize {
        self.objects.lock().len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.objects.lock().is_empty()
    }

    fn put_sync(&self, object: PutObject) -> Result<(), StoreError> {
        if let Some(message) = self.failure.lock().clone() {
            return Err(StoreError::Backend {
                bucket: object.bucket,
                key: object.key.into_string(),
                message,
            });
        }
        self.objects.lock().insert(
            (object.bucket, object.key.into_string()),
            StoredObject {
                body: object.body,
                content_type: object.content_type,
            },
        );
        Ok(())
    }
}

impl ObjectStore for InMemoryStore {
    fn put_object(
        &self,
        object: PutObject,
    ) -> impl Future<Output = Result<(), StoreError>> + Send {
        std::future::ready(self.put_sync(object))
    }
}
