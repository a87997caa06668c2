//! Storage key derivation
//!
//! Keys look like `<appName>/<YYYY>/<MM>/<DD>/<timestampMs>-<suffix>.json`.
//! The app name is used verbatim as the first path segment: callers are
//! trusted to send a name that is already a safe path segment.

use serde::Serialize;
use std::fmt;

use crate::calendar::DateParts;

/// Object key under which one raw payload is stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct StorageKey(String);

impl StorageKey {
    /// Build the key for an event.
    pub fn derive(app_name: &str, date: DateParts, timestamp_ms: i64, suffix: &str) -> Self {
        StorageKey(format!(
            "{}/{}/{}/{}/{}-{}.json",
            app_name,
            date.year_segment(),
            date.month_segment(),
            date.day_segment(),
            timestamp_ms,
            suffix
        ))
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the owned string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StorageKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
