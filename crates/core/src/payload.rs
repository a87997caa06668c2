//! Event payload parsing and validation
//!
//! The payload is parsed only to read `appName` and `timestamp`; every other
//! field is opaque. The parsed value is never written back anywhere, the
//! original body text is what gets stored.

use serde::{Deserialize, Serialize};
use std::ops::Deref;
use std::str::FromStr;

use crate::error::{IngestError, Result};
use crate::timestamp::normalize_millis;

/// Name of the required application field
pub const APP_NAME_FIELD: &str = "appName";

/// Name of the required timestamp field
pub const TIMESTAMP_FIELD: &str = "timestamp";

/// Parsed event body
///
/// Newtype around `serde_json::Value` with read-only access through `Deref`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventPayload(serde_json::Value);

impl EventPayload {
    /// Parse body text.
    pub fn parse(text: &str) -> Result<Self> {
        text.parse()
    }

    /// The `appName` field.
    ///
    /// Must be a string with at least one non-whitespace character.
    pub fn app_name(&self) -> Result<&str> {
        match self.0.get(APP_NAME_FIELD) {
            Some(serde_json::Value::String(name)) if !name.trim().is_empty() => Ok(name.as_str()),
            _ => Err(IngestError::InvalidAppName),
        }
    }

    /// The `timestamp` field normalized to milliseconds.
    pub fn timestamp_ms(&self) -> Result<i64> {
        let raw = self
            .0
            .get(TIMESTAMP_FIELD)
            .ok_or(IngestError::InvalidTimestamp)?;
        normalize_millis(raw)
    }

    /// JSON type name of the raw `timestamp` field, for diagnostics.
    pub fn timestamp_kind(&self) -> &'static str {
        match self.0.get(TIMESTAMP_FIELD) {
            None => "missing",
            Some(serde_json::Value::Null) => "null",
            Some(serde_json::Value::Bool(_)) => "bool",
            Some(serde_json::Value::Number(n)) if n.is_f64() => "float",
            Some(serde_json::Value::Number(_)) => "int",
            Some(serde_json::Value::String(_)) => "string",
            Some(serde_json::Value::Array(_)) => "array",
            Some(serde_json::Value::Object(_)) => "object",
        }
    }

    /// Up to `limit` top-level field names.
    pub fn field_names(&self, limit: usize) -> Vec<&str> {
        self.0
            .as_object()
            .map(|obj| obj.keys().take(limit).map(String::as_str).collect())
            .unwrap_or_default()
    }
}

impl FromStr for EventPayload {
    type Err = IngestError;

    fn from_str(s: &str) -> Result<Self> {
        serde_json::from_str(s)
            .map(EventPayload)
            .map_err(IngestError::InvalidJson)
    }
}

impl Deref for EventPayload {
    type Target = serde_json::Value;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
