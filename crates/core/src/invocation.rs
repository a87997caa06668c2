//! Invocation envelope
//!
//! An [`InvocationRecord`] is what the HTTP front door hands us per request:
//! a body (usually a string, sometimes base64 encoded) and an encoding flag.
//! Any other envelope fields (headers, request context, ...) are ignored.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::error::{IngestError, Result};

/// Input envelope delivered to the pipeline per request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationRecord {
    /// Request body. Normally a string; absent or `null` when the caller sent nothing.
    #[serde(default)]
    pub body: Option<serde_json::Value>,

    /// Whether `body` is base64 encoded. Absent or `null` means false.
    #[serde(default)]
    pub is_base64_encoded: Option<bool>,
}

impl InvocationRecord {
    /// Envelope carrying a plain text body.
    pub fn with_body(body: impl Into<String>) -> Self {
        Self {
            body: Some(serde_json::Value::String(body.into())),
            is_base64_encoded: Some(false),
        }
    }

    /// Envelope carrying a base64 encoded body.
    pub fn with_base64_body(encoded: impl Into<String>) -> Self {
        Self {
            body: Some(serde_json::Value::String(encoded.into())),
            is_base64_encoded: Some(true),
        }
    }

    /// Read an envelope out of an arbitrary JSON event.
    ///
    /// The envelope shape is guaranteed by the invoking infrastructure, so a
    /// mismatch is a server error rather than a client error.
    pub fn from_event(event: serde_json::Value) -> Result<Self> {
        serde_json::from_value(event).map_err(|e| IngestError::Envelope {
            reason: e.to_string(),
        })
    }

    /// Whether the encoding flag is set.
    pub fn is_base64(&self) -> bool {
        self.is_base64_encoded.unwrap_or(false)
    }

    /// Extract the body as text.
    ///
    /// - absent, `null` or `""` → [`IngestError::MissingBody`]
    /// - base64 flagged string → strict standard-alphabet decode, then UTF-8;
    ///   whitespace or line breaks inside the encoded text are rejected
    /// - base64 flagged non-string → [`IngestError::EncodedBodyNotText`]
    /// - plain string → returned as is
    /// - any other JSON value → re-serialized to compact JSON text
    pub fn body_text(&self) -> Result<String> {
        let body = match &self.body {
            None | Some(serde_json::Value::Null) => return Err(IngestError::MissingBody),
            Some(serde_json::Value::String(s)) if s.is_empty() => {
                return Err(IngestError::MissingBody)
            }
            Some(body) => body,
        };

        if self.is_base64() {
            let encoded = body.as_str().ok_or(IngestError::EncodedBodyNotText)?;
            let bytes = STANDARD.decode(encoded)?;
            return Ok(String::from_utf8(bytes)?);
        }

        match body {
            serde_json::Value::String(s) => Ok(s.clone()),
            // Some invokers hand over an already-parsed object
            other => Ok(other.to_string()),
        }
    }
}
