//! Invocation responses
//!
//! [`IngestResponse`] is the typed outcome of one invocation. It renders into
//! an API-gateway proxy response ([`HttpResponse`]) whose body is one of:
//!
//! | Outcome | Status | Body |
//! |---------|--------|------|
//! | stored | 200 | `{"ok":true,"bucket":..,"key":..,"size":..}` |
//! | client error | 400 | `{"ok":false,"error":"<message>"}` |
//! | server error | 500 | `{"ok":false,"error":"Internal error"}` |

use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::{ErrorClass, IngestError, INTERNAL_ERROR_MESSAGE};

/// Outcome of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestResponse {
    /// Payload stored (or would have been, in dry-run mode)
    Stored {
        /// Target bucket
        bucket: String,
        /// Object key
        key: String,
        /// Bytes written
        size: usize,
        /// The write was skipped
        dry_run: bool,
    },
    /// Malformed request
    ClientError {
        /// Message for the caller
        message: String,
    },
    /// Internal failure; detail was logged, not returned
    ServerError,
}

impl IngestResponse {
    /// Response for a failed invocation.
    pub fn from_error(err: &IngestError) -> Self {
        match err.class() {
            ErrorClass::Client => IngestResponse::ClientError {
                message: err.public_message(),
            },
            ErrorClass::Server => IngestResponse::ServerError,
        }
    }

    /// HTTP status code.
    pub fn status_code(&self) -> u16 {
        match self {
            IngestResponse::Stored { .. } => 200,
            IngestResponse::ClientError { .. } => ErrorClass::Client.status_code(),
            IngestResponse::ServerError => ErrorClass::Server.status_code(),
        }
    }

    /// Whether the payload was accepted.
    pub fn is_ok(&self) -> bool {
        matches!(self, IngestResponse::Stored { .. })
    }

    /// The JSON document returned as the response body.
    pub fn body(&self) -> ResponseBody<'_> {
        match self {
            IngestResponse::Stored {
                bucket,
                key,
                size,
                dry_run,
            } => ResponseBody {
                ok: true,
                bucket: Some(bucket.as_str()),
                key: Some(key.as_str()),
                size: Some(*size),
                error: None,
                dry_run: dry_run.then_some(true),
            },
            IngestResponse::ClientError { message } => ResponseBody::failure(message),
            IngestResponse::ServerError => ResponseBody::failure(INTERNAL_ERROR_MESSAGE),
        }
    }

    /// Render as an API-gateway proxy response.
    pub fn into_http(self) -> HttpResponse {
        let body = serde_json::to_string(&self.body())
            .unwrap_or_else(|_| format!(r#"{{"ok":false,"error":"{}"}}"#, INTERNAL_ERROR_MESSAGE));
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        HttpResponse {
            status_code: self.status_code(),
            headers,
            body,
        }
    }
}

/// JSON body of a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody<'a> {
    /// Whether the payload was accepted
    pub ok: bool,
    /// Target bucket, on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket: Option<&'a str>,
    /// Object key, on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<&'a str>,
    /// Bytes written, on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,
    /// Message, on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'a str>,
    /// Present and true only in dry-run mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
}

impl<'a> ResponseBody<'a> {
    fn failure(message: &'a str) -> Self {
        Self {
            ok: false,
            bucket: None,
            key: None,
            size: None,
            error: Some(message),
            dry_run: None,
        }
    }
}

/// API-gateway proxy response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpResponse {
    /// HTTP status code
    pub status_code: u16,
    /// Response headers
    pub headers: BTreeMap<String, String>,
    /// JSON text of the response body
    pub body: String,
}
