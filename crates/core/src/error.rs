//! Error types for the ingest pipeline
//!
//! Every failure an invocation can hit is an [`IngestError`]. Each variant is
//! classified as either a client error (the caller sent a malformed request)
//! or a server error (anything else). Client errors carry a specific message
//! that is safe to return; server errors are reported to callers with a fixed
//! opaque message and their detail only goes to the log.

use thiserror::Error;

/// Message returned to callers for every server error.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal error";

/// Who is at fault for a failed invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    /// The request was malformed (HTTP 400).
    Client,
    /// The request was fine but we could not handle it (HTTP 500).
    Server,
}

impl ErrorClass {
    /// HTTP status code for this class.
    pub fn status_code(self) -> u16 {
        match self {
            ErrorClass::Client => 400,
            ErrorClass::Server => 500,
        }
    }
}

/// Failure of a single ingest invocation.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Body field absent, null or empty
    #[error("Missing body")]
    MissingBody,

    /// Body flagged as base64 but delivered as a non-string value
    #[error("Body is base64Encoded but not a string")]
    EncodedBodyNotText,

    /// Body flagged as base64 did not decode
    #[error("base64 body could not be decoded: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Decoded base64 body is not UTF-8 text
    #[error("decoded body is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Body text is not JSON
    #[error("Body is not valid JSON")]
    InvalidJson(#[source] serde_json::Error),

    /// `appName` missing, not a string, or blank
    #[error("Missing or invalid appName")]
    InvalidAppName,

    /// `timestamp` missing, not a finite number, or off the calendar
    #[error("Missing or invalid timestamp")]
    InvalidTimestamp,

    /// Invocation envelope could not be read
    #[error("malformed invocation envelope: {reason}")]
    Envelope {
        /// Why the envelope was rejected
        reason: String,
    },

    /// The object store write failed
    #[error("object store write failed: {reason}")]
    Store {
        /// Backend error detail
        reason: String,
    },
}

impl IngestError {
    /// Classify this error as a client or server fault.
    ///
    /// A base64 or UTF-8 decoding failure is a server error: the encoding flag
    /// is asserted by the invoking infrastructure, not by the end caller.
    pub fn class(&self) -> ErrorClass {
        match self {
            IngestError::MissingBody
            | IngestError::EncodedBodyNotText
            | IngestError::InvalidJson(_)
            | IngestError::InvalidAppName
            | IngestError::InvalidTimestamp => ErrorClass::Client,
            IngestError::Base64(_)
            | IngestError::Utf8(_)
            | IngestError::Envelope { .. }
            | IngestError::Store { .. } => ErrorClass::Server,
        }
    }

    /// Whether this error is the caller's fault.
    pub fn is_client_error(&self) -> bool {
        self.class() == ErrorClass::Client
    }

    /// Message that may be shown to the caller.
    ///
    /// Server errors never leak their detail.
    pub fn public_message(&self) -> String {
        match self.class() {
            ErrorClass::Client => self.to_string(),
            ErrorClass::Server => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Result type alias for ingest operations
pub type Result<T> = std::result::Result<T, IngestError>;
