//! Process configuration for zoolanding raw ingest.
//!
//! This crate provides the [`IngestConfig`] and [`LogLevel`] types. A config is
//! built once at process start, usually from the environment, and handed to
//! the pipeline by value. Nothing reads the environment after that.
//!
//! | Variable | Effect | Default |
//! |----------|--------|---------|
//! | `RAW_BUCKET_NAME` | Target bucket | `zoolanding-data-raw` |
//! | `LOG_LEVEL` | `debug`, `info` or `error` | `info` |
//! | `DRY_RUN` | `1`, `true` or `yes` skips the store write | off |

#![warn(missing_docs)]

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Bucket used when `RAW_BUCKET_NAME` is unset or empty.
pub const DEFAULT_BUCKET: &str = "zoolanding-data-raw";

/// Environment variable overriding the target bucket.
pub const BUCKET_ENV: &str = "RAW_BUCKET_NAME";

/// Environment variable selecting log verbosity.
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Environment variable enabling dry-run mode.
pub const DRY_RUN_ENV: &str = "DRY_RUN";

/// Log verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Per-step diagnostics plus everything below.
    Debug,
    /// One line per invocation (default).
    #[default]
    Info,
    /// Failures only.
    Error,
}

impl LogLevel {
    /// Matching `tracing` level.
    pub fn as_tracing_level(self) -> tracing::Level {
        match self {
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// Unrecognised log level name
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown log level {0:?}, expected debug, info or error")]
pub struct ParseLogLevelError(String);

impl FromStr for LogLevel {
    type Err = ParseLogLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "error" => Ok(LogLevel::Error),
            _ => Err(ParseLogLevelError(s.to_string())),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Error => "error",
        };
        f.write_str(name)
    }
}

/// Configuration for the ingest pipeline.
///
/// Use the builder methods to override defaults:
///
/// ```
/// use zoolanding_config::{IngestConfig, LogLevel};
///
/// let config = IngestConfig::new()
///     .bucket("analytics-raw-dev")
///     .log_level(LogLevel::Debug)
///     .dry_run(true);
/// assert_eq!(config.bucket, "analytics-raw-dev");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Bucket payloads are written to.
    pub bucket: String,
    /// Log verbosity.
    pub log_level: LogLevel,
    /// Skip the store write. For local testing only.
    pub dry_run: bool,
}

impl IngestConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup.
    ///
    /// An empty bucket name falls back to [`DEFAULT_BUCKET`]. An unknown log
    /// level falls back to [`LogLevel::Info`].
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(bucket) = lookup(BUCKET_ENV).filter(|b| !b.trim().is_empty()) {
            config.bucket = bucket;
        }
        if let Some(level) = lookup(LOG_LEVEL_ENV) {
            config.log_level = level.parse().unwrap_or_default();
        }
        if let Some(flag) = lookup(DRY_RUN_ENV) {
            config.dry_run = parse_flag(&flag);
        }
        config
    }

    /// Set the target bucket.
    pub fn bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    /// Set the log level.
    pub fn log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    /// Enable or disable dry-run mode.
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            bucket: DEFAULT_BUCKET.to_string(),
            log_level: LogLevel::Info,
            dry_run: false,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}
