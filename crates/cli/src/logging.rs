//! Subscriber setup
//!
//! One JSON object per line on stdout, event fields flattened to the top
//! level, no ANSI colours. Our own targets (`zoolanding::*`) log at the
//! configured level; everything else (SDK, runtime) only at `warn`.
//! `RUST_LOG`, when set, replaces the whole filter.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;
use zoolanding_config::LogLevel;

/// Filter directives for a log level.
pub fn directives(level: LogLevel) -> String {
    format!("warn,zoolanding={}", level)
}

/// Install the global subscriber. Call once, before the first invocation.
pub fn init(level: LogLevel) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives(level)));

    tracing_subscriber::fmt()
        .json()
        .flatten_event(true)
        .with_current_span(false)
        .with_span_list(false)
        .with_ansi(false)
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {}", e))
}
