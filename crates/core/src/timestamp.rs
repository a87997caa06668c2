//! Epoch timestamp normalization
//!
//! Callers send either seconds or milliseconds since the Unix epoch without
//! declaring which. Values at or above 10^12 are taken as milliseconds,
//! anything below as seconds. The cut-over sits in September 2001 when read as
//! seconds, so a seconds value from before then cannot be told apart from a
//! milliseconds value from early 1970. That ambiguity is accepted.

use crate::error::{IngestError, Result};

/// Values at or above this are already milliseconds.
pub const MILLIS_THRESHOLD: i64 = 1_000_000_000_000;

const MILLIS_THRESHOLD_F64: f64 = 1e12;

/// Normalize a JSON `timestamp` value to whole milliseconds since the epoch.
///
/// Only JSON numbers are accepted; strings, booleans and `null` are rejected.
/// Integers stay in integer arithmetic. Fractional values are rounded to the
/// nearest millisecond.
pub fn normalize_millis(value: &serde_json::Value) -> Result<i64> {
    let number = match value {
        serde_json::Value::Number(n) => n,
        _ => return Err(IngestError::InvalidTimestamp),
    };

    if let Some(int) = number.as_i64() {
        return normalize_int(int);
    }
    match number.as_f64() {
        Some(float) => normalize_float(float),
        None => Err(IngestError::InvalidTimestamp),
    }
}

fn normalize_int(ts: i64) -> Result<i64> {
    if ts >= MILLIS_THRESHOLD {
        Ok(ts)
    } else {
        ts.checked_mul(1000).ok_or(IngestError::InvalidTimestamp)
    }
}

/// Float path, also taken by integers above `i64::MAX`.
pub fn normalize_float(ts: f64) -> Result<i64> {
    if !ts.is_finite() {
        return Err(IngestError::InvalidTimestamp);
    }
    let scaled = if ts >= MILLIS_THRESHOLD_F64 { ts } else { ts * 1000.0 };
    let millis = scaled.round();

    // i64::MAX is not exactly representable; compare against 2^63
    if millis < i64::MIN as f64 || millis >= 9_223_372_036_854_775_808.0 {
        return Err(IngestError::InvalidTimestamp);
    }
    Ok(millis as i64)
}
