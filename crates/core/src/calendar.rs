//! UTC calendar conversion
//!
//! Storage keys are partitioned by the UTC date of the event. The conversion
//! sits behind [`UtcCalendar`] so tests can pin dates across month, year and
//! leap-day boundaries without depending on chrono's behaviour directly.

use chrono::{DateTime, Datelike, Utc};
use std::fmt;

/// A UTC calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateParts {
    /// Proleptic Gregorian year
    pub year: i32,
    /// Month, 1-12
    pub month: u32,
    /// Day of month, 1-31
    pub day: u32,
}

impl DateParts {
    /// Create a date from its components.
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Zero-padded four digit year.
    pub fn year_segment(&self) -> String {
        format!("{:04}", self.year)
    }

    /// Zero-padded two digit month.
    pub fn month_segment(&self) -> String {
        format!("{:02}", self.month)
    }

    /// Zero-padded two digit day.
    pub fn day_segment(&self) -> String {
        format!("{:02}", self.day)
    }
}

impl fmt::Display for DateParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}/{:02}/{:02}", self.year, self.month, self.day)
    }
}

/// Converts epoch milliseconds to a UTC date.
pub trait UtcCalendar: Send + Sync {
    /// Date of the given instant in UTC, or `None` if it is off the calendar.
    fn date_of(&self, timestamp_ms: i64) -> Option<DateParts>;
}

/// [`UtcCalendar`] backed by chrono.
///
/// Covers roughly ±262 000 years around the epoch.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoCalendar;

impl UtcCalendar for ChronoCalendar {
    fn date_of(&self, timestamp_ms: i64) -> Option<DateParts> {
        let dt: DateTime<Utc> = DateTime::from_timestamp_millis(timestamp_ms)?;
        Some(DateParts::new(dt.year(), dt.month(), dt.day()))
    }
}
