//! Time source abstraction for real and fixed time.
//!
//! A normal run evaluates the sun position "now". With `--at` the same
//! pipeline is evaluated at a fixed local time, which is also how tests pin
//! the instant they calculate for.

use anyhow::{Context, Result};
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

use crate::constants::AT_TIME_FORMAT;

/// Trait for abstracting time operations
pub trait TimeSource {
    /// Get the current time
    fn now(&self) -> DateTime<Local>;

    /// Check if this source returns a fixed instant
    fn is_fixed(&self) -> bool {
        false
    }
}

/// Real-time implementation that uses actual system time
pub struct RealTimeSource;

impl TimeSource for RealTimeSource {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Time source that always returns the same instant.
pub struct FixedTimeSource {
    at: DateTime<Local>,
}

impl FixedTimeSource {
    pub fn new(at: DateTime<Local>) -> Self {
        Self { at }
    }
}

impl TimeSource for FixedTimeSource {
    fn now(&self) -> DateTime<Local> {
        self.at
    }

    fn is_fixed(&self) -> bool {
        true
    }
}

/// Parse a `YYYY-MM-DD HH:MM:SS` string as local time.
///
/// Times that do not exist (skipped by a DST change) are rejected. Ambiguous
/// times (repeated by a DST change) resolve to the earlier instant.
pub fn parse_local_time(value: &str) -> Result<DateTime<Local>> {
    let naive = NaiveDateTime::parse_from_str(value, AT_TIME_FORMAT)
        .with_context(|| format!("Invalid time '{value}'. Use YYYY-MM-DD HH:MM:SS"))?;

    Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| anyhow::anyhow!("Time '{value}' does not exist in the local timezone"))
}

/// Check that a string has the `YYYY-MM-DD HH:MM:SS` shape.
///
/// Used by the argument parser, which only checks the shape and leaves the
/// calendar validation to [`parse_local_time`].
pub fn looks_like_datetime(s: &str) -> bool {
    s.len() == 19
        && s.chars().nth(4) == Some('-')
        && s.chars().nth(7) == Some('-')
        && s.chars().nth(10) == Some(' ')
        && s.chars().nth(13) == Some(':')
        && s.chars().nth(16) == Some(':')
}
