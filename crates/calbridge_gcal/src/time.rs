// File: crates/calbridge_gcal/src/time.rs
//! Lenient parsing of caller-supplied date/time strings.
//!
//! Callers pass free-form text; everything the shim transmits is first
//! normalized to a concrete instant. Inputs carrying their own UTC offset
//! keep it; naive inputs are anchored in the request's timezone.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
#[error("failed to parse date/time {input:?}")]
pub struct DateParseError {
    pub input: String,
}

impl DateParseError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }
}

/// Naive date/time formats, tried in order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%b %d %Y %I:%M:%S%p",
    "%b %d %Y %I:%M%p",
    "%b %d %Y %H:%M",
    "%B %d, %Y %I:%M%p",
    "%B %d, %Y %H:%M",
    "%m/%d/%Y %I:%M%p",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Bare date formats, tried in order. Bare dates resolve to midnight.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%b %d %Y", "%B %d, %Y", "%m/%d/%Y"];

/// Looks up an IANA timezone, falling back to UTC for unrecognized names.
/// The timezone field is free text and is transmitted verbatim either way.
pub fn resolve_timezone(name: &str) -> Tz {
    Tz::from_str(name.trim()).unwrap_or(Tz::UTC)
}

/// Parses a free-form date/time string into a fixed-offset instant.
pub fn parse_datetime(input: &str, tz: Tz) -> Result<DateTime<FixedOffset>, DateParseError> {
    let trimmed = input.trim();

    // Offset-bearing inputs keep their own offset.
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt);
    }

    let naive = parse_naive(trimmed).ok_or_else(|| DateParseError::new(input))?;
    resolve_local(naive, tz).ok_or_else(|| DateParseError::new(input))
}

/// The `[00:00:00, 23:59:59]` window of `date` in `tz`, as UTC instants.
pub fn day_bounds(date: &str, tz: Tz) -> Result<(DateTime<Utc>, DateTime<Utc>), DateParseError> {
    let day = parse_naive(date.trim())
        .map(|dt| dt.date())
        .ok_or_else(|| DateParseError::new(date))?;

    let start = resolve_local(day.and_hms_opt(0, 0, 0).unwrap(), tz)
        .ok_or_else(|| DateParseError::new(date))?;
    let end = resolve_local(day.and_hms_opt(23, 59, 59).unwrap(), tz)
        .ok_or_else(|| DateParseError::new(date))?;

    Ok((start.with_timezone(&Utc), end.with_timezone(&Utc)))
}

fn parse_naive(input: &str) -> Option<NaiveDateTime> {
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, format) {
            return Some(dt);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(input, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }
    None
}

// Earliest instant on DST folds; None only for nonexistent local times.
fn resolve_local(naive: NaiveDateTime, tz: Tz) -> Option<DateTime<FixedOffset>> {
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.fixed_offset())
}
