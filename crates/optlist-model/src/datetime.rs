//! ISO-8601 parsing and normalization for hide-window bounds.
//!
//! A bound is stored either empty or in the canonical second-precision form
//! [`ISO_INSTANT_FORMAT`]. Parsing is deliberately tolerant: pasted data tends
//! to arrive with offsets, space separators, or date-only precision.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// Canonical storage format for hide-window bounds.
pub const ISO_INSTANT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Accepted datetime layouts, tried in order after RFC 3339.
const INSTANT_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parses a hide-window bound into a naive UTC instant.
///
/// Inputs carrying an explicit offset are converted to UTC; naive inputs are
/// taken as already UTC. Date-only input maps to midnight. Returns `None` for
/// blank or unparseable text.
pub fn parse_instant(input: &str) -> Option<NaiveDateTime> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(instant.naive_utc());
    }
    for format in INSTANT_FORMATS {
        if let Ok(instant) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(instant);
        }
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}

/// True when the input parses as an instant.
pub fn is_valid_instant(input: &str) -> bool {
    parse_instant(input).is_some()
}

/// Normalizes a bound to its canonical stored form.
///
/// Valid input comes back as [`ISO_INSTANT_FORMAT`]; anything else, including
/// blank input, comes back empty.
pub fn normalize_instant(input: &str) -> String {
    match parse_instant(input) {
        Some(instant) => instant.format(ISO_INSTANT_FORMAT).to_string(),
        None => String::new(),
    }
}
