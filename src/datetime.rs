//! Date parsing and RFC-822 style formatting.
//!
//! Input dates arrive in whatever shape the caller has on hand: a canonical
//! timestamp, an RFC 3339 / RFC 2822 string, a bare `YYYY-MM-DD`, or a Unix
//! timestamp in seconds. They are canonicalized once into a
//! `DateTime<FixedOffset>` and rendered in the fixed RSS date format,
//! e.g. `Fri, 31 Oct 2014 18:12:21 +0000`.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

use crate::value::Value;

/// RSS date format: three-letter weekday, unpadded day, three-letter month,
/// four-digit year, `HH:MM:SS`, signed numeric UTC offset.
const RFC822_FORMAT: &str = "%a, %-d %b %Y %H:%M:%S %z";

/// Formats a timestamp in the fixed RSS date format.
pub fn format_rfc822(dt: &DateTime<FixedOffset>) -> String {
    dt.format(RFC822_FORMAT).to_string()
}

/// Attempts to interpret a loose value as a calendar timestamp.
///
/// Strings without an explicit offset are taken as UTC. Integers are Unix
/// timestamps in seconds. Returns `None` for anything unparsable — callers
/// degrade to passing the raw value through.
pub fn parse_date(value: &Value) -> Option<DateTime<FixedOffset>> {
    match value {
        Value::Date(dt) => Some(*dt),
        Value::String(s) => parse_date_str(s.trim()),
        Value::Int(secs) => DateTime::from_timestamp(*secs, 0).map(|dt| dt.fixed_offset()),
        _ => None,
    }
}

fn parse_date_str(s: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt);
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt);
    }
    for fmt in ["%Y-%m-%d %H:%M:%S %z", "%Y-%m-%d %H:%M %z"] {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc().fixed_offset());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        let midnight = date.and_hms_opt(0, 0, 0)?;
        return Some(midnight.and_utc().fixed_offset());
    }
    None
}

/// Rewrites a date-typed value into its canonical timestamp form in place,
/// returning the timestamp. Idempotent: a value that is already canonical is
/// left untouched. Unparsable values are also left untouched and yield
/// `None`.
pub fn canonicalize(value: &mut Value) -> Option<DateTime<FixedOffset>> {
    let dt = parse_date(value)?;
    *value = Value::Date(dt);
    Some(dt)
}
