//! Coercion from [`serde_json::Value`]s to timestamps and durations.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use serde_json::Value;

use crate::error::{Error, Result};

// Formats are tried in order; zone-less ones are read as UTC.
const ZONED_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%z",
    "%Y-%m-%d %H:%M:%S%.f %z",
    "%Y-%m-%d %H:%M:%S %z",
    "%Y-%m-%d %H:%M:%S%z",
];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d %b %Y"];

// Time-only inputs anchor to the epoch date.
const TIME_FORMATS: &[&str] = &["%H:%M:%S%.f", "%H:%M:%S", "%I:%M%p"];

/// Lossy datetime coercion; unconvertible input yields the Unix epoch.
pub fn to_datetime(value: &Value) -> DateTime<Utc> {
    try_to_datetime(value).unwrap_or_default()
}

/// Coerces a value to a UTC timestamp: integers are Unix seconds, strings
/// are tried against a table of common formats.
pub fn try_to_datetime(value: &Value) -> Result<DateTime<Utc>> {
    match value {
        Value::String(s) => {
            parse_datetime(s.trim()).ok_or_else(|| Error::cast(value, "datetime"))
        }
        Value::Number(n) => n
            .as_i64()
            .and_then(|secs| Utc.timestamp_opt(secs, 0).single())
            .ok_or_else(|| Error::cast(value, "datetime")),
        _ => Err(Error::cast(value, "datetime")),
    }
}

/// Lossy duration coercion; unconvertible input yields a zero duration.
pub fn to_duration(value: &Value) -> Duration {
    try_to_duration(value).unwrap_or_else(|_| Duration::zero())
}

/// Coerces a value to a duration: numbers (and unit-less numeric strings)
/// are nanoseconds, otherwise the string is a compound duration literal like
/// `"1h30m"`, `"1.5s"` or `"-90ms"` with units `ns us ms s m h`.
pub fn try_to_duration(value: &Value) -> Result<Duration> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Duration::nanoseconds(i))
            } else if let Some(f) = n.as_f64() {
                Ok(Duration::nanoseconds(f as i64))
            } else {
                Err(Error::cast(value, "duration"))
            }
        }
        Value::String(s) => {
            parse_duration(s.trim()).ok_or_else(|| Error::cast(value, "duration"))
        }
        _ => Err(Error::cast(value, "duration")),
    }
}

fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ZONED_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, format) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(Utc.from_utc_datetime(&dt));
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?));
        }
    }

    for format in TIME_FORMATS {
        if let Ok(time) = NaiveTime::parse_from_str(s, format) {
            let epoch = NaiveDate::from_ymd_opt(1970, 1, 1)?;
            return Some(Utc.from_utc_datetime(&epoch.and_time(time)));
        }
    }

    None
}

fn parse_duration(s: &str) -> Option<Duration> {
    // A bare number is nanoseconds.
    if !s.chars().any(|c| c.is_ascii_alphabetic()) {
        let nanos = if s.contains('.') {
            s.parse::<f64>().ok()? as i64
        } else {
            s.parse::<i64>().ok()?
        };
        return Some(Duration::nanoseconds(nanos));
    }

    let (negative, mut rest) = match s.strip_prefix('-') {
        Some(tail) => (true, tail),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    if rest.is_empty() {
        return None;
    }

    let mut total_nanos = 0f64;

    while !rest.is_empty() {
        let split = rest
            .find(|c: char| !c.is_ascii_digit() && c != '.')
            .unwrap_or(rest.len());
        if split == 0 {
            return None;
        }

        let number: f64 = rest[..split].parse().ok()?;
        rest = &rest[split..];

        // Two-letter units first so "ms" is not read as minutes.
        let (scale, unit_len) = if rest.starts_with("ns") {
            (1f64, 2)
        } else if rest.starts_with("us") {
            (1e3, 2)
        } else if rest.starts_with("ms") {
            (1e6, 2)
        } else if rest.starts_with('s') {
            (1e9, 1)
        } else if rest.starts_with('m') {
            (60e9, 1)
        } else if rest.starts_with('h') {
            (3600e9, 1)
        } else {
            return None;
        };

        total_nanos += number * scale;
        rest = &rest[unit_len..];
    }

    let nanos = total_nanos as i64;
    Some(Duration::nanoseconds(if negative { -nanos } else { nanos }))
}
