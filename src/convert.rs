//! Coercion from loosely-typed [`serde_json::Value`]s to primitives.
//!
//! Every target has a fallible `try_to_*` form returning [`Error::Cast`] on
//! unrepresentable input, and a lossy `to_*` form that falls back to the
//! zero value. Null coerces to zero/false everywhere; arrays and objects
//! never coerce.

use serde_json::Value;

use crate::error::{Error, Result};

/// Lossy bool coercion; unconvertible input yields `false`.
pub fn to_bool(value: &Value) -> bool {
    try_to_bool(value).unwrap_or_default()
}

pub fn try_to_bool(value: &Value) -> Result<bool> {
    match value {
        Value::Null => Ok(false),
        Value::Bool(b) => Ok(*b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(i != 0)
            } else if let Some(u) = n.as_u64() {
                Ok(u != 0)
            } else {
                Ok(n.as_f64().is_some_and(|f| f != 0.0))
            }
        }
        Value::String(s) => parse_bool(s).ok_or_else(|| Error::cast(value, "bool")),
        _ => Err(Error::cast(value, "bool")),
    }
}

/// Lossy i64 coercion; unconvertible input yields `0`.
pub fn to_i64(value: &Value) -> i64 {
    try_to_i64(value).unwrap_or_default()
}

pub fn try_to_i64(value: &Value) -> Result<i64> {
    match value {
        Value::Null => Ok(0),
        Value::Bool(b) => Ok(*b as i64),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(i)
            } else if let Some(f) = n.as_f64() {
                // Fractions truncate towards zero.
                Ok(f as i64)
            } else {
                Err(Error::cast(value, "i64"))
            }
        }
        Value::String(s) => {
            parse_int(trim_zero_decimal(s)).ok_or_else(|| Error::cast(value, "i64"))
        }
        _ => Err(Error::cast(value, "i64")),
    }
}

/// Lossy u64 coercion; unconvertible input yields `0`.
pub fn to_u64(value: &Value) -> u64 {
    try_to_u64(value).unwrap_or_default()
}

pub fn try_to_u64(value: &Value) -> Result<u64> {
    match value {
        Value::Null => Ok(0),
        Value::Bool(b) => Ok(*b as u64),
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                Ok(u)
            } else if let Some(f) = n.as_f64().filter(|f| *f >= 0.0) {
                Ok(f as u64)
            } else {
                Err(Error::cast(value, "u64"))
            }
        }
        Value::String(s) => parse_int(trim_zero_decimal(s))
            .and_then(|i| u64::try_from(i).ok())
            .ok_or_else(|| Error::cast(value, "u64")),
        _ => Err(Error::cast(value, "u64")),
    }
}

/// Lossy f64 coercion; unconvertible input yields `0.0`.
pub fn to_f64(value: &Value) -> f64 {
    try_to_f64(value).unwrap_or_default()
}

pub fn try_to_f64(value: &Value) -> Result<f64> {
    match value {
        Value::Null => Ok(0.0),
        Value::Bool(b) => Ok(*b as i64 as f64),
        Value::Number(n) => n.as_f64().ok_or_else(|| Error::cast(value, "f64")),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| Error::cast(value, "f64")),
        _ => Err(Error::cast(value, "f64")),
    }
}

// The token set accepted by Go's strconv.ParseBool.
fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}

/// Base-0 integer parsing: `0x`/`0o`/`0b` prefixes select the radix, with an
/// optional leading sign.
fn parse_int(s: &str) -> Option<i64> {
    let t = s.trim();
    let (negative, digits) = match t.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, t.strip_prefix('+').unwrap_or(t)),
    };

    let magnitude = if let Some(hex) = strip_radix_prefix(digits, "0x", "0X") {
        i64::from_str_radix(hex, 16).ok()?
    } else if let Some(oct) = strip_radix_prefix(digits, "0o", "0O") {
        i64::from_str_radix(oct, 8).ok()?
    } else if let Some(bin) = strip_radix_prefix(digits, "0b", "0B") {
        i64::from_str_radix(bin, 2).ok()?
    } else {
        digits.parse::<i64>().ok()?
    };

    Some(if negative { -magnitude } else { magnitude })
}

fn strip_radix_prefix<'a>(s: &'a str, lower: &str, upper: &str) -> Option<&'a str> {
    s.strip_prefix(lower).or_else(|| s.strip_prefix(upper))
}

/// Strips an all-zero decimal tail, so "42.000" parses as the integer 42.
fn trim_zero_decimal(s: &str) -> &str {
    if let Some((head, tail)) = s.split_once('.') {
        if !tail.is_empty() && tail.bytes().all(|b| b == b'0') {
            return head;
        }
    }

    s
}
