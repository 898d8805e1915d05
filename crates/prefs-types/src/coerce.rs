//! Scalar bridging between string, int, double and bool values.
//!
//! | stored          | string  | int | double | bool  |
//! |-----------------|---------|-----|--------|-------|
//! | string `"100"`  | `"100"` | 100 | 100.0  | -     |
//! | int `100`       | `"100"` | 100 | 100.0  | true  |
//! | double `3.14`   | `"3.14"`| 3   | 3.14   | true  |
//! | bool `true`     | `"1"`   | 1   | 1.0    | true  |
//! | bool `false`    | `"0"`   | 0   | 0.0    | false |
//!
//! Strict coercion of a string to a number only accepts integer literals, so
//! `"3.14"` is not a double here. [`parse_int_lenient`] and
//! [`parse_double_lenient`] perform the best-effort parse used by defaulted
//! reads. Blob, date, array and map values never take part in bridging.

use crate::value::RawValue;

impl RawValue {
    /// Read this value as a string, bridging numbers and bools.
    pub fn coerce_string(&self) -> Option<String> {
        match self {
            Self::String(s) => Some(s.clone()),
            Self::Int(n) => Some(n.to_string()),
            Self::Double(d) => Some(d.to_string()),
            Self::Bool(b) => Some(if *b { "1" } else { "0" }.to_string()),
            _ => None,
        }
    }

    /// Read this value as an integer. Doubles truncate toward zero.
    pub fn coerce_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Double(d) => truncate(*d),
            Self::Bool(b) => Some(i64::from(*b)),
            Self::String(s) => integer_literal(s).and_then(|s| s.parse().ok()),
            _ => None,
        }
    }

    /// Read this value as a double.
    pub fn coerce_double(&self) -> Option<f64> {
        match self {
            Self::Double(d) => Some(*d),
            Self::Int(n) => Some(*n as f64),
            Self::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Self::String(s) => integer_literal(s).and_then(|s| s.parse().ok()),
            _ => None,
        }
    }

    /// Read this value as a bool. Numbers are `true` when nonzero; strings
    /// never bridge to bool.
    pub fn coerce_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Int(n) => Some(*n != 0),
            Self::Double(d) => Some(*d != 0.0),
            _ => None,
        }
    }
}

/// Best-effort integer read: strict coercion first, then a float parse of a
/// string followed by truncation.
pub fn parse_int_lenient(value: &RawValue) -> Option<i64> {
    value.coerce_int().or_else(|| match value {
        RawValue::String(s) => parse_finite(s).and_then(truncate),
        _ => None,
    })
}

/// Best-effort double read: strict coercion first, then a float parse of a
/// string.
pub fn parse_double_lenient(value: &RawValue) -> Option<f64> {
    value.coerce_double().or_else(|| match value {
        RawValue::String(s) => parse_finite(s),
        _ => None,
    })
}

/// Truncate toward zero; `None` when the double has no `i64` counterpart.
fn truncate(d: f64) -> Option<i64> {
    // i64::MIN and 2^63 are both exactly representable as f64.
    if d.is_finite() && d >= i64::MIN as f64 && d < i64::MAX as f64 {
        Some(d.trunc() as i64)
    } else {
        None
    }
}

/// The trimmed string if it is an optionally signed run of ASCII digits.
fn integer_literal(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    let digits = trimmed
        .strip_prefix('-')
        .or_else(|| trimmed.strip_prefix('+'))
        .unwrap_or(trimmed);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        Some(trimmed)
    } else {
        None
    }
}

fn parse_finite(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|d| d.is_finite())
}
