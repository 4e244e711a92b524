//! Polars AnyValue utility functions.
//!
//! This module provides helper functions for working with Polars `AnyValue` types,
//! including string conversions, numeric parsing and date cell encoding.

use chrono::{Datelike, NaiveDate};
use polars::prelude::*;

/// Days between 0001-01-01 and the Unix epoch; polars stores dates as days
/// since the epoch.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Output format for date cells.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Converts a Polars AnyValue to a String representation.
/// Returns empty string for Null, properly formats numeric and date types.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => b.to_string(),
        AnyValue::Date(days) => date_from_days(days)
            .map(|date| date.format(DATE_FORMAT).to_string())
            .unwrap_or_default(),
        other => other.to_string(),
    }
}

/// Converts an AnyValue to a String, keeping Null distinct from "".
pub fn any_to_string_opt(value: AnyValue<'_>) -> Option<String> {
    match value {
        AnyValue::Null => None,
        other => Some(any_to_string(other)),
    }
}

/// Formats a floating-point number as a string without trailing zeros.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Converts a Date AnyValue to a calendar date.
pub fn any_to_date(value: AnyValue<'_>) -> Option<NaiveDate> {
    match value {
        AnyValue::Date(days) => date_from_days(days),
        _ => None,
    }
}

/// Parses a string as a finite f64, returning None for invalid or empty
/// strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|number| number.is_finite())
}

/// Polars day number for a calendar date.
pub fn days_from_date(date: NaiveDate) -> i32 {
    date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE
}

/// Calendar date for a polars day number.
pub fn date_from_days(days: i32) -> Option<NaiveDate> {
    NaiveDate::from_num_days_from_ce_opt(days.checked_add(UNIX_EPOCH_DAYS_FROM_CE)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_numeric_strips_trailing_zeros() {
        assert_eq!(format_numeric(50.0), "50");
        assert_eq!(format_numeric(0.10), "0.1");
        assert_eq!(format_numeric(1_000_000.0), "1000000");
        assert_eq!(format_numeric(12.5), "12.5");
    }

    #[test]
    fn parse_f64_rejects_non_finite_text() {
        assert_eq!(parse_f64(" 12.5 "), Some(12.5));
        assert_eq!(parse_f64("NaN"), None);
        assert_eq!(parse_f64("inf"), None);
        assert_eq!(parse_f64("   "), None);
    }

    #[test]
    fn epoch_round_trip() {
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        assert_eq!(days_from_date(epoch), 0);
        let date = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();
        assert_eq!(date_from_days(days_from_date(date)), Some(date));
        assert_eq!(days_from_date(date), 19_372);
    }

    #[test]
    fn null_is_distinct_from_empty() {
        assert_eq!(any_to_string_opt(AnyValue::Null), None);
        assert_eq!(any_to_string_opt(AnyValue::String("")), Some(String::new()));
        assert_eq!(any_to_string(AnyValue::Date(19_372)), "2023-01-15");
    }
}
