//! Date text parsing.
//!
//! Date fields arrive as text in a fixed, per-field format (for example
//! `01/15/2023` for the event date). Each row's own value is parsed; a value
//! that cannot be parsed becomes missing and the row is kept.

use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate};
use polars::prelude::{DataFrame, DataType};
use tracing::debug;

use layoffs_model::Field;

use crate::data_utils::{field_column, set_date_column, string_values};
use crate::error::Result;

/// Years accepted as plausible for layoff events.
pub const SANE_YEARS: RangeInclusive<i32> = 1900..=2100;

/// Parse `value` with each format in turn. Blank input, no matching format
/// and implausible years all yield `None`.
pub fn parse_date_with_formats<S: AsRef<str>>(value: &str, formats: &[S]) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    formats
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format.as_ref()).ok())
        .filter(|date| SANE_YEARS.contains(&date.year()))
}

/// Outcome of normalizing one date column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateColumnOutcome {
    pub parsed: usize,
    /// Non-blank values that did not match any format.
    pub failures: usize,
}

/// Replace the text column for `field` with a `Date` column.
///
/// Values equal to one of `missing_tokens` are treated like blanks and are
/// not counted as failures. A column that is already `Date` typed is left
/// untouched.
pub fn normalize_date_column<S: AsRef<str>>(
    df: &mut DataFrame,
    field: Field,
    formats: &[S],
    missing_tokens: &[String],
) -> Result<DateColumnOutcome> {
    if field_column(df, field)?.dtype() == &DataType::Date {
        return Ok(DateColumnOutcome::default());
    }
    let mut outcome = DateColumnOutcome::default();
    let mut dates = Vec::with_capacity(df.height());
    for value in string_values(df, field)? {
        let Some(raw) = value else {
            dates.push(None);
            continue;
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() || missing_tokens.iter().any(|token| token == trimmed) {
            dates.push(None);
            continue;
        }
        match parse_date_with_formats(trimmed, formats) {
            Some(date) => {
                outcome.parsed += 1;
                dates.push(Some(date));
            }
            None => {
                outcome.failures += 1;
                debug!(field = %field, value = %trimmed, "unparseable date set to missing");
                dates.push(None);
            }
        }
    }
    set_date_column(df, field, dates)?;
    Ok(outcome)
}
