//! DataFrame column helpers shared by the cleaning stages.

use chrono::NaiveDate;
use polars::prelude::{
    AnyValue, BooleanChunked, Column, DataFrame, DataType, NamedFrom, NewChunkedArray, Series,
};

use layoffs_ingest::{any_to_string_opt, days_from_date};
use layoffs_model::Field;

use crate::error::{Result, TransformError};

/// Look up the column for `field`.
pub fn field_column<'a>(df: &'a DataFrame, field: Field) -> Result<&'a Column> {
    df.column(field.name())
        .map_err(|_| TransformError::MissingColumn { field })
}

/// Fail unless every schema field has a column.
pub fn require_schema(df: &DataFrame) -> Result<()> {
    for field in Field::ALL {
        field_column(df, field)?;
    }
    Ok(())
}

pub fn is_string_column(df: &DataFrame, field: Field) -> Result<bool> {
    Ok(field_column(df, field)?.dtype() == &DataType::String)
}

/// Null-preserving string view of a column; typed values are rendered.
pub fn string_values(df: &DataFrame, field: Field) -> Result<Vec<Option<String>>> {
    let column = field_column(df, field)?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        values.push(any_to_string_opt(column.get(idx).unwrap_or(AnyValue::Null)));
    }
    Ok(values)
}

/// True when a cell holds the missing marker, only whitespace, or one of
/// `missing_tokens` after trimming.
pub fn is_missing_value(value: &AnyValue<'_>, missing_tokens: &[String]) -> bool {
    let text = match value {
        AnyValue::Null => return true,
        AnyValue::String(s) => *s,
        AnyValue::StringOwned(s) => s.as_str(),
        _ => return false,
    };
    let trimmed = text.trim();
    trimmed.is_empty() || missing_tokens.iter().any(|token| token == trimmed)
}

pub fn missing_mask(df: &DataFrame, field: Field) -> Result<Vec<bool>> {
    missing_mask_with_tokens(df, field, &[])
}

pub fn missing_mask_with_tokens(
    df: &DataFrame,
    field: Field,
    missing_tokens: &[String],
) -> Result<Vec<bool>> {
    let column = field_column(df, field)?;
    let mut mask = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let value = column.get(idx).unwrap_or(AnyValue::Null);
        mask.push(is_missing_value(&value, missing_tokens));
    }
    Ok(mask)
}

pub fn set_string_column(
    df: &mut DataFrame,
    field: Field,
    values: Vec<Option<String>>,
) -> Result<()> {
    let series = Series::new(field.name().into(), values);
    df.with_column(series)?;
    Ok(())
}

pub fn set_f64_column(df: &mut DataFrame, field: Field, values: Vec<Option<f64>>) -> Result<()> {
    let series = Series::new(field.name().into(), values);
    df.with_column(series)?;
    Ok(())
}

pub fn set_date_column(
    df: &mut DataFrame,
    field: Field,
    values: Vec<Option<NaiveDate>>,
) -> Result<()> {
    let days: Vec<Option<i32>> = values
        .into_iter()
        .map(|value| value.map(days_from_date))
        .collect();
    let series = Series::new(field.name().into(), days).cast(&DataType::Date)?;
    df.with_column(series)?;
    Ok(())
}

/// Keep only rows whose mask entry is true.
pub fn filter_rows(df: &mut DataFrame, keep: &[bool]) -> Result<()> {
    let mask = BooleanChunked::from_slice("keep".into(), keep);
    *df = df.filter(&mask)?;
    Ok(())
}
