//! Text field normalization.

use std::collections::BTreeMap;

use polars::prelude::DataFrame;

use layoffs_model::Field;

use crate::data_utils::{is_string_column, set_string_column, string_values};
use crate::error::{Result, TransformError};

/// Trim leading and trailing whitespace from every value of `field`.
/// Internal whitespace is left alone and missing values stay missing.
///
/// Returns the number of values that changed.
pub fn trim_field(df: &mut DataFrame, field: Field) -> Result<usize> {
    if !is_string_column(df, field)? {
        return Err(TransformError::NonTextColumn { field });
    }
    let mut changed = 0usize;
    let values: Vec<Option<String>> = string_values(df, field)?
        .into_iter()
        .map(|value| {
            value.map(|raw| {
                let trimmed = raw.trim();
                if trimmed.len() == raw.len() {
                    raw
                } else {
                    changed += 1;
                    trimmed.to_string()
                }
            })
        })
        .collect();
    if changed > 0 {
        set_string_column(df, field, values)?;
    }
    Ok(changed)
}

/// Replace values of `field` found in `synonyms` (exact match).
///
/// Returns the number of replaced values.
pub fn apply_synonyms(
    df: &mut DataFrame,
    field: Field,
    synonyms: &BTreeMap<String, String>,
) -> Result<usize> {
    if synonyms.is_empty() {
        return Ok(0);
    }
    if !is_string_column(df, field)? {
        return Err(TransformError::NonTextColumn { field });
    }
    let mut replaced = 0usize;
    let values: Vec<Option<String>> = string_values(df, field)?
        .into_iter()
        .map(|value| {
            value.map(|raw| match synonyms.get(&raw) {
                Some(canonical) if *canonical != raw => {
                    replaced += 1;
                    canonical.clone()
                }
                _ => raw,
            })
        })
        .collect();
    if replaced > 0 {
        set_string_column(df, field, values)?;
    }
    Ok(replaced)
}
