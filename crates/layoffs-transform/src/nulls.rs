//! Null canonicalization.
//!
//! Blank and whitespace-only values, and configured tokens such as `NULL`,
//! become the missing marker in every field. Numeric fields are then typed as
//! nullable `Float64` and the correction table is applied.

use std::collections::BTreeMap;

use polars::prelude::DataFrame;
use tracing::debug;

use layoffs_model::{CleaningConfig, CorrectionOutcome, Field, FieldKind};

use crate::corrections::apply_corrections;
use crate::data_utils::{is_string_column, set_string_column, string_values};
use crate::diagnostics::missing_counts;
use crate::error::Result;
use crate::normalization::tighten_numeric_column;

/// Counts collected by [`canonicalize_nulls`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanonicalizeOutcome {
    pub blanks_replaced: usize,
    pub corrections: Vec<CorrectionOutcome>,
    pub missing: BTreeMap<Field, usize>,
}

/// Replace blank values and missing tokens of a text column with missing.
/// Columns that are no longer text are skipped.
pub fn blank_to_missing(
    df: &mut DataFrame,
    field: Field,
    missing_tokens: &[String],
) -> Result<usize> {
    if !is_string_column(df, field)? {
        return Ok(0);
    }
    let mut replaced = 0usize;
    let values: Vec<Option<String>> = string_values(df, field)?
        .into_iter()
        .map(|value| {
            value.filter(|raw| {
                let trimmed = raw.trim();
                let blank = trimmed.is_empty() || missing_tokens.iter().any(|t| t == trimmed);
                if blank {
                    replaced += 1;
                }
                !blank
            })
        })
        .collect();
    if replaced > 0 {
        set_string_column(df, field, values)?;
    }
    Ok(replaced)
}

/// Run the null canonicalizer in place.
pub fn canonicalize_nulls(
    df: &mut DataFrame,
    config: &CleaningConfig,
) -> Result<CanonicalizeOutcome> {
    let mut outcome = CanonicalizeOutcome::default();
    for field in Field::ALL {
        let replaced = blank_to_missing(df, field, &config.missing_tokens)?;
        if replaced > 0 {
            debug!(field = %field, replaced, "blank values set to missing");
        }
        outcome.blanks_replaced += replaced;
    }
    for field in Field::of_kind(FieldKind::Numeric) {
        tighten_numeric_column(df, field)?;
    }
    outcome.corrections = apply_corrections(df, &config.corrections)?;
    outcome.missing = missing_counts(df, &Field::ALL, &config.missing_tokens)?;
    Ok(outcome)
}
