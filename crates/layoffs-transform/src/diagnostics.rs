//! Read-only reporting over a table. Nothing here mutates its input.

use std::collections::{BTreeMap, BTreeSet};

use polars::prelude::DataFrame;

use layoffs_model::{DatasetSummary, Field, FieldKind};

use crate::data_utils::{missing_mask_with_tokens, string_values};
use crate::error::Result;

/// Distinct non-missing values of `field`, trimmed and sorted.
///
/// Used to review country spellings before curating a synonym table.
pub fn distinct_sorted_values(df: &DataFrame, field: Field) -> Result<Vec<String>> {
    let distinct: BTreeSet<String> = string_values(df, field)?
        .into_iter()
        .flatten()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .collect();
    Ok(distinct.into_iter().collect())
}

/// Number of missing values per field: nulls, blanks and any of
/// `missing_tokens`.
pub fn missing_counts(
    df: &DataFrame,
    fields: &[Field],
    missing_tokens: &[String],
) -> Result<BTreeMap<Field, usize>> {
    let mut counts = BTreeMap::new();
    for field in fields {
        let missing = missing_mask_with_tokens(df, *field, missing_tokens)?
            .into_iter()
            .filter(|missing| *missing)
            .count();
        counts.insert(*field, missing);
    }
    Ok(counts)
}

/// Total record count plus missing counts for the numeric fields.
pub fn dataset_summary(df: &DataFrame, missing_tokens: &[String]) -> Result<DatasetSummary> {
    let numeric = Field::of_kind(FieldKind::Numeric);
    Ok(DatasetSummary {
        total_records: df.height(),
        missing: missing_counts(df, &numeric, missing_tokens)?,
    })
}
