//! Exact-duplicate removal.
//!
//! Rows are grouped by the full record (all eleven fields). Within a group
//! each row receives an ordinal in arrival order, stored in the `row_num`
//! working column; only ordinal 1 survives. Missing values group with other
//! missing values, and missing never equals the empty string.

use std::collections::HashMap;

use polars::prelude::{DataFrame, NamedFrom, Series};
use tracing::debug;

use layoffs_model::{Field, ROW_NUM_COLUMN};

use crate::data_utils::{filter_rows, require_schema, string_values};
use crate::error::Result;

type DedupKey = Vec<Option<String>>;

fn dedup_keys(df: &DataFrame) -> Result<Vec<DedupKey>> {
    require_schema(df)?;
    let columns = Field::ALL
        .iter()
        .map(|field| string_values(df, *field))
        .collect::<Result<Vec<_>>>()?;
    let keys = (0..df.height())
        .map(|idx| columns.iter().map(|values| values[idx].clone()).collect())
        .collect();
    Ok(keys)
}

fn ordinals(keys: Vec<DedupKey>) -> Vec<u32> {
    let mut seen: HashMap<DedupKey, u32> = HashMap::with_capacity(keys.len());
    keys.into_iter()
        .map(|key| {
            let count = seen.entry(key).or_insert(0);
            *count += 1;
            *count
        })
        .collect()
}

fn with_row_numbers(df: &DataFrame, row_numbers: Vec<u32>) -> Result<DataFrame> {
    let mut out = df.clone();
    out.with_column(Series::new(ROW_NUM_COLUMN.into(), row_numbers))?;
    Ok(out)
}

/// Return a copy of `df` with the `row_num` ordinal column set. No rows are
/// removed; an existing `row_num` column is overwritten.
pub fn assign_row_numbers(df: &DataFrame) -> Result<DataFrame> {
    let row_numbers = ordinals(dedup_keys(df)?);
    with_row_numbers(df, row_numbers)
}

/// Return a copy of `df` holding the first row of every duplicate group,
/// with `row_num` set to 1 on each.
pub fn deduplicate(df: &DataFrame) -> Result<DataFrame> {
    let row_numbers = ordinals(dedup_keys(df)?);
    let keep: Vec<bool> = row_numbers.iter().map(|ordinal| *ordinal == 1).collect();
    let mut out = with_row_numbers(df, row_numbers)?;
    filter_rows(&mut out, &keep)?;
    debug!(
        rows_in = df.height(),
        rows_out = out.height(),
        "removed exact duplicates"
    );
    Ok(out)
}
