//! Completeness filter.

use polars::prelude::DataFrame;

use layoffs_model::Field;

use crate::data_utils::{filter_rows, missing_mask};
use crate::error::Result;

/// Drop every row missing any of the `critical` fields. Values are never
/// altered. Returns the number of rows removed.
pub fn filter_incomplete(df: &mut DataFrame, critical: &[Field]) -> Result<usize> {
    let mut keep = vec![true; df.height()];
    for field in critical {
        for (slot, missing) in keep.iter_mut().zip(missing_mask(df, *field)?) {
            *slot &= !missing;
        }
    }
    let removed = keep.iter().filter(|kept| !**kept).count();
    if removed > 0 {
        filter_rows(df, &keep)?;
    }
    Ok(removed)
}
