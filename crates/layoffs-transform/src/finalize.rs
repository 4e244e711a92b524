use polars::prelude::DataFrame;

use layoffs_model::ROW_NUM_COLUMN;

use crate::error::Result;

/// Drop the `row_num` working column. Returns false when it was not present.
pub fn finalize_schema(df: &mut DataFrame) -> Result<bool> {
    if df.column(ROW_NUM_COLUMN).is_err() {
        return Ok(false);
    }
    df.drop_in_place(ROW_NUM_COLUMN)?;
    Ok(true)
}
