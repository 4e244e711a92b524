//! Numeric type tightening.

use polars::prelude::{DataFrame, DataType};

use layoffs_ingest::parse_f64;
use layoffs_model::Field;

use crate::data_utils::{field_column, set_f64_column, string_values};
use crate::error::{Result, TransformError};

/// Convert the column for `field` to nullable `Float64`.
///
/// Must run after blanks have been canonicalized: any remaining non-numeric
/// text is a schema violation and aborts the stage.
pub fn tighten_numeric_column(df: &mut DataFrame, field: Field) -> Result<()> {
    let dtype = field_column(df, field)?.dtype().clone();
    if dtype == DataType::Float64 {
        return Ok(());
    }
    if matches!(
        dtype,
        DataType::Int32 | DataType::Int64 | DataType::UInt32 | DataType::UInt64 | DataType::Float32
    ) {
        let cast = field_column(df, field)?.cast(&DataType::Float64)?;
        df.with_column(cast)?;
        return Ok(());
    }
    let mut numbers = Vec::with_capacity(df.height());
    for (row, value) in string_values(df, field)?.into_iter().enumerate() {
        let Some(raw) = value else {
            numbers.push(None);
            continue;
        };
        match parse_f64(&raw) {
            Some(number) => numbers.push(Some(number)),
            None => {
                return Err(TransformError::SchemaViolation {
                    field,
                    row,
                    value: raw,
                });
            }
        }
    }
    set_f64_column(df, field, numbers)
}
