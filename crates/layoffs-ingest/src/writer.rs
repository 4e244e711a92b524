//! CSV output for cleaned tables.

use std::path::Path;

use csv::Writer;
use polars::prelude::{AnyValue, DataFrame};
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::polars_utils::any_to_string;

/// Write every column of `df` to `path`, header first.
///
/// Missing values become empty cells, dates are written as `YYYY-MM-DD` and
/// numbers without trailing zeros.
pub fn write_csv_table(df: &DataFrame, path: &Path) -> Result<()> {
    let csv_error = |source| IngestError::CsvWrite {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = Writer::from_path(path).map_err(csv_error)?;
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    writer.write_record(&names).map_err(csv_error)?;
    let columns = df.get_columns();
    for idx in 0..df.height() {
        let record: Vec<String> = columns
            .iter()
            .map(|column| any_to_string(column.get(idx).unwrap_or(AnyValue::Null)))
            .collect();
        writer.write_record(&record).map_err(csv_error)?;
    }
    writer.flush().map_err(|source| IngestError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), rows = df.height(), "wrote csv table");
    Ok(())
}
