use std::path::Path;

use csv::ReaderBuilder;
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
use tracing::debug;

use layoffs_model::Field;

use crate::error::{IngestError, Result};

/// Raw CSV contents: the header row and every data row, cells untouched.
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Index of the first header naming `field` (aliases included).
    pub fn field_index(&self, field: Field) -> Option<usize> {
        self.headers
            .iter()
            .position(|header| Field::from_header(header) == Some(field))
    }
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

// Whitespace is significant to the pipeline; only a stray BOM is removed.
fn normalize_cell(raw: &str) -> String {
    raw.trim_matches('\u{feff}').to_string()
}

/// Read a CSV file whose first non-blank record is the header.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;
    let mut headers: Option<Vec<String>> = None;
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        match &headers {
            None => headers = Some(record.iter().map(normalize_header).collect()),
            Some(names) => {
                let mut row = Vec::with_capacity(names.len());
                for idx in 0..names.len() {
                    row.push(normalize_cell(record.get(idx).unwrap_or("")));
                }
                rows.push(row);
            }
        }
    }
    let Some(headers) = headers else {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    };
    debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = rows.len(),
        "read csv table"
    );
    Ok(CsvTable { headers, rows })
}

/// Build the all-text staging frame: one `String` column per field, in
/// schema order. Columns that are not part of the schema are ignored.
pub fn build_staging_frame(table: &CsvTable, path: &Path) -> Result<DataFrame> {
    let mut columns: Vec<Column> = Vec::with_capacity(Field::ALL.len());
    for field in Field::ALL {
        let Some(idx) = table.field_index(field) else {
            return Err(IngestError::MissingColumn {
                field,
                path: path.to_path_buf(),
            });
        };
        let values: Vec<&str> = table
            .rows
            .iter()
            .map(|row| row.get(idx).map(String::as_str).unwrap_or(""))
            .collect();
        columns.push(Series::new(field.name().into(), values).into_column());
    }
    Ok(DataFrame::new(columns)?)
}

/// Read a CSV file straight into a staging frame.
pub fn load_staging_frame(path: &Path) -> Result<DataFrame> {
    let table = read_csv_table(path)?;
    build_staging_frame(&table, path)
}
