use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use layoffs_model::Field;

pub type RawRow = [&'static str; 11];

pub const ACME: RawRow = [
    "Acme",
    "SF",
    "50",
    "01/15/2023",
    "0.1",
    "Retail",
    "src",
    "Seed",
    "1000000",
    "USA",
    "2022-12-16",
];

/// All-text staging frame, columns in schema order.
pub fn staging(rows: &[RawRow]) -> DataFrame {
    let columns: Vec<Column> = Field::ALL
        .iter()
        .enumerate()
        .map(|(idx, field)| {
            let values: Vec<&str> = rows.iter().map(|row| row[idx]).collect();
            Series::new(field.name().into(), values).into_column()
        })
        .collect();
    DataFrame::new(columns).unwrap()
}

pub fn with(row: RawRow, field: Field, value: &'static str) -> RawRow {
    let mut row = row;
    let idx = Field::ALL.iter().position(|f| *f == field).unwrap();
    row[idx] = value;
    row
}
