use std::fs;
use std::path::PathBuf;

use polars::prelude::{DataFrame, DataType, IntoColumn, NamedFrom, Series};
use tempfile::TempDir;

use layoffs_ingest::{IngestError, load_staging_frame, read_csv_table, write_csv_table};
use layoffs_model::Field;

const HEADER: &str = "company,location,total_laid_off,date,percentage_laid_off,industry,source,stage,funds_raised_millions,country,date_added";

fn temp_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn reads_raw_cells_without_trimming() {
    let dir = TempDir::new().expect("temp dir");
    let contents = format!(
        "{HEADER}\nAcme , SF,,01/15/2023,,Retail,src,Seed,,USA,2022-12-16\n\n"
    );
    let path = temp_file(&dir, "layoffs.csv", &contents);
    let table = read_csv_table(&path).expect("read csv");
    assert_eq!(table.headers.len(), 11);
    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.rows[0][0], "Acme ");
    assert_eq!(table.rows[0][1], " SF");
    assert_eq!(table.field_index(Field::EventDate), Some(3));
}

#[test]
fn staging_frame_is_all_text_in_schema_order() {
    let dir = TempDir::new().expect("temp dir");
    let contents = format!(
        "{HEADER}\nAcme,SF,50,01/15/2023,0.1,Retail,src,Seed,1000000,USA,2022-12-16\n"
    );
    let path = temp_file(&dir, "layoffs.csv", &contents);
    let df = load_staging_frame(&path).expect("load frame");
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    let expected: Vec<String> = Field::ALL.iter().map(|f| f.name().to_string()).collect();
    assert_eq!(names, expected);
    for column in df.get_columns() {
        assert_eq!(column.dtype(), &DataType::String);
    }
    let total = df.column("total_laid_off").unwrap().str().unwrap();
    assert_eq!(total.get(0), Some("50"));
}

#[test]
fn missing_field_is_reported() {
    let dir = TempDir::new().expect("temp dir");
    let path = temp_file(&dir, "partial.csv", "company,location\nAcme,SF\n");
    let err = load_staging_frame(&path).expect_err("missing columns");
    assert!(matches!(
        err,
        IngestError::MissingColumn {
            field: Field::TotalLaidOff,
            ..
        }
    ));
}

#[test]
fn empty_file_is_rejected() {
    let dir = TempDir::new().expect("temp dir");
    let path = temp_file(&dir, "empty.csv", "\n\n");
    let err = read_csv_table(&path).expect_err("empty csv");
    assert!(matches!(err, IngestError::EmptyCsv { .. }));
}

#[test]
fn writes_missing_as_empty_cells() {
    let dir = TempDir::new().expect("temp dir");
    let df = DataFrame::new(vec![
        Series::new("company".into(), vec![Some("Acme"), None]).into_column(),
        Series::new("total_laid_off".into(), vec![Some(50.0), None]).into_column(),
    ])
    .unwrap();
    let path = dir.path().join("out.csv");
    write_csv_table(&df, &path).expect("write csv");
    let written = fs::read_to_string(&path).expect("read back");
    assert_eq!(written, "company,total_laid_off\nAcme,50\n,\n");
}
