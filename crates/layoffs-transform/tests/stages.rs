//! Tests for the individual cleaning stages.

mod common;

use std::collections::BTreeMap;

use chrono::NaiveDate;
use polars::prelude::{AnyValue, DataType, NamedFrom, Series};

use layoffs_ingest::any_to_date;
use layoffs_model::{CleaningConfig, CorrectionRule, Field, ROW_NUM_COLUMN};
use layoffs_transform::normalization::{normalize_date_column, trim_field};
use layoffs_transform::{
    TransformError, apply_correction, assign_row_numbers, blank_to_missing, canonicalize_nulls,
    dataset_summary, deduplicate, distinct_sorted_values, filter_incomplete, finalize_schema,
    missing_counts, normalize,
};

use common::{ACME, staging, with};

#[test]
fn dedupe_keeps_first_of_each_group() {
    let other = with(ACME, Field::Company, "Globex");
    let df = staging(&[ACME, other, ACME, ACME]);

    let numbered = assign_row_numbers(&df).unwrap();
    let ordinals: Vec<Option<u32>> = numbered
        .column(ROW_NUM_COLUMN)
        .unwrap()
        .u32()
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(ordinals, vec![Some(1), Some(1), Some(2), Some(3)]);

    let deduped = deduplicate(&df).unwrap();
    assert_eq!(deduped.height(), 2);
    let companies = deduped.column("company").unwrap().str().unwrap();
    assert_eq!(companies.get(0), Some("Acme"));
    assert_eq!(companies.get(1), Some("Globex"));
    // input is untouched
    assert_eq!(df.height(), 4);
    assert!(df.column(ROW_NUM_COLUMN).is_err());
}

#[test]
fn dedupe_groups_missing_with_missing_but_not_with_empty() {
    let mut df = staging(&[ACME, ACME, ACME]);
    let industry: Vec<Option<&str>> = vec![None, None, Some("")];
    df.with_column(Series::new("industry".into(), industry))
        .unwrap();

    let deduped = deduplicate(&df).unwrap();
    assert_eq!(deduped.height(), 2);
}

#[test]
fn dedupe_treats_untrimmed_values_as_distinct() {
    let padded = with(ACME, Field::Company, "Acme ");
    let deduped = deduplicate(&staging(&[ACME, padded])).unwrap();
    assert_eq!(deduped.height(), 2);
}

#[test]
fn trim_keeps_internal_whitespace() {
    let row = with(ACME, Field::Company, "  Big  Corp\t");
    let mut df = staging(&[row, ACME]);
    let changed = trim_field(&mut df, Field::Company).unwrap();
    assert_eq!(changed, 1);
    let companies = df.column("company").unwrap().str().unwrap();
    assert_eq!(companies.get(0), Some("Big  Corp"));
    assert_eq!(companies.get(1), Some("Acme"));
}

#[test]
fn unparseable_dates_become_missing_and_rows_survive() {
    let bad = with(ACME, Field::EventDate, "2023-01-15");
    let blank = with(ACME, Field::EventDate, " ");
    let mut df = staging(&[ACME, bad, blank]);

    let us_formats = ["%m/%d/%Y".to_string()];
    let outcome = normalize_date_column(&mut df, Field::EventDate, &us_formats[..], &[]).unwrap();
    assert_eq!(outcome.parsed, 1);
    assert_eq!(outcome.failures, 1);
    assert_eq!(df.height(), 3);

    let column = df.column("event_date").unwrap();
    assert_eq!(column.dtype(), &DataType::Date);
    assert_eq!(
        any_to_date(column.get(0).unwrap()),
        NaiveDate::from_ymd_opt(2023, 1, 15)
    );
    assert_eq!(column.get(1).unwrap(), AnyValue::Null);
    assert_eq!(column.get(2).unwrap(), AnyValue::Null);
}

#[test]
fn date_added_is_parsed_from_each_row() {
    let later = with(ACME, Field::DateAdded, "2023-02-01");
    let mut df = staging(&[ACME, later]);
    normalize(&mut df, &CleaningConfig::default()).unwrap();
    let column = df.column("date_added").unwrap();
    assert_eq!(
        any_to_date(column.get(0).unwrap()),
        NaiveDate::from_ymd_opt(2022, 12, 16)
    );
    assert_eq!(
        any_to_date(column.get(1).unwrap()),
        NaiveDate::from_ymd_opt(2023, 2, 1)
    );
}

#[test]
fn normalize_is_a_no_op_on_normalized_tables() {
    let config = CleaningConfig::default();
    let padded = with(ACME, Field::Company, " Acme ");
    let mut df = staging(&[padded]);
    let first = normalize(&mut df, &config).unwrap();
    assert_eq!(first.trimmed, 1);

    let snapshot = df.clone();
    let second = normalize(&mut df, &config).unwrap();
    assert_eq!(second.trimmed, 0);
    assert_eq!(second.parse_failures.values().sum::<usize>(), 0);
    assert!(df.equals_missing(&snapshot));
}

#[test]
fn country_synonyms_only_apply_when_supplied() {
    let dotted = with(ACME, Field::Country, "United States.");
    let mut config = CleaningConfig::default();

    let mut df = staging(&[dotted]);
    let outcome = normalize(&mut df, &config).unwrap();
    assert_eq!(outcome.synonym_replacements, 0);
    assert_eq!(
        df.column("country").unwrap().str().unwrap().get(0),
        Some("United States.")
    );

    config.country_synonyms = BTreeMap::from([(
        "United States.".to_string(),
        "United States".to_string(),
    )]);
    let mut df = staging(&[dotted]);
    let outcome = normalize(&mut df, &config).unwrap();
    assert_eq!(outcome.synonym_replacements, 1);
    assert_eq!(
        df.column("country").unwrap().str().unwrap().get(0),
        Some("United States")
    );
}

#[test]
fn whitespace_only_number_becomes_missing() {
    let row = with(ACME, Field::TotalLaidOff, "   ");
    let mut df = staging(&[row]);
    canonicalize_nulls(&mut df, &CleaningConfig::default()).unwrap();
    let totals = df.column("total_laid_off").unwrap();
    assert_eq!(totals.dtype(), &DataType::Float64);
    assert_eq!(totals.f64().unwrap().get(0), None);
    assert_eq!(totals.null_count(), 1);
}

#[test]
fn null_token_becomes_missing() {
    let row = with(ACME, Field::FundsRaised, "NULL");
    let mut df = staging(&[row]);
    let replaced = blank_to_missing(&mut df, Field::FundsRaised, &["NULL".to_string()]).unwrap();
    assert_eq!(replaced, 1);
    assert_eq!(df.column("funds_raised").unwrap().str().unwrap().get(0), None);
}

#[test]
fn appsmith_gets_an_industry() {
    let appsmith = with(with(ACME, Field::Company, "Appsmith"), Field::Industry, "");
    let mut df = staging(&[appsmith, ACME]);
    let outcome = canonicalize_nulls(&mut df, &CleaningConfig::default()).unwrap();

    let industries = df.column("industry").unwrap().str().unwrap();
    assert_eq!(industries.get(0), Some("Software Development"));
    assert_eq!(industries.get(1), Some("Retail"));
    assert_eq!(outcome.corrections[0].matched, 1);
    // Eyeo is not in the table
    assert_eq!(outcome.corrections[1].matched, 0);
}

#[test]
fn correction_without_match_is_a_no_op() {
    let mut df = staging(&[ACME]);
    let before = df.clone();
    let rule = CorrectionRule::new(Field::Company, "Initech", Field::Industry, "Software");
    assert_eq!(apply_correction(&mut df, &rule).unwrap(), 0);
    assert!(df.equals_missing(&before));
}

#[test]
fn non_numeric_text_is_a_schema_violation() {
    let row = with(ACME, Field::PercentageLaidOff, "ten percent");
    let mut df = staging(&[ACME, row]);
    let err = canonicalize_nulls(&mut df, &CleaningConfig::default()).unwrap_err();
    match err {
        TransformError::SchemaViolation { field, row, value } => {
            assert_eq!(field, Field::PercentageLaidOff);
            assert_eq!(row, 1);
            assert_eq!(value, "ten percent");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn filter_requires_both_critical_fields() {
    let no_total = with(ACME, Field::TotalLaidOff, "");
    let no_pct = with(ACME, Field::PercentageLaidOff, "");
    let no_funds = with(ACME, Field::FundsRaised, "");
    let mut df = staging(&[ACME, no_total, no_pct, no_funds]);
    canonicalize_nulls(&mut df, &CleaningConfig::default()).unwrap();

    let removed =
        filter_incomplete(&mut df, &[Field::TotalLaidOff, Field::PercentageLaidOff]).unwrap();
    assert_eq!(removed, 2);
    assert_eq!(df.height(), 2);
    assert_eq!(df.column("funds_raised").unwrap().null_count(), 1);
}

#[test]
fn finalize_drops_only_the_working_column() {
    let mut df = deduplicate(&staging(&[ACME])).unwrap();
    assert!(finalize_schema(&mut df).unwrap());
    assert_eq!(df.width(), 11);
    assert!(!finalize_schema(&mut df).unwrap());
}

#[test]
fn country_review_list_is_sorted_and_distinct() {
    let rows = [
        with(ACME, Field::Country, "United States"),
        with(ACME, Field::Country, "Germany"),
        with(ACME, Field::Country, "United States."),
        with(ACME, Field::Country, " Germany"),
        with(ACME, Field::Country, ""),
    ];
    let countries = distinct_sorted_values(&staging(&rows), Field::Country).unwrap();
    insta::assert_snapshot!(countries.join(" | "), @"Germany | United States | United States.");
}

#[test]
fn summary_counts_missing_numeric_values() {
    let rows = [
        ACME,
        with(ACME, Field::TotalLaidOff, ""),
        with(with(ACME, Field::FundsRaised, " "), Field::PercentageLaidOff, ""),
    ];
    let df = staging(&rows);
    let summary = dataset_summary(&df, &[]).unwrap();
    assert_eq!(summary.total_records, 3);
    assert_eq!(summary.missing[&Field::TotalLaidOff], 1);
    assert_eq!(summary.missing[&Field::PercentageLaidOff], 1);
    assert_eq!(summary.missing[&Field::FundsRaised], 1);

    let all = missing_counts(&df, &Field::ALL, &[]).unwrap();
    assert_eq!(all[&Field::Company], 0);
}

#[test]
fn missing_counts_include_configured_tokens() {
    let rows = [ACME, with(ACME, Field::FundsRaised, " NULL "), with(ACME, Field::FundsRaised, "")];
    let df = staging(&rows);
    let tokens = ["NULL".to_string()];

    assert_eq!(missing_counts(&df, &[Field::FundsRaised], &[]).unwrap()[&Field::FundsRaised], 1);
    let counted = missing_counts(&df, &[Field::FundsRaised], &tokens).unwrap();
    assert_eq!(counted[&Field::FundsRaised], 2);
    let summary = dataset_summary(&df, &tokens).unwrap();
    assert_eq!(summary.missing[&Field::FundsRaised], 2);
}
