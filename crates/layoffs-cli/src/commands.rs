use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::{info, info_span};

use layoffs_ingest::{load_staging_frame, write_csv_table};
use layoffs_model::{CleaningConfig, CleaningReport, Field, OUTPUT_TABLE_NAME};
use layoffs_transform::{clean_layoffs, dataset_summary, distinct_sorted_values, missing_counts};

use crate::cli::{CleanArgs, InputArgs, ProfileArgs};
use crate::types::{CleanResult, ProfileResult};

pub fn run_clean(args: &CleanArgs) -> Result<CleanResult> {
    let span = info_span!("run", input = %args.input.display());
    let _guard = span.enter();

    let config = CleaningConfig::load_or_default(args.config.as_deref())
        .context("load cleaning config")?;
    let staging = load_input(&args.input)?;
    let outcome = clean_layoffs(&staging, &config).context("clean layoffs table")?;

    let output = if args.dry_run {
        info!("dry run, cleaned table not written");
        None
    } else {
        let path = args
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(&args.input));
        write_csv_table(&outcome.frame, &path)
            .with_context(|| format!("write {}", path.display()))?;
        info!(path = %path.display(), rows = outcome.frame.height(), "wrote cleaned table");
        Some(path)
    };

    if let Some(path) = &args.report {
        write_report(&outcome.report, path)?;
    }

    Ok(CleanResult {
        input: args.input.clone(),
        output,
        report_path: args.report.clone(),
        report: outcome.report,
    })
}

pub fn run_countries(args: &InputArgs) -> Result<Vec<String>> {
    let staging = load_input(&args.input)?;
    distinct_sorted_values(&staging, Field::Country).context("collect countries")
}

/// Missing counts of the raw table. Blanks and the configured
/// `missing_tokens` count as missing, matching the cleaning run.
pub fn run_profile(args: &ProfileArgs) -> Result<ProfileResult> {
    let config = CleaningConfig::load_or_default(args.config.as_deref())
        .context("load cleaning config")?;
    let staging = load_input(&args.input)?;
    let tokens = &config.missing_tokens;
    let missing = missing_counts(&staging, &Field::ALL, tokens).context("count missing values")?;
    let summary = dataset_summary(&staging, tokens).context("summarize dataset")?;
    Ok(ProfileResult {
        input: args.input.clone(),
        missing,
        summary,
    })
}

/// `layoffs_staging2.csv` in the input's directory.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_file_name(format!("{OUTPUT_TABLE_NAME}.csv"))
}

fn load_input(path: &Path) -> Result<DataFrame> {
    let staging = load_staging_frame(path).with_context(|| format!("load {}", path.display()))?;
    info!(rows = staging.height(), "loaded staging table");
    Ok(staging)
}

fn write_report(report: &CleaningReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("serialize run report")?;
    fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), "wrote run report");
    Ok(())
}
