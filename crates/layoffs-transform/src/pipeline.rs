//! The cleaning pipeline.
//!
//! Stages run strictly in order, each completing before the next starts:
//! 1. **Deduplicate**: keep the first row of each exact-duplicate group
//! 2. **Normalize**: trim text, parse dates, apply country synonyms
//! 3. **Canonicalize nulls**: blanks to missing, numeric typing, corrections
//! 4. **Filter incomplete**: drop rows missing a critical field
//! 5. **Settle duplicates** (optional): re-run dedupe on normalized values
//! 6. **Finalize schema**: drop the `row_num` working column
//!
//! The staging frame is only read; all work happens on a private copy, so a
//! failed run can be retried from the same input.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use polars::prelude::DataFrame;
use tracing::{info, info_span};

use layoffs_model::{CleaningConfig, CleaningReport, Field, Stage, StageReport};

use crate::data_utils::require_schema;
use crate::dedupe::deduplicate;
use crate::diagnostics::{dataset_summary, distinct_sorted_values};
use crate::error::{Result, TransformError};
use crate::filter::filter_incomplete;
use crate::finalize::finalize_schema;
use crate::normalization::{NormalizeOutcome, normalize};
use crate::nulls::{CanonicalizeOutcome, canonicalize_nulls};

/// Cleaned table plus everything observed while producing it.
#[derive(Debug, Clone)]
pub struct CleaningOutcome {
    pub frame: DataFrame,
    pub report: CleaningReport,
}

/// Configured, reusable cleaning run.
#[derive(Debug, Clone)]
pub struct CleaningPipeline<'a> {
    config: &'a CleaningConfig,
    cancel: Option<Arc<AtomicBool>>,
}

impl<'a> CleaningPipeline<'a> {
    pub fn new(config: &'a CleaningConfig) -> Self {
        Self {
            config,
            cancel: None,
        }
    }

    /// Check `flag` between stages; once it is set the run stops with
    /// [`TransformError::Cancelled`]. A stage that has started always
    /// completes.
    #[must_use]
    pub fn with_cancellation(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Stages this pipeline will run, in order.
    pub fn stages(&self) -> Vec<Stage> {
        let mut stages = vec![
            Stage::Deduplicate,
            Stage::Normalize,
            Stage::CanonicalizeNulls,
            Stage::FilterIncomplete,
        ];
        if self.config.settle_duplicates {
            stages.push(Stage::SettleDuplicates);
        }
        stages.push(Stage::FinalizeSchema);
        stages
    }

    pub fn run(&self, staging: &DataFrame) -> Result<CleaningOutcome> {
        let run_span = info_span!("clean", input_rows = staging.height());
        let _run_guard = run_span.enter();
        let run_start = Instant::now();
        self.config.validate()?;
        require_schema(staging)?;

        let mut report = CleaningReport::default();
        let mut df = staging.clone();
        let mut normalized = NormalizeOutcome::default();
        let mut canonical = CanonicalizeOutcome::default();

        for stage in self.stages() {
            self.checkpoint(stage)?;
            let stage_span = info_span!("stage", stage = %stage);
            let _stage_guard = stage_span.enter();
            let start = Instant::now();
            let rows_in = df.height();
            match stage {
                Stage::Deduplicate | Stage::SettleDuplicates => df = deduplicate(&df)?,
                Stage::Normalize => normalized = normalize(&mut df, self.config)?,
                Stage::CanonicalizeNulls => {
                    canonical = canonicalize_nulls(&mut df, self.config)?;
                }
                Stage::FilterIncomplete => {
                    filter_incomplete(&mut df, &self.config.critical_fields)?;
                }
                Stage::FinalizeSchema => {
                    finalize_schema(&mut df)?;
                }
            }
            let rows_out = df.height();
            info!(
                rows_in,
                rows_out,
                elapsed_ms = start.elapsed().as_millis() as u64,
                "stage complete"
            );
            report.stages.push(StageReport {
                stage,
                rows_in,
                rows_out,
            });
        }

        report.parse_failures = normalized.parse_failures;
        report.synonym_replacements = normalized.synonym_replacements;
        report.blanks_replaced = canonical.blanks_replaced;
        report.corrections = canonical.corrections;
        report.missing_after_canonicalization = canonical.missing;
        report.summary = dataset_summary(&df, &self.config.missing_tokens)?;
        report.countries = distinct_sorted_values(&df, Field::Country)?;
        info!(
            input_rows = report.input_rows(),
            output_rows = report.output_rows(),
            elapsed_ms = run_start.elapsed().as_millis() as u64,
            "cleaning complete"
        );
        Ok(CleaningOutcome { frame: df, report })
    }

    fn checkpoint(&self, stage: Stage) -> Result<()> {
        match &self.cancel {
            Some(flag) if flag.load(Ordering::Acquire) => Err(TransformError::Cancelled { stage }),
            _ => Ok(()),
        }
    }
}

/// Run the pipeline over `staging` with `config`.
pub fn clean_layoffs(staging: &DataFrame, config: &CleaningConfig) -> Result<CleaningOutcome> {
    CleaningPipeline::new(config).run(staging)
}
