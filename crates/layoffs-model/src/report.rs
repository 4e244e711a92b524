//! Run report and diagnostic types.
//!
//! Diagnostics are side-channel: they describe a table but are never written
//! back into it.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::CorrectionRule;
use crate::field::Field;

/// Pipeline stages in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    Deduplicate,
    Normalize,
    CanonicalizeNulls,
    FilterIncomplete,
    SettleDuplicates,
    FinalizeSchema,
}

impl Stage {
    pub const fn label(self) -> &'static str {
        match self {
            Stage::Deduplicate => "deduplicate",
            Stage::Normalize => "normalize",
            Stage::CanonicalizeNulls => "canonicalize-nulls",
            Stage::FilterIncomplete => "filter-incomplete",
            Stage::SettleDuplicates => "settle-duplicates",
            Stage::FinalizeSchema => "finalize-schema",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Row counts observed around one stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageReport {
    pub stage: Stage,
    pub rows_in: usize,
    pub rows_out: usize,
}

impl StageReport {
    pub fn rows_removed(&self) -> usize {
        self.rows_in.saturating_sub(self.rows_out)
    }
}

/// How many rows a correction rule touched. Zero is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionOutcome {
    pub rule: CorrectionRule,
    pub matched: usize,
}

/// Record count plus missing counts for the numeric fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub total_records: usize,
    pub missing: BTreeMap<Field, usize>,
}

/// Everything observed during one cleaning run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleaningReport {
    pub stages: Vec<StageReport>,
    /// Date values that could not be parsed and were set to missing.
    pub parse_failures: BTreeMap<Field, usize>,
    /// Values rewritten through the country synonym table.
    pub synonym_replacements: usize,
    /// Blank values and missing tokens rewritten to the missing marker.
    pub blanks_replaced: usize,
    pub corrections: Vec<CorrectionOutcome>,
    /// Missing counts per field right after null canonicalization.
    pub missing_after_canonicalization: BTreeMap<Field, usize>,
    /// Summary of the final table.
    pub summary: DatasetSummary,
    /// Distinct sorted country values of the final table.
    pub countries: Vec<String>,
}

impl CleaningReport {
    pub fn input_rows(&self) -> usize {
        self.stages.first().map_or(0, |stage| stage.rows_in)
    }

    pub fn output_rows(&self) -> usize {
        self.stages.last().map_or(0, |stage| stage.rows_out)
    }

    pub fn total_parse_failures(&self) -> usize {
        self.parse_failures.values().sum()
    }

    pub fn stage(&self, stage: Stage) -> Option<&StageReport> {
        self.stages.iter().find(|report| report.stage == stage)
    }
}
