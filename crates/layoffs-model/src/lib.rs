//! Data model for the layoffs cleaning pipeline.

pub mod config;
pub mod error;
pub mod field;
pub mod report;

pub use config::{CleaningConfig, CorrectionRule, default_corrections};
pub use error::{ConfigError, Result};
pub use field::{Field, FieldKind};
pub use report::{
    CleaningReport, CorrectionOutcome, DatasetSummary, Stage, StageReport,
};

/// Name of the artifact produced by a cleaning run.
pub const OUTPUT_TABLE_NAME: &str = "layoffs_staging2";

/// Working column holding the per-group duplicate ordinal.
pub const ROW_NUM_COLUMN: &str = "row_num";
