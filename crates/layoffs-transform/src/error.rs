use layoffs_model::{ConfigError, Field, Stage};
use polars::prelude::PolarsError;
use thiserror::Error;

/// Fatal pipeline errors. Date parse failures and corrections that match no
/// rows are recovered locally and never surface here.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("column '{field}' not found in table")]
    MissingColumn { field: Field },

    /// A value that cannot be stored once the column type is tightened.
    #[error("cannot convert {field} to numeric: row {row} holds '{value}'")]
    SchemaViolation {
        field: Field,
        row: usize,
        value: String,
    },

    #[error("column '{field}' is not a text column")]
    NonTextColumn { field: Field },

    #[error("invalid cleaning config: {0}")]
    Config(#[from] ConfigError),

    #[error("cleaning run cancelled before stage {stage}")]
    Cancelled { stage: Stage },

    #[error("DataFrame operation failed: {0}")]
    DataFrame(#[from] PolarsError),
}

pub type Result<T> = std::result::Result<T, TransformError>;
