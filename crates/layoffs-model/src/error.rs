use std::path::PathBuf;

use thiserror::Error;

use crate::field::Field;

/// Errors raised while loading or validating a cleaning configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("correction #{index} targets {field}, which is not a text field")]
    NonTextCorrectionTarget { index: usize, field: Field },

    #[error("trim configured for non-text field {field}")]
    NonTextTrimField { field: Field },

    #[error("date formats configured for non-date field {field}")]
    DateFormatOnNonDateField { field: Field },

    #[error("date field {field} has an empty format list")]
    EmptyDateFormats { field: Field },

    #[error("date field {field} has no configured formats")]
    MissingDateFormats { field: Field },

    #[error("correction #{index} writes a blank value")]
    BlankCorrectionValue { index: usize },

    #[error("at least one critical field is required")]
    NoCriticalFields,
}

impl ConfigError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
