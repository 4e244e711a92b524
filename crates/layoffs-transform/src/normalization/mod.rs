//! Text and date normalization.
//!
//! - **text**: whitespace trimming and the optional synonym table
//! - **datetime**: date text parsing into `Date` columns
//! - **numeric**: `Float64` type tightening, used by the null canonicalizer

pub mod datetime;
pub mod numeric;
pub mod text;

use std::collections::BTreeMap;

use polars::prelude::DataFrame;
use tracing::{debug, warn};

use layoffs_model::{CleaningConfig, Field};

use crate::error::Result;

pub use datetime::{DateColumnOutcome, SANE_YEARS, normalize_date_column, parse_date_with_formats};
pub use numeric::tighten_numeric_column;
pub use text::{apply_synonyms, trim_field};

/// Counts collected by [`normalize`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeOutcome {
    pub trimmed: usize,
    pub parse_failures: BTreeMap<Field, usize>,
    pub synonym_replacements: usize,
}

/// Trim text fields, parse date fields and apply country synonyms, in place.
///
/// Parse failures are recovered: the value becomes missing and the row is
/// kept.
pub fn normalize(df: &mut DataFrame, config: &CleaningConfig) -> Result<NormalizeOutcome> {
    let mut outcome = NormalizeOutcome::default();
    for field in &config.trim_fields {
        let changed = trim_field(df, *field)?;
        if changed > 0 {
            debug!(field = %field, changed, "trimmed whitespace");
        }
        outcome.trimmed += changed;
    }
    for (field, formats) in &config.date_formats {
        let dates = normalize_date_column(df, *field, formats.as_slice(), &config.missing_tokens)?;
        if dates.failures > 0 {
            warn!(
                field = %field,
                failures = dates.failures,
                "date values did not match the expected format and were set to missing"
            );
        }
        outcome.parse_failures.insert(*field, dates.failures);
    }
    outcome.synonym_replacements = apply_synonyms(df, Field::Country, &config.country_synonyms)?;
    Ok(outcome)
}
