//! Declarative manual corrections.

use polars::prelude::DataFrame;
use tracing::debug;

use layoffs_model::{CorrectionOutcome, CorrectionRule};

use crate::data_utils::{is_string_column, set_string_column, string_values};
use crate::error::{Result, TransformError};

/// Apply one rule; returns how many rows matched. A rule matching nothing
/// leaves the table as it was.
pub fn apply_correction(df: &mut DataFrame, rule: &CorrectionRule) -> Result<usize> {
    if !is_string_column(df, rule.target_field)? {
        return Err(TransformError::NonTextColumn {
            field: rule.target_field,
        });
    }
    let keys = string_values(df, rule.match_field)?;
    let mut targets = string_values(df, rule.target_field)?;
    let mut matched = 0usize;
    for (key, target) in keys.iter().zip(targets.iter_mut()) {
        if key.as_deref() == Some(rule.match_value.as_str()) {
            *target = Some(rule.new_value.clone());
            matched += 1;
        }
    }
    if matched == 0 {
        debug!(
            match_field = %rule.match_field,
            match_value = %rule.match_value,
            "correction matched no rows"
        );
        return Ok(0);
    }
    set_string_column(df, rule.target_field, targets)?;
    debug!(
        match_field = %rule.match_field,
        match_value = %rule.match_value,
        target_field = %rule.target_field,
        matched,
        "applied correction"
    );
    Ok(matched)
}

/// Apply rules in listed order, so a later rule sees the effect of earlier ones.
pub fn apply_corrections(
    df: &mut DataFrame,
    rules: &[CorrectionRule],
) -> Result<Vec<CorrectionOutcome>> {
    let mut outcomes = Vec::with_capacity(rules.len());
    for rule in rules {
        let matched = apply_correction(df, rule)?;
        outcomes.push(CorrectionOutcome {
            rule: rule.clone(),
            matched,
        });
    }
    Ok(outcomes)
}
