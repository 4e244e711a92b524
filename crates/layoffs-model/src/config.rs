//! Cleaning configuration.
//!
//! Every key is optional in the TOML file; anything left out falls back to the
//! defaults below, which reproduce the standard cleaning run for the layoffs
//! dataset. A `[date_formats]` table only replaces the fields it lists.
//!
//! ```toml
//! missing_tokens = ["NULL", "N/A"]
//!
//! [date_formats]
//! event_date = ["%m/%d/%Y"]
//!
//! [[corrections]]
//! match_field = "company"
//! match_value = "Airbnb"
//! target_field = "industry"
//! new_value = "Travel"
//!
//! [country_synonyms]
//! "United States." = "United States"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ConfigError, Result};
use crate::field::{Field, FieldKind};

/// A manual value correction: when `match_field` equals `match_value`,
/// overwrite `target_field` with `new_value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionRule {
    pub match_field: Field,
    pub match_value: String,
    pub target_field: Field,
    pub new_value: String,
}

impl CorrectionRule {
    pub fn new(
        match_field: Field,
        match_value: impl Into<String>,
        target_field: Field,
        new_value: impl Into<String>,
    ) -> Self {
        Self {
            match_field,
            match_value: match_value.into(),
            target_field,
            new_value: new_value.into(),
        }
    }
}

/// Options controlling each pipeline stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CleaningConfig {
    /// Text fields whose values are whitespace-trimmed by the normalizer.
    pub trim_fields: Vec<Field>,
    /// Accepted input formats per date field, tried in order.
    #[serde(deserialize_with = "date_formats_over_defaults")]
    pub date_formats: BTreeMap<Field, Vec<String>>,
    /// Literal values (compared after trimming) treated as missing.
    pub missing_tokens: Vec<String>,
    /// Rows missing any of these fields are dropped.
    pub critical_fields: Vec<Field>,
    /// Manual corrections, applied in listed order.
    pub corrections: Vec<CorrectionRule>,
    /// Country spelling replacements. Empty means country values are only
    /// reported, never rewritten.
    pub country_synonyms: BTreeMap<String, String>,
    /// Re-run deduplication on normalized values before the schema is
    /// finalized.
    pub settle_duplicates: bool,
}

impl Default for CleaningConfig {
    fn default() -> Self {
        Self {
            trim_fields: Field::of_kind(FieldKind::Text),
            date_formats: default_date_formats(),
            missing_tokens: vec!["NULL".to_string()],
            critical_fields: vec![Field::TotalLaidOff, Field::PercentageLaidOff],
            corrections: default_corrections(),
            country_synonyms: BTreeMap::new(),
            settle_duplicates: true,
        }
    }
}

fn default_date_formats() -> BTreeMap<Field, Vec<String>> {
    BTreeMap::from([
        (Field::EventDate, vec!["%m/%d/%Y".to_string()]),
        (Field::DateAdded, vec!["%Y-%m-%d".to_string()]),
    ])
}

fn date_formats_over_defaults<'de, D>(
    deserializer: D,
) -> std::result::Result<BTreeMap<Field, Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let listed = BTreeMap::<Field, Vec<String>>::deserialize(deserializer)?;
    let mut formats = default_date_formats();
    formats.extend(listed);
    Ok(formats)
}

/// Industry fixes for companies whose industry is blank in the source data.
pub fn default_corrections() -> Vec<CorrectionRule> {
    vec![
        CorrectionRule::new(
            Field::Company,
            "Appsmith",
            Field::Industry,
            "Software Development",
        ),
        CorrectionRule::new(Field::Company, "Eyeo", Field::Industry, "Software Development"),
    ]
}

impl CleaningConfig {
    /// Load a configuration from a TOML file and validate it.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        let config: CleaningConfig = toml::from_str(&text).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.critical_fields.is_empty() {
            return Err(ConfigError::NoCriticalFields);
        }
        if let Some(field) = self.trim_fields.iter().find(|field| !field.is_text()) {
            return Err(ConfigError::NonTextTrimField { field: *field });
        }
        for (field, formats) in &self.date_formats {
            if !field.is_date() {
                return Err(ConfigError::DateFormatOnNonDateField { field: *field });
            }
            if formats.is_empty() {
                return Err(ConfigError::EmptyDateFormats { field: *field });
            }
        }
        for field in Field::of_kind(FieldKind::Date) {
            if !self.date_formats.contains_key(&field) {
                return Err(ConfigError::MissingDateFormats { field });
            }
        }
        for (index, rule) in self.corrections.iter().enumerate() {
            if !rule.target_field.is_text() {
                return Err(ConfigError::NonTextCorrectionTarget {
                    index,
                    field: rule.target_field,
                });
            }
            if rule.new_value.trim().is_empty() {
                return Err(ConfigError::BlankCorrectionValue { index });
            }
        }
        Ok(())
    }
}
