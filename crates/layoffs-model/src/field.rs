//! Layoff event schema.
//!
//! Every staging table carries the same eleven fields. The schema is fixed at
//! load time; the pipeline only tightens column types and never adds or
//! removes fields (apart from the `row_num` working column).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Storage class of a field once the pipeline has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Free text, nullable.
    Text,
    /// Nullable floating point number.
    Numeric,
    /// Nullable calendar date.
    Date,
}

/// One of the eleven columns of a layoff event record.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Company,
    Location,
    TotalLaidOff,
    EventDate,
    PercentageLaidOff,
    Industry,
    Source,
    Stage,
    FundsRaised,
    Country,
    DateAdded,
}

impl Field {
    /// All fields in schema order.
    pub const ALL: [Field; 11] = [
        Field::Company,
        Field::Location,
        Field::TotalLaidOff,
        Field::EventDate,
        Field::PercentageLaidOff,
        Field::Industry,
        Field::Source,
        Field::Stage,
        Field::FundsRaised,
        Field::Country,
        Field::DateAdded,
    ];

    /// Column name used in frames and CSV output.
    pub const fn name(self) -> &'static str {
        match self {
            Field::Company => "company",
            Field::Location => "location",
            Field::TotalLaidOff => "total_laid_off",
            Field::EventDate => "event_date",
            Field::PercentageLaidOff => "percentage_laid_off",
            Field::Industry => "industry",
            Field::Source => "source",
            Field::Stage => "stage",
            Field::FundsRaised => "funds_raised",
            Field::Country => "country",
            Field::DateAdded => "date_added",
        }
    }

    pub const fn kind(self) -> FieldKind {
        match self {
            Field::TotalLaidOff | Field::PercentageLaidOff | Field::FundsRaised => {
                FieldKind::Numeric
            }
            Field::EventDate | Field::DateAdded => FieldKind::Date,
            _ => FieldKind::Text,
        }
    }

    /// Alternate header spellings found in published exports of the dataset.
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Field::EventDate => &["date"],
            Field::FundsRaised => &["funds_raised_millions"],
            _ => &[],
        }
    }

    pub fn is_text(self) -> bool {
        self.kind() == FieldKind::Text
    }

    pub fn is_date(self) -> bool {
        self.kind() == FieldKind::Date
    }

    /// Fields of the given kind, in schema order.
    pub fn of_kind(kind: FieldKind) -> Vec<Field> {
        Field::ALL
            .iter()
            .copied()
            .filter(|field| field.kind() == kind)
            .collect()
    }

    /// Resolve a CSV header to a field.
    ///
    /// Matching ignores case, surrounding whitespace and a leading BOM, and
    /// accepts the known aliases.
    pub fn from_header(header: &str) -> Option<Field> {
        let normalized = header.trim().trim_matches('\u{feff}').to_ascii_lowercase();
        Field::ALL.iter().copied().find(|field| {
            field.name() == normalized || field.aliases().contains(&normalized.as_str())
        })
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
