//! Cleaning stages for layoff event tables.
//!
//! - **dedupe**: exact-duplicate removal with the `row_num` ordinal
//! - **normalization**: whitespace trimming, date parsing, numeric typing
//! - **nulls**: blank-to-missing canonicalization and manual corrections
//! - **filter**: removal of rows missing critical fields
//! - **finalize**: working column removal
//! - **diagnostics**: read-only reporting queries
//! - **pipeline**: the ordered stage runner

pub mod corrections;
pub mod data_utils;
pub mod dedupe;
pub mod diagnostics;
pub mod error;
pub mod filter;
pub mod finalize;
pub mod normalization;
pub mod nulls;
pub mod pipeline;

pub use corrections::{apply_correction, apply_corrections};
pub use dedupe::{assign_row_numbers, deduplicate};
pub use diagnostics::{dataset_summary, distinct_sorted_values, missing_counts};
pub use error::{Result, TransformError};
pub use filter::filter_incomplete;
pub use finalize::finalize_schema;
pub use normalization::{NormalizeOutcome, normalize};
pub use nulls::{CanonicalizeOutcome, blank_to_missing, canonicalize_nulls};
pub use pipeline::{CleaningOutcome, CleaningPipeline, clean_layoffs};
