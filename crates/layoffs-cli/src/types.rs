use std::collections::BTreeMap;
use std::path::PathBuf;

use layoffs_model::{CleaningReport, DatasetSummary, Field};

#[derive(Debug)]
pub struct CleanResult {
    pub input: PathBuf,
    /// Where the cleaned table went; `None` on a dry run.
    pub output: Option<PathBuf>,
    pub report_path: Option<PathBuf>,
    pub report: CleaningReport,
}

#[derive(Debug)]
pub struct ProfileResult {
    pub input: PathBuf,
    pub missing: BTreeMap<Field, usize>,
    pub summary: DatasetSummary,
}
