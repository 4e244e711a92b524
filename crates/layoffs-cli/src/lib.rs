//! CLI library components for the layoffs cleaner.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
