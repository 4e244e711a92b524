pub mod csv_table;
pub mod error;
pub mod polars_utils;
pub mod writer;

pub use csv_table::{CsvTable, build_staging_frame, load_staging_frame, read_csv_table};
pub use error::{IngestError, Result};
pub use polars_utils::{
    DATE_FORMAT, any_to_date, any_to_string, any_to_string_opt, date_from_days,
    days_from_date, format_numeric, parse_f64,
};
pub use writer::write_csv_table;
