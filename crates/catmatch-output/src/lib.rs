//! Report output generation.
//!
//! This crate persists an in-memory [`Report`](catmatch_model::Report):
//!
//! - **XLSX**: a `Summary` sheet plus one mismatch sheet per input file
//! - **CSV**: the summary table only, for environments without a
//!   spreadsheet application

mod error;
mod sheet;
mod summary_csv;
mod xlsx;

// Re-export public types and functions
pub use error::{OutputError, Result};
pub use sheet::{MAX_SHEET_NAME_LEN, SUMMARY_SHEET, SheetNamer, sanitize_sheet_name};
pub use summary_csv::{SUMMARY_HEADERS, write_summary_csv};
pub use xlsx::{build_workbook, fallback_path, write_report};
