//! Input collaborator for category match reports.
//!
//! This crate finds the CSV exports to reconcile and turns each one into an
//! ordered list of [`RawRow`](catmatch_model::RawRow)s.
//!
//! # Features
//!
//! - **Discovery**: `*.csv` in a root folder and its `reports/` subfolder
//! - **Decoding**: UTF-8 (with or without BOM), Windows-1252 fallback
//! - **Header Resolution**: case-insensitive column lookup; missing columns
//!   read as empty strings
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use catmatch_ingest::{ReadOptions, discover_input_files, load_input_file};
//!
//! let files = discover_input_files(Path::new("."), &[])?;
//! for path in &files {
//!     let input = load_input_file(path, &ReadOptions::default())?;
//!     println!("{}: {} rows", input.filename, input.rows.len());
//! }
//! ```

mod decode;
mod discovery;
mod error;
mod rows;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use rows::{Column, ColumnIndex, InputFile, ReadOptions, load_input_file, read_raw_rows};

// === Decoding ===
pub use decode::{DecodedText, decode_bytes};

// === File Discovery ===
pub use discovery::{REPORT_CSV_NAME, REPORTS_SUBDIR, discover_input_files, list_csv_files};
