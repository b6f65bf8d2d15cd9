//! CSV reading into raw rows.

mod header;
mod reader;

pub use header::{Column, ColumnIndex};
pub use reader::{InputFile, ReadOptions, load_input_file, read_raw_rows};
