//! Category reconciliation core.
//!
//! Pure computation over in-memory rows:
//!
//! - [`parse_row`] normalizes one [`RawRow`](catmatch_model::RawRow) and
//!   extracts the English slug from its result blob
//! - [`Matcher`] classifies a parsed record against a
//!   [`MappingTable`](catmatch_map::MappingTable)
//! - [`aggregate`] folds every row of one file into a
//!   [`FileResult`](catmatch_model::FileResult)
//! - [`build_report`] renders summary and detail views
//!
//! Nothing here performs I/O or fails on malformed row data.

mod aggregate;
mod extract;
mod matcher;
mod parser;
mod report;

pub use aggregate::aggregate;
pub use extract::extract_category;
pub use matcher::Matcher;
pub use parser::parse_row;
pub use report::build_report;
