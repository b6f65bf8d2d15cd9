//! Category mapping table.
//!
//! Translates a Spanish category label (as typed by operators into the
//! `CATEGORY` column) into the English slug the classifier is expected to
//! emit. Lookups are insensitive to case and incidental whitespace.
//!
//! # Example
//!
//! ```
//! use catmatch_map::MappingTable;
//!
//! let table = MappingTable::from_entries([("Cultura", "culture")]).unwrap();
//! assert_eq!(table.lookup("  CULTURA "), Some("culture"));
//! assert_eq!(table.lookup("Deportes"), None);
//! ```

mod config;
mod defaults;
mod error;
mod normalize;
mod table;

pub use config::{MappingFile, load_mapping_file};
pub use defaults::DEFAULT_MAPPING;
pub use error::{MappingError, Result};
pub use normalize::normalize_label;
pub use table::{MappingEntry, MappingTable};
