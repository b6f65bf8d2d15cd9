//! TOML mapping overrides.
//!
//! ```toml
//! [mapping]
//! "Cultura" = "culture"
//! "Música y Conciertos" = "music-and-concerts"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MappingError, Result};
use crate::table::MappingTable;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MappingFile {
    #[serde(default)]
    pub mapping: BTreeMap<String, String>,
}

impl MappingTable {
    /// Parses a mapping table from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: MappingFile = toml::from_str(contents)?;
        Self::from_entries(file.mapping)
    }
}

/// Loads a mapping table from a TOML file.
pub fn load_mapping_file(path: &Path) -> Result<MappingTable> {
    let contents = std::fs::read_to_string(path).map_err(|e| MappingError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let table = MappingTable::from_toml_str(&contents).map_err(|e| match e {
        MappingError::Parse(source) => MappingError::Toml {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;
    tracing::debug!(
        path = %path.display(),
        entries = table.len(),
        "loaded mapping file"
    );
    Ok(table)
}
