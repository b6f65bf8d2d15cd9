//! Error types for mapping table construction.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MappingError {
    /// Mapping file could not be read.
    #[error("failed to read mapping file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Mapping text is not valid TOML.
    #[error("failed to parse mapping TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// Mapping file is not valid TOML.
    #[error("failed to parse mapping file {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A label or slug is blank after trimming.
    #[error("mapping entry for '{label}' has an empty label or slug")]
    EmptyEntry { label: String },

    /// Two labels normalize to the same key but map to different slugs.
    #[error("labels '{first}' and '{second}' both normalize to '{key}' with different slugs")]
    ConflictingEntry {
        key: String,
        first: String,
        second: String,
    },
}

pub type Result<T> = std::result::Result<T, MappingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MappingError::EmptyEntry {
            label: "Cultura".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "mapping entry for 'Cultura' has an empty label or slug"
        );
    }
}
