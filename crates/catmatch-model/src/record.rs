//! Per-row records: the raw CSV view and the parsed comparison view.

use serde::{Deserialize, Serialize};

/// Unmodified field values from one input CSV line.
///
/// Missing columns or short rows are represented by empty strings, never by
/// an absent row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    pub administrative_code: String,
    pub id: String,
    pub created_at: String,
    pub end_at: String,
    /// Raw `JSON` column, carried through to the detail output untouched.
    pub json: String,
    /// Spanish category label (`CATEGORY`).
    pub category: String,
    /// Loosely structured `NEW_RESULT` blob holding the English slug.
    pub new_result: String,
}

/// The fields needed for comparison, derived from a [`RawRow`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedRecord {
    pub administrative_code: String,
    pub id: String,
    pub created_at: String,
    pub end_at: String,
    pub json: String,
    /// Spanish label, trimmed, as shown in reports.
    pub category_es: String,
    /// Normalized Spanish label used as the mapping key.
    pub category_key: String,
    /// English slug extracted from `NEW_RESULT`, if one could be located.
    pub category_en: Option<String>,
}

impl ParsedRecord {
    /// English slug for display; empty when none was extracted.
    pub fn category_en_display(&self) -> &str {
        self.category_en.as_deref().unwrap_or("")
    }
}
