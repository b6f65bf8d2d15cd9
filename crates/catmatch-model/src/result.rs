use serde::{Deserialize, Serialize};

use crate::record::ParsedRecord;

/// Aggregated comparison result for one input file.
///
/// `match_count + mismatches.len() == total_rows` always holds; rows whose
/// blob could not be parsed are counted as mismatches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileResult {
    pub filename: String,
    pub total_rows: usize,
    pub match_count: usize,
    /// Mismatches caused by a Spanish category absent from the mapping table.
    pub unmapped_count: usize,
    /// Mismatched records in source row order.
    pub mismatches: Vec<ParsedRecord>,
}

impl FileResult {
    /// An empty result for `filename`.
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            ..Self::default()
        }
    }

    pub fn mismatch_count(&self) -> usize {
        self.mismatches.len()
    }

    /// `match_count / total_rows`, or `None` when the file had no rows.
    pub fn match_rate(&self) -> Option<f64> {
        match_rate(self.match_count, self.total_rows)
    }
}

pub(crate) fn match_rate(matches: usize, total: usize) -> Option<f64> {
    if total == 0 {
        None
    } else {
        Some(matches as f64 / total as f64)
    }
}
