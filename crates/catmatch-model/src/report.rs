//! In-memory report: one summary entry and one detail section per file.

use serde::{Deserialize, Serialize};

use crate::record::ParsedRecord;
use crate::result::match_rate;

/// Column headers of a per-file detail section, in output order.
pub const DETAIL_HEADERS: [&str; 7] = [
    "ADMINISTRATIVE_CODE",
    "ID",
    "CREATED_AT",
    "END_AT",
    "JSON",
    "CATEGORY_ES",
    "CATEGORY_EN",
];

/// Name used for the aggregate row of [`Report::totals`].
pub const TOTAL_LABEL: &str = "TOTAL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryEntry {
    pub filename: String,
    pub total_rows: usize,
    pub match_count: usize,
    pub mismatch_count: usize,
    pub unmapped_count: usize,
    /// `None` when `total_rows == 0`.
    pub match_rate: Option<f64>,
}

impl SummaryEntry {
    pub fn from_counts(
        filename: impl Into<String>,
        total_rows: usize,
        match_count: usize,
        unmapped_count: usize,
    ) -> Self {
        Self {
            filename: filename.into(),
            total_rows,
            match_count,
            mismatch_count: total_rows.saturating_sub(match_count),
            unmapped_count,
            match_rate: match_rate(match_count, total_rows),
        }
    }

    /// Match rate as a percentage string, `N/A` when undefined.
    pub fn match_rate_display(&self) -> String {
        match self.match_rate {
            Some(rate) => format!("{:.2}%", rate * 100.0),
            None => "N/A".to_string(),
        }
    }
}

/// One mismatched record exposed with exactly the seven detail columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct DetailRow {
    pub administrative_code: String,
    pub id: String,
    pub created_at: String,
    pub end_at: String,
    pub json: String,
    pub category_es: String,
    pub category_en: String,
}

impl DetailRow {
    /// Cell values in [`DETAIL_HEADERS`] order.
    pub fn values(&self) -> [&str; 7] {
        [
            self.administrative_code.as_str(),
            self.id.as_str(),
            self.created_at.as_str(),
            self.end_at.as_str(),
            self.json.as_str(),
            self.category_es.as_str(),
            self.category_en.as_str(),
        ]
    }
}

impl From<&ParsedRecord> for DetailRow {
    fn from(record: &ParsedRecord) -> Self {
        Self {
            administrative_code: record.administrative_code.clone(),
            id: record.id.clone(),
            created_at: record.created_at.clone(),
            end_at: record.end_at.clone(),
            json: record.json.clone(),
            category_es: record.category_es.clone(),
            category_en: record.category_en_display().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailSection {
    pub filename: String,
    pub rows: Vec<DetailRow>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub summary: Vec<SummaryEntry>,
    pub details: Vec<DetailSection>,
}

impl Report {
    /// Sum of all summary entries, labelled [`TOTAL_LABEL`].
    pub fn totals(&self) -> SummaryEntry {
        let (total, matches, unmapped) =
            self.summary
                .iter()
                .fold((0, 0, 0), |(total, matches, unmapped), entry| {
                    (
                        total + entry.total_rows,
                        matches + entry.match_count,
                        unmapped + entry.unmapped_count,
                    )
                });
        SummaryEntry::from_counts(TOTAL_LABEL, total, matches, unmapped)
    }

    pub fn is_empty(&self) -> bool {
        self.summary.is_empty()
    }
}
