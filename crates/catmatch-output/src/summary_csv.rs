use std::path::Path;

use catmatch_model::Report;

use crate::error::{OutputError, Result};

/// Columns of the summary table, shared by the CSV and XLSX outputs.
pub const SUMMARY_HEADERS: [&str; 6] = [
    "file_name",
    "total",
    "matches",
    "mismatches",
    "unmapped",
    "match_rate",
];

/// Writes the summary table as CSV. Detail sections are not included.
pub fn write_summary_csv(report: &Report, path: &Path) -> Result<()> {
    let csv_error = |e: csv::Error| OutputError::Csv {
        path: path.to_path_buf(),
        message: e.to_string(),
    };
    let mut writer = csv::Writer::from_path(path).map_err(csv_error)?;
    writer.write_record(SUMMARY_HEADERS).map_err(csv_error)?;
    for entry in &report.summary {
        writer
            .write_record([
                entry.filename.clone(),
                entry.total_rows.to_string(),
                entry.match_count.to_string(),
                entry.mismatch_count.to_string(),
                entry.unmapped_count.to_string(),
                entry.match_rate_display(),
            ])
            .map_err(csv_error)?;
    }
    writer.flush().map_err(|e| OutputError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::info!(path = %path.display(), files = report.summary.len(), "wrote summary CSV");
    Ok(())
}
