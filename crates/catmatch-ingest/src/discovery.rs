//! Input file discovery.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// Subfolder searched in addition to the root.
pub const REPORTS_SUBDIR: &str = "reports";

/// CSV fallback written next to the workbook; never treated as input.
pub const REPORT_CSV_NAME: &str = "category_match_report.csv";

/// Lists all CSV files in a directory.
///
/// Returns files sorted by filename.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();

        // Skip directories
        if !path.is_file() {
            continue;
        }

        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

        if is_csv {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}

/// Finds the CSV files to reconcile under `root` and `root/reports/`.
///
/// Files named [`REPORT_CSV_NAME`] or any of `excluded_names` are skipped
/// (case-insensitive). The result is de-duplicated and sorted by path.
pub fn discover_input_files(root: &Path, excluded_names: &[&str]) -> Result<Vec<PathBuf>> {
    let mut found = BTreeSet::new();
    found.extend(list_csv_files(root)?);

    let reports = root.join(REPORTS_SUBDIR);
    if reports.is_dir() {
        found.extend(list_csv_files(&reports)?);
    }

    let files: Vec<PathBuf> = found
        .into_iter()
        .filter(|path| !is_excluded(path, excluded_names))
        .collect();
    tracing::debug!(root = %root.display(), count = files.len(), "discovered input files");
    Ok(files)
}

fn is_excluded(path: &Path, excluded_names: &[&str]) -> bool {
    let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
        return false;
    };
    name.eq_ignore_ascii_case(REPORT_CSV_NAME)
        || excluded_names
            .iter()
            .any(|excluded| name.eq_ignore_ascii_case(excluded))
}
