//! XLSX workbook output.

use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Format, Workbook, Worksheet};

use catmatch_model::{DETAIL_HEADERS, DetailSection, Report, SummaryEntry};

use crate::error::{OutputError, Result};
use crate::sheet::{SUMMARY_SHEET, SheetNamer};
use crate::summary_csv::SUMMARY_HEADERS;

/// Excel's per-cell text limit, in characters.
const MAX_CELL_CHARS: usize = 32_767;

/// Builds the workbook: a summary sheet, then one sheet per detail section.
pub fn build_workbook(report: &Report) -> Result<Workbook> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let percent = Format::new().set_num_format("0.00%");

    let summary = workbook.add_worksheet();
    summary.set_name(SUMMARY_SHEET)?;
    write_summary_sheet(summary, &report.summary, &header, &percent)?;

    let mut namer = SheetNamer::new();
    for section in &report.details {
        let name = namer.name_for(&section.filename);
        let sheet = workbook.add_worksheet();
        sheet.set_name(&name)?;
        write_detail_sheet(sheet, section, &header)?;
    }
    Ok(workbook)
}

fn write_summary_sheet(
    sheet: &mut Worksheet,
    entries: &[SummaryEntry],
    header: &Format,
    percent: &Format,
) -> Result<()> {
    for (col, title) in SUMMARY_HEADERS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *title, header)?;
    }
    for (idx, entry) in entries.iter().enumerate() {
        let row = idx as u32 + 1;
        sheet.write_string(row, 0, entry.filename.as_str())?;
        sheet.write_number(row, 1, entry.total_rows as f64)?;
        sheet.write_number(row, 2, entry.match_count as f64)?;
        sheet.write_number(row, 3, entry.mismatch_count as f64)?;
        sheet.write_number(row, 4, entry.unmapped_count as f64)?;
        match entry.match_rate {
            Some(rate) => sheet.write_number_with_format(row, 5, rate, percent)?,
            None => sheet.write_string(row, 5, "N/A")?,
        };
    }
    sheet.set_column_width(0, 40)?;
    sheet.set_freeze_panes(1, 0)?;
    Ok(())
}

fn write_detail_sheet(sheet: &mut Worksheet, section: &DetailSection, header: &Format) -> Result<()> {
    for (col, title) in DETAIL_HEADERS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *title, header)?;
    }
    for (idx, detail) in section.rows.iter().enumerate() {
        let row = idx as u32 + 1;
        for (col, value) in detail.values().into_iter().enumerate() {
            sheet.write_string(row, col as u16, cell_text(value))?;
        }
    }
    sheet.set_freeze_panes(1, 0)?;
    Ok(())
}

fn cell_text(value: &str) -> String {
    if value.chars().count() > MAX_CELL_CHARS {
        value.chars().take(MAX_CELL_CHARS).collect()
    } else {
        value.to_string()
    }
}

/// Timestamped sibling used when `path` cannot be written, e.g.
/// `report.xlsx` becomes `report_20240301_101500.xlsx`.
pub fn fallback_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "category_match_report".to_string());
    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let name = match path.extension() {
        Some(ext) => format!("{stem}_{stamp}.{}", ext.to_string_lossy()),
        None => format!("{stem}_{stamp}"),
    };
    path.with_file_name(name)
}

/// Writes the report workbook and returns the path actually written.
///
/// If `path` cannot be written (typically because the previous report is
/// still open in a spreadsheet application), the workbook is written to
/// [`fallback_path`] instead.
pub fn write_report(report: &Report, path: &Path) -> Result<PathBuf> {
    let mut workbook = build_workbook(report)?;
    let buffer = workbook.save_to_buffer()?;

    let error = match std::fs::write(path, &buffer) {
        Ok(()) => {
            tracing::info!(path = %path.display(), sheets = report.details.len() + 1, "wrote report");
            return Ok(path.to_path_buf());
        }
        Err(error) => error,
    };
    // A missing directory fails the sibling path as well.
    if error.kind() == std::io::ErrorKind::NotFound {
        return Err(OutputError::Io {
            path: path.to_path_buf(),
            source: error,
        });
    }

    let fallback = fallback_path(path);
    tracing::warn!(
        path = %path.display(),
        fallback = %fallback.display(),
        error = %error,
        "report path not writable, using fallback"
    );
    std::fs::write(&fallback, &buffer).map_err(|source| OutputError::Fallback {
        path: path.to_path_buf(),
        original: error,
        fallback: fallback.clone(),
        source,
    })?;
    Ok(fallback)
}
