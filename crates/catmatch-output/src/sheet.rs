//! Worksheet naming.

use std::collections::BTreeSet;
use std::path::Path;

/// Excel's worksheet name length limit, in characters.
pub const MAX_SHEET_NAME_LEN: usize = 31;

/// Name of the summary worksheet.
pub const SUMMARY_SHEET: &str = "Summary";

const INVALID_CHARS: [char; 7] = [':', '\\', '/', '?', '*', '[', ']'];

/// Reserved by Excel in addition to the summary sheet.
const RESERVED: [&str; 1] = ["History"];

/// Makes a file name usable as a worksheet name.
///
/// Uses the file stem, replaces characters Excel rejects with `_`,
/// truncates to [`MAX_SHEET_NAME_LEN`] characters, and strips leading and
/// trailing apostrophes. Falls back to `Sheet` when nothing is
/// left.
pub fn sanitize_sheet_name(filename: &str) -> String {
    let stem = Path::new(filename)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(filename);
    let clean: String = stem
        .chars()
        .map(|ch| if INVALID_CHARS.contains(&ch) { '_' } else { ch })
        .collect();
    let truncated: String = clean.chars().take(MAX_SHEET_NAME_LEN).collect();
    // Excel rejects a leading or trailing apostrophe.
    let name = truncated.trim_matches('\'');
    if name.trim().is_empty() {
        "Sheet".to_string()
    } else {
        name.to_string()
    }
}

/// Hands out unique worksheet names for one workbook.
///
/// Excel compares sheet names case-insensitively, so collisions are detected
/// on lowercased names and resolved with a ` (n)` suffix.
#[derive(Debug)]
pub struct SheetNamer {
    used: BTreeSet<String>,
}

impl Default for SheetNamer {
    fn default() -> Self {
        Self::new()
    }
}

impl SheetNamer {
    /// A namer with [`SUMMARY_SHEET`] and Excel's reserved names taken.
    pub fn new() -> Self {
        let used = std::iter::once(SUMMARY_SHEET)
            .chain(RESERVED)
            .map(str::to_lowercase)
            .collect();
        Self { used }
    }

    pub fn name_for(&mut self, filename: &str) -> String {
        let base = sanitize_sheet_name(filename);
        if self.used.insert(base.to_lowercase()) {
            return base;
        }
        for n in 2usize.. {
            let suffix = format!(" ({n})");
            let keep = MAX_SHEET_NAME_LEN.saturating_sub(suffix.chars().count());
            let head: String = base.chars().take(keep).collect();
            let candidate = format!("{}{suffix}", head.trim_end_matches('\''));
            if self.used.insert(candidate.to_lowercase()) {
                return candidate;
            }
        }
        unreachable!("sheet name suffixes are unbounded")
    }
}
