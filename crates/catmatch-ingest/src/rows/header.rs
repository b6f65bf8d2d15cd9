//! Header resolution for exported CSV files.

use csv::StringRecord;

use catmatch_model::RawRow;

/// Input columns consumed by the comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    AdministrativeCode,
    Id,
    CreatedAt,
    EndAt,
    Json,
    Category,
    NewResult,
}

impl Column {
    pub const ALL: [Column; 7] = [
        Column::AdministrativeCode,
        Column::Id,
        Column::CreatedAt,
        Column::EndAt,
        Column::Json,
        Column::Category,
        Column::NewResult,
    ];

    /// Canonical header name.
    pub fn header(self) -> &'static str {
        match self {
            Column::AdministrativeCode => "ADMINISTRATIVE_CODE",
            Column::Id => "ID",
            Column::CreatedAt => "CREATED_AT",
            Column::EndAt => "END_AT",
            Column::Json => "JSON",
            Column::Category => "CATEGORY",
            Column::NewResult => "NEW_RESULT",
        }
    }
}

/// Position of each known column in a header record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnIndex {
    positions: [Option<usize>; 7],
}

impl ColumnIndex {
    /// Matches headers trimmed and case-insensitively. The first occurrence
    /// of a duplicated header wins.
    pub fn resolve(headers: &StringRecord) -> Self {
        let mut positions = [None; 7];
        for (idx, name) in headers.iter().enumerate() {
            let name = normalize_header(name);
            for (slot, column) in Column::ALL.iter().enumerate() {
                if positions[slot].is_none() && name.eq_ignore_ascii_case(column.header()) {
                    positions[slot] = Some(idx);
                }
            }
        }
        Self { positions }
    }

    pub fn position(&self, column: Column) -> Option<usize> {
        self.positions[column as usize]
    }

    /// Known columns absent from the header.
    pub fn missing(&self) -> Vec<Column> {
        Column::ALL
            .into_iter()
            .filter(|column| self.position(*column).is_none())
            .collect()
    }

    /// Builds a row, reading absent columns and short records as empty.
    pub fn raw_row(&self, record: &StringRecord) -> RawRow {
        let get = |column: Column| -> String {
            self.position(column)
                .and_then(|idx| record.get(idx))
                .unwrap_or("")
                .to_string()
        };
        RawRow {
            administrative_code: get(Column::AdministrativeCode),
            id: get(Column::Id),
            created_at: get(Column::CreatedAt),
            end_at: get(Column::EndAt),
            json: get(Column::Json),
            category: get(Column::Category),
            new_result: get(Column::NewResult),
        }
    }
}

/// Normalizes a header value by trimming whitespace and a stray BOM.
fn normalize_header(value: &str) -> &str {
    value.trim_matches('\u{feff}').trim()
}
