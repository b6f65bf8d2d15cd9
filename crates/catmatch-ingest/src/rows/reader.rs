//! CSV file reading into [`RawRow`]s.

use std::path::Path;

use csv::ReaderBuilder;

use catmatch_model::RawRow;

use super::header::ColumnIndex;
use crate::decode::decode_bytes;
use crate::error::{IngestError, Result};

/// Options for reading input CSV files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadOptions {
    /// Field delimiter. Exports use `;`.
    pub delimiter: u8,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self { delimiter: b';' }
    }
}

impl ReadOptions {
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// One input file: its base name and rows in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    pub filename: String,
    pub rows: Vec<RawRow>,
}

/// Reads every data row of a CSV file.
///
/// Missing columns are logged once and read as empty strings. An empty file
/// yields no rows.
pub fn read_raw_rows(path: &Path, options: &ReadOptions) -> Result<Vec<RawRow>> {
    let bytes = std::fs::read(path).map_err(|e| IngestError::open(path, e))?;
    let decoded = decode_bytes(&bytes, path)?;

    let mut reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(decoded.text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| csv_error(path, &e))?
        .clone();
    if headers.is_empty() {
        tracing::debug!(path = %path.display(), "empty CSV file");
        return Ok(Vec::new());
    }

    let index = ColumnIndex::resolve(&headers);
    let missing = index.missing();
    if !missing.is_empty() {
        let names: Vec<&str> = missing.iter().map(|column| column.header()).collect();
        tracing::warn!(
            path = %path.display(),
            columns = %names.join(", "),
            "missing columns will be read as empty"
        );
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| csv_error(path, &e))?;
        rows.push(index.raw_row(&record));
    }

    tracing::debug!(
        path = %path.display(),
        encoding = decoded.encoding.name(),
        rows = rows.len(),
        "read CSV"
    );
    Ok(rows)
}

/// Reads a CSV file and pairs its rows with the file's base name.
pub fn load_input_file(path: &Path, options: &ReadOptions) -> Result<InputFile> {
    let rows = read_raw_rows(path, options)?;
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(InputFile { filename, rows })
}

fn csv_error(path: &Path, error: &csv::Error) -> IngestError {
    IngestError::CsvParse {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_read_semicolon_delimited() {
        let file = create_temp_csv(
            b"ADMINISTRATIVE_CODE;ID;CREATED_AT;END_AT;JSON;CATEGORY;NEW_RESULT\n\
              A1;10;2024-01-01;2024-01-02;{};Temperatura;{'category': 'temperature'}\n",
        );
        let rows = read_raw_rows(file.path(), &ReadOptions::default()).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].administrative_code, "A1");
        assert_eq!(rows[0].category, "Temperatura");
        assert_eq!(rows[0].new_result, "{'category': 'temperature'}");
    }

    #[test]
    fn test_read_quoted_blob_with_delimiter() {
        let file = create_temp_csv(
            b"ID;CATEGORY;NEW_RESULT\n1;Cultura;\"{'category': 'culture'; 'x': 1}\"\n",
        );
        let rows = read_raw_rows(file.path(), &ReadOptions::default()).unwrap();
        assert_eq!(rows[0].new_result, "{'category': 'culture'; 'x': 1}");
    }

    #[test]
    fn test_read_custom_delimiter() {
        let file = create_temp_csv(b"ID,CATEGORY\n1,Cultura\n");
        let options = ReadOptions::default().with_delimiter(b',');
        let rows = read_raw_rows(file.path(), &options).unwrap();
        assert_eq!(rows[0].category, "Cultura");
    }

    #[test]
    fn test_read_empty_file() {
        let file = create_temp_csv(b"");
        let rows = read_raw_rows(file.path(), &ReadOptions::default()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_read_header_only() {
        let file = create_temp_csv(b"ID;CATEGORY;NEW_RESULT\n");
        let rows = read_raw_rows(file.path(), &ReadOptions::default()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_raw_rows(&dir.path().join("absent.csv"), &ReadOptions::default());
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn test_load_input_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export_march.csv");
        std::fs::write(&path, "ID;CATEGORY\n1;Cultura\n2;Deportes\n").unwrap();

        let input = load_input_file(&path, &ReadOptions::default()).unwrap();
        assert_eq!(input.filename, "export_march.csv");
        assert_eq!(input.rows.len(), 2);
    }
}
