//! Integration tests for discovery and loading.

use std::path::Path;

use catmatch_ingest::{
    IngestError, REPORT_CSV_NAME, ReadOptions, discover_input_files, load_input_file,
};
use tempfile::TempDir;

const HEADER: &str = "ADMINISTRATIVE_CODE;ID;CREATED_AT;END_AT;JSON;CATEGORY;NEW_RESULT\n";

fn write(dir: &Path, name: &str, content: &[u8]) {
    std::fs::write(dir.join(name), content).unwrap();
}

#[test]
fn discovers_root_and_reports_folder() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("reports")).unwrap();
    write(dir.path(), "z_root.csv", HEADER.as_bytes());
    write(dir.path(), "a_root.csv", HEADER.as_bytes());
    write(&dir.path().join("reports"), "march.csv", HEADER.as_bytes());
    write(dir.path(), REPORT_CSV_NAME, b"file_name,total\n");
    write(dir.path(), "category_match_report.xlsx", b"");

    let files = discover_input_files(dir.path(), &[]).unwrap();
    let names: Vec<String> = files
        .iter()
        .map(|path| {
            path.strip_prefix(dir.path())
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();

    assert_eq!(names, vec!["a_root.csv", "reports/march.csv", "z_root.csv"]);
}

#[test]
fn discovery_without_reports_folder() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "only.csv", HEADER.as_bytes());

    let files = discover_input_files(dir.path(), &[]).unwrap();
    assert_eq!(files.len(), 1);
}

#[test]
fn discovery_skips_custom_output_name() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "input.csv", HEADER.as_bytes());
    write(dir.path(), "summary.csv", b"file_name,total\n");

    let files = discover_input_files(dir.path(), &["summary.csv"]).unwrap();
    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("input.csv"));
}

#[test]
fn discovery_missing_root() {
    let dir = TempDir::new().unwrap();
    let result = discover_input_files(&dir.path().join("absent"), &[]);
    assert!(matches!(result, Err(IngestError::DirectoryNotFound { .. })));
}

#[test]
fn loads_bom_prefixed_export() {
    let dir = TempDir::new().unwrap();
    let mut content = b"\xEF\xBB\xBF".to_vec();
    content.extend_from_slice(HEADER.as_bytes());
    content.extend_from_slice(
        "A1;1;2024-01-01;2024-01-01;{};Energía Cliente;{'category': 'energy_client'}\n"
            .as_bytes(),
    );
    write(dir.path(), "bom.csv", &content);

    let input = load_input_file(&dir.path().join("bom.csv"), &ReadOptions::default()).unwrap();
    assert_eq!(input.rows.len(), 1);
    assert_eq!(input.rows[0].administrative_code, "A1");
    assert_eq!(input.rows[0].category, "Energía Cliente");
}

#[test]
fn loads_windows_1252_export() {
    let dir = TempDir::new().unwrap();
    let mut content = HEADER.as_bytes().to_vec();
    content.extend_from_slice(b"A1;1;;;{};Energ\xEDa Cliente;{'category': 'energy_client'}\n");
    write(dir.path(), "latin.csv", &content);

    let input = load_input_file(&dir.path().join("latin.csv"), &ReadOptions::default()).unwrap();
    assert_eq!(input.rows[0].category, "Energía Cliente");
}

#[test]
fn missing_columns_read_as_empty() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "partial.csv", b"id;Category\n5;Cultura\n6\n");

    let input = load_input_file(&dir.path().join("partial.csv"), &ReadOptions::default()).unwrap();
    assert_eq!(input.rows.len(), 2);
    assert_eq!(input.rows[0].id, "5");
    assert_eq!(input.rows[0].new_result, "");
    assert_eq!(input.rows[1].id, "6");
    assert_eq!(input.rows[1].category, "");
}
