//! Tests for catmatch-model types.

use catmatch_model::{
    DETAIL_HEADERS, DetailRow, FileResult, ParsedRecord, Report, SummaryEntry, TOTAL_LABEL,
};

fn record(category_es: &str, category_en: Option<&str>) -> ParsedRecord {
    ParsedRecord {
        administrative_code: "ADM-1".to_string(),
        id: "42".to_string(),
        created_at: "2024-01-01 10:00".to_string(),
        end_at: "2024-01-01 11:00".to_string(),
        json: "{}".to_string(),
        category_es: category_es.to_string(),
        category_key: category_es.to_lowercase(),
        category_en: category_en.map(str::to_string),
    }
}

#[test]
fn empty_file_result_has_no_rate() {
    let result = FileResult::new("empty.csv");
    assert_eq!(result.total_rows, 0);
    assert_eq!(result.mismatch_count(), 0);
    assert_eq!(result.match_rate(), None);
}

#[test]
fn summary_entry_derives_mismatches_and_rate() {
    let entry = SummaryEntry::from_counts("a.csv", 4, 3, 0);
    assert_eq!(entry.mismatch_count, 1);
    assert_eq!(entry.match_rate, Some(0.75));
    assert_eq!(entry.match_rate_display(), "75.00%");
}

#[test]
fn summary_entry_zero_rows_is_not_applicable() {
    let entry = SummaryEntry::from_counts("empty.csv", 0, 0, 0);
    assert_eq!(entry.match_rate, None);
    assert_eq!(entry.match_rate_display(), "N/A");
}

#[test]
fn detail_row_exposes_seven_columns() {
    let row = DetailRow::from(&record("Cultura", Some("sports")));
    let values = row.values();
    assert_eq!(values.len(), DETAIL_HEADERS.len());
    assert_eq!(values[5], "Cultura");
    assert_eq!(values[6], "sports");
}

#[test]
fn detail_row_absent_slug_is_empty() {
    let row = DetailRow::from(&record("Cultura", None));
    assert_eq!(row.category_en, "");
}

#[test]
fn detail_row_serializes_with_column_names() {
    let row = DetailRow::from(&record("Cultura", Some("sports")));
    let json = serde_json::to_value(&row).expect("serialize detail row");
    let object = json.as_object().expect("object");
    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    let mut expected = DETAIL_HEADERS.to_vec();
    expected.sort_unstable();
    assert_eq!(keys, expected);
}

#[test]
fn report_totals_sum_all_files() {
    let report = Report {
        summary: vec![
            SummaryEntry::from_counts("a.csv", 10, 8, 1),
            SummaryEntry::from_counts("b.csv", 0, 0, 0),
            SummaryEntry::from_counts("c.csv", 10, 2, 3),
        ],
        details: vec![],
    };
    let totals = report.totals();
    assert_eq!(totals.filename, TOTAL_LABEL);
    assert_eq!(totals.total_rows, 20);
    assert_eq!(totals.match_count, 10);
    assert_eq!(totals.mismatch_count, 10);
    assert_eq!(totals.unmapped_count, 4);
    assert_eq!(totals.match_rate, Some(0.5));
}
