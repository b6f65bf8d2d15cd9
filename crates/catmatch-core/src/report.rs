use catmatch_model::{DetailRow, DetailSection, FileResult, Report, SummaryEntry};

/// Renders summary and detail views, one of each per file, in input order.
pub fn build_report(results: &[FileResult]) -> Report {
    let summary = results
        .iter()
        .map(|result| {
            SummaryEntry::from_counts(
                result.filename.clone(),
                result.total_rows,
                result.match_count,
                result.unmapped_count,
            )
        })
        .collect();
    let details = results
        .iter()
        .map(|result| DetailSection {
            filename: result.filename.clone(),
            rows: result.mismatches.iter().map(DetailRow::from).collect(),
        })
        .collect();
    Report { summary, details }
}

#[cfg(test)]
mod tests {
    use catmatch_model::ParsedRecord;

    use super::*;

    #[test]
    fn test_build_report_one_section_per_file() {
        let mut with_rows = FileResult::new("a.csv");
        with_rows.total_rows = 3;
        with_rows.match_count = 2;
        with_rows.mismatches.push(ParsedRecord {
            id: "9".to_string(),
            category_es: "Cultura".to_string(),
            category_en: Some("sports".to_string()),
            ..ParsedRecord::default()
        });
        let results = vec![with_rows, FileResult::new("b.csv")];

        let report = build_report(&results);

        assert_eq!(report.summary.len(), 2);
        assert_eq!(report.details.len(), 2);
        assert_eq!(report.summary[0].mismatch_count, 1);
        assert_eq!(report.summary[1].match_rate, None);
        assert_eq!(report.details[0].rows[0].category_en, "sports");
        assert!(report.details[1].rows.is_empty());
    }

    #[test]
    fn test_build_report_empty() {
        assert!(build_report(&[]).is_empty());
    }
}
