use std::collections::BTreeSet;

use catmatch_model::{FileResult, MismatchKind, RawRow, Verdict};
use tracing::{debug, info, info_span, warn};

use crate::matcher::Matcher;
use crate::parser::parse_row;

/// Parses and classifies every row of one file, in order.
///
/// Each row is counted exactly once; mismatches keep their source order.
pub fn aggregate<I>(filename: &str, rows: I, matcher: &Matcher<'_>) -> FileResult
where
    I: IntoIterator<Item = RawRow>,
{
    let span = info_span!("aggregate", file = %filename);
    let _guard = span.enter();

    let mut result = FileResult::new(filename);
    let mut unmapped_labels = BTreeSet::new();

    for (index, raw) in rows.into_iter().enumerate() {
        let record = parse_row(&raw);
        result.total_rows += 1;
        match matcher.classify(&record) {
            Verdict::Match => result.match_count += 1,
            Verdict::Mismatch(kind) => {
                debug!(row = index + 1, id = %record.id, kind = kind.label(), "mismatch");
                if kind == MismatchKind::Unmapped {
                    result.unmapped_count += 1;
                    unmapped_labels.insert(record.category_es.clone());
                }
                result.mismatches.push(record);
            }
        }
    }

    if !unmapped_labels.is_empty() {
        let labels: Vec<&str> = unmapped_labels.iter().map(String::as_str).collect();
        warn!(
            count = result.unmapped_count,
            labels = %labels.join(", "),
            "categories missing from mapping table"
        );
    }
    info!(
        total = result.total_rows,
        matches = result.match_count,
        mismatches = result.mismatch_count(),
        unmapped = result.unmapped_count,
        "file aggregated"
    );
    result
}

#[cfg(test)]
mod tests {
    use catmatch_map::MappingTable;

    use super::*;

    fn row(id: &str, category: &str, new_result: &str) -> RawRow {
        RawRow {
            id: id.to_string(),
            category: category.to_string(),
            new_result: new_result.to_string(),
            ..RawRow::default()
        }
    }

    #[test]
    fn test_empty_input() {
        let table = MappingTable::default();
        let result = aggregate("empty.csv", Vec::new(), &Matcher::new(&table));
        assert_eq!(result, FileResult::new("empty.csv"));
    }

    #[test]
    fn test_counts_and_order() {
        let table = MappingTable::from_entries([("cultura", "culture")]).unwrap();
        let rows = vec![
            row("1", "Cultura", "{'category': 'sports'}"),
            row("2", "Cultura", "{'category': 'culture'}"),
            row("3", "Desconocida", "{'category': 'culture'}"),
            row("4", "Cultura", "{}"),
        ];
        let result = aggregate("a.csv", rows, &Matcher::new(&table));

        assert_eq!(result.total_rows, 4);
        assert_eq!(result.match_count, 1);
        assert_eq!(result.unmapped_count, 1);
        let ids: Vec<&str> = result.mismatches.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3", "4"]);
        assert_eq!(
            result.match_count + result.mismatches.len(),
            result.total_rows
        );
    }
}
