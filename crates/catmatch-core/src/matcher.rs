use catmatch_map::MappingTable;
use catmatch_model::{MatchOutcome, MismatchKind, ParsedRecord, Verdict};

/// Classifies parsed records against a borrowed mapping table.
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'a> {
    table: &'a MappingTable,
}

impl<'a> Matcher<'a> {
    pub fn new(table: &'a MappingTable) -> Self {
        Self { table }
    }

    /// Unmapped categories are reported before missing slugs.
    pub fn classify(&self, record: &ParsedRecord) -> Verdict {
        let Some(expected) = self.table.lookup_key(&record.category_key) else {
            return Verdict::Mismatch(MismatchKind::Unmapped);
        };
        let Some(actual) = record.category_en.as_deref() else {
            return Verdict::Mismatch(MismatchKind::MissingSlug);
        };
        if slugs_equal(expected, actual) {
            Verdict::Match
        } else {
            Verdict::Mismatch(MismatchKind::Different {
                expected: expected.to_string(),
            })
        }
    }

    pub fn is_match(&self, record: &ParsedRecord) -> bool {
        self.classify(record).is_match()
    }

    pub fn outcome(&self, record: ParsedRecord) -> MatchOutcome {
        let verdict = self.classify(&record);
        MatchOutcome { record, verdict }
    }
}

fn slugs_equal(expected: &str, actual: &str) -> bool {
    let expected = expected.trim();
    let actual = actual.trim();
    expected
        .chars()
        .flat_map(char::to_lowercase)
        .eq(actual.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> MappingTable {
        MappingTable::from_entries([
            ("cultura", "culture"),
            ("música", "music-and-concerts"),
        ])
        .unwrap()
    }

    fn record(category: &str, slug: Option<&str>) -> ParsedRecord {
        ParsedRecord {
            category_es: category.to_string(),
            category_key: catmatch_map::normalize_label(category),
            category_en: slug.map(str::to_string),
            ..ParsedRecord::default()
        }
    }

    #[test]
    fn test_match() {
        let table = table();
        let matcher = Matcher::new(&table);
        assert_eq!(matcher.classify(&record("Cultura", Some("culture"))), Verdict::Match);
    }

    #[test]
    fn test_english_side_case_and_whitespace() {
        let table = table();
        let matcher = Matcher::new(&table);
        assert!(matcher.is_match(&record("Música", Some(" Music-And-Concerts "))));
    }

    #[test]
    fn test_different() {
        let table = table();
        let matcher = Matcher::new(&table);
        assert_eq!(
            matcher.classify(&record("Cultura", Some("sports"))),
            Verdict::Mismatch(MismatchKind::Different {
                expected: "culture".to_string()
            })
        );
    }

    #[test]
    fn test_unmapped() {
        let table = table();
        let matcher = Matcher::new(&table);
        assert_eq!(
            matcher.classify(&record("Desconocida", Some("culture"))),
            Verdict::Mismatch(MismatchKind::Unmapped)
        );
        assert_eq!(
            matcher.classify(&record("Desconocida", None)),
            Verdict::Mismatch(MismatchKind::Unmapped)
        );
    }

    #[test]
    fn test_missing_slug_never_matches() {
        let table = table();
        let matcher = Matcher::new(&table);
        assert_eq!(
            matcher.classify(&record("Cultura", None)),
            Verdict::Mismatch(MismatchKind::MissingSlug)
        );
        let empty = MappingTable::empty();
        assert!(!Matcher::new(&empty).is_match(&record("Cultura", None)));
    }

    #[test]
    fn test_no_partial_matching() {
        let table = table();
        let matcher = Matcher::new(&table);
        assert!(!matcher.is_match(&record("Cultura", Some("cultures"))));
        assert!(!matcher.is_match(&record("Cultura", Some("cultur"))));
    }

    #[test]
    fn test_outcome_keeps_record() {
        let table = table();
        let outcome = Matcher::new(&table).outcome(record("Cultura", Some("culture")));
        assert!(outcome.is_match());
        assert_eq!(outcome.record.category_es, "Cultura");
    }
}
