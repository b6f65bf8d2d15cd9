use catmatch_map::normalize_label;
use catmatch_model::{ParsedRecord, RawRow};

use crate::extract::extract_category;

/// Derives the comparison view of one row. Total over all inputs.
pub fn parse_row(raw: &RawRow) -> ParsedRecord {
    ParsedRecord {
        administrative_code: raw.administrative_code.trim().to_string(),
        id: raw.id.trim().to_string(),
        created_at: raw.created_at.trim().to_string(),
        end_at: raw.end_at.trim().to_string(),
        json: raw.json.clone(),
        category_es: raw.category.trim().to_string(),
        category_key: normalize_label(&raw.category),
        category_en: extract_category(&raw.new_result),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_row_normalizes_category() {
        let raw = RawRow {
            category: "  Corte  de FIBRA ".to_string(),
            new_result: "{'category': 'fiber_cut'}".to_string(),
            ..RawRow::default()
        };
        let record = parse_row(&raw);
        assert_eq!(record.category_es, "Corte  de FIBRA");
        assert_eq!(record.category_key, "corte de fibra");
        assert_eq!(record.category_en.as_deref(), Some("fiber_cut"));
    }

    #[test]
    fn test_parse_row_keeps_context_fields() {
        let raw = RawRow {
            administrative_code: " ADM-7 ".to_string(),
            id: "1001".to_string(),
            created_at: "2024-05-01 08:00:00".to_string(),
            end_at: "2024-05-01 09:30:00".to_string(),
            json: "{\"node\": \"X1\"}".to_string(),
            category: "Temperatura".to_string(),
            new_result: String::new(),
        };
        let record = parse_row(&raw);
        assert_eq!(record.administrative_code, "ADM-7");
        assert_eq!(record.id, "1001");
        assert_eq!(record.json, "{\"node\": \"X1\"}");
        assert_eq!(record.category_en, None);
    }

    #[test]
    fn test_parse_row_all_empty() {
        let record = parse_row(&RawRow::default());
        assert_eq!(record.category_key, "");
        assert_eq!(record.category_en, None);
    }
}
