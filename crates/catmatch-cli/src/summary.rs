use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use catmatch_model::SummaryEntry;

use crate::types::RunResult;

pub fn print_summary(result: &RunResult) {
    println!("Root: {}", result.root.display());
    println!("{}", summary_table(&result.report.summary, &result.report.totals()));
    match &result.output {
        Some(path) => println!("Report: {}", path.display()),
        None => println!("Report: not written (dry run)"),
    }
}

/// One row per file, then the `TOTAL` row.
pub fn summary_table(entries: &[SummaryEntry], totals: &SummaryEntry) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Total"),
        header_cell("Matches"),
        header_cell("Mismatches"),
        header_cell("Unmapped"),
        header_cell("Match rate"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for entry in entries {
        table.add_row(vec![
            Cell::new(&entry.filename),
            Cell::new(entry.total_rows),
            Cell::new(entry.match_count),
            count_cell(entry.mismatch_count, Color::Red),
            count_cell(entry.unmapped_count, Color::Yellow),
            rate_cell(entry),
        ]);
    }
    table.add_row(vec![
        Cell::new(&totals.filename)
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(totals.total_rows).add_attribute(Attribute::Bold),
        Cell::new(totals.match_count).add_attribute(Attribute::Bold),
        count_cell(totals.mismatch_count, Color::Red).add_attribute(Attribute::Bold),
        count_cell(totals.unmapped_count, Color::Yellow).add_attribute(Attribute::Bold),
        rate_cell(totals).add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn rate_cell(entry: &SummaryEntry) -> Cell {
    match entry.match_rate {
        Some(rate) if rate >= 1.0 => Cell::new(entry.match_rate_display()).fg(Color::Green),
        Some(_) => Cell::new(entry.match_rate_display()),
        None => dim_cell(entry.match_rate_display()),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_table_has_total_row() {
        let entries = vec![
            SummaryEntry::from_counts("a.csv", 4, 3, 1),
            SummaryEntry::from_counts("b.csv", 0, 0, 0),
        ];
        let totals = SummaryEntry::from_counts("TOTAL", 4, 3, 1);
        let mut table = summary_table(&entries, &totals);
        table.force_no_tty();

        assert_eq!(table.row_count(), 3);
        let rendered = table.to_string();
        assert!(rendered.contains("a.csv"));
        assert!(rendered.contains("75.00%"));
        assert!(rendered.contains("N/A"));
        assert!(rendered.contains("TOTAL"));
    }
}
