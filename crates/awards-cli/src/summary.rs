use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use awards_core::CleanReport;

use crate::types::RunResult;

pub fn print_summary(result: &RunResult) {
    if !result.entities.is_empty() {
        println!("{}", summary_table(result));
    }
    if result.dry_run {
        println!("Dry run: no files were written.");
    }
    if !result.failures.is_empty() {
        eprintln!("Errors:");
        for failure in &result.failures {
            eprintln!("- {} ({}): {}", failure.entity, failure.input.display(), failure.message);
        }
    }
}

/// One row per cleaned entity plus a total row.
pub fn summary_table(result: &RunResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Entity"),
        header_cell("Input rows"),
        header_cell("Output rows"),
        header_cell("Dropped"),
        header_cell("Duplicates"),
        header_cell("Defaulted"),
        header_cell("Output"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=5 {
        align_column(&mut table, index, CellAlignment::Right);
    }

    let mut totals = [0usize; 5];
    for report in &result.entities {
        let counts = counts(report);
        for (total, count) in totals.iter_mut().zip(counts) {
            *total += count;
        }
        table.add_row(vec![
            Cell::new(report.entity)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(counts[0]),
            Cell::new(counts[1]),
            count_cell(counts[2], Color::Yellow),
            count_cell(counts[3], Color::Yellow),
            count_cell(counts[4], Color::Yellow),
            output_cell(report),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(totals[0]).add_attribute(Attribute::Bold),
        Cell::new(totals[1]).add_attribute(Attribute::Bold),
        count_cell(totals[2], Color::Yellow).add_attribute(Attribute::Bold),
        count_cell(totals[3], Color::Yellow).add_attribute(Attribute::Bold),
        count_cell(totals[4], Color::Yellow).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    table
}

fn counts(report: &CleanReport) -> [usize; 5] {
    [
        report.input_rows,
        report.output_rows,
        report.dropped_missing_required,
        report.duplicates_removed,
        report.values_defaulted(),
    ]
}

fn output_cell(report: &CleanReport) -> Cell {
    match &report.output {
        Some(path) => Cell::new(path.display()),
        None => dim_cell("(dry run)"),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        dim_cell(count)
    }
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
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
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
