use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use mambo_cli::format::FormatResult;
use mambo_map::Resolution;
use mambo_standards::LookupReport;

pub fn print_format_summary(result: &FormatResult) {
    println!("Input: {} ({})", result.input.display(), result.encoding.as_str());
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, nothing written)"),
    }
    println!("Lookups: {}", result.lookups_dir.display());
    println!("Source: {}", result.source_label);

    let report = &result.report;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Rows")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Rows read"), Cell::new(report.input_rows)]);
    table.add_row(vec![
        Cell::new("Merged duplicates"),
        count_cell(report.merged_rows, Color::Cyan),
    ]);
    table.add_row(vec![
        Cell::new("Without valid email"),
        count_cell(report.rows_without_valid_email, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Without name"),
        count_cell(report.rows_without_name, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Records written")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(report.output_rows).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    let mut columns = Table::new();
    columns.set_header(vec![
        header_cell("#"),
        header_cell("Input header"),
        header_cell("Field"),
        header_cell("Matched by"),
    ]);
    apply_table_style(&mut columns);
    align_column(&mut columns, 0, CellAlignment::Right);
    for column in &report.header_map.columns {
        let field_cell = match column.target {
            Some(field) => Cell::new(field.as_str()).fg(Color::Green),
            None => dim_cell("dropped"),
        };
        columns.add_row(vec![
            Cell::new(column.index + 1),
            Cell::new(&column.raw_header),
            field_cell,
            resolution_cell(column.resolution),
        ]);
    }
    println!();
    println!("Columns:");
    println!("{columns}");
}

pub fn print_lookup_report(dir: &Path, report: &LookupReport) {
    println!("Lookups: {}", dir.display());
    println!("Alias conflicts policy: {}", report.alias_conflicts.as_str());
    let mut table = Table::new();
    table.set_header(vec![header_cell("Table"), header_cell("File"), header_cell("Entries")]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    let counts = &report.counts;
    table.add_row(vec![
        Cell::new("aliases"),
        Cell::new(&report.files.aliases),
        Cell::new(counts.aliases),
    ]);
    table.add_row(vec![
        Cell::new("prefixes"),
        Cell::new(&report.files.prefixes),
        Cell::new(counts.prefixes),
    ]);
    table.add_row(vec![
        Cell::new("suffixes"),
        Cell::new(&report.files.suffixes),
        Cell::new(counts.suffixes),
    ]);
    table.add_row(vec![
        Cell::new("particles"),
        Cell::new(&report.files.particles),
        Cell::new(format!(
            "{} ({} phrases)",
            counts.particles, counts.particle_phrases
        )),
    ]);
    println!("{table}");

    if report.conflicts.is_empty() {
        return;
    }
    let mut conflicts = Table::new();
    conflicts.set_header(vec![
        header_cell("Line"),
        header_cell("Alias"),
        header_cell("Previous"),
        header_cell("Replacement"),
        header_cell("Kept"),
    ]);
    apply_table_style(&mut conflicts);
    align_column(&mut conflicts, 0, CellAlignment::Right);
    for conflict in &report.conflicts {
        conflicts.add_row(vec![
            Cell::new(conflict.line),
            Cell::new(&conflict.alias),
            Cell::new(conflict.previous.as_str()),
            Cell::new(conflict.replacement.as_str()),
            Cell::new(conflict.kept.as_str())
                .fg(Color::Yellow)
                .add_attribute(Attribute::Bold),
        ]);
    }
    println!();
    println!("Alias conflicts:");
    println!("{conflicts}");
}

fn resolution_cell(resolution: Resolution) -> Cell {
    match resolution {
        Resolution::Alias => Cell::new("alias"),
        Resolution::CanonicalName => Cell::new("field name"),
        Resolution::Heuristic => Cell::new("email heuristic").fg(Color::Yellow),
        Resolution::Unmapped => dim_cell("-"),
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
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
