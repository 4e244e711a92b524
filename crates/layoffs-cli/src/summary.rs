use std::collections::BTreeMap;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use layoffs_model::{CleaningReport, DatasetSummary, Field};

use crate::types::{CleanResult, ProfileResult};

pub fn print_clean_summary(result: &CleanResult) {
    println!("Input: {}", result.input.display());
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, not written)"),
    }
    if let Some(path) = &result.report_path {
        println!("Report: {}", path.display());
    }
    println!("{}", stage_table(&result.report));
    println!("{}", findings_table(&result.report));
    println!("{}", summary_table(&result.report.summary));
}

pub fn print_countries(countries: &[String]) {
    for country in countries {
        println!("{country}");
    }
}

pub fn print_profile(result: &ProfileResult) {
    println!("Input: {}", result.input.display());
    println!("{}", missing_table(&result.missing));
    println!("{}", summary_table(&result.summary));
}

/// Row counts around each stage, with a total line.
pub fn stage_table(report: &CleaningReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Stage"),
        header_cell("Rows in"),
        header_cell("Rows out"),
        header_cell("Removed"),
    ]);
    apply_table_style(&mut table);
    for index in 1..=3 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for stage in &report.stages {
        table.add_row(vec![
            Cell::new(stage.stage.label()),
            Cell::new(stage.rows_in),
            Cell::new(stage.rows_out),
            count_cell(stage.rows_removed(), Color::Yellow),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(report.input_rows()).add_attribute(Attribute::Bold),
        Cell::new(report.output_rows()).add_attribute(Attribute::Bold),
        count_cell(
            report.input_rows().saturating_sub(report.output_rows()),
            Color::Yellow,
        )
        .add_attribute(Attribute::Bold),
    ]);
    table
}

/// Parse failures, synonym rewrites and correction matches.
pub fn findings_table(report: &CleaningReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Finding"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (field, failures) in &report.parse_failures {
        table.add_row(vec![
            Cell::new(format!("unparseable {field}")),
            count_cell(*failures, Color::Red),
        ]);
    }
    table.add_row(vec![
        Cell::new("blank values set to missing"),
        count_cell(report.blanks_replaced, Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("country synonyms applied"),
        count_cell(report.synonym_replacements, Color::Green),
    ]);
    for outcome in &report.corrections {
        let rule = &outcome.rule;
        table.add_row(vec![
            Cell::new(format!(
                "{} = {:?} -> {} = {:?}",
                rule.match_field, rule.match_value, rule.target_field, rule.new_value
            )),
            count_cell(outcome.matched, Color::Green),
        ]);
    }
    table
}

pub fn missing_table(missing: &BTreeMap<Field, usize>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Missing")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (field, count) in missing {
        table.add_row(vec![Cell::new(field.name()), count_cell(*count, Color::Yellow)]);
    }
    table
}

/// One-row summary: total records plus missing counts per numeric field.
pub fn summary_table(summary: &DatasetSummary) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("total_records")];
    header.extend(
        summary
            .missing
            .keys()
            .map(|field| header_cell(&format!("missing_{}", field.name()))),
    );
    table.set_header(header);
    apply_table_style(&mut table);
    let mut row = vec![Cell::new(summary.total_records).add_attribute(Attribute::Bold)];
    row.extend(
        summary
            .missing
            .values()
            .map(|count| count_cell(*count, Color::Yellow)),
    );
    table.add_row(row);
    for index in 0..table.column_count() {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
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
