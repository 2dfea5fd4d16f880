use anyhow::Result;
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};
use serde::Serialize;

use crate::cli::ReportFormatArg;
use crate::types::{FilterReport, ValidationReport};

pub fn print_report(report: &ValidationReport, format: ReportFormatArg) -> Result<()> {
    match format {
        ReportFormatArg::Json => println!("{}", to_json(report)?),
        ReportFormatArg::Table => {
            println!("Products: {}", report.products);
            println!(
                "Invalid: {} ({} messages)",
                report.invalid.len(),
                report.message_count()
            );
            if report.has_errors() {
                println!("{}", report_table(report));
            }
        }
    }
    Ok(())
}

pub fn print_filter(report: &FilterReport) {
    println!("{}", filter_table(report));
    println!(
        "Matches: {} of {} products",
        report.matches.len(),
        report.products
    );
    for identifier in &report.matches {
        println!("- {identifier}");
    }
}

pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// One line per message; row and identifier cells are shown on the first line of a row.
pub fn report_table(report: &ValidationReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Identifier"),
        header_cell("Column"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for row in &report.invalid {
        let mut first = true;
        for (label, messages) in &row.errors {
            for message in messages {
                let (row_cell, identifier_cell) = if first {
                    (
                        Cell::new(row.row),
                        row.identifier
                            .as_deref()
                            .map_or_else(|| dim_cell("-"), |id| Cell::new(id).fg(Color::Blue)),
                    )
                } else {
                    (dim_cell(""), dim_cell(""))
                };
                first = false;
                table.add_row(vec![
                    row_cell,
                    identifier_cell,
                    Cell::new(label).add_attribute(Attribute::Bold),
                    Cell::new(message).fg(Color::Red),
                ]);
            }
        }
    }
    table
}

pub fn filter_table(report: &FilterReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Value"),
        header_cell("Label"),
        header_cell("Selected"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);
    for (value, label) in &report.options.field_options.choices {
        let selected = if *value == report.selected {
            Cell::new("✓").fg(Color::Green).add_attribute(Attribute::Bold)
        } else {
            dim_cell("-")
        };
        table.add_row(vec![Cell::new(value), Cell::new(label), selected]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    if table.column_count() == 4 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(5)),
            ColumnConstraint::UpperBoundary(Width::Percentage(20)),
            ColumnConstraint::UpperBoundary(Width::Percentage(25)),
            ColumnConstraint::LowerBoundary(Width::Percentage(40)),
        ]);
    }
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
