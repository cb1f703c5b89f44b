//! Terminal rendering of reports with `comfy-table`.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use scent_report::{Cell as ReportCell, Report};

/// Renders one report as a titled table.
pub fn render_report(report: &Report) -> String {
    let mut table = Table::new();
    table.set_header(
        report
            .columns
            .iter()
            .map(|label| header_cell(label))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    for (index, alignment) in column_alignments(report).into_iter().enumerate() {
        align_column(&mut table, index, alignment);
    }
    for row in &report.rows {
        table.add_row(row.iter().map(table_cell).collect::<Vec<_>>());
    }
    format!("{}\n{table}", report.title)
}

pub fn render_reports(reports: &[Report]) -> String {
    reports
        .iter()
        .map(render_report)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn table_cell(cell: &ReportCell) -> Cell {
    match cell {
        ReportCell::Dropped(_) => Cell::new(cell.display_plain())
            .fg(Color::DarkGrey)
            .add_attribute(Attribute::CrossedOut),
        ReportCell::Flag(true) => Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        ReportCell::Empty => dim_cell("-"),
        other => Cell::new(other.display()),
    }
}

/// Numbers and times are right-aligned, judged by the first row.
fn column_alignments(report: &Report) -> Vec<CellAlignment> {
    let Some(first) = report.rows.first() else {
        return Vec::new();
    };
    first
        .iter()
        .map(|cell| match cell {
            ReportCell::Integer(_)
            | ReportCell::Number(_)
            | ReportCell::Time(_)
            | ReportCell::Dropped(_) => CellAlignment::Right,
            ReportCell::Flag(_) => CellAlignment::Center,
            ReportCell::Text(_) | ReportCell::Empty => CellAlignment::Left,
        })
        .collect()
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
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
