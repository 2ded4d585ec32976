//! Tables and summaries printed by the command-line tool.

use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use pseudo_catalog::CatalogStats;
use pseudo_core::{PseudoLocalizer, TransformKind};
use serde::Serialize;

/// Sample run through each transform in the listing.
pub const EXAMPLE_TEXT: &str = "Hi {0}";

/// One row of the transform listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformRow {
    pub name: &'static str,
    pub scope: &'static str,
    pub description: &'static str,
    pub example: String,
}

/// Listing rows for every transform, in catalog order.
///
/// The example is produced by a pipeline holding only that transform, so
/// placeholder handling shows up the way it would in a real run.
pub fn transform_rows() -> Vec<TransformRow> {
    TransformKind::ALL
        .into_iter()
        .map(|kind| TransformRow {
            name: kind.name(),
            scope: kind.scope().display_name(),
            description: kind.description(),
            example: PseudoLocalizer::with_transforms([kind]).pseudolocalize(EXAMPLE_TEXT),
        })
        .collect()
}

pub fn transforms_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Transform"),
        header_cell("Scope"),
        header_cell("Description"),
        header_cell(&format!("Example ({EXAMPLE_TEXT})")),
    ]);
    apply_table_style(&mut table);
    for row in transform_rows() {
        table.add_row(vec![
            Cell::new(row.name).add_attribute(Attribute::Bold),
            dim_cell(row.scope),
            Cell::new(row.description),
            Cell::new(row.example),
        ]);
    }
    table
}

pub fn catalog_table(input: &Path, output: &Path, stats: &CatalogStats) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Input"),
        header_cell("Output"),
        header_cell("Lines"),
        header_cell("Messages"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    table.add_row(vec![
        Cell::new(input.display()),
        Cell::new(output.display()),
        Cell::new(stats.lines_read),
        Cell::new(stats.messages).fg(Color::Green),
    ]);
    table
}

/// Machine-readable form of a catalog run.
#[derive(Serialize)]
struct CatalogReport<'a> {
    input: &'a Path,
    output: &'a Path,
    #[serde(flatten)]
    stats: &'a CatalogStats,
}

/// Render a catalog run as a single JSON object.
pub fn catalog_json(
    input: &Path,
    output: &Path,
    stats: &CatalogStats,
) -> serde_json::Result<String> {
    serde_json::to_string(&CatalogReport {
        input,
        output,
        stats,
    })
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

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).fg(Color::DarkGrey)
}
