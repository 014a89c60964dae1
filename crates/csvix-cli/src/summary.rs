use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use csvix_model::FieldType;

use crate::types::LoadResult;

pub fn print_summary(result: &LoadResult) {
    println!(
        "Index: {} ({})",
        result.index,
        result.provision.describe()
    );

    let mut table = Table::new();
    table.set_header(vec![header_cell("Column"), header_cell("Type")]);
    apply_table_style(&mut table);
    for (column, field_type) in result.schema.iter() {
        table.add_row(vec![Cell::new(column), type_cell(field_type)]);
    }
    println!("{table}");

    println!(
        "Uploaded {} rows to index '{}' in {} batch(es) of up to {}. Current count: {}",
        result.rows, result.index, result.batches, result.batch_size, result.indexed_count
    );
    if result.indexed_count != result.rows as u64 {
        // Informational only: pre-existing documents or rejected duplicates
        // legitimately shift the count.
        println!(
            "Note: index count ({}) differs from source rows ({}).",
            result.indexed_count, result.rows
        );
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Center);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn type_cell(field_type: &FieldType) -> Cell {
    let label = match field_type {
        FieldType::Text { .. } => "text+keyword",
        other => other.name(),
    };
    match field_type {
        FieldType::Date => Cell::new(label).fg(Color::Magenta),
        FieldType::Text { .. } => Cell::new(label).fg(Color::Green),
        _ => Cell::new(label).fg(Color::Blue),
    }
}
