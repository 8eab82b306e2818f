use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use ark_model::{ComponentDefinition, PropertyKind, PropertyValue};
use ark_registry::{ComponentRegistry, category_label, property_label};

use ark_cli::replay::ReplayReport;

pub fn palette_table(registry: &ComponentRegistry) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Type"),
        header_cell("Name"),
        header_cell("Icon"),
        header_cell("Children"),
        header_cell("Properties"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 4, CellAlignment::Center);
    align_column(&mut table, 5, CellAlignment::Right);
    for (category, definitions) in registry.list_by_category() {
        for (index, definition) in definitions.into_iter().enumerate() {
            let category_cell = if index == 0 {
                Cell::new(category_label(category))
                    .fg(Color::Blue)
                    .add_attribute(Attribute::Bold)
            } else {
                dim_cell("")
            };
            table.add_row(vec![
                category_cell,
                Cell::new(definition.component_type),
                Cell::new(&definition.name),
                dim_cell(&definition.icon),
                children_cell(definition.allows_children),
                Cell::new(definition.properties.len()),
            ]);
        }
    }
    table
}

pub fn schema_table(definition: &ComponentDefinition) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Property"),
        header_cell("Label"),
        header_cell("Kind"),
        header_cell("Default"),
        header_cell("Options"),
    ]);
    apply_table_style(&mut table);
    for (name, schema) in &definition.properties {
        let options = if schema.options.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(schema.options.join(", "))
        };
        table.add_row(vec![
            Cell::new(name),
            Cell::new(property_label(name)),
            kind_cell(schema.kind),
            value_cell(&schema.default),
            options,
        ]);
    }
    table
}

pub fn print_replay_report(report: &ReplayReport) {
    println!("Applied: {}", report.applied);
    if report.failed.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Error")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for failure in &report.failed {
        table.add_row(vec![
            Cell::new(failure.position),
            Cell::new(&failure.error).fg(Color::Red),
        ]);
    }
    eprintln!("Failed commands:");
    eprintln!("{table}");
}

fn apply_table_style(table: &mut Table) {
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

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn children_cell(allows_children: bool) -> Cell {
    if allows_children {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

fn kind_cell(kind: PropertyKind) -> Cell {
    let color = match kind {
        PropertyKind::Text => Color::White,
        PropertyKind::Number => Color::Magenta,
        PropertyKind::Boolean => Color::Yellow,
        PropertyKind::Select => Color::Blue,
        PropertyKind::Color => Color::Green,
    };
    Cell::new(kind).fg(color)
}

fn value_cell(value: &PropertyValue) -> Cell {
    match value {
        PropertyValue::Text(s) if s.is_empty() => dim_cell("\"\""),
        _ => Cell::new(value),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
