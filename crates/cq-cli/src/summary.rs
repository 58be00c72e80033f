use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use cq_model::{Issue, ValidationFailed};
use cq_standards::Standards;
use cq_validate::NOT_APPLICABLE;

pub fn print_issue_table(failed: &ValidationFailed) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Section"),
        header_cell("Message"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, issue) in failed.issues.iter().enumerate() {
        table.add_row(vec![
            dim_cell(index + 1),
            Cell::new(issue_section(issue))
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(issue.to_string()).fg(Color::Red),
        ]);
    }
    eprintln!("Issues:");
    eprintln!("{table}");
    eprintln!("{failed}");
}

pub fn print_rank_table(standards: &Standards) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Rank"), header_cell("Abbreviation")]);
    apply_table_style(&mut table);
    for entry in &standards.ranks {
        table.add_row(vec![Cell::new(&entry.option), Cell::new(&entry.abbreviation)]);
    }
    println!("{table}");
}

pub fn print_bay_table(standards: &Standards) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Bay"), header_cell("MTL")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    for (bay, mtl) in &standards.bay_mtls {
        let mtl_cell = if mtl == NOT_APPLICABLE {
            dim_cell(mtl)
        } else {
            Cell::new(mtl)
        };
        table.add_row(vec![Cell::new(bay), mtl_cell]);
    }
    println!("{table}");
}

/// Dropdown option lists for the free-choice notes and signature fields.
pub fn print_option_table(standards: &Standards) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Options")]);
    apply_table_style(&mut table);
    let rows = [
        ("On-Call MTL", &standards.on_call_mtls),
        ("Squadron", &standards.squadrons),
        ("AFSC/Job", &standards.jobs),
    ];
    for (field, options) in rows {
        table.add_row(vec![
            Cell::new(field).add_attribute(Attribute::Bold),
            Cell::new(options.join("\n")),
        ]);
    }
    println!("{table}");
}

fn issue_section(issue: &Issue) -> String {
    match issue {
        Issue::ManorMissing { .. } => "Manor".to_string(),
        Issue::IncompletePerson { context }
        | Issue::LateFieldsMissing { context, .. }
        | Issue::InvalidRoom { context, .. } => context.clone(),
        Issue::RoleRequired { role } | Issue::AtLeastOneRequired { role } => role.to_string(),
        Issue::SignatureIncomplete { .. } => "Signature".to_string(),
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
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
    Cell::new(value).fg(Color::DarkGrey)
}
