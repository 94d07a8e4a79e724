use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ColumnConstraint, ContentArrangement, Table, Width};

use allergen_cli::report::{AliasRow, AllergenRow, CertaintyRow, ResolveRow};
use allergen_model::Certainty;
use allergen_standards::{AliasCollision, DoctorReport};

pub fn print_allergens(rows: &[AllergenRow]) {
    println!("{}", allergen_table(rows));
}

fn allergen_table(rows: &[AllergenRow]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Slug"),
        header_cell("Label"),
        header_cell("Aliases"),
    ]);
    apply_table_style(&mut table);
    table.set_constraints(vec![
        ColumnConstraint::UpperBoundary(Width::Fixed(20)),
        ColumnConstraint::UpperBoundary(Width::Fixed(30)),
        ColumnConstraint::UpperBoundary(Width::Percentage(60)),
    ]);
    for row in rows {
        table.add_row(vec![
            Cell::new(row.slug),
            Cell::new(row.label).add_attribute(Attribute::Bold),
            Cell::new(row.aliases.join(", ")),
        ]);
    }
    table
}

pub fn print_resolutions(rows: &[ResolveRow]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Input"),
        header_cell("Match"),
        header_cell("Slug"),
        header_cell("Label"),
    ]);
    apply_table_style(&mut table);
    for row in rows {
        let matched = match row.matched {
            Some(kind) => Cell::new(kind.as_str()).fg(Color::Green),
            None => Cell::new("none").fg(Color::Yellow),
        };
        table.add_row(vec![
            Cell::new(&row.input),
            matched,
            optional_cell(row.slug),
            optional_cell(row.label),
        ]);
    }
    println!("{table}");
}

pub fn print_certainties(rows: &[CertaintyRow]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Input"),
        header_cell("Normalized"),
        header_cell("Rule"),
        header_cell("Certainty"),
        header_cell("UI"),
    ]);
    apply_table_style(&mut table);
    for row in rows {
        let certainty = match row.certainty {
            Some(Certainty::Certain) => Cell::new("certain").fg(Color::Green),
            Some(Certainty::Likely) => Cell::new("likely"),
            None => dim_cell("-"),
        };
        table.add_row(vec![
            Cell::new(&row.input),
            Cell::new(&row.normalized_text),
            optional_cell(row.rule),
            certainty,
            Cell::new(row.ui),
        ]);
    }
    println!("{table}");
}

pub fn print_aliases(rows: &[AliasRow]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Key"), header_cell("Slug")]);
    apply_table_style(&mut table);
    for row in rows {
        table.add_row(vec![Cell::new(&row.key), Cell::new(row.slug)]);
    }
    println!("{table}");
}

pub fn print_doctor(report: &DoctorReport) {
    let counts = &report.counts;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Table"), header_cell("Count")]);
    apply_table_style(&mut table);
    for (name, count) in [
        ("Entries", counts.entries),
        ("Labels", counts.labels),
        ("Alias keys", counts.alias_keys),
        ("Legacy codes", counts.legacy_codes),
        ("Certainty rules", counts.certainty_rules),
        ("UI certainty values", counts.ui_certainty_values),
    ] {
        table.add_row(vec![Cell::new(name), Cell::new(count)]);
    }
    println!("{table}");

    if !report.collisions.is_empty() {
        println!("Alias collisions (later entry wins):");
        println!("{}", collision_table(&report.collisions));
    }

    if report.is_healthy() {
        println!("Tables OK");
    } else {
        for issue in &report.issues {
            println!("error: {issue}");
        }
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn collision_table(collisions: &[AliasCollision]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Alias"),
        header_cell("Shadowed"),
        header_cell("Owner"),
    ]);
    apply_table_style(&mut table);
    for collision in collisions {
        table.add_row(vec![
            Cell::new(&collision.key),
            Cell::new(collision.shadowed).fg(Color::Yellow),
            Cell::new(collision.winner),
        ]);
    }
    table
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;

    use allergen_cli::report::allergen_rows;
    use allergen_standards::canonical_allergens;

    #[test]
    fn list_table_bounds_its_columns() {
        let table = allergen_table(&allergen_rows(canonical_allergens()));
        assert!(table.column_iter().all(|column| column.constraint().is_some()));
    }

    #[test]
    fn collision_table_is_unconstrained() {
        let collisions = [AliasCollision {
            key: "nuts".to_string(),
            shadowed: "peanuts",
            winner: "tree_nuts",
        }];
        let mut table = collision_table(&collisions);
        assert_eq!(table.column_count(), 3);
        assert!(table.column_iter().all(|column| column.constraint().is_none()));
    }
}
