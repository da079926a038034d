//! Terminal rendering of form errors, validated input and poems.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde_json::{Value, json};

use mutanabi_model::{Field, FieldErrors, FormState, Label, ValidatedInput};

/// One row per failing field with the message in both languages.
pub fn errors_table(errors: &FieldErrors) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Code"),
        header_cell("English"),
        header_cell("العربية"),
    ]);
    apply_table_style(&mut table);
    for (field, error) in errors {
        table.add_row(vec![
            Cell::new(field.as_str()).add_attribute(Attribute::Bold),
            Cell::new(error.code.as_str()).fg(Color::Red),
            Cell::new(error.primary()),
            Cell::new(error.secondary()).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

/// The input as it will be sent.
pub fn input_table(input: &ValidatedInput) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_table_style(&mut table);
    table.add_row(vec![Cell::new("word"), Cell::new(&input.word)]);
    table.add_row(vec![Cell::new("count"), Cell::new(input.count)]);
    table
}

/// One field after revalidation, with the count default applied.
pub fn field_table(field: Field, form: &FormState) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_table_style(&mut table);
    table.add_row(vec![Cell::new(field.as_str()), Cell::new(form.value(field))]);
    table
}

/// Machine-readable outcome of revalidating one field.
pub fn field_json(field: Field, form: &FormState) -> Value {
    match form.error(field) {
        None => json!({ "valid": true, "field": field, "value": form.value(field) }),
        Some(error) => json!({
            "valid": false,
            "field": field,
            "value": form.value(field),
            "code": error.code,
            "primary": error.primary(),
            "secondary": error.secondary(),
        }),
    }
}

/// Machine-readable validation outcome.
pub fn check_json(result: &Result<ValidatedInput, FieldErrors>) -> Value {
    match result {
        Ok(input) => json!({ "valid": true, "input": input }),
        Err(errors) => {
            let errors: Vec<Value> = errors
                .iter()
                .map(|(field, error)| {
                    json!({
                        "field": field,
                        "code": error.code,
                        "primary": error.primary(),
                        "secondary": error.secondary(),
                    })
                })
                .collect();
            json!({ "valid": false, "errors": errors })
        }
    }
}

/// Bilingual title above the poem.
pub fn poem_heading() -> String {
    let title = Label::Title.text();
    format!("{}\n{}", title.primary, title.secondary)
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
