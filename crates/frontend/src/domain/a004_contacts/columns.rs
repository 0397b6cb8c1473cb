use crate::shared::components::table::{CellContent, ColumnDef, ColumnSpec, ColumnSpecError};
use contracts::shared::{FieldValue, Record};

pub const SEARCHABLE: &[&str] = &["name", "email", "phone"];

fn contact_type_label(value: Option<&FieldValue>, _record: &Record) -> CellContent {
    let label = match value.and_then(FieldValue::as_str) {
        Some("customer") => "Customer".to_string(),
        Some("supplier") => "Supplier".to_string(),
        Some(other) => other.to_string(),
        None => String::new(),
    };
    CellContent::text(label)
}

fn contact_layout() -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("name", "Name"),
        ColumnDef::new("type", "Type").render_with(contact_type_label),
        ColumnDef::new("email", "Email"),
        ColumnDef::new("phone", "Phone"),
        ColumnDef::new("totalTransactions", "Transactions").plain(),
        ColumnDef::new("totalAmount", "Total Amount"),
        ColumnDef::new("status", "Status"),
    ]
}

pub fn contact_columns() -> Result<ColumnSpec, ColumnSpecError> {
    ColumnSpec::new(contact_layout())
}
