use crate::shared::components::table::{CellContent, ColumnDef, ColumnSpec, ColumnSpecError};
use contracts::shared::{FieldValue, Record};

pub const SEARCHABLE: &[&str] = &["number", "contactName"];

/// `invoice` shows as `Invoice`
fn transaction_type_label(value: Option<&FieldValue>, _record: &Record) -> CellContent {
    let text = value.and_then(FieldValue::as_str).unwrap_or_default();
    let mut chars = text.chars();
    let label = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    CellContent::text(label)
}

fn transaction_layout() -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("type", "Type").render_with(transaction_type_label),
        ColumnDef::new("number", "Number"),
        ColumnDef::new("contactName", "Contact"),
        ColumnDef::new("date", "Date"),
        ColumnDef::new("amount", "Amount"),
        ColumnDef::new("status", "Status"),
    ]
}

pub fn transaction_columns() -> Result<ColumnSpec, ColumnSpecError> {
    ColumnSpec::new(transaction_layout())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::components::table::{render_cell, ColumnKind};
    use contracts::shared::RecordId;

    #[test]
    fn test_type_is_capitalized() {
        let columns = transaction_columns().unwrap();
        let column = columns.get("type").unwrap();
        let record = Record::new(RecordId::new(1).unwrap()).field("type", "purchase");
        assert_eq!(render_cell(column, &record), CellContent::text("Purchase"));

        let blank = Record::new(RecordId::new(2).unwrap());
        assert_eq!(render_cell(column, &blank), CellContent::text(""));
    }

    #[test]
    fn test_amount_is_money() {
        let columns = transaction_columns().unwrap();
        assert_eq!(columns.get("amount").map(|c| c.kind), Some(ColumnKind::Currency));
    }

    #[test]
    fn test_transaction_layout_rejects_repeated_key() {
        let mut layout = transaction_layout();
        layout.push(ColumnDef::new("type", "Kind"));
        assert_eq!(
            ColumnSpec::new(layout).unwrap_err(),
            ColumnSpecError::DuplicateKey("type".to_string())
        );
    }
}
