use crate::shared::components::table::{ColumnDef, ColumnSpec, ColumnSpecError};

/// Fields matched by the search box
pub const SEARCHABLE: &[&str] = &["number", "contactName"];

/// Invoices, orders and quotes share one layout
fn document_layout() -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("number", "Number"),
        ColumnDef::new("contactName", "Customer"),
        ColumnDef::new("date", "Date"),
        ColumnDef::new("amount", "Amount"),
        ColumnDef::new("status", "Status"),
    ]
}

pub fn document_columns() -> Result<ColumnSpec, ColumnSpecError> {
    ColumnSpec::new(document_layout())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::components::table::ColumnKind;

    #[test]
    fn test_amount_is_money_and_status_is_badge() {
        let columns = document_columns().unwrap();
        assert_eq!(columns.get("amount").map(|c| c.kind), Some(ColumnKind::Currency));
        assert_eq!(columns.get("status").map(|c| c.kind), Some(ColumnKind::Status));
        assert_eq!(columns.get("date").map(|c| c.kind), Some(ColumnKind::Plain));
    }

    #[test]
    fn test_document_layout_rejects_repeated_key() {
        assert!(document_columns().is_ok());
        let mut layout = document_layout();
        layout.push(ColumnDef::new("amount", "Total"));
        assert_eq!(
            ColumnSpec::new(layout).unwrap_err(),
            ColumnSpecError::DuplicateKey("amount".to_string())
        );
    }
}
