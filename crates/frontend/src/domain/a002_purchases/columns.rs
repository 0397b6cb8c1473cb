use crate::shared::components::table::{ColumnDef, ColumnSpec, ColumnSpecError};

/// Fields matched by the search box. Documents carry `vendorName`, vendors
/// carry `name`.
pub const SEARCHABLE: &[&str] = &["number", "name", "vendorName"];

fn document_layout() -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("number", "Number"),
        ColumnDef::new("vendorName", "Vendor"),
        ColumnDef::new("date", "Date"),
        ColumnDef::new("amount", "Amount"),
        ColumnDef::new("status", "Status"),
    ]
}

pub fn document_columns() -> Result<ColumnSpec, ColumnSpecError> {
    ColumnSpec::new(document_layout())
}

fn vendor_layout() -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("name", "Vendor Name"),
        ColumnDef::new("email", "Email"),
        ColumnDef::new("phone", "Phone"),
        // an order count, not money
        ColumnDef::new("totalOrders", "Orders").plain(),
        ColumnDef::new("totalAmount", "Total Amount"),
        ColumnDef::new("status", "Status"),
    ]
}

pub fn vendor_columns() -> Result<ColumnSpec, ColumnSpecError> {
    ColumnSpec::new(vendor_layout())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::components::table::ColumnKind;

    #[test]
    fn test_order_count_overrides_inferred_currency() {
        let columns = vendor_columns().unwrap();
        assert_eq!(columns.get("totalOrders").map(|c| c.kind), Some(ColumnKind::Plain));
        assert_eq!(
            columns.get("totalAmount").map(|c| c.kind),
            Some(ColumnKind::Currency)
        );
    }

    #[test]
    fn test_vendor_layout_rejects_repeated_key() {
        assert!(document_columns().is_ok());
        assert!(vendor_columns().is_ok());
        let mut layout = vendor_layout();
        layout.insert(0, ColumnDef::new("status", "State"));
        assert_eq!(
            ColumnSpec::new(layout).unwrap_err(),
            ColumnSpecError::DuplicateKey("status".to_string())
        );
    }
}
