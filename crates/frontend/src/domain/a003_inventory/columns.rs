use crate::shared::components::table::{ColumnDef, ColumnSpec, ColumnSpecError};
use contracts::shared::{Record, StockStatus};

pub const SEARCHABLE: &[&str] = &["name", "sku", "location"];

fn item_layout() -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("sku", "SKU"),
        ColumnDef::new("name", "Item Name"),
        ColumnDef::new("category", "Category"),
        ColumnDef::new("stock", "Stock"),
        ColumnDef::new("reorderLevel", "Reorder Level"),
        ColumnDef::new("price", "Price").currency(),
        ColumnDef::new("status", "Status"),
    ]
}

pub fn item_columns() -> Result<ColumnSpec, ColumnSpecError> {
    ColumnSpec::new(item_layout())
}

fn warehouse_layout() -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("name", "Warehouse Name"),
        ColumnDef::new("location", "Location"),
        ColumnDef::new("capacity", "Capacity"),
        ColumnDef::new("utilization", "Utilization"),
        ColumnDef::new("manager", "Manager"),
        ColumnDef::new("status", "Status"),
    ]
}

pub fn warehouse_columns() -> Result<ColumnSpec, ColumnSpecError> {
    ColumnSpec::new(warehouse_layout())
}

fn store_layout() -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("name", "Store Name"),
        ColumnDef::new("location", "Location"),
        ColumnDef::new("manager", "Manager"),
        ColumnDef::new("itemsCount", "Items"),
        ColumnDef::new("revenue", "Revenue").currency(),
        ColumnDef::new("status", "Status"),
    ]
}

pub fn store_columns() -> Result<ColumnSpec, ColumnSpecError> {
    ColumnSpec::new(store_layout())
}

/// Snapshot of an item with `status` set from its stock level
pub fn with_stock_status(record: &Record) -> Record {
    let stock = record.number("stock").unwrap_or(0.0);
    let reorder = record.number("reorderLevel").unwrap_or(0.0);
    record.with_field("status", StockStatus::derive(stock, reorder).label())
}
