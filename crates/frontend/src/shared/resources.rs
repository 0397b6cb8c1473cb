//! Per-resource table layout: columns, searchable fields and the record
//! preparation applied before display

use crate::domain::{a001_sales, a002_purchases, a003_inventory, a004_contacts, a005_dashboard};
use crate::shared::components::table::{ColumnSpec, ColumnSpecError};
use contracts::enums::ResourceKind;
use contracts::shared::Record;

#[derive(Debug, Clone)]
pub struct ResourceView {
    pub columns: ColumnSpec,
    pub searchable: &'static [&'static str],
}

impl ResourceView {
    fn new(columns: ColumnSpec, searchable: &'static [&'static str]) -> Self {
        Self { columns, searchable }
    }
}

/// Fetched records as the table shows them
pub fn prepare_records(kind: ResourceKind, records: Vec<Record>) -> Vec<Record> {
    match kind {
        ResourceKind::InventoryItems => records
            .iter()
            .map(a003_inventory::columns::with_stock_status)
            .collect(),
        _ => records,
    }
}

/// Layout of `kind`. Fails when a column layout repeats a key.
pub fn view_spec(kind: ResourceKind) -> Result<ResourceView, ColumnSpecError> {
    let view = match kind {
        ResourceKind::RecentTransactions => ResourceView::new(
            a005_dashboard::columns::transaction_columns()?,
            a005_dashboard::columns::SEARCHABLE,
        ),
        ResourceKind::SalesInvoices | ResourceKind::SalesOrders | ResourceKind::SalesQuotes => {
            ResourceView::new(a001_sales::columns::document_columns()?, a001_sales::columns::SEARCHABLE)
        }
        ResourceKind::PurchaseOrders | ResourceKind::PurchaseInvoices => ResourceView::new(
            a002_purchases::columns::document_columns()?,
            a002_purchases::columns::SEARCHABLE,
        ),
        ResourceKind::Vendors => ResourceView::new(
            a002_purchases::columns::vendor_columns()?,
            a002_purchases::columns::SEARCHABLE,
        ),
        ResourceKind::InventoryItems => ResourceView::new(
            a003_inventory::columns::item_columns()?,
            a003_inventory::columns::SEARCHABLE,
        ),
        ResourceKind::Warehouses => ResourceView::new(
            a003_inventory::columns::warehouse_columns()?,
            a003_inventory::columns::SEARCHABLE,
        ),
        ResourceKind::Stores => ResourceView::new(
            a003_inventory::columns::store_columns()?,
            a003_inventory::columns::SEARCHABLE,
        ),
        ResourceKind::Contacts(_) => ResourceView::new(
            a004_contacts::columns::contact_columns()?,
            a004_contacts::columns::SEARCHABLE,
        ),
    };
    Ok(view)
}
