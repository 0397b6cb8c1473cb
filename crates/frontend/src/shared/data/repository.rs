//! In-memory record store behind every list page
//!
//! One table per resource, seeded from the JSON files under `seed/`. The
//! repository is created once at startup and handed to pages through
//! context. Clones share the same tables.

use super::source::RecordSource;
use crate::shared::config::{SourceConfig, DASHBOARD_STATS_KEY, REPORTS_KEY};
use crate::shared::date_utils;
use crate::shared::summary::{period_report, DashboardTotals};
use contracts::enums::ResourceKind;
use contracts::shared::{
    DateRange, FetchError, FieldValue, PeriodReport, Record, RecordId, RepositoryError,
    StockStatus,
};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

pub type FieldMap = BTreeMap<String, FieldValue>;

const SEED_FILES: [(&str, &str); 5] = [
    ("dashboard", include_str!("seed/dashboard.json")),
    ("sales", include_str!("seed/sales.json")),
    ("purchases", include_str!("seed/purchases.json")),
    ("inventory", include_str!("seed/inventory.json")),
    ("contacts", include_str!("seed/contacts.json")),
];

#[derive(Debug, Default)]
struct Tables {
    /// Rows keyed by [`ResourceKind::table_key`]
    rows: HashMap<String, Vec<Record>>,
    /// Resource keys whose next fetch fails
    failing: HashSet<String>,
}

#[derive(Debug, Clone)]
pub struct MockRepository {
    tables: Arc<RwLock<Tables>>,
    config: Arc<SourceConfig>,
}

impl MockRepository {
    /// Repository without any rows
    pub fn empty(config: SourceConfig) -> Self {
        Self {
            tables: Arc::new(RwLock::new(Tables::default())),
            config: Arc::new(config),
        }
    }

    /// Repository filled from the embedded seed files
    pub fn seeded(config: SourceConfig) -> Result<Self, RepositoryError> {
        let mut rows = HashMap::new();
        for (section, contents) in SEED_FILES {
            let groups: HashMap<String, Vec<Record>> =
                serde_json::from_str(contents).map_err(|e| RepositoryError::Seed {
                    resource: section.to_string(),
                    message: e.to_string(),
                })?;
            for (name, records) in groups {
                rows.insert(format!("{}.{}", section, name), records);
            }
        }
        log::debug!("repository seeded with {} tables", rows.len());

        Ok(Self {
            tables: Arc::new(RwLock::new(Tables {
                rows,
                failing: HashSet::new(),
            })),
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the rows of `kind`. Contact tabs only see their type.
    pub fn list(&self, kind: ResourceKind) -> Vec<Record> {
        let tables = self.read();
        let Some(rows) = tables.rows.get(&kind.table_key()) else {
            return Vec::new();
        };
        match kind {
            ResourceKind::Contacts(scope) => match scope.contact_type() {
                Some(contact_type) => rows
                    .iter()
                    .filter(|r| r.text("type") == Some(contact_type))
                    .cloned()
                    .collect(),
                None => rows.clone(),
            },
            _ => rows.clone(),
        }
    }

    /// Store a new record with the next free id and the defaults of its
    /// resource
    pub fn create(&self, kind: ResourceKind, fields: FieldMap) -> Record {
        let mut tables = self.write();
        let rows = tables.rows.entry(kind.table_key()).or_default();

        let id = rows
            .iter()
            .map(|r| r.id)
            .max()
            .map(RecordId::next)
            .unwrap_or(RecordId::FIRST);

        let mut record = Record::new(id);
        for (key, value) in fields {
            if key != Record::ID_FIELD {
                record.fields.insert(key, value);
            }
        }
        let record = apply_create_defaults(kind, record);

        log::info!("created {} {}", kind.noun(), record.id);
        rows.push(record.clone());
        record
    }

    /// Merge `fields` into the stored record
    pub fn update(
        &self,
        kind: ResourceKind,
        id: RecordId,
        fields: &FieldMap,
    ) -> Result<Record, RepositoryError> {
        let mut tables = self.write();
        let row = tables
            .rows
            .get_mut(&kind.table_key())
            .and_then(|rows| rows.iter_mut().find(|r| r.id == id))
            .ok_or_else(|| not_found(kind, id))?;

        *row = row.merged(fields);
        log::info!("updated {} {}", kind.noun(), id);
        Ok(row.clone())
    }

    pub fn delete(&self, kind: ResourceKind, id: RecordId) -> Result<(), RepositoryError> {
        let mut tables = self.write();
        let rows = tables
            .rows
            .get_mut(&kind.table_key())
            .ok_or_else(|| not_found(kind, id))?;
        let index = rows
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| not_found(kind, id))?;

        rows.remove(index);
        log::info!("deleted {} {}", kind.noun(), id);
        Ok(())
    }

    /// Make the next fetch of `kind` fail
    pub fn fail_next(&self, kind: ResourceKind) {
        self.fail_next_key(&kind.key());
    }

    /// Same as [`fail_next`](Self::fail_next) for the dashboard stats
    /// and the period report
    pub fn fail_next_key(&self, key: &str) {
        self.write().failing.insert(key.to_string());
    }

    fn take_failure(&self, key: &str) -> bool {
        self.write().failing.remove(key)
    }

    async fn simulate_latency(&self, key: &str) {
        let latency = self.config.latency_for_key(key);
        log::debug!("fetching {} ({}ms)", key, latency);
        if latency > 0 {
            gloo_timers::future::TimeoutFuture::new(latency).await;
        }
    }

    /// Figures of the dashboard stat grid
    pub async fn dashboard_totals(&self) -> Result<DashboardTotals, FetchError> {
        self.simulate_latency(DASHBOARD_STATS_KEY).await;
        if self.take_failure(DASHBOARD_STATS_KEY) {
            return Err(FetchError::failed("dashboard data"));
        }
        Ok(DashboardTotals::compute(
            &self.list(ResourceKind::SalesInvoices),
            &self.list(ResourceKind::SalesOrders),
            &self.list(ResourceKind::InventoryItems),
        ))
    }

    /// Revenue and expense totals of the invoices dated within `range`
    pub async fn period_report(&self, range: DateRange) -> Result<PeriodReport, FetchError> {
        self.simulate_latency(REPORTS_KEY).await;
        if self.take_failure(REPORTS_KEY) {
            return Err(FetchError::failed("reports data"));
        }
        Ok(period_report(
            range,
            &self.list(ResourceKind::SalesInvoices),
            &self.list(ResourceKind::PurchaseInvoices),
        ))
    }
}

impl RecordSource for MockRepository {
    async fn fetch(&self, kind: ResourceKind) -> Result<Vec<Record>, FetchError> {
        self.simulate_latency(&kind.table_key()).await;

        if self.take_failure(&kind.key()) {
            return Err(FetchError::failed(kind.label().to_lowercase()));
        }
        Ok(self.list(kind))
    }
}

fn not_found(kind: ResourceKind, id: RecordId) -> RepositoryError {
    RepositoryError::NotFound {
        resource: kind.noun().to_string(),
        id,
    }
}

fn today() -> String {
    date_utils::to_iso(date_utils::today())
}

fn apply_create_defaults(kind: ResourceKind, record: Record) -> Record {
    match kind {
        ResourceKind::SalesInvoices => record
            .field("date", today())
            .field("status", "draft"),
        ResourceKind::PurchaseOrders => record
            .field("date", today())
            .field("status", "pending"),
        ResourceKind::InventoryItems => {
            let stock = record.number("stock").unwrap_or(0.0);
            let reorder = record.number("reorderLevel").unwrap_or(0.0);
            record.field("status", StockStatus::derive(stock, reorder).label())
        }
        ResourceKind::Contacts(scope) => {
            let record = match scope.contact_type() {
                Some(contact_type) if record.text("type").is_none() => {
                    record.field("type", contact_type)
                }
                _ => record,
            };
            record
                .field("totalTransactions", 0i64)
                .field("totalAmount", 0i64)
                .field("status", "active")
        }
        _ => record,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::ContactScope;
    use futures::executor::block_on;

    fn repo() -> MockRepository {
        MockRepository::seeded(SourceConfig::instant()).unwrap()
    }

    fn id(n: u32) -> RecordId {
        RecordId::new(n).unwrap()
    }

    fn fields(pairs: &[(&str, FieldValue)]) -> FieldMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_every_resource_is_seeded() {
        let repo = repo();
        for kind in ResourceKind::all() {
            assert!(!repo.list(kind).is_empty(), "{:?} has no rows", kind);
        }
    }

    #[test]
    fn test_dashboard_transactions_are_typed() {
        let recent = repo().list(ResourceKind::RecentTransactions);
        assert!(recent.iter().all(|r| matches!(
            r.text("type"),
            Some("invoice" | "order" | "quote" | "purchase")
        )));
    }

    #[test]
    fn test_dashboard_totals_follow_seed() {
        let repo = repo();
        let totals = block_on(repo.dashboard_totals()).unwrap();
        assert_eq!(
            totals,
            DashboardTotals::compute(
                &repo.list(ResourceKind::SalesInvoices),
                &repo.list(ResourceKind::SalesOrders),
                &repo.list(ResourceKind::InventoryItems),
            )
        );
        assert!(totals.revenue > 0.0);

        repo.fail_next_key(DASHBOARD_STATS_KEY);
        let err = block_on(repo.dashboard_totals()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to load dashboard data. Please try again."
        );
    }

    #[test]
    fn test_period_report_depends_on_range() {
        let repo = repo();
        let day = |m, d| chrono::NaiveDate::from_ymd_opt(2024, m, d).unwrap();

        let january = block_on(repo.period_report(DateRange::new(day(1, 1), day(1, 31)))).unwrap();
        let year = block_on(repo.period_report(DateRange::new(day(1, 1), day(12, 31)))).unwrap();
        let march = block_on(repo.period_report(DateRange::new(day(3, 1), day(3, 31)))).unwrap();

        assert!(january.revenue > 0.0);
        assert!(year.revenue > january.revenue);
        assert_eq!(march.revenue, 0.0);
        assert_eq!(year.date_range.end_date, day(12, 31));

        repo.fail_next_key(REPORTS_KEY);
        assert!(block_on(repo.period_report(DateRange::new(day(1, 1), day(1, 31)))).is_err());
        assert!(block_on(repo.period_report(DateRange::new(day(1, 1), day(1, 31)))).is_ok());
    }

    #[test]
    fn test_contacts_filtered_by_scope() {
        let repo = repo();
        let all = repo.list(ResourceKind::Contacts(ContactScope::All));
        let customers = repo.list(ResourceKind::Contacts(ContactScope::Customers));
        let suppliers = repo.list(ResourceKind::Contacts(ContactScope::Suppliers));

        assert_eq!(all.len(), customers.len() + suppliers.len());
        assert!(customers.iter().all(|c| c.text("type") == Some("customer")));
        assert!(suppliers.iter().all(|c| c.text("type") == Some("supplier")));
    }

    #[test]
    fn test_fetch_returns_snapshot() {
        let repo = repo();
        let records = block_on(repo.fetch(ResourceKind::Warehouses)).unwrap();
        assert_eq!(records, repo.list(ResourceKind::Warehouses));
    }

    #[test]
    fn test_fail_next_fails_once() {
        let repo = repo();
        repo.fail_next(ResourceKind::SalesInvoices);

        let err = block_on(repo.fetch(ResourceKind::SalesInvoices)).unwrap_err();
        assert_eq!(err.to_string(), "Failed to load invoices. Please try again.");

        assert!(block_on(repo.fetch(ResourceKind::SalesInvoices)).is_ok());
    }

    #[test]
    fn test_fail_next_is_per_resource() {
        let repo = repo();
        repo.fail_next(ResourceKind::SalesOrders);
        assert!(block_on(repo.fetch(ResourceKind::SalesInvoices)).is_ok());
        assert!(block_on(repo.fetch(ResourceKind::SalesOrders)).is_err());
    }

    #[test]
    fn test_create_assigns_next_id_and_invoice_defaults() {
        let repo = repo();
        let max = repo
            .list(ResourceKind::SalesInvoices)
            .iter()
            .map(|r| r.id.get())
            .max()
            .unwrap();

        let created = repo.create(
            ResourceKind::SalesInvoices,
            fields(&[
                ("number", "INV-NEW".into()),
                ("amount", 10.0.into()),
                ("status", "paid".into()),
            ]),
        );

        assert_eq!(created.id.get(), max + 1);
        assert_eq!(created.text("status"), Some("draft"));
        assert_eq!(created.text("date").map(str::len), Some(10));
        assert!(repo.list(ResourceKind::SalesInvoices).contains(&created));
    }

    #[test]
    fn test_create_in_empty_table_starts_at_one() {
        let repo = MockRepository::empty(SourceConfig::instant());
        let created = repo.create(ResourceKind::Stores, FieldMap::new());
        assert_eq!(created.id.get(), 1);
    }

    #[test]
    fn test_create_ignores_supplied_id() {
        let repo = MockRepository::empty(SourceConfig::instant());
        let created = repo.create(ResourceKind::Vendors, fields(&[("Id", 42.0.into())]));
        assert_eq!(created.id.get(), 1);
        assert!(!created.fields.contains_key("Id"));
    }

    #[test]
    fn test_create_purchase_order_is_pending() {
        let repo = repo();
        let created = repo.create(ResourceKind::PurchaseOrders, FieldMap::new());
        assert_eq!(created.text("status"), Some("pending"));
    }

    #[test]
    fn test_create_item_derives_stock_status() {
        let repo = repo();
        let low = repo.create(
            ResourceKind::InventoryItems,
            fields(&[("stock", 3.0.into()), ("reorderLevel", 5.0.into())]),
        );
        let out = repo.create(
            ResourceKind::InventoryItems,
            fields(&[("stock", 0.0.into()), ("reorderLevel", 5.0.into())]),
        );
        assert_eq!(low.text("status"), Some("Low Stock"));
        assert_eq!(out.text("status"), Some("Out of Stock"));
    }

    #[test]
    fn test_create_contact_defaults() {
        let repo = repo();
        let created = repo.create(
            ResourceKind::Contacts(ContactScope::Suppliers),
            fields(&[("name", "New Supplier".into())]),
        );
        assert_eq!(created.text("type"), Some("supplier"));
        assert_eq!(created.number("totalTransactions"), Some(0.0));
        assert_eq!(created.number("totalAmount"), Some(0.0));
        assert_eq!(created.text("status"), Some("active"));
        assert!(repo
            .list(ResourceKind::Contacts(ContactScope::Suppliers))
            .contains(&created));
    }

    #[test]
    fn test_update_merges_fields() {
        let repo = repo();
        let updated = repo
            .update(
                ResourceKind::Vendors,
                id(1),
                &fields(&[("status", "inactive".into())]),
            )
            .unwrap();

        assert_eq!(updated.text("status"), Some("inactive"));
        assert_eq!(updated.text("name"), Some("Northwind Supply"));
        assert_eq!(repo.list(ResourceKind::Vendors)[0], updated);
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let repo = repo();
        let err = repo
            .update(ResourceKind::Vendors, id(999), &FieldMap::new())
            .unwrap_err();
        assert_eq!(
            err,
            RepositoryError::NotFound {
                resource: "vendor".to_string(),
                id: id(999)
            }
        );
    }

    #[test]
    fn test_delete_removes_row() {
        let repo = repo();
        let before = repo.list(ResourceKind::Stores).len();
        repo.delete(ResourceKind::Stores, id(2)).unwrap();

        let after = repo.list(ResourceKind::Stores);
        assert_eq!(after.len(), before - 1);
        assert!(after.iter().all(|r| r.id != id(2)));
        assert!(repo.delete(ResourceKind::Stores, id(2)).is_err());
    }

    #[test]
    fn test_clones_share_tables() {
        let repo = repo();
        let other = repo.clone();
        other.delete(ResourceKind::Warehouses, id(1)).unwrap();
        assert!(repo
            .list(ResourceKind::Warehouses)
            .iter()
            .all(|r| r.id != id(1)));
    }
}
