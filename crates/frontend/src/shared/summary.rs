//! Aggregates shown under each list, computed over the filtered rows, plus
//! the dashboard and report totals

use crate::shared::components::table::{format_currency, format_number_int, parse_amount};
use crate::shared::date_utils::is_same_month;
use chrono::NaiveDate;
use contracts::enums::{ResourceKind, Section};
use contracts::shared::{DateRange, PeriodReport, Record, StatusCategory, StockStatus};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SummaryValue {
    Count(usize),
    Money(f64),
}

impl SummaryValue {
    pub fn display(&self) -> String {
        match self {
            SummaryValue::Count(n) => format_number_int(*n as f64),
            SummaryValue::Money(v) => format_currency(*v),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStat {
    pub label: String,
    pub icon: &'static str,
    pub value: SummaryValue,
    pub tone: StatusCategory,
    /// Small print under the value
    pub note: Option<String>,
}

impl SummaryStat {
    fn new(label: impl Into<String>, icon: &'static str, value: SummaryValue) -> Self {
        Self {
            label: label.into(),
            icon,
            value,
            tone: StatusCategory::Neutral,
            note: None,
        }
    }

    fn tone(mut self, tone: StatusCategory) -> Self {
        self.tone = tone;
        self
    }

    fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

fn amount_of(record: &Record) -> f64 {
    let amount = record.get("amount").or_else(|| record.get("totalAmount"));
    parse_amount(amount.as_deref())
}

/// Totals of invoice/order-like lists
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DocumentTotals {
    pub count: usize,
    pub total_value: f64,
    /// Rows waiting on someone (`pending` or `sent`)
    pub pending: usize,
}

impl DocumentTotals {
    pub fn compute(records: &[Record]) -> Self {
        records.iter().fold(Self::default(), |mut acc, record| {
            acc.count += 1;
            acc.total_value += amount_of(record);
            if matches!(record.text("status"), Some("pending" | "sent")) {
                acc.pending += 1;
            }
            acc
        })
    }
}

/// Rows dated in the month of `today`
pub fn count_this_month(records: &[Record], today: NaiveDate) -> usize {
    records
        .iter()
        .filter(|record| record.text("date").is_some_and(|date| is_same_month(date, today)))
        .count()
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StockTotals {
    pub count: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
    /// Sum of `stock * price`
    pub stock_value: f64,
}

impl StockTotals {
    pub fn compute(records: &[Record]) -> Self {
        records.iter().fold(Self::default(), |mut acc, record| {
            let stock = parse_amount(record.get("stock").as_deref());
            let reorder = parse_amount(record.get("reorderLevel").as_deref());
            let price = parse_amount(record.get("price").as_deref());

            acc.count += 1;
            match StockStatus::derive(stock, reorder) {
                StockStatus::LowStock => acc.low_stock += 1,
                StockStatus::OutOfStock => acc.out_of_stock += 1,
                StockStatus::InStock => {}
            }
            acc.stock_value += stock.max(0.0) * price;
            acc
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContactTotals {
    pub count: usize,
    pub customers: usize,
    pub suppliers: usize,
    pub total_amount: f64,
}

impl ContactTotals {
    pub fn compute(records: &[Record]) -> Self {
        records.iter().fold(Self::default(), |mut acc, record| {
            acc.count += 1;
            match record.text("type") {
                Some("customer") => acc.customers += 1,
                Some("supplier") => acc.suppliers += 1,
                _ => {}
            }
            acc.total_amount += parse_amount(record.get("totalAmount").as_deref());
            acc
        })
    }
}

/// Cards for the given resource. Warehouses, stores and the dashboard
/// list have none. `today` anchors the purchases "This Month" card.
pub fn summarize(kind: ResourceKind, records: &[Record], today: NaiveDate) -> Vec<SummaryStat> {
    match kind.section() {
        Section::Sales | Section::Purchases => {
            let totals = DocumentTotals::compute(records);
            let mut stats = vec![
                SummaryStat::new(
                    format!("Total {}", kind.label()),
                    kind.icon(),
                    SummaryValue::Count(totals.count),
                ),
                SummaryStat::new("Total Value", "dollar-sign", SummaryValue::Money(totals.total_value))
                    .tone(StatusCategory::Success),
                SummaryStat::new("Pending", "clock", SummaryValue::Count(totals.pending))
                    .tone(StatusCategory::Warning),
            ];
            if kind.section() == Section::Purchases {
                stats.push(
                    SummaryStat::new(
                        "This Month",
                        "calendar",
                        SummaryValue::Count(count_this_month(records, today)),
                    )
                    .tone(StatusCategory::Informational),
                );
            }
            stats
        }
        Section::Inventory => match kind {
            ResourceKind::InventoryItems => {
                let totals = StockTotals::compute(records);
                vec![
                    SummaryStat::new("Total Items", "package", SummaryValue::Count(totals.count)),
                    SummaryStat::new(
                        "Low Stock Items",
                        "alert-triangle",
                        SummaryValue::Count(totals.low_stock),
                    )
                    .tone(StatusCategory::Warning),
                    SummaryStat::new("Out of Stock", "x-circle", SummaryValue::Count(totals.out_of_stock))
                        .tone(StatusCategory::Danger),
                    SummaryStat::new("Total Value", "dollar-sign", SummaryValue::Money(totals.stock_value))
                        .tone(StatusCategory::Success),
                ]
            }
            _ => Vec::new(),
        },
        Section::Contacts => {
            let totals = ContactTotals::compute(records);
            vec![
                SummaryStat::new("Total Contacts", "users", SummaryValue::Count(totals.count)),
                SummaryStat::new("Customers", "user", SummaryValue::Count(totals.customers))
                    .tone(StatusCategory::Informational),
                SummaryStat::new("Suppliers", "truck", SummaryValue::Count(totals.suppliers))
                    .tone(StatusCategory::Warning),
                SummaryStat::new("Total Amount", "dollar-sign", SummaryValue::Money(totals.total_amount))
                    .tone(StatusCategory::Success),
            ]
        }
        Section::Dashboard | Section::Reports => Vec::new(),
    }
}

/// Business-wide figures of the dashboard stat grid
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DashboardTotals {
    /// Paid sales invoices
    pub revenue: f64,
    /// Sent and overdue sales invoices
    pub outstanding: f64,
    pub unpaid_invoices: usize,
    /// Sales orders still pending
    pub open_orders: usize,
    /// Items at or below their reorder level, out of stock included
    pub low_stock_items: usize,
}

impl DashboardTotals {
    pub fn compute(invoices: &[Record], orders: &[Record], items: &[Record]) -> Self {
        let mut totals = Self::default();
        for invoice in invoices {
            match invoice.text("status") {
                Some("paid") => totals.revenue += amount_of(invoice),
                Some("sent" | "overdue") => {
                    totals.outstanding += amount_of(invoice);
                    totals.unpaid_invoices += 1;
                }
                _ => {}
            }
        }
        totals.open_orders = orders
            .iter()
            .filter(|order| order.text("status") == Some("pending"))
            .count();
        let stock = StockTotals::compute(items);
        totals.low_stock_items = stock.low_stock + stock.out_of_stock;
        totals
    }

    pub fn stats(&self) -> Vec<SummaryStat> {
        vec![
            SummaryStat::new("Total Revenue", "dollar-sign", SummaryValue::Money(self.revenue))
                .tone(StatusCategory::Success)
                .note("from paid invoices"),
            SummaryStat::new("Outstanding", "clock", SummaryValue::Money(self.outstanding))
                .tone(StatusCategory::Warning)
                .note(format!("{} unpaid invoices", self.unpaid_invoices)),
            SummaryStat::new("Open Orders", "shopping-cart", SummaryValue::Count(self.open_orders))
                .tone(StatusCategory::Informational),
            SummaryStat::new(
                "Low Stock Items",
                "alert-triangle",
                SummaryValue::Count(self.low_stock_items),
            )
            .tone(StatusCategory::Danger),
        ]
    }
}

/// Totals of the sales and purchase invoices dated within `range`
pub fn period_report(range: DateRange, sales: &[Record], purchases: &[Record]) -> PeriodReport {
    let in_range = |record: &&Record| record.text("date").is_some_and(|d| range.contains_iso(d));

    let mut report = PeriodReport::empty(range);
    for invoice in sales.iter().filter(in_range) {
        report.revenue += amount_of(invoice);
        if matches!(invoice.text("status"), Some("sent" | "overdue")) {
            report.outstanding += amount_of(invoice);
            report.pending_invoices += 1;
        }
    }
    report.expenses = purchases.iter().filter(in_range).map(amount_of).sum();
    report
}

/// Cards of the reports page
pub fn report_stats(report: &PeriodReport) -> Vec<SummaryStat> {
    let net = report.net_profit();
    vec![
        SummaryStat::new("Total Revenue", "dollar-sign", SummaryValue::Money(report.revenue))
            .tone(StatusCategory::Success),
        SummaryStat::new("Total Expenses", "credit-card", SummaryValue::Money(report.expenses))
            .tone(StatusCategory::Danger),
        SummaryStat::new("Net Profit", "trending-up", SummaryValue::Money(net)).tone(if net < 0.0 {
            StatusCategory::Danger
        } else {
            StatusCategory::Informational
        }),
        SummaryStat::new("Outstanding", "clock", SummaryValue::Money(report.outstanding))
            .tone(StatusCategory::Warning)
            .note(format!("{} pending invoices", report.pending_invoices)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::ContactScope;
    use contracts::shared::RecordId;

    fn record(id: u32) -> Record {
        Record::new(RecordId::new(id).unwrap())
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_document_totals() {
        let rows = vec![
            record(1).field("amount", 100.5).field("status", "paid"),
            record(2).field("amount", "200").field("status", "sent"),
            record(3).field("amount", "n/a").field("status", "pending"),
            record(4).field("status", "draft"),
        ];
        let totals = DocumentTotals::compute(&rows);
        assert_eq!(totals.count, 4);
        assert_eq!(totals.total_value, 300.5);
        assert_eq!(totals.pending, 2);
    }

    #[test]
    fn test_document_totals_fall_back_to_total_amount() {
        let rows = vec![record(1).field("totalAmount", 50.0)];
        assert_eq!(DocumentTotals::compute(&rows).total_value, 50.0);
    }

    #[test]
    fn test_stock_totals() {
        let rows = vec![
            record(1).field("stock", 10.0).field("reorderLevel", 5.0).field("price", 2.5),
            record(2).field("stock", 5.0).field("reorderLevel", 5.0).field("price", 1.0),
            record(3).field("stock", 0.0).field("reorderLevel", 5.0).field("price", 9.0),
        ];
        let totals = StockTotals::compute(&rows);
        assert_eq!(totals.count, 3);
        assert_eq!(totals.low_stock, 1);
        assert_eq!(totals.out_of_stock, 1);
        assert_eq!(totals.stock_value, 30.0);
    }

    #[test]
    fn test_contact_totals() {
        let rows = vec![
            record(1).field("type", "customer").field("totalAmount", 10.0),
            record(2).field("type", "supplier").field("totalAmount", 5.0),
            record(3).field("type", "customer"),
        ];
        let totals = ContactTotals::compute(&rows);
        assert_eq!(totals.customers, 2);
        assert_eq!(totals.suppliers, 1);
        assert_eq!(totals.total_amount, 15.0);
    }

    #[test]
    fn test_summarize_cards_per_resource() {
        let today = day(2024, 2, 20);
        assert_eq!(summarize(ResourceKind::SalesQuotes, &[], today).len(), 3);
        assert_eq!(summarize(ResourceKind::PurchaseOrders, &[], today).len(), 4);
        assert_eq!(summarize(ResourceKind::InventoryItems, &[], today).len(), 4);
        assert!(summarize(ResourceKind::Warehouses, &[], today).is_empty());
        assert!(summarize(ResourceKind::RecentTransactions, &[], today).is_empty());
        assert_eq!(
            summarize(ResourceKind::Contacts(ContactScope::Customers), &[], today).len(),
            4
        );
    }

    #[test]
    fn test_purchases_count_rows_of_current_month() {
        let rows = vec![
            record(1).field("date", "2024-02-03"),
            record(2).field("date", "2024-02-28"),
            record(3).field("date", "2024-01-31"),
            record(4).field("date", "2023-02-10"),
            record(5),
        ];
        let stats = summarize(ResourceKind::PurchaseInvoices, &rows, day(2024, 2, 20));
        let this_month = stats.iter().find(|s| s.label == "This Month").unwrap();
        assert_eq!(this_month.value, SummaryValue::Count(2));
        assert!(summarize(ResourceKind::SalesInvoices, &rows, day(2024, 2, 20))
            .iter()
            .all(|s| s.label != "This Month"));
    }

    #[test]
    fn test_dashboard_totals() {
        let invoices = vec![
            record(1).field("amount", 100.0).field("status", "paid"),
            record(2).field("amount", 40.0).field("status", "sent"),
            record(3).field("amount", 10.0).field("status", "overdue"),
            record(4).field("amount", 999.0).field("status", "draft"),
        ];
        let orders = vec![
            record(1).field("status", "pending"),
            record(2).field("status", "completed"),
        ];
        let items = vec![
            record(1).field("stock", 0.0).field("reorderLevel", 5.0),
            record(2).field("stock", 3.0).field("reorderLevel", 5.0),
            record(3).field("stock", 30.0).field("reorderLevel", 5.0),
        ];
        let totals = DashboardTotals::compute(&invoices, &orders, &items);
        assert_eq!(totals.revenue, 100.0);
        assert_eq!(totals.outstanding, 50.0);
        assert_eq!(totals.unpaid_invoices, 2);
        assert_eq!(totals.open_orders, 1);
        assert_eq!(totals.low_stock_items, 2);

        let stats = totals.stats();
        assert_eq!(stats.len(), 4);
        assert_eq!(stats[1].note.as_deref(), Some("2 unpaid invoices"));
    }

    #[test]
    fn test_period_report_only_counts_dates_in_range() {
        let range = DateRange::new(day(2024, 1, 10), day(2024, 1, 31));
        let sales = vec![
            record(1).field("date", "2024-01-15").field("amount", 500.0).field("status", "paid"),
            record(2).field("date", "2024-01-20").field("amount", 200.0).field("status", "sent"),
            record(3).field("date", "2024-02-01").field("amount", 900.0).field("status", "sent"),
            record(4).field("amount", 50.0),
        ];
        let purchases = vec![
            record(1).field("date", "2024-01-12").field("amount", 150.0),
            record(2).field("date", "2024-01-05").field("amount", 80.0),
        ];
        let report = period_report(range, &sales, &purchases);
        assert_eq!(report.date_range, range);
        assert_eq!(report.revenue, 700.0);
        assert_eq!(report.expenses, 150.0);
        assert_eq!(report.outstanding, 200.0);
        assert_eq!(report.pending_invoices, 1);
        assert_eq!(report.net_profit(), 550.0);

        let stats = report_stats(&report);
        assert_eq!(stats[2].value, SummaryValue::Money(550.0));
        assert_eq!(stats[3].note.as_deref(), Some("1 pending invoices"));
    }

    #[test]
    fn test_summary_values_display() {
        assert_eq!(SummaryValue::Money(1234.5).display(), "$1,234.5");
        assert_eq!(SummaryValue::Count(1200).display(), "1,200");
    }
}
