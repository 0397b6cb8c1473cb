//! Report categories listed on the reports page

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportEntry {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportCategory {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub reports: [ReportEntry; 4],
}

const fn entry(name: &'static str, description: &'static str) -> ReportEntry {
    ReportEntry { name, description }
}

pub const CATEGORIES: [ReportCategory; 4] = [
    ReportCategory {
        title: "Sales Reports",
        description: "Analyze your sales performance and customer trends",
        icon: "trending-up",
        reports: [
            entry("Sales Summary", "Overview of sales by period"),
            entry("Customer Analysis", "Top customers and buying patterns"),
            entry("Product Performance", "Best and worst selling items"),
            entry("Sales Team Performance", "Individual salesperson metrics"),
        ],
    },
    ReportCategory {
        title: "Purchase Reports",
        description: "Track your procurement and vendor performance",
        icon: "shopping-cart",
        reports: [
            entry("Purchase Summary", "Overview of purchases by period"),
            entry("Vendor Analysis", "Vendor performance and reliability"),
            entry("Cost Analysis", "Purchase cost trends and savings"),
            entry("Purchase Orders", "PO status and delivery tracking"),
        ],
    },
    ReportCategory {
        title: "Inventory Reports",
        description: "Monitor stock levels and inventory valuation",
        icon: "package",
        reports: [
            entry("Stock Summary", "Current inventory levels by location"),
            entry("Stock Movements", "In/out transactions and transfers"),
            entry("Reorder Reports", "Items requiring restock"),
            entry("Inventory Valuation", "Total inventory value analysis"),
        ],
    },
    ReportCategory {
        title: "Financial Reports",
        description: "Financial performance and accounting summaries",
        icon: "dollar-sign",
        reports: [
            entry("Profit & Loss", "Income statement for the period"),
            entry("Cash Flow", "Cash inflows and outflows"),
            entry("Accounts Receivable", "Outstanding customer payments"),
            entry("Accounts Payable", "Outstanding vendor payments"),
        ],
    },
];

/// Confirmation logged after exporting a category
pub fn export_message(category: &ReportCategory) -> String {
    format!("{} report exported successfully", category.title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_report_names_are_unique() {
        let names: HashSet<&str> = CATEGORIES
            .iter()
            .flat_map(|c| c.reports.iter().map(|r| r.name))
            .collect();
        assert_eq!(names.len(), 16);
    }

    #[test]
    fn test_export_message() {
        assert_eq!(
            export_message(&CATEGORIES[3]),
            "Financial Reports report exported successfully"
        );
    }
}
