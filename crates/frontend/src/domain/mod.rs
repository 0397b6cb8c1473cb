pub mod a001_sales;
pub mod a002_purchases;
pub mod a003_inventory;
pub mod a004_contacts;
pub mod a005_dashboard;
pub mod a006_reports;
