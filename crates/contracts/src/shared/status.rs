use serde::{Deserialize, Serialize};

/// Display category of a record status, used to pick a badge style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusCategory {
    Neutral,
    Informational,
    Success,
    Warning,
    Danger,
}

impl StatusCategory {
    /// Maps a stored status string to its category. Case-insensitive and total:
    /// anything not in the table is `Neutral`.
    pub fn from_status(status: &str) -> Self {
        match status.trim().to_lowercase().as_str() {
            "draft" => StatusCategory::Neutral,
            "sent" => StatusCategory::Informational,
            "paid" | "completed" => StatusCategory::Success,
            "overdue" | "failed" => StatusCategory::Danger,
            "pending" => StatusCategory::Warning,
            "in stock" => StatusCategory::Success,
            "low stock" => StatusCategory::Warning,
            "out of stock" => StatusCategory::Danger,
            _ => StatusCategory::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusCategory::Neutral => "neutral",
            StatusCategory::Informational => "informational",
            StatusCategory::Success => "success",
            StatusCategory::Warning => "warning",
            StatusCategory::Danger => "danger",
        }
    }
}

/// Stock level derived from `stock` against `reorderLevel`. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    InStock,
}

impl StockStatus {
    pub fn derive(stock: f64, reorder_level: f64) -> Self {
        if stock <= 0.0 {
            StockStatus::OutOfStock
        } else if stock <= reorder_level {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "Out of Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::InStock => "In Stock",
        }
    }

    pub fn category(&self) -> StatusCategory {
        StatusCategory::from_status(self.label())
    }
}
