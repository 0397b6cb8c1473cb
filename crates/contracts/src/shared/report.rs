use crate::shared::date_range::DateRange;
use serde::{Deserialize, Serialize};

/// Money totals of one reporting period
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodReport {
    pub date_range: DateRange,
    /// Sales invoices dated in the range
    pub revenue: f64,
    /// Purchase invoices dated in the range
    pub expenses: f64,
    /// Sales invoices in the range still waiting for payment
    pub outstanding: f64,
    pub pending_invoices: usize,
}

impl PeriodReport {
    pub fn empty(date_range: DateRange) -> Self {
        Self {
            date_range,
            revenue: 0.0,
            expenses: 0.0,
            outstanding: 0.0,
            pending_invoices: 0,
        }
    }

    pub fn net_profit(&self) -> f64 {
        self.revenue - self.expenses
    }
}
