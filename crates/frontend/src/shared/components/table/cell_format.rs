//! Cell rendering policy
//!
//! A cell is rendered by the first rule of a [`FormatPolicy`] that applies to
//! its column. The default order is: custom renderer, status badge, currency,
//! raw text.

use super::column::{ColumnDef, ColumnKind};
use super::number_format::{format_currency, parse_amount};
use contracts::shared::{Record, StatusCategory};

/// What a table cell shows
#[derive(Debug, Clone, PartialEq)]
pub enum CellContent {
    Text(String),
    Badge {
        label: String,
        category: StatusCategory,
    },
    Money(String),
}

impl CellContent {
    pub fn text(value: impl Into<String>) -> Self {
        CellContent::Text(value.into())
    }

    pub fn badge(label: impl Into<String>) -> Self {
        let label = label.into();
        let category = StatusCategory::from_status(&label);
        CellContent::Badge { label, category }
    }

    /// Plain string form, used for titles and exports
    pub fn as_text(&self) -> &str {
        match self {
            CellContent::Text(s) | CellContent::Money(s) => s,
            CellContent::Badge { label, .. } => label,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatRule {
    Custom,
    StatusBadge,
    Currency,
    Raw,
}

impl FormatRule {
    fn apply(&self, column: &ColumnDef, record: &Record) -> Option<CellContent> {
        let value = record.get(&column.key);
        match self {
            FormatRule::Custom => column
                .renderer
                .as_ref()
                .map(|renderer| renderer.render(value.as_deref(), record)),
            FormatRule::StatusBadge if column.kind == ColumnKind::Status => {
                let label = value.map(|v| v.to_string()).unwrap_or_default();
                Some(CellContent::badge(label))
            }
            FormatRule::Currency if column.kind == ColumnKind::Currency => Some(
                CellContent::Money(format_currency(parse_amount(value.as_deref()))),
            ),
            FormatRule::Raw => Some(CellContent::Text(
                value.map(|v| v.to_string()).unwrap_or_default(),
            )),
            _ => None,
        }
    }
}

/// Ordered fallback chain of format rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatPolicy {
    rules: Vec<FormatRule>,
}

impl Default for FormatPolicy {
    fn default() -> Self {
        Self {
            rules: vec![
                FormatRule::Custom,
                FormatRule::StatusBadge,
                FormatRule::Currency,
                FormatRule::Raw,
            ],
        }
    }
}

impl FormatPolicy {
    /// Custom rule order. `Raw` is appended when missing so every cell renders.
    pub fn new(mut rules: Vec<FormatRule>) -> Self {
        if !rules.contains(&FormatRule::Raw) {
            rules.push(FormatRule::Raw);
        }
        Self { rules }
    }

    pub fn rules(&self) -> &[FormatRule] {
        &self.rules
    }

    pub fn render(&self, column: &ColumnDef, record: &Record) -> CellContent {
        self.rules
            .iter()
            .find_map(|rule| rule.apply(column, record))
            .unwrap_or_else(|| CellContent::Text(String::new()))
    }
}

/// Renders one cell with the default policy
pub fn render_cell(column: &ColumnDef, record: &Record) -> CellContent {
    FormatPolicy::default().render(column, record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::{FieldValue, RecordId};

    fn record() -> Record {
        Record::new(RecordId::new(1).unwrap())
    }

    #[test]
    fn test_custom_renderer_wins() {
        let column = ColumnDef::new("status", "Status").render_with(|value, record| {
            CellContent::text(format!(
                "#{} {}",
                record.id,
                value.map(|v| v.to_string()).unwrap_or_default()
            ))
        });
        let rec = record().field("status", "paid");
        assert_eq!(render_cell(&column, &rec), CellContent::text("#1 paid"));
    }

    #[test]
    fn test_status_column_renders_badge() {
        let column = ColumnDef::new("status", "Status");
        let rec = record().field("status", "Overdue");
        assert_eq!(
            render_cell(&column, &rec),
            CellContent::Badge {
                label: "Overdue".to_string(),
                category: StatusCategory::Danger,
            }
        );
    }

    #[test]
    fn test_missing_status_is_neutral_badge() {
        let column = ColumnDef::new("status", "Status");
        assert_eq!(
            render_cell(&column, &record()),
            CellContent::Badge {
                label: String::new(),
                category: StatusCategory::Neutral,
            }
        );
    }

    #[test]
    fn test_currency_columns() {
        let column = ColumnDef::new("totalAmount", "Total Amount");
        let rec = record().field("totalAmount", "1234.5");
        assert_eq!(render_cell(&column, &rec), CellContent::Money("$1,234.5".to_string()));

        let invalid = record().field("totalAmount", "abc");
        assert_eq!(render_cell(&column, &invalid), CellContent::Money("$0".to_string()));
        assert_eq!(render_cell(&column, &record()), CellContent::Money("$0".to_string()));
    }

    #[test]
    fn test_raw_text_fallback() {
        let column = ColumnDef::new("stock", "Stock");
        let rec = record().field("stock", 45.0);
        assert_eq!(render_cell(&column, &rec), CellContent::text("45"));

        let column = ColumnDef::new("name", "Name");
        assert_eq!(render_cell(&column, &record()), CellContent::text(""));
        let nulled = record().field("name", FieldValue::Null);
        assert_eq!(render_cell(&column, &nulled), CellContent::text(""));
    }

    #[test]
    fn test_plain_override_skips_currency() {
        let column = ColumnDef::new("totalTransactions", "Transactions").plain();
        let rec = record().field("totalTransactions", 1200.0);
        assert_eq!(render_cell(&column, &rec), CellContent::text("1200"));
    }

    #[test]
    fn test_policy_order_is_configurable() {
        let policy = FormatPolicy::new(vec![FormatRule::Currency]);
        assert_eq!(policy.rules(), &[FormatRule::Currency, FormatRule::Raw]);

        // custom renderer is not part of this policy, so the currency rule applies
        let column = ColumnDef::new("amount", "Amount")
            .render_with(|_, _| CellContent::text("custom"));
        let rec = record().field("amount", 10.0);
        assert_eq!(policy.render(&column, &rec), CellContent::Money("$10".to_string()));
    }
}
