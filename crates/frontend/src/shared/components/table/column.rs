//! Column specification for tabular views
//!
//! A [`ColumnSpec`] is the ordered list of columns a table shows. Keys are
//! unique within one spec. How a cell is rendered is an explicit attribute
//! of the column ([`ColumnKind`]) plus an optional custom [`CellRenderer`].

use super::cell_format::CellContent;
use contracts::shared::{FieldValue, Record};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Pure formatting capability: `(value, record) -> content`.
pub trait CellRenderer: Send + Sync {
    fn render(&self, value: Option<&FieldValue>, record: &Record) -> CellContent;
}

impl<F> CellRenderer for F
where
    F: Fn(Option<&FieldValue>, &Record) -> CellContent + Send + Sync,
{
    fn render(&self, value: Option<&FieldValue>, record: &Record) -> CellContent {
        self(value, record)
    }
}

/// Built-in rendering of a column when no custom renderer is set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Plain,
    Status,
    Currency,
}

impl ColumnKind {
    /// Legacy naming convention: `status` is a status column, any key
    /// containing `amount` or `total` is money.
    pub fn infer(key: &str) -> Self {
        if key == "status" {
            ColumnKind::Status
        } else if key.contains("amount") || key.contains("total") {
            ColumnKind::Currency
        } else {
            ColumnKind::Plain
        }
    }
}

#[derive(Clone)]
pub struct ColumnDef {
    pub key: String,
    pub label: String,
    pub sortable: bool,
    pub kind: ColumnKind,
    pub renderer: Option<Arc<dyn CellRenderer>>,
}

impl ColumnDef {
    /// Sortable column whose kind is inferred from the key
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            kind: ColumnKind::infer(&key),
            key,
            label: label.into(),
            sortable: true,
            renderer: None,
        }
    }

    pub fn not_sortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    pub fn plain(mut self) -> Self {
        self.kind = ColumnKind::Plain;
        self
    }

    pub fn currency(mut self) -> Self {
        self.kind = ColumnKind::Currency;
        self
    }

    pub fn status(mut self) -> Self {
        self.kind = ColumnKind::Status;
        self
    }

    pub fn render_with<F>(mut self, render: F) -> Self
    where
        F: Fn(Option<&FieldValue>, &Record) -> CellContent + Send + Sync + 'static,
    {
        self.renderer = Some(Arc::new(render));
        self
    }

    /// Numeric columns are right-aligned
    pub fn is_numeric(&self) -> bool {
        self.kind == ColumnKind::Currency
    }
}

impl fmt::Debug for ColumnDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("sortable", &self.sortable)
            .field("kind", &self.kind)
            .field("custom_renderer", &self.renderer.is_some())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColumnSpecError {
    #[error("duplicate column key `{0}`")]
    DuplicateKey(String),
}

/// Ordered columns with unique keys
#[derive(Debug, Clone, Default)]
pub struct ColumnSpec {
    columns: Vec<ColumnDef>,
}

impl ColumnSpec {
    /// Rejects any repeated key
    pub fn new(columns: Vec<ColumnDef>) -> Result<Self, ColumnSpecError> {
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.key.as_str()) {
                return Err(ColumnSpecError::DuplicateKey(column.key.clone()));
            }
        }
        Ok(Self { columns })
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColumnDef> {
        self.columns.iter()
    }

    pub fn get(&self, key: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.key == key)
    }

    pub fn is_sortable(&self, key: &str) -> bool {
        self.get(key).map(|c| c.sortable).unwrap_or(false)
    }

    pub fn keys(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.key.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_inferred_from_key() {
        assert_eq!(ColumnKind::infer("status"), ColumnKind::Status);
        assert_eq!(ColumnKind::infer("amount"), ColumnKind::Currency);
        assert_eq!(ColumnKind::infer("totalAmount"), ColumnKind::Currency);
        assert_eq!(ColumnKind::infer("totalTransactions"), ColumnKind::Currency);
        assert_eq!(ColumnKind::infer("name"), ColumnKind::Plain);
        assert_eq!(ColumnKind::infer("Status"), ColumnKind::Plain);
    }

    #[test]
    fn test_explicit_kind_overrides_inference() {
        let column = ColumnDef::new("totalTransactions", "Transactions").plain();
        assert_eq!(column.kind, ColumnKind::Plain);
        let column = ColumnDef::new("revenue", "Revenue").currency();
        assert!(column.is_numeric());
    }

    #[test]
    fn test_new_rejects_duplicate_keys() {
        let result = ColumnSpec::new(vec![
            ColumnDef::new("name", "Name"),
            ColumnDef::new("email", "Email"),
            ColumnDef::new("name", "Other"),
        ]);
        assert_eq!(
            result.unwrap_err(),
            ColumnSpecError::DuplicateKey("name".to_string())
        );
    }

    #[test]
    fn test_new_keeps_column_order() {
        let spec = ColumnSpec::new(vec![
            ColumnDef::new("name", "Name"),
            ColumnDef::new("email", "Email"),
        ])
        .unwrap();
        assert_eq!(spec.keys(), vec!["name", "email"]);
        assert_eq!(spec.get("name").map(|c| c.label.as_str()), Some("Name"));
    }

    #[test]
    fn test_sortability_lookup() {
        let spec = ColumnSpec::new(vec![
            ColumnDef::new("name", "Name"),
            ColumnDef::new("notes", "Notes").not_sortable(),
        ])
        .unwrap();
        assert!(spec.is_sortable("name"));
        assert!(!spec.is_sortable("notes"));
        assert!(!spec.is_sortable("missing"));
    }
}
