use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::hash_map::DefaultHasher;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Row identity assigned by the record source. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct RecordId(u32);

impl RecordId {
    pub const FIRST: RecordId = RecordId(1);

    pub fn new(value: u32) -> Option<Self> {
        (value > 0).then_some(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Next id after `self`, used when appending to a table.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl TryFrom<u32> for RecordId {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| "Id must be a positive integer".to_string())
    }
}

impl From<RecordId> for u32 {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Scalar value of a single record field.
///
/// Date-like values arrive as ISO strings and stay `Text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
    Bool(bool),
    Null,
}

impl FieldValue {
    /// Numeric reading of the value: numbers as-is, text parsed after trimming.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(s) => s.trim().parse::<f64>().ok(),
            FieldValue::Bool(_) | FieldValue::Null => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Null => Ok(()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

/// One row: a unique `Id` plus a schema-free set of named scalar fields.
///
/// Records are snapshots. Nothing in the view layer mutates one in place;
/// [`Record::with_field`] returns a new record instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Id")]
    pub id: RecordId,
    #[serde(flatten)]
    pub fields: BTreeMap<String, FieldValue>,
}

impl Record {
    pub const ID_FIELD: &'static str = "Id";

    pub fn new(id: RecordId) -> Self {
        Self {
            id,
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style field setter for constructing records.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Field lookup. `"Id"` resolves to the row identity as a number.
    pub fn get(&self, key: &str) -> Option<Cow<'_, FieldValue>> {
        if key == Self::ID_FIELD {
            return Some(Cow::Owned(FieldValue::Number(f64::from(self.id.get()))));
        }
        self.fields.get(key).map(Cow::Borrowed)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(FieldValue::as_str)
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(|v| v.as_f64())
    }

    /// Copy of this record with `key` set to `value`.
    pub fn with_field(&self, key: impl Into<String>, value: impl Into<FieldValue>) -> Record {
        self.clone().field(key, value)
    }

    /// Hash over the id and every field. Changes whenever a field changes,
    /// so two snapshots of one row can be told apart.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.id.hash(&mut hasher);
        for (key, value) in &self.fields {
            key.hash(&mut hasher);
            match value {
                FieldValue::Number(n) => (0u8, n.to_bits()).hash(&mut hasher),
                FieldValue::Text(s) => (1u8, s).hash(&mut hasher),
                FieldValue::Bool(b) => (2u8, b).hash(&mut hasher),
                FieldValue::Null => 3u8.hash(&mut hasher),
            }
        }
        hasher.finish()
    }

    /// Copy of this record with every entry of `updates` applied on top.
    pub fn merged(&self, updates: &BTreeMap<String, FieldValue>) -> Record {
        let mut next = self.clone();
        for (key, value) in updates {
            if key != Self::ID_FIELD {
                next.fields.insert(key.clone(), value.clone());
            }
        }
        next
    }
}
