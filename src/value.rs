use std::cmp::Ordering;
use std::fmt;

use ahash::AHashMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// The mutable per-form state: field id to current value. A missing key
/// models an unset field.
pub type FormValues = AHashMap<String, Value>;

/// Runtime value held for a single form field or table cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    Number(f64),
    Bool(bool),
    List(Vec<String>),
    Files(Vec<FileRef>),
    Null,
}

/// A file handed to a `file` field by the host UI. The engine never touches
/// file contents; validation only inspects name and size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRef {
    pub name: String,
    pub size: u64,
    #[serde(default)]
    pub content_type: Option<String>,
}

impl Value {
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    /// Whether this value counts as "nothing entered" for required checks.
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Text(s) => s.is_empty(),
            Value::List(items) => items.is_empty(),
            Value::Files(files) => files.is_empty(),
            Value::Null => true,
            Value::Number(_) | Value::Bool(_) => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Converts a JSON literal (schema default, condition operand, row cell)
    /// into a runtime value. Objects and nested arrays have no field
    /// representation and collapse to `Null`.
    pub fn from_json(json: &serde_json::Value) -> Value {
        match json {
            serde_json::Value::String(s) => Value::Text(s.clone()),
            serde_json::Value::Number(n) => n.as_f64().map_or(Value::Null, Value::Number),
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Array(items) => Value::List(
                items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_string))
                    .collect(),
            ),
            serde_json::Value::Null | serde_json::Value::Object(_) => Value::Null,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Text(s) => serde_json::Value::String(s.clone()),
            Value::Number(n) => serde_json::json!(n),
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::List(items) => serde_json::json!(items),
            Value::Files(files) => {
                serde_json::json!(files.iter().map(|f| f.name.clone()).collect::<Vec<_>>())
            }
            Value::Null => serde_json::Value::Null,
        }
    }

    /// Total ordering used by the client-side sort helper: numeric when both
    /// sides are numbers, lexicographic over the display form otherwise.
    pub fn compare(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            _ => self.to_string().cmp(&other.to_string()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{}", s),
            Value::Number(n) => {
                if n.fract() == 0.0 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            Value::Bool(b) => write!(f, "{}", b),
            Value::List(items) => write!(f, "{}", items.iter().join(", ")),
            Value::Files(files) => write!(f, "{}", files.iter().map(|file| &file.name).join(", ")),
            Value::Null => Ok(()),
        }
    }
}
