/// GridState Field Values
///
/// A `FieldValue` is what a consumer's field accessor hands back to the
/// engine for one cell: a scalar (text, number, bool), a list of text
/// values (e.g. a row's tags), or null. The engine never stores these;
/// they are produced on demand from the caller-owned record snapshot.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Dynamic cell value produced by a field accessor.
///
/// # Examples
///
/// ```
/// use gridstate::FieldValue;
///
/// let tags = FieldValue::from(vec!["rust", "grid"]);
/// assert_eq!(tags.index_terms(), vec!["rust".to_string(), "grid".to_string()]);
///
/// let price = FieldValue::from(42.0);
/// assert_eq!(price.index_terms(), vec!["42".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Null,
    Text(String),
    Number(f64),
    Bool(bool),
    /// Multi-valued field, such as a row's tag list.
    List(Vec<String>),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the string terms this value contributes to a filter index.
    ///
    /// Scalars contribute one term, lists contribute one term per element,
    /// and null contributes nothing.
    pub fn index_terms(&self) -> Vec<String> {
        match self {
            FieldValue::Null => Vec::new(),
            FieldValue::Text(s) => vec![s.clone()],
            FieldValue::Number(n) => vec![n.to_string()],
            FieldValue::Bool(b) => vec![b.to_string()],
            FieldValue::List(items) => items.clone(),
        }
    }

    /// Tests this value against a set of accepted filter terms.
    ///
    /// Scalars match by direct set membership. Lists match if at least one
    /// element is in the set (OR semantics within the row). Null never
    /// matches a non-empty filter.
    pub fn matches_filter(&self, accepted: &HashSet<String>) -> bool {
        match self {
            FieldValue::Null => false,
            FieldValue::Text(s) => accepted.contains(s),
            FieldValue::Number(n) => accepted.contains(&n.to_string()),
            FieldValue::Bool(b) => accepted.contains(&b.to_string()),
            FieldValue::List(items) => items.iter().any(|item| accepted.contains(item)),
        }
    }

    /// Converts a `serde_json::Value` into a `FieldValue`.
    ///
    /// Convenience for consumers whose records are JSON objects straight
    /// from a fetch layer. Arrays become `List` with non-string elements
    /// rendered through their JSON form; objects are flattened to their
    /// compact JSON text.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridstate::FieldValue;
    ///
    /// let json: serde_json::Value = serde_json::json!(["a", "b"]);
    /// assert_eq!(
    ///     FieldValue::from_json(&json),
    ///     FieldValue::List(vec!["a".to_string(), "b".to_string()])
    /// );
    /// ```
    pub fn from_json(value: &serde_json::Value) -> FieldValue {
        match value {
            serde_json::Value::Null => FieldValue::Null,
            serde_json::Value::Bool(b) => FieldValue::Bool(*b),
            serde_json::Value::Number(n) => {
                FieldValue::Number(n.as_f64().unwrap_or(f64::NAN))
            }
            serde_json::Value::String(s) => FieldValue::Text(s.clone()),
            serde_json::Value::Array(items) => FieldValue::List(
                items
                    .iter()
                    .map(|item| match item {
                        serde_json::Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect(),
            ),
            serde_json::Value::Object(_) => FieldValue::Text(value.to_string()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Number(n as f64)
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        FieldValue::Number(n as f64)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        FieldValue::List(items)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(items: Vec<&str>) -> Self {
        FieldValue::List(items.into_iter().map(|s| s.to_string()).collect())
    }
}

impl<T> From<Option<T>> for FieldValue
where
    T: Into<FieldValue>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => FieldValue::Null,
        }
    }
}
