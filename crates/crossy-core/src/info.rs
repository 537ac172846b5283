//! Auxiliary info mapping returned alongside observations.

use indexmap::IndexMap;

/// Ordered auxiliary info returned by `reset()` and `step()`.
///
/// The environment itself always returns an empty map; wrappers may add
/// entries. Insertion order is preserved.
pub type Info = IndexMap<String, InfoValue>;

/// A value stored in an [`Info`] map.
#[derive(Clone, Debug, PartialEq)]
pub enum InfoValue {
    /// Boolean flag.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// Free-form text.
    Text(String),
}

impl From<bool> for InfoValue {
    fn from(v: bool) -> Self {
        InfoValue::Bool(v)
    }
}

impl From<i64> for InfoValue {
    fn from(v: i64) -> Self {
        InfoValue::Int(v)
    }
}

impl From<f64> for InfoValue {
    fn from(v: f64) -> Self {
        InfoValue::Float(v)
    }
}

impl From<&str> for InfoValue {
    fn from(v: &str) -> Self {
        InfoValue::Text(v.to_string())
    }
}
