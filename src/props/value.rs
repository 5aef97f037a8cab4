//! Property value type.

use serde::{Deserialize, Serialize};

/// A value declared on a component property.
///
/// Values follow loose truthiness: `false`, the empty string, `0` and `NaN`
/// are falsy, everything else is truthy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    /// A boolean flag. `true` contributes a bare modifier.
    Bool(bool),
    /// A string value, appended to the modifier as `-<value>`.
    Str(String),
    /// A numeric value, appended to the modifier as `-<value>`.
    Number(f64),
}

impl PropValue {
    /// Returns whether this value counts as set.
    pub fn is_truthy(&self) -> bool {
        match self {
            PropValue::Bool(b) => *b,
            PropValue::Str(s) => !s.is_empty(),
            PropValue::Number(n) => *n != 0.0 && !n.is_nan(),
        }
    }

    /// Returns whether this value is the literal `true`.
    pub fn is_true(&self) -> bool {
        matches!(self, PropValue::Bool(true))
    }
}

impl std::fmt::Display for PropValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropValue::Bool(b) => write!(f, "{}", b),
            PropValue::Str(s) => f.write_str(s),
            PropValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Str(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Str(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        PropValue::Number(value)
    }
}

impl From<i32> for PropValue {
    fn from(value: i32) -> Self {
        PropValue::Number(value.into())
    }
}

impl From<u32> for PropValue {
    fn from(value: u32) -> Self {
        PropValue::Number(value.into())
    }
}
