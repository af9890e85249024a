use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Free-form entity properties attached to a spawn step.
pub type PropertyBag = BTreeMap<String, PropertyValue>;

/// Single value in a [`PropertyBag`]. Mirrors the JSON value shapes so bags
/// round-trip without loss.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<PropertyValue>),
    Compound(BTreeMap<String, PropertyValue>),
}

impl PropertyValue {
    /// Numeric view. Floats are truncated; everything else is `None`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            Self::Float(v) if v.is_finite() => Some(*v as i64),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        self.as_i64()
            .map(|v| v.clamp(i32::MIN as i64, i32::MAX as i64) as i32)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        Self::Int(value as i64)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}
