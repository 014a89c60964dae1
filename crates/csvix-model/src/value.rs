//! Tagged scalar values for document fields.
//!
//! Every cell is represented as an explicit variant rather than relying on
//! dynamic coercion; absence is a first-class value so that null handling
//! survives every transformation step.

use serde::{Serialize, Serializer};

/// A single scalar field value as carried through ingestion and transport.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Absent value; serializes to JSON `null`.
    Missing,
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl FieldValue {
    /// Normalizes the value to a transport-safe equivalent.
    ///
    /// Non-finite floats (NaN, ±Infinity) are not JSON-representable and
    /// become [`FieldValue::Missing`]; every other value passes through
    /// unchanged.
    #[must_use]
    pub fn sanitize(self) -> FieldValue {
        match self {
            FieldValue::Float(v) if !v.is_finite() => FieldValue::Missing,
            other => other,
        }
    }

    /// Returns true for the absence marker.
    pub fn is_missing(&self) -> bool {
        matches!(self, FieldValue::Missing)
    }
}

impl Serialize for FieldValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            FieldValue::Missing => serializer.serialize_none(),
            FieldValue::Int(v) => serializer.serialize_i64(*v),
            FieldValue::Float(v) => serializer.serialize_f64(*v),
            FieldValue::Bool(v) => serializer.serialize_bool(*v),
            FieldValue::Text(v) => serializer.serialize_str(v),
        }
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
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
