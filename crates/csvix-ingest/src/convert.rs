//! Polars AnyValue conversions into the tagged field-value model.

use polars::prelude::{AnyValue, DataFrame};

use csvix_model::{Document, FieldValue};

/// Converts a Polars AnyValue to a tagged field value.
///
/// Nulls become the absence marker and non-finite floats are sanitized away
/// at the boundary; integer widths widen to i64. Anything without a scalar
/// counterpart is stringified.
pub fn any_to_field_value(value: AnyValue<'_>) -> FieldValue {
    match value {
        AnyValue::Null => FieldValue::Missing,
        AnyValue::Boolean(v) => FieldValue::Bool(v),
        AnyValue::Int8(v) => FieldValue::Int(i64::from(v)),
        AnyValue::Int16(v) => FieldValue::Int(i64::from(v)),
        AnyValue::Int32(v) => FieldValue::Int(i64::from(v)),
        AnyValue::Int64(v) => FieldValue::Int(v),
        AnyValue::UInt8(v) => FieldValue::Int(i64::from(v)),
        AnyValue::UInt16(v) => FieldValue::Int(i64::from(v)),
        AnyValue::UInt32(v) => FieldValue::Int(i64::from(v)),
        AnyValue::UInt64(v) => match i64::try_from(v) {
            Ok(v) => FieldValue::Int(v),
            Err(_) => FieldValue::Float(v as f64),
        },
        AnyValue::Float32(v) => FieldValue::Float(f64::from(v)).sanitize(),
        AnyValue::Float64(v) => FieldValue::Float(v).sanitize(),
        AnyValue::String(s) => FieldValue::Text(s.to_string()),
        AnyValue::StringOwned(s) => FieldValue::Text(s.to_string()),
        other => FieldValue::Text(other.to_string()),
    }
}

/// Converts a Polars AnyValue to its string representation.
///
/// Returns an empty string for null.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    }
}

/// Builds one document per row of the frame.
///
/// Values are sanitized during conversion, so the returned documents are
/// already transport-safe.
pub fn extract_documents(df: &DataFrame) -> Vec<Document> {
    let columns = df.get_columns();
    let mut documents = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let mut document = Document::new();
        for column in columns {
            let value = column.get(idx).unwrap_or(AnyValue::Null);
            document.insert(column.name().as_str(), any_to_field_value(value));
        }
        documents.push(document);
    }
    documents
}
