use std::collections::BTreeMap;

use crate::FieldValue;

/// One index document: a mapping from column name to a scalar value.
///
/// Documents are built one per source row and must be sanitized before
/// transmission so that every value is JSON-representable.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct Document {
    pub fields: BTreeMap<String, FieldValue>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) {
        self.fields.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Applies [`FieldValue::sanitize`] to every field.
    #[must_use]
    pub fn sanitize(self) -> Document {
        Document {
            fields: self
                .fields
                .into_iter()
                .map(|(name, value)| (name, value.sanitize()))
                .collect(),
        }
    }
}

impl FromIterator<(String, FieldValue)> for Document {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Document {
            fields: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_applies_per_field() {
        let mut doc = Document::new();
        doc.insert("ok", FieldValue::Float(1.5));
        doc.insert("bad", FieldValue::Float(f64::NAN));
        doc.insert("name", FieldValue::Text("a".to_string()));

        let sanitized = doc.sanitize();
        assert_eq!(sanitized.get("ok"), Some(&FieldValue::Float(1.5)));
        assert_eq!(sanitized.get("bad"), Some(&FieldValue::Missing));
        assert_eq!(
            sanitized.get("name"),
            Some(&FieldValue::Text("a".to_string()))
        );
    }

    #[test]
    fn serializes_as_flat_json_object() {
        let mut doc = Document::new();
        doc.insert("id", FieldValue::Int(3));
        doc.insert("active", FieldValue::Bool(true));
        doc.insert("score", FieldValue::Float(0.25));
        doc.insert("ts", FieldValue::Missing);

        let json = serde_json::to_value(&doc).expect("serialize document");
        assert_eq!(
            json,
            serde_json::json!({"id": 3, "active": true, "score": 0.25, "ts": null})
        );
    }
}
