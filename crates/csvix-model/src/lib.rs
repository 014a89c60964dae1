pub mod document;
pub mod schema;
pub mod value;

pub use document::Document;
pub use schema::{DEFAULT_KEYWORD_IGNORE_ABOVE, FieldType, IndexSchema, IndexSettings};
pub use value::FieldValue;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_serializes_missing_as_null() {
        let mut doc = Document::new();
        doc.insert("id", FieldValue::Int(1));
        doc.insert("name", FieldValue::Missing);
        let json = serde_json::to_value(&doc).expect("serialize document");
        assert_eq!(json, serde_json::json!({"id": 1, "name": null}));
    }

    #[test]
    fn schema_has_one_entry_per_inserted_column() {
        let mut schema = IndexSchema::new(IndexSettings::default());
        schema.insert("id", FieldType::Long);
        schema.insert("name", FieldType::text());
        assert_eq!(schema.len(), 2);
        assert_eq!(schema.field("id"), Some(&FieldType::Long));
    }
}
