//! Index schema types: field type descriptors and the create-index body.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

/// Cap on the exact-match `keyword` sub-field attached to text fields.
///
/// Longer values are still stored in the primary text field; only the
/// keyword view truncates (a search-engine faceting convention).
pub const DEFAULT_KEYWORD_IGNORE_ABOVE: u32 = 256;

/// Engine-side type descriptor for a single column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    Long,
    Double,
    Boolean,
    Date,
    /// Full-text field with an exact-match `keyword` sub-field.
    Text { ignore_above: u32 },
}

impl FieldType {
    /// Text with the default keyword sub-field cap.
    pub fn text() -> Self {
        FieldType::Text {
            ignore_above: DEFAULT_KEYWORD_IGNORE_ABOVE,
        }
    }

    /// The engine type name, for summaries and logs.
    pub fn name(&self) -> &'static str {
        match self {
            FieldType::Long => "long",
            FieldType::Double => "double",
            FieldType::Boolean => "boolean",
            FieldType::Date => "date",
            FieldType::Text { .. } => "text",
        }
    }
}

impl Serialize for FieldType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let body = match self {
            FieldType::Text { ignore_above } => serde_json::json!({
                "type": "text",
                "fields": {
                    "keyword": {"type": "keyword", "ignore_above": ignore_above}
                }
            }),
            other => serde_json::json!({"type": other.name()}),
        };
        body.serialize(serializer)
    }
}

/// Top-level index configuration carried alongside the field mapping.
///
/// Defaults to a single shard with no replication, tuned for local
/// single-node operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexSettings {
    pub shards: u32,
    pub replicas: u32,
}

impl Default for IndexSettings {
    fn default() -> Self {
        Self {
            shards: 1,
            replicas: 0,
        }
    }
}

impl IndexSettings {
    #[must_use]
    pub fn with_shards(mut self, shards: u32) -> Self {
        self.shards = shards;
        self
    }

    #[must_use]
    pub fn with_replicas(mut self, replicas: u32) -> Self {
        self.replicas = replicas;
        self
    }
}

/// A complete index schema: settings plus one field type per column.
///
/// Properties are keyed by column name; `BTreeMap` iteration keeps the
/// serialized body deterministic across runs.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexSchema {
    pub settings: IndexSettings,
    pub properties: BTreeMap<String, FieldType>,
}

impl IndexSchema {
    pub fn new(settings: IndexSettings) -> Self {
        Self {
            settings,
            properties: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, column: impl Into<String>, field_type: FieldType) {
        self.properties.insert(column.into(), field_type);
    }

    pub fn field(&self, column: &str) -> Option<&FieldType> {
        self.properties.get(column)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldType)> {
        self.properties.iter()
    }
}

impl Serialize for IndexSchema {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serde_json::json!({
            "settings": {
                "index": {
                    "number_of_shards": self.settings.shards,
                    "number_of_replicas": self.settings.replicas,
                }
            },
            "mappings": {"properties": &self.properties}
        })
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_type_serialization() {
        assert_eq!(
            serde_json::to_value(FieldType::Long).expect("serialize"),
            serde_json::json!({"type": "long"})
        );
        assert_eq!(
            serde_json::to_value(FieldType::Date).expect("serialize"),
            serde_json::json!({"type": "date"})
        );
        assert_eq!(
            serde_json::to_value(FieldType::text()).expect("serialize"),
            serde_json::json!({
                "type": "text",
                "fields": {"keyword": {"type": "keyword", "ignore_above": 256}}
            })
        );
    }

    #[test]
    fn schema_serializes_to_create_index_body() {
        let mut schema = IndexSchema::new(IndexSettings::default());
        schema.insert("id", FieldType::Long);
        schema.insert("name", FieldType::text());
        schema.insert("ts", FieldType::Date);

        let json = serde_json::to_value(&schema).expect("serialize schema");
        assert_eq!(
            json,
            serde_json::json!({
                "settings": {
                    "index": {"number_of_shards": 1, "number_of_replicas": 0}
                },
                "mappings": {
                    "properties": {
                        "id": {"type": "long"},
                        "name": {
                            "type": "text",
                            "fields": {"keyword": {"type": "keyword", "ignore_above": 256}}
                        },
                        "ts": {"type": "date"}
                    }
                }
            })
        );
    }

    #[test]
    fn settings_builders_override_defaults() {
        let settings = IndexSettings::default().with_shards(3).with_replicas(1);
        assert_eq!(settings.shards, 3);
        assert_eq!(settings.replicas, 1);
    }
}
