//! Integration tests for schema inference.

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use csvix_ingest::infer_field_mapping;
use csvix_model::{FieldType, IndexSettings};

fn frame(columns: Vec<Column>) -> DataFrame {
    DataFrame::new(columns).unwrap()
}

#[test]
fn integer_column_infers_long() {
    let df = frame(vec![
        Series::new("id".into(), vec![1i64, 2, 3]).into_column(),
    ]);
    let schema = infer_field_mapping(&df, None, IndexSettings::default());
    assert_eq!(schema.field("id"), Some(&FieldType::Long));
}

#[test]
fn float_column_infers_double() {
    let df = frame(vec![
        Series::new("score".into(), vec![1.5f64, 2.25, 3.0]).into_column(),
    ]);
    let schema = infer_field_mapping(&df, None, IndexSettings::default());
    assert_eq!(schema.field("score"), Some(&FieldType::Double));
}

#[test]
fn boolean_column_infers_boolean() {
    let df = frame(vec![
        Series::new("active".into(), vec![true, false]).into_column(),
    ]);
    let schema = infer_field_mapping(&df, None, IndexSettings::default());
    assert_eq!(schema.field("active"), Some(&FieldType::Boolean));
}

#[test]
fn string_column_infers_text_with_keyword_subfield() {
    let df = frame(vec![
        Series::new(
            "name".into(),
            vec!["a".to_string(), "b".to_string()],
        )
        .into_column(),
    ]);
    let schema = infer_field_mapping(&df, None, IndexSettings::default());
    assert_eq!(
        schema.field("name"),
        Some(&FieldType::Text { ignore_above: 256 })
    );
}

#[test]
fn mixed_column_falls_through_to_text() {
    // Mixed numeric/string data arrives as a string column; the fallback
    // branch is policy, not an accident.
    let df = frame(vec![
        Series::new(
            "mixed".into(),
            vec!["1".to_string(), "x".to_string()],
        )
        .into_column(),
    ]);
    let schema = infer_field_mapping(&df, None, IndexSettings::default());
    assert_eq!(
        schema.field("mixed"),
        Some(&FieldType::Text { ignore_above: 256 })
    );
}

#[test]
fn time_field_overrides_underlying_type() {
    let df = frame(vec![
        Series::new(
            "ts".into(),
            vec!["2024-01-01".to_string(), "2024-01-02".to_string()],
        )
        .into_column(),
        Series::new("id".into(), vec![1i64, 2]).into_column(),
    ]);
    let schema = infer_field_mapping(&df, Some("ts"), IndexSettings::default());
    assert_eq!(schema.field("ts"), Some(&FieldType::Date));
    assert_eq!(schema.field("id"), Some(&FieldType::Long));
}

#[test]
fn mapping_has_exactly_one_entry_per_column() {
    let df = frame(vec![
        Series::new("a".into(), vec![1i64]).into_column(),
        Series::new("b".into(), vec![1.0f64]).into_column(),
        Series::new("c".into(), vec!["x".to_string()]).into_column(),
    ]);
    let schema = infer_field_mapping(&df, None, IndexSettings::default());
    assert_eq!(schema.len(), df.width());
    for name in df.get_column_names() {
        assert!(schema.field(name.as_str()).is_some());
    }
}

#[test]
fn inference_is_deterministic() {
    let df = frame(vec![
        Series::new("id".into(), vec![1i64, 2]).into_column(),
        Series::new("name".into(), vec!["a".to_string(), "b".to_string()]).into_column(),
    ]);
    let first = infer_field_mapping(&df, Some("name"), IndexSettings::default());
    let second = infer_field_mapping(&df, Some("name"), IndexSettings::default());
    assert_eq!(first, second);
}
