//! Column classification: Polars dtypes to engine field types.

use polars::prelude::{DataFrame, DataType};

use csvix_model::{FieldType, IndexSchema, IndexSettings};

/// Maps a column dtype to an engine field type.
///
/// Precedence among value kinds: integer before float before boolean;
/// everything else (strings, mixed columns inferred as strings, all-null
/// columns) falls through to text with a keyword sub-field. The fallback is
/// deliberate policy, not an error: genuinely mixed columns are indexed as
/// text.
pub fn field_type_for(dtype: &DataType) -> FieldType {
    match dtype {
        DataType::Int8
        | DataType::Int16
        | DataType::Int32
        | DataType::Int64
        | DataType::UInt8
        | DataType::UInt16
        | DataType::UInt32
        | DataType::UInt64 => FieldType::Long,
        DataType::Float32 | DataType::Float64 => FieldType::Double,
        DataType::Boolean => FieldType::Boolean,
        _ => FieldType::text(),
    }
}

/// Derives the index schema for a table.
///
/// Produces exactly one entry per column. A column named as the designated
/// time field is always typed `date`, regardless of its underlying values.
pub fn infer_field_mapping(
    df: &DataFrame,
    time_field: Option<&str>,
    settings: IndexSettings,
) -> IndexSchema {
    let mut schema = IndexSchema::new(settings);
    for column in df.get_columns() {
        let name = column.name().as_str();
        let field_type = if time_field.is_some_and(|time| time == name) {
            FieldType::Date
        } else {
            field_type_for(column.dtype())
        };
        schema.insert(name, field_type);
    }
    schema
}
