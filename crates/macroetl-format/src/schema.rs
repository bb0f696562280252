//! Schema inference over flat records.

use std::collections::BTreeSet;

use arrow::datatypes::{DataType, Field, Schema};
use macroetl_types::Record;
use serde_json::Value;

/// Arrow type chosen for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// Every non-null value is a boolean.
    Boolean,
    /// Every non-null value is an integer that fits in `i64`.
    Int64,
    /// Every non-null value is a number.
    Float64,
    /// Anything else, including all-null columns.
    Utf8,
}

impl ColumnType {
    /// Returns the Arrow data type.
    #[must_use]
    pub const fn data_type(&self) -> DataType {
        match self {
            Self::Boolean => DataType::Boolean,
            Self::Int64 => DataType::Int64,
            Self::Float64 => DataType::Float64,
            Self::Utf8 => DataType::Utf8,
        }
    }

    fn of(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Bool(_) => Some(Self::Boolean),
            Value::Number(n) if n.is_i64() => Some(Self::Int64),
            Value::Number(_) => Some(Self::Float64),
            Value::String(_) | Value::Array(_) | Value::Object(_) => Some(Self::Utf8),
        }
    }

    const fn widen(self, other: Self) -> Self {
        match (self, other) {
            (Self::Boolean, Self::Boolean) => Self::Boolean,
            (Self::Int64, Self::Int64) => Self::Int64,
            (Self::Int64 | Self::Float64, Self::Int64 | Self::Float64) => Self::Float64,
            _ => Self::Utf8,
        }
    }
}

/// A named, typed column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Field name.
    pub name: String,
    /// Inferred type.
    pub kind: ColumnType,
}

/// Infers the columns of a record set, sorted by name.
#[must_use]
pub fn infer_columns(records: &[Record]) -> Vec<Column> {
    let names: BTreeSet<&str> = records
        .iter()
        .flat_map(|record| record.keys().map(String::as_str))
        .collect();

    names
        .into_iter()
        .map(|name| {
            let kind = records
                .iter()
                .filter_map(|record| record.get(name).and_then(ColumnType::of))
                .reduce(ColumnType::widen)
                .unwrap_or(ColumnType::Utf8);
            Column {
                name: name.to_string(),
                kind,
            }
        })
        .collect()
}

/// Builds an Arrow schema from inferred columns. Every field is nullable.
#[must_use]
pub fn to_schema(columns: &[Column]) -> Schema {
    Schema::new(
        columns
            .iter()
            .map(|column| Field::new(&column.name, column.kind.data_type(), true))
            .collect::<Vec<_>>(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(values: Value) -> Vec<Record> {
        values
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_object().unwrap().clone())
            .collect()
    }

    #[test]
    fn test_infer_types() {
        let columns = infer_columns(&records(json!([
            {"flag": true, "count": 1, "rate": 1, "name": "a", "nested": {"x": 1}},
            {"flag": false, "count": 2, "rate": 1.5, "name": "b", "nested": [1]}
        ])));

        let kinds: Vec<_> = columns.iter().map(|c| (c.name.as_str(), c.kind)).collect();
        assert_eq!(
            kinds,
            [
                ("count", ColumnType::Int64),
                ("flag", ColumnType::Boolean),
                ("name", ColumnType::Utf8),
                ("nested", ColumnType::Utf8),
                ("rate", ColumnType::Float64),
            ]
        );
    }

    #[test]
    fn test_mixed_types_fall_back_to_utf8() {
        let columns = infer_columns(&records(json!([{"v": 1}, {"v": "1"}, {"v": true}])));
        assert_eq!(columns[0].kind, ColumnType::Utf8);
    }

    #[test]
    fn test_nulls_ignored() {
        let columns = infer_columns(&records(json!([{"v": null}, {"v": 2.5}, {"w": null}])));
        assert_eq!(columns[0].kind, ColumnType::Float64);
        assert_eq!(columns[1].name, "w");
        assert_eq!(columns[1].kind, ColumnType::Utf8);
    }

    #[test]
    fn test_schema_is_nullable() {
        let schema = to_schema(&infer_columns(&records(json!([{"b": 1, "a": "x"}]))));
        assert_eq!(schema.fields().len(), 2);
        assert_eq!(schema.field(0).name(), "a");
        assert!(schema.fields().iter().all(|f| f.is_nullable()));
    }
}
