use super::{ColumnTypes, Dialect};
use crate::ir::{FieldKind, FieldType};

/// SQLite column types, collapsed onto its storage classes.
pub struct SqliteDialect;

impl ColumnTypes for SqliteDialect {
    fn dialect(&self) -> Dialect {
        Dialect::Sqlite
    }

    fn column_type(&self, ty: &FieldType) -> String {
        let affinity = match ty.kind {
            FieldKind::Int | FieldKind::BigInt | FieldKind::Boolean => "INTEGER",
            FieldKind::Float => "REAL",
            FieldKind::Decimal => "NUMERIC",
            FieldKind::Binary => "BLOB",
            FieldKind::String
            | FieldKind::Text
            | FieldKind::Char
            | FieldKind::DateTime
            | FieldKind::Date
            | FieldKind::Time
            | FieldKind::Timestamp
            | FieldKind::Json
            | FieldKind::Uuid
            | FieldKind::Cuid
            | FieldKind::Point
            | FieldKind::Custom => "TEXT",
        };
        affinity.to_string()
    }
}
