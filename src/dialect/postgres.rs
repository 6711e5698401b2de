use super::{ColumnTypes, DEFAULT_PRECISION, Dialect, length_of, precision_of};
use crate::ir::{FieldKind, FieldType};

/// PostgreSQL column types.
pub struct PostgresDialect;

impl ColumnTypes for PostgresDialect {
    fn dialect(&self) -> Dialect {
        Dialect::Postgres
    }

    fn column_type(&self, ty: &FieldType) -> String {
        match ty.kind {
            FieldKind::Int => "INTEGER".into(),
            FieldKind::Float => "DOUBLE PRECISION".into(),
            FieldKind::Decimal => {
                let (precision, scale) = precision_of(ty).unwrap_or(DEFAULT_PRECISION);
                format!("NUMERIC({precision},{scale})")
            }
            FieldKind::BigInt => "BIGINT".into(),
            FieldKind::String => format!("VARCHAR({})", length_of(ty)),
            FieldKind::Text => "TEXT".into(),
            FieldKind::Char => format!("CHAR({})", length_of(ty)),
            FieldKind::Boolean => "BOOLEAN".into(),
            FieldKind::DateTime | FieldKind::Timestamp => "TIMESTAMP".into(),
            FieldKind::Date => "DATE".into(),
            FieldKind::Time => "TIME".into(),
            FieldKind::Binary => "BYTEA".into(),
            FieldKind::Json => "JSONB".into(),
            FieldKind::Uuid => "UUID".into(),
            FieldKind::Cuid => "VARCHAR(25)".into(),
            FieldKind::Point => "POINT".into(),
            FieldKind::Custom => "VARCHAR(255)".into(),
        }
    }
}
