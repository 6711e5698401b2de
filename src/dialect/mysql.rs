use super::{ColumnTypes, DEFAULT_PRECISION, Dialect, length_of, precision_of};
use crate::ir::{FieldKind, FieldType};

/// MySQL column types.
pub struct MySqlDialect;

impl ColumnTypes for MySqlDialect {
    fn dialect(&self) -> Dialect {
        Dialect::MySql
    }

    fn column_type(&self, ty: &FieldType) -> String {
        match ty.kind {
            FieldKind::Int => "INT".into(),
            FieldKind::Float => "DOUBLE".into(),
            FieldKind::Decimal => match precision_of(ty) {
                Some((precision, scale)) => format!("NUMERIC({precision},{scale})"),
                None => {
                    let (precision, scale) = DEFAULT_PRECISION;
                    format!("DECIMAL({precision},{scale})")
                }
            },
            FieldKind::BigInt => "BIGINT".into(),
            FieldKind::String => format!("VARCHAR({})", length_of(ty)),
            FieldKind::Text => "TEXT".into(),
            FieldKind::Char => format!("CHAR({})", length_of(ty)),
            FieldKind::Boolean => "TINYINT(1)".into(),
            FieldKind::DateTime => "DATETIME".into(),
            FieldKind::Date => "DATE".into(),
            FieldKind::Time => "TIME".into(),
            FieldKind::Timestamp => "TIMESTAMP".into(),
            FieldKind::Binary => format!("BINARY({})", length_of(ty)),
            FieldKind::Json => "JSON".into(),
            FieldKind::Uuid => "CHAR(36)".into(),
            FieldKind::Cuid => "CHAR(25)".into(),
            FieldKind::Point => "POINT".into(),
            FieldKind::Custom => "VARCHAR(255)".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{Directive, DirectiveKind};

    #[test]
    fn sized_types_use_length() {
        let ty = FieldType::new(FieldKind::Binary)
            .with_directive(Directive::new(DirectiveKind::Length, ["16"]));
        assert_eq!(MySqlDialect.column_type(&ty), "BINARY(16)");
        assert_eq!(
            MySqlDialect.column_type(&FieldType::new(FieldKind::Char)),
            "CHAR(255)"
        );
    }

    #[test]
    fn decimal_spelling_depends_on_precision() {
        let plain = FieldType::new(FieldKind::Decimal);
        assert_eq!(MySqlDialect.column_type(&plain), "DECIMAL(10,2)");
        let sized = plain.with_directive(Directive::new(DirectiveKind::Precision, ["8", "3"]));
        assert_eq!(MySqlDialect.column_type(&sized), "NUMERIC(8,3)");
    }
}
