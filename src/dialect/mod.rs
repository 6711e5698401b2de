//! SQL dialect selection and column type mapping.
//!
//! Each dialect implements [`ColumnTypes`]; [`column_type`] dispatches on
//! [`Dialect`]. Mapping never fails: malformed `@length` or `@precision`
//! arguments fall back to the defaults, since rejecting them is the
//! validator's job.

mod mysql;
mod postgres;
mod sqlite;

use std::fmt;
use std::str::FromStr;

pub use mysql::MySqlDialect;
pub use postgres::PostgresDialect;
pub use sqlite::SqliteDialect;

use crate::ir::{DirectiveKind, FieldType};

/// Length used when a field has no usable `@length`.
pub const DEFAULT_LENGTH: u32 = 255;

/// `(precision, scale)` used when a field has no usable `@precision`.
pub const DEFAULT_PRECISION: (u32, u32) = (10, 2);

/// Target SQL dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    MySql,
    Postgres,
    Sqlite,
}

impl Dialect {
    pub const ALL: [Dialect; 3] = [Dialect::MySql, Dialect::Postgres, Dialect::Sqlite];

    /// Driver names accepted in a schema header.
    pub const SUPPORTED_DRIVERS: [&'static str; 5] =
        ["mysql", "postgres", "postgresql", "sqlite", "sqlite3"];

    /// Resolves a header driver name, ignoring surrounding quotes and case.
    pub fn from_driver(driver: &str) -> Option<Dialect> {
        let driver = driver.trim().trim_matches(['"', '\'']).to_ascii_lowercase();
        match driver.as_str() {
            "mysql" => Some(Dialect::MySql),
            "postgres" | "postgresql" => Some(Dialect::Postgres),
            "sqlite" | "sqlite3" => Some(Dialect::Sqlite),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Dialect::MySql => "mysql",
            Dialect::Postgres => "postgres",
            Dialect::Sqlite => "sqlite",
        }
    }

    fn column_types(self) -> &'static dyn ColumnTypes {
        match self {
            Dialect::MySql => &MySqlDialect,
            Dialect::Postgres => &PostgresDialect,
            Dialect::Sqlite => &SqliteDialect,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no supported dialect.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported database driver: {0}")]
pub struct UnknownDialect(pub String);

impl FromStr for Dialect {
    type Err = UnknownDialect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dialect::from_driver(s).ok_or_else(|| UnknownDialect(s.to_string()))
    }
}

/// Per-dialect column type rendering.
pub trait ColumnTypes {
    fn dialect(&self) -> Dialect;

    /// Column type for a resolved field type.
    fn column_type(&self, ty: &FieldType) -> String;
}

/// Maps a field type to its column type in `dialect`.
pub fn column_type(ty: &FieldType, dialect: Dialect) -> String {
    dialect.column_types().column_type(ty)
}

/// `@length` as a positive integer, else [`DEFAULT_LENGTH`].
pub(crate) fn length_of(ty: &FieldType) -> u32 {
    ty.directive(DirectiveKind::Length)
        .and_then(|directive| directive.args.first())
        .and_then(|arg| arg.parse::<u32>().ok())
        .filter(|length| *length > 0)
        .unwrap_or(DEFAULT_LENGTH)
}

/// `@precision` as `(p, s)` when `p > 0` and `s <= p`.
pub(crate) fn precision_of(ty: &FieldType) -> Option<(u32, u32)> {
    let directive = ty.directive(DirectiveKind::Precision)?;
    let [precision, scale] = directive.args.as_slice() else {
        return None;
    };
    let precision = precision.parse::<u32>().ok()?;
    let scale = scale.parse::<u32>().ok()?;
    (precision > 0 && scale <= precision).then_some((precision, scale))
}
