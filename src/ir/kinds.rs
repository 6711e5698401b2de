//! Closed enumerations for field kinds and directive kinds.

use std::fmt;

/// Resolved kind of a field's declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Int,
    Float,
    Decimal,
    BigInt,
    String,
    Text,
    Char,
    Boolean,
    DateTime,
    Date,
    Time,
    Timestamp,
    Binary,
    Json,
    Uuid,
    Cuid,
    Point,
    /// Any type token not in the built-in table. The field type keeps the
    /// original token as its model name, which is how relations are written.
    Custom,
}

impl FieldKind {
    pub const ALL: [FieldKind; 18] = [
        FieldKind::Int,
        FieldKind::Float,
        FieldKind::Decimal,
        FieldKind::BigInt,
        FieldKind::String,
        FieldKind::Text,
        FieldKind::Char,
        FieldKind::Boolean,
        FieldKind::DateTime,
        FieldKind::Date,
        FieldKind::Time,
        FieldKind::Timestamp,
        FieldKind::Binary,
        FieldKind::Json,
        FieldKind::Uuid,
        FieldKind::Cuid,
        FieldKind::Point,
        FieldKind::Custom,
    ];

    /// Resolves a type token, ignoring case and surrounding whitespace.
    ///
    /// Returns `None` for tokens outside the built-in table; those lower to
    /// [`FieldKind::Custom`].
    pub fn from_type_name(name: &str) -> Option<FieldKind> {
        let kind = match name.trim().to_ascii_lowercase().as_str() {
            "int" | "integer" => FieldKind::Int,
            "bigint" => FieldKind::BigInt,
            "float" | "double" | "real" => FieldKind::Float,
            "decimal" | "numeric" => FieldKind::Decimal,
            "string" | "varchar" => FieldKind::String,
            "text" => FieldKind::Text,
            "char" => FieldKind::Char,
            "bool" | "boolean" => FieldKind::Boolean,
            "datetime" => FieldKind::DateTime,
            "date" => FieldKind::Date,
            "time" => FieldKind::Time,
            "timestamp" => FieldKind::Timestamp,
            "binary" | "blob" => FieldKind::Binary,
            "json" => FieldKind::Json,
            "uuid" => FieldKind::Uuid,
            "cuid" => FieldKind::Cuid,
            "point" => FieldKind::Point,
            _ => return None,
        };
        Some(kind)
    }

    pub fn name(self) -> &'static str {
        match self {
            FieldKind::Int => "Int",
            FieldKind::Float => "Float",
            FieldKind::Decimal => "Decimal",
            FieldKind::BigInt => "BigInt",
            FieldKind::String => "String",
            FieldKind::Text => "Text",
            FieldKind::Char => "Char",
            FieldKind::Boolean => "Boolean",
            FieldKind::DateTime => "DateTime",
            FieldKind::Date => "Date",
            FieldKind::Time => "Time",
            FieldKind::Timestamp => "Timestamp",
            FieldKind::Binary => "Binary",
            FieldKind::Json => "JSON",
            FieldKind::Uuid => "UUID",
            FieldKind::Cuid => "CUID",
            FieldKind::Point => "Point",
            FieldKind::Custom => "Custom",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The 19 recognized field directives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    Id,
    Auto,
    Default,
    Unique,
    Nullable,
    HasMany,
    BelongsTo,
    HasOne,
    Index,
    Enum,
    UpdatedAt,
    CreatedAt,
    Length,
    Min,
    Max,
    Precision,
    DefaultNow,
    Map,
    Relation,
}

impl DirectiveKind {
    pub const ALL: [DirectiveKind; 19] = [
        DirectiveKind::Id,
        DirectiveKind::Auto,
        DirectiveKind::Default,
        DirectiveKind::Unique,
        DirectiveKind::Nullable,
        DirectiveKind::HasMany,
        DirectiveKind::BelongsTo,
        DirectiveKind::HasOne,
        DirectiveKind::Index,
        DirectiveKind::Enum,
        DirectiveKind::UpdatedAt,
        DirectiveKind::CreatedAt,
        DirectiveKind::Length,
        DirectiveKind::Min,
        DirectiveKind::Max,
        DirectiveKind::Precision,
        DirectiveKind::DefaultNow,
        DirectiveKind::Map,
        DirectiveKind::Relation,
    ];

    /// Canonical spelling, as written after `@` in schemas.
    pub fn name(self) -> &'static str {
        match self {
            DirectiveKind::Id => "id",
            DirectiveKind::Auto => "auto",
            DirectiveKind::Default => "default",
            DirectiveKind::Unique => "unique",
            DirectiveKind::Nullable => "nullable",
            DirectiveKind::HasMany => "hasMany",
            DirectiveKind::BelongsTo => "belongsTo",
            DirectiveKind::HasOne => "hasOne",
            DirectiveKind::Index => "index",
            DirectiveKind::Enum => "enum",
            DirectiveKind::UpdatedAt => "updatedAt",
            DirectiveKind::CreatedAt => "createdAt",
            DirectiveKind::Length => "length",
            DirectiveKind::Min => "min",
            DirectiveKind::Max => "max",
            DirectiveKind::Precision => "precision",
            DirectiveKind::DefaultNow => "defaultNow",
            DirectiveKind::Map => "map",
            DirectiveKind::Relation => "relation",
        }
    }

    /// Resolves a directive name, ignoring case and surrounding whitespace.
    pub fn from_name(name: &str) -> Option<DirectiveKind> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
