//! Static rule tables: identifier syntax, reserved words, directive argument
//! rules and directive/type compatibility.
//!
//! The per-kind tables are exhaustive matches, so a new [`DirectiveKind`]
//! does not compile until it is given an argument rule and a type
//! requirement.

use crate::ir::{DirectiveKind, FieldKind};
use regex::Regex;
use std::sync::LazyLock;

static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$").expect("identifier pattern is a valid regex")
});

/// Words that cannot be used as model or field names.
pub const RESERVED_KEYWORDS: [&str; 4] = ["type", "model", "select", "package"];

/// Returns true if `name` is a letter followed by letters, digits or `_`.
pub fn is_valid_identifier(name: &str) -> bool {
    IDENTIFIER.is_match(name)
}

pub fn is_builtin_reserved(name: &str) -> bool {
    RESERVED_KEYWORDS.contains(&name)
}

/// How many arguments a directive takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    None,
    Exactly(usize),
    AtLeast(usize),
    AtMost(usize),
}

impl Arity {
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::None => count == 0,
            Arity::Exactly(n) => count == n,
            Arity::AtLeast(n) => count >= n,
            Arity::AtMost(n) => count <= n,
        }
    }
}

/// What each argument must parse as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentForm {
    Any,
    Integer,
    /// Integer or float.
    Numeric,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgumentRule {
    pub arity: Arity,
    pub form: ArgumentForm,
}

impl ArgumentRule {
    const fn new(arity: Arity, form: ArgumentForm) -> Self {
        Self { arity, form }
    }
}

pub fn argument_rule(kind: DirectiveKind) -> ArgumentRule {
    use ArgumentForm::{Any, Integer, Numeric};
    match kind {
        DirectiveKind::Length => ArgumentRule::new(Arity::Exactly(1), Integer),
        DirectiveKind::Precision => ArgumentRule::new(Arity::Exactly(2), Integer),
        DirectiveKind::Min | DirectiveKind::Max => ArgumentRule::new(Arity::Exactly(1), Numeric),
        DirectiveKind::Default | DirectiveKind::Map => ArgumentRule::new(Arity::Exactly(1), Any),
        DirectiveKind::Enum => ArgumentRule::new(Arity::AtLeast(1), Any),
        DirectiveKind::Relation => ArgumentRule::new(Arity::AtMost(2), Any),
        DirectiveKind::Id
        | DirectiveKind::Auto
        | DirectiveKind::Unique
        | DirectiveKind::Nullable
        | DirectiveKind::HasMany
        | DirectiveKind::BelongsTo
        | DirectiveKind::HasOne
        | DirectiveKind::Index
        | DirectiveKind::UpdatedAt
        | DirectiveKind::CreatedAt
        | DirectiveKind::DefaultNow => ArgumentRule::new(Arity::None, Any),
    }
}

/// What a field must look like to carry a directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeRequirement {
    Any,
    Kinds(&'static [FieldKind]),
    Array,
    NotArray,
}

const TEXTUAL: &[FieldKind] = &[FieldKind::String, FieldKind::Char, FieldKind::Text];
const FRACTIONAL: &[FieldKind] = &[FieldKind::Decimal, FieldKind::Float];
const NUMERIC: &[FieldKind] = &[
    FieldKind::Int,
    FieldKind::Float,
    FieldKind::Decimal,
    FieldKind::BigInt,
];
const TEMPORAL: &[FieldKind] = &[
    FieldKind::DateTime,
    FieldKind::Date,
    FieldKind::Time,
    FieldKind::Timestamp,
];
const TIMESTAMP_LIKE: &[FieldKind] = &[FieldKind::DateTime, FieldKind::Timestamp];
const IDENTITY: &[FieldKind] = &[FieldKind::Int];

pub fn type_requirement(kind: DirectiveKind) -> TypeRequirement {
    match kind {
        DirectiveKind::Length => TypeRequirement::Kinds(TEXTUAL),
        DirectiveKind::Precision => TypeRequirement::Kinds(FRACTIONAL),
        DirectiveKind::Min | DirectiveKind::Max => TypeRequirement::Kinds(NUMERIC),
        DirectiveKind::HasMany => TypeRequirement::Array,
        DirectiveKind::BelongsTo => TypeRequirement::NotArray,
        DirectiveKind::Id => TypeRequirement::Kinds(IDENTITY),
        DirectiveKind::DefaultNow => TypeRequirement::Kinds(TEMPORAL),
        DirectiveKind::UpdatedAt | DirectiveKind::CreatedAt => {
            TypeRequirement::Kinds(TIMESTAMP_LIKE)
        }
        DirectiveKind::Auto
        | DirectiveKind::Default
        | DirectiveKind::Unique
        | DirectiveKind::Nullable
        | DirectiveKind::HasOne
        | DirectiveKind::Index
        | DirectiveKind::Enum
        | DirectiveKind::Map
        | DirectiveKind::Relation => TypeRequirement::Any,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers() {
        assert!(is_valid_identifier("User"));
        assert!(is_valid_identifier("created_at2"));
        assert!(!is_valid_identifier("_hidden"));
        assert!(!is_valid_identifier("9lives"));
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("has-dash"));
    }

    #[test]
    fn reserved_words_are_exact() {
        assert!(is_builtin_reserved("type"));
        assert!(is_builtin_reserved("package"));
        assert!(!is_builtin_reserved("Type"));
    }

    #[test]
    fn arity() {
        assert!(Arity::None.accepts(0));
        assert!(!Arity::None.accepts(1));
        assert!(Arity::AtLeast(1).accepts(3));
        assert!(!Arity::AtLeast(1).accepts(0));
        assert!(Arity::AtMost(2).accepts(0));
        assert!(!Arity::AtMost(2).accepts(3));
        assert!(Arity::Exactly(2).accepts(2));
    }

    #[test]
    fn argument_table() {
        let precision = argument_rule(DirectiveKind::Precision);
        assert_eq!(precision.arity, Arity::Exactly(2));
        assert_eq!(precision.form, ArgumentForm::Integer);
        assert_eq!(argument_rule(DirectiveKind::Max).form, ArgumentForm::Numeric);
        assert_eq!(argument_rule(DirectiveKind::DefaultNow).arity, Arity::None);
    }

    #[test]
    fn compatibility_table() {
        assert_eq!(
            type_requirement(DirectiveKind::Length),
            TypeRequirement::Kinds(TEXTUAL)
        );
        assert_eq!(type_requirement(DirectiveKind::HasMany), TypeRequirement::Array);
        assert_eq!(type_requirement(DirectiveKind::Unique), TypeRequirement::Any);
    }
}
