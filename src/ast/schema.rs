//! Syntax nodes for schema files.
//!
//! The tree mirrors the surface grammar one-to-one: a header with the database
//! driver and URL followed by model declarations. Type and directive names are
//! kept as written; resolving them into closed kinds is the job of
//! [`crate::ir::lower`].

use super::span::{Span, Spanned};
use smol_str::SmolStr;
use std::fmt;

/// A parsed schema file.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaFile {
    /// Contents of the `database driver = "..."` string literal.
    pub database_driver: SmolStr,
    /// Contents of the `database url = "..."` string literal.
    pub database_url: SmolStr,
    /// Models in declaration order.
    pub models: Vec<ModelDecl>,
    /// Span of the whole file.
    pub span: Span,
}

/// `model Name { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct ModelDecl {
    pub name: SmolStr,
    pub name_span: Span,
    pub fields: Vec<FieldDecl>,
    pub span: Span,
}

/// `name Type @directive(...)*`
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDecl {
    pub name: SmolStr,
    pub name_span: Span,
    pub ty: TypeRef,
    pub directives: Vec<DirectiveDecl>,
    pub span: Span,
}

/// A type reference such as `String` or `Post[]`.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeRef {
    /// Type name exactly as written.
    pub name: SmolStr,
    /// True when the name is followed by `[]`.
    pub is_array: bool,
    pub span: Span,
}

/// `@name` or `@name(arg, ...)`
#[derive(Debug, Clone, PartialEq)]
pub struct DirectiveDecl {
    /// Directive name exactly as written, without the `@`.
    pub name: SmolStr,
    pub args: Vec<Spanned<DirectiveArg>>,
    pub span: Span,
}

/// A single directive argument literal.
#[derive(Debug, Clone, PartialEq)]
pub enum DirectiveArg {
    /// String literal contents, without quotes.
    String(SmolStr),
    /// Bare identifier.
    Ident(SmolStr),
    Integer(i64),
    Float(f64),
}

impl fmt::Display for DirectiveArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectiveArg::String(value) => write!(f, "\"{value}\""),
            DirectiveArg::Ident(value) => write!(f, "{value}"),
            DirectiveArg::Integer(value) => write!(f, "{value}"),
            DirectiveArg::Float(value) => write!(f, "{value:?}"),
        }
    }
}

impl SchemaFile {
    /// Finds a model declaration by name.
    pub fn model(&self, name: &str) -> Option<&ModelDecl> {
        self.models.iter().find(|model| model.name == name)
    }
}

impl ModelDecl {
    /// Finds a field declaration by name.
    pub fn field(&self, name: &str) -> Option<&FieldDecl> {
        self.fields.iter().find(|field| field.name == name)
    }
}
