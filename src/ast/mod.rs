//! Abstract syntax tree for schema files.

pub mod schema;
pub mod span;

pub use schema::{DirectiveArg, DirectiveDecl, FieldDecl, ModelDecl, SchemaFile, TypeRef};
pub use span::{Span, Spanned, merge_spans};
