//! Schema DSL front-end with rich diagnostics.
//!
//! Turns schema source text into a validated intermediate representation and
//! maps field types onto SQL column types. The pipeline is
//! [`parse`] → [`lower`] → [`validate`], with [`compile`] chaining all three.
//! Syntax errors are fatal and reported alone; semantic diagnostics are
//! collected in full, so one run reports every problem.
//!
//! # Example
//!
//! ```
//! use storm_schema::{Dialect, column_type, compile};
//!
//! let source = r#"
//! database driver = "postgres"
//! database url = "postgres://localhost/blog"
//!
//! model User {
//!   id    Int    @id @auto
//!   email String @unique @length(120)
//!   posts Post[] @hasMany
//! }
//!
//! model Post {
//!   id     Int  @id @auto
//!   author User @belongsTo
//! }
//! "#;
//!
//! let outcome = compile(source).expect("no syntax errors");
//! assert!(outcome.diagnostics.is_empty());
//!
//! let schema = outcome.ir.expect("schema is valid");
//! let email = schema.model("User").and_then(|user| user.field("email")).unwrap();
//! assert_eq!(column_type(&email.ty, Dialect::Postgres), "VARCHAR(120)");
//! ```

pub mod ast;
pub mod diag;
pub mod dialect;
pub mod ir;
pub mod lexer;
pub mod parser;
pub mod semantic;

// Re-export syntax span primitives.
pub use ast::{SchemaFile, Span, Spanned};

pub use diag::{
    Diag, DiagContext, DiagLabel, DiagSeverity, LabelRole, SourceFile, convert_diag_to_report,
    convert_diagnostics_to_reports,
};
pub use dialect::{ColumnTypes, Dialect, UnknownDialect, column_type};
pub use ir::{
    Directive, DirectiveKind, Field, FieldKind, FieldType, Model, Schema, UnknownDirective,
    ValidationOutcome, lower,
};
pub use lexer::token::{Token, TokenKind};
pub use lexer::{Lexer, LexerResult, tokenize};
pub use parser::{SyntaxError, parse};
pub use semantic::{SchemaValidator, ValidationConfig};

/// Validates a lowered schema with the default configuration.
pub fn validate(schema: &Schema) -> Vec<Diag> {
    SchemaValidator::new().validate(schema)
}

/// Parses, lowers and validates `source` with the default configuration.
pub fn compile(source: &str) -> Result<ValidationOutcome, SyntaxError> {
    compile_with(source, &SchemaValidator::new())
}

/// Parses, lowers and validates `source` with a configured validator.
pub fn compile_with(
    source: &str,
    validator: &SchemaValidator,
) -> Result<ValidationOutcome, SyntaxError> {
    let file = parse(source)?;
    let schema = lower(file);
    Ok(validator.validate_into_outcome(schema))
}
