//! Semantic validation of lowered schemas.
//!
//! The validator goes beyond syntax and checks what the grammar cannot:
//! - database header values
//! - model and field naming, emptiness and duplicates
//! - directive arguments and directive/type compatibility
//! - `@id` and `@auto` combinations
//! - relation fields and their reciprocal declarations across models
//!
//! Every pass runs on every call and all diagnostics are returned together;
//! an error in one pass never hides the findings of another.
//!
//! # Example
//!
//! ```
//! use storm_schema::{lower, parse, semantic::SchemaValidator};
//!
//! let source = r#"
//! database driver = "sqlite"
//! database url = "sqlite://app.db"
//! model Tag { id Int @id  label String @length(0) }
//! "#;
//!
//! let schema = lower(parse(source).unwrap());
//! let diagnostics = SchemaValidator::new().validate(&schema);
//! assert_eq!(diagnostics.len(), 1);
//! assert_eq!(diagnostics[0].message, "@length directive argument must be positive");
//! ```

pub mod diag;
pub mod rules;
pub mod validator;

pub use diag::SemanticDiagKind;
pub use validator::{SchemaValidator, ValidationConfig};
