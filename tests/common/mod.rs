//! Common test utilities
//!
//! Shared helpers and fixtures used across the integration test files.
//!
//! # Diagnostic Helpers
//! - [`format_diagnostics`] - Format diagnostics for display in assertions
//! - [`assert_no_validation_errors`] - Assert that validation produced no errors
//! - [`assert_has_error_containing`] - Assert that an error message contains specific text
//! - [`assert_has_warning_containing`] - Same, for warnings
//!
//! # Pipeline Helpers
//! - [`with_header`] - Prefix a model body with a valid database header
//! - [`compile_source`] - Compile source, panicking on syntax errors
//! - [`compile_cleanly`] - Compile source and return the IR, panicking on any error
//! - [`lower_cleanly`] - Parse and lower source without validating

#![allow(dead_code)]

use storm_schema::{Diag, Schema, ValidationOutcome, compile, lower, parse};

/// Blog schema with a mutual `hasMany`/`belongsTo` pair.
pub const BLOG_SCHEMA: &str = r#"database driver = "postgres"
database url = "postgres://localhost/db"
model User {
  id Int @id @auto
  name String @length(100)
  posts Post[] @hasMany
}
model Post {
  id Int @id @auto
  author User @belongsTo
}
"#;

pub const HEADER: &str = "database driver = \"mysql\"\ndatabase url = \"mysql://localhost/app\"\n";

/// Prefixes `body` with a valid MySQL header.
pub fn with_header(body: &str) -> String {
    format!("{HEADER}{body}")
}

// ============================================================================
// Diagnostic Formatting and Assertion Helpers
// ============================================================================

/// Format diagnostics one per line for assertion messages.
pub fn format_diagnostics(diags: &[Diag]) -> String {
    diags
        .iter()
        .map(|diag| diag.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Assert that a validation outcome contains no errors.
///
/// Warnings are allowed.
pub fn assert_no_validation_errors(outcome: &ValidationOutcome) {
    let errors: Vec<_> = outcome.errors().collect();
    assert!(
        errors.is_empty(),
        "validation should not have errors, but found {}:\n{}",
        errors.len(),
        format_diagnostics(&outcome.diagnostics)
    );
}

/// Assert that some error's rendered text contains `text`.
pub fn assert_has_error_containing(outcome: &ValidationOutcome, text: &str) {
    assert!(
        outcome.errors().any(|d| d.to_string().contains(text)),
        "expected error containing '{text}', but found:\n{}",
        format_diagnostics(&outcome.diagnostics)
    );
}

/// Assert that some warning's rendered text contains `text`.
pub fn assert_has_warning_containing(outcome: &ValidationOutcome, text: &str) {
    assert!(
        outcome.warnings().any(|d| d.to_string().contains(text)),
        "expected warning containing '{text}', but found:\n{}",
        format_diagnostics(&outcome.diagnostics)
    );
}

/// Messages of every error, in order.
pub fn error_messages(outcome: &ValidationOutcome) -> Vec<String> {
    outcome.errors().map(|d| d.message.clone()).collect()
}

// ============================================================================
// Pipeline Helpers
// ============================================================================

/// Compile source, panicking on a syntax error.
pub fn compile_source(source: &str) -> ValidationOutcome {
    compile(source).unwrap_or_else(|err| panic!("syntax error in test source: {err}\n{source}"))
}

/// Compile source and return the IR, panicking if anything is an error.
pub fn compile_cleanly(source: &str) -> Schema {
    let outcome = compile_source(source);
    assert_no_validation_errors(&outcome);
    outcome
        .ir
        .unwrap_or_else(|| panic!("expected IR for source: {source}"))
}

/// Parse and lower source without validating it.
pub fn lower_cleanly(source: &str) -> Schema {
    let file = parse(source).unwrap_or_else(|err| panic!("syntax error in test source: {err}"));
    lower(file)
}

/// Generates `count` models chained by mutual `hasMany`/`belongsTo` pairs.
pub fn generated_schema(count: usize) -> String {
    let mut source = String::from(HEADER);
    for i in 0..count {
        source.push_str(&format!(
            "model M{i} {{\n  id Int @id @auto\n  name String @length(64) @unique\n"
        ));
        if i + 1 < count {
            source.push_str(&format!("  children M{}[] @hasMany\n", i + 1));
        }
        if i > 0 {
            source.push_str(&format!("  parent M{} @belongsTo\n", i - 1));
        }
        source.push_str("}\n");
    }
    source
}
