//! The fatal syntax error returned by [`crate::parse`].

use super::base::ParseError;
use crate::ast::Span;
use crate::diag::{Diag, SourceFile, convert_diag_to_report, line_col};
use miette::Report;
use thiserror::Error;

/// A lexical or grammatical error that stops the pipeline.
///
/// There is at most one per run: the parser does not recover.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{line}:{column}: {message}")]
pub struct SyntaxError {
    /// Stable code: `L…` for lexical errors, `P…` for grammar errors.
    pub code: &'static str,
    pub message: String,
    pub span: Span,
    /// 1-based line of `span.start`.
    pub line: usize,
    /// 1-based column of `span.start`.
    pub column: usize,
    /// Tokens or constructs the parser would have accepted. Empty for lexical
    /// errors.
    pub expected: Vec<String>,
}

impl SyntaxError {
    pub(crate) fn from_parse_error(error: ParseError, source: &str) -> Self {
        let (line, column) = line_col(source, error.span.start);
        Self {
            code: error.code,
            message: error.message,
            span: error.span,
            line,
            column,
            expected: error.expected,
        }
    }

    pub(crate) fn from_lexer_diag(diag: Diag, source: &str) -> Self {
        let span = diag.primary_span().cloned().unwrap_or(0..0);
        let (line, column) = line_col(source, span.start);
        Self {
            code: diag.code,
            message: diag.message,
            span,
            line,
            column,
            expected: Vec::new(),
        }
    }

    /// Converts this error into a [`Diag`] for uniform reporting.
    pub fn to_diag(&self) -> Diag {
        let label = if self.expected.is_empty() {
            "here".to_string()
        } else {
            format!("expected {}", self.expected.join(" or "))
        };
        Diag::error(self.code, self.message.clone()).with_primary_label(self.span.clone(), label)
    }

    /// Renders this error as a miette report against `source`.
    pub fn to_report(&self, source: &SourceFile) -> Report {
        convert_diag_to_report(&self.to_diag(), source)
    }
}
