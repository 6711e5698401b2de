//! Lexical analysis for the schema DSL.
//!
//! Scanning is driven by the logos-derived [`TokenKind`]. The lexer keeps going
//! after a bad byte so callers can see every lexical problem at once; the
//! parser only reports the first one because syntax errors are fatal.

pub mod token;

use crate::diag::Diag;
use logos::Logos;
use token::{Token, TokenKind};

/// Result of lexical analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct LexerResult {
    /// The tokens produced, always terminated by [`TokenKind::Eof`].
    pub tokens: Vec<Token>,
    /// Lexical errors in source order.
    pub diagnostics: Vec<Diag>,
}

/// A lexer over schema source text.
pub struct Lexer<'a> {
    source: &'a str,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source }
    }

    /// Tokenizes the whole source.
    pub fn tokenize(self) -> LexerResult {
        let mut tokens = Vec::new();
        let mut diagnostics = Vec::new();

        for (result, span) in TokenKind::lexer(self.source).spanned() {
            match result {
                Ok(kind) => tokens.push(Token::new(kind, span)),
                Err(()) => diagnostics.push(self.classify_error(span)),
            }
        }

        let eof = self.source.len();
        tokens.push(Token::new(TokenKind::Eof, eof..eof));

        tracing::debug!(
            tokens = tokens.len(),
            errors = diagnostics.len(),
            "tokenized schema source"
        );

        LexerResult {
            tokens,
            diagnostics,
        }
    }

    fn classify_error(&self, span: std::ops::Range<usize>) -> Diag {
        let slice = &self.source[span.clone()];
        let (code, message) = if slice.starts_with('"') {
            ("L002", "unterminated string literal".to_string())
        } else if self.source[span.start..].starts_with("/*") {
            ("L003", "unterminated block comment".to_string())
        } else if slice.chars().any(|ch| ch.is_ascii_digit()) {
            ("L004", format!("invalid numeric literal '{slice}'"))
        } else {
            let ch = slice.chars().next().unwrap_or_default();
            ("L001", format!("unexpected character '{}'", ch.escape_default()))
        };

        Diag::error(code, message).with_primary_label(span, "here")
    }
}

/// Tokenizes `source`. Convenience wrapper around [`Lexer::tokenize`].
pub fn tokenize(source: &str) -> LexerResult {
    Lexer::new(source).tokenize()
}
