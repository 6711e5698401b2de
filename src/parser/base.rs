//! Token stream navigation and parse error construction.

use crate::ast::Span;
use crate::lexer::token::{Token, TokenKind};
use smol_str::SmolStr;

/// An unrecovered parse failure at a single position.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub code: &'static str,
    pub message: String,
    pub span: Span,
    /// What the parser would have accepted at `span`.
    pub expected: Vec<String>,
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Cursor over a token slice that always ends with [`TokenKind::Eof`].
pub struct TokenStream<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> TokenStream<'a> {
    /// Creates a stream. `tokens` must be non-empty and end with EOF; the
    /// parser guarantees this before constructing a stream.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Returns the current token, or the final EOF token past the end.
    pub fn current(&self) -> &'a Token {
        let last = self.tokens.len().saturating_sub(1);
        &self.tokens[self.pos.min(last)]
    }

    /// Advances to the next token. Stays on EOF.
    pub fn advance(&mut self) {
        if self.pos < self.tokens.len().saturating_sub(1) {
            self.pos += 1;
        }
    }

    pub fn check(&self, kind: &TokenKind) -> bool {
        &self.current().kind == kind
    }

    pub fn at_eof(&self) -> bool {
        self.check(&TokenKind::Eof)
    }

    /// Consumes the current token if it matches `kind`.
    pub fn consume(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Expects a punctuation token and returns its span.
    pub fn expect(&mut self, kind: TokenKind, context: &str) -> ParseResult<Span> {
        if self.check(&kind) {
            let span = self.current().span.clone();
            self.advance();
            Ok(span)
        } else {
            Err(self.unexpected(context, vec![kind.to_string()]))
        }
    }

    /// Expects an identifier spelled exactly `word`.
    pub fn expect_word(&mut self, word: &str, context: &str) -> ParseResult<Span> {
        if self.current().kind.is_word(word) {
            let span = self.current().span.clone();
            self.advance();
            Ok(span)
        } else {
            Err(self.unexpected(context, vec![format!("`{word}`")]))
        }
    }

    /// Expects any identifier and returns its text and span.
    pub fn expect_identifier(&mut self, context: &str) -> ParseResult<(SmolStr, Span)> {
        let token = self.current();
        match &token.kind {
            TokenKind::Identifier(name) => {
                self.advance();
                Ok((name.clone(), token.span.clone()))
            }
            _ => Err(self.unexpected(context, vec!["identifier".to_string()])),
        }
    }

    /// Expects a string literal and returns its contents and span.
    pub fn expect_string(&mut self, context: &str) -> ParseResult<(SmolStr, Span)> {
        let token = self.current();
        match &token.kind {
            TokenKind::StringLiteral(value) => {
                self.advance();
                Ok((value.clone(), token.span.clone()))
            }
            _ => Err(self.unexpected(context, vec!["string literal".to_string()])),
        }
    }

    /// Builds an "unexpected token" error at the current position.
    pub fn unexpected(&self, context: &str, expected: Vec<String>) -> ParseError {
        let found = &self.current().kind;
        let code = if *found == TokenKind::Eof { "P002" } else { "P001" };
        ParseError {
            code,
            message: format!("expected {} in {context}, found {found}", expected.join(" or ")),
            span: self.current().span.clone(),
            expected,
        }
    }

    /// Span of the previously consumed token.
    pub fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens[self.pos - 1].span.clone()
        } else {
            self.current().span.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_tokens() -> Vec<Token> {
        vec![
            Token::new(TokenKind::Identifier("model".into()), 0..5),
            Token::new(TokenKind::Identifier("User".into()), 6..10),
            Token::new(TokenKind::LBrace, 11..12),
            Token::new(TokenKind::Eof, 12..12),
        ]
    }

    #[test]
    fn navigation_stops_at_eof() {
        let tokens = make_tokens();
        let mut stream = TokenStream::new(&tokens);
        for _ in 0..10 {
            stream.advance();
        }
        assert!(stream.at_eof());
        assert_eq!(stream.previous_span(), 11..12);
    }

    #[test]
    fn expect_word_and_identifier() {
        let tokens = make_tokens();
        let mut stream = TokenStream::new(&tokens);
        assert_eq!(stream.expect_word("model", "model declaration"), Ok(0..5));
        let (name, span) = stream.expect_identifier("model name").unwrap();
        assert_eq!(name, "User");
        assert_eq!(span, 6..10);
        assert!(stream.check(&TokenKind::LBrace));
        assert!(stream.consume(&TokenKind::LBrace));
    }

    #[test]
    fn expect_failure_keeps_position_and_records_expectation() {
        let tokens = make_tokens();
        let mut stream = TokenStream::new(&tokens);
        let err = stream.expect(TokenKind::At, "directive").unwrap_err();
        assert_eq!(err.code, "P001");
        assert_eq!(err.span, 0..5);
        assert_eq!(err.expected, vec!["'@'".to_string()]);
        assert!(err.message.contains("found identifier `model`"));
        assert!(stream.current().kind.is_word("model"));
    }

    #[test]
    fn error_at_eof_has_its_own_code() {
        let tokens = vec![Token::new(TokenKind::Eof, 0..0)];
        let mut stream = TokenStream::new(&tokens);
        let err = stream.expect_string("database driver").unwrap_err();
        assert_eq!(err.code, "P002");
        assert!(err.message.ends_with("found end of input"));
    }
}
