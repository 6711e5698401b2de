//! Recursive-descent parser for schema files.
//!
//! Grammar:
//!
//! ```text
//! file      := "database" "driver" "=" String "database" "url" "=" String model*
//! model     := "model" Ident "{" field* "}"
//! field     := Ident type directive*
//! type      := Ident ( "[" "]" )?
//! directive := "@" Ident ( "(" arg ( "," arg )* ")" )?
//! arg       := String | Ident | Int | Float
//! ```
//!
//! The first error ends the parse.

mod base;
mod error;

pub use base::{ParseError, ParseResult, TokenStream};
pub use error::SyntaxError;

use crate::ast::{
    DirectiveArg, DirectiveDecl, FieldDecl, ModelDecl, SchemaFile, Spanned, TypeRef, merge_spans,
};
use crate::lexer::token::{Token, TokenKind};
use crate::lexer::tokenize;

/// Parses schema source text into an AST.
pub fn parse(source: &str) -> Result<SchemaFile, SyntaxError> {
    let lexed = tokenize(source);
    if let Some(first) = lexed.diagnostics.into_iter().next() {
        return Err(SyntaxError::from_lexer_diag(first, source));
    }
    Parser::new(lexed.tokens, source).parse()
}

/// Schema parser over a token stream.
pub struct Parser<'source> {
    tokens: Vec<Token>,
    source: &'source str,
}

impl<'source> Parser<'source> {
    /// Creates a parser, appending an EOF token if `tokens` lacks one.
    pub fn new(mut tokens: Vec<Token>, source: &'source str) -> Self {
        if !matches!(tokens.last().map(|t| &t.kind), Some(TokenKind::Eof)) {
            let eof_pos = tokens.last().map(|t| t.span.end).unwrap_or(0);
            tokens.push(Token::new(TokenKind::Eof, eof_pos..eof_pos));
        }
        Self { tokens, source }
    }

    pub fn parse(self) -> Result<SchemaFile, SyntaxError> {
        let mut stream = TokenStream::new(&self.tokens);
        match parse_file(&mut stream) {
            Ok(file) => {
                tracing::debug!(models = file.models.len(), "parsed schema file");
                Ok(file)
            }
            Err(error) => {
                let error = SyntaxError::from_parse_error(error, self.source);
                tracing::debug!(line = error.line, column = error.column, "schema parse failed");
                Err(error)
            }
        }
    }
}

fn parse_file(stream: &mut TokenStream<'_>) -> ParseResult<SchemaFile> {
    let start = stream.current().span.clone();

    let database_driver = parse_header_entry(stream, "driver")?;
    let database_url = parse_header_entry(stream, "url")?;

    let mut models = Vec::new();
    while !stream.at_eof() {
        if !stream.current().kind.is_word("model") {
            return Err(stream.unexpected(
                "schema file",
                vec!["`model`".to_string(), "end of input".to_string()],
            ));
        }
        models.push(parse_model(stream)?);
    }

    Ok(SchemaFile {
        database_driver,
        database_url,
        models,
        span: merge_spans(&start, &stream.current().span),
    })
}

/// `database <key> = "<value>"`
fn parse_header_entry(stream: &mut TokenStream<'_>, key: &str) -> ParseResult<smol_str::SmolStr> {
    let context = format!("database {key} declaration");
    stream.expect_word("database", &context)?;
    stream.expect_word(key, &context)?;
    stream.expect(TokenKind::Eq, &context)?;
    let (value, _) = stream.expect_string(&context)?;
    Ok(value)
}

fn parse_model(stream: &mut TokenStream<'_>) -> ParseResult<ModelDecl> {
    let start = stream.expect_word("model", "model declaration")?;
    let (name, name_span) = stream.expect_identifier("model declaration")?;
    stream.expect(TokenKind::LBrace, "model declaration")?;

    let mut fields = Vec::new();
    loop {
        match &stream.current().kind {
            TokenKind::RBrace => break,
            TokenKind::Identifier(_) => fields.push(parse_field(stream)?),
            _ => {
                return Err(stream.unexpected(
                    &format!("body of model `{name}`"),
                    vec!["field name".to_string(), "'}'".to_string()],
                ));
            }
        }
    }
    let end = stream.expect(TokenKind::RBrace, "model declaration")?;

    Ok(ModelDecl {
        name,
        name_span,
        fields,
        span: merge_spans(&start, &end),
    })
}

fn parse_field(stream: &mut TokenStream<'_>) -> ParseResult<FieldDecl> {
    let (name, name_span) = stream.expect_identifier("field declaration")?;
    let ty = parse_type(stream)?;

    let mut directives = Vec::new();
    while stream.check(&TokenKind::At) {
        directives.push(parse_directive(stream)?);
    }

    Ok(FieldDecl {
        name,
        span: merge_spans(&name_span, &stream.previous_span()),
        name_span,
        ty,
        directives,
    })
}

fn parse_type(stream: &mut TokenStream<'_>) -> ParseResult<TypeRef> {
    let (name, start) = stream.expect_identifier("field type")?;
    let mut span = start.clone();
    let is_array = stream.consume(&TokenKind::LBracket);
    if is_array {
        let end = stream.expect(TokenKind::RBracket, "array type")?;
        span = merge_spans(&start, &end);
    }
    Ok(TypeRef {
        name,
        is_array,
        span,
    })
}

fn parse_directive(stream: &mut TokenStream<'_>) -> ParseResult<DirectiveDecl> {
    let start = stream.expect(TokenKind::At, "directive")?;
    let (name, name_span) = stream.expect_identifier("directive")?;
    let mut end = name_span;

    let mut args = Vec::new();
    if stream.consume(&TokenKind::LParen) {
        args.push(parse_argument(stream)?);
        while stream.consume(&TokenKind::Comma) {
            args.push(parse_argument(stream)?);
        }
        end = stream.expect(TokenKind::RParen, &format!("arguments of @{name}"))?;
    }

    Ok(DirectiveDecl {
        name,
        args,
        span: merge_spans(&start, &end),
    })
}

fn parse_argument(stream: &mut TokenStream<'_>) -> ParseResult<Spanned<DirectiveArg>> {
    let token = stream.current();
    let arg = match &token.kind {
        TokenKind::StringLiteral(value) => DirectiveArg::String(value.clone()),
        TokenKind::Identifier(name) => DirectiveArg::Ident(name.clone()),
        TokenKind::IntegerLiteral(value) => DirectiveArg::Integer(*value),
        TokenKind::FloatLiteral(value) => DirectiveArg::Float(*value),
        _ => {
            return Err(stream.unexpected(
                "directive arguments",
                vec![
                    "string".to_string(),
                    "identifier".to_string(),
                    "integer".to_string(),
                    "float".to_string(),
                ],
            ));
        }
    };
    stream.advance();
    Ok(Spanned::new(arg, token.span.clone()))
}
