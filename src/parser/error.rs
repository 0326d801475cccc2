//! Parse error types.
//!
//! This module defines [`ParseError`], which represents errors detected
//! while parsing. The parser does not stop at the first error; it records
//! every error it finds and keeps going, so callers receive a list in
//! detection order alongside the (possibly partial) program.

use crate::token::{Span, Token, TokenKind};

/// The kind of parse error.
///
/// This enum allows error handling code to match on error types
/// structurally rather than relying on string matching, which is fragile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The token after the current one was not the expected kind.
    UnexpectedToken,
    /// A token that cannot begin an expression appeared in expression
    /// position.
    NoPrefixParseFn,
    /// An integer lexeme is not representable as a signed 64-bit value.
    IntegerLiteral,
    /// The lexer emitted an `Illegal` token for an unrecognized character.
    IllegalCharacter,
}

/// An error that occurred during parsing.
///
/// Contains a human-readable message and the source location of the token
/// that triggered the error, enabling rich error reporting.
///
/// # Construction
///
/// Use the named constructors; each produces the message format the error
/// list and tests rely on:
///
/// - [`unexpected_token()`](Self::unexpected_token) - `expect_peek` mismatch
/// - [`no_prefix_parse_fn()`](Self::no_prefix_parse_fn) - no handler can
///   begin an expression at the current token
/// - [`integer_literal()`](Self::integer_literal) - out-of-range integer
/// - [`illegal_character()`](Self::illegal_character) - unrecognized byte
#[derive(Debug, Clone)]
pub struct ParseError {
    /// A human-readable description of the error.
    message: String,
    /// The source location of the offending token.
    span: Span,
    /// The kind of error, for structured error handling.
    kind: ParseErrorKind,
}

impl ParseError {
    /// Creates a new error with an explicit kind, message, and location.
    pub fn new(kind: ParseErrorKind, message: impl Into<String>, span: Span) -> Self {
        ParseError {
            message: message.into(),
            span,
            kind,
        }
    }

    /// Creates the error recorded when `expect_peek` finds the wrong kind.
    pub fn unexpected_token(expected: TokenKind, got: &Token) -> Self {
        ParseError::new(
            ParseErrorKind::UnexpectedToken,
            format!(
                "expected next token to be {}, got {} instead, line {}, col {}",
                expected, got.kind, got.span.line, got.span.column
            ),
            got.span,
        )
    }

    /// Creates the error recorded when no prefix handler exists for the
    /// token in expression position.
    pub fn no_prefix_parse_fn(token: &Token) -> Self {
        ParseError::new(
            ParseErrorKind::NoPrefixParseFn,
            format!("no prefix parse function for {} found", token.kind),
            token.span,
        )
    }

    /// Creates the error recorded when an integer lexeme does not fit in
    /// a signed 64-bit value.
    pub fn integer_literal(token: &Token) -> Self {
        ParseError::new(
            ParseErrorKind::IntegerLiteral,
            format!("could not parse {:?} as integer", token.lexeme),
            token.span,
        )
    }

    /// Creates the error recorded when an `Illegal` token reaches
    /// expression position.
    pub fn illegal_character(token: &Token) -> Self {
        ParseError::new(
            ParseErrorKind::IllegalCharacter,
            format!("unexpected character '{}'", token.lexeme),
            token.span,
        )
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the source location of the offending token.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Returns the kind of error.
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ParseError {}
