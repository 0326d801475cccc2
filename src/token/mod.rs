//! Token definitions for the Jay lexer.
//!
//! This module provides the fundamental token types used throughout the Jay
//! front-end. It defines [`Span`] for source location tracking, [`TokenKind`]
//! for token types, and [`Token`] for representing lexical units with their
//! text and positions.
//!
//! # Overview
//!
//! The lexer produces a stream of [`Token`]s, each containing:
//! - A [`TokenKind`] describing what type of token it is
//! - The exact source slice (`lexeme`) the token was read from
//! - A [`Span`] indicating where in the source code it appears
//!
//! # See Also
//!
//! * [`crate::lexer`] - The lexer that produces these tokens
//! * [`crate::parser`] - The parser that consumes these tokens

mod kind;
mod span;

pub use kind::TokenKind;
pub use span::Span;

/// A token with its kind, source text, and location.
///
/// Tokens are value objects: the parser clones them freely and never holds
/// references into the lexer. The lexeme is the exact byte slice the token
/// was scanned from (`""` for [`TokenKind::Eof`]), so concatenating the
/// lexemes of all non-`Eof` tokens plus skipped whitespace reproduces the
/// source.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of this token.
    pub kind: TokenKind,
    /// The exact source text of this token.
    pub lexeme: String,
    /// The source location of this token.
    pub span: Span,
}

impl Token {
    /// Creates a new `Token` with the given kind, lexeme, and span.
    ///
    /// This is a simple constructor that performs no validation.
    /// The caller is responsible for ensuring the lexeme and span
    /// correspond to the token's position in the source.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }
}
