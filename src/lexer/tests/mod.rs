//! Unit tests for the lexer.
//!
//! Tests are organized by concern:
//! - [`basic_tokens`]: Single-character operators and punctuation
//! - [`operators`]: Two-character operators and their one-char fallbacks
//! - [`identifiers`]: Identifier recognition
//! - [`keywords`]: Keyword table lookups
//! - [`integers`]: Integer literal scanning
//! - [`illegal`]: Illegal-byte handling
//! - [`compound`]: Whole-program token streams
//! - [`spans`]: Position tracking and source coverage
//! - [`whitespace`]: Whitespace skipping

use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};


/// Helper to tokenize input and return the full token vector.
pub(super) fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).tokenize()
}

/// Helper to tokenize input and return only the kinds.
pub(super) fn tokenize_kinds(input: &str) -> Vec<TokenKind> {
    tokenize(input).into_iter().map(|t| t.kind).collect()
}

/// Helper to tokenize input and return `(kind, lexeme)` pairs, excluding
/// the trailing `Eof`.
pub(super) fn tokenize_pairs(input: &str) -> Vec<(TokenKind, String)> {
    tokenize(input)
        .into_iter()
        .filter(|t| t.kind != TokenKind::Eof)
        .map(|t| (t.kind, t.lexeme))
        .collect()
}
