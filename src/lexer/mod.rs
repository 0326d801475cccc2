//! Lexical analyzer for the Jay language.
//!
//! This module provides the [`Lexer`] struct which converts source code text
//! into a stream of [`Token`]s for parsing.
//!
//! # Overview
//!
//! The lexer performs the following tasks:
//! - Scans the input character by character
//! - Recognizes identifiers, keywords, integer literals, operators, and punctuation
//! - Tracks source positions for error reporting
//! - Skips ASCII whitespace (Jay has no comment syntax)
//!
//! The lexer is a pull-model producer: [`next_token`](Lexer::next_token)
//! runs the scanner until exactly one token is produced. It never fails;
//! bytes that start no token are emitted as [`TokenKind::Illegal`] tokens
//! carrying the offending text, and the parser reports them.
//!
//! # Supported Tokens
//!
//! - **Keywords**: `let`, `fn`, `if`, `else`, `return`, `true`, `false`
//! - **Identifiers**: an ASCII letter or underscore followed by ASCII
//!   letters, digits, and underscores
//! - **Integer literals**: runs of ASCII digits (no sign, no fraction)
//! - **Operators**: `=`, `+`, `-`, `!`, `*`, `/`, `<`, `>`, `==`, `!=`
//! - **Punctuation**: `(`, `)`, `{`, `}`, `,`, `;`
//!
//! # Examples
//!
//! ```
//! use jay::lexer::Lexer;
//! use jay::token::TokenKind;
//!
//! let mut lexer = Lexer::new("let five = 5;");
//!
//! assert_eq!(lexer.next_token().kind, TokenKind::Let);
//! assert_eq!(lexer.next_token().lexeme, "five");
//! ```
//!
//! # Module Structure
//!
//! - [`cursor`] - Position tracking and character navigation
//! - [`skip`] - Whitespace handling
//! - [`tokens`] - Token recognition and reading
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::token`] - Token type definitions
//! * [`crate::parser`] - Parser that consumes the token stream

mod cursor;
mod skip;
mod tokens;

#[cfg(test)]
mod tests;

use crate::token::{Span, Token, TokenKind};

/// A lexical analyzer that tokenizes Jay source code.
///
/// The `Lexer` maintains its position within the input and tracks line/column
/// numbers for error reporting. It is designed to be used once per source
/// string; a fresh parse requires a fresh lexer.
///
/// # Lifetime
///
/// The `'a` lifetime parameter ties the lexer to the input string slice,
/// ensuring the input remains valid while the lexer is in use.
pub struct Lexer<'a> {
    /// The input source code being tokenized.
    pub(super) input: &'a str,
    /// Current byte position in the input.
    pub(super) pos: usize,
    /// Current line number (1-indexed).
    pub(super) line: usize,
    /// Current column number (1-indexed).
    pub(super) column: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new `Lexer` for the given input string.
    ///
    /// The lexer starts at the beginning of the input with line and column
    /// numbers initialized to 1.
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the next token from the input.
    ///
    /// Whitespace is skipped, then one token is scanned and returned. Once
    /// the input is exhausted this returns an [`TokenKind::Eof`] token, and
    /// keeps returning `Eof` on every subsequent call, so consumers may pull
    /// past the end safely.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let Some(c) = self.current_char() else {
            let span = Span::new(self.pos, self.pos, self.line, self.column);
            return Token::new(TokenKind::Eof, "", span);
        };

        self.scan_token(c)
    }

    /// Tokenizes the remaining input and returns a vector of tokens.
    ///
    /// The returned vector always ends with exactly one
    /// [`TokenKind::Eof`] token, so it is never empty.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                break;
            }
        }

        tokens
    }
}
