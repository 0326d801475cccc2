//! Parser for the Jay language.
//!
//! This module provides the [`Parser`] struct which transforms the lexer's
//! token stream into an Abstract Syntax Tree ([`Program`]).
//!
//! # Overview
//!
//! The parser is a Pratt (top-down operator-precedence) parser. Statements
//! are dispatched on the current token; expressions are built by prefix
//! handlers and extended by infix handlers while the peeked token binds
//! tighter than the caller's precedence. Dispatch is a `match` over
//! [`TokenKind`](crate::token::TokenKind), so coverage is checked at
//! compile time.
//!
//! The parser holds a two-token window (`cur`, `peek`) refilled from the
//! lexer one token at a time. It never rewinds and never buffers beyond
//! that window.
//!
//! # Grammar
//!
//! ```text
//! program    → stmt* EOF
//! stmt       → let_stmt | return_stmt | expr_stmt
//! let_stmt   → "let" IDENT "=" expr ";"
//! return_stmt→ "return" expr ";"
//! expr_stmt  → expr ";"?
//! block      → "{" stmt* "}"
//! expr       → Pratt-parsed; see the precedence table in `expr`
//! ```
//!
//! # Error handling
//!
//! Errors never abort the parse. Each is recorded on the parser and the
//! failing handler returns `None`; the enclosing statement is dropped from
//! the program and parsing resumes at the next token. [`Parser::parse`]
//! therefore always returns a `Program`, and callers must check
//! [`Parser::errors`] before treating it as well-formed.
//!
//! # Examples
//!
//! ```
//! use jay::lexer::Lexer;
//! use jay::parser::Parser;
//!
//! let mut parser = Parser::new(Lexer::new("let x = 1 + 2 * 3;"));
//! let program = parser.parse();
//!
//! assert!(parser.errors().is_empty());
//! assert_eq!(program.render(), "let x = (1 + (2 * 3));");
//! ```
//!
//! # Module Structure
//!
//! - [`error`] - Parse error types
//! - `helpers` - Token-window navigation and `expect_peek`
//! - `stmt` - Statement and block parsing
//! - `expr` - Pratt expression parsing
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::lexer`] - Produces the token stream consumed by the parser
//! * [`crate::ast`] - Defines the AST types produced by the parser

mod error;
mod expr;
mod helpers;
mod stmt;

#[cfg(test)]
mod tests;

pub use error::{ParseError, ParseErrorKind};

use crate::ast::Program;
use crate::lexer::Lexer;
use crate::token::{Span, Token, TokenKind};

/// A Pratt parser for the Jay language.
///
/// The parser owns its [`Lexer`] and pulls tokens on demand; one parser
/// parses one source string. Multiple parses require independent
/// lexer/parser pairs.
pub struct Parser<'a> {
    /// The token source.
    lexer: Lexer<'a>,
    /// The current token.
    cur: Token,
    /// One token of lookahead.
    peek: Token,
    /// Errors recorded so far, in detection order.
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    /// Creates a parser over the given lexer and primes the two-token
    /// window by advancing twice.
    pub fn new(lexer: Lexer<'a>) -> Self {
        let placeholder = Token::new(TokenKind::Eof, "", Span::new(0, 0, 1, 1));
        let mut parser = Parser {
            lexer,
            cur: placeholder.clone(),
            peek: placeholder,
            errors: Vec::new(),
        };

        parser.advance();
        parser.advance();
        parser
    }

    /// Parses the token stream into a [`Program`].
    ///
    /// Parsing continues until the current token is `Eof`. Statements that
    /// fail to parse are omitted from the program; the corresponding errors
    /// are available from [`errors`](Self::errors).
    pub fn parse(&mut self) -> Program {
        let mut statements = Vec::new();

        while self.cur.kind != TokenKind::Eof {
            if let Some(stmt) = self.parse_statement() {
                statements.push(stmt);
            }
            self.advance();
        }

        Program { statements }
    }

    /// Returns the errors accumulated so far, in detection order.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }
}
