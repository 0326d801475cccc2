//! Unit tests for parsing.
//!
//! Tests are organized by parser component:
//! - [`stmt`]: Statement parsing (let, return, expression statements)
//! - [`expr`]: Expression parsing (literals, prefix/infix, if, fn, call)
//! - [`precedence`]: Operator precedence and associativity fixtures
//! - [`errors`]: Error recording and recovery

use super::*;
use crate::ast::{Expr, ExprKind, StmtKind};
use crate::lexer::Lexer;

mod errors;
mod stmt;

/// Helper to parse input, asserting that no errors were recorded.
pub(super) fn parse(input: &str) -> Program {
    let mut parser = Parser::new(Lexer::new(input));
    let program = parser.parse();
    let messages: Vec<&str> = parser.errors().iter().map(|e| e.message()).collect();
    assert!(
        messages.is_empty(),
        "parser errors for input {:?}: {:?}",
        input,
        messages
    );
    program
}

/// Helper to parse input and return the program along with every recorded
/// error message.
pub(super) fn parse_with_errors(input: &str) -> (Program, Vec<String>) {
    let mut parser = Parser::new(Lexer::new(input));
    let program = parser.parse();
    let messages = parser
        .errors()
        .iter()
        .map(|e| e.message().to_string())
        .collect();
    (program, messages)
}

/// Helper to parse input whose single statement is an expression
/// statement, returning the expression.
pub(super) fn parse_first_expr(input: &str) -> Expr {
    let program = parse(input);
    assert_eq!(
        program.statements.len(),
        1,
        "input {:?} produced {} statements",
        input,
        program.statements.len()
    );
    match &program.statements[0].kind {
        StmtKind::Expr(expr) => expr.clone(),
        other => panic!("expected expression statement, got {:?}", other),
    }
}

// ============================================================================
// ParseError constructor tests
// ============================================================================

fn token_at(kind: TokenKind, lexeme: &str, line: usize, column: usize) -> Token {
    Token::new(kind, lexeme, Span::new(0, lexeme.len(), line, column))
}

#[test]
fn test_parse_error_unexpected_token_constructor() {
    let got = token_at(TokenKind::Assign, "=", 1, 5);
    let err = ParseError::unexpected_token(TokenKind::Ident, &got);
    assert_eq!(err.kind(), ParseErrorKind::UnexpectedToken);
    assert_eq!(
        err.message(),
        "expected next token to be IDENT, got ASSIGN instead, line 1, col 5"
    );
}

#[test]
fn test_parse_error_no_prefix_parse_fn_constructor() {
    let got = token_at(TokenKind::RBrace, "}", 2, 1);
    let err = ParseError::no_prefix_parse_fn(&got);
    assert_eq!(err.kind(), ParseErrorKind::NoPrefixParseFn);
    assert_eq!(err.message(), "no prefix parse function for RBRACE found");
}

#[test]
fn test_parse_error_integer_literal_constructor() {
    let got = token_at(TokenKind::Int, "99999999999999999999", 1, 1);
    let err = ParseError::integer_literal(&got);
    assert_eq!(err.kind(), ParseErrorKind::IntegerLiteral);
    assert_eq!(
        err.message(),
        "could not parse \"99999999999999999999\" as integer"
    );
}

#[test]
fn test_parse_error_illegal_character_constructor() {
    let got = token_at(TokenKind::Illegal, "@", 3, 7);
    let err = ParseError::illegal_character(&got);
    assert_eq!(err.kind(), ParseErrorKind::IllegalCharacter);
    assert_eq!(err.message(), "unexpected character '@'");
}

#[test]
fn test_parse_error_display_is_the_message() {
    let got = token_at(TokenKind::Semicolon, ";", 1, 9);
    let err = ParseError::unexpected_token(TokenKind::RParen, &got);
    assert_eq!(
        format!("{}", err),
        "expected next token to be RPAREN, got SEMICOLON instead, line 1, col 9"
    );
}

#[test]
fn test_parse_error_span_accessor() {
    let got = token_at(TokenKind::Assign, "=", 4, 2);
    let err = ParseError::unexpected_token(TokenKind::Ident, &got);
    assert_eq!(err.span().line, 4);
    assert_eq!(err.span().column, 2);
}
