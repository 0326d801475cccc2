//! Expression parsing using Pratt parsing (operator precedence).
//!
//! This module implements the expression grammar: literals, identifiers,
//! prefix operators, left-associative infix operators, grouping, `if`
//! expressions, function literals, and calls. A call is an infix use of
//! `(` at the highest precedence, so `add(1)(2)` and `fn(x){x}(5)` fall
//! out of the ordinary Pratt loop.

use super::Parser;
use super::error::ParseError;
use crate::ast::{Expr, ExprKind, Ident};
use crate::token::TokenKind;

/// Operator precedence levels, ascending (higher number = tighter binding).
///
/// The Pratt loop continues while the caller's level is strictly below the
/// peeked operator's level; equal levels stop the loop, which is what makes
/// every infix operator left-associative.
pub(super) const LOWEST: u8 = 1;
const EQUALS: u8 = 2;
const LESSGREATER: u8 = 3;
const SUM: u8 = 4;
const PRODUCT: u8 = 5;
const PREFIX: u8 = 6;
const CALL: u8 = 7;

/// Returns the infix precedence of a token kind.
///
/// Tokens that are not infix operators sit at [`LOWEST`], which keeps them
/// from ever entering the Pratt loop.
fn precedence_of(kind: TokenKind) -> u8 {
    match kind {
        TokenKind::Eq | TokenKind::NotEq => EQUALS,
        TokenKind::Lt | TokenKind::Gt => LESSGREATER,
        TokenKind::Plus | TokenKind::Minus => SUM,
        TokenKind::Asterisk | TokenKind::Slash => PRODUCT,
        TokenKind::LParen => CALL,
        _ => LOWEST,
    }
}

impl<'a> Parser<'a> {
    /// Parses an expression at the given precedence level.
    ///
    /// The prefix handler for the current token produces the left operand;
    /// the loop then folds in infix operators while the peeked token binds
    /// tighter than `precedence` and is not a semicolon.
    ///
    /// Returns `None` when no expression could be built; the error has
    /// already been recorded.
    pub(super) fn parse_expression(&mut self, precedence: u8) -> Option<Expr> {
        let mut left = self.parse_prefix()?;

        while !self.peek_is(TokenKind::Semicolon) && precedence < precedence_of(self.peek.kind) {
            left = match self.peek.kind {
                TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Asterisk
                | TokenKind::Slash
                | TokenKind::Lt
                | TokenKind::Gt
                | TokenKind::Eq
                | TokenKind::NotEq => {
                    self.advance();
                    self.parse_infix_expression(left)?
                }
                TokenKind::LParen => {
                    self.advance();
                    self.parse_call_expression(left)?
                }
                _ => return Some(left),
            };
        }

        Some(left)
    }

    /// Dispatches to the prefix handler for the current token.
    fn parse_prefix(&mut self) -> Option<Expr> {
        match self.cur.kind {
            TokenKind::Ident => Some(Expr::new(
                ExprKind::Identifier(self.cur.lexeme.clone()),
                self.cur.span,
            )),
            TokenKind::Int => self.parse_integer_literal(),
            TokenKind::True => Some(Expr::new(ExprKind::BooleanLiteral(true), self.cur.span)),
            TokenKind::False => Some(Expr::new(ExprKind::BooleanLiteral(false), self.cur.span)),
            TokenKind::Bang | TokenKind::Minus => self.parse_prefix_expression(),
            TokenKind::LParen => self.parse_grouped_expression(),
            TokenKind::If => self.parse_if_expression(),
            TokenKind::Function => self.parse_function_expression(),
            TokenKind::Illegal => {
                self.errors.push(ParseError::illegal_character(&self.cur));
                None
            }
            _ => {
                self.errors.push(ParseError::no_prefix_parse_fn(&self.cur));
                None
            }
        }
    }

    /// Parses an integer literal from the current token's lexeme.
    ///
    /// The lexeme is an unsigned digit run; values above `i64::MAX` are
    /// reported and the handler fails. `i64::MIN` is therefore not
    /// expressible as a literal (its magnitude overflows); unary minus is
    /// a prefix operator, not part of the literal.
    fn parse_integer_literal(&mut self) -> Option<Expr> {
        match self.cur.lexeme.parse::<i64>() {
            Ok(value) => Some(Expr::new(ExprKind::IntegerLiteral(value), self.cur.span)),
            Err(_) => {
                self.errors.push(ParseError::integer_literal(&self.cur));
                None
            }
        }
    }

    /// Parses a prefix operator application (`!x`, `-x`).
    ///
    /// The operand is parsed at `PREFIX` precedence, so `!-a` nests as
    /// `(!(-a))` and `-a * b` groups as `((-a) * b)`.
    fn parse_prefix_expression(&mut self) -> Option<Expr> {
        let start = self.cur.span;
        let op = self.cur.lexeme.clone();

        self.advance();
        let rhs = self.parse_expression(PREFIX)?;

        let span = start.to(rhs.span);
        Some(Expr::new(
            ExprKind::Prefix {
                op,
                rhs: Box::new(rhs),
            },
            span,
        ))
    }

    /// Parses an infix operator application. The operator is the current
    /// token and `left` is the already-parsed left operand.
    ///
    /// The right operand is parsed at the operator's own precedence, so a
    /// run of equal-precedence operators folds to the left.
    fn parse_infix_expression(&mut self, left: Expr) -> Option<Expr> {
        let op = self.cur.lexeme.clone();
        let precedence = precedence_of(self.cur.kind);

        self.advance();
        let rhs = self.parse_expression(precedence)?;

        let span = left.span.to(rhs.span);
        Some(Expr::new(
            ExprKind::Infix {
                op,
                lhs: Box::new(left),
                rhs: Box::new(rhs),
            },
            span,
        ))
    }

    /// Parses a parenthesized expression, assuming the current token is
    /// `(`. Grouping produces no AST node of its own; the inner expression
    /// is returned with its span widened to cover the parentheses.
    fn parse_grouped_expression(&mut self) -> Option<Expr> {
        let start = self.cur.span;

        self.advance();
        let inner = self.parse_expression(LOWEST)?;

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }

        let span = start.to(self.cur.span);
        Some(Expr::new(inner.kind, span))
    }

    /// Parses an `if` expression.
    ///
    /// # Grammar
    ///
    /// ```text
    /// if_expr → "if" "(" expr ")" block ("else" block)?
    /// ```
    fn parse_if_expression(&mut self) -> Option<Expr> {
        let start = self.cur.span;

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }

        self.advance();
        let condition = self.parse_expression(LOWEST)?;

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }

        let consequence = self.parse_block();

        let alternative = if self.peek_is(TokenKind::Else) {
            self.advance();
            if !self.expect_peek(TokenKind::LBrace) {
                return None;
            }
            Some(self.parse_block())
        } else {
            None
        };

        let end = alternative
            .as_ref()
            .map(|block| block.span)
            .unwrap_or(consequence.span);
        Some(Expr::new(
            ExprKind::If {
                condition: Box::new(condition),
                consequence,
                alternative,
            },
            start.to(end),
        ))
    }

    /// Parses a function literal.
    ///
    /// # Grammar
    ///
    /// ```text
    /// fn_expr → "fn" "(" params? ")" block
    /// params  → IDENT ("," IDENT)*
    /// ```
    fn parse_function_expression(&mut self) -> Option<Expr> {
        let start = self.cur.span;

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }

        let params = self.parse_function_params()?;

        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }

        let body = self.parse_block();

        let span = start.to(body.span);
        Some(Expr::new(ExprKind::Function { params, body }, span))
    }

    /// Parses a comma-separated, possibly-empty parameter list, assuming
    /// the current token is `(`. Consumes the closing `)`.
    fn parse_function_params(&mut self) -> Option<Vec<Ident>> {
        let mut params = Vec::new();

        if self.peek_is(TokenKind::RParen) {
            self.advance();
            return Some(params);
        }

        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        params.push(Ident::new(self.cur.lexeme.clone(), self.cur.span));

        while self.peek_is(TokenKind::Comma) {
            self.advance();
            if !self.expect_peek(TokenKind::Ident) {
                return None;
            }
            params.push(Ident::new(self.cur.lexeme.clone(), self.cur.span));
        }

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }

        Some(params)
    }

    /// Parses a call expression. The current token is the `(` that
    /// followed the callee, which the Pratt loop treats as an infix
    /// operator at `CALL` precedence.
    fn parse_call_expression(&mut self, callee: Expr) -> Option<Expr> {
        let args = self.parse_call_arguments()?;

        let span = callee.span.to(self.cur.span);
        Some(Expr::new(
            ExprKind::Call {
                callee: Box::new(callee),
                args,
            },
            span,
        ))
    }

    /// Parses a comma-separated, possibly-empty argument list, assuming
    /// the current token is `(`. Consumes the closing `)`.
    fn parse_call_arguments(&mut self) -> Option<Vec<Expr>> {
        let mut args = Vec::new();

        if self.peek_is(TokenKind::RParen) {
            self.advance();
            return Some(args);
        }

        self.advance();
        args.push(self.parse_expression(LOWEST)?);

        while self.peek_is(TokenKind::Comma) {
            self.advance();
            self.advance();
            args.push(self.parse_expression(LOWEST)?);
        }

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }

        Some(args)
    }
}
