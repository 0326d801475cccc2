//! Statement and block parsing.

use super::Parser;
use super::expr::LOWEST;
use crate::ast::{Block, Ident, Stmt, StmtKind};
use crate::token::TokenKind;

impl<'a> Parser<'a> {
    /// Parses a single statement, dispatching on the current token.
    ///
    /// # Grammar
    ///
    /// ```text
    /// stmt → let_stmt | return_stmt | expr_stmt
    /// ```
    ///
    /// Returns `None` when the statement fails to parse; the error has
    /// already been recorded and the caller drops the statement.
    pub(super) fn parse_statement(&mut self) -> Option<Stmt> {
        match self.cur.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parses a let statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// let_stmt → "let" IDENT "=" expr ";"
    /// ```
    ///
    /// The trailing semicolon is consumed when present but not required.
    fn parse_let_statement(&mut self) -> Option<Stmt> {
        let start = self.cur.span;

        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        let name = Ident::new(self.cur.lexeme.clone(), self.cur.span);

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }

        self.advance();
        let value = self.parse_expression(LOWEST)?;

        if self.peek_is(TokenKind::Semicolon) {
            self.advance();
        }

        let span = start.to(self.cur.span);
        Some(Stmt::new(StmtKind::Let { name, value }, span))
    }

    /// Parses a return statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// return_stmt → "return" expr ";"
    /// ```
    fn parse_return_statement(&mut self) -> Option<Stmt> {
        let start = self.cur.span;

        self.advance();
        let value = self.parse_expression(LOWEST)?;

        if self.peek_is(TokenKind::Semicolon) {
            self.advance();
        }

        let span = start.to(self.cur.span);
        Some(Stmt::new(StmtKind::Return(value), span))
    }

    /// Parses an expression in statement position.
    ///
    /// # Grammar
    ///
    /// ```text
    /// expr_stmt → expr ";"?
    /// ```
    fn parse_expression_statement(&mut self) -> Option<Stmt> {
        let start = self.cur.span;
        let expr = self.parse_expression(LOWEST)?;

        if self.peek_is(TokenKind::Semicolon) {
            self.advance();
        }

        let span = start.to(self.cur.span);
        Some(Stmt::new(StmtKind::Expr(expr), span))
    }

    /// Parses a block, assuming the current token is the opening `{`.
    ///
    /// Statements are parsed until the closing `}` (or `Eof`, for
    /// unterminated input). Failed statements are dropped, matching the
    /// top-level loop. The closing brace is left as the current token for
    /// the caller to step over.
    pub(super) fn parse_block(&mut self) -> Block {
        let start = self.cur.span;
        let mut statements = Vec::new();

        self.advance();
        while !self.cur_is(TokenKind::RBrace) && !self.cur_is(TokenKind::Eof) {
            if let Some(stmt) = self.parse_statement() {
                statements.push(stmt);
            }
            self.advance();
        }

        Block::new(statements, start.to(self.cur.span))
    }
}
