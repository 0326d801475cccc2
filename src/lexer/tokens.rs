//! Token recognition for the lexer.
//!
//! This module provides methods for reading the individual token types:
//! operators and punctuation, identifiers and keywords, and integer
//! literals. Anything unrecognized becomes an `Illegal` token.

use super::Lexer;
use crate::token::{Span, Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Scans and returns the next token.
    ///
    /// `c` is the current character; the caller has already skipped
    /// whitespace and handled end of input, so `c` begins a token (or is
    /// illegal).
    pub(super) fn scan_token(&mut self, c: char) -> Token {
        let start_pos = self.pos;
        let start_line = self.line;
        let start_column = self.column;

        match c {
            '=' => {
                if self.peek_char() == Some('=') {
                    self.two_char_token(TokenKind::Eq, start_pos, start_line, start_column)
                } else {
                    self.single_char_token(TokenKind::Assign, start_pos, start_line, start_column)
                }
            }
            '!' => {
                if self.peek_char() == Some('=') {
                    self.two_char_token(TokenKind::NotEq, start_pos, start_line, start_column)
                } else {
                    self.single_char_token(TokenKind::Bang, start_pos, start_line, start_column)
                }
            }
            '+' => self.single_char_token(TokenKind::Plus, start_pos, start_line, start_column),
            '-' => self.single_char_token(TokenKind::Minus, start_pos, start_line, start_column),
            '*' => self.single_char_token(TokenKind::Asterisk, start_pos, start_line, start_column),
            '/' => self.single_char_token(TokenKind::Slash, start_pos, start_line, start_column),
            '<' => self.single_char_token(TokenKind::Lt, start_pos, start_line, start_column),
            '>' => self.single_char_token(TokenKind::Gt, start_pos, start_line, start_column),
            '(' => self.single_char_token(TokenKind::LParen, start_pos, start_line, start_column),
            ')' => self.single_char_token(TokenKind::RParen, start_pos, start_line, start_column),
            '{' => self.single_char_token(TokenKind::LBrace, start_pos, start_line, start_column),
            '}' => self.single_char_token(TokenKind::RBrace, start_pos, start_line, start_column),
            ',' => self.single_char_token(TokenKind::Comma, start_pos, start_line, start_column),
            ';' => {
                self.single_char_token(TokenKind::Semicolon, start_pos, start_line, start_column)
            }
            _ if c.is_ascii_digit() => self.read_number(start_pos, start_line, start_column),
            _ if c.is_ascii_alphabetic() || c == '_' => {
                self.read_identifier(start_pos, start_line, start_column)
            }
            _ => self.single_char_token(TokenKind::Illegal, start_pos, start_line, start_column),
        }
    }

    /// Creates a one-character token and advances past it.
    fn single_char_token(
        &mut self,
        kind: TokenKind,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        self.advance();
        let span = Span::new(start_pos, self.pos, start_line, start_column);
        Token::new(kind, &self.input[start_pos..self.pos], span)
    }

    /// Creates a two-character token (`==`, `!=`) and advances past it.
    fn two_char_token(
        &mut self,
        kind: TokenKind,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        self.advance();
        self.advance();
        let span = Span::new(start_pos, self.pos, start_line, start_column);
        Token::new(kind, &self.input[start_pos..self.pos], span)
    }

    /// Reads an identifier or keyword from the input.
    ///
    /// Identifiers consist of an ASCII letter or underscore followed by any
    /// number of ASCII letters, digits, or underscores. The lexeme is looked
    /// up in the keyword table; `let`, `fn`, `if`, `else`, `return`, `true`,
    /// and `false` produce their keyword kinds, everything else is `Ident`.
    fn read_identifier(
        &mut self,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        while self
            .current_char()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.advance();
        }

        let lexeme = &self.input[start_pos..self.pos];
        let span = Span::new(start_pos, self.pos, start_line, start_column);
        Token::new(TokenKind::keyword_or_ident(lexeme), lexeme, span)
    }

    /// Reads an integer literal from the input.
    ///
    /// Integer literals are runs of ASCII digits `[0-9]`. There is no sign
    /// (unary `-` is a prefix operator) and no fraction. The token carries
    /// only the lexeme; numeric conversion happens in the parser, which is
    /// where out-of-range values are reported.
    fn read_number(&mut self, start_pos: usize, start_line: usize, start_column: usize) -> Token {
        while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        let lexeme = &self.input[start_pos..self.pos];
        let span = Span::new(start_pos, self.pos, start_line, start_column);
        Token::new(TokenKind::Int, lexeme, span)
    }
}
