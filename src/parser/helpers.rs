//! Parser helper methods for token-window navigation.

use super::Parser;
use super::error::ParseError;
use crate::token::TokenKind;

impl<'a> Parser<'a> {
    /// Shifts the window: `peek` becomes `cur`, and a fresh token is
    /// pulled from the lexer into `peek`.
    ///
    /// The lexer returns `Eof` forever once the input is exhausted, so
    /// advancing past the end is safe and the window is always full.
    pub(super) fn advance(&mut self) {
        self.cur = std::mem::replace(&mut self.peek, self.lexer.next_token());
    }

    /// Returns `true` if the current token has the given kind.
    pub(super) fn cur_is(&self, kind: TokenKind) -> bool {
        self.cur.kind == kind
    }

    /// Returns `true` if the peeked token has the given kind.
    pub(super) fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Advances if the peeked token has the expected kind.
    ///
    /// On a mismatch, records an
    /// [`UnexpectedToken`](super::ParseErrorKind::UnexpectedToken) error
    /// and leaves the window untouched.
    ///
    /// # Returns
    ///
    /// * `true` - The peeked token matched and is now `cur`
    /// * `false` - The peeked token did not match; an error was recorded
    pub(super) fn expect_peek(&mut self, expected: TokenKind) -> bool {
        if self.peek_is(expected) {
            self.advance();
            true
        } else {
            self.errors.push(ParseError::unexpected_token(expected, &self.peek));
            false
        }
    }
}
