//! Whitespace skipping for the lexer.

use super::Lexer;

impl<'a> Lexer<'a> {
    /// Skips consecutive ASCII whitespace characters.
    ///
    /// Only ASCII whitespace separates tokens in Jay; any other character
    /// either starts a token or is emitted as an `Illegal` token.
    pub(super) fn skip_whitespace(&mut self) {
        while self.current_char().is_some_and(|c| c.is_ascii_whitespace()) {
            self.advance();
        }
    }
}
