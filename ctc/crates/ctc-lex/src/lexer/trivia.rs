//! Trivia skipping.
//!
//! Whitespace and line comments carry no meaning and are discarded between
//! tokens. A comment starts at `#` and runs through the end of its line.

use crate::source::CharSource;
use crate::unicode::is_trivia_whitespace;
use crate::Lexer;

impl<S: CharSource> Lexer<S> {
    /// Skips whitespace and comments.
    ///
    /// Returns the first significant character, already consumed, or `None`
    /// if the input ran out first. `token_start` is left pointing at the
    /// returned character.
    pub(super) fn skip_trivia(&mut self) -> Option<char> {
        loop {
            self.token_start = self.cursor.location();
            match self.cursor.get() {
                Some('#') => self.skip_line_comment(),
                Some(c) if is_trivia_whitespace(c) => {},
                significant => return significant,
            }
        }
    }

    /// Consumes the rest of a comment, including its terminating newline.
    fn skip_line_comment(&mut self) {
        while let Some(c) = self.cursor.get() {
            if c == '\n' {
                break;
            }
        }
    }
}
