//! Symbol lexing.
//!
//! Every symbol rule decides between its one- and two-character forms with
//! a single [`Cursor::eat`](crate::cursor::Cursor::eat). New operators are
//! added as new arms in [`Lexer::lex_symbol`].

use crate::source::CharSource;
use crate::token::{Keyword, Token};
use crate::Lexer;

impl<S: CharSource> Lexer<S> {
    /// Lexes a symbol starting with the already-consumed `first`.
    ///
    /// Handles: `!`, `!=`, `:=`, `==`. Anything else is an unrecognized
    /// symbol and yields `Token::Invalid(None)` after consuming only
    /// `first`.
    pub(super) fn lex_symbol(&mut self, first: char) -> Token {
        match first {
            '!' => self.lex_bang(),
            ':' => self.lex_pair('=', Keyword::Assign),
            '=' => self.lex_pair('=', Keyword::Eq),
            _ => Token::Invalid(None),
        }
    }

    /// Lexes bang or not-equals.
    ///
    /// Handles: `!`, `!=`
    fn lex_bang(&mut self) -> Token {
        if self.cursor.eat('=') {
            Token::Keyword(Keyword::Neq)
        } else {
            Token::Keyword(Keyword::Not)
        }
    }

    /// Lexes a symbol that only exists in its two-character form.
    fn lex_pair(&mut self, second: char, keyword: Keyword) -> Token {
        if self.cursor.eat(second) {
            Token::Keyword(keyword)
        } else {
            Token::Invalid(None)
        }
    }
}
