//! Identifier and keyword lexing.

use crate::source::CharSource;
use crate::token::{keyword_from_ident, Token};
use crate::unicode::is_ident_continue;
use crate::Lexer;

impl<S: CharSource> Lexer<S> {
    /// Lexes an identifier or keyword.
    ///
    /// `first` has already been consumed and is known to start an
    /// identifier. After reading the whole spelling, checks whether it is a
    /// reserved word.
    ///
    /// # Returns
    ///
    /// Either `Token::Keyword(..)` or `Token::Identifier(name)`
    pub(super) fn lex_identifier(&mut self, first: char) -> Token {
        let mut text = String::from(first);
        self.cursor.eat_while(&mut text, is_ident_continue);

        match keyword_from_ident(&text) {
            Some(keyword) => Token::Keyword(keyword),
            None => Token::Identifier(text),
        }
    }
}
