//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its dispatch loop.

use std::iter::FusedIterator;
use std::str::Chars;

use ctc_util::Span;

use crate::cursor::Cursor;
use crate::source::CharSource;
use crate::token::Token;
use crate::unicode::is_ident_start;

/// Lexer for the ctc language.
///
/// The lexer pulls characters from its cursor on demand and keeps no state
/// between tokens beyond the cursor's single character of lookahead. One
/// lexer serves one thread; independent lexers can run side by side since
/// the only thing they share is the read-only keyword table.
///
/// # Example
///
/// ```
/// use ctc_lex::{Keyword, Lexer, Token};
///
/// let mut lexer = Lexer::for_str("def answer 0x2A");
/// assert_eq!(lexer.next_token(), Token::Keyword(Keyword::Def));
/// assert_eq!(lexer.next_token(), Token::ident("answer"));
/// assert_eq!(lexer.next_token(), Token::int(42u32));
/// assert_eq!(lexer.next_token(), Token::EndOfInput);
/// ```
pub struct Lexer<S> {
    /// Character cursor over the source.
    pub(super) cursor: Cursor<S>,

    /// Location of the first character of the token being lexed.
    pub(super) token_start: Span,

    /// Span of the most recently returned token.
    token_span: Span,
}

impl<'a> Lexer<Chars<'a>> {
    /// Creates a lexer over in-memory text.
    pub fn for_str(text: &'a str) -> Self {
        Self::new(text.chars())
    }
}

impl<S: CharSource> Lexer<S> {
    /// Creates a new lexer reading from `source`.
    pub fn new(source: S) -> Self {
        let cursor = Cursor::new(source);
        let start = cursor.location();
        Self {
            cursor,
            token_start: start,
            token_span: start,
        }
    }

    /// Returns the next token.
    ///
    /// Skips trivia, then dispatches on the first significant character.
    /// Never fails: input that cannot be classified comes back as
    /// [`Token::Invalid`], and once the input is exhausted every call
    /// returns [`Token::EndOfInput`].
    pub fn next_token(&mut self) -> Token {
        let first = self.skip_trivia();

        let token = match first {
            None => Token::EndOfInput,
            Some(c) if is_ident_start(c) => self.lex_identifier(c),
            Some(c) if c.is_ascii_digit() => self.lex_number(c),
            Some('"') => self.lex_string(),
            Some(c) => self.lex_symbol(c),
        };

        self.token_span = Span {
            end: self.cursor.offset(),
            ..self.token_start
        };

        if let Token::Invalid(reason) = &token {
            tracing::debug!(
                location = %self.token_span,
                reason = reason.as_deref().unwrap_or("unrecognized symbol"),
                "invalid token"
            );
        }
        tracing::trace!(token = %token, location = %self.token_span, "lexed token");

        token
    }

    /// Lexes the remaining input, stopping before end of input.
    pub fn tokenize(self) -> Vec<Token> {
        self.collect()
    }

    /// Span of the most recently returned token.
    ///
    /// For [`Token::EndOfInput`] this is an empty span at the end of input.
    pub fn token_span(&self) -> Span {
        self.token_span
    }

    /// Location of the next unconsumed character.
    pub fn location(&self) -> Span {
        self.cursor.location()
    }

    /// Borrows the character source, e.g. to inspect a read error.
    pub fn source(&self) -> &S {
        self.cursor.source()
    }
}

impl<S: CharSource> Iterator for Lexer<S> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_end_of_input() {
            None
        } else {
            Some(token)
        }
    }
}

impl<S: CharSource> FusedIterator for Lexer<S> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Keyword;

    #[test]
    fn test_dispatch_each_branch() {
        let mut lexer = Lexer::for_str("name 7 ! \"");
        assert_eq!(lexer.next_token(), Token::ident("name"));
        assert_eq!(lexer.next_token(), Token::int(7u32));
        assert_eq!(lexer.next_token(), Token::Keyword(Keyword::Not));
        assert!(lexer.next_token().is_invalid());
        assert_eq!(lexer.next_token(), Token::EndOfInput);
    }

    #[test]
    fn test_end_of_input_is_sticky() {
        let mut lexer = Lexer::for_str("x");
        assert_eq!(lexer.next_token(), Token::ident("x"));
        for _ in 0..10 {
            assert_eq!(lexer.next_token(), Token::EndOfInput);
        }
    }

    #[test]
    fn test_iterator_stops_at_end() {
        let tokens: Vec<_> = Lexer::for_str("def struct").collect();
        assert_eq!(
            tokens,
            vec![Token::Keyword(Keyword::Def), Token::Keyword(Keyword::Struct)]
        );
    }

    #[test]
    fn test_iterator_is_fused() {
        let mut lexer = Lexer::for_str("a");
        assert!(lexer.next().is_some());
        assert!(lexer.next().is_none());
        assert!(lexer.next().is_none());
    }

    #[test]
    fn test_token_span() {
        let mut lexer = Lexer::for_str("  def\n  0x1F");
        lexer.next_token();
        assert_eq!(lexer.token_span(), Span::new(2, 5, 1, 3));
        lexer.next_token();
        assert_eq!(lexer.token_span(), Span::new(8, 12, 2, 3));
        lexer.next_token();
        assert_eq!(lexer.token_span(), Span::new(12, 12, 2, 7));
    }

    #[test]
    fn test_token_span_after_comment() {
        let mut lexer = Lexer::for_str("# note\n  !=");
        assert_eq!(lexer.next_token(), Token::Keyword(Keyword::Neq));
        assert_eq!(lexer.token_span(), Span::new(9, 11, 2, 3));
    }

    #[test]
    fn test_location_tracks_cursor() {
        let mut lexer = Lexer::for_str("ab cd");
        lexer.next_token();
        assert_eq!(lexer.location(), Span::point(2, 1, 3));
    }

    #[test]
    fn test_tokenize() {
        let tokens = Lexer::for_str("1 2 3").tokenize();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[2], Token::int(3u32));
    }
}
