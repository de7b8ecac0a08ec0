//! String literal entry point.
//!
//! Quoting and escape rules are not defined yet. A `"` is recognized so the
//! dispatch has a place to grow, but it never produces a literal.

use crate::source::CharSource;
use crate::token::Token;
use crate::Lexer;

/// Payload of the token produced for a `"`.
const UNSUPPORTED_STRING: &str = "string literals are not supported";

impl<S: CharSource> Lexer<S> {
    /// Lexes a string literal.
    ///
    /// The opening quote has already been consumed and nothing further is
    /// read, so whatever follows the quote is lexed as ordinary tokens.
    pub(super) fn lex_string(&mut self) -> Token {
        Token::Invalid(Some(UNSUPPORTED_STRING.to_string()))
    }
}
