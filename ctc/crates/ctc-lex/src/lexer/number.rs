//! Number literal lexing.
//!
//! Integers come in three radices: `0x` hexadecimal, `0b` binary, and plain
//! decimal. Values are arbitrary precision, so no literal ever overflows.

use num_bigint::BigUint;
use num_traits::Zero;
use thiserror::Error;

use crate::source::CharSource;
use crate::token::Token;
use crate::unicode::is_digit_in_base;
use crate::Lexer;

/// Why a collected digit run could not become an integer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LiteralError {
    /// A radix prefix with nothing after it, e.g. `0x`.
    #[error("no digits after base-{radix} prefix")]
    EmptyDigits {
        /// The radix selected by the prefix.
        radix: u32,
    },

    /// Digits that are not valid in the selected radix.
    #[error("invalid base-{radix} digits '{digits}'")]
    InvalidDigits {
        /// The radix the digits were parsed in.
        radix: u32,
        /// The offending digit run.
        digits: String,
    },
}

/// Parses a run of digits in `radix` into an unbounded integer.
///
/// # Example
///
/// ```
/// use ctc_lex::lexer::{parse_digits, LiteralError};
/// use num_bigint::BigUint;
///
/// assert_eq!(parse_digits("500", 16), Ok(BigUint::from(1280u32)));
/// assert_eq!(parse_digits("", 2), Err(LiteralError::EmptyDigits { radix: 2 }));
/// ```
pub fn parse_digits(digits: &str, radix: u32) -> Result<BigUint, LiteralError> {
    if digits.is_empty() {
        return Err(LiteralError::EmptyDigits { radix });
    }
    if !digits.chars().all(|c| is_digit_in_base(c, radix)) {
        return Err(LiteralError::InvalidDigits {
            radix,
            digits: digits.to_string(),
        });
    }
    BigUint::parse_bytes(digits.as_bytes(), radix).ok_or_else(|| LiteralError::InvalidDigits {
        radix,
        digits: digits.to_string(),
    })
}

impl<S: CharSource> Lexer<S> {
    /// Lexes an integer literal.
    ///
    /// `first` is the already-consumed leading digit. A leading `0` may be
    /// followed by `x` (hexadecimal), `b` (binary), or more decimal digits;
    /// on its own it is the value zero.
    ///
    /// # Returns
    ///
    /// `Token::Integer(value)`, or `Token::Invalid(Some(reason))` when the
    /// digit run does not parse.
    pub(super) fn lex_number(&mut self, first: char) -> Token {
        let mut digits = String::new();

        let radix = if first == '0' {
            if self.cursor.eat('x') {
                16
            } else if self.cursor.eat('b') {
                2
            } else if self.cursor.peek().is_some_and(|c| c.is_ascii_digit()) {
                10
            } else {
                return Token::Integer(BigUint::zero());
            }
        } else {
            digits.push(first);
            10
        };

        self.cursor
            .eat_while(&mut digits, |c| is_digit_in_base(c, radix));

        match parse_digits(&digits, radix) {
            Ok(value) => Token::Integer(value),
            Err(err) => Token::Invalid(Some(err.to_string())),
        }
    }
}
