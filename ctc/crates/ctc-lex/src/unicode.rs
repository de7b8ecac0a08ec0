//! Character classes used by the ctc lexer.
//!
//! Identifiers accept any Unicode letter, so these predicates go through the
//! `char` Unicode tables rather than ASCII ranges. Numeric literals are the
//! exception: their digits are always ASCII.

/// Checks if a character can start an identifier.
///
/// # Example
///
/// ```
/// use ctc_lex::unicode::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('_'));
/// assert!(is_ident_start('α'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('!'));
/// ```
pub fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

/// Checks if a character can continue an identifier.
///
/// # Example
///
/// ```
/// use ctc_lex::unicode::is_ident_continue;
///
/// assert!(is_ident_continue('a'));
/// assert!(is_ident_continue('_'));
/// assert!(is_ident_continue('1'));
/// assert!(!is_ident_continue('#'));
/// assert!(!is_ident_continue(' '));
/// ```
pub fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

/// Checks if a character is a valid digit in the given radix.
///
/// Only the three radices the lexer understands (2, 10, 16) have digits;
/// every other radix rejects everything.
///
/// # Example
///
/// ```
/// use ctc_lex::unicode::is_digit_in_base;
///
/// assert!(is_digit_in_base('9', 10));
/// assert!(is_digit_in_base('F', 16));
/// assert!(!is_digit_in_base('2', 2));
/// ```
pub fn is_digit_in_base(c: char, radix: u32) -> bool {
    match radix {
        2 => matches!(c, '0' | '1'),
        10 => c.is_ascii_digit(),
        16 => c.is_ascii_hexdigit(),
        _ => false,
    }
}

/// Checks if a character is whitespace the skipper discards.
#[inline]
pub fn is_trivia_whitespace(c: char) -> bool {
    c.is_whitespace()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ident_start_ascii() {
        for c in ('a'..='z').chain('A'..='Z') {
            assert!(is_ident_start(c), "{} should start an identifier", c);
        }
        assert!(is_ident_start('_'));
    }

    #[test]
    fn test_ident_start_rejects_digits_and_symbols() {
        for c in ('0'..='9').chain(['!', '#', '"', ':', '=', ' ']) {
            assert!(!is_ident_start(c), "{:?} should not start an identifier", c);
        }
    }

    #[test]
    fn test_ident_continue_accepts_digits() {
        for c in '0'..='9' {
            assert!(is_ident_continue(c));
        }
        assert!(is_ident_continue('é'));
        assert!(!is_ident_continue('-'));
    }

    #[test]
    fn test_is_digit_in_base_binary() {
        assert!(is_digit_in_base('0', 2));
        assert!(is_digit_in_base('1', 2));
        assert!(!is_digit_in_base('2', 2));
        assert!(!is_digit_in_base('a', 2));
    }

    #[test]
    fn test_is_digit_in_base_decimal() {
        for c in '0'..='9' {
            assert!(is_digit_in_base(c, 10), "{} should be decimal digit", c);
        }
        assert!(!is_digit_in_base('a', 10));
        assert!(!is_digit_in_base('٣', 10));
    }

    #[test]
    fn test_is_digit_in_base_hex() {
        for c in ('0'..='9').chain('a'..='f').chain('A'..='F') {
            assert!(is_digit_in_base(c, 16), "{} should be hex digit", c);
        }
        assert!(!is_digit_in_base('g', 16));
        assert!(!is_digit_in_base('x', 16));
    }

    #[test]
    fn test_is_digit_in_base_unsupported_radix() {
        assert!(!is_digit_in_base('0', 8));
        assert!(!is_digit_in_base('0', 1));
        assert!(!is_digit_in_base('0', 36));
    }

    #[test]
    fn test_trivia_whitespace() {
        for c in [' ', '\t', '\n', '\r', '\u{a0}'] {
            assert!(is_trivia_whitespace(c));
        }
        assert!(!is_trivia_whitespace('#'));
    }
}
