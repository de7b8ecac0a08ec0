//! Token definitions for the ctc lexer.
//!
//! A [`Token`] is a closed set of variants, each carrying its own payload.
//! Equality is defined per variant rather than derived: integers compare by
//! value regardless of the radix they were written in, and an
//! [`Token::Invalid`] token is never equal to anything, itself included.

use std::fmt;
use std::sync::LazyLock;

use num_bigint::BigUint;
use rustc_hash::FxHashMap;

/// Reserved words and symbolic keywords.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// `def`
    Def,
    /// `struct`
    Struct,
    /// `:=`
    Assign,
    /// `==`
    Eq,
    /// `!`
    Not,
    /// `!=`
    Neq,
}

impl Keyword {
    /// Every keyword, in declaration order.
    pub const ALL: [Keyword; 6] = [
        Keyword::Def,
        Keyword::Struct,
        Keyword::Assign,
        Keyword::Eq,
        Keyword::Not,
        Keyword::Neq,
    ];

    /// The source spelling of this keyword.
    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::Def => "def",
            Keyword::Struct => "struct",
            Keyword::Assign => ":=",
            Keyword::Eq => "==",
            Keyword::Not => "!",
            Keyword::Neq => "!=",
        }
    }

    /// Returns true for keywords spelled with symbols rather than letters.
    ///
    /// Symbolic keywords are produced by the symbol scanner and never looked
    /// up by spelling.
    pub const fn is_symbolic(self) -> bool {
        matches!(
            self,
            Keyword::Assign | Keyword::Eq | Keyword::Not | Keyword::Neq
        )
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier-shaped keywords, built on first use and read-only afterwards.
static KEYWORDS: LazyLock<FxHashMap<&'static str, Keyword>> = LazyLock::new(|| {
    Keyword::ALL
        .into_iter()
        .filter(|keyword| !keyword.is_symbolic())
        .map(|keyword| (keyword.as_str(), keyword))
        .collect()
});

/// Looks up an identifier spelling in the keyword table.
///
/// # Example
///
/// ```
/// use ctc_lex::token::{keyword_from_ident, Keyword};
///
/// assert_eq!(keyword_from_ident("def"), Some(Keyword::Def));
/// assert_eq!(keyword_from_ident("define"), None);
/// assert_eq!(keyword_from_ident("!="), None);
/// ```
pub fn keyword_from_ident(text: &str) -> Option<Keyword> {
    KEYWORDS.get(text).copied()
}

/// A lexical token.
#[derive(Clone, Debug)]
pub enum Token {
    /// The input is exhausted.
    EndOfInput,
    /// A name that is not a reserved word.
    Identifier(String),
    /// A reserved word or symbolic keyword.
    Keyword(Keyword),
    /// A non-negative integer literal of unbounded size.
    Integer(BigUint),
    /// Input that could not be classified, with an optional explanation.
    Invalid(Option<String>),
}

impl Token {
    /// Builds an identifier token.
    pub fn ident(name: impl Into<String>) -> Self {
        Token::Identifier(name.into())
    }

    /// Builds an integer token.
    pub fn int(value: impl Into<BigUint>) -> Self {
        Token::Integer(value.into())
    }

    /// Returns true for [`Token::EndOfInput`].
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, Token::EndOfInput)
    }

    /// Returns true for [`Token::Invalid`].
    pub fn is_invalid(&self) -> bool {
        matches!(self, Token::Invalid(_))
    }

    /// Lowercase name of the variant.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Token::EndOfInput => "eof",
            Token::Identifier(_) => "ident",
            Token::Keyword(_) => "keyword",
            Token::Integer(_) => "int",
            Token::Invalid(_) => "invalid",
        }
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Token::EndOfInput, Token::EndOfInput) => true,
            (Token::Identifier(a), Token::Identifier(b)) => a == b,
            (Token::Keyword(a), Token::Keyword(b)) => a == b,
            (Token::Integer(a), Token::Integer(b)) => a == b,
            _ => false,
        }
    }
}

impl From<Keyword> for Token {
    fn from(keyword: Keyword) -> Self {
        Token::Keyword(keyword)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::EndOfInput => f.write_str("<eof>"),
            Token::Identifier(name) => write!(f, "ident({})", name),
            Token::Keyword(keyword) => write!(f, "keyword({})", keyword),
            Token::Integer(value) => write!(f, "int({})", value),
            Token::Invalid(None) => f.write_str("invalid"),
            Token::Invalid(Some(message)) => write!(f, "invalid({})", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_table_holds_only_words() {
        assert_eq!(keyword_from_ident("def"), Some(Keyword::Def));
        assert_eq!(keyword_from_ident("struct"), Some(Keyword::Struct));
        for symbolic in [":=", "==", "!", "!="] {
            assert_eq!(keyword_from_ident(symbolic), None);
        }
    }

    #[test]
    fn test_keyword_lookup_is_case_sensitive() {
        assert_eq!(keyword_from_ident("Def"), None);
        assert_eq!(keyword_from_ident("STRUCT"), None);
    }

    #[test]
    fn test_keyword_spellings_round_trip() {
        for keyword in Keyword::ALL.into_iter().filter(|k| !k.is_symbolic()) {
            assert_eq!(keyword_from_ident(keyword.as_str()), Some(keyword));
        }
    }

    #[test]
    fn test_keyword_table_shared_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| keyword_from_ident("struct")))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), Some(Keyword::Struct));
        }
    }

    #[test]
    fn test_integer_equality_ignores_spelling() {
        let hex = BigUint::parse_bytes(b"500", 16).unwrap();
        assert_eq!(Token::Integer(hex), Token::int(1280u32));
        assert_ne!(Token::int(1u32), Token::int(2u32));
    }

    #[test]
    fn test_invalid_never_equal() {
        let invalid = Token::Invalid(None);
        assert_ne!(invalid, invalid.clone());
        assert_ne!(
            Token::Invalid(Some("x".into())),
            Token::Invalid(Some("x".into()))
        );
        assert_ne!(invalid, Token::EndOfInput);
    }

    #[test]
    fn test_variant_mismatch_not_equal() {
        assert_ne!(Token::ident("def"), Token::Keyword(Keyword::Def));
        assert_ne!(Token::ident("0"), Token::int(0u32));
        assert_eq!(Token::EndOfInput, Token::EndOfInput);
    }

    #[test]
    fn test_display() {
        assert_eq!(Token::EndOfInput.to_string(), "<eof>");
        assert_eq!(Token::ident("x").to_string(), "ident(x)");
        assert_eq!(Token::from(Keyword::Neq).to_string(), "keyword(!=)");
        assert_eq!(Token::int(500u32).to_string(), "int(500)");
        assert_eq!(Token::Invalid(None).to_string(), "invalid");
        assert_eq!(
            Token::Invalid(Some("bad".into())).to_string(),
            "invalid(bad)"
        );
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Token::EndOfInput.kind_name(), "eof");
        assert_eq!(Token::Keyword(Keyword::Def).kind_name(), "keyword");
        assert!(Token::Invalid(None).is_invalid());
        assert!(Token::EndOfInput.is_end_of_input());
    }
}
