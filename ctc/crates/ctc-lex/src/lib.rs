//! ctc-lex - Lexical Analyzer for the ctc language
//!
//! This crate turns a stream of characters into a stream of tokens for the
//! parser. It reads its input one character at a time through a
//! [`CharSource`], so the whole text never has to be in memory.
//!
//! # Example Usage
//!
//! ```
//! use ctc_lex::{Keyword, Lexer, Token};
//!
//! let mut lexer = Lexer::for_str("def x := 0x500 # trailing comment");
//! assert_eq!(lexer.next_token(), Token::Keyword(Keyword::Def));
//! assert_eq!(lexer.next_token(), Token::ident("x"));
//! assert_eq!(lexer.next_token(), Token::Keyword(Keyword::Assign));
//! assert_eq!(lexer.next_token(), Token::int(1280u32));
//! assert_eq!(lexer.next_token(), Token::EndOfInput);
//!
//! // Or collect everything before end of input
//! let tokens: Vec<Token> = Lexer::for_str("!x").collect();
//! assert_eq!(tokens.len(), 2);
//! ```
//!
//! # Module Structure
//!
//! - [`source`] - Character source trait and a UTF-8 reader adapter
//! - [`cursor`] - One-character lookahead over a source
//! - [`token`] - Token and keyword definitions
//! - [`lexer`] - Main lexer implementation
//! - [`unicode`] - Character classes
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! **Words**: `def`, `struct`
//!
//! **Symbols**: `:=`, `==`, `!`, `!=`
//!
//! ## Identifiers
//!
//! A letter or `_` followed by letters, digits, or `_`.
//!
//! ## Literals
//!
//! - **Integer**: `500`, `0x500`, `0b1100`, unbounded in size
//!
//! ## Special
//!
//! - **EndOfInput**: returned on every call once the source is exhausted
//! - **Invalid**: anything that could not be classified; lexing continues
//!
//! Whitespace and `#` line comments are skipped between tokens.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod lexer;
pub mod source;
pub mod token;
pub mod unicode;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use lexer::{Lexer, LiteralError};
pub use source::{CharSource, ReadSource};
pub use token::{keyword_from_ident, Keyword, Token};
