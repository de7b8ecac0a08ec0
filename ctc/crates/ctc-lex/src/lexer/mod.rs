//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct and dispatch
//! - `trivia` - Whitespace and `#` comment skipping
//! - `identifier` - Identifier and keyword lexing
//! - `number` - Integer literal lexing
//! - `operator` - Symbol and symbolic keyword lexing
//! - `string` - String literal entry point

mod core;
mod identifier;
mod number;
mod operator;
mod string;
mod trivia;

pub use self::core::Lexer;
pub use number::{parse_digits, LiteralError};
