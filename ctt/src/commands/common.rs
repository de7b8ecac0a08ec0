//! Common types and utilities for ctt commands.
//!
//! This module provides the input handling and token rendering shared by
//! every command.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use ctc_lex::{Lexer, ReadSource, Token};
use ctc_util::Span;
use serde::{Deserialize, Serialize};

use crate::error::{CttError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Supported token listing formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One token per line
    #[default]
    Plain,
    /// A JSON array of token objects
    Json,
}

// ============================================================================
// Input
// ============================================================================

/// Name used for standard input in messages.
pub const STDIN_NAME: &str = "<stdin>";

/// An opened input: a display name plus its byte stream.
pub struct Input {
    /// File path or [`STDIN_NAME`].
    pub name: PathBuf,
    reader: Box<dyn Read>,
}

impl Input {
    /// Opens `path`, or standard input when `path` is absent or `-`.
    pub fn open(path: Option<&Path>) -> Result<Self> {
        match path {
            None => Ok(Self::stdin()),
            Some(path) if path == Path::new("-") => Ok(Self::stdin()),
            Some(path) => {
                let file = File::open(path).map_err(|source| CttError::Input {
                    path: path.to_path_buf(),
                    source,
                })?;
                Ok(Self {
                    name: path.to_path_buf(),
                    reader: Box::new(file),
                })
            },
        }
    }

    fn stdin() -> Self {
        Self {
            name: PathBuf::from(STDIN_NAME),
            reader: Box::new(io::stdin()),
        }
    }

    /// Lexes the whole input, pairing each token with its span.
    ///
    /// The trailing end-of-input token is not included. A read failure part
    /// way through is reported as an error rather than a short token list.
    pub fn lex(self) -> Result<Vec<(Token, Span)>> {
        let name = self.name;
        let mut lexer = Lexer::new(ReadSource::new(self.reader));

        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            if token.is_end_of_input() {
                break;
            }
            tokens.push((token, lexer.token_span()));
        }

        if let Some(err) = lexer.source().error() {
            return Err(CttError::Input {
                path: name,
                source: io::Error::new(err.kind(), err.to_string()),
            });
        }

        tracing::debug!(input = %name.display(), count = tokens.len(), "lexed input");
        Ok(tokens)
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// JSON shape of one token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenRecord {
    /// Variant name, see [`Token::kind_name`].
    pub kind: &'static str,
    /// Spelling, value, or invalid-token reason.
    pub value: Option<String>,
    /// 1-based line of the first character.
    pub line: u32,
    /// 1-based column of the first character.
    pub column: u32,
}

impl TokenRecord {
    /// Builds the record for `token` found at `span`.
    pub fn new(token: &Token, span: Span) -> Self {
        Self {
            kind: token.kind_name(),
            value: token_value(token),
            line: span.line,
            column: span.column,
        }
    }
}

/// The payload of a token as text, if it carries one.
pub fn token_value(token: &Token) -> Option<String> {
    match token {
        Token::EndOfInput => None,
        Token::Identifier(name) => Some(name.clone()),
        Token::Keyword(keyword) => Some(keyword.as_str().to_string()),
        Token::Integer(value) => Some(value.to_string()),
        Token::Invalid(reason) => reason.clone(),
    }
}

/// Renders one plain listing line.
pub fn render_plain(token: &Token, span: Span, positions: bool) -> String {
    if positions {
        format!("{}\t{}", span, token)
    } else {
        token.to_string()
    }
}

/// Renders the whole listing as a JSON array.
pub fn render_json(tokens: &[(Token, Span)]) -> Result<String> {
    let records: Vec<TokenRecord> = tokens
        .iter()
        .map(|(token, span)| TokenRecord::new(token, *span))
        .collect();
    Ok(serde_json::to_string_pretty(&records)?)
}

/// The diagnostic message for an invalid token.
pub fn invalid_message(reason: Option<&str>) -> String {
    match reason {
        Some(reason) => reason.to_string(),
        None => error_messages::UNRECOGNIZED_SYMBOL.to_string(),
    }
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Invalid token with no reason attached.
    pub const UNRECOGNIZED_SYMBOL: &str = "unrecognized symbol";

    /// Note attached when diagnostics were cut off.
    pub const MORE_ERRORS: &str = "further errors not shown";
}
