//! Error handling module for the ctt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the ctt CLI application.
#[derive(Error, Debug)]
pub enum CttError {
    /// Error when the configuration cannot be found, read, or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when an input file cannot be opened or read.
    #[error("Cannot read {}: {source}", path.display())]
    Input {
        /// The input that failed.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error when `check` found tokens the lexer could not classify.
    #[error("{count} invalid token(s) found")]
    InvalidTokens {
        /// Total invalid tokens across all inputs.
        count: usize,
    },

    /// Error when the tracing subscriber cannot be installed.
    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

/// Result type alias using CttError.
pub type Result<T> = std::result::Result<T, CttError>;
