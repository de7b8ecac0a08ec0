//! Command modules for the ctt CLI.
//!
//! Each subcommand is implemented in its own file following the pattern in
//! [`traits`].

pub mod common;
pub mod traits;

pub mod check;
pub mod tokens;

// Re-export command types and functions
pub use check::{run_check, CheckArgs};
pub use tokens::{run_tokens, TokensArgs};
