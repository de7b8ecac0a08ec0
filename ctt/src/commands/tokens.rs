//! Tokens command implementation.
//!
//! Lexes one input and lists its tokens on stdout.

use std::io::{self, Write};
use std::path::PathBuf;

use crate::commands::common::{render_json, render_plain, Input, OutputFormat};
use crate::commands::traits::{self, Command, CommandDescription};
use crate::error::Result;

/// Arguments for the tokens command.
#[derive(Debug, Clone, Default)]
pub struct TokensArgs {
    /// Input file; stdin when absent or `-`.
    pub input: Option<PathBuf>,
    /// Listing format.
    pub format: OutputFormat,
    /// Prefix plain lines with `line:column`.
    pub positions: bool,
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
}

impl TokensCommand {
    /// Lexes the input and writes the listing to `out`.
    ///
    /// Returns the number of tokens listed.
    pub fn write_to(&self, out: &mut impl Write) -> Result<usize> {
        let tokens = Input::open(self.args.input.as_deref())?.lex()?;

        match self.args.format {
            OutputFormat::Plain => {
                for (token, span) in &tokens {
                    writeln!(out, "{}", render_plain(token, *span, self.args.positions))?;
                }
            },
            OutputFormat::Json => {
                writeln!(out, "{}", render_json(&tokens)?)?;
            },
        }

        out.flush()?;
        Ok(tokens.len())
    }
}

impl Command for TokensCommand {
    type Args = TokensArgs;
    type Output = usize;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out)
    }

    fn name() -> &'static str {
        "tokens"
    }
}

impl CommandDescription for TokensCommand {
    fn description() -> &'static str {
        "List the tokens of a source file"
    }
}

/// Run the tokens command.
pub fn run_tokens(args: TokensArgs) -> Result<()> {
    let count = traits::run::<TokensCommand>(args)?;
    tracing::info!(count, "listed tokens");
    Ok(())
}
