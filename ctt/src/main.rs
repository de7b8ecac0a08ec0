//! ctt - command-line driver for the ctc lexer.
//!
//! This is the main entry point for the ctt CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::common::OutputFormat;
use commands::{run_check, run_tokens, CheckArgs, TokensArgs};
use config::Config;
use error::{CttError, Result};

/// ctt - inspect source files with the ctc lexer
///
/// ctt lists the tokens of a source file and checks files for input the
/// lexer cannot classify.
#[derive(Parser, Debug)]
#[command(name = "ctt")]
#[command(author = "Cthulhu Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Command-line driver for the ctc lexer", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "CTT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "CTT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "CTT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the ctt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List the tokens of a source file
    ///
    /// Reads the file, or stdin when no file (or `-`) is given, and prints
    /// every token up to end of input.
    Tokens(TokensCommand),

    /// Report tokens the lexer cannot classify
    ///
    /// Prints `file:line:column: error: message` for every invalid token
    /// and exits with an error if any were found.
    Check(CheckCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Input file (default: stdin)
    input: Option<PathBuf>,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Prefix each plain line with `line:column`
    #[arg(short, long)]
    positions: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Input files to check
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Maximum number of errors to print, 0 for all (default: from config)
    #[arg(short, long)]
    max_errors: Option<usize>,
}

/// Main entry point for the ctt CLI.
///
/// Parses command-line arguments, initializes logging, loads configuration,
/// and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.no_color)?;

    // Load configuration
    let config = load_config(cli.config.as_deref())?;

    // Execute the selected command
    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so token listings on stdout stay clean.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = EnvFilter::new(log_directives(verbose));

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| CttError::Logging(e.to_string()))?;

    Ok(())
}

/// Filter directives for the subscriber.
///
/// `check` already prints every diagnostic, so the handler's mirrored
/// warnings only show up in verbose mode.
fn log_directives(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info,ctc_util=error"
    }
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => run_tokens(tokens_args(args, &config)),
        Commands::Check(args) => run_check(check_args(args, &config)),
    }
}

/// Merge tokens flags over the configured defaults.
fn tokens_args(args: TokensCommand, config: &Config) -> TokensArgs {
    TokensArgs {
        input: args.input,
        format: args.format.unwrap_or(config.output.format),
        positions: args.positions || config.output.positions,
    }
}

/// Merge check flags over the configured defaults.
fn check_args(args: CheckCommand, config: &Config) -> CheckArgs {
    CheckArgs {
        inputs: args.input,
        max_errors: args.max_errors.unwrap_or(config.check.max_errors),
    }
}
