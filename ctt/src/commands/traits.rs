//! Command trait for the ctt CLI.
//!
//! Every subcommand handler implements [`Command`] so `main` can drive them
//! the same way.

use crate::error::Result;

/// Standard command trait that all ctt commands implement.
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a new command instance with the given arguments.
    fn new(args: Self::Args) -> Self;

    /// Execute the command.
    fn execute(&self) -> Result<Self::Output>;

    /// Get the command name.
    fn name() -> &'static str;
}

/// Human-readable description of a command.
pub trait CommandDescription {
    /// A brief one-line description.
    fn description() -> &'static str;
}

/// Runs a command built from `args`.
pub fn run<C: Command + CommandDescription>(args: C::Args) -> Result<C::Output> {
    tracing::debug!(command = C::name(), description = C::description(), "running command");
    C::new(args).execute()
}
