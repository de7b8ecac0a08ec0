//! Check command implementation.
//!
//! Lexes each input and reports every invalid token as an error diagnostic
//! in `file:line:column: error: message` form.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use ctc_util::{Diagnostic, Handler, Level};

use crate::commands::common::{error_messages, invalid_message, Input};
use crate::commands::traits::{self, Command, CommandDescription};
use crate::error::{CttError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Files to check.
    pub inputs: Vec<PathBuf>,
    /// Stop printing after this many diagnostics; 0 prints all.
    pub max_errors: usize,
}

/// Totals gathered by a check run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckReport {
    /// Inputs lexed.
    pub files: usize,
    /// Tokens produced across all inputs.
    pub tokens: usize,
    /// Invalid tokens across all inputs.
    pub invalid: usize,
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Lexes one input, emitting a diagnostic per invalid token.
    ///
    /// Returns the number of tokens produced.
    fn check_input(&self, path: &Path, handler: &Handler) -> Result<usize> {
        let tokens = Input::open(Some(path))?.lex()?;

        for (token, span) in &tokens {
            if let ctc_lex::Token::Invalid(reason) = token {
                handler.emit(Diagnostic::error(invalid_message(reason.as_deref()), *span));
            }
        }

        Ok(tokens.len())
    }

    /// Checks every input, printing diagnostics to `out`.
    pub fn write_to(&self, out: &mut impl Write) -> Result<CheckReport> {
        let mut report = CheckReport::default();
        let mut printed = 0usize;
        let mut truncated = false;

        for path in &self.args.inputs {
            let handler = Handler::new();
            report.tokens += self.check_input(path, &handler)?;
            report.files += 1;
            report.invalid += handler.error_count();

            for diagnostic in handler.diagnostics() {
                if self.args.max_errors != 0 && printed >= self.args.max_errors {
                    truncated = true;
                    break;
                }
                write_diagnostic(out, path, &diagnostic)?;
                printed += 1;
            }
        }

        if truncated {
            writeln!(
                out,
                "{}: {} ({} total)",
                Level::Note,
                error_messages::MORE_ERRORS,
                report.invalid
            )?;
        }

        out.flush()?;
        Ok(report)
    }
}

fn write_diagnostic(out: &mut impl Write, path: &Path, diagnostic: &Diagnostic) -> Result<()> {
    writeln!(
        out,
        "{}:{}: {}: {}",
        path.display(),
        diagnostic.span,
        diagnostic.level,
        diagnostic.message
    )?;
    for note in &diagnostic.notes {
        writeln!(out, "  = {}: {}", Level::Note, note)?;
    }
    Ok(())
}

impl Command for CheckCommand {
    type Args = CheckArgs;
    type Output = CheckReport;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        let stderr = io::stderr();
        let mut out = stderr.lock();
        self.write_to(&mut out)
    }

    fn name() -> &'static str {
        "check"
    }
}

impl CommandDescription for CheckCommand {
    fn description() -> &'static str {
        "Report tokens the lexer cannot classify"
    }
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<()> {
    let report = traits::run::<CheckCommand>(args)?;
    tracing::info!(
        files = report.files,
        tokens = report.tokens,
        invalid = report.invalid,
        "check finished"
    );

    ensure_clean(&report)
}

/// Fails when the report counted any invalid token.
fn ensure_clean(report: &CheckReport) -> Result<()> {
    if report.invalid > 0 {
        return Err(CttError::InvalidTokens {
            count: report.invalid,
        });
    }
    Ok(())
}
