//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! Phases report problems by building a [`Diagnostic`] and handing it to a
//! [`Handler`], which collects them for the driver to render at the end.
//!
//! # Examples
//!
//! ```
//! use ctc_util::diagnostic::{Diagnostic, Handler};
//! use ctc_util::Span;
//!
//! let handler = Handler::new();
//! handler.emit(Diagnostic::error("unrecognized symbol", Span::point(0, 1, 1)));
//!
//! if handler.has_errors() {
//!     eprintln!("lexing failed with {} error(s)", handler.error_count());
//! }
//! ```

mod level;

pub use level::Level;

use crate::Span;
use std::cell::RefCell;
use std::fmt;

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Additional notes for context
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            notes: Vec::new(),
        }
    }

    /// Create an error diagnostic
    ///
    /// # Examples
    ///
    /// ```
    /// use ctc_util::diagnostic::{Diagnostic, Level};
    /// use ctc_util::Span;
    ///
    /// let diag = Diagnostic::error("something went wrong", Span::DUMMY);
    /// assert_eq!(diag.level, Level::Error);
    /// ```
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    /// Attach a note to this diagnostic
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} at {}", self.level, self.message, self.span)?;
        for note in &self.notes {
            write!(f, "\n  = {}: {}", Level::Note, note)?;
        }
        Ok(())
    }
}

/// Diagnostic handler - collects diagnostics reported by a phase
///
/// The handler is meant to be owned by a single driver thread, like the
/// lexer it collects from, so it uses `RefCell` rather than a lock.
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Emit a diagnostic
    ///
    /// Every diagnostic is also forwarded to `tracing`: errors at `warn`,
    /// warnings and notes at `trace`.
    pub fn emit(&self, diagnostic: Diagnostic) {
        match diagnostic.level {
            Level::Error => tracing::warn!(location = %diagnostic.span, "error: {}", diagnostic.message),
            Level::Warning | Level::Note => {
                tracing::trace!(location = %diagnostic.span, "{}: {}", diagnostic.level, diagnostic.message)
            },
        }
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    ///
    /// # Examples
    ///
    /// ```
    /// use ctc_util::diagnostic::Handler;
    ///
    /// let handler = Handler::new();
    /// assert!(!handler.has_errors());
    /// ```
    pub fn has_errors(&self) -> bool {
        self.diagnostics.borrow().iter().any(|d| d.level.is_error())
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level.is_error())
            .count()
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level.is_warning())
            .count()
    }

    /// Get all diagnostics in emission order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Clear all diagnostics
    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}
