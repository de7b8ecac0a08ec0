//! ctc-util - Core Utilities and Foundation Types
//!
//! Types shared by every phase of the ctc front end:
//!
//! - [`span`] - character-offset spans with line/column information
//! - [`diagnostic`] - diagnostic records and the [`Handler`] that collects them
//!
//! These types carry no phase-specific knowledge. The lexer produces spans
//! and the driver turns invalid tokens into diagnostics.

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, Handler, Level};
pub use span::Span;
