//! Span module - Source location tracking.
//!
//! Offsets are counted in characters, not bytes: the lexer reads from a
//! character stream and never sees the byte layout of its input.
//!
//! # Examples
//!
//! ```
//! use ctc_util::span::Span;
//!
//! let span = Span::new(10, 20, 1, 5);
//! assert_eq!(span.len(), 10);
//! assert_eq!(span.to_string(), "1:5");
//! ```

use std::fmt;

/// Source location span
///
/// A `Span` represents a range of characters in the input, identified by:
/// - Character offsets (start, end), end exclusive
/// - Line and column of the first character (for human-readable output)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start character offset (0-based)
    pub start: usize,
    /// End character offset (0-based, exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    ///
    /// # Examples
    ///
    /// ```
    /// use ctc_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert_eq!(Span::DUMMY.end, 0);
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start character offset
    /// * `end` - End character offset (exclusive)
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create an empty span at a single location
    ///
    /// # Examples
    ///
    /// ```
    /// use ctc_util::span::Span;
    ///
    /// let point = Span::point(4, 2, 1);
    /// assert!(point.is_empty());
    /// assert_eq!(point.start, 4);
    /// ```
    #[inline]
    pub const fn point(offset: usize, line: u32, column: u32) -> Self {
        Self::new(offset, offset, line, column)
    }

    /// Returns true if the span covers no characters
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Number of characters covered by the span
    #[inline]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if `offset` falls inside the span
    #[inline]
    pub const fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }

    /// Extend this span so it ends where `other` ends.
    ///
    /// The line and column of the result are those of whichever span
    /// starts first.
    ///
    /// # Examples
    ///
    /// ```
    /// use ctc_util::span::Span;
    ///
    /// let a = Span::new(0, 3, 1, 1);
    /// let b = Span::new(4, 7, 1, 5);
    /// assert_eq!(a.to(b), Span::new(0, 7, 1, 1));
    /// ```
    pub fn to(self, other: Span) -> Span {
        let first = if self.start <= other.start { self } else { other };
        Span {
            start: first.start,
            end: self.end.max(other.end),
            line: first.line,
            column: first.column,
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
