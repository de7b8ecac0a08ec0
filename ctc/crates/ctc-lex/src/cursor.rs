//! Character cursor with one character of lookahead.
//!
//! The cursor owns its [`CharSource`] and keeps exactly one unconsumed
//! character buffered. End of input is the `None` sentinel, which no source
//! character can collide with (U+0000 included). Every scanner in the lexer
//! is written against the three primitives [`Cursor::peek`],
//! [`Cursor::get`], and [`Cursor::eat`].

use ctc_util::Span;

use crate::source::CharSource;

/// A cursor over a character source.
///
/// Besides the lookahead, the cursor tracks where that lookahead sits in the
/// input: its 0-based character offset and its 1-based line and column.
///
/// # Example
///
/// ```
/// use ctc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("!=".chars());
/// assert_eq!(cursor.peek(), Some('!'));
/// assert_eq!(cursor.get(), Some('!'));
/// assert!(cursor.eat('='));
/// assert_eq!(cursor.get(), None);
/// ```
pub struct Cursor<S> {
    /// The character source being traversed.
    source: S,

    /// The next unconsumed character, `None` at end of input.
    ahead: Option<char>,

    /// Set once the source has reported end of input.
    exhausted: bool,

    /// Character offset of `ahead`.
    offset: usize,

    /// Line of `ahead` (1-based).
    line: u32,

    /// Column of `ahead` (1-based, in characters).
    column: u32,
}

impl<S: CharSource> Cursor<S> {
    /// Creates a cursor and primes the lookahead from `source`.
    pub fn new(source: S) -> Self {
        let mut cursor = Self {
            source,
            ahead: None,
            exhausted: false,
            offset: 0,
            line: 1,
            column: 1,
        };
        cursor.ahead = cursor.read();
        cursor
    }

    /// Pulls from the source, never touching it again after exhaustion.
    fn read(&mut self) -> Option<char> {
        if self.exhausted {
            return None;
        }
        let next = self.source.next_char();
        if next.is_none() {
            self.exhausted = true;
        }
        next
    }

    /// Returns the lookahead without consuming it.
    ///
    /// ```
    /// use ctc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("a".chars());
    /// assert_eq!(cursor.peek(), Some('a'));
    /// assert_eq!(cursor.peek(), Some('a'));
    /// ```
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.ahead
    }

    /// Consumes and returns the lookahead, then refills it.
    ///
    /// At end of input this returns `None` and leaves the cursor where it
    /// is, however many times it is called.
    pub fn get(&mut self) -> Option<char> {
        let current = self.ahead?;

        self.offset += 1;
        // Line and column stop at u32::MAX rather than wrap.
        if current == '\n' {
            self.line = self.line.saturating_add(1);
            self.column = 1;
        } else {
            self.column = self.column.saturating_add(1);
        }

        self.ahead = self.read();
        Some(current)
    }

    /// Consumes the lookahead if it equals `expected`.
    ///
    /// Returns whether anything was consumed. On a mismatch the cursor is
    /// left unchanged.
    ///
    /// ```
    /// use ctc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new(":=".chars());
    /// assert!(!cursor.eat('='));
    /// assert!(cursor.eat(':'));
    /// assert!(cursor.eat('='));
    /// ```
    pub fn eat(&mut self, expected: char) -> bool {
        if self.ahead == Some(expected) {
            self.get();
            true
        } else {
            false
        }
    }

    /// Consumes characters into `buf` while the lookahead satisfies `pred`.
    pub fn eat_while(&mut self, buf: &mut String, mut pred: impl FnMut(char) -> bool) {
        while let Some(c) = self.ahead.filter(|&c| pred(c)) {
            buf.push(c);
            self.get();
        }
    }

    /// Returns true once the lookahead is the end-of-input sentinel.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.ahead.is_none()
    }

    /// Character offset of the lookahead.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Line of the lookahead (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Column of the lookahead (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// The lookahead position as an empty span.
    pub fn location(&self) -> Span {
        Span::point(self.offset, self.line, self.column)
    }

    /// Borrows the underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }
}
