//! Character sources feeding the cursor.
//!
//! The lexer does not own text; it pulls characters one at a time from a
//! [`CharSource`]. Any `Iterator<Item = char>` already is one, so in-memory
//! text is lexed through `str::chars`. [`ReadSource`] adapts a byte reader
//! (a file, stdin, a socket) by decoding UTF-8 on the fly.

use std::io::{self, BufRead, BufReader, Read};

/// A pull-based stream of characters.
///
/// `None` signals end of input. Implementations must keep returning `None`
/// if they are called again after reporting it.
pub trait CharSource {
    /// Returns the next character, or `None` once the input is exhausted.
    fn next_char(&mut self) -> Option<char>;
}

impl<I> CharSource for I
where
    I: Iterator<Item = char>,
{
    #[inline]
    fn next_char(&mut self) -> Option<char> {
        self.next()
    }
}

/// A [`CharSource`] that decodes UTF-8 from any [`Read`] implementation.
///
/// Decoding never fails: malformed sequences come out as
/// `U+FFFD REPLACEMENT CHARACTER`. A read error ends the stream. The error
/// is kept so the driver can still report it once lexing is done.
///
/// # Example
///
/// ```
/// use ctc_lex::source::{CharSource, ReadSource};
///
/// let mut source = ReadSource::new("né".as_bytes());
/// assert_eq!(source.next_char(), Some('n'));
/// assert_eq!(source.next_char(), Some('é'));
/// assert_eq!(source.next_char(), None);
/// assert!(source.error().is_none());
/// ```
pub struct ReadSource<R> {
    reader: BufReader<R>,
    error: Option<io::Error>,
    done: bool,
}

impl<R: Read> ReadSource<R> {
    /// Wraps a reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            error: None,
            done: false,
        }
    }

    /// The I/O error that ended the stream, if any.
    pub fn error(&self) -> Option<&io::Error> {
        self.error.as_ref()
    }

    /// Takes the I/O error that ended the stream, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    fn fail(&mut self, err: io::Error) {
        tracing::warn!(error = %err, "character source failed, treating as end of input");
        self.error = Some(err);
        self.done = true;
    }

    fn peek_byte(&mut self) -> Option<u8> {
        while !self.done {
            match self.reader.fill_buf().map(|buf| buf.first().copied()) {
                Ok(Some(byte)) => return Some(byte),
                Ok(None) => self.done = true,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {},
                Err(err) => self.fail(err),
            }
        }
        None
    }

    fn next_byte(&mut self) -> Option<u8> {
        let byte = self.peek_byte()?;
        self.reader.consume(1);
        Some(byte)
    }
}

/// Length of the UTF-8 sequence introduced by `lead`, or 0 if `lead` cannot
/// start a sequence.
fn utf8_width(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}

impl<R: Read> Iterator for ReadSource<R> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let lead = self.next_byte()?;
        let width = utf8_width(lead);
        match width {
            0 => return Some(char::REPLACEMENT_CHARACTER),
            1 => return Some(char::from(lead)),
            _ => {},
        }

        let mut bytes = [lead, 0, 0, 0];
        for slot in bytes.iter_mut().take(width).skip(1) {
            // A byte that is not a continuation starts the next character,
            // so it is left in the buffer.
            match self.peek_byte() {
                Some(byte) if byte & 0xC0 == 0x80 => {
                    self.reader.consume(1);
                    *slot = byte;
                },
                _ => return Some(char::REPLACEMENT_CHARACTER),
            }
        }

        let decoded = std::str::from_utf8(&bytes[..width])
            .ok()
            .and_then(|s| s.chars().next());
        Some(decoded.unwrap_or(char::REPLACEMENT_CHARACTER))
    }
}
