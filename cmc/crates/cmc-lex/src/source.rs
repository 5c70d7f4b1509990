//! Byte source for traversing C-minus input.
//!
//! This module provides the `Source` struct, a pull-based cursor over raw
//! input bytes. It keeps exactly one byte of lookahead, one byte of
//! pushback, and the current line number.

use std::io::{self, BufRead};

use tracing::warn;

/// A cursor over an input stream with one byte of lookahead.
///
/// The lookahead is `None` once the input is exhausted. The line counter
/// is bumped whenever a newline enters the lookahead slot, so it always
/// describes the line of the current lookahead byte.
///
/// # Example
///
/// ```
/// use cmc_lex::source::Source;
///
/// let mut source = Source::from_bytes(b"a\nb");
/// assert_eq!(source.current(), Some(b'a'));
/// source.advance();
/// assert_eq!(source.current(), Some(b'\n'));
/// assert_eq!(source.line(), 2);
/// ```
pub struct Source<R> {
    /// The underlying reader.
    reader: R,

    /// Current lookahead byte, `None` at end of input.
    current: Option<u8>,

    /// Byte returned by `pushback`, re-read by the next `advance`.
    pushed: Option<u8>,

    /// Current line number (1-based).
    line: u32,

    /// Set once the reader reported end of input or failed.
    exhausted: bool,

    /// Read failure that ended the input early.
    error: Option<io::Error>,
}

impl<R: BufRead> Source<R> {
    /// Creates a source over `reader` and reads the first byte into the
    /// lookahead slot.
    pub fn new(reader: R) -> Self {
        let mut source = Self {
            reader,
            current: None,
            pushed: None,
            line: 1,
            exhausted: false,
            error: None,
        };
        source.advance();
        source
    }

    /// Reads the next byte into the lookahead slot.
    ///
    /// A pushed-back byte is re-read before the reader is polled again.
    /// At end of input this keeps yielding `None`.
    pub fn advance(&mut self) {
        let next = match self.pushed.take() {
            Some(b) => Some(b),
            None => self.read_byte(),
        };
        if next == Some(b'\n') {
            self.line += 1;
        }
        self.current = next;
    }

    /// Returns the lookahead byte to the input and reinstates `previous`
    /// as the lookahead.
    ///
    /// Undoes the line increment if the returned byte was a newline. Only
    /// one byte may be pushed back between two calls to `advance`.
    ///
    /// # Example
    ///
    /// ```
    /// use cmc_lex::source::Source;
    ///
    /// let mut source = Source::from_bytes(b"/\n");
    /// source.advance();
    /// assert_eq!(source.line(), 2);
    /// source.pushback(b'/');
    /// assert_eq!(source.current(), Some(b'/'));
    /// assert_eq!(source.line(), 1);
    /// source.advance();
    /// assert_eq!(source.current(), Some(b'\n'));
    /// assert_eq!(source.line(), 2);
    /// ```
    pub fn pushback(&mut self, previous: u8) {
        debug_assert!(
            self.pushed.is_none(),
            "only one byte of pushback is supported"
        );
        if let Some(b) = self.current {
            if b == b'\n' {
                self.line -= 1;
            }
            self.pushed = Some(b);
        }
        self.current = Some(previous);
    }

    fn read_byte(&mut self) -> Option<u8> {
        if self.exhausted {
            return None;
        }
        loop {
            let byte = match self.reader.fill_buf() {
                Ok(buf) => buf.first().copied(),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    warn!(line = self.line, error = %e, "read failed, treating as end of input");
                    self.error = Some(e);
                    self.exhausted = true;
                    return None;
                },
            };
            match byte {
                Some(b) => {
                    self.reader.consume(1);
                    return Some(b);
                },
                None => {
                    self.exhausted = true;
                    return None;
                },
            }
        }
    }
}

impl<'a> Source<&'a [u8]> {
    /// Creates a source over an in-memory buffer.
    pub fn from_bytes(bytes: &'a [u8]) -> Self {
        Self::new(bytes)
    }
}

impl<R> Source<R> {
    /// Returns the lookahead byte, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.current
    }

    /// Returns true if the lookahead is the end-of-input sentinel.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current.is_none()
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Takes the read error that ended the input, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }
}
