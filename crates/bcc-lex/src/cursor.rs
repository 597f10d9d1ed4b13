//! Character cursor for traversing source input.
//!
//! This module provides the `Cursor` struct which pulls bytes out of any
//! [`Read`] source one at a time while tracking line/column information for
//! error reporting. It supports exactly one level of pushback.

use std::fmt;
use std::io::{Bytes, Read};

/// One character read from the source, or `None` once the source is exhausted.
pub type Codepoint = Option<u8>;

/// A line/column location in the source.
///
/// Both fields are 1-based. `line` counts the newlines consumed so far and
/// `column` counts the bytes consumed since the last newline, so a multibyte
/// UTF-8 character advances it by its encoded length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based, in bytes).
    pub column: u32,
}

impl Position {
    /// Creates a position at the given line and column.
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// The position before anything has been consumed, `1:1`.
    #[inline]
    pub const fn start() -> Self {
        Self::new(1, 1)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A cursor for traversing a byte source character by character.
///
/// The cursor owns its source for the lifetime of one pass. Every [`get`]
/// records the position it started from, so that a following [`unget`] can
/// put the character back and restore the position exactly, including when
/// the character was a newline.
///
/// # Example
///
/// ```
/// use bcc_lex::cursor::{Cursor, Position};
///
/// let mut cursor = Cursor::new("ab\ncd".as_bytes());
///
/// assert_eq!(cursor.get(), Some(b'a'));
/// assert_eq!(cursor.get(), Some(b'b'));
/// assert_eq!(cursor.get(), Some(b'\n'));
/// assert_eq!(cursor.position(), Position::new(2, 1));
///
/// cursor.unget();
/// assert_eq!(cursor.position(), Position::new(1, 3));
/// ```
///
/// [`get`]: Cursor::get
/// [`unget`]: Cursor::unget
pub struct Cursor<R> {
    /// The source being traversed.
    source: Bytes<R>,

    /// A codepoint that was pushed back or peeked and not yet consumed.
    pending: Option<Codepoint>,

    /// Current location.
    position: Position,

    /// The last consumed codepoint and the position before it was consumed.
    last: Option<(Codepoint, Position)>,
}

impl<R: Read> Cursor<R> {
    /// Creates a new cursor over an already-open source.
    ///
    /// Pass a buffered reader for files; the cursor reads one byte at a time.
    pub fn new(source: R) -> Self {
        Self {
            source: source.bytes(),
            pending: None,
            position: Position::start(),
            last: None,
        }
    }

    /// Consumes and returns the next character.
    ///
    /// A newline moves to column 1 of the next line, any other byte advances
    /// the column by one. End of stream returns `None` and leaves the
    /// position untouched.
    ///
    /// # Panics
    ///
    /// Panics if the underlying source fails with an I/O error. The source is
    /// expected to be a complete, readable buffer, so a failing read is an
    /// environment fault rather than a lexical one.
    pub fn get(&mut self) -> Codepoint {
        let before = self.position;
        let codepoint = match self.pending.take() {
            Some(codepoint) => codepoint,
            None => self.read(),
        };

        match codepoint {
            Some(b'\n') => {
                self.position.line += 1;
                self.position.column = 1;
            },
            Some(_) => self.position.column += 1,
            None => {},
        }

        self.last = Some((codepoint, before));
        codepoint
    }

    /// Pushes the most recently consumed character back onto the source.
    ///
    /// Restores the position to what it was before the matching [`get`].
    /// Only one level of pushback exists: calling `unget` twice without a
    /// `get` in between, or after a [`peek`], is a caller bug.
    ///
    /// [`get`]: Cursor::get
    /// [`peek`]: Cursor::peek
    pub fn unget(&mut self) {
        match self.last.take() {
            Some((codepoint, before)) => {
                debug_assert!(self.pending.is_none(), "pushback slot already occupied");
                self.pending = Some(codepoint);
                self.position = before;
            },
            None => debug_assert!(false, "unget without a preceding get"),
        }
    }

    /// Returns the next character without consuming it.
    ///
    /// The position does not move. Peeking occupies the pushback slot, so it
    /// discards the snapshot an `unget` would have restored.
    pub fn peek(&mut self) -> Codepoint {
        self.last = None;
        match self.pending {
            Some(codepoint) => codepoint,
            None => {
                let codepoint = self.read();
                self.pending = Some(codepoint);
                codepoint
            },
        }
    }

    /// Returns the current position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.position.line
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.position.column
    }

    fn read(&mut self) -> Codepoint {
        match self.source.next() {
            None => None,
            Some(Ok(byte)) => Some(byte),
            Some(Err(err)) => {
                tracing::error!(error = %err, position = %self.position, "source read failed");
                panic!("fatal I/O error while reading source at {}: {}", self.position, err);
            },
        }
    }
}
