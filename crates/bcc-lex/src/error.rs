//! Lexical error types.
//!
//! Every lexical error is fatal to the current pass and carries the position
//! where the fault was detected. The kind holds the structured details; the
//! message text comes from its `Display` impl.

use thiserror::Error;

use crate::ascii::{describe, describe_byte};
use crate::cursor::{Codepoint, Position};

/// What went wrong while recognising a token.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LexicalErrorKind {
    /// No dispatch rule matches the character.
    #[error("unexpected character '{}' (code {})", describe_byte(.0), .0)]
    UnexpectedCharacter(u8),

    /// A number ran straight into a letter.
    #[error("malformed number {0}")]
    MalformedNumber(String),

    /// End of stream before the closing quote.
    #[error("unexpected end of file when parsing a string literal")]
    UnterminatedString,

    /// A decimal point with nothing after it.
    #[error("no digits found after decimal point")]
    MissingFractionDigits,

    /// A second decimal point in the same literal.
    #[error("only one decimal point is allowed")]
    MultipleDecimalPoints,

    /// An exponent marker or sign with nothing after it.
    #[error("no digits found after exponent")]
    MissingExponentDigits,

    /// `0x` not followed by a hexadecimal digit.
    #[error("expected a hexadecimal digit, got {}", describe(.0))]
    MissingHexDigit(Codepoint),

    /// A sub-lexer was entered on a character it does not handle.
    #[error("expected {expected}, got {}", describe(.found))]
    UnexpectedEntry {
        /// What the sub-lexer requires.
        expected: &'static str,
        /// What it found instead.
        found: Codepoint,
    },
}

/// A lexical error and where it happened.
///
/// ```
/// use bcc_lex::{LexicalError, LexicalErrorKind, Position};
///
/// let err = LexicalError::new(LexicalErrorKind::UnterminatedString, Position::new(3, 9));
/// assert_eq!(err.line(), 3);
/// assert_eq!(
///     err.to_string(),
///     "lexical error at 3:9 - unexpected end of file when parsing a string literal"
/// );
/// ```
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("lexical error at {position} - {kind}")]
pub struct LexicalError {
    kind: LexicalErrorKind,
    position: Position,
}

impl LexicalError {
    /// Creates an error of the given kind at `position`.
    pub fn new(kind: LexicalErrorKind, position: Position) -> Self {
        Self { kind, position }
    }

    /// The structured error kind.
    pub fn kind(&self) -> &LexicalErrorKind {
        &self.kind
    }

    /// Where the error was detected.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Line of the error (1-based).
    pub fn line(&self) -> u32 {
        self.position.line
    }

    /// Column of the error (1-based).
    pub fn column(&self) -> u32 {
        self.position.column
    }

    /// The human-readable message, without the position.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

/// Result type alias for lexing operations.
pub type LexResult<T> = std::result::Result<T, LexicalError>;
