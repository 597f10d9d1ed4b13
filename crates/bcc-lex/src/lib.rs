//! bcc-lex - Lexical Analyzer for bc source files
//!
//! This crate turns a raw character stream into a stream of typed tokens,
//! tracking the line and column of every character for diagnostics. It is
//! the front end of the bc toolchain; a parser would consume its output.
//!
//! # Example Usage
//!
//! ```
//! use bcc_lex::{Lexer, Token, TokenKind};
//!
//! let source = "| area of a circle\narea = pi * r ^ 2";
//! let mut lexer = Lexer::new(source.as_bytes());
//!
//! // Get tokens one at a time until the sentinel
//! assert_eq!(lexer.next_token()?, Token::new(TokenKind::Comment, " area of a circle"));
//! assert_eq!(lexer.next_token()?, Token::new(TokenKind::Identifier, "area"));
//!
//! // Or iterate over the rest
//! for token in &mut lexer {
//!     println!("{}", token?);
//! }
//! # Ok::<(), bcc_lex::LexicalError>(())
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor and source positions
//! - [`error`] - Lexical error model
//! - [`ascii`] - Locale-independent character classes
//!
//! # Token Categories
//!
//! ## Comments
//!
//! `|` up to the end of the line. The text excludes the `|`.
//!
//! ## Literals
//!
//! - **String**: `"hello"`, kept verbatim including the quotes
//! - **Long**: `42`, `0x1F`
//! - **Decimal**: `3.14`, `.5`, `1e10`, `2.5e-3`
//!
//! ## Identifiers
//!
//! A letter followed by letters, digits or dots: `x`, `foo.bar2`.
//!
//! ## Punctuation
//!
//! `% & ( ) * + , - . / : ; < = > ? [ \ ] ^ { }`, one character each.
//!
//! ## Special
//!
//! - **EndOfFile**: the sentinel returned once input is exhausted
//!
//! # Errors
//!
//! Lexing stops at the first [`LexicalError`]. There is no recovery.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod ascii;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

use std::io::Read;

// Re-export main types for convenience
pub use cursor::{Codepoint, Cursor, Position};
pub use error::{LexResult, LexicalError, LexicalErrorKind};
pub use lexer::Lexer;
pub use token::{Token, TokenKind};

/// Lexes a whole source, returning every token before the end-of-file
/// sentinel.
///
/// # Errors
///
/// Returns the first lexical error encountered.
///
/// ```
/// use bcc_lex::{tokenize, TokenKind};
///
/// let tokens = tokenize("x = 1.5e3".as_bytes())?;
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[2].kind, TokenKind::DecimalNumber);
/// # Ok::<(), bcc_lex::LexicalError>(())
/// ```
pub fn tokenize<R: Read>(source: R) -> LexResult<Vec<Token>> {
    Lexer::new(source).collect()
}
