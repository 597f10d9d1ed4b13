//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the dispatch on lookahead and
//! the helpers shared by the sub-lexers.

use std::io::Read;

use crate::ascii::{is, is_alpha, is_digit, is_punctuation, is_space};
use crate::cursor::{Codepoint, Cursor, Position};
use crate::error::{LexResult, LexicalError, LexicalErrorKind};
use crate::token::{Token, TokenKind};

/// Lexer for bc source input.
///
/// The lexer pulls characters through its [`Cursor`] and produces one token
/// per call to [`next_token`](Lexer::next_token). No state survives between
/// calls apart from the cursor itself. The first lexical error ends the pass.
///
/// # Example
///
/// ```
/// use bcc_lex::{Lexer, Token, TokenKind};
///
/// let mut lexer = Lexer::new("total = 0x1F".as_bytes());
///
/// assert_eq!(lexer.next_token()?, Token::new(TokenKind::Identifier, "total"));
/// assert_eq!(lexer.next_token()?, Token::new(TokenKind::Equal, "="));
/// assert_eq!(lexer.next_token()?, Token::new(TokenKind::LongNumber, "0x1F"));
/// assert_eq!(lexer.next_token()?, Token::eof());
/// # Ok::<(), bcc_lex::LexicalError>(())
/// ```
pub struct Lexer<R> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<R>,

    /// Set once the pass has ended, by end of file or by an error.
    finished: bool,
}

impl<R: Read> Lexer<R> {
    /// Creates a new lexer over an already-open source.
    pub fn new(source: R) -> Self {
        Self {
            cursor: Cursor::new(source),
            finished: false,
        }
    }

    /// Returns the next token from the source.
    ///
    /// Skips whitespace, then dispatches on the next character. Returns the
    /// [`TokenKind::EndOfFile`] sentinel once the source is exhausted, and
    /// keeps returning it on further calls.
    ///
    /// # Errors
    ///
    /// Returns a [`LexicalError`] at the current position when no token can be
    /// recognised. The pass should not be continued after that.
    pub fn next_token(&mut self) -> LexResult<Token> {
        while is_space(self.cursor.peek()) {
            self.cursor.get();
        }

        let lookahead = self.cursor.peek();
        let token = match lookahead {
            None => Ok(Token::eof()),
            Some(b'|') => self.lex_comment(),
            Some(b'"') => self.lex_string(),
            c if is_digit(c) || is(c, b'.') => self.lex_number(),
            c if is_alpha(c) => self.lex_identifier(),
            c if is_punctuation(c) => self.lex_punctuation(),
            Some(c) => Err(self.error(LexicalErrorKind::UnexpectedCharacter(c))),
        };

        match &token {
            Ok(token) => tracing::trace!(kind = ?token.kind, text = %token.text, "token"),
            Err(err) => tracing::debug!(error = %err, "lexing stopped"),
        }
        token
    }

    /// Builds an error of the given kind at the cursor's position.
    pub(crate) fn error(&self, kind: LexicalErrorKind) -> LexicalError {
        LexicalError::new(kind, self.cursor.position())
    }

    /// Puts back the character that ended a token and wraps up the token.
    ///
    /// Each sub-lexer finishes with exactly one call here or none at all,
    /// which keeps the pass inside the cursor's single pushback.
    pub(crate) fn finish(&mut self, kind: TokenKind, text: Vec<u8>) -> LexResult<Token> {
        self.cursor.unget();
        Ok(make_token(kind, text))
    }

    /// Appends `codepoint` and the characters after it to `lexeme` while
    /// `accept` holds, returning the first rejected codepoint.
    ///
    /// The rejected codepoint has been consumed; callers either use it or
    /// hand it back through [`finish`](Lexer::finish).
    pub(crate) fn push_while(
        &mut self,
        lexeme: &mut Vec<u8>,
        mut codepoint: Codepoint,
        accept: fn(Codepoint) -> bool,
    ) -> Codepoint {
        while let Some(c) = codepoint.filter(|&c| accept(Some(c))) {
            lexeme.push(c);
            codepoint = self.cursor.get();
        }
        codepoint
    }

    /// Returns the current position.
    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }
}

/// Turns the raw bytes of a lexeme into a token.
///
/// Only comments and string literals can hold non-ASCII bytes; invalid UTF-8
/// in them is replaced rather than rejected.
pub(crate) fn make_token(kind: TokenKind, text: Vec<u8>) -> Token {
    let text = String::from_utf8(text)
        .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned());
    Token::new(kind, text)
}

impl<R: Read> Iterator for Lexer<R> {
    type Item = LexResult<Token>;

    /// Yields every token before the end-of-file sentinel. An error is
    /// yielded once, after which the iterator is exhausted.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.is_eof() => {
                self.finished = true;
                None
            },
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            },
        }
    }
}

impl<R: Read> std::iter::FusedIterator for Lexer<R> {}
