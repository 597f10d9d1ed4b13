//! Comment lexing.
//!
//! A comment runs from `|` to the end of the line. Unlike whitespace it is
//! kept as a token so later layers can decide what to do with it.

use std::io::Read;

use crate::ascii::is;
use crate::error::LexResult;
use crate::lexer::core::make_token;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<R: Read> Lexer<R> {
    /// Lexes a `|` comment.
    ///
    /// The text is everything after the `|` up to, but not including, the
    /// next newline. The newline itself is consumed. End of file simply ends
    /// the comment.
    pub(crate) fn lex_comment(&mut self) -> LexResult<Token> {
        let bar = self.cursor.get();
        debug_assert!(is(bar, b'|'));

        let mut lexeme = Vec::new();
        while let Some(c) = self.cursor.get() {
            if c == b'\n' {
                break;
            }
            lexeme.push(c);
        }

        Ok(make_token(TokenKind::Comment, lexeme))
    }
}
