//! String literal lexing.
//!
//! String literals are taken verbatim: no escape sequences, newlines allowed.

use std::io::Read;

use crate::error::{LexResult, LexicalErrorKind};
use crate::lexer::core::make_token;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<R: Read> Lexer<R> {
    /// Lexes a string literal.
    ///
    /// The token text is the full source text including both quotes.
    ///
    /// # Errors
    ///
    /// `UnterminatedString` when the source ends before the closing quote.
    pub(crate) fn lex_string(&mut self) -> LexResult<Token> {
        let open = self.cursor.get();
        if open != Some(b'"') {
            return Err(self.error(LexicalErrorKind::UnexpectedEntry {
                expected: "'\"' to start a string literal",
                found: open,
            }));
        }

        let mut lexeme = vec![b'"'];
        loop {
            match self.cursor.get() {
                Some(b'"') => break,
                Some(c) => lexeme.push(c),
                None => return Err(self.error(LexicalErrorKind::UnterminatedString)),
            }
        }
        lexeme.push(b'"');

        Ok(make_token(TokenKind::StringLiteral, lexeme))
    }
}
