//! Punctuation lexing.
//!
//! Every punctuation symbol is a single character; there are no compound
//! operators at this level.

use std::io::Read;

use crate::error::{LexResult, LexicalErrorKind};
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<R: Read> Lexer<R> {
    /// Lexes one punctuation character.
    ///
    /// Handles: `% & ( ) * + , - . / : ; < = > ? [ \ ] ^ { }`
    pub(crate) fn lex_punctuation(&mut self) -> LexResult<Token> {
        let codepoint = self.cursor.get();
        match codepoint.and_then(|c| TokenKind::from_punctuation(c).map(|kind| (c, kind))) {
            Some((c, kind)) => Ok(Token::new(kind, char::from(c).to_string())),
            None => Err(self.error(LexicalErrorKind::UnexpectedEntry {
                expected: "a punctuation character",
                found: codepoint,
            })),
        }
    }
}
