//! Identifier lexing.
//!
//! Identifiers start with a letter and continue with letters, digits and
//! dots, so dotted names such as `math.sqrt` come out as one token. Keywords
//! are not distinguished here.

use std::io::Read;

use crate::ascii::{is, is_alnum, is_alpha};
use crate::cursor::Codepoint;
use crate::error::{LexResult, LexicalErrorKind};
use crate::token::{Token, TokenKind};
use crate::Lexer;

fn is_ident_continue(c: Codepoint) -> bool {
    is_alnum(c) || is(c, b'.')
}

impl<R: Read> Lexer<R> {
    /// Lexes an identifier.
    ///
    /// # Returns
    ///
    /// `Identifier` with the full name, dots included.
    pub(crate) fn lex_identifier(&mut self) -> LexResult<Token> {
        let codepoint = self.cursor.get();
        if !is_alpha(codepoint) {
            return Err(self.error(LexicalErrorKind::UnexpectedEntry {
                expected: "an alphabetical character",
                found: codepoint,
            }));
        }

        let mut lexeme = Vec::new();
        self.push_while(&mut lexeme, codepoint, is_ident_continue);
        self.finish(TokenKind::Identifier, lexeme)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::LexicalErrorKind;
    use crate::token::{Token, TokenKind};
    use crate::Lexer;
    use proptest::prelude::*;

    fn ident(text: &str) -> Token {
        Token::new(TokenKind::Identifier, text)
    }

    fn lex_ident(source: &str) -> Token {
        Lexer::new(source.as_bytes()).next_token().unwrap()
    }

    #[test]
    fn test_simple_identifier() {
        assert_eq!(lex_ident("foo"), ident("foo"));
        assert_eq!(lex_ident("x"), ident("x"));
    }

    #[test]
    fn test_identifier_with_digits_and_dots() {
        assert_eq!(lex_ident("foo.bar2"), ident("foo.bar2"));
        assert_eq!(lex_ident("a1.b2.c3"), ident("a1.b2.c3"));
        assert_eq!(lex_ident("trailing."), ident("trailing."));
    }

    #[test]
    fn test_keywords_are_plain_identifiers() {
        assert_eq!(lex_ident("if"), ident("if"));
        assert_eq!(lex_ident("define"), ident("define"));
    }

    #[test]
    fn test_underscore_ends_identifier() {
        let mut lexer = Lexer::new("foo_bar".as_bytes());
        assert_eq!(lexer.next_token(), Ok(ident("foo")));
        assert_eq!(
            lexer.next_token().unwrap_err().kind(),
            &LexicalErrorKind::UnexpectedCharacter(b'_')
        );
    }

    #[test]
    fn test_identifier_then_punctuation() {
        let mut lexer = Lexer::new("f(x)".as_bytes());
        assert_eq!(lexer.next_token(), Ok(ident("f")));
        assert_eq!(lexer.next_token(), Ok(Token::new(TokenKind::OpenParen, "(")));
        assert_eq!(lexer.next_token(), Ok(ident("x")));
        assert_eq!(lexer.next_token(), Ok(Token::new(TokenKind::CloseParen, ")")));
    }

    #[test]
    fn test_wrong_entry_character() {
        let mut lexer = Lexer::new("1".as_bytes());
        assert!(matches!(
            lexer.lex_identifier().unwrap_err().kind(),
            LexicalErrorKind::UnexpectedEntry { found: Some(b'1'), .. }
        ));
    }

    proptest! {
        #[test]
        fn prop_identifier_round_trip(name in "[a-zA-Z][a-zA-Z0-9.]{0,30}") {
            let mut lexer = Lexer::new(name.as_bytes());
            prop_assert_eq!(lexer.next_token(), Ok(ident(&name)));
            prop_assert_eq!(lexer.next_token(), Ok(Token::eof()));
        }
    }
}
