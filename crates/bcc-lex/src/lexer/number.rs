//! Number literal lexing.
//!
//! This module handles integer, hexadecimal, decimal and exponent literals.
//! Literals keep their source text; no value is computed here.

use std::io::Read;

use crate::ascii::{is, is_alpha, is_digit, is_hex_digit};
use crate::error::{LexResult, LexicalErrorKind};
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<R: Read> Lexer<R> {
    /// Lexes a number literal.
    ///
    /// # Number Formats
    ///
    /// - Integer: `42`, `007`
    /// - Hexadecimal: `0x1F`
    /// - Decimal: `3.14`, `.5`
    /// - Exponent: `1e10`, `2.5e-3`, `6e+2`
    ///
    /// # Returns
    ///
    /// Either `LongNumber` (integer, hexadecimal) or `DecimalNumber`.
    pub(crate) fn lex_number(&mut self) -> LexResult<Token> {
        let codepoint = self.cursor.get();
        if !(is_digit(codepoint) || is(codepoint, b'.')) {
            return Err(self.error(LexicalErrorKind::UnexpectedEntry {
                expected: "a digit or '.'",
                found: codepoint,
            }));
        }

        if is(codepoint, b'0') && is(self.cursor.peek(), b'x') {
            self.cursor.get();
            return self.lex_hexadecimal(b"0x".to_vec());
        }

        let mut lexeme = Vec::new();
        let codepoint = self.push_while(&mut lexeme, codepoint, is_digit);

        match codepoint {
            // A leading '.' lands here with no digits before it.
            Some(b'.') => {
                lexeme.push(b'.');
                self.lex_decimal(lexeme)
            },
            Some(b'e') => {
                lexeme.push(b'e');
                self.lex_exponent(lexeme)
            },
            Some(c) if is_alpha(codepoint) => {
                lexeme.push(c);
                let text = String::from_utf8_lossy(&lexeme).into_owned();
                Err(self.error(LexicalErrorKind::MalformedNumber(text)))
            },
            _ => self.finish(TokenKind::LongNumber, lexeme),
        }
    }

    /// Lexes the digits of a hexadecimal literal; `lexeme` holds the `0x`.
    fn lex_hexadecimal(&mut self, mut lexeme: Vec<u8>) -> LexResult<Token> {
        let codepoint = self.cursor.get();
        if !is_hex_digit(codepoint) {
            return Err(self.error(LexicalErrorKind::MissingHexDigit(codepoint)));
        }

        self.push_while(&mut lexeme, codepoint, is_hex_digit);
        self.finish(TokenKind::LongNumber, lexeme)
    }

    /// Lexes the fraction after a decimal point; `lexeme` ends with the `.`.
    fn lex_decimal(&mut self, mut lexeme: Vec<u8>) -> LexResult<Token> {
        let codepoint = self.cursor.get();
        if !is_digit(codepoint) {
            return Err(self.error(LexicalErrorKind::MissingFractionDigits));
        }

        match self.push_while(&mut lexeme, codepoint, is_digit) {
            Some(b'.') => Err(self.error(LexicalErrorKind::MultipleDecimalPoints)),
            Some(b'e') => {
                lexeme.push(b'e');
                self.lex_exponent(lexeme)
            },
            _ => self.finish(TokenKind::DecimalNumber, lexeme),
        }
    }

    /// Lexes an exponent; `lexeme` ends with the `e`.
    ///
    /// A single `+` or `-` may follow the `e`, then at least one digit.
    fn lex_exponent(&mut self, mut lexeme: Vec<u8>) -> LexResult<Token> {
        let mut codepoint = self.cursor.get();
        if let Some(sign @ (b'+' | b'-')) = codepoint {
            lexeme.push(sign);
            codepoint = self.cursor.get();
        }

        if !is_digit(codepoint) {
            return Err(self.error(LexicalErrorKind::MissingExponentDigits));
        }

        self.push_while(&mut lexeme, codepoint, is_digit);
        self.finish(TokenKind::DecimalNumber, lexeme)
    }
}
