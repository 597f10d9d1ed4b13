//! Edge case tests for bcc-lex

use crate::{Lexer, LexicalErrorKind, Position, Token, TokenKind};

fn lex_all(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source.as_bytes());
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token().unwrap();
        if token.is_eof() {
            break;
        }
        tokens.push(token);
    }
    tokens
}

fn lex_err(source: &str) -> crate::LexicalError {
    let mut lexer = Lexer::new(source.as_bytes());
    loop {
        match lexer.next_token() {
            Ok(token) if token.is_eof() => panic!("expected an error lexing {source:?}"),
            Ok(_) => {},
            Err(err) => return err,
        }
    }
}

// ==================== EDGE CASES ====================

#[test]
fn test_edge_empty_source() {
    assert!(lex_all("").is_empty());
}

#[test]
fn test_edge_eof_is_repeatable() {
    let mut lexer = Lexer::new("x".as_bytes());
    lexer.next_token().unwrap();
    for _ in 0..3 {
        assert_eq!(lexer.next_token(), Ok(Token::eof()));
    }
}

#[test]
fn test_edge_long_identifier() {
    let name = "a".repeat(10000);
    let t = lex_all(&format!("{} = 1", name));
    assert_eq!(t[0], Token::new(TokenKind::Identifier, name));
}

#[test]
fn test_edge_leading_dot_number() {
    assert_eq!(lex_all(".25"), vec![Token::new(TokenKind::DecimalNumber, ".25")]);
}

#[test]
fn test_edge_lone_dot_is_number_error() {
    assert_eq!(lex_err(". x").kind(), &LexicalErrorKind::MissingFractionDigits);
}

#[test]
fn test_edge_identifier_cannot_start_with_digit() {
    assert_eq!(
        lex_err("2abc").kind(),
        &LexicalErrorKind::MalformedNumber("2a".to_string())
    );
}

#[test]
fn test_edge_number_then_dotted_identifier() {
    let t = lex_all("3 x.y");
    assert_eq!(t[0], Token::new(TokenKind::LongNumber, "3"));
    assert_eq!(t[1], Token::new(TokenKind::Identifier, "x.y"));
}

#[test]
fn test_edge_exponent_then_letter_is_split() {
    let t = lex_all("1e5x");
    assert_eq!(t[0], Token::new(TokenKind::DecimalNumber, "1e5"));
    assert_eq!(t[1], Token::new(TokenKind::Identifier, "x"));
}

#[test]
fn test_edge_upper_case_exponent_is_malformed() {
    assert_eq!(
        lex_err("1E5").kind(),
        &LexicalErrorKind::MalformedNumber("1E".to_string())
    );
}

#[test]
fn test_edge_nested_delimiters() {
    let t = lex_all("((()))");
    assert_eq!(t.iter().filter(|x| x.kind == TokenKind::OpenParen).count(), 3);
    assert_eq!(t.iter().filter(|x| x.kind == TokenKind::CloseParen).count(), 3);
}

#[test]
fn test_edge_comment_between_tokens() {
    let t = lex_all("a |one\n|two\nb");
    assert_eq!(
        t,
        vec![
            Token::new(TokenKind::Identifier, "a"),
            Token::new(TokenKind::Comment, "one"),
            Token::new(TokenKind::Comment, "two"),
            Token::new(TokenKind::Identifier, "b"),
        ]
    );
}

#[test]
fn test_edge_crlf_line_endings() {
    let mut lexer = Lexer::new("a\r\nb".as_bytes());
    lexer.next_token().unwrap();
    lexer.next_token().unwrap();
    assert_eq!(lexer.position(), Position::new(2, 2));
}

#[test]
fn test_edge_utf8_in_comment_and_string() {
    let t = lex_all("| größe\n\"naïve\"");
    assert_eq!(t[0], Token::new(TokenKind::Comment, " größe"));
    assert_eq!(t[1], Token::new(TokenKind::StringLiteral, "\"naïve\""));
}

#[test]
fn test_edge_string_swallows_comment_marker() {
    let t = lex_all("\"| not a comment\"");
    assert_eq!(t.len(), 1);
    assert_eq!(t[0].kind, TokenKind::StringLiteral);
}

// ==================== ERROR CASES ====================

#[test]
fn test_err_unterminated_multiline_string() {
    let err = lex_err("x = \"one\ntwo");
    assert_eq!(err.kind(), &LexicalErrorKind::UnterminatedString);
    assert_eq!(err.position(), Position::new(2, 4));
}

#[test]
fn test_err_invalid_chars() {
    for c in ["#", "$", "!", "~", "_", "'", "`", "@"] {
        assert!(
            matches!(lex_err(c).kind(), LexicalErrorKind::UnexpectedCharacter(_)),
            "{c} should be rejected"
        );
    }
}

#[test]
fn test_err_stops_at_first_error() {
    let mut lexer = Lexer::new("a # b".as_bytes());
    let results: Vec<_> = lexer.by_ref().collect();
    assert_eq!(results.len(), 2);
    assert!(results[1].is_err());
}

#[test]
fn test_err_three_decimal_points() {
    assert_eq!(lex_err("1.2.3.4").kind(), &LexicalErrorKind::MultipleDecimalPoints);
}

#[test]
fn test_err_hex_at_end_of_line() {
    let err = lex_err("0x\n1");
    assert_eq!(err.kind(), &LexicalErrorKind::MissingHexDigit(Some(b'\n')));
    assert_eq!(err.position(), Position::new(2, 1));
}
