//! Character classification for the lexer.
//!
//! All predicates work on raw codepoints and use fixed ASCII ranges, so the
//! lexer behaves the same regardless of the process locale. End of stream
//! (`None`) never matches.

use crate::cursor::Codepoint;

/// The single-character punctuation symbols recognised by the lexer.
pub const PUNCTUATION: &[u8] = b"%&()*+,-./:;<=>?[\\]^{}";

/// Checks for the C-locale whitespace set: space, `\t`, `\n`, `\v`, `\f`, `\r`.
///
/// # Example
///
/// ```
/// use bcc_lex::ascii::is_space;
///
/// assert!(is_space(Some(b' ')));
/// assert!(is_space(Some(0x0b)));
/// assert!(!is_space(Some(b'a')));
/// assert!(!is_space(None));
/// ```
#[inline]
pub fn is_space(c: Codepoint) -> bool {
    matches!(c, Some(b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r'))
}

/// Checks for an ASCII decimal digit.
#[inline]
pub fn is_digit(c: Codepoint) -> bool {
    matches!(c, Some(b'0'..=b'9'))
}

/// Checks for an ASCII hexadecimal digit, either case.
#[inline]
pub fn is_hex_digit(c: Codepoint) -> bool {
    matches!(c, Some(b'0'..=b'9' | b'a'..=b'f' | b'A'..=b'F'))
}

/// Checks for an ASCII letter.
#[inline]
pub fn is_alpha(c: Codepoint) -> bool {
    matches!(c, Some(b'a'..=b'z' | b'A'..=b'Z'))
}

/// Checks for an ASCII letter or digit.
#[inline]
pub fn is_alnum(c: Codepoint) -> bool {
    is_alpha(c) || is_digit(c)
}

/// Checks whether the codepoint is exactly `expected`.
#[inline]
pub fn is(c: Codepoint, expected: u8) -> bool {
    c == Some(expected)
}

/// Checks for one of the [`PUNCTUATION`] symbols.
#[inline]
pub fn is_punctuation(c: Codepoint) -> bool {
    c.is_some_and(|c| PUNCTUATION.contains(&c))
}

/// Renders a codepoint for error messages.
///
/// Printable ASCII is shown as itself, other bytes as an escape and end of
/// stream as `end of file`.
///
/// # Example
///
/// ```
/// use bcc_lex::ascii::describe;
///
/// assert_eq!(describe(&Some(b'g')), "g");
/// assert_eq!(describe(&Some(b'\n')), "\\n");
/// assert_eq!(describe(&None), "end of file");
/// ```
pub fn describe(c: &Codepoint) -> String {
    match c {
        Some(byte) => describe_byte(byte),
        None => "end of file".to_string(),
    }
}

/// Renders a single byte for error messages.
pub fn describe_byte(c: &u8) -> String {
    c.escape_ascii().to_string()
}
