//! Token definitions.
//!
//! A [`Token`] pairs a [`TokenKind`] with the exact source text it was built
//! from. Punctuation kinds use the character they stand for as their
//! discriminant, so no two of them can collide.

use std::fmt;
use std::mem;

/// The category of a token.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    /// End of input. Also the scan-termination sentinel.
    EndOfFile = -1,

    /// `| ...` up to the end of the line.
    Comment = 0,
    /// `"..."`, quotes included.
    StringLiteral = 1,
    /// Integer or `0x` hexadecimal literal.
    LongNumber = 2,
    /// Literal with a decimal point and/or an exponent.
    DecimalNumber = 3,
    /// Letters, digits and dots, starting with a letter.
    Identifier = 4,

    // TODO: reserved keywords as their own kinds once the parser needs them.

    // Single-character punctuation
    /// `%`
    Percent = b'%' as i32,
    /// `&`
    Ampersand = b'&' as i32,
    /// `(`
    OpenParen = b'(' as i32,
    /// `)`
    CloseParen = b')' as i32,
    /// `*`
    Star = b'*' as i32,
    /// `+`
    Plus = b'+' as i32,
    /// `,`
    Comma = b',' as i32,
    /// `-`
    Hyphen = b'-' as i32,
    /// `.`
    Dot = b'.' as i32,
    /// `/`
    Slash = b'/' as i32,
    /// `:`
    Colon = b':' as i32,
    /// `;`
    Semicolon = b';' as i32,
    /// `<`
    OpenAngle = b'<' as i32,
    /// `=`
    Equal = b'=' as i32,
    /// `>`
    CloseAngle = b'>' as i32,
    /// `?`
    QuestionMark = b'?' as i32,
    /// `[`
    OpenBracket = b'[' as i32,
    /// `\`
    Backslash = b'\\' as i32,
    /// `]`
    CloseBracket = b']' as i32,
    /// `^`
    Caret = b'^' as i32,
    /// `{`
    OpenCurly = b'{' as i32,
    /// `}`
    CloseCurly = b'}' as i32,
}

impl TokenKind {
    /// Maps a punctuation character to its kind.
    ///
    /// # Example
    ///
    /// ```
    /// use bcc_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::from_punctuation(b'{'), Some(TokenKind::OpenCurly));
    /// assert_eq!(TokenKind::from_punctuation(b'@'), None);
    /// ```
    pub fn from_punctuation(c: u8) -> Option<TokenKind> {
        let kind = match c {
            b'%' => TokenKind::Percent,
            b'&' => TokenKind::Ampersand,
            b'(' => TokenKind::OpenParen,
            b')' => TokenKind::CloseParen,
            b'*' => TokenKind::Star,
            b'+' => TokenKind::Plus,
            b',' => TokenKind::Comma,
            b'-' => TokenKind::Hyphen,
            b'.' => TokenKind::Dot,
            b'/' => TokenKind::Slash,
            b':' => TokenKind::Colon,
            b';' => TokenKind::Semicolon,
            b'<' => TokenKind::OpenAngle,
            b'=' => TokenKind::Equal,
            b'>' => TokenKind::CloseAngle,
            b'?' => TokenKind::QuestionMark,
            b'[' => TokenKind::OpenBracket,
            b'\\' => TokenKind::Backslash,
            b']' => TokenKind::CloseBracket,
            b'^' => TokenKind::Caret,
            b'{' => TokenKind::OpenCurly,
            b'}' => TokenKind::CloseCurly,
            _ => return None,
        };
        Some(kind)
    }

    /// The numeric discriminant.
    #[inline]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Returns the character a punctuation kind stands for.
    pub fn as_char(self) -> Option<char> {
        if self.is_punctuation() {
            u8::try_from(self.code()).ok().map(char::from)
        } else {
            None
        }
    }

    /// True for the single-character punctuation kinds.
    pub fn is_punctuation(self) -> bool {
        self.code() > TokenKind::Identifier.code()
    }

    /// Stable name of the kind, used by the JSON token dump.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::EndOfFile => "EndOfFile",
            TokenKind::Comment => "Comment",
            TokenKind::StringLiteral => "StringLiteral",
            TokenKind::LongNumber => "LongNumber",
            TokenKind::DecimalNumber => "DecimalNumber",
            TokenKind::Identifier => "Identifier",
            TokenKind::Percent => "Percent",
            TokenKind::Ampersand => "Ampersand",
            TokenKind::OpenParen => "OpenParen",
            TokenKind::CloseParen => "CloseParen",
            TokenKind::Star => "Star",
            TokenKind::Plus => "Plus",
            TokenKind::Comma => "Comma",
            TokenKind::Hyphen => "Hyphen",
            TokenKind::Dot => "Dot",
            TokenKind::Slash => "Slash",
            TokenKind::Colon => "Colon",
            TokenKind::Semicolon => "Semicolon",
            TokenKind::OpenAngle => "OpenAngle",
            TokenKind::Equal => "Equal",
            TokenKind::CloseAngle => "CloseAngle",
            TokenKind::QuestionMark => "QuestionMark",
            TokenKind::OpenBracket => "OpenBracket",
            TokenKind::Backslash => "Backslash",
            TokenKind::CloseBracket => "CloseBracket",
            TokenKind::Caret => "Caret",
            TokenKind::OpenCurly => "OpenCurly",
            TokenKind::CloseCurly => "CloseCurly",
        }
    }
}

/// A token produced by the lexer.
///
/// Equality is structural: two tokens are equal when both kind and text
/// match. The default token is the [`TokenKind::EndOfFile`] sentinel with
/// empty text.
///
/// `Display` renders the debug form used by the driver: the kind's code
/// right-aligned to the width of its representation, then the text in
/// backticks.
///
/// ```
/// use bcc_lex::{Token, TokenKind};
///
/// let token = Token::new(TokenKind::LongNumber, "123");
/// assert_eq!(token.to_string(), "   2 `123`");
/// assert_eq!(Token::eof().to_string(), "  -1 ``");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// The source text of the token.
    pub text: String,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// The end-of-file sentinel.
    pub fn eof() -> Self {
        Self::new(TokenKind::EndOfFile, String::new())
    }

    /// Returns true for the end-of-file sentinel.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfFile
    }
}

impl Default for Token {
    fn default() -> Self {
        Self::eof()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = mem::size_of::<TokenKind>();
        write!(f, "{:>width$} {}", self.kind.code(), quoted(&self.text))
    }
}

/// Quotes `text` with backticks, escaping backticks and backslashes.
fn quoted(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('`');
    for c in text.chars() {
        if c == '`' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('`');
    out
}
