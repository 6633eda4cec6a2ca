//! Lexical tokens produced by the [`Tokenizer`](crate::tokenizer::Tokenizer).
//!
//! Tokens carry no position information. String tokens hold the raw text
//! between the quotes with escape sequences left intact.

use num_bigint::BigInt;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Punctuator(Punctuator),
    /// Raw string contents, escapes not decoded.
    String(String),
    Integer(i64),
    Float(f64),
    /// Integer literal with more than 10 digits.
    BigInt(BigInt),
    Keyword(Keyword),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Punctuator {
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Colon,
    Comma,
}

impl Punctuator {
    pub fn from_byte(ch: u8) -> Option<Self> {
        match ch {
            b'{' => Some(Punctuator::LeftBrace),
            b'}' => Some(Punctuator::RightBrace),
            b'[' => Some(Punctuator::LeftBracket),
            b']' => Some(Punctuator::RightBracket),
            b':' => Some(Punctuator::Colon),
            b',' => Some(Punctuator::Comma),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Punctuator::LeftBrace => '{',
            Punctuator::RightBrace => '}',
            Punctuator::LeftBracket => '[',
            Punctuator::RightBracket => ']',
            Punctuator::Colon => ':',
            Punctuator::Comma => ',',
        }
    }
}

/// The three literal spellings JSON reserves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    True,
    False,
    Null,
}

impl Keyword {
    /// Spellings in the order the tokenizer tries them.
    pub const ALL: [Keyword; 3] = [Keyword::True, Keyword::False, Keyword::Null];

    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::True => "true",
            Keyword::False => "false",
            Keyword::Null => "null",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Punctuator(p) => write!(f, "\"{}\"", p.as_char()),
            Token::String(s) => write!(f, "\"{}\"", s),
            Token::Integer(n) => write!(f, "{}", n),
            Token::Float(n) => write!(f, "{}", n),
            Token::BigInt(n) => write!(f, "{}", n),
            Token::Keyword(k) => f.write_str(k.as_str()),
        }
    }
}
