//! Tokenizer: raw JSON text → ordered [`Token`] sequence.
//!
//! The tokenizer walks the input with a single byte cursor that only moves
//! forward. It recognizes:
//!
//! - Punctuators `{ } [ ] : ,`
//! - Whitespace: space and newline only (tabs and `\r` are rejected)
//! - Numbers: optional `-`, a digit run, optional `.` and fraction digits
//! - Strings: `"..."` with escape sequences kept verbatim
//! - Keywords `true`, `false`, `null` matched as prefixes
//!
//! # Number classification
//!
//! A digit run (sign excluded) longer than [`BIGINT_DIGIT_THRESHOLD`] becomes a
//! [`Token::BigInt`] regardless of a following fraction. This is a fixed
//! heuristic, not a range check: `9999999999` (10 digits) is an `Integer`, and
//! `00000000001` (11 digits) is a `BigInt`. A fraction after a BigInt run is
//! not consumed, so `12345678901.5` fails at the `.`.

use crate::character;
use crate::error::{JessonError, Result};
use crate::token::{Keyword, Punctuator, Token};
use num_bigint::BigInt;

/// Digit runs strictly longer than this are arbitrary-precision integers.
pub const BIGINT_DIGIT_THRESHOLD: usize = 10;

pub struct Tokenizer<'a> {
    text: &'a str,
    offset: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, offset: 0 }
    }

    /// Consume the whole input and return its tokens in order.
    pub fn tokenize(mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(ch) = self.peek() {
            if let Some(p) = Punctuator::from_byte(ch) {
                self.offset += 1;
                tokens.push(Token::Punctuator(p));
            } else if character::is_whitespace(ch) {
                self.offset += 1;
            } else if character::is_integer_start(ch) {
                tokens.push(self.number()?);
            } else if character::is_string_start(ch) {
                tokens.push(self.string()?);
            } else if character::is_identifier(ch) {
                tokens.push(self.keyword()?);
            } else {
                return Err(self.unrecognized(self.offset));
            }
        }
        Ok(tokens)
    }

    fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.offset).copied()
    }

    fn consume(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.offset += 1;
            true
        } else {
            false
        }
    }

    fn unrecognized(&self, offset: usize) -> JessonError {
        let found = self.text[offset..].chars().next().unwrap_or('\0');
        JessonError::UnrecognizedToken { offset, found }
    }

    fn digits(&mut self) -> &'a str {
        let start = self.offset;
        while self.peek().is_some_and(character::is_integer) {
            self.offset += 1;
        }
        &self.text[start..self.offset]
    }

    fn keyword(&mut self) -> Result<Token> {
        let rest = &self.text[self.offset..];
        for keyword in Keyword::ALL {
            if rest.starts_with(keyword.as_str()) {
                self.offset += keyword.as_str().len();
                return Ok(Token::Keyword(keyword));
            }
        }
        Err(self.unrecognized(self.offset))
    }

    fn number(&mut self) -> Result<Token> {
        let sign_offset = self.offset;
        let negative = self.consume(b'-');
        let int_part = self.digits();
        if int_part.is_empty() {
            return Err(self.unrecognized(sign_offset));
        }

        if int_part.len() > BIGINT_DIGIT_THRESHOLD {
            let magnitude = BigInt::parse_bytes(int_part.as_bytes(), 10)
                .ok_or_else(|| self.unrecognized(sign_offset))?;
            return Ok(Token::BigInt(if negative { -magnitude } else { magnitude }));
        }

        if self.consume(b'.') {
            let frac_part = self.digits();
            let frac_part = if frac_part.is_empty() { "0" } else { frac_part };
            let value: f64 = format!("{}.{}", int_part, frac_part)
                .parse()
                .map_err(|_| self.unrecognized(sign_offset))?;
            return Ok(Token::Float(if negative { -value } else { value }));
        }

        let value: i64 = int_part
            .parse()
            .map_err(|_| self.unrecognized(sign_offset))?;
        Ok(Token::Integer(if negative { -value } else { value }))
    }

    /// Scan a quoted string. A backslash always swallows the next byte, so
    /// `\"` never closes the literal. Both delimiters are ASCII, which keeps
    /// the slice on UTF-8 boundaries.
    fn string(&mut self) -> Result<Token> {
        let open = self.offset;
        self.offset += 1;
        let start = self.offset;
        loop {
            match self.peek() {
                None => return Err(JessonError::UnterminatedLiteral { offset: open }),
                Some(b'"') => break,
                Some(b'\\') => self.offset += 2,
                Some(_) => self.offset += 1,
            }
        }
        let raw = &self.text[start..self.offset];
        self.offset += 1;
        Ok(Token::String(raw.to_string()))
    }
}

/// Tokenize `text` in one call.
pub fn tokenize(text: &str) -> Result<Vec<Token>> {
    Tokenizer::new(text).tokenize()
}
