//! Error types for tokenizing, parsing and stringifying.

use crate::token::{Punctuator, Token};
use std::fmt;
use thiserror::Error;

/// Errors that can occur while converting between JSON text, syntax trees
/// and native values. Every error aborts the whole operation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum JessonError {
    /// The tokenizer could not classify the character at `offset`.
    #[error("Unrecognized token at offset {offset}: {found:?}")]
    UnrecognizedToken { offset: usize, found: char },

    /// Input ended inside a string literal. `offset` points at the opening quote.
    #[error("Unterminated string literal starting at offset {offset}")]
    UnterminatedLiteral { offset: usize },

    /// The parser required one token shape and got another.
    #[error("Expected {expected} but got {found} instead")]
    UnexpectedToken { expected: Expected, found: Token },

    /// The parser required a token but the sequence was exhausted.
    #[error("Unexpected end of input, expected {expected}")]
    UnexpectedEndOfInput { expected: Expected },

    /// A composite value is reachable from itself.
    #[error("detected cyclic object")]
    CyclicReference,

    /// Objects/arrays nest deeper than the configured limit.
    #[error("Nesting depth exceeds limit of {limit}")]
    NestingTooDeep { limit: usize },

    /// Input text is longer than the configured limit.
    #[error("Input of {size} bytes exceeds limit of {limit} bytes")]
    InputTooLarge { size: usize, limit: usize },
}

/// What the parser was looking for when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Punctuator(Punctuator),
    /// A string token (object keys).
    String,
    /// Any value: object, array, string, number or keyword.
    Value,
    EndOfInput,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Punctuator(p) => write!(f, "\"{}\"", p.as_char()),
            Expected::String => f.write_str("string"),
            Expected::Value => f.write_str("value"),
            Expected::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// Convenience alias used throughout jesson-core.
pub type Result<T> = std::result::Result<T, JessonError>;
