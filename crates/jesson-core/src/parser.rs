//! Recursive-descent parser: [`Token`] sequence → syntax tree.
//!
//! One method per construct (`object`, `array`, `node`). Tokens are consumed
//! front to back and each is used at most once. The document root must be an
//! object, and nothing may follow it.
//!
//! The first error aborts the parse; no partial tree is ever returned.

use crate::error::{Expected, JessonError, Result};
use crate::limits::{DepthGuard, Limits};
use crate::node::{Node, ObjectProperty};
use crate::token::{Keyword, Punctuator, Token};
use std::iter::Peekable;
use std::vec;

pub struct Parser {
    tokens: Peekable<vec::IntoIter<Token>>,
    depth: DepthGuard,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self::with_limits(tokens, Limits::default())
    }

    pub fn with_limits(tokens: Vec<Token>, limits: Limits) -> Self {
        Self {
            tokens: tokens.into_iter().peekable(),
            depth: DepthGuard::new(limits.max_nesting_depth),
        }
    }

    /// Parse the whole token sequence as a single root object.
    pub fn parse(mut self) -> Result<Node> {
        let root = self.object()?;
        match self.tokens.next() {
            None => Ok(root),
            Some(found) => Err(JessonError::UnexpectedToken {
                expected: Expected::EndOfInput,
                found,
            }),
        }
    }

    fn node(&mut self) -> Result<Node> {
        if self.peek_is(Punctuator::LeftBrace) {
            return self.object();
        }
        if self.peek_is(Punctuator::LeftBracket) {
            return self.array();
        }
        match self.next(Expected::Value)? {
            Token::Integer(n) => Ok(Node::Integer(n)),
            Token::Float(n) => Ok(Node::Float(n)),
            Token::BigInt(n) => Ok(Node::BigInt(n)),
            Token::String(raw) => Ok(Node::String(raw)),
            Token::Keyword(Keyword::True) => Ok(Node::Boolean(true)),
            Token::Keyword(Keyword::False) => Ok(Node::Boolean(false)),
            Token::Keyword(Keyword::Null) => Ok(Node::Null),
            found => Err(JessonError::UnexpectedToken {
                expected: Expected::Value,
                found,
            }),
        }
    }

    fn object(&mut self) -> Result<Node> {
        self.expect(Punctuator::LeftBrace)?;
        self.depth.enter()?;
        let mut body = Vec::new();
        if !self.peek_is(Punctuator::RightBrace) {
            loop {
                let key = self.string()?;
                self.expect(Punctuator::Colon)?;
                let value = self.node()?;
                body.push(ObjectProperty { key, value });
                // A comma commits to another property, so `{"a":1,}` fails on `}`.
                if !self.consume(Punctuator::Comma) {
                    break;
                }
            }
        }
        self.expect(Punctuator::RightBrace)?;
        self.depth.leave();
        Ok(Node::Object(body))
    }

    fn array(&mut self) -> Result<Node> {
        self.expect(Punctuator::LeftBracket)?;
        self.depth.enter()?;
        let mut body = Vec::new();
        if !self.peek_is(Punctuator::RightBracket) {
            loop {
                body.push(self.node()?);
                if !self.consume(Punctuator::Comma) {
                    break;
                }
            }
        }
        self.expect(Punctuator::RightBracket)?;
        self.depth.leave();
        Ok(Node::Array(body))
    }

    fn string(&mut self) -> Result<String> {
        match self.next(Expected::String)? {
            Token::String(raw) => Ok(raw),
            found => Err(JessonError::UnexpectedToken {
                expected: Expected::String,
                found,
            }),
        }
    }

    fn next(&mut self, expected: Expected) -> Result<Token> {
        self.tokens
            .next()
            .ok_or(JessonError::UnexpectedEndOfInput { expected })
    }

    fn peek_is(&mut self, punctuator: Punctuator) -> bool {
        matches!(self.tokens.peek(), Some(Token::Punctuator(p)) if *p == punctuator)
    }

    fn consume(&mut self, punctuator: Punctuator) -> bool {
        if self.peek_is(punctuator) {
            self.tokens.next();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, punctuator: Punctuator) -> Result<()> {
        let expected = Expected::Punctuator(punctuator);
        match self.next(expected)? {
            Token::Punctuator(p) if p == punctuator => Ok(()),
            found => Err(JessonError::UnexpectedToken { expected, found }),
        }
    }
}

/// Parse an already tokenized document.
pub fn parse_tokens(tokens: Vec<Token>) -> Result<Node> {
    Parser::new(tokens).parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;

    fn parse_str(text: &str) -> Result<Node> {
        parse_tokens(tokenize(text)?)
    }

    #[test]
    fn empty_object() {
        assert_eq!(parse_str("{}").unwrap(), Node::Object(vec![]));
    }

    #[test]
    fn root_must_be_object() {
        assert_eq!(
            parse_str("[1]").unwrap_err(),
            JessonError::UnexpectedToken {
                expected: Expected::Punctuator(Punctuator::LeftBrace),
                found: Token::Punctuator(Punctuator::LeftBracket),
            }
        );
    }

    #[test]
    fn empty_input_is_end_of_input() {
        assert_eq!(
            parse_str("").unwrap_err(),
            JessonError::UnexpectedEndOfInput {
                expected: Expected::Punctuator(Punctuator::LeftBrace)
            }
        );
    }

    #[test]
    fn trailing_comma_rejected_in_object_and_array() {
        assert_eq!(
            parse_str(r#"{"a":1,}"#).unwrap_err(),
            JessonError::UnexpectedToken {
                expected: Expected::String,
                found: Token::Punctuator(Punctuator::RightBrace),
            }
        );
        assert_eq!(
            parse_str(r#"{"a":[1,]}"#).unwrap_err(),
            JessonError::UnexpectedToken {
                expected: Expected::Value,
                found: Token::Punctuator(Punctuator::RightBracket),
            }
        );
    }

    #[test]
    fn trailing_tokens_rejected() {
        assert_eq!(
            parse_str("{}{}").unwrap_err(),
            JessonError::UnexpectedToken {
                expected: Expected::EndOfInput,
                found: Token::Punctuator(Punctuator::LeftBrace),
            }
        );
    }

    #[test]
    fn missing_comma_between_properties() {
        assert_eq!(
            parse_str(r#"{"a":1 "b":2}"#).unwrap_err(),
            JessonError::UnexpectedToken {
                expected: Expected::Punctuator(Punctuator::RightBrace),
                found: Token::String("b".into()),
            }
        );
    }

    #[test]
    fn depth_limit_applies_to_objects_and_arrays() {
        let limits = Limits::default().with_max_nesting_depth(2);
        let ok = Parser::with_limits(tokenize(r#"{"a":[1]}"#).unwrap(), limits).parse();
        assert!(ok.is_ok());

        let deep = Parser::with_limits(tokenize(r#"{"a":[[1]]}"#).unwrap(), limits).parse();
        assert_eq!(deep.unwrap_err(), JessonError::NestingTooDeep { limit: 2 });
    }
}
