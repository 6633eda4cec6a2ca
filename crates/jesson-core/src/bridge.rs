//! Conversion between syntax trees and native [`Value`]s.
//!
//! - [`to_value`] walks a tree and builds fresh values.
//! - [`bake`] walks a caller's value graph (read-only) and builds a tree,
//!   failing with [`JessonError::CyclicReference`] when a composite value is
//!   reachable from itself.
//!
//! # Cycle detection
//!
//! Baking keeps the identities of the composite values on the current
//! recursion path. Before descending into an array or object, its identity is
//! looked up in that path; a hit means the value contains itself. The entry is
//! removed again once the subtree is done, so siblings never see each other:
//! one object referenced twice under the same parent is shared, not cyclic.
//! Identity is the address of the shared cell, never structural equality.

use crate::error::{JessonError, Result};
use crate::limits::{DepthGuard, Limits};
use crate::node::{Node, ObjectProperty};
use crate::options::StringEscapes;
use crate::value::{Map, Value};

/// Build a native value from a syntax tree.
pub fn to_value(node: &Node, escapes: StringEscapes) -> Value {
    match node {
        Node::Object(body) => {
            let mut map = Map::with_capacity(body.len());
            for property in body {
                map.insert(property.key.clone(), to_value(&property.value, escapes));
            }
            Value::from(map)
        }
        Node::Array(body) => Value::array(body.iter().map(|child| to_value(child, escapes))),
        Node::String(raw) => Value::String(native_string(raw, escapes)),
        Node::Integer(n) => Value::Integer(*n),
        Node::Float(n) => Value::Float(*n),
        Node::BigInt(n) => Value::BigInt(n.clone()),
        Node::Boolean(b) => Value::Bool(*b),
        Node::Null => Value::Null,
    }
}

/// Build a syntax tree from a native value with the default limits.
pub fn bake(value: &Value) -> Result<Node> {
    bake_with_limits(value, Limits::default())
}

/// Build a syntax tree from a native value, failing past `limits.max_nesting_depth`.
pub fn bake_with_limits(value: &Value, limits: Limits) -> Result<Node> {
    let mut baker = Baker {
        ancestors: Vec::new(),
        depth: DepthGuard::new(limits.max_nesting_depth),
    };
    baker.bake(value)
}

struct Baker {
    ancestors: Vec<*const ()>,
    depth: DepthGuard,
}

impl Baker {
    fn bake(&mut self, value: &Value) -> Result<Node> {
        match value {
            Value::Null => Ok(Node::Null),
            Value::Bool(b) => Ok(Node::Boolean(*b)),
            Value::Integer(n) => Ok(Node::Integer(*n)),
            Value::Float(n) => Ok(classify_float(*n)),
            Value::BigInt(n) => Ok(Node::BigInt(n.clone())),
            Value::String(s) => Ok(Node::String(s.clone())),
            Value::Array(items) => {
                self.enter(value)?;
                let body = items
                    .borrow()
                    .iter()
                    .map(|item| self.bake(item))
                    .collect::<Result<Vec<_>>>()?;
                self.leave();
                Ok(Node::Array(body))
            }
            Value::Object(map) => {
                self.enter(value)?;
                let body = map
                    .borrow()
                    .iter()
                    .map(|(key, item)| Ok(ObjectProperty::new(key.clone(), self.bake(item)?)))
                    .collect::<Result<Vec<_>>>()?;
                self.leave();
                Ok(Node::Object(body))
            }
        }
    }

    fn enter(&mut self, value: &Value) -> Result<()> {
        let Some(identity) = value.identity() else {
            return Ok(());
        };
        if self.ancestors.contains(&identity) {
            return Err(JessonError::CyclicReference);
        }
        self.depth.enter()?;
        self.ancestors.push(identity);
        Ok(())
    }

    fn leave(&mut self) {
        self.ancestors.pop();
        self.depth.leave();
    }
}

/// A float with no fractional part that fits `i64` is written as an integer.
fn classify_float(n: f64) -> Node {
    // -2^63 is exact in f64; 2^63 is the first value past i64::MAX.
    const LOWER: f64 = -9_223_372_036_854_775_808.0;
    const UPPER: f64 = 9_223_372_036_854_775_808.0;
    if n.fract() == 0.0 && (LOWER..UPPER).contains(&n) {
        Node::Integer(n as i64)
    } else {
        Node::Float(n)
    }
}

fn native_string(raw: &str, escapes: StringEscapes) -> String {
    match escapes {
        StringEscapes::Strip => raw.chars().filter(|&c| c != '\\').collect(),
        StringEscapes::Decode => decode_escapes(raw),
    }
}

/// Resolve JSON escape sequences. Unknown escapes keep their backslash and a
/// trailing lone backslash is kept; unpaired surrogates become U+FFFD.
fn decode_escapes(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some('/') => out.push('/'),
            Some('b') => out.push('\u{8}'),
            Some('f') => out.push('\u{c}'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('u') => match read_hex4(&mut chars) {
                Some(high @ 0xD800..=0xDBFF) => {
                    let mut lookahead = chars.clone();
                    let low = match (lookahead.next(), lookahead.next()) {
                        (Some('\\'), Some('u')) => read_hex4(&mut lookahead),
                        _ => None,
                    };
                    match low {
                        Some(low @ 0xDC00..=0xDFFF) => {
                            chars = lookahead;
                            let code = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
                            out.push(char::from_u32(code).unwrap_or('\u{FFFD}'));
                        }
                        _ => out.push('\u{FFFD}'),
                    }
                }
                Some(code) => out.push(char::from_u32(code).unwrap_or('\u{FFFD}')),
                None => out.push_str("\\u"),
            },
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// Read exactly four hex digits, leaving the iterator untouched on failure.
fn read_hex4<I: Iterator<Item = char> + Clone>(chars: &mut I) -> Option<u32> {
    let mut lookahead = chars.clone();
    let mut code = 0;
    for _ in 0..4 {
        code = code * 16 + lookahead.next()?.to_digit(16)?;
    }
    *chars = lookahead;
    Some(code)
}
