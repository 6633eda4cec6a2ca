//! # jesson-core
//!
//! Strict JSON codec with exact big integers and cycle-safe value conversion.
//!
//! Text goes through three stages, and native values through a bridge:
//!
//! ```text
//! parse:     text ─▶ Tokenizer ─▶ Parser ─▶ to_value ─▶ Value
//! stringify: Value ─▶ bake ─▶ Stringifier ─▶ text
//! ```
//!
//! Integer literals with more than 10 digits become [`num_bigint::BigInt`]s
//! and keep every digit. Baking a value that contains itself fails with
//! [`JessonError::CyclicReference`] instead of recursing forever.
//!
//! ## Quick start
//!
//! ```rust
//! use jesson_core::{parse, stringify, Value};
//!
//! let value = parse(r#"{"id": 11252353308968154646, "tags": ["a", "b"]}"#).unwrap();
//! assert_eq!(value.get("id").unwrap().as_bigint().unwrap().to_string(), "11252353308968154646");
//! assert_eq!(stringify(&value).unwrap(), r#"{"id":11252353308968154646,"tags":["a","b"]}"#);
//!
//! let cyclic = Value::empty_object();
//! cyclic.insert("self", cyclic.clone());
//! assert!(stringify(&cyclic).is_err());
//! ```
//!
//! ## Modules
//!
//! - [`character`]: byte classification predicates
//! - [`tokenizer`]: text → tokens
//! - [`parser`]: tokens → syntax tree
//! - [`stringifier`]: syntax tree → text
//! - [`bridge`]: syntax tree ⇄ native [`Value`]
//! - [`limits`] / [`options`]: depth/size guards and escape handling
//! - [`interop`]: conversion from `serde_json::Value`
//! - [`error`]: error types

pub mod bridge;
pub mod character;
pub mod error;
pub mod interop;
pub mod limits;
pub mod node;
pub mod options;
pub mod parser;
pub mod stringifier;
pub mod token;
pub mod tokenizer;
pub mod value;

pub use bridge::{bake, to_value};
pub use error::{Expected, JessonError, Result};
pub use limits::Limits;
pub use node::{Node, ObjectProperty};
pub use options::{Options, StringEscapes};
pub use parser::Parser;
pub use stringifier::stringify_node;
pub use token::{Keyword, Punctuator, Token};
pub use tokenizer::{tokenize, Tokenizer};
pub use value::{Map, Value};

/// Parse JSON text into a native value using default [`Options`].
pub fn parse(text: &str) -> Result<Value> {
    parse_with(text, &Options::default())
}

/// Parse JSON text into a native value with explicit limits and escape handling.
pub fn parse_with(text: &str, options: &Options) -> Result<Value> {
    let tree = parse_tree_with(text, &options.limits)?;
    Ok(to_value(&tree, options.escapes))
}

/// Parse JSON text into a syntax tree without converting to native values.
pub fn parse_tree(text: &str) -> Result<Node> {
    parse_tree_with(text, &Limits::default())
}

/// Parse JSON text into a syntax tree, rejecting input beyond `limits`.
pub fn parse_tree_with(text: &str, limits: &Limits) -> Result<Node> {
    if text.len() > limits.max_input_size {
        return Err(JessonError::InputTooLarge {
            size: text.len(),
            limit: limits.max_input_size,
        });
    }
    let tokens = Tokenizer::new(text).tokenize()?;
    Parser::with_limits(tokens, *limits).parse()
}

/// Serialize a native value to compact JSON using default [`Options`].
pub fn stringify(value: &Value) -> Result<String> {
    stringify_with(value, &Options::default())
}

/// Serialize a native value to compact JSON under the depth limit in `options`.
pub fn stringify_with(value: &Value, options: &Options) -> Result<String> {
    let tree = bridge::bake_with_limits(value, options.limits)?;
    Ok(stringify_node(&tree))
}
