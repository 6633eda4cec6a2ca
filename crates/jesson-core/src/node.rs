//! Syntax tree produced by the parser and by baking native values.
//!
//! Nodes own their children exclusively. String nodes (and object keys) hold
//! raw text: escape sequences are kept exactly as they appeared in the source,
//! or as they were supplied by the caller when baking.

use num_bigint::BigInt;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Properties in insertion order.
    Object(Vec<ObjectProperty>),
    Array(Vec<Node>),
    /// Raw string contents, escapes not decoded.
    String(String),
    Integer(i64),
    Float(f64),
    BigInt(BigInt),
    Boolean(bool),
    Null,
}

/// One `"key": value` pair inside an object body. Not a value on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectProperty {
    /// Raw key text, escapes not decoded.
    pub key: String,
    pub value: Node,
}

impl ObjectProperty {
    pub fn new(key: impl Into<String>, value: Node) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

impl Node {
    /// Shorthand for building object nodes in tests and callers.
    pub fn object<K: Into<String>>(properties: impl IntoIterator<Item = (K, Node)>) -> Self {
        Node::Object(
            properties
                .into_iter()
                .map(|(key, value)| ObjectProperty::new(key, value))
                .collect(),
        )
    }

    pub fn string(raw: impl Into<String>) -> Self {
        Node::String(raw.into())
    }

    /// Property list if this is an object node.
    pub fn properties(&self) -> Option<&[ObjectProperty]> {
        match self {
            Node::Object(body) => Some(body),
            _ => None,
        }
    }

    /// Element list if this is an array node.
    pub fn elements(&self) -> Option<&[Node]> {
        match self {
            Node::Array(body) => Some(body),
            _ => None,
        }
    }

    /// First property value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.properties()?
            .iter()
            .find(|property| property.key == key)
            .map(|property| &property.value)
    }
}

/// Renders compact JSON via the stringifier.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::stringifier::stringify_node(self))
    }
}
