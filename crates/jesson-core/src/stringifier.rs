//! Stringifier: syntax tree → compact JSON text.
//!
//! Output has no insignificant whitespace and keeps object properties in
//! their stored order.
//!
//! # String escaping
//!
//! Strings are stored raw, so the only escape added on output is a backslash
//! before a `"` that is not already preceded by one. Control characters,
//! backslashes and non-ASCII text are written exactly as stored.
//!
//! # Numbers
//!
//! `Integer` and `BigInt` print their decimal digits. `Float` uses `f64`'s
//! `Display`: the shortest digits that read back to the same value, never in
//! exponent form, and no fractional part for integral values (`3.0` → `3`).
//! NaN and infinities have no JSON spelling and print as `null`.

use crate::node::Node;

/// Render `node` as compact JSON.
pub fn stringify_node(node: &Node) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Object(body) => {
            out.push('{');
            for (i, property) in body.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_string(&property.key, out);
                out.push(':');
                write_node(&property.value, out);
            }
            out.push('}');
        }
        Node::Array(body) => {
            out.push('[');
            for (i, child) in body.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_node(child, out);
            }
            out.push(']');
        }
        Node::String(raw) => write_string(raw, out),
        Node::Integer(n) => out.push_str(&n.to_string()),
        Node::BigInt(n) => out.push_str(&n.to_string()),
        Node::Float(n) => write_float(*n, out),
        Node::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
        Node::Null => out.push_str("null"),
    }
}

fn write_string(raw: &str, out: &mut String) {
    out.push('"');
    let mut previous = None;
    for c in raw.chars() {
        if c == '"' && previous != Some('\\') {
            out.push('\\');
        }
        out.push(c);
        previous = Some(c);
    }
    out.push('"');
}

fn write_float(n: f64, out: &mut String) {
    if n.is_finite() {
        out.push_str(&n.to_string());
    } else {
        out.push_str("null");
    }
}
