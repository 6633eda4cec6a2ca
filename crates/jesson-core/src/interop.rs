//! Conversion from `serde_json` documents into native [`Value`]s.
//!
//! Object order survives because the workspace enables serde_json's
//! `preserve_order` feature. Numbers map to `Integer` when they fit `i64`,
//! to `BigInt` when they are integral but too large (`u64` above `i64::MAX`),
//! and to `Float` otherwise.

use crate::value::{Map, Value};
use num_bigint::BigInt;

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => from_number(&n),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => Value::array(items.into_iter().map(Value::from)),
            serde_json::Value::Object(map) => Value::from(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect::<Map>(),
            ),
        }
    }
}

fn from_number(n: &serde_json::Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::Integer(i)
    } else if let Some(u) = n.as_u64() {
        Value::BigInt(BigInt::from(u))
    } else {
        Value::Float(n.as_f64().unwrap_or(f64::NAN))
    }
}
