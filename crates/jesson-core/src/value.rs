//! Native, dynamically typed values handed to `stringify` and returned by `parse`.
//!
//! Arrays and objects live in shared cells (`Rc<RefCell<..>>`). Cloning a
//! composite `Value` clones the handle, not the contents, so callers can build
//! graphs where one object appears in several places or even contains itself.
//! The address of the cell is the value's identity; see [`Value::identity`].
//!
//! Equality (`PartialEq`) is structural. Comparing or `Debug`-printing a
//! cyclic value does not terminate.

use indexmap::IndexMap;
use num_bigint::BigInt;
use std::cell::RefCell;
use std::rc::Rc;

/// Insertion-ordered string-keyed map.
pub type Map = IndexMap<String, Value>;

pub type SharedArray = Rc<RefCell<Vec<Value>>>;
pub type SharedMap = Rc<RefCell<Map>>;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    BigInt(BigInt),
    String(String),
    Array(SharedArray),
    Object(SharedMap),
}

impl Value {
    pub fn array(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Array(Rc::new(RefCell::new(items.into_iter().collect())))
    }

    pub fn object<K: Into<String>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
        Value::Object(Rc::new(RefCell::new(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )))
    }

    pub fn empty_object() -> Self {
        Value::Object(Rc::default())
    }

    pub fn empty_array() -> Self {
        Value::Array(Rc::default())
    }

    /// Address of the shared cell for arrays and objects; `None` for primitives.
    pub fn identity(&self) -> Option<*const ()> {
        match self {
            Value::Array(cell) => Some(Rc::as_ptr(cell) as *const ()),
            Value::Object(cell) => Some(Rc::as_ptr(cell) as *const ()),
            _ => None,
        }
    }

    /// Insert into an object value. Returns the previous value under `key`.
    ///
    /// Does nothing and returns `None` for non-objects.
    pub fn insert(&self, key: impl Into<String>, value: Value) -> Option<Value> {
        match self {
            Value::Object(map) => map.borrow_mut().insert(key.into(), value),
            _ => None,
        }
    }

    /// Append to an array value. Returns `false` for non-arrays.
    pub fn push(&self, value: Value) -> bool {
        match self {
            Value::Array(items) => {
                items.borrow_mut().push(value);
                true
            }
            _ => false,
        }
    }

    /// Clone of the handle stored under `key` in an object value.
    pub fn get(&self, key: &str) -> Option<Value> {
        match self {
            Value::Object(map) => map.borrow().get(key).cloned(),
            _ => None,
        }
    }

    /// Clone of the handle at `index` in an array value.
    pub fn at(&self, index: usize) -> Option<Value> {
        match self {
            Value::Array(items) => items.borrow().get(index).cloned(),
            _ => None,
        }
    }

    /// Number of entries in an array or object.
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::Array(items) => Some(items.borrow().len()),
            Value::Object(map) => Some(map.borrow().len()),
            _ => None,
        }
    }

    /// `true` for an array or object with no entries; `false` for primitives.
    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(n) => Some(*n),
            Value::Integer(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_bigint(&self) -> Option<&BigInt> {
        match self {
            Value::BigInt(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(n.into())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<BigInt> for Value {
    fn from(n: BigInt) -> Self {
        Value::BigInt(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::array(items)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Object(Rc::new(RefCell::new(map)))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
