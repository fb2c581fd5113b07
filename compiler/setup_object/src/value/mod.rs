//! Runtime values for the setup interpreter.
//!
//! # Allocation
//!
//! Heap objects (`SetupString`, `List`, `Dict`) are only created through
//! their constructors, which take the `ObjectHeap` to account against, and
//! are only published as `Value`s through the factory methods below.
//! Handles (`Heap<T>`, `Shared<T>`) cannot be built any other way.
//!
//! ```text
//! let n = Value::int(42);                       // inline, cannot fail
//! let s = Value::string(&heap, b"root")?;       // counted, may fail
//! let l = Value::from_list(List::new(&heap)?);  // counted, may fail
//! ```
//!
//! Every allocating path returns `EvalError::OutOfMemory` instead of a
//! value, and anything already moved into a half-built object is released
//! when that object is dropped on the error path.

mod dict;
mod handle;
mod heap;
mod list;
mod string;

use std::fmt;

pub use dict::Dict;
pub use handle::{Heap, Shared};
pub use heap::{HeapConfig, ObjectHeap};
pub use list::List;
pub use string::SetupString;

use crate::EvalError;

/// Runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    /// 64-bit integer, stored inline.
    Int(i64),
    /// Terminated byte string.
    Str(Heap<SetupString>),
    /// Ordered list of values.
    List(Shared<List>),
    /// Dictionary backed by a list of `[key, value]` pairs.
    Dict(Shared<Dict>),
}

// Factory Methods

impl Value {
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    /// Integer from an unsigned literal, reinterpreting the bits.
    ///
    /// Literals are parsed as `u64`; whether the top bit is a sign is up to
    /// whoever consumes the value.
    #[inline]
    pub fn int_from_bits(bits: u64) -> Self {
        Value::Int(i64::from_ne_bytes(bits.to_ne_bytes()))
    }

    /// Copy `bytes` into a new string value.
    pub fn string(heap: &ObjectHeap, bytes: &[u8]) -> Result<Self, EvalError> {
        SetupString::from_raw(heap, bytes).map(Value::from_string)
    }

    #[inline]
    pub fn from_string(string: SetupString) -> Self {
        Value::Str(Heap::new(string))
    }

    pub fn empty_list(heap: &ObjectHeap) -> Result<Self, EvalError> {
        List::new(heap).map(Value::from_list)
    }

    /// Move every value out of `slots` into a new list.
    ///
    /// See [`List::from_slots`] for the failure contract.
    pub fn list_from_slots(
        heap: &ObjectHeap,
        slots: &mut [Option<Value>],
    ) -> Result<Self, EvalError> {
        List::from_slots(heap, slots).map(Value::from_list)
    }

    #[inline]
    pub fn from_list(list: List) -> Self {
        Value::List(Shared::new(list))
    }

    pub fn empty_dict(heap: &ObjectHeap) -> Result<Self, EvalError> {
        Dict::new(heap).map(Value::from_dict)
    }

    /// Build a dict by appending each `(key, value)` in order.
    pub fn dict_from_pairs(
        heap: &ObjectHeap,
        pairs: impl IntoIterator<Item = (Value, Value)>,
    ) -> Result<Self, EvalError> {
        let mut dict = Dict::new(heap)?;
        for (key, value) in pairs {
            dict.set_element(heap, key, value)?;
        }
        Ok(Value::from_dict(dict))
    }

    #[inline]
    pub fn from_dict(dict: Dict) -> Self {
        Value::Dict(Shared::new(dict))
    }
}

// Value Methods

impl Value {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&SetupString> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&Shared<List>> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&Shared<Dict>> {
        match self {
            Value::Dict(dict) => Some(dict),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "integer",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Dict(_) => "dict",
        }
    }

    /// Non-zero integers and non-empty containers are true.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Int(n) => *n != 0,
            Value::Str(s) => !s.is_empty(),
            Value::List(list) => !list.borrow().is_empty(),
            Value::Dict(dict) => !dict.borrow().is_empty(),
        }
    }

    /// Key equality: integers and strings compare by content, lists and
    /// dicts by identity.
    pub fn equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a.as_bytes() == b.as_bytes(),
            (Value::List(a), Value::List(b)) => a.ptr_eq(b),
            (Value::Dict(a), Value::Dict(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    /// Whether both values are the same object (or equal integers).
    pub fn is_same_object(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a.ptr_eq(b),
            (Value::List(a), Value::List(b)) => a.ptr_eq(b),
            (Value::Dict(a), Value::Dict(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    /// Live references to the underlying object; `None` for inline integers.
    pub fn reference_count(&self) -> Option<usize> {
        match self {
            Value::Int(_) => None,
            Value::Str(s) => Some(s.reference_count()),
            Value::List(list) => Some(list.reference_count()),
            Value::Dict(dict) => Some(dict.reference_count()),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

/// Renders the value in script literal syntax.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Str(s) => string::write_quoted(f, s.as_bytes()),
            Value::List(list) => {
                let Some(list) = list.try_borrow() else {
                    return f.write_str("[...]");
                };
                f.write_str("[")?;
                for (index, element) in list.iter().enumerate() {
                    if index != 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_str("]")
            }
            Value::Dict(dict) => {
                let Some(dict) = dict.try_borrow() else {
                    return f.write_str("{...}");
                };
                f.write_str("{")?;
                for (index, (key, value)) in dict.entries().iter().enumerate() {
                    if index != 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}
