#![deny(clippy::arithmetic_side_effects)]
//! Setup Object - runtime values for the setup script interpreter.
//!
//! This crate provides:
//! - `Value`: the closed set of runtime variants (integer, string, list, dict)
//! - `SetupString`, `List`, `Dict`: the heap object payloads
//! - `ObjectHeap`: allocation accounting, object limits, and fault injection
//! - `EvalError`: the evaluator's error type
//!
//! # Ownership
//!
//! Heap objects are reference counted through `Rc`. Building a value yields a
//! single owner; handing it to a parent is a move; sharing it is a `clone`;
//! dropping the last owner releases everything it owns. Every heap object
//! holds a guard registered with the `ObjectHeap` that created it, so the
//! heap always knows how many objects are still alive.

mod errors;
mod value;

pub use errors::{malformed_node, EvalError, EvalResult};
pub use value::{Dict, Heap, HeapConfig, List, ObjectHeap, SetupString, Shared, Value};
