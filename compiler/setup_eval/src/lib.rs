//! Setup Eval - literal and identifier evaluation for setup scripts.
//!
//! This crate turns literal productions of an already-parsed setup script
//! into runtime values and resolves bare identifiers against a variable
//! environment.
//!
//! # Architecture
//!
//! - `Interpreter`: owns the `ObjectHeap` and `Environment`; one visitor per
//!   production plus a post-order `evaluate` walk
//! - `Node`: a parse node plus the result slots of its children
//! - `Environment`: scoped variable bindings
//! - `decode_escapes`: in-place C escape decoding for string literals
//! - `parse_unsigned`: `strtoull`-style integer literal parsing
//!
//! # Re-exports
//!
//! Value types come from `setup_object` and parse-tree types from `setup_ir`.

mod environment;
mod escape;
mod interpreter;
mod literal;
mod node;
mod stack;

pub use environment::{Environment, Scope};
pub use escape::decode_escapes;
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use literal::parse_unsigned;
pub use node::Node;
pub use stack::ensure_sufficient_stack;

pub use setup_ir::{ParseNode, Production, Script, Token, TokenKind};
pub use setup_object::{
    Dict, EvalError, EvalResult, HeapConfig, List, ObjectHeap, SetupString, Value,
};
