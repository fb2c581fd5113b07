//! `InterpreterBuilder` for creating interpreters with a given heap and
//! environment.

use setup_object::{HeapConfig, ObjectHeap};

use super::Interpreter;
use crate::Environment;

/// Builder for `Interpreter`.
///
/// An explicit heap wins over a heap config; with neither, the interpreter
/// gets an unbounded heap of its own.
#[derive(Debug, Default)]
pub struct InterpreterBuilder {
    heap: Option<ObjectHeap>,
    heap_config: HeapConfig,
    env: Option<Environment>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account objects against an existing heap (shared counters).
    #[must_use]
    pub fn heap(mut self, heap: ObjectHeap) -> Self {
        self.heap = Some(heap);
        self
    }

    /// Limits for a heap created by `build`.
    #[must_use]
    pub fn heap_config(mut self, config: HeapConfig) -> Self {
        self.heap_config = config;
        self
    }

    /// Start from an existing set of bindings.
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            heap: self
                .heap
                .unwrap_or_else(|| ObjectHeap::with_config(self.heap_config)),
            env: self.env.unwrap_or_default(),
        }
    }
}
