//! Variable environment for the setup interpreter.
//!
//! A stack of scopes with the global scope at the bottom. Lookups walk from
//! the innermost scope outwards; bindings always go into the innermost one.

use rustc_hash::FxHashMap;

use setup_object::{EvalError, Value};

/// One level of variable bindings, keyed by identifier bytes.
#[derive(Clone, Debug, Default)]
pub struct Scope {
    bindings: FxHashMap<Box<[u8]>, Value>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, name: &[u8]) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Bind `name`, replacing (and releasing) any previous value.
    pub fn set(&mut self, name: &[u8], value: Value) -> Result<(), EvalError> {
        if let Some(slot) = self.bindings.get_mut(name) {
            *slot = value;
            return Ok(());
        }

        let mut key = Vec::new();
        key.try_reserve_exact(name.len())?;
        key.extend_from_slice(name);
        self.bindings.try_reserve(1)?;
        self.bindings.insert(key.into_boxed_slice(), value);
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Scope stack consulted by identifier evaluation.
#[derive(Clone, Debug)]
pub struct Environment {
    /// Never empty; index 0 is the global scope.
    scopes: Vec<Scope>,
}

impl Environment {
    /// An environment holding only an empty global scope.
    pub fn new() -> Self {
        Environment {
            scopes: vec![Scope::new()],
        }
    }

    /// Number of scopes, the global one included.
    #[inline]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    pub fn push_scope(&mut self) {
        self.scopes.push(Scope::new());
    }

    /// Pop the innermost scope, releasing its bindings. The global scope
    /// stays.
    pub fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// The value currently bound to `name`, innermost scope first.
    ///
    /// The environment keeps its reference; clone the value to retain it.
    pub fn get_variable(&self, name: &[u8]) -> Option<&Value> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }

    /// Bind `name` to `value` in the innermost scope, taking ownership.
    ///
    /// Fails only when the binding cannot be allocated.
    pub fn set_variable(&mut self, name: &[u8], value: Value) -> Result<(), EvalError> {
        match self.scopes.last_mut() {
            Some(scope) => scope.set(name, value),
            None => {
                let mut global = Scope::new();
                global.set(name, value)?;
                self.scopes.push(global);
                Ok(())
            }
        }
    }

    pub fn is_defined(&self, name: &[u8]) -> bool {
        self.get_variable(name).is_some()
    }

    /// The bottom scope.
    pub fn global(&self) -> Option<&Scope> {
        self.scopes.first()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
