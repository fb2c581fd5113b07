//! List objects.

use std::fmt;

use super::heap::{LiveGuard, ObjectHeap};
use crate::{EvalError, Value};

/// Ordered sequence of values.
///
/// A list built from a known element count reserves exactly that many slots
/// up front and is filled with [`List::set_element`]. A list built
/// incrementally grows with [`List::push`].
pub struct List {
    entries: Vec<Value>,
    /// Slots reserved at construction.
    reserved: usize,
    _live: LiveGuard,
}

impl List {
    /// An empty list with no reserved slots.
    pub fn new(heap: &ObjectHeap) -> Result<Self, EvalError> {
        Self::with_capacity(heap, 0)
    }

    /// An empty list with `count` slots reserved for `set_element`.
    pub fn with_capacity(heap: &ObjectHeap, count: usize) -> Result<Self, EvalError> {
        let live = heap.allocate()?;
        let mut entries = Vec::new();
        entries.try_reserve_exact(count)?;
        Ok(List {
            entries,
            reserved: count,
            _live: live,
        })
    }

    /// Move the values out of `slots` into a new list, in order.
    ///
    /// Nothing is taken if the list itself cannot be allocated, so the caller
    /// still owns (and releases) every slot on failure. Empty slots are
    /// skipped; callers that need an exact arity check it first.
    pub fn from_slots(heap: &ObjectHeap, slots: &mut [Option<Value>]) -> Result<Self, EvalError> {
        let mut list = Self::with_capacity(heap, slots.len())?;
        list.entries.extend(slots.iter_mut().filter_map(Option::take));
        Ok(list)
    }

    /// Store `value` at `index`, taking ownership of it.
    ///
    /// `index` may name an existing element (which is released) or the next
    /// free reserved slot. Anything past the reserved slots is an
    /// `IndexOutOfRange` error: lists never grow through `set_element`.
    pub fn set_element(&mut self, index: usize, value: Value) -> Result<(), EvalError> {
        let len = self.entries.len();
        if let Some(slot) = self.entries.get_mut(index) {
            *slot = value;
            return Ok(());
        }
        if index == len && len < self.reserved {
            self.entries.push(value);
            return Ok(());
        }
        Err(EvalError::IndexOutOfRange {
            index,
            capacity: self.capacity(),
        })
    }

    /// Append `value`, growing the list if needed.
    pub fn push(&mut self, value: Value) -> Result<(), EvalError> {
        self.entries.try_reserve(1)?;
        self.entries.push(value);
        Ok(())
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.entries.get(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of slots this list can hold without growing.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.reserved.max(self.entries.len())
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.entries.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Value] {
        &self.entries
    }

    /// Move every entry onto `pending`, leaving the list empty.
    pub(super) fn drain_into(&mut self, pending: &mut Vec<Value>) {
        pending.append(&mut self.entries);
    }

    /// The two entries of a `[key, value]` pair list.
    pub fn pair(&self) -> Option<(&Value, &Value)> {
        match self.entries.as_slice() {
            [key, value] => Some((key, value)),
            _ => None,
        }
    }
}

/// Releases nested lists and dicts from a worklist rather than recursively,
/// so a deeply nested literal is released in constant stack.
impl Drop for List {
    fn drop(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let mut pending = std::mem::take(&mut self.entries);
        while let Some(value) = pending.pop() {
            match value {
                // Only a last handle owns the contents; otherwise dropping
                // the handle just releases one reference.
                Value::List(mut list) => {
                    if let Some(inner) = list.get_mut() {
                        inner.drain_into(&mut pending);
                    }
                }
                Value::Dict(mut dict) => {
                    if let Some(inner) = dict.get_mut() {
                        inner.pairs_mut().drain_into(&mut pending);
                    }
                }
                Value::Int(_) | Value::Str(_) => {}
            }
        }
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.entries).finish()
    }
}
