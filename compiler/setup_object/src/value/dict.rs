//! Dictionary objects.
//!
//! A dict is layered on the list primitive: it owns a backing [`List`] whose
//! entries are themselves two-element lists `[key, value]`. Setting an
//! element appends a pair; it never replaces one. Lookups scan from the
//! newest pair backwards, so the most recent binding of a key wins.

use std::fmt;

use super::heap::{LiveGuard, ObjectHeap};
use super::List;
use crate::{EvalError, Value};

/// Mapping from values to values, backed by a list of pairs.
pub struct Dict {
    pairs: List,
    live: LiveGuard,
}

impl Dict {
    /// An empty dict. Allocates the dict and its backing list.
    pub fn new(heap: &ObjectHeap) -> Result<Self, EvalError> {
        let live = heap.allocate()?;
        let pairs = List::new(heap)?;
        Ok(Dict { pairs, live })
    }

    /// Append a `[key, value]` pair, taking ownership of both.
    ///
    /// Duplicate keys are kept; see [`Dict::get`] for how lookups treat them.
    /// On failure `key` and `value` are released and the dict is unchanged.
    pub fn set_element(
        &mut self,
        heap: &ObjectHeap,
        key: Value,
        value: Value,
    ) -> Result<(), EvalError> {
        debug_assert!(
            self.live.belongs_to(heap),
            "dict pairs must come from the dict's own heap"
        );
        let mut pair = List::with_capacity(heap, 2)?;
        pair.set_element(0, key)?;
        pair.set_element(1, value)?;
        self.pairs.push(Value::from_list(pair))
    }

    /// Append `pair`, an existing `[key, value]` list, as-is.
    ///
    /// Unlike [`Dict::set_element`] no new pair list is allocated. Anything
    /// other than a two-element list is rejected with `NotAPair`. On failure
    /// `pair` is released and the dict is unchanged.
    pub fn push_pair(&mut self, pair: Value) -> Result<(), EvalError> {
        let is_pair = pair
            .as_list()
            .is_some_and(|list| list.borrow().pair().is_some());
        if !is_pair {
            return Err(EvalError::NotAPair {
                found: pair.type_name(),
            });
        }
        self.pairs.push(pair)
    }

    /// Value of the most recently appended pair whose key equals `key`.
    pub fn get(&self, key: &Value) -> Option<Value> {
        self.pairs.iter().rev().find_map(|entry| {
            let pair = entry.as_list()?.borrow();
            let (candidate, value) = pair.pair()?;
            let found = if candidate.equals(key) {
                Some(value.clone())
            } else {
                None
            };
            found
        })
    }

    /// Whether any pair has `key`.
    pub fn contains_key(&self, key: &Value) -> bool {
        self.get(key).is_some()
    }

    /// Number of pairs, duplicates included.
    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The backing list of `[key, value]` pair lists.
    #[inline]
    pub fn pairs(&self) -> &List {
        &self.pairs
    }

    #[inline]
    pub(super) fn pairs_mut(&mut self) -> &mut List {
        &mut self.pairs
    }

    /// Key and value of every pair, in insertion order.
    pub fn entries(&self) -> Vec<(Value, Value)> {
        self.pairs
            .iter()
            .filter_map(|entry| {
                let pair = entry.as_list()?.borrow();
                let entries = pair
                    .pair()
                    .map(|(key, value)| (key.clone(), value.clone()));
                entries
            })
            .collect()
    }
}

impl fmt::Debug for Dict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries()).finish()
    }
}
