//! Reference-counted handles for heap objects.
//!
//! `Heap<T>` holds immutable payloads (strings); `Shared<T>` holds payloads
//! that stay mutable after they are published (lists, dicts). Both
//! constructors are `pub(super)`, so the only way to get a handle is through
//! the factory methods on `Value`, which also register the object with an
//! `ObjectHeap`.
//!
//! Cloning a handle is taking another reference; dropping one releases it.
//! The payload is released, recursively, when the last handle goes away.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

/// Shared handle to an immutable heap object.
#[repr(transparent)]
pub struct Heap<T>(Rc<T>);

impl<T> Heap<T> {
    #[inline]
    pub(super) fn new(value: T) -> Self {
        Heap(Rc::new(value))
    }

    /// Number of live references to this object.
    #[inline]
    pub fn reference_count(&self) -> usize {
        Rc::strong_count(&self.0)
    }

    /// Whether both handles refer to the same object.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Shared handle to a mutable heap object.
///
/// Single-threaded: the evaluator never hands values across threads, so
/// borrows are checked with `RefCell` rather than locks.
#[repr(transparent)]
pub struct Shared<T>(Rc<RefCell<T>>);

impl<T> Shared<T> {
    #[inline]
    pub(super) fn new(value: T) -> Self {
        Shared(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Borrow unless the object is currently being mutated.
    #[inline]
    pub fn try_borrow(&self) -> Option<Ref<'_, T>> {
        self.0.try_borrow().ok()
    }

    /// The payload, if this is the only handle to it.
    #[inline]
    pub(super) fn get_mut(&mut self) -> Option<&mut T> {
        Rc::get_mut(&mut self.0).map(RefCell::get_mut)
    }

    /// Number of live references to this object.
    #[inline]
    pub fn reference_count(&self) -> usize {
        Rc::strong_count(&self.0)
    }

    /// Whether both handles refer to the same object.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for Shared<T> {
    #[inline]
    fn clone(&self) -> Self {
        Shared(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.try_borrow() {
            Some(inner) => inner.fmt(f),
            None => f.write_str("<borrowed>"),
        }
    }
}
