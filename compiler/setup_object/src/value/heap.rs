//! Allocation accounting for heap objects.
//!
//! Every string, list, and dict carries a [`LiveGuard`] obtained from the
//! `ObjectHeap` that created it. Dropping the object drops the guard, which
//! is how the heap knows the live count. The heap can also refuse
//! allocations: past a configured object limit, or once on demand through
//! [`ObjectHeap::fail_after`], which is how tests drive the out-of-memory
//! paths.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::EvalError;

/// Limits applied by an `ObjectHeap`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeapConfig {
    /// Maximum number of simultaneously live objects. `None` is unbounded.
    pub max_objects: Option<usize>,
}

impl HeapConfig {
    /// Configuration with no object limit.
    pub const UNBOUNDED: HeapConfig = HeapConfig { max_objects: None };

    #[must_use]
    pub fn max_objects(mut self, limit: usize) -> Self {
        self.max_objects = Some(limit);
        self
    }
}

#[derive(Default)]
struct HeapStats {
    config: HeapConfig,
    live: Cell<usize>,
    allocated: Cell<usize>,
    /// Allocations still allowed before the injected failure fires.
    fail_countdown: Cell<Option<usize>>,
}

/// Allocation accountant shared by every object it creates.
///
/// Cloning an `ObjectHeap` yields another handle to the same counters.
#[derive(Clone, Default)]
pub struct ObjectHeap {
    stats: Rc<HeapStats>,
}

impl ObjectHeap {
    /// An unbounded heap.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: HeapConfig) -> Self {
        ObjectHeap {
            stats: Rc::new(HeapStats {
                config,
                ..HeapStats::default()
            }),
        }
    }

    #[inline]
    pub fn config(&self) -> HeapConfig {
        self.stats.config
    }

    /// Objects created by this heap that have not been released yet.
    #[inline]
    pub fn live_objects(&self) -> usize {
        self.stats.live.get()
    }

    /// Objects ever created by this heap.
    #[inline]
    pub fn total_allocations(&self) -> usize {
        self.stats.allocated.get()
    }

    /// Let `successes` more allocations through, then fail the next one.
    ///
    /// The failure fires once; later allocations succeed again.
    pub fn fail_after(&self, successes: usize) {
        self.stats.fail_countdown.set(Some(successes));
    }

    /// Cancel a pending `fail_after`.
    pub fn clear_failure(&self) {
        self.stats.fail_countdown.set(None);
    }

    /// Account for one new object.
    pub(crate) fn allocate(&self) -> Result<LiveGuard, EvalError> {
        let stats = &self.stats;
        if let Some(remaining) = stats.fail_countdown.get() {
            if remaining == 0 {
                stats.fail_countdown.set(None);
                tracing::debug!(live = stats.live.get(), "injected allocation failure");
                return Err(EvalError::OutOfMemory);
            }
            stats.fail_countdown.set(Some(remaining.saturating_sub(1)));
        }

        if let Some(limit) = stats.config.max_objects {
            if stats.live.get() >= limit {
                tracing::debug!(limit, "object limit reached");
                return Err(EvalError::OutOfMemory);
            }
        }

        stats.live.set(stats.live.get().saturating_add(1));
        stats.allocated.set(stats.allocated.get().saturating_add(1));
        Ok(LiveGuard {
            stats: Rc::clone(&self.stats),
        })
    }
}

impl fmt::Debug for ObjectHeap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectHeap")
            .field("config", &self.stats.config)
            .field("live", &self.stats.live.get())
            .field("allocated", &self.stats.allocated.get())
            .finish_non_exhaustive()
    }
}

/// Proof that an object was counted. Dropping it releases the count.
pub(crate) struct LiveGuard {
    stats: Rc<HeapStats>,
}

impl LiveGuard {
    /// Whether this guard was issued by `heap`.
    pub(crate) fn belongs_to(&self, heap: &ObjectHeap) -> bool {
        Rc::ptr_eq(&self.stats, &heap.stats)
    }
}

impl Drop for LiveGuard {
    fn drop(&mut self) {
        self.stats
            .live
            .set(self.stats.live.get().saturating_sub(1));
    }
}

impl fmt::Debug for LiveGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LiveGuard")
    }
}
