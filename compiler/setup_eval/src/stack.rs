//! Stack growth for the recursive tree walk.
//!
//! Literals nest without limit: `[[[...]]]` or `{"k": {"k": ...}}` costs
//! three walker frames per level (primary expression, container, element
//! list), so a machine-generated script can go far deeper than the native
//! stack allows. Releasing the result is iterative (see `List`'s `Drop`);
//! only evaluation needs the guard.

/// Run one walker frame, first growing the stack by `SEGMENT` bytes if
/// fewer than `HEADROOM` remain.
///
/// `HEADROOM` covers one frame of `evaluate` plus the visitor it dispatches to.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    const HEADROOM: usize = 64 * 1024;
    const SEGMENT: usize = 1024 * 1024;

    stacker::maybe_grow(HEADROOM, SEGMENT, f)
}

/// No `stacker` on wasm32; the engine enforces its own stack limit.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
