//! Error types for literal evaluation.
//!
//! Allocation failure is the only condition a well-formed parse tree can
//! trigger. The other variants report a broken caller contract: a list
//! written past its reserved slots, or a parse node whose shape the grammar
//! can never produce.

use std::collections::TryReserveError;

use setup_ir::Production;

use crate::Value;

/// Result of evaluating one node: a value, or nothing for side-effect-only
/// productions.
pub type EvalResult = Result<Option<Value>, EvalError>;

/// Evaluation failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// An object or buffer could not be allocated.
    #[error("out of memory")]
    OutOfMemory,

    /// `List::set_element` was asked to store outside the reserved slots.
    #[error("list index {index} is outside the {capacity} reserved slots")]
    IndexOutOfRange { index: usize, capacity: usize },

    /// A dict entry that is not a two-element `[key, value]` list.
    #[error("dict entries must be [key, value] lists, found {found}")]
    NotAPair { found: &'static str },

    /// The parser handed over a node the grammar cannot produce.
    #[error("malformed {production} node: {reason}")]
    MalformedNode {
        production: Production,
        reason: &'static str,
    },
}

impl EvalError {
    /// Returns `true` for allocation failures.
    #[inline]
    pub fn is_out_of_memory(&self) -> bool {
        matches!(self, EvalError::OutOfMemory)
    }
}

impl From<TryReserveError> for EvalError {
    fn from(_: TryReserveError) -> Self {
        EvalError::OutOfMemory
    }
}

/// Build a `MalformedNode` error.
#[cold]
pub fn malformed_node(production: Production, reason: &'static str) -> EvalError {
    tracing::debug!(%production, reason, "rejecting malformed parse node");
    EvalError::MalformedNode { production, reason }
}
