//! Tree-walking evaluation of literals and identifiers.
//!
//! # Architecture
//!
//! The tree is walked post-order (`walk.rs`): every child is evaluated and
//! its result parked in the parent's `Node` before the parent's visitor
//! runs. `Interpreter::visit` dispatches on the production:
//!
//! - `collections.rs`: list, list element list, dict, dict element, dict element list
//! - `primary.rs`: identifiers, integer and string literals, nested collections
//! - statement lists and translation units are pure side effects and
//!   produce nothing here
//!
//! Visitors move child results out of their slots rather than sharing them.
//! On any error a visitor returns immediately; whatever it had built, and
//! any child results it had not consumed yet, are released as they go out
//! of scope, so no partial result leaves a failed visitor.

mod builder;
mod collections;
mod primary;
mod walk;

pub use builder::InterpreterBuilder;

use setup_ir::Production;
use setup_object::{malformed_node, EvalResult, ObjectHeap};

use crate::{Environment, Node};

/// Evaluator state: the heap new objects are accounted against and the
/// variable environment identifiers resolve in.
#[derive(Debug)]
pub struct Interpreter {
    heap: ObjectHeap,
    env: Environment,
}

impl Interpreter {
    /// An interpreter with an unbounded heap and an empty environment.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    #[inline]
    pub fn heap(&self) -> &ObjectHeap {
        &self.heap
    }

    #[inline]
    pub fn env(&self) -> &Environment {
        &self.env
    }

    #[inline]
    pub fn env_mut(&mut self) -> &mut Environment {
        &mut self.env
    }

    /// Give up the interpreter, keeping its bindings.
    pub fn into_env(self) -> Environment {
        self.env
    }

    /// Run the visitor for `node`'s production.
    #[tracing::instrument(level = "trace", skip_all, fields(production = %node.production()))]
    pub fn visit(&mut self, node: &mut Node<'_>) -> EvalResult {
        match node.production() {
            Production::PrimaryExpression => self.visit_primary_expression(node),
            Production::ListElementList => self.visit_list_element_list(node),
            Production::List => self.visit_list(node),
            Production::DictElement => self.visit_dict_element(node),
            Production::DictElementList => self.visit_dict_element_list(node),
            Production::Dict => self.visit_dict(node),
            Production::StatementList => self.visit_statement_list(node),
            Production::TranslationUnit => self.visit_translation_unit(node),
        }
    }

    /// Statement lists are nothing but side effects.
    #[allow(clippy::unused_self, reason = "every visitor shares one signature")]
    pub fn visit_statement_list(&mut self, node: &mut Node<'_>) -> EvalResult {
        tracing::trace!(statements = node.node_count(), "statement list");
        Ok(None)
    }

    /// Translation units are nothing but side effects.
    #[allow(clippy::unused_self, reason = "every visitor shares one signature")]
    pub fn visit_translation_unit(&mut self, node: &mut Node<'_>) -> EvalResult {
        tracing::trace!(children = node.node_count(), "translation unit");
        Ok(None)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

/// Move out the single child result of a pass-through node.
fn take_only_child(node: &mut Node<'_>) -> EvalResult {
    let production = node.production();
    if node.node_count() != 1 {
        return Err(malformed_node(production, "expected exactly one child"));
    }
    node.take_result(0)
        .map(Some)
        .ok_or_else(|| malformed_node(production, "child produced no value"))
}
