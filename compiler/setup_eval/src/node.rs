//! Evaluation-time view of a parse node.

use setup_ir::{ParseNode, Production, Script, Token};
use setup_object::{malformed_node, EvalError, Value};

/// A parse node being evaluated, with one result slot per child.
///
/// Children are evaluated first and park their results here. A visitor
/// takes what it consumes (leaving the slot empty); anything left over is
/// released with the node.
pub struct Node<'a> {
    parse: &'a ParseNode,
    script: &'a Script,
    results: Vec<Option<Value>>,
}

impl<'a> Node<'a> {
    /// A node with an empty result slot per child.
    pub fn new(parse: &'a ParseNode, script: &'a Script) -> Result<Self, EvalError> {
        let mut results = Vec::new();
        results.try_reserve_exact(parse.node_count())?;
        results.resize_with(parse.node_count(), || None);
        Ok(Node {
            parse,
            script,
            results,
        })
    }

    /// A node whose child results are already known.
    ///
    /// `results` must hold exactly one slot per child.
    pub fn with_results(
        parse: &'a ParseNode,
        script: &'a Script,
        results: Vec<Option<Value>>,
    ) -> Result<Self, EvalError> {
        if results.len() != parse.node_count() {
            return Err(malformed_node(
                parse.production(),
                "result slots do not match child count",
            ));
        }
        Ok(Node {
            parse,
            script,
            results,
        })
    }

    #[inline]
    pub fn production(&self) -> Production {
        self.parse.production()
    }

    #[inline]
    pub fn script(&self) -> &'a Script {
        self.script
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.parse.node_count()
    }

    #[inline]
    pub fn tokens(&self) -> &'a [Token] {
        self.parse.tokens()
    }

    /// Park a child's result in its slot, releasing whatever was there.
    pub fn set_result(&mut self, index: usize, result: Option<Value>) {
        if let Some(slot) = self.results.get_mut(index) {
            *slot = result;
        }
    }

    #[inline]
    pub fn result(&self, index: usize) -> Option<&Value> {
        self.results.get(index).and_then(Option::as_ref)
    }

    /// Move a child's result out of its slot.
    #[inline]
    pub fn take_result(&mut self, index: usize) -> Option<Value> {
        self.results.get_mut(index).and_then(Option::take)
    }

    #[inline]
    pub fn results_mut(&mut self) -> &mut [Option<Value>] {
        &mut self.results
    }

    /// Whether every child produced a value.
    pub fn all_results_present(&self) -> bool {
        self.results.iter().all(Option::is_some)
    }

    /// The bytes of `token` in this node's script.
    pub fn token_text(&self, token: &Token) -> Result<&'a [u8], EvalError> {
        self.script
            .token_text(token)
            .ok_or_else(|| malformed_node(self.production(), "token lies outside the script"))
    }
}

impl std::fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("production", &self.production())
            .field("results", &self.results)
            .finish_non_exhaustive()
    }
}
