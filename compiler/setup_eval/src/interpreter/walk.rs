//! Post-order walk over a parse tree.

use setup_ir::{ParseNode, Script};
use setup_object::EvalResult;

use super::Interpreter;
use crate::stack::ensure_sufficient_stack;
use crate::Node;

impl Interpreter {
    /// Evaluate `tree` bottom-up and return the root's result.
    ///
    /// Children run left to right, each result parked in the parent's node
    /// before the parent's visitor runs. The first error stops the walk;
    /// results already produced are released on the way out.
    #[tracing::instrument(level = "trace", skip_all, fields(production = %tree.production()))]
    pub fn evaluate(&mut self, tree: &ParseNode, script: &Script) -> EvalResult {
        ensure_sufficient_stack(|| {
            let mut node = Node::new(tree, script)?;
            for (index, child) in tree.children().iter().enumerate() {
                let result = self.evaluate(child, script)?;
                node.set_result(index, result);
            }
            self.visit(&mut node)
        })
    }
}
