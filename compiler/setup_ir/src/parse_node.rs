//! Grammar-level parse nodes.
//!
//! A `ParseNode` is what the grammar parser hands the evaluator: which
//! production matched, the child nodes it reduced (in source order), and the
//! terminal tokens it consumed directly.

use std::fmt;

use crate::Token;

/// Grammar productions the literal evaluator has a visitor for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Production {
    /// Identifier, integer, string, or a parenthesised list/dict.
    PrimaryExpression,
    /// `elem, elem, ...` inside brackets.
    ListElementList,
    /// `[ ... ]`
    List,
    /// `key : value`
    DictElement,
    /// `key : value, key : value, ...` inside braces.
    DictElementList,
    /// `{ ... }`
    Dict,
    /// Sequence of statements.
    StatementList,
    /// Whole script.
    TranslationUnit,
}

impl Production {
    /// Human-readable name for diagnostics and trace spans.
    pub fn name(self) -> &'static str {
        match self {
            Production::PrimaryExpression => "primary expression",
            Production::ListElementList => "list element list",
            Production::List => "list",
            Production::DictElement => "dict element",
            Production::DictElementList => "dict element list",
            Production::Dict => "dict",
            Production::StatementList => "statement list",
            Production::TranslationUnit => "translation unit",
        }
    }
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A reduced grammar production.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseNode {
    production: Production,
    children: Vec<ParseNode>,
    tokens: Vec<Token>,
}

impl ParseNode {
    pub fn new(production: Production, children: Vec<ParseNode>, tokens: Vec<Token>) -> Self {
        ParseNode {
            production,
            children,
            tokens,
        }
    }

    /// A node that consumed only terminals.
    pub fn leaf(production: Production, tokens: Vec<Token>) -> Self {
        Self::new(production, Vec::new(), tokens)
    }

    /// A node that reduced only other productions.
    pub fn branch(production: Production, children: Vec<ParseNode>) -> Self {
        Self::new(production, children, Vec::new())
    }

    #[inline]
    pub fn production(&self) -> Production {
        self.production
    }

    /// Number of child productions (each gets one result slot).
    #[inline]
    pub fn node_count(&self) -> usize {
        self.children.len()
    }

    #[inline]
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn children(&self) -> &[ParseNode] {
        &self.children
    }

    #[inline]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Depth of the deepest path below (a leaf has depth 1).
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 1_usize)];
        while let Some((node, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            let below = depth.saturating_add(1);
            pending.extend(node.children.iter().map(|child| (child, below)));
        }
        deepest
    }
}

/// Children are released from a worklist so deep trees drop in constant stack.
impl Drop for ParseNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
