//! Shared helpers for the evaluator integration tests.
//!
//! `TreeBuilder` plays the part of the lexer and grammar parser: each helper
//! appends the token text to a script buffer and returns the parse node the
//! grammar would have reduced.

#![allow(dead_code, reason = "not every test file uses every helper")]

use std::sync::Once;

use setup_eval::{ParseNode, Production, Script, Token, TokenKind};

static TRACING_INIT: Once = Once::new();

/// Install a trace subscriber when `RUST_LOG` is set.
///
/// Enable with `RUST_LOG=setup_eval=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_test_writer().with_target(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

#[derive(Default)]
pub struct TreeBuilder {
    data: Vec<u8>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `text` to the script and return the token covering it.
    pub fn token(&mut self, kind: TokenKind, text: &[u8]) -> Token {
        let position = u32::try_from(self.data.len()).unwrap();
        let size = u32::try_from(text.len()).unwrap();
        self.data.extend_from_slice(text);
        self.data.push(b' ');
        Token::new(kind, position, size)
    }

    /// A primary expression of a single token.
    pub fn primary(&mut self, kind: TokenKind, text: &[u8]) -> ParseNode {
        let token = self.token(kind, text);
        ParseNode::leaf(Production::PrimaryExpression, vec![token])
    }

    pub fn ident(&mut self, name: &str) -> ParseNode {
        self.primary(TokenKind::Identifier, name.as_bytes())
    }

    /// An integer literal, classified the way the lexer would.
    pub fn int(&mut self, text: &str) -> ParseNode {
        let kind = if text.starts_with("0x") || text.starts_with("0X") {
            TokenKind::HexInteger
        } else if text.len() > 1 && text.starts_with('0') {
            TokenKind::OctalInteger
        } else {
            TokenKind::DecimalInteger
        };
        self.primary(kind, text.as_bytes())
    }

    /// A string literal; `literal` includes its quotes.
    pub fn string(&mut self, literal: &[u8]) -> ParseNode {
        self.primary(TokenKind::String, literal)
    }

    /// `[ elements ]` as a primary expression.
    pub fn list(&mut self, elements: Vec<ParseNode>) -> ParseNode {
        let open = self.token(TokenKind::Punctuator, b"[");
        let close = self.token(TokenKind::Punctuator, b"]");
        let children = if elements.is_empty() {
            Vec::new()
        } else {
            vec![ParseNode::branch(Production::ListElementList, elements)]
        };
        let list = ParseNode::new(Production::List, children, vec![open, close]);
        ParseNode::branch(Production::PrimaryExpression, vec![list])
    }

    /// `{ key: value, ... }` as a primary expression.
    pub fn dict(&mut self, entries: Vec<(ParseNode, ParseNode)>) -> ParseNode {
        let open = self.token(TokenKind::Punctuator, b"{");
        let close = self.token(TokenKind::Punctuator, b"}");
        let children = if entries.is_empty() {
            Vec::new()
        } else {
            let elements = entries
                .into_iter()
                .map(|(key, value)| {
                    let colon = self.token(TokenKind::Punctuator, b":");
                    ParseNode::new(Production::DictElement, vec![key, value], vec![colon])
                })
                .collect();
            vec![ParseNode::branch(Production::DictElementList, elements)]
        };
        let dict = ParseNode::new(Production::Dict, children, vec![open, close]);
        ParseNode::branch(Production::PrimaryExpression, vec![dict])
    }

    /// A whole script of `statements`.
    pub fn unit(&mut self, statements: Vec<ParseNode>) -> ParseNode {
        ParseNode::branch(
            Production::TranslationUnit,
            vec![ParseNode::branch(Production::StatementList, statements)],
        )
    }

    pub fn finish(self) -> Script {
        Script::new(self.data)
    }
}
