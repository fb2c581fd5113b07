#![deny(clippy::arithmetic_side_effects)]
//! Setup IR - parser-facing shapes for the setup script evaluator.
//!
//! The lexer and grammar parser are external collaborators. This crate only
//! models what they hand to the evaluator:
//!
//! - `Token`: a classified byte range in the script (`TokenKind`, position, size)
//! - `ParseNode`: a grammar production with its child nodes and tokens
//! - `Script`: the immutable source buffer tokens point into

mod parse_node;
mod script;
mod token;

pub use parse_node::{ParseNode, Production};
pub use script::Script;
pub use token::{Token, TokenKind};
