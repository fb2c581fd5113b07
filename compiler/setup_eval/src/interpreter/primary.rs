//! Primary expressions: identifiers, literals, and nested collections.

use setup_ir::{Production, TokenKind};
use setup_object::{malformed_node, EvalError, EvalResult, SetupString, Value};

use super::{take_only_child, Interpreter};
use crate::escape::decode_escapes;
use crate::literal::parse_unsigned;
use crate::Node;

impl Interpreter {
    pub fn visit_primary_expression(&mut self, node: &mut Node<'_>) -> EvalResult {
        let production = node.production();

        // A list or dict, already evaluated.
        if node.node_count() != 0 {
            return take_only_child(node);
        }

        let [token] = node.tokens() else {
            return Err(malformed_node(production, "expected exactly one token"));
        };
        let text = node.token_text(token)?;
        let value = match token.kind {
            TokenKind::Identifier => self.resolve_identifier(text)?,
            TokenKind::HexInteger => Value::int_from_bits(parse_unsigned(text, 16)),
            TokenKind::OctalInteger => Value::int_from_bits(parse_unsigned(text, 8)),
            TokenKind::DecimalInteger => Value::int_from_bits(parse_unsigned(text, 10)),
            TokenKind::String => self.string_literal(production, text)?,
            TokenKind::Keyword | TokenKind::Punctuator => {
                return Err(malformed_node(production, "token cannot start an expression"));
            }
        };
        Ok(Some(value))
    }

    /// The value bound to `name`. An unbound name is created as `0`.
    fn resolve_identifier(&mut self, name: &[u8]) -> Result<Value, EvalError> {
        if let Some(value) = self.env.get_variable(name) {
            return Ok(value.clone());
        }

        tracing::debug!(
            name = %String::from_utf8_lossy(name),
            "creating undefined variable"
        );
        let value = Value::int(0);
        self.env.set_variable(name, value.clone())?;
        Ok(value)
    }

    /// `text` is the whole token, quotes included. The string starts one
    /// past the opening quote and is decoded in its own buffer.
    fn string_literal(&self, production: Production, text: &[u8]) -> Result<Value, EvalError> {
        let Some((&b'"', raw)) = text.split_first() else {
            return Err(malformed_node(production, "string token must open with a quote"));
        };
        if raw.is_empty() {
            return Err(malformed_node(production, "string token has no closing quote"));
        }

        let mut string = SetupString::from_raw(&self.heap, raw)?;
        string.rewrite_in_place(decode_escapes);
        Ok(Value::from_string(string))
    }
}
