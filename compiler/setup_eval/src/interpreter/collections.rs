//! List and dict visitors.

use setup_object::{malformed_node, Dict, EvalError, EvalResult, List, Value};

use super::{take_only_child, Interpreter};
use crate::Node;

impl Interpreter {
    /// `elem, elem, ...`: a list holding each child result in order.
    pub fn visit_list_element_list(&mut self, node: &mut Node<'_>) -> EvalResult {
        let production = node.production();
        let count = node.node_count();
        let mut list = List::with_capacity(&self.heap, count)?;
        for index in 0..count {
            let element = node
                .take_result(index)
                .ok_or_else(|| malformed_node(production, "list element produced no value"))?;
            list.set_element(index, element)?;
        }
        Ok(Some(Value::from_list(list)))
    }

    /// `[ ... ]`: empty brackets build an empty list; otherwise the element
    /// list below has already built it.
    pub fn visit_list(&mut self, node: &mut Node<'_>) -> EvalResult {
        if node.node_count() == 0 {
            return Value::empty_list(&self.heap).map(Some);
        }
        take_only_child(node)
    }

    /// `key : value`: a two-element `[key, value]` list.
    pub fn visit_dict_element(&mut self, node: &mut Node<'_>) -> EvalResult {
        let production = node.production();
        if node.node_count() != 2 {
            return Err(malformed_node(production, "expected a key and a value"));
        }
        if !node.all_results_present() {
            return Err(malformed_node(production, "key or value produced no value"));
        }
        let pair = List::from_slots(&self.heap, node.results_mut())?;
        Ok(Some(Value::from_list(pair)))
    }

    /// `key : value, ...`: a dict holding each element's pair list, moved
    /// in as-is. Repeated keys are all kept.
    pub fn visit_dict_element_list(&mut self, node: &mut Node<'_>) -> EvalResult {
        let production = node.production();
        let mut dict = Dict::new(&self.heap)?;
        for index in 0..node.node_count() {
            let element = node
                .take_result(index)
                .ok_or_else(|| malformed_node(production, "dict element produced no value"))?;
            dict.push_pair(element).map_err(|err| match err {
                EvalError::NotAPair { .. } => {
                    malformed_node(production, "dict element is not a pair")
                }
                other => other,
            })?;
        }
        Ok(Some(Value::from_dict(dict)))
    }

    /// `{ ... }`: empty braces build an empty dict; otherwise the element
    /// list below has already built it.
    pub fn visit_dict(&mut self, node: &mut Node<'_>) -> EvalResult {
        if node.node_count() == 0 {
            return Value::empty_dict(&self.heap).map(Some);
        }
        take_only_child(node)
    }
}
