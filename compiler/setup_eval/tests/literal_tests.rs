//! Evaluation of literal expressions through the full tree walk.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

mod common;

use common::{init_tracing, TreeBuilder};
use setup_eval::{Interpreter, ParseNode, Script, Value};

fn eval(build: impl FnOnce(&mut TreeBuilder) -> ParseNode) -> (Interpreter, Option<Value>) {
    init_tracing();
    let mut builder = TreeBuilder::new();
    let tree = build(&mut builder);
    let script = builder.finish();
    let mut interp = Interpreter::new();
    let value = interp.evaluate(&tree, &script).unwrap();
    (interp, value)
}

fn eval_value(build: impl FnOnce(&mut TreeBuilder) -> ParseNode) -> Value {
    eval(build).1.expect("expression should produce a value")
}

mod integers {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_each_base() {
        assert_eq!(eval_value(|b| b.int("0x1F")), Value::int(31));
        assert_eq!(eval_value(|b| b.int("017")), Value::int(15));
        assert_eq!(eval_value(|b| b.int("42")), Value::int(42));
        assert_eq!(eval_value(|b| b.int("0")), Value::int(0));
    }

    #[test]
    fn test_full_width_literal_keeps_its_bits() {
        let value = eval_value(|b| b.int("0xFFFFFFFFFFFFFFFF"));
        assert_eq!(value, Value::int(-1));
    }

    #[test]
    fn test_oversized_literal_saturates() {
        let value = eval_value(|b| b.int("99999999999999999999999"));
        assert_eq!(value, Value::int_from_bits(u64::MAX));
    }
}

mod strings {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escapes_are_decoded() {
        let value = eval_value(|b| b.string(br#""a\tb\n""#));
        let string = value.as_str().unwrap();
        assert_eq!(string.as_bytes(), b"a\tb\n");
        assert_eq!(string.as_bytes_with_terminator(), b"a\tb\n\0");
        assert_eq!(string.size(), 5);
    }

    #[test]
    fn test_numeric_escapes() {
        let value = eval_value(|b| b.string(br#""\x41\101\x4""#));
        assert_eq!(value.as_str().unwrap().as_bytes(), b"AA\x04");
    }

    #[test]
    fn test_escaped_quote_does_not_end_literal() {
        let value = eval_value(|b| b.string(br#""say \"hi\"""#));
        assert_eq!(value.as_str().unwrap().as_bytes(), br#"say "hi""#);
    }

    #[test]
    fn test_display_round_trips_to_literal_syntax() {
        let value = eval_value(|b| b.string(br#""tab\there""#));
        assert_eq!(value.to_string(), r#""tab\there""#);
    }
}

mod lists {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_list() {
        let (interp, value) = eval(|b| b.list(Vec::new()));
        let value = value.unwrap();
        assert_eq!(value.as_list().unwrap().borrow().len(), 0);
        assert_eq!(interp.heap().live_objects(), 1);
    }

    #[test]
    fn test_mixed_elements_in_order() {
        let value = eval_value(|b| {
            let one = b.int("1");
            let s = b.string(br#""two""#);
            let three = b.int("0x3");
            b.list(vec![one, s, three])
        });
        assert_eq!(value.to_string(), r#"[1, "two", 3]"#);
    }

    #[test]
    fn test_nested_lists() {
        let value = eval_value(|b| {
            let inner = b.int("1");
            let inner = b.list(vec![inner]);
            let empty = b.list(Vec::new());
            b.list(vec![inner, empty])
        });
        assert_eq!(value.to_string(), "[[1], []]");
    }

    #[test]
    fn test_dropping_the_result_releases_every_object() {
        let (interp, value) = eval(|b| {
            let a = b.string(br#""a""#);
            let inner = b.list(vec![a]);
            let key = b.string(br#""k""#);
            let d = b.dict(vec![(key, inner)]);
            b.list(vec![d])
        });
        assert!(interp.heap().live_objects() > 0);
        drop(value);
        assert_eq!(interp.heap().live_objects(), 0);
    }
}

mod dicts {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_dict() {
        let value = eval_value(|b| b.dict(Vec::new()));
        assert_eq!(value.as_dict().unwrap().borrow().len(), 0);
        assert_eq!(value.to_string(), "{}");
    }

    #[test]
    fn test_duplicate_keys_are_appended() {
        let value = eval_value(|b| {
            let k1 = b.string(br#""a""#);
            let v1 = b.int("1");
            let k2 = b.string(br#""a""#);
            let v2 = b.int("2");
            b.dict(vec![(k1, v1), (k2, v2)])
        });
        let dict = value.as_dict().unwrap().borrow();
        assert_eq!(dict.len(), 2);

        let heap = setup_eval::ObjectHeap::new();
        let key = Value::string(&heap, b"a").unwrap();
        assert_eq!(dict.get(&key), Some(Value::int(2)));
    }

    #[test]
    fn test_pairs_are_two_element_lists() {
        let value = eval_value(|b| {
            let k = b.int("7");
            let v = b.string(br#""seven""#);
            b.dict(vec![(k, v)])
        });
        let dict = value.as_dict().unwrap().borrow();
        let pair = dict.pairs().get(0).unwrap().as_list().unwrap().borrow();
        assert_eq!(pair.len(), 2);
        assert_eq!(pair.get(0), Some(&Value::int(7)));
        assert_eq!(value.to_string(), r#"{7: "seven"}"#);
    }

    #[test]
    fn test_container_values() {
        let value = eval_value(|b| {
            let k = b.string(br#""xs""#);
            let one = b.int("1");
            let xs = b.list(vec![one]);
            b.dict(vec![(k, xs)])
        });
        assert_eq!(value.to_string(), r#"{"xs": [1]}"#);
    }
}

mod statements {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_translation_unit_produces_nothing_and_leaks_nothing() {
        let (interp, value) = eval(|b| {
            let s = b.string(br#""dropped""#);
            let l = b.list(vec![s]);
            b.unit(vec![l])
        });
        assert!(value.is_none());
        assert_eq!(interp.heap().live_objects(), 0);
        assert!(interp.heap().total_allocations() > 0);
    }
}

mod nesting {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_deeply_nested_lists() {
        const DEPTH: usize = 500;

        let mut builder = TreeBuilder::new();
        let mut tree = builder.int("1");
        for _ in 0..DEPTH {
            tree = builder.list(vec![tree]);
        }
        let script: Script = builder.finish();

        let mut interp = Interpreter::new();
        let mut value = interp.evaluate(&tree, &script).unwrap().unwrap();
        for _ in 0..DEPTH {
            let inner = value.as_list().unwrap().borrow().get(0).cloned().unwrap();
            value = inner;
        }
        assert_eq!(value, Value::int(1));
        assert_eq!(interp.heap().live_objects(), 0);
    }

    #[test]
    fn test_dropping_a_very_deep_result_releases_everything() {
        const DEPTH: usize = 100_000;

        let mut builder = TreeBuilder::new();
        let mut tree = builder.int("1");
        for _ in 0..DEPTH {
            tree = builder.list(vec![tree]);
        }
        let script = builder.finish();

        let mut interp = Interpreter::new();
        let value = interp.evaluate(&tree, &script).unwrap().unwrap();
        assert_eq!(interp.heap().live_objects(), DEPTH);

        drop(value);
        assert_eq!(interp.heap().live_objects(), 0);
    }
}
