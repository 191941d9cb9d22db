//! Strict-JSON fidelity: any syntactically valid JSON document must parse
//! with no diagnostics and yield a tree deep-equal to a reference decode.

#![allow(clippy::float_cmp)]

use jsonmend::{parse_smart, Map, ParserOptions, Value};
use quickcheck::{Arbitrary, Gen, QuickCheck};

/// Converts a `serde_json` reference decode into this crate's value model.
fn reference(v: &serde_json::Value) -> Value {
    match v {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Boolean(*b),
        serde_json::Value::Number(n) => Value::Number(n.as_f64().expect("finite reference number")),
        serde_json::Value::String(s) => Value::String(s.clone()),
        serde_json::Value::Array(a) => Value::Array(a.iter().map(reference).collect()),
        serde_json::Value::Object(m) => Value::Object(
            m.iter()
                .map(|(k, v)| (k.clone(), reference(v)))
                .collect::<Map>(),
        ),
    }
}

fn assert_matches_reference(input: &str) {
    let expected = reference(&serde_json::from_str(input).expect("fixture must be valid JSON"));
    let outcome = parse_smart(input, ParserOptions::default());
    assert!(outcome.ok, "diagnostics on valid JSON: {:?}", outcome.errors);
    assert_eq!(outcome.error_count, 0);
    assert_eq!(outcome.results, vec![expected], "mismatch for {input:?}");
}

#[test]
fn fidelity_fixtures() {
    let fixtures = [
        "null",
        "true",
        "false",
        "0",
        "-0",
        "42",
        "-17.25",
        "1e3",
        "2.5E-2",
        "1e+10",
        r#""""#,
        r#""hello""#,
        r#""tab\tnewline\nquote\"backslash\\slash\/""#,
        r#""Aé中""#,
        r#""😀""#,
        "[]",
        "[1, 2, 3]",
        r#"[null, true, "mix", 1.5, [], {}]"#,
        "{}",
        r#"{"a": 1}"#,
        r#"{"nested": {"deep": [{"x": null}]}, "tail": "end"}"#,
        "  [ 1 ,\t2 ,\n3 ]  ",
        r#"{"unicode": "héllo wörld ✓"}"#,
    ];
    for input in fixtures {
        assert_matches_reference(input);
    }
}

#[test]
fn fidelity_preserves_key_order() {
    let outcome = parse_smart(r#"{"z": 1, "a": 2, "m": 3}"#, ParserOptions::default());
    let object = outcome.value().unwrap().as_object().unwrap().clone();
    let keys: Vec<&str> = object.keys().map(String::as_str).collect();
    assert_eq!(keys, ["z", "a", "m"]);
}

// ------------------------------------------------------------------------
// Property tests
// ------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
struct FiniteNumber(f64);

impl Arbitrary for FiniteNumber {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut value = f64::arbitrary(g);
        while !value.is_finite() {
            value = f64::arbitrary(g);
        }
        Self(value)
    }
}

/// A depth-bounded arbitrary JSON tree.
#[derive(Debug, Clone)]
struct Tree(Value);

impl Arbitrary for Tree {
    fn arbitrary(g: &mut Gen) -> Self {
        fn gen_value(g: &mut Gen, depth: usize) -> Value {
            if depth == 0 {
                match usize::arbitrary(g) % 4 {
                    0 => Value::Null,
                    1 => Value::Boolean(bool::arbitrary(g)),
                    2 => Value::Number(FiniteNumber::arbitrary(g).0),
                    _ => Value::String(String::arbitrary(g)),
                }
            } else {
                match usize::arbitrary(g) % 6 {
                    0 => Value::Null,
                    1 => Value::Boolean(bool::arbitrary(g)),
                    2 => Value::Number(FiniteNumber::arbitrary(g).0),
                    3 => Value::String(String::arbitrary(g)),
                    4 => {
                        let len = usize::arbitrary(g) % 3;
                        Value::Array((0..len).map(|_| gen_value(g, depth - 1)).collect())
                    }
                    _ => {
                        let len = usize::arbitrary(g) % 3;
                        let mut map = Map::new();
                        for _ in 0..len {
                            map.insert(String::arbitrary(g), gen_value(g, depth - 1));
                        }
                        Value::Object(map)
                    }
                }
            }
        }

        let depth = usize::arbitrary(g) % 3;
        Tree(gen_value(g, depth))
    }
}

/// Property: serializing any tree and re-reading it is lossless, produces no
/// diagnostics, and agrees with the reference decoder.
#[test]
fn roundtrip_quickcheck() {
    fn prop(tree: Tree) -> bool {
        let src = tree.0.to_string();
        let outcome = parse_smart(&src, ParserOptions::default());
        if !outcome.ok || outcome.results.len() != 1 || outcome.results[0] != tree.0 {
            return false;
        }
        let via_reference = serde_json::from_str::<serde_json::Value>(&src)
            .map(|v| reference(&v))
            .expect("serialized tree must be valid JSON");
        via_reference == tree.0
    }

    QuickCheck::new()
        .tests(500)
        .quickcheck(prop as fn(Tree) -> bool);
}

/// Property: arbitrary garbage never panics, and the outcome bookkeeping is
/// self-consistent.
#[test]
fn garbage_terminates_quickcheck() {
    fn prop(garbage: String) -> bool {
        let outcome = parse_smart(&garbage, ParserOptions::default());
        outcome.ok == outcome.errors.is_empty()
            && outcome.error_count == outcome.errors.len()
            && outcome.results.len() <= 1
            && !outcome.multiple
    }

    QuickCheck::new()
        .tests(500)
        .quickcheck(prop as fn(String) -> bool);
}
