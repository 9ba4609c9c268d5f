//! Equality between tree values and predicate literals.
//!
//! Comparison is driven by the literal's type and is deliberately loose about
//! how the document stored the value: `id=30` matches an integer `30`, a float
//! `30.0` and a string `"30"`.
use crate::ast::{Literal, Predicate};
use filterpath_types::Value;
use std::borrow::Cow;

/// Tests a looked-up value (`None` when the key is missing) against a literal.
pub fn matches(actual: Option<&Value>, expected: &Literal) -> bool {
    match expected {
        Literal::Null => actual.is_none_or(Value::is_null),
        Literal::Bool(b) => match actual {
            Some(Value::Bool(a)) => a == b,
            other => text_of(other)
                .is_some_and(|s| s.eq_ignore_ascii_case(if *b { "true" } else { "false" })),
        },
        // Numbers compare as f64 so integer/float storage drift still matches.
        Literal::Integer(i) => match actual {
            Some(v @ (Value::Integer(_) | Value::Float(_))) => v.as_f64() == Some(*i as f64),
            other => text_of(other).and_then(|s| s.parse::<i64>().ok()) == Some(*i),
        },
        Literal::Float(f) => match actual {
            Some(v @ (Value::Integer(_) | Value::Float(_))) => v.as_f64() == Some(*f),
            other => text_of(other).and_then(|s| s.parse::<f64>().ok()) == Some(*f),
        },
        Literal::String(s) => text_of(actual).is_some_and(|t| t == s.as_str()),
        Literal::Overflow(_) => false,
    }
}

/// True when `node` is a map satisfying every condition. An empty predicate
/// accepts any node, map or not.
pub fn matches_all(node: &Value, predicate: &Predicate) -> bool {
    if predicate.is_empty() {
        return true;
    }
    let Some(map) = node.as_map() else {
        return false;
    };
    predicate
        .conditions
        .iter()
        .all(|cond| matches(map.get(&cond.key), &cond.expected))
}

fn text_of(value: Option<&Value>) -> Option<Cow<'_, str>> {
    value.and_then(Value::as_text)
}
