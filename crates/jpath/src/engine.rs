//! Evaluates path expressions against a value tree.
//!
//! Evaluation folds over the segments left to right, carrying a working set
//! of borrowed nodes. Each segment looks its field up in every node of the
//! set (flattening list values one level) and then filters the result with
//! the segment's predicate. Nothing is cached between calls.

use crate::ast::{PathExpression, Segment};
use crate::matcher;
use filterpath_types::Value;

/// The outcome of a path lookup.
///
/// A single surviving node is returned bare, so a one-element list match and
/// a scalar match look the same.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<'a> {
    Absent,
    Single(&'a Value),
    Many(Vec<&'a Value>),
}

impl<'a> Resolution<'a> {
    fn from_working_set(mut working: Vec<&'a Value>) -> Self {
        match working.len() {
            0 => Resolution::Absent,
            1 => Resolution::Single(working.remove(0)),
            _ => Resolution::Many(working),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Resolution::Absent)
    }

    /// Number of matched nodes.
    pub fn len(&self) -> usize {
        match self {
            Resolution::Absent => 0,
            Resolution::Single(_) => 1,
            Resolution::Many(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.is_absent()
    }

    /// All matched nodes in encounter order.
    pub fn values(&self) -> Vec<&'a Value> {
        match self {
            Resolution::Absent => Vec::new(),
            Resolution::Single(v) => vec![*v],
            Resolution::Many(values) => values.clone(),
        }
    }

    /// Clones the result into an owned value: `Null` when absent, the node
    /// itself when single, a list when many.
    pub fn to_value(&self) -> Value {
        match self {
            Resolution::Absent => Value::Null,
            Resolution::Single(v) => (*v).clone(),
            Resolution::Many(values) => Value::List(values.iter().map(|v| (*v).clone()).collect()),
        }
    }
}

/// Resolves `path` against `root`.
///
/// A blank path or a `Null` root resolves to [`Resolution::Absent`]. Malformed
/// paths never fail; they just match nothing.
pub fn read<'a>(root: &'a Value, path: &str) -> Resolution<'a> {
    if path.trim().is_empty() || root.is_null() {
        return Resolution::Absent;
    }
    read_expression(root, &PathExpression::parse(path))
}

/// Resolves an already parsed expression against `root`.
pub fn read_expression<'a>(root: &'a Value, expr: &PathExpression) -> Resolution<'a> {
    if expr.is_empty() || root.is_null() {
        return Resolution::Absent;
    }

    let mut working = vec![root];
    for segment in expr.segments() {
        working = step(&working, segment);
        if working.is_empty() {
            break;
        }
    }
    Resolution::from_working_set(working)
}

/// Applies one segment: field lookup with flattening, then the predicate.
fn step<'a>(working: &[&'a Value], segment: &Segment) -> Vec<&'a Value> {
    let mut next = Vec::new();
    for &ctx in working {
        match ctx {
            Value::Map(map) => push_flattened(map.get(&segment.field), &mut next),
            Value::List(items) => {
                for item in items {
                    if let Value::Map(map) = item {
                        push_flattened(map.get(&segment.field), &mut next);
                    }
                }
            }
            // Scalars have no fields.
            _ => {}
        }
    }
    log::trace!("Field '{}' yields {} node(s)", segment.field, next.len());
    if let Some(predicate) = &segment.predicate {
        next.retain(|node| matcher::matches_all(node, predicate));
        log::trace!("Predicate [{}] keeps {} node(s)", predicate, next.len());
    }
    next
}

/// Pushes a looked-up value, splicing a list's elements in one level deep.
fn push_flattened<'a>(found: Option<&'a Value>, out: &mut Vec<&'a Value>) {
    match found {
        None | Some(Value::Null) => {}
        Some(Value::List(items)) => out.extend(items.iter()),
        Some(value) => out.push(value),
    }
}
