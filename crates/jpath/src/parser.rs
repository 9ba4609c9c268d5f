//! Splits path text into segments and segments into field + predicate.
//!
//! Parsing is lenient: anything malformed degrades into a segment that simply
//! matches nothing. [`validate`] runs the same steps but reports what the
//! lenient parser glossed over.
use super::ast::{Literal, PathExpression, Segment};
use super::predicate;
use crate::error::JPathError;

impl PathExpression {
    /// Parses path text leniently. A blank path yields an empty expression.
    pub fn parse(path: &str) -> Self {
        if path.trim().is_empty() {
            return Self::new(Vec::new());
        }
        Self::new(split_path(path).into_iter().map(parse_segment).collect())
    }
}

/// Splits a path on `.` characters that are not inside brackets.
///
/// Bracket balance is not checked. A stray `]` drives the depth negative and
/// dots stay literal until it recovers. A trailing empty segment is dropped,
/// interior empty ones are kept.
pub fn split_path(path: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut depth: i32 = 0;
    let mut start = 0;
    for (i, c) in path.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth -= 1,
            '.' if depth == 0 => {
                segments.push(&path[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if start < path.len() {
        segments.push(&path[start..]);
    }
    segments
}

/// Splits a segment at its first `[` and its last `]`.
///
/// A segment with no `]` after its first `[` has no predicate; the whole text,
/// bracket included, is taken as the field name.
pub fn parse_segment(segment: &str) -> Segment {
    match predicate_bounds(segment) {
        Some((open, close)) => Segment {
            field: segment[..open].to_string(),
            predicate: Some(predicate::compile(&segment[open + 1..close])),
        },
        None => {
            if segment.contains('[') {
                log::debug!(
                    "Segment '{}' has an unterminated predicate; treating it as a field name",
                    segment
                );
            }
            Segment {
                field: segment.to_string(),
                predicate: None,
            }
        }
    }
}

fn predicate_bounds(segment: &str) -> Option<(usize, usize)> {
    let open = segment.find('[')?;
    let close = segment.rfind(']')?;
    (close > open).then_some((open, close))
}

/// Parses a path and reports every input that [`PathExpression::parse`] would
/// have silently tolerated.
pub fn validate(path: &str) -> Result<PathExpression, JPathError> {
    if path.trim().is_empty() {
        return Err(JPathError::EmptyPath);
    }
    check_balance(path)?;

    let mut segments = Vec::new();
    for raw in split_path(path) {
        let Some((open, close)) = predicate_bounds(raw) else {
            if raw.contains('[') {
                return Err(JPathError::UnterminatedPredicate {
                    segment: raw.to_string(),
                });
            }
            segments.push(parse_segment(raw));
            continue;
        };

        for clause in predicate::clauses(&raw[open + 1..close]) {
            match predicate::compile_clause(clause) {
                None if clause.trim().is_empty() => {}
                None => {
                    return Err(JPathError::MalformedCondition {
                        segment: raw.to_string(),
                        clause: clause.to_string(),
                    });
                }
                Some(cond) => {
                    if let Literal::Overflow(literal) = cond.expected {
                        return Err(JPathError::InvalidLiteral {
                            key: cond.key,
                            literal,
                        });
                    }
                }
            }
        }
        segments.push(parse_segment(raw));
    }
    Ok(PathExpression::new(segments))
}

fn check_balance(path: &str) -> Result<(), JPathError> {
    let mut depth: i32 = 0;
    for c in path.chars() {
        match c {
            '[' => depth += 1,
            ']' => depth -= 1,
            _ => {}
        }
        if depth < 0 {
            return Err(JPathError::UnbalancedBrackets(path.to_string()));
        }
    }
    if depth == 0 {
        return Ok(());
    }
    let segment = split_path(path)
        .into_iter()
        .rev()
        .find(|s| s.contains('['))
        .unwrap_or(path);
    Err(JPathError::UnterminatedPredicate {
        segment: segment.to_string(),
    })
}
