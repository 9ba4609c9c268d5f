//! Compiles predicate text (the part between `[` and `]`) into conditions.
//!
//! Clauses are joined by the word `and` surrounded by whitespace; there is no
//! `or`, no negation and no grouping. Each clause is `key=value`, where the
//! value is either quoted (always a string) or a bare literal whose type is
//! sniffed in a fixed order: boolean, integer, decimal, string.
use crate::ast::{Condition, Literal, Predicate};
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::tag_no_case,
    character::complete::{char, digit1},
    combinator::{all_consuming, opt, recognize, value},
};
use regex::Regex;
use std::sync::LazyLock;

static CONJUNCTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+and\s+").expect("BUG: invalid CONJUNCTION_RE regex literal")
});

/// Compiles predicate text, silently dropping clauses that have no `=`.
pub fn compile(raw: &str) -> Predicate {
    let conditions = clauses(raw)
        .filter_map(|clause| {
            let cond = compile_clause(clause);
            if cond.is_none() && !clause.trim().is_empty() {
                log::debug!("Dropping predicate clause without '=': '{}'", clause);
            }
            cond
        })
        .collect();
    Predicate { conditions }
}

/// Splits predicate text into its raw clauses.
pub(crate) fn clauses(raw: &str) -> impl Iterator<Item = &str> {
    CONJUNCTION_RE.split(raw)
}

/// Compiles one `key=value` clause. Returns `None` if there is no `=`.
pub(crate) fn compile_clause(clause: &str) -> Option<Condition> {
    let (key, raw_value) = clause.split_once('=')?;
    let raw_value = raw_value.trim();
    let expected = match unquote(raw_value) {
        Some(text) => Literal::String(text.to_string()),
        None => sniff_literal(raw_value),
    };
    Some(Condition {
        key: key.trim().to_string(),
        expected,
    })
}

/// Strips one matching pair of single or double quotes.
fn unquote(raw: &str) -> Option<&str> {
    ['\'', '"'].into_iter().find_map(|q| {
        raw.strip_prefix(q).and_then(|rest| rest.strip_suffix(q))
    })
}

/// Types a bare literal. The order of the checks matters: `30` is never a
/// string and `true` is never anything but a boolean.
pub fn sniff_literal(raw: &str) -> Literal {
    if let Ok((_, b)) = all_consuming(boolean).parse(raw) {
        return Literal::Bool(b);
    }
    if all_consuming(integer).parse(raw).is_ok() {
        return match raw.parse::<i64>() {
            Ok(i) => Literal::Integer(i),
            Err(_) => {
                log::debug!("Integer literal '{}' is out of range", raw);
                Literal::Overflow(raw.to_string())
            }
        };
    }
    if all_consuming(decimal).parse(raw).is_ok()
        && let Ok(f) = raw.parse::<f64>()
    {
        return Literal::Float(f);
    }
    Literal::String(raw.to_string())
}

// --- Literal grammars ---

fn boolean(input: &str) -> IResult<&str, bool> {
    alt((
        value(true, tag_no_case("true")),
        value(false, tag_no_case("false")),
    ))
    .parse(input)
}

/// `-?[0-9]+`
fn integer(input: &str) -> IResult<&str, &str> {
    recognize((opt(char('-')), digit1)).parse(input)
}

/// `-?[0-9]+\.[0-9]+`
fn decimal(input: &str) -> IResult<&str, &str> {
    recognize((opt(char('-')), digit1, char('.'), digit1)).parse(input)
}
