//! Defines the parsed form of path expressions.
use std::fmt;

/// A parsed path: an ordered list of dot-separated segments.
#[derive(Debug, Clone, PartialEq)]
pub struct PathExpression {
    pub(crate) segments: Vec<Segment>,
}

impl PathExpression {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for PathExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, seg) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", seg)?;
        }
        Ok(())
    }
}

/// One field step, optionally followed by a bracketed filter (e.g. `addresses[type='home']`).
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub field: String,
    pub predicate: Option<Predicate>,
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.field)?;
        if let Some(pred) = &self.predicate {
            write!(f, "[{}]", pred)?;
        }
        Ok(())
    }
}

/// A conjunction of equality conditions. An empty predicate matches everything.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Predicate {
    pub conditions: Vec<Condition>,
}

impl Predicate {
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cond) in self.conditions.iter().enumerate() {
            if i > 0 {
                f.write_str(" and ")?;
            }
            write!(f, "{}={}", cond.key, cond.expected)?;
        }
        Ok(())
    }
}

/// A single `key=value` test.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub key: String,
    pub expected: Literal,
}

/// The typed right-hand side of a condition.
///
/// Only scalars can be written in a predicate, so lists and maps have no
/// variant here.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    /// Integer syntax whose value does not fit in 64 bits. Never matches.
    Overflow(String),
}

impl fmt::Display for Literal {
    /// Prints the literal in predicate syntax, quoting strings.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Null => f.write_str("null"),
            Literal::Bool(b) => write!(f, "{}", b),
            Literal::Integer(i) => write!(f, "{}", i),
            Literal::Float(x) => write!(f, "{:?}", x),
            Literal::String(s) if s.contains('\'') => write!(f, "\"{}\"", s),
            Literal::String(s) => write!(f, "'{}'", s),
            Literal::Overflow(raw) => f.write_str(raw),
        }
    }
}
