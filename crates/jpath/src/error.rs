use thiserror::Error;

/// Problems reported by [`validate`](crate::validate).
///
/// Evaluation never produces these: `read` tolerates every malformed input
/// and simply matches nothing (or everything, for an empty predicate).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum JPathError {
    #[error("Path is empty")]
    EmptyPath,

    #[error("Segment '{segment}' opens a predicate that is never closed")]
    UnterminatedPredicate { segment: String },

    #[error("Unbalanced brackets in path '{0}'")]
    UnbalancedBrackets(String),

    #[error("Condition '{clause}' in segment '{segment}' has no '='")]
    MalformedCondition { segment: String, clause: String },

    #[error("Literal '{literal}' for key '{key}' does not fit in a 64-bit integer")]
    InvalidLiteral { key: String, literal: String },
}
