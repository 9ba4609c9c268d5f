//! A small, filterable path language for JSON-like value trees.
//!
//! Paths are dot-separated field names; any segment may carry a bracketed
//! predicate of `key=value` conditions joined with `and`:
//!
//! ```text
//! application.applicants[relationship='primary'].addresses[type='billing'].street
//! ```
//!
//! Lists found along the way are flattened into the working set, so a path
//! can fan out across every element without indexing. See [`read`].

pub mod ast;
pub mod engine;
pub mod error;
pub mod matcher;
mod parser;
pub mod predicate;

// --- Public API ---
pub use ast::{Condition, Literal, PathExpression, Predicate, Segment};
pub use engine::{Resolution, read, read_expression};
pub use error::JPathError;
pub use parser::{parse_segment, split_path, validate};
