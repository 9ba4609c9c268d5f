//! Foundation types for filterpath.
//!
//! Everything the query engine reads, produces, or compares is a [`Value`].

pub mod serde_impl;
pub mod value;

pub use value::{Map, Value};
