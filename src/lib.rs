//! Filterable dotted-path queries over JSON-like documents.
//!
//! This crate ties the workspace together: the value model from
//! `filterpath-types`, the query engine from `filterpath-jpath`, and mapping
//! resolution from `filterpath-mapping`, plus the configuration and file
//! handling used by the `filterpath` binary.
//!
//! ```
//! use filterpath::{Resolution, Value, read};
//! use serde_json::json;
//!
//! let data = Value::from(json!({
//!     "items": [ { "id": 30, "name": "thirty" }, { "id": 40, "name": "forty" } ]
//! }));
//! assert_eq!(read(&data, "items[id=30].name"), Resolution::Single(&Value::from("thirty")));
//! ```

pub mod commands;
pub mod config;
pub mod error;

// --- Public API ---
pub use config::{OutputSettings, Settings};
pub use error::FilterPathError;
pub use filterpath_jpath::{
    Condition, JPathError, Literal, PathExpression, Predicate, Resolution, Segment, read,
    read_expression, validate,
};
pub use filterpath_mapping::{
    MappingDocument, MappingError, MappingOptions, ResolvedFields, flatten, property_source,
    resolve_fields, sanitize_path, unflatten,
};
pub use filterpath_types::{Map, Value};
