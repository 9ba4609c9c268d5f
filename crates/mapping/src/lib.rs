//! Mapping documents name the payload path that fills each output field.
//!
//! This crate turns stored mapping documents (nested, or flattened with
//! dotted keys, or wrapped in a configuration-server response) into a
//! `field -> path` map and resolves it against a payload with
//! [`filterpath_jpath::read`].

pub mod document;
pub mod error;
pub mod flatten;
pub mod resolve;

pub use document::{MappingDocument, MappingOptions, sanitize_path};
pub use error::MappingError;
pub use flatten::{flatten, property_source, unflatten};
pub use resolve::{ResolvedFields, resolve_fields};
