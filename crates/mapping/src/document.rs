//! Typed mapping documents: which output field is filled from which path.
//!
//! ```json
//! { "mapping": { "pdf": { "field": { "customerName": "payload.customer.name" } } } }
//! ```
use crate::error::MappingError;
use crate::flatten::{leaves, unflatten};
use filterpath_types::{Map, Value};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

const MAPPING_KEY: &str = "mapping";
const PDF_KEY: &str = "pdf";

/// Knobs for turning stored mapping documents into resolvable paths.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MappingOptions {
    /// Stripped from the front of each path (first match wins).
    pub strip_prefixes: Vec<String>,
}

impl Default for MappingOptions {
    fn default() -> Self {
        Self {
            strip_prefixes: vec!["payload.".to_string(), "$.".to_string()],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MappingDocument {
    #[serde(default)]
    pub mapping: Option<MappingSection>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MappingSection {
    #[serde(default)]
    pub pdf: Option<PdfMapping>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PdfMapping {
    /// Field name to path. Nested maps name fields with dotted keys.
    #[serde(default)]
    pub field: Map,
}

impl MappingDocument {
    /// Builds a document from a nested value, moving a bare `pdf` root under
    /// `mapping` when needed.
    pub fn from_value(value: Value) -> Result<Self, MappingError> {
        let mut root = match value {
            Value::Map(root) => root,
            other => {
                return Err(MappingError::InvalidShape {
                    location: "mapping document".to_string(),
                    expected: "an object",
                    found: other.kind(),
                });
            }
        };
        if !root.contains_key(MAPPING_KEY)
            && let Some(node) = root.shift_remove(PDF_KEY)
        {
            log::debug!("Wrapping root '{}' under '{}'", PDF_KEY, MAPPING_KEY);
            let mut wrapper = Map::new();
            wrapper.insert(PDF_KEY.to_string(), node);
            root.insert(MAPPING_KEY.to_string(), Value::Map(wrapper));
        }
        let json = serde_json::Value::from(&Value::Map(root));
        Ok(serde_json::from_value(json)?)
    }

    /// Builds a document from a flat map with dotted keys.
    pub fn from_flat(flat: &Map) -> Result<Self, MappingError> {
        Self::from_value(unflatten(flat))
    }

    /// The field map, or `None` when any level is missing.
    pub fn fields(&self) -> Option<&Map> {
        self.mapping
            .as_ref()
            .and_then(|m| m.pdf.as_ref())
            .map(|pdf| &pdf.field)
    }

    /// Returns `field name -> path` with paths trimmed and prefixes stripped.
    ///
    /// `Null` paths become empty strings and resolve to nothing. Lists are
    /// rejected since they cannot name a path.
    pub fn field_paths(
        &self,
        options: &MappingOptions,
    ) -> Result<IndexMap<String, String>, MappingError> {
        let Some(fields) = self.fields() else {
            return Ok(IndexMap::new());
        };
        let mut out = IndexMap::with_capacity(fields.len());
        for (name, leaf) in leaves(fields) {
            let path = match leaf {
                Value::Null => String::new(),
                Value::List(_) => {
                    return Err(MappingError::InvalidFieldPath {
                        field: name,
                        found: leaf.kind(),
                    });
                }
                other => sanitize_path(&other.to_string(), options),
            };
            out.insert(name, path);
        }
        Ok(out)
    }
}

/// Trims `path` and strips the first matching configured prefix.
pub fn sanitize_path(path: &str, options: &MappingOptions) -> String {
    let path = path.trim();
    options
        .strip_prefixes
        .iter()
        .find_map(|prefix| path.strip_prefix(prefix.as_str()))
        .unwrap_or(path)
        .to_string()
}
