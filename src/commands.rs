//! File-level operations behind the `filterpath` binary.
use crate::error::FilterPathError;
use filterpath_jpath::{JPathError, validate};
use filterpath_mapping::{MappingDocument, MappingError, MappingOptions, property_source};
use filterpath_types::Value;
use indexmap::IndexMap;
use std::fs;
use std::path::Path;

/// Reads a document into a value tree. Files ending in `.yml` or `.yaml`
/// are parsed as YAML, anything else as JSON.
pub fn load_document(path: &Path) -> Result<Value, FilterPathError> {
    let text = fs::read_to_string(path)?;
    if is_yaml(path) {
        log::debug!("Loading YAML from {}", path.display());
        Ok(serde_yaml::from_str(&text)?)
    } else {
        log::debug!("Loading JSON from {}", path.display());
        Ok(serde_json::from_str(&text)?)
    }
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yml") || ext.eq_ignore_ascii_case("yaml"))
}

/// Turns a parsed mapping file into `field -> path`.
///
/// With `flat`, the document is a map of dotted keys, or a configuration
/// server response whose first property source holds them.
pub fn mapping_paths(
    doc: Value,
    flat: bool,
    options: &MappingOptions,
) -> Result<IndexMap<String, String>, FilterPathError> {
    let doc = if flat {
        let source = if doc.get("propertySources").is_some() {
            property_source(&doc)?
        } else {
            match doc {
                Value::Map(m) => m,
                other => {
                    return Err(MappingError::InvalidShape {
                        location: "flat mapping".to_string(),
                        expected: "an object",
                        found: other.kind(),
                    }
                    .into());
                }
            }
        };
        MappingDocument::from_flat(&source)?
    } else {
        MappingDocument::from_value(doc)?
    };
    Ok(doc.field_paths(options)?)
}

/// Strictly validates every named path, returning the ones that fail.
pub fn check_paths<'a, I>(paths: I) -> Vec<(String, JPathError)>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    paths
        .into_iter()
        .filter_map(|(name, path)| validate(path).err().map(|e| (name.to_string(), e)))
        .collect()
}

/// Serializes a value for printing.
pub fn render(value: &Value, pretty: bool) -> Result<String, FilterPathError> {
    Ok(if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    })
}
