//! Fills output fields by running each mapped path against a payload.
use filterpath_jpath::{Resolution, read};
use filterpath_types::{Map, Value};
use indexmap::IndexMap;

/// Per-field results in mapping order. Absent fields are kept so callers can
/// report them.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFields<'a> {
    entries: IndexMap<String, Resolution<'a>>,
}

impl<'a> ResolvedFields<'a> {
    pub fn get(&self, field: &str) -> Option<&Resolution<'a>> {
        self.entries.get(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Resolution<'a>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names of fields whose path matched nothing.
    pub fn absent(&self) -> impl Iterator<Item = &str> {
        self.iter()
            .filter(|(_, res)| res.is_absent())
            .map(|(name, _)| name)
    }

    /// Renders the fields as a map value. Single results are stored bare and
    /// many results as a list; absent fields are `null` or omitted.
    pub fn to_value(&self, include_absent: bool) -> Value {
        let mut out = Map::with_capacity(self.entries.len());
        for (name, res) in &self.entries {
            if res.is_absent() && !include_absent {
                continue;
            }
            out.insert(name.clone(), res.to_value());
        }
        Value::Map(out)
    }
}

/// Resolves every `field -> path` entry against `payload`, in order.
pub fn resolve_fields<'a>(
    payload: &'a Value,
    field_paths: &IndexMap<String, String>,
) -> ResolvedFields<'a> {
    let entries = field_paths
        .iter()
        .map(|(field, path)| {
            let res = read(payload, path);
            log::debug!(
                "Field '{}' <- '{}' resolved to {} value(s)",
                field,
                path,
                res.len()
            );
            (field.clone(), res)
        })
        .collect();
    ResolvedFields { entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn paths(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_resolve_keeps_arity() {
        let payload = Value::from(json!({
            "customer": { "name": "ACME" },
            "phones": ["555-1", "555-2"],
            "notes": []
        }));
        let fields = resolve_fields(
            &payload,
            &paths(&[("name", "customer.name"), ("phones", "phones"), ("notes", "notes")]),
        );
        assert_eq!(fields.len(), 3);
        assert_eq!(fields.get("name"), Some(&Resolution::Single(&Value::from("ACME"))));
        assert_eq!(fields.get("phones").map(Resolution::len), Some(2));
        assert_eq!(fields.absent().collect::<Vec<_>>(), vec!["notes"]);
    }

    #[test]
    fn test_empty_path_is_absent() {
        let payload = Value::from(json!({ "a": 1 }));
        let fields = resolve_fields(&payload, &paths(&[("blank", "")]));
        assert!(fields.get("blank").is_some_and(Resolution::is_absent));
    }

    #[test]
    fn test_to_value() {
        let payload = Value::from(json!({ "a": 1, "bs": [true, false] }));
        let fields = resolve_fields(&payload, &paths(&[("a", "a"), ("b", "bs"), ("c", "missing")]));
        assert_eq!(fields.to_value(false), Value::from(json!({ "a": 1, "b": [true, false] })));
        assert_eq!(
            fields.to_value(true),
            Value::from(json!({ "a": 1, "b": [true, false], "c": null }))
        );
    }
}
