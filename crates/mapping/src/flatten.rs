//! Conversions between nested maps and flat maps with dotted keys.
//!
//! Configuration sources often store documents flattened, e.g.
//! `{"pdf.field.customerName": "payload.customer.name"}`.
use crate::error::MappingError;
use filterpath_types::{Map, Value};
use indexmap::IndexMap;

/// Flattens nested maps into `dotted.key -> text`. `Null` leaves become empty
/// strings; lists are rendered as compact JSON.
pub fn flatten(map: &Map) -> IndexMap<String, String> {
    leaves(map)
        .into_iter()
        .map(|(key, leaf)| (key, leaf_text(leaf)))
        .collect()
}

/// Every non-map value reachable from `map`, keyed by its dotted path, in
/// document order.
pub fn leaves(map: &Map) -> Vec<(String, &Value)> {
    let mut out = Vec::new();
    collect_leaves("", map, &mut out);
    out
}

fn collect_leaves<'a>(prefix: &str, map: &'a Map, out: &mut Vec<(String, &'a Value)>) {
    for (k, v) in map {
        let key = if prefix.is_empty() {
            k.clone()
        } else {
            format!("{}.{}", prefix, k)
        };
        match v {
            Value::Map(inner) => collect_leaves(&key, inner, out),
            leaf => out.push((key, leaf)),
        }
    }
}

fn leaf_text(v: &Value) -> String {
    match v {
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Rebuilds a nested map from dotted keys.
///
/// An intermediate that already holds a non-map value is replaced by a map,
/// and later keys overwrite earlier ones.
pub fn unflatten(flat: &Map) -> Value {
    let mut root = Map::new();
    for (key, value) in flat {
        let mut parts = key.split('.').peekable();
        let mut cur = &mut root;
        while let Some(part) = parts.next() {
            if parts.peek().is_none() {
                cur.insert(part.to_string(), value.clone());
                break;
            }
            if !matches!(cur.get(part), Some(Value::Map(_))) {
                cur.insert(part.to_string(), Value::Map(Map::new()));
            }
            let Some(Value::Map(next)) = cur.get_mut(part) else {
                break;
            };
            cur = next;
        }
    }
    Value::Map(root)
}

/// Extracts `propertySources[0].source` from a configuration-server response.
///
/// Missing or empty property sources yield an empty map.
pub fn property_source(body: &Value) -> Result<Map, MappingError> {
    let Some(body) = body.as_map() else {
        return Err(MappingError::InvalidShape {
            location: "response body".to_string(),
            expected: "an object",
            found: body.kind(),
        });
    };
    let first = match body.get("propertySources") {
        None | Some(Value::Null) => {
            log::debug!("No propertySources in configuration response");
            return Ok(Map::new());
        }
        Some(Value::List(sources)) => match sources.first() {
            Some(first) => first,
            None => return Ok(Map::new()),
        },
        Some(other) => {
            return Err(MappingError::InvalidShape {
                location: "propertySources".to_string(),
                expected: "a list",
                found: other.kind(),
            });
        }
    };
    match first.get("source") {
        Some(Value::Map(source)) => Ok(source.clone()),
        None | Some(Value::Null) => {
            log::debug!("First property source has no 'source'");
            Ok(Map::new())
        }
        Some(other) => Err(MappingError::InvalidShape {
            location: "propertySources[0].source".to_string(),
            expected: "an object",
            found: other.kind(),
        }),
    }
}
