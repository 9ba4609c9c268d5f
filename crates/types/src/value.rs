//! The tagged value tree traversed by path queries.
//!
//! A `Value` is what a parsed JSON payload looks like once it has been handed
//! to the engine: maps, lists and scalars, with integers and floats kept
//! apart so that predicate literals can be compared against the form the
//! document actually stored.

use indexmap::IndexMap;
use std::borrow::Cow;
use std::fmt;

/// An insertion-ordered map of field names to values.
pub type Map = IndexMap<String, Value>;

/// Any node of a document tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Map(Map),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the numeric value widened to `f64`, for `Integer` and `Float` only.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Looks up `key` when this value is a map.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_map().and_then(|m| m.get(key))
    }

    /// The canonical textual form of a scalar.
    ///
    /// Booleans render as `true`/`false`, integers without a fractional part,
    /// and floats in their shortest round-trip form with a decimal point kept
    /// for integral values (`1.0`, `3.14`). `Null`, lists and maps have no
    /// textual form.
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Value::String(s) => Some(Cow::Borrowed(s)),
            Value::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
            Value::Integer(i) => Some(Cow::Owned(i.to_string())),
            Value::Float(f) => Some(Cow::Owned(format!("{:?}", f))),
            Value::Null | Value::List(_) | Value::Map(_) => None,
        }
    }

    /// A short name for the variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }
}

impl fmt::Display for Value {
    /// Scalars print their textual form; containers print as compact JSON.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_text() {
            Some(text) => f.write_str(&text),
            None => {
                let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
                f.write_str(&json)
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Map> for Value {
    fn from(m: Map) -> Self {
        Value::Map(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_textual_forms() {
        assert_eq!(Value::Bool(true).as_text().as_deref(), Some("true"));
        assert_eq!(Value::Integer(-30).as_text().as_deref(), Some("-30"));
        assert_eq!(Value::Float(3.14).as_text().as_deref(), Some("3.14"));
        assert_eq!(Value::Float(2.0).as_text().as_deref(), Some("2.0"));
        assert_eq!(Value::from("abc").as_text().as_deref(), Some("abc"));
        assert!(Value::Null.as_text().is_none());
        assert!(Value::List(vec![]).as_text().is_none());
        assert!(Value::Map(Map::new()).as_text().is_none());
    }

    #[test]
    fn test_get_only_on_maps() {
        let mut m = Map::new();
        m.insert("a".into(), Value::Integer(1));
        let v = Value::Map(m);
        assert_eq!(v.get("a"), Some(&Value::Integer(1)));
        assert_eq!(v.get("b"), None);
        assert_eq!(Value::List(vec![v.clone()]).get("a"), None);
    }

    #[test]
    fn test_display_containers_as_json() {
        let v = Value::List(vec![Value::Integer(1), Value::from("x"), Value::Null]);
        assert_eq!(v.to_string(), r#"[1,"x",null]"#);
    }
}
