//! Runtime values passed between plugins and callers
//!
//! Values can be numbers, text, booleans, objects, lists, null, or errors.

use crate::MeasureError;
use serde::Serialize;
use std::collections::BTreeMap;

/// Runtime value in Measure
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value")]
pub enum Value {
    Number(f64),
    Text(String),
    Bool(bool),
    Object(BTreeMap<String, Value>),
    List(Vec<Value>),
    Null,
    Error(MeasureError),
}

impl Value {
    // ========== Safe Accessors (never panic) ==========

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_error(&self) -> Option<&MeasureError> {
        match self {
            Value::Error(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Get a field from an object, or an error value
    pub fn get(&self, field: &str) -> Value {
        match self {
            Value::Object(map) => map.get(field).cloned().unwrap_or(Value::Null),
            Value::Error(e) => Value::Error(e.clone()),
            _ => Value::Null,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "Number",
            Value::Text(_) => "Text",
            Value::Bool(_) => "Bool",
            Value::Object(_) => "Object",
            Value::List(_) => "List",
            Value::Null => "Null",
            Value::Error(_) => "Error",
        }
    }

    /// Plain JSON view, without the type tags used by the serde derive
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => serde_json::Number::from_f64(*n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Text(s) => serde_json::Value::String(s.clone()),
            Value::List(l) => serde_json::Value::Array(l.iter().map(Value::to_json).collect()),
            Value::Object(o) => serde_json::Value::Object(
                o.iter().map(|(k, v)| (k.clone(), v.to_json())).collect()
            ),
            Value::Error(e) => serde_json::json!({"_error": {"code": e.code, "message": e.message}}),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<MeasureError> for Value {
    fn from(e: MeasureError) -> Self {
        Value::Error(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        assert_eq!(Value::Number(2.5).as_number(), Some(2.5));
        assert_eq!(Value::from("m").as_text(), Some("m"));
        assert!(Value::Text("x".into()).as_number().is_none());
        assert!(Value::from(MeasureError::internal("x")).is_error());
    }

    #[test]
    fn test_get_field() {
        let mut map = BTreeMap::new();
        map.insert("id".to_string(), Value::from("Length"));
        let obj = Value::Object(map);
        assert_eq!(obj.get("id"), Value::from("Length"));
        assert_eq!(obj.get("missing"), Value::Null);
    }

    #[test]
    fn test_to_json() {
        let list = Value::List(vec![Value::Number(1.0), Value::from("meter"), Value::Null]);
        assert_eq!(list.to_json(), serde_json::json!([1.0, "meter", null]));
    }

    #[test]
    fn test_to_json_error() {
        let err = Value::Error(MeasureError::unknown_category("Bogus"));
        let json = err.to_json();
        assert_eq!(json["_error"]["code"], "UNKNOWN_CATEGORY");
    }
}
