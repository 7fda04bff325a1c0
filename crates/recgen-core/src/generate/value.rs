use std::borrow::Cow;

use indexmap::IndexMap;
use serde::Serialize;

/// One generated record: field name → value, in schema order.
///
/// `IndexMap` (not `HashMap`) keeps field insertion order so exports list
/// columns the way the schema declares them.
pub type Record = IndexMap<String, Value>;

/// A generated field value.
///
/// The `String` variant uses `Cow<'static, str>` so that values drawn from
/// static lookup tables (statuses, departments, colours, etc.) can be held
/// as `&'static str` borrows, while dynamically generated values (emails,
/// identifiers, lorem text) are stored as owned `String`s.
///
/// Serializes untagged, i.e. as the plain JSON value it represents.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(Cow<'static, str>),
    Array(Vec<Value>),
    Object(Record),
}

impl Value {
    /// Wrap a dynamically generated string.
    #[inline]
    pub fn owned(s: String) -> Self {
        Value::String(Cow::Owned(s))
    }

    /// Wrap a static string literal (zero heap allocation).
    #[inline]
    pub fn borrowed(s: &'static str) -> Self {
        Value::String(Cow::Borrowed(s))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Record> {
        match self {
            Value::Object(record) => Some(record),
            _ => None,
        }
    }

    /// Compact JSON text, used wherever a composite has to fit in one cell.
    pub fn to_json_string(&self) -> String {
        // Serializing a Value cannot fail: keys are strings and non-finite
        // floats are emitted as null by serde_json.
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Scalar text for flat formats (CSV cells, XML text). Null is empty.
    pub fn to_text(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::String(s) => s.to_string(),
            Value::Array(_) | Value::Object(_) => self.to_json_string(),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::String(s) => write!(f, "{}", s),
            Value::Array(_) | Value::Object(_) => write!(f, "{}", self.to_json_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_plain_json() {
        let mut inner = Record::new();
        inner.insert("city".to_string(), Value::borrowed("Oslo"));
        inner.insert("zip".to_string(), Value::Null);

        let mut record = Record::new();
        record.insert("id".to_string(), Value::owned("SITE-AB12CD-1".to_string()));
        record.insert("count".to_string(), Value::Int(3));
        record.insert("ratio".to_string(), Value::Float(0.5));
        record.insert("active".to_string(), Value::Bool(true));
        record.insert(
            "tags".to_string(),
            Value::Array(vec![Value::borrowed("a"), Value::borrowed("b")]),
        );
        record.insert("address".to_string(), Value::Object(inner));

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "SITE-AB12CD-1",
                "count": 3,
                "ratio": 0.5,
                "active": true,
                "tags": ["a", "b"],
                "address": {"city": "Oslo", "zip": null}
            })
        );
    }

    #[test]
    fn test_field_order_preserved() {
        let mut record = Record::new();
        record.insert("zeta".to_string(), Value::Int(1));
        record.insert("alpha".to_string(), Value::Int(2));
        let text = Value::Object(record).to_json_string();
        assert_eq!(text, r#"{"zeta":1,"alpha":2}"#);
    }

    #[test]
    fn test_to_text() {
        assert_eq!(Value::Null.to_text(), "");
        assert_eq!(Value::Int(7).to_text(), "7");
        assert_eq!(
            Value::Array(vec![Value::Int(1), Value::Int(2)]).to_text(),
            "[1,2]"
        );
        assert_eq!(format!("{}", Value::Null), "NULL");
    }
}
