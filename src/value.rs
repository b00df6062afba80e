//! Loosely-typed field values.
//!
//! Feed headers and items are open string-keyed maps whose values can be
//! scalars, objects, or arrays depending on the field. [`Value`] models that
//! input shape; [`ValueMap`] preserves insertion order, which is an output
//! invariant (child elements render in the order the caller supplied them).
//!
//! Callers that already hold JSON data can convert via `Value::from`:
//!
//! ```
//! use feedwright::Value;
//!
//! let value = Value::from(serde_json::json!({
//!     "title": "My Podcast",
//!     "itunes": { "explicit": true },
//! }));
//! let map = value.into_object().unwrap();
//! assert!(map.contains_key("itunes"));
//! ```

use chrono::{DateTime, FixedOffset, Utc};
use indexmap::IndexMap;

use crate::datetime;

/// Insertion-ordered field map used for headers, items, and object-shaped
/// field values.
pub type ValueMap = IndexMap<String, Value>;

/// A loosely-typed field value.
///
/// `Date` and `Binary` never come out of JSON conversion; they are produced
/// by date canonicalization and by callers constructing values directly.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// Canonical calendar timestamp. Date-typed fields are rewritten to this
    /// variant in place when an item or header is processed.
    Date(DateTime<FixedOffset>),
    Binary(Vec<u8>),
    Array(Vec<Value>),
    Object(ValueMap),
}

impl Value {
    /// JS-style truthiness check, used where encoders skip or default
    /// empty-ish inputs.
    pub fn is_falsy(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Int(n) => *n == 0,
            Value::Float(n) => *n == 0.0,
            Value::String(s) => s.is_empty(),
            _ => false,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ValueMap> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn into_object(self) -> Option<ValueMap> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Views a value as a list: arrays yield their elements, anything else
    /// yields a one-element slice of itself. Several encoders (category,
    /// atom links, media attachments) accept "one or many" inputs this way.
    pub fn as_list(&self) -> &[Value] {
        match self {
            Value::Array(items) => items,
            other => std::slice::from_ref(other),
        }
    }
}

/// Formats a single leaf value into its textual representation.
///
/// Calendar timestamps become RFC-822 style date strings, binary payloads
/// decode as UTF-8 text, and plain scalars pass through unchanged. Compound
/// shapes have no textual form; they degrade to an empty string — the
/// surrounding encoder is responsible for not feeding them here.
pub fn format_scalar(value: &Value) -> String {
    match value {
        Value::Date(dt) => datetime::format_rfc822(dt),
        Value::Binary(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        Value::String(s) => s.clone(),
        Value::Int(n) => n.to_string(),
        Value::Float(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(_) | Value::Object(_) => {
            tracing::debug!("compound value passed to the scalar formatter, emitting empty text");
            String::new()
        }
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

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Value::Date(dt)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(dt: DateTime<Utc>) -> Self {
        Value::Date(dt.fixed_offset())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<ValueMap> for Value {
    fn from(map: ValueMap) -> Self {
        Value::Object(map)
    }
}

/// JSON conversion. Requires `serde_json`'s `preserve_order` feature so
/// object keys keep their literal order through the conversion.
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else {
                    Value::Float(n.as_f64().unwrap_or(0.0))
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_string_passthrough() {
        assert_eq!(format_scalar(&Value::from("test")), "test");
    }

    #[test]
    fn test_format_date() {
        let dt = Utc.with_ymd_and_hms(2011, 11, 23, 15, 22, 43).unwrap();
        assert_eq!(
            format_scalar(&Value::from(dt)),
            "Wed, 23 Nov 2011 15:22:43 +0000"
        );
    }

    #[test]
    fn test_format_binary_decodes_as_text() {
        assert_eq!(format_scalar(&Value::Binary(b"hello".to_vec())), "hello");
    }

    #[test]
    fn test_format_numbers_and_bools() {
        assert_eq!(format_scalar(&Value::Int(123)), "123");
        assert_eq!(format_scalar(&Value::Float(55.701)), "55.701");
        assert_eq!(format_scalar(&Value::Bool(true)), "true");
        assert_eq!(format_scalar(&Value::Null), "");
    }

    #[test]
    fn test_falsy_values() {
        assert!(Value::Null.is_falsy());
        assert!(Value::Bool(false).is_falsy());
        assert!(Value::Int(0).is_falsy());
        assert!(Value::from("").is_falsy());
        assert!(!Value::from("x").is_falsy());
        assert!(!Value::Array(vec![]).is_falsy());
        assert!(!Value::Object(ValueMap::new()).is_falsy());
    }

    #[test]
    fn test_json_conversion_preserves_key_order() {
        let value = Value::from(serde_json::json!({
            "zebra": 1,
            "apple": 2,
            "mango": 3,
        }));
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_as_list_wraps_scalars() {
        let single = Value::from("one");
        assert_eq!(single.as_list().len(), 1);

        let many = Value::Array(vec![Value::from("a"), Value::from("b")]);
        assert_eq!(many.as_list().len(), 2);
    }
}
