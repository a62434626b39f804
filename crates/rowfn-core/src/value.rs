//! Values flowing through row functions.
//!
//! The host hands every function a slice of [`Value`]s and gets one back (or a
//! [`Multiset`](crate::function::Multiset) of them). `List` only appears when
//! a JSON-list encoded column has been expanded by the `jlist` helpers.

use std::fmt;

/// A scalar column value, or a sequence of them.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Integer(i64),
    Float(f64),
    Text(String),
    List(Vec<Value>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Borrow the text of a `Text` value; other variants return `None`.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Coerce to text the way string-concatenating functions see their input.
    ///
    /// Null becomes the empty string, floats keep a trailing `.0` when
    /// integral, lists use their compact JSON form.
    pub fn to_text(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Integer(i) => i.to_string(),
            Value::Float(f) => float_text(*f),
            Value::Text(s) => s.clone(),
            Value::List(_) => self.to_json(),
        }
    }

    /// Compact JSON encoding (`,`/`:` separators, non-ASCII kept literal).
    pub fn to_json(&self) -> String {
        serde_json::Value::from(self).to_string()
    }
}

fn float_text(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e16 {
        format!("{f:.1}")
    } else {
        f.to_string()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<&Value> for serde_json::Value {
    fn from(v: &Value) -> Self {
        match v {
            Value::Null => serde_json::Value::Null,
            Value::Integer(i) => serde_json::Value::from(*i),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Text(s) => serde_json::Value::String(s.clone()),
            Value::List(items) => {
                serde_json::Value::Array(items.iter().map(serde_json::Value::from).collect())
            }
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Integer(i64::from(b)),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Integer(i),
                None => n.as_f64().map_or(Value::Null, Value::Float),
            },
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            object @ serde_json::Value::Object(_) => Value::Text(object.to_string()),
        }
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

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_coercion() {
        assert_eq!(Value::Null.to_text(), "");
        assert_eq!(Value::Integer(-7).to_text(), "-7");
        assert_eq!(Value::Float(3.0).to_text(), "3.0");
        assert_eq!(Value::Float(2.5).to_text(), "2.5");
        assert_eq!(Value::from("abc").to_text(), "abc");
        assert_eq!(
            Value::List(vec![Value::from("a"), Value::Integer(3)]).to_text(),
            r#"["a",3]"#
        );
    }

    #[test]
    fn json_is_compact_and_keeps_non_ascii() {
        let v = Value::List(vec![Value::from("café"), Value::Null, Value::Float(1.5)]);
        assert_eq!(v.to_json(), r#"["café",null,1.5]"#);
    }

    #[test]
    fn from_json_maps_variants() {
        let parsed: serde_json::Value =
            serde_json::from_str(r#"[1, 2.5, "x", null, true, {"k":1}]"#).unwrap();
        assert_eq!(
            Value::from(parsed),
            Value::List(vec![
                Value::Integer(1),
                Value::Float(2.5),
                Value::from("x"),
                Value::Null,
                Value::Integer(1),
                Value::from(r#"{"k":1}"#),
            ])
        );
    }

    #[test]
    fn option_into_value() {
        assert_eq!(Value::from(None::<&str>), Value::Null);
        assert_eq!(Value::from(Some(4_i64)), Value::Integer(4));
    }
}
