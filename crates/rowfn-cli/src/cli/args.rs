//! Command-line argument conversion to function values.

use rowfn_core::Value;

/// Converts one command-line argument.
///
/// Untyped arguments are always text. Typed arguments map `null` to null,
/// integer literals to integers and finite float literals to floats.
pub fn parse_arg(raw: &str, typed: bool) -> Value {
    if !typed {
        return Value::from(raw);
    }
    if raw == "null" {
        return Value::Null;
    }
    if let Ok(i) = raw.parse::<i64>() {
        return Value::Integer(i);
    }
    match raw.parse::<f64>() {
        Ok(f) if f.is_finite() && raw.bytes().any(|b| b.is_ascii_digit()) => Value::Float(f),
        _ => Value::from(raw),
    }
}
