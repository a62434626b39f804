//! JSON-list encoding of multi-valued columns.
//!
//! A column holding several values stores them as a compact JSON array
//! (`["a",3]`); a column holding one value stores that value bare. Text that
//! itself looks like an array is wrapped (`["[x]"]`) so it reads back as a
//! single element.

use tracing::debug;

use crate::value::Value;

fn is_bracketed(s: &str) -> bool {
    s.starts_with('[') && s.ends_with(']')
}

/// Parses `s` as a JSON array, `None` if it is not one.
fn parse_json_list(s: &str) -> Option<Vec<Value>> {
    match serde_json::from_str::<serde_json::Value>(s) {
        Ok(serde_json::Value::Array(items)) => Some(items.into_iter().map(Value::from).collect()),
        Ok(_) => None,
        Err(err) => {
            debug!(%err, "jlist: bracketed text is not JSON, keeping literal");
            None
        }
    }
}

/// Collapses `v` to its most compact JSON-list encoding.
///
/// A one-element list holding text or a number unwraps to that element
/// (encoded as a scalar); any other list serializes as a JSON array. Scalars
/// stay as they are unless they are bracketed text.
pub fn toj(v: &Value) -> Value {
    match v {
        Value::List(items) => match items.as_slice() {
            [] => Value::Text("[]".to_string()),
            [only @ (Value::Text(_) | Value::Integer(_) | Value::Float(_))] => toj(only),
            _ => Value::Text(v.to_json()),
        },
        Value::Text(s) if is_bracketed(s) => {
            Value::Text(serde_json::Value::Array(vec![s.as_str().into()]).to_string())
        }
        other => other.clone(),
    }
}

/// Always a JSON array: lists serialize as-is, anything else is wrapped.
pub fn tojstrict(v: &Value) -> Value {
    let json = match v {
        Value::List(_) => v.to_json(),
        other => serde_json::Value::Array(vec![serde_json::Value::from(other)]).to_string(),
    };
    Value::Text(json)
}

/// Expands every argument into its elements and concatenates them.
///
/// Nulls contribute nothing; bracketed text that fails to parse is kept as a
/// single literal element.
pub fn fromj(args: &[Value]) -> Vec<Value> {
    let mut out = Vec::with_capacity(args.len());
    for arg in args {
        match arg {
            Value::Null => {}
            Value::Text(s) if is_bracketed(s) => match parse_json_list(s) {
                Some(items) => out.extend(items),
                None => out.push(arg.clone()),
            },
            Value::List(items) => out.extend(items.iter().cloned()),
            _ => out.push(arg.clone()),
        }
    }
    out
}

/// One element per argument: bracketed text becomes a nested list, null
/// stays null.
pub fn elemfromj(args: &[Value]) -> Vec<Value> {
    args.iter()
        .map(|arg| match arg {
            Value::Text(s) if is_bracketed(s) => {
                parse_json_list(s).map_or_else(|| arg.clone(), Value::List)
            }
            _ => arg.clone(),
        })
        .collect()
}

/// Flattens nested lists into one level, preserving order.
///
/// Walks an index over the vector and splices each nested list in place, so
/// arbitrarily deep nesting never grows the call stack.
pub fn flatten(mut list: Vec<Value>) -> Vec<Value> {
    let mut i = 0;
    while i < list.len() {
        if let Value::List(inner) = &mut list[i] {
            let inner = std::mem::take(inner);
            list.splice(i..=i, inner);
        } else {
            i += 1;
        }
    }
    list
}
