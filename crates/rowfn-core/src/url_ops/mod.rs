//! URL decomposition and encoding functions.
//!
//! Splits URLs into their components (with a MIME guess for the filename),
//! explodes query strings into columns or a JSON object, and converts text
//! to and from form encoding.

mod codec;
mod mime;
mod parse;
mod path;
mod query;

use serde_json::Map;

use crate::error::{first_arg, single_arg, Result};
use crate::function::Multiset;
use crate::value::Value;
use query::query_component;

pub use codec::{percent_decode_plus, percent_encode_plus};
pub use mime::guess_mime_type;
pub use parse::{parse_url, UrlParts};
pub use path::split_directory;
pub use query::parse_query_pairs;

/// Column names of the `urlsplit` multiset.
pub const URLSPLIT_COLUMNS: [&str; 9] = [
    "scheme", "netloc", "path", "filename", "type", "subtype", "params", "query", "fragment",
];

fn concat_text(args: &[Value]) -> String {
    args.iter().map(Value::to_text).collect()
}

/// `urlsplit(text1, [text2, ...])`: one row describing the concatenated URL.
///
/// # Examples
///
/// - `urlsplit('http://www.test.com/apath/bpath/fname.pdf')` →
///   `http | www.test.com | /apath/bpath/ | fname.pdf | application | pdf | | |`
pub fn urlsplit(args: &[Value]) -> Multiset {
    let url = concat_text(args);
    let parts = parse_url(&url);
    let (directory, filename) = split_directory(&parts.path);

    let (major, minor) = match guess_mime_type(&url) {
        Some(mime) => match mime.split_once('/') {
            Some((major, minor)) => (major.to_string(), minor.to_string()),
            None => (mime.clone(), String::new()),
        },
        None => (path::extension(&filename).to_string(), String::new()),
    };

    let row = [
        parts.scheme,
        parts.netloc,
        directory,
        filename,
        major,
        minor,
        parts.params,
        parts.query,
        parts.fragment,
    ]
    .into_iter()
    .map(Value::Text)
    .collect();

    Multiset::single_row(URLSPLIT_COLUMNS.iter().map(|c| c.to_string()).collect(), row)
}

/// `urllocation(text1, [text2, ...])`: `scheme://netloc/path` of the URL.
pub fn urllocation(args: &[Value]) -> Value {
    Value::Text(parse_url(&concat_text(args)).location())
}

/// `urlquerysplit(url_or_query)`: query keys as columns, values as the row.
///
/// Pairs are ordered by `(value, key)`; repeated keys stay separate columns.
pub fn urlquerysplit(args: &[Value]) -> Result<Multiset> {
    let input = first_arg("urlquerysplit", args)?.to_text();
    let mut pairs = parse_query_pairs(&query_component(&input));
    pairs.sort_by(|(ka, va), (kb, vb)| va.cmp(vb).then_with(|| ka.cmp(kb)));

    let (columns, row): (Vec<String>, Vec<Value>) = pairs
        .into_iter()
        .map(|(k, v)| (k, Value::Text(v)))
        .unzip();
    Ok(Multiset::single_row(columns, row))
}

/// `urlquerytojdict(url_or_query)`: query as a compact JSON object.
///
/// A key seen once maps to its value, a repeated key to the list of values.
pub fn urlquerytojdict(args: &[Value]) -> Result<Value> {
    let input = first_arg("urlquerytojdict", args)?.to_text();
    let mut object: Map<String, serde_json::Value> = Map::new();
    for (key, value) in parse_query_pairs(&query_component(&input)) {
        match object.get_mut(&key) {
            None => {
                object.insert(key, serde_json::Value::String(value));
            }
            Some(serde_json::Value::Array(values)) => values.push(value.into()),
            Some(existing) => {
                let first = existing.take();
                *existing = serde_json::Value::Array(vec![first, value.into()]);
            }
        }
    }
    Ok(Value::Text(serde_json::Value::Object(object).to_string()))
}

/// `urldecode(text)`: form-decoded text; null stays null.
pub fn urldecode(args: &[Value]) -> Result<Value> {
    Ok(match single_arg("urldecode", args)? {
        Value::Null => Value::Null,
        v => Value::Text(percent_decode_plus(&v.to_text())),
    })
}

/// `urlencode(text)`: form-encoded text; null stays null.
pub fn urlencode(args: &[Value]) -> Result<Value> {
    Ok(match single_arg("urlencode", args)? {
        Value::Null => Value::Null,
        v => Value::Text(percent_encode_plus(&v.to_text())),
    })
}
