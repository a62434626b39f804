//! Word-break hints and anchor construction.

use once_cell::sync::Lazy;
use regex::Regex;

use super::escape::escape;

/// Marker inserted where a renderer may break a long token.
pub const WORD_BREAK: &str = "<wbr>";

const BREAK_REPLACEMENT: &str = "${1}<wbr>${2}";

/// A delimiter followed by a character that is not a delimiter, a decimal
/// digit (Unicode `Nd`) or whitespace.
static BREAK_POINT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([./-])([^./\-\d\s])").expect("word-break pattern is valid"));

/// Inserts [`WORD_BREAK`] after `.`, `/` or `-` when the next character is
/// not itself a delimiter, a decimal digit or whitespace.
pub fn add_breaks(s: &str) -> String {
    BREAK_POINT.replace_all(s, BREAK_REPLACEMENT).into_owned()
}

fn with_scheme(href: &str) -> String {
    if href.contains("://") {
        href.to_string()
    } else {
        format!("http://{href}")
    }
}

/// Builds `<a href="...">...</a>`.
///
/// With `text` the link text is used verbatim; without it the escaped,
/// word-broken `href` is shown.
pub fn anchor(href: &str, text: Option<&str>) -> String {
    let target = with_scheme(href);
    match text {
        Some(text) => format!("<a href=\"{target}\">{text}</a>"),
        None => format!("<a href=\"{target}\">{}</a>", add_breaks(&escape(href))),
    }
}
