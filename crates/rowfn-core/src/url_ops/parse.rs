//! RFC 3986-style splitting of a URL into its six components.
//!
//! Works on arbitrary text: relative references, bare query strings and
//! garbage all split into (possibly empty) components without failing.

const SCHEME_CHARS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789+-.";

/// Schemes whose last path segment may carry `;params`.
const USES_PARAMS: &[&str] = &[
    "", "ftp", "hdl", "prospero", "http", "imap", "https", "shttp", "rtsp", "rtspu", "sip",
    "sips", "mms", "sftp", "tel",
];

/// `scheme://netloc/path;params?query#fragment`, every part possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlParts {
    pub scheme: String,
    pub netloc: String,
    pub path: String,
    pub params: String,
    pub query: String,
    pub fragment: String,
}

impl UrlParts {
    /// `scheme://netloc/path` with params, query and fragment dropped.
    pub fn location(&self) -> String {
        format!("{}://{}{}", self.scheme, self.netloc, self.path)
    }
}

/// Splits `url` into its components.
///
/// The fragment is cut at the first `#` before the query is cut at the first
/// `?`, so a `?` inside a fragment stays in the fragment.
pub fn parse_url(url: &str) -> UrlParts {
    let (scheme, mut rest) = match split_scheme(url) {
        Some((scheme, rest)) => (scheme.to_ascii_lowercase(), rest),
        None => (String::new(), url),
    };

    let mut netloc = "";
    if let Some(after) = rest.strip_prefix("//") {
        let end = after
            .find(|c| matches!(c, '/' | '?' | '#'))
            .unwrap_or(after.len());
        netloc = &after[..end];
        rest = &after[end..];
    }

    let (rest, fragment) = rest.split_once('#').unwrap_or((rest, ""));
    let (path, query) = rest.split_once('?').unwrap_or((rest, ""));
    let (path, params) = if USES_PARAMS.contains(&scheme.as_str()) {
        split_params(path)
    } else {
        (path, "")
    };

    UrlParts {
        scheme,
        netloc: netloc.to_string(),
        path: path.to_string(),
        params: params.to_string(),
        query: query.to_string(),
        fragment: fragment.to_string(),
    }
}

/// Returns `(scheme, rest)` when `url` starts with a valid `scheme:`.
///
/// A prefix followed only by digits is a `host:port` pair, not a scheme.
fn split_scheme(url: &str) -> Option<(&str, &str)> {
    let (prefix, rest) = url.split_once(':')?;
    let mut chars = prefix.chars();
    if !chars.next().is_some_and(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    if !prefix.chars().all(|c| SCHEME_CHARS.contains(c)) {
        return None;
    }
    if !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((prefix, rest))
}

/// Splits `;params` off the last path segment.
fn split_params(path: &str) -> (&str, &str) {
    let segment_start = path.rfind('/').unwrap_or(0);
    match path[segment_start..].find(';') {
        Some(i) => {
            let at = segment_start + i;
            (&path[..at], &path[at + 1..])
        }
        None => (path, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_url() {
        let u = parse_url("http://www.test.com/search.csv;p=5?q=test#hl=en");
        assert_eq!(u.scheme, "http");
        assert_eq!(u.netloc, "www.test.com");
        assert_eq!(u.path, "/search.csv");
        assert_eq!(u.params, "p=5");
        assert_eq!(u.query, "q=test");
        assert_eq!(u.fragment, "hl=en");
    }

    #[test]
    fn scheme_is_lowercased() {
        let u = parse_url("HTTP://Example.com/A");
        assert_eq!(u.scheme, "http");
        assert_eq!(u.netloc, "Example.com");
        assert_eq!(u.path, "/A");
    }

    #[test]
    fn host_port_is_not_a_scheme() {
        let u = parse_url("localhost:8080");
        assert_eq!(u.scheme, "");
        assert_eq!(u.path, "localhost:8080");
    }

    #[test]
    fn relative_reference() {
        let u = parse_url("docs/a.html?x=1");
        assert_eq!(u.scheme, "");
        assert_eq!(u.netloc, "");
        assert_eq!(u.path, "docs/a.html");
        assert_eq!(u.query, "x=1");
    }

    #[test]
    fn params_only_from_last_segment() {
        let u = parse_url("http://h/a;x/b;y");
        assert_eq!(u.path, "/a;x/b");
        assert_eq!(u.params, "y");
    }

    #[test]
    fn no_params_for_other_schemes() {
        let u = parse_url("mailto:me@x.org;subject");
        assert_eq!(u.scheme, "mailto");
        assert_eq!(u.path, "me@x.org;subject");
        assert_eq!(u.params, "");
    }

    #[test]
    fn question_mark_in_fragment_stays() {
        let u = parse_url("http://h/p#frag?notquery");
        assert_eq!(u.query, "");
        assert_eq!(u.fragment, "frag?notquery");
    }

    #[test]
    fn location_strips_tail() {
        let u = parse_url("http://www.test.com/search.csv;p=5?q=test#hl=en");
        assert_eq!(u.location(), "http://www.test.com/search.csv");
    }
}
