//! Query-string parsing for `urlquerysplit` and `urlquerytojdict`.

use super::parse::parse_url;

/// Returns the query part of `input`: the query component when `input` is an
/// `http://` URL, otherwise `input` itself.
pub(super) fn query_component(input: &str) -> String {
    if input.starts_with("http://") {
        parse_url(input).query
    } else {
        input.to_string()
    }
}

/// Decoded `(key, value)` pairs in order, blank values kept.
///
/// Fields are separated by `&` or `;`.
pub fn parse_query_pairs(query: &str) -> Vec<(String, String)> {
    query
        .split(['&', ';'])
        .filter(|field| !field.is_empty())
        .flat_map(|field| url::form_urlencoded::parse(field.as_bytes()).into_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_are_decoded() {
        assert_eq!(
            parse_query_pairs("url_ver=ver1&url_tim=2011-01-01T00%3A02%3A40Z"),
            vec![
                ("url_ver".to_string(), "ver1".to_string()),
                ("url_tim".to_string(), "2011-01-01T00:02:40Z".to_string()),
            ]
        );
    }

    #[test]
    fn blank_values_and_empty_fields() {
        assert_eq!(
            parse_query_pairs("a=&b&&c=1+2"),
            vec![
                ("a".to_string(), String::new()),
                ("b".to_string(), String::new()),
                ("c".to_string(), "1 2".to_string()),
            ]
        );
    }

    #[test]
    fn semicolon_separates_fields() {
        assert_eq!(
            parse_query_pairs("a=1;b=2&c=x%3By"),
            vec![
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), "2".to_string()),
                ("c".to_string(), "x;y".to_string()),
            ]
        );
    }

    #[test]
    fn query_of_http_url() {
        assert_eq!(
            query_component("http://www.test.com/search.csv;p=5?lang=test&ver=en"),
            "lang=test&ver=en"
        );
        assert_eq!(query_component("lang=test"), "lang=test");
    }
}
