//! HTML text functions: entity decode/encode, word breaks, links.

mod entities;
mod escape;
mod link;

use crate::error::{single_arg, OperatorError, Result};
use crate::value::Value;

pub use entities::{lookup as lookup_entity, unescape};
pub use escape::escape;
pub use link::{add_breaks, anchor, WORD_BREAK};

/// `htmldecode(text)`: replaces HTML entity references.
///
/// # Examples
///
/// - `htmldecode('(&quot;die+wunderbaren+jahre&quot;)')` → `("die+wunderbaren+jahre")`
/// - `htmldecode(null)` → null
pub fn htmldecode(args: &[Value]) -> Result<Value> {
    Ok(match single_arg("htmldecode", args)? {
        Value::Null => Value::Null,
        v => Value::Text(unescape(&v.to_text())),
    })
}

/// `htmlencode(text)`: escapes `& < > "`.
pub fn htmlencode(args: &[Value]) -> Result<Value> {
    Ok(match single_arg("htmlencode", args)? {
        Value::Null => Value::Null,
        v => Value::Text(escape(&v.to_text())),
    })
}

/// `htmladdbreaks(text1, [text2, ...])`: concatenates and adds `<wbr>` hints.
pub fn htmladdbreaks(args: &[Value]) -> Value {
    match args.first() {
        None | Some(Value::Null) => Value::Null,
        Some(_) => {
            let joined: String = args.iter().map(Value::to_text).collect();
            Value::Text(add_breaks(&joined))
        }
    }
}

/// `htmllink(href, [linktext])`: an anchor pointing at `href`.
///
/// # Examples
///
/// - `htmllink('somewhere.org')` → `<a href="http://somewhere.org">somewhere.<wbr>org</a>`
/// - `htmllink('somewhere.org', 'go somewhere')` → `<a href="http://somewhere.org">go somewhere</a>`
pub fn htmllink(args: &[Value]) -> Result<Value> {
    let (href, text) = match args {
        [href] => (href, None),
        [href, text] => (href, Some(text)),
        [] => return Err(OperatorError::new("htmllink", "operator requires an href argument")),
        _ => {
            return Err(OperatorError::new(
                "htmllink",
                "operator takes a maximum of two arguments",
            ))
        }
    };
    let text = text.filter(|t| !t.is_null()).map(Value::to_text);
    if href.is_null() && text.is_none() {
        return Ok(Value::Null);
    }
    Ok(Value::Text(anchor(&href.to_text(), text.as_deref())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_and_null() {
        assert_eq!(
            htmldecode(&["(&quot;die+wunderbaren+jahre&quot;)".into()]).unwrap(),
            Value::from("(\"die+wunderbaren+jahre\")")
        );
        assert_eq!(htmldecode(&[Value::Null]).unwrap(), Value::Null);
    }

    #[test]
    fn encode_and_null() {
        assert_eq!(
            htmlencode(&["a < b & \"c\"".into()]).unwrap(),
            Value::from("a &lt; b &amp; &quot;c&quot;")
        );
        assert_eq!(htmlencode(&[Value::Null]).unwrap(), Value::Null);
    }

    #[test]
    fn argument_count_errors() {
        let two = [Value::from("a"), Value::from("b")];
        let err = htmldecode(&two).unwrap_err();
        assert_eq!(err.function, "htmldecode");
        assert_eq!(err.message, "operator takes only one argument");
        let err = htmlencode(&two).unwrap_err();
        assert_eq!(err.function, "htmlencode");
        assert!(htmllink(&[Value::from("a"), Value::from("b"), Value::from("c")]).is_err());
    }

    #[test]
    fn round_trip_plain_text() {
        for s in ["plain text", "it's 5 > 3 & \"quoted\" <tag>", "ünïcödé"] {
            let encoded = htmlencode(&[s.into()]).unwrap();
            assert_eq!(htmldecode(&[encoded]).unwrap(), Value::from(s));
        }
    }

    #[test]
    fn addbreaks_concatenates() {
        assert_eq!(
            htmladdbreaks(&["very-long".into(), "/string".into()]),
            Value::from("very-<wbr>long/<wbr>string")
        );
        assert_eq!(htmladdbreaks(&[Value::Null, "a.b".into()]), Value::Null);
        assert_eq!(
            htmladdbreaks(&["v".into(), Value::Integer(2), "-x".into()]),
            Value::from("v2-<wbr>x")
        );
    }

    #[test]
    fn link_variants() {
        assert_eq!(
            htmllink(&["somewhere.org".into()]).unwrap(),
            Value::from(r#"<a href="http://somewhere.org">somewhere.<wbr>org</a>"#)
        );
        assert_eq!(
            htmllink(&["somewhere.org".into(), "go somewhere".into()]).unwrap(),
            Value::from(r#"<a href="http://somewhere.org">go somewhere</a>"#)
        );
        assert_eq!(
            htmllink(&["somewhere.org".into(), Value::Null]).unwrap(),
            Value::from(r#"<a href="http://somewhere.org">somewhere.<wbr>org</a>"#)
        );
        assert_eq!(htmllink(&[Value::Null]).unwrap(), Value::Null);
        assert_eq!(htmllink(&[Value::Null, Value::Null]).unwrap(), Value::Null);
    }

    #[test]
    fn link_text_wins_over_null_href() {
        assert_eq!(
            htmllink(&[Value::Null, "go".into()]).unwrap(),
            Value::from(r#"<a href="http://">go</a>"#)
        );
    }
}
