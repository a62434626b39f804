//! Built-in URL, HTML and JSON-list functions.

use super::{Arity, FunctionKind, FunctionRegistry, Output, RowFunction};
use crate::error::{single_arg, Result};
use crate::value::Value;
use crate::{html_ops, jlist, url_ops};

// ── URL decomposition ───────────────────────────────────────────────────

pub struct UrlSplitFunc;

impl RowFunction for UrlSplitFunc {
    fn invoke(&self, args: &[Value]) -> Result<Output> {
        Ok(url_ops::urlsplit(args).into())
    }

    fn arity(&self) -> Arity {
        Arity::at_least(0)
    }

    fn kind(&self) -> FunctionKind {
        FunctionKind::Multiset
    }

    fn name(&self) -> &str {
        "urlsplit"
    }
}

pub struct UrlLocationFunc;

impl RowFunction for UrlLocationFunc {
    fn invoke(&self, args: &[Value]) -> Result<Output> {
        Ok(url_ops::urllocation(args).into())
    }

    fn arity(&self) -> Arity {
        Arity::at_least(0)
    }

    fn name(&self) -> &str {
        "urllocation"
    }
}

pub struct UrlQuerySplitFunc;

impl RowFunction for UrlQuerySplitFunc {
    fn invoke(&self, args: &[Value]) -> Result<Output> {
        url_ops::urlquerysplit(args).map(Output::from)
    }

    fn arity(&self) -> Arity {
        Arity::at_least(1)
    }

    fn kind(&self) -> FunctionKind {
        FunctionKind::Multiset
    }

    fn name(&self) -> &str {
        "urlquerysplit"
    }
}

pub struct UrlQueryToJdictFunc;

impl RowFunction for UrlQueryToJdictFunc {
    fn invoke(&self, args: &[Value]) -> Result<Output> {
        url_ops::urlquerytojdict(args).map(Output::from)
    }

    fn arity(&self) -> Arity {
        Arity::at_least(1)
    }

    fn name(&self) -> &str {
        "urlquerytojdict"
    }
}

// ── Form encoding ───────────────────────────────────────────────────────

pub struct UrlDecodeFunc;

impl RowFunction for UrlDecodeFunc {
    fn invoke(&self, args: &[Value]) -> Result<Output> {
        url_ops::urldecode(args).map(Output::from)
    }

    fn arity(&self) -> Arity {
        Arity::exact(1)
    }

    fn name(&self) -> &str {
        "urldecode"
    }
}

pub struct UrlEncodeFunc;

impl RowFunction for UrlEncodeFunc {
    fn invoke(&self, args: &[Value]) -> Result<Output> {
        url_ops::urlencode(args).map(Output::from)
    }

    fn arity(&self) -> Arity {
        Arity::exact(1)
    }

    fn name(&self) -> &str {
        "urlencode"
    }
}

// ── HTML text ───────────────────────────────────────────────────────────

pub struct HtmlDecodeFunc;

impl RowFunction for HtmlDecodeFunc {
    fn invoke(&self, args: &[Value]) -> Result<Output> {
        html_ops::htmldecode(args).map(Output::from)
    }

    fn arity(&self) -> Arity {
        Arity::exact(1)
    }

    fn name(&self) -> &str {
        "htmldecode"
    }
}

pub struct HtmlEncodeFunc;

impl RowFunction for HtmlEncodeFunc {
    fn invoke(&self, args: &[Value]) -> Result<Output> {
        html_ops::htmlencode(args).map(Output::from)
    }

    fn arity(&self) -> Arity {
        Arity::exact(1)
    }

    fn name(&self) -> &str {
        "htmlencode"
    }
}

pub struct HtmlAddBreaksFunc;

impl RowFunction for HtmlAddBreaksFunc {
    fn invoke(&self, args: &[Value]) -> Result<Output> {
        Ok(html_ops::htmladdbreaks(args).into())
    }

    fn arity(&self) -> Arity {
        Arity::at_least(0)
    }

    fn name(&self) -> &str {
        "htmladdbreaks"
    }
}

pub struct HtmlLinkFunc;

impl RowFunction for HtmlLinkFunc {
    fn invoke(&self, args: &[Value]) -> Result<Output> {
        html_ops::htmllink(args).map(Output::from)
    }

    fn arity(&self) -> Arity {
        Arity::range(1, 2)
    }

    fn name(&self) -> &str {
        "htmllink"
    }
}

// ── JSON lists ──────────────────────────────────────────────────────────

pub struct TojFunc;

impl RowFunction for TojFunc {
    fn invoke(&self, args: &[Value]) -> Result<Output> {
        Ok(jlist::toj(single_arg("toj", args)?).into())
    }

    fn arity(&self) -> Arity {
        Arity::exact(1)
    }

    fn name(&self) -> &str {
        "toj"
    }
}

pub struct TojStrictFunc;

impl RowFunction for TojStrictFunc {
    fn invoke(&self, args: &[Value]) -> Result<Output> {
        Ok(jlist::tojstrict(single_arg("tojstrict", args)?).into())
    }

    fn arity(&self) -> Arity {
        Arity::exact(1)
    }

    fn name(&self) -> &str {
        "tojstrict"
    }
}

pub struct FromjFunc;

impl RowFunction for FromjFunc {
    fn invoke(&self, args: &[Value]) -> Result<Output> {
        Ok(Value::List(jlist::fromj(args)).into())
    }

    fn arity(&self) -> Arity {
        Arity::at_least(0)
    }

    fn name(&self) -> &str {
        "fromj"
    }
}

pub struct ElemFromjFunc;

impl RowFunction for ElemFromjFunc {
    fn invoke(&self, args: &[Value]) -> Result<Output> {
        Ok(Value::List(jlist::elemfromj(args)).into())
    }

    fn arity(&self) -> Arity {
        Arity::at_least(0)
    }

    fn name(&self) -> &str {
        "elemfromj"
    }
}

pub struct FlattenFunc;

impl RowFunction for FlattenFunc {
    /// Accepts a list or JSON-list text; other scalars become a one-element list.
    fn invoke(&self, args: &[Value]) -> Result<Output> {
        let arg = single_arg("flatten", args)?;
        let items = match jlist::elemfromj(std::slice::from_ref(arg)).pop() {
            Some(Value::List(items)) => items,
            Some(other) => vec![other],
            None => Vec::new(),
        };
        Ok(Value::List(jlist::flatten(items)).into())
    }

    fn arity(&self) -> Arity {
        Arity::exact(1)
    }

    fn name(&self) -> &str {
        "flatten"
    }
}

// ── Registration ────────────────────────────────────────────────────────

/// Registers every built-in function.
pub fn register_builtins(registry: &mut FunctionRegistry) {
    registry.register(UrlSplitFunc);
    registry.register(UrlLocationFunc);
    registry.register(UrlQuerySplitFunc);
    registry.register(UrlQueryToJdictFunc);
    registry.register(UrlDecodeFunc);
    registry.register(UrlEncodeFunc);
    registry.register(HtmlDecodeFunc);
    registry.register(HtmlEncodeFunc);
    registry.register(HtmlAddBreaksFunc);
    registry.register(HtmlLinkFunc);
    registry.register(TojFunc);
    registry.register(TojStrictFunc);
    registry.register(FromjFunc);
    registry.register(ElemFromjFunc);
    registry.register(FlattenFunc);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> FunctionRegistry {
        let mut reg = FunctionRegistry::new();
        register_builtins(&mut reg);
        reg
    }

    #[test]
    fn all_builtins_registered() {
        let reg = registry();
        assert_eq!(reg.len(), 15);
        assert_eq!(
            reg.names(),
            vec![
                "elemfromj",
                "flatten",
                "fromj",
                "htmladdbreaks",
                "htmldecode",
                "htmlencode",
                "htmllink",
                "toj",
                "tojstrict",
                "urldecode",
                "urlencode",
                "urllocation",
                "urlquerysplit",
                "urlquerytojdict",
                "urlsplit",
            ]
        );
    }

    #[test]
    fn kinds() {
        let reg = registry();
        for name in reg.names() {
            let kind = reg.find(&name).unwrap().kind();
            let expected = match name.as_str() {
                "urlsplit" | "urlquerysplit" => FunctionKind::Multiset,
                _ => FunctionKind::Scalar,
            };
            assert_eq!(kind, expected, "{name}");
        }
    }

    #[test]
    fn toj_arity_enforced() {
        let reg = registry();
        let err = reg.call("toj", &[]).unwrap_err();
        assert_eq!(err.function, "toj");
        assert!(reg.call("tojstrict", &["a".into(), "b".into()]).is_err());
        assert!(reg.call("flatten", &[]).is_err());
    }

    #[test]
    fn fromj_returns_list_scalar() {
        let reg = registry();
        let out = reg.call("fromj", &[r#"["a",3]"#.into(), "b".into()]).unwrap();
        assert_eq!(
            out,
            Output::Scalar(Value::List(vec!["a".into(), Value::Integer(3), "b".into()]))
        );
    }

    #[test]
    fn flatten_accepts_json_text() {
        let reg = registry();
        let out = reg.call("flatten", &["[1,[2,[3]],4]".into()]).unwrap();
        let expected: Vec<Value> = (1..=4).map(Value::Integer).collect();
        assert_eq!(out, Output::Scalar(Value::List(expected)));

        let out = reg.call("flatten", &["plain".into()]).unwrap();
        assert_eq!(out, Output::Scalar(Value::List(vec!["plain".into()])));
    }

    #[test]
    fn htmllink_arity_reported() {
        let reg = registry();
        let link = reg.find("HTMLLINK").unwrap();
        assert_eq!(link.arity(), Arity::range(1, 2));
        assert!(!link.arity().accepts(3));
    }
}
