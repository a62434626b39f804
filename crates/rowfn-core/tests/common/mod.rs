//! Shared helpers for registry integration tests.

use rowfn_core::{builtin_registry, FunctionRegistry, Multiset, Output, Value};

pub fn registry() -> FunctionRegistry {
    builtin_registry()
}

/// Calls `name` and returns its scalar result, panicking on a multiset.
pub fn scalar(reg: &FunctionRegistry, name: &str, args: &[Value]) -> Value {
    match reg.call(name, args).unwrap() {
        Output::Scalar(v) => v,
        Output::Multiset(m) => panic!("{name} returned a multiset: {m:?}"),
    }
}

/// Calls `name` and returns its multiset result, panicking on a scalar.
pub fn multiset(reg: &FunctionRegistry, name: &str, args: &[Value]) -> Multiset {
    match reg.call(name, args).unwrap() {
        Output::Multiset(m) => m,
        Output::Scalar(v) => panic!("{name} returned a scalar: {v:?}"),
    }
}

pub fn text(s: &str) -> Value {
    Value::from(s)
}
