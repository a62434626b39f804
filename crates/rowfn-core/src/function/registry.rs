//! Name-keyed registry of row functions.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use super::{Output, RowFunction};
use crate::error::{OperatorError, Result};
use crate::value::Value;

/// Registry keyed by uppercase function name (lookups are case-insensitive).
#[derive(Default)]
pub struct FunctionRegistry {
    functions: HashMap<String, Arc<dyn RowFunction>>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a function, returning the one it replaced, if any.
    pub fn register<F>(&mut self, function: F) -> Option<Arc<dyn RowFunction>>
    where
        F: RowFunction + 'static,
    {
        let key = canonical_name(function.name());
        debug!(name = %key, arity = %function.arity(), kind = %function.kind(), "register function");
        self.functions.insert(key, Arc::new(function))
    }

    pub fn find(&self, name: &str) -> Option<Arc<dyn RowFunction>> {
        let key = canonical_name(name);
        let result = self.functions.get(&key).map(Arc::clone);
        debug!(
            name = %key,
            hit = result.is_some(),
            "registry lookup"
        );
        result
    }

    /// Resolve `name` and invoke it on `args`.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Output> {
        let function = self
            .find(name)
            .ok_or_else(|| OperatorError::new(name, "no such function"))?;
        function.invoke(args)
    }

    /// Registered names (lowercase, as the functions report them), sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .functions
            .values()
            .map(|f| f.name().to_string())
            .collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

fn canonical_name(name: &str) -> String {
    name.to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::Arity;

    struct Echo;

    impl RowFunction for Echo {
        fn name(&self) -> &str {
            "echo"
        }

        fn arity(&self) -> Arity {
            Arity::exact(1)
        }

        fn invoke(&self, args: &[Value]) -> Result<Output> {
            Ok(Output::Scalar(args[0].clone()))
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let mut reg = FunctionRegistry::new();
        assert!(reg.register(Echo).is_none());
        assert!(reg.find("ECHO").is_some());
        assert!(reg.find("Echo").is_some());
        assert!(reg.find("missing").is_none());
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn reregister_replaces() {
        let mut reg = FunctionRegistry::new();
        reg.register(Echo);
        assert!(reg.register(Echo).is_some());
        assert_eq!(reg.names(), vec!["echo".to_string()]);
    }

    #[test]
    fn call_unknown_function_errors() {
        let reg = FunctionRegistry::new();
        let err = reg.call("nope", &[]).unwrap_err();
        assert_eq!(err.function, "nope");
        assert_eq!(err.message, "no such function");
    }

    #[test]
    fn call_dispatches() {
        let mut reg = FunctionRegistry::new();
        reg.register(Echo);
        let out = reg.call("echo", &[Value::Integer(5)]).unwrap();
        assert_eq!(out, Output::Scalar(Value::Integer(5)));
    }
}
