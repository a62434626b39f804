//! Row-level helper functions for SQL hosts: URL decomposition, HTML
//! text handling and JSON-list normalization of multi-valued columns.

pub mod config;
pub mod error;
pub mod function;
pub mod html_ops;
pub mod jlist;
pub mod logging;
pub mod url_ops;
pub mod value;

pub use error::{OperatorError, Result};
pub use function::{
    register_builtins, Arity, FunctionKind, FunctionRegistry, Multiset, Output, RowFunction,
};
pub use value::Value;

/// A registry holding every built-in function.
pub fn builtin_registry() -> FunctionRegistry {
    let mut registry = FunctionRegistry::new();
    register_builtins(&mut registry);
    registry
}
