//! Operator error raised when a function's calling contract is violated.

use thiserror::Error;

use crate::value::Value;

pub type Result<T> = std::result::Result<T, OperatorError>;

/// Failure surfaced to the host as a query execution error.
///
/// Only argument-count violations (and unknown function names in the
/// registry) produce one; null inputs and malformed JSON lists do not.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{function}: {message}")]
pub struct OperatorError {
    pub function: String,
    pub message: String,
}

impl OperatorError {
    pub fn new(function: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            function: function.into(),
            message: message.into(),
        }
    }
}

/// Returns the sole argument, or the "only one argument" error.
pub(crate) fn single_arg<'a>(function: &str, args: &'a [Value]) -> Result<&'a Value> {
    match args {
        [only] => Ok(only),
        [] => Err(OperatorError::new(function, "operator requires one argument")),
        _ => Err(OperatorError::new(function, "operator takes only one argument")),
    }
}

/// Returns the first argument, or an error if there is none.
pub(crate) fn first_arg<'a>(function: &str, args: &'a [Value]) -> Result<&'a Value> {
    args.first()
        .ok_or_else(|| OperatorError::new(function, "operator requires at least one argument"))
}
