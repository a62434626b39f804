//! Calling convention shared with the host query engine.
//!
//! A host resolves a function by name in a [`FunctionRegistry`], passes the
//! row's argument values, and receives either a single scalar or a
//! [`Multiset`] whose first tuple is the column-name header.

mod builtins;
mod registry;

use std::fmt;

use crate::error::Result;
use crate::value::Value;

pub use builtins::register_builtins;
pub use registry::FunctionRegistry;

/// Whether a function yields one value per call or a header-plus-rows table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionKind {
    Scalar,
    Multiset,
}

impl fmt::Display for FunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FunctionKind::Scalar => f.write_str("scalar"),
            FunctionKind::Multiset => f.write_str("multiset"),
        }
    }
}

/// Accepted argument count: `min` and an optional inclusive `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arity {
    pub min: usize,
    pub max: Option<usize>,
}

impl Arity {
    pub const fn exact(n: usize) -> Self {
        Self {
            min: n,
            max: Some(n),
        }
    }

    pub const fn at_least(n: usize) -> Self {
        Self { min: n, max: None }
    }

    pub const fn range(min: usize, max: usize) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    pub fn accepts(&self, n: usize) -> bool {
        n >= self.min && self.max.map_or(true, |max| n <= max)
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) if max == self.min => write!(f, "{}", self.min),
            Some(max) => write!(f, "{}..{}", self.min, max),
            None => write!(f, "{}+", self.min),
        }
    }
}

/// Header row plus data rows of equal arity.
#[derive(Debug, Clone, PartialEq)]
pub struct Multiset {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl Multiset {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// A multiset with exactly one data row.
    pub fn single_row(columns: Vec<String>, row: Vec<Value>) -> Self {
        debug_assert_eq!(columns.len(), row.len());
        Self {
            columns,
            rows: vec![row],
        }
    }

    /// Tuples in host order: the header (as text values) first, then each row.
    pub fn tuples(&self) -> impl Iterator<Item = Vec<Value>> + '_ {
        let header = self.columns.iter().map(|c| Value::from(c.as_str())).collect();
        std::iter::once(header).chain(self.rows.iter().cloned())
    }
}

/// Result of one invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Scalar(Value),
    Multiset(Multiset),
}

impl From<Value> for Output {
    fn from(v: Value) -> Self {
        Output::Scalar(v)
    }
}

impl From<Multiset> for Output {
    fn from(m: Multiset) -> Self {
        Output::Multiset(m)
    }
}

/// A row-level function callable by the host.
///
/// Invocations are independent and may run concurrently, so implementations
/// hold no mutable state.
pub trait RowFunction: Send + Sync {
    /// Lowercase name the function is registered under.
    fn name(&self) -> &str;

    fn kind(&self) -> FunctionKind {
        FunctionKind::Scalar
    }

    fn arity(&self) -> Arity;

    fn invoke(&self, args: &[Value]) -> Result<Output>;
}
