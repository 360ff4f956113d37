// ABOUTME: Error types for reader and evaluation failures

use crate::symbol::Symbol;
use thiserror::Error;

// Arity constant strings, used so arity error paths don't allocate.
pub const ARITY_ZERO: &str = "0";
pub const ARITY_ONE: &str = "1";
pub const ARITY_TWO: &str = "2";
pub const ARITY_THREE: &str = "3";
pub const ARITY_AT_LEAST_ONE: &str = "at least 1";

#[derive(Error, Debug, Clone)]
pub enum LispError {
    /// Malformed source text: unterminated string, unterminated list,
    /// an unexpected closing paren, or exhausted tokens mid-expression.
    #[error("read error: {0}")]
    ReadError(String),

    /// A symbol has no binding in the lookup environment or any of its parents.
    #[error("undefined symbol: {0}")]
    UndefinedSymbol(Symbol),

    /// A value was used in a position requiring a different shape: applying
    /// a non-callable, `car`/`cdr` of a non-list, etc.
    #[error("{function}: expected {expected}, got {actual}")]
    TypeError {
        function: String,
        expected: String,
        actual: String,
    },

    /// Wrong number of arguments to a closure or builtin.
    #[error("{function}: expected {expected} argument{}, got {actual}", if expected.as_str() == "1" { "" } else { "s" })]
    ArityError {
        function: String,
        expected: String,
        actual: usize,
    },

    /// A host procedure or special form registered via the embedding API failed.
    #[error("{function}: {message}")]
    HostError { function: String, message: String },
}

impl LispError {
    pub fn read_error(message: impl Into<String>) -> Self {
        LispError::ReadError(message.into())
    }

    pub fn type_error(function: &str, expected: &str, actual: impl Into<String>) -> Self {
        LispError::TypeError {
            function: function.to_string(),
            expected: expected.to_string(),
            actual: actual.into(),
        }
    }

    pub fn arity_error(function: &str, expected: impl Into<String>, actual: usize) -> Self {
        LispError::ArityError {
            function: function.to_string(),
            expected: expected.into(),
            actual,
        }
    }

    pub fn host_error(function: &str, message: impl Into<String>) -> Self {
        LispError::HostError {
            function: function.to_string(),
            message: message.into(),
        }
    }
}
