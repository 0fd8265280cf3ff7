//! Error types for expression evaluation.

use crate::context::ContextError;
use std::fmt;
use thiserror::Error;

/// Errors that abort the evaluation of a row
#[derive(Debug, Clone, PartialEq)]
pub enum ExpressionError {
    /// The evaluation context failed
    Context(ContextError),

    /// A constant of the schema cannot be turned into a value
    InvalidConstant { expression: String, value: String },
}

impl fmt::Display for ExpressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpressionError::Context(err) => write!(f, "Context error: {}", err),

            ExpressionError::InvalidConstant { expression, value } => {
                write!(f, "Invalid constant in {}: {:?}", expression, value)
            }
        }
    }
}

impl std::error::Error for ExpressionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExpressionError::Context(err) => Some(err),
            ExpressionError::InvalidConstant { .. } => None,
        }
    }
}

impl From<ContextError> for ExpressionError {
    fn from(err: ContextError) -> Self {
        ExpressionError::Context(err)
    }
}

/// Outcome of an evaluation that did not produce a value
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// No value can be produced for this row; the field is omitted
    #[error("skipped")]
    Skip,

    #[error(transparent)]
    Fatal(#[from] ExpressionError),
}

impl EvalError {
    pub fn is_skip(&self) -> bool {
        matches!(self, EvalError::Skip)
    }
}

impl From<ContextError> for EvalError {
    fn from(err: ContextError) -> Self {
        EvalError::Fatal(ExpressionError::Context(err))
    }
}

/// Result type for expression evaluation
pub type EvalResult<T> = Result<T, EvalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExpressionError::Context(ContextError::UnknownColumn("unit".to_string()));
        assert_eq!(err.to_string(), "Context error: Unknown column: unit");

        let err = ExpressionError::InvalidConstant {
            expression: "item constant".to_string(),
            value: "Q0".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid constant in item constant: \"Q0\"");

        assert_eq!(EvalError::Skip.to_string(), "skipped");
        let fatal: EvalError = ContextError::UnknownColumn("x".to_string()).into();
        assert_eq!(fatal.to_string(), "Context error: Unknown column: x");
    }

    #[test]
    fn test_is_skip() {
        assert!(EvalError::Skip.is_skip());
        let fatal: EvalError = ContextError::UnknownColumn("x".to_string()).into();
        assert!(!fatal.is_skip());
    }
}
