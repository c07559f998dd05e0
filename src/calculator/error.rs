//! Errors returned by the expression evaluator.

use thiserror::Error;

/// Why an expression could not be turned into a display string.
///
/// Every variant is terminal for the call; nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    /// The input was empty or contained only whitespace.
    #[error("empty expression")]
    EmptyExpression,

    /// The input contained a character outside the calculator alphabet.
    #[error("invalid characters")]
    InvalidCharacters,

    /// The input is longer than the configured cap.
    #[error("expression too long ({length} > {max} characters)")]
    TooLong { length: usize, max: usize },

    /// The arithmetic engine rejected or failed to evaluate the expression.
    #[error("{0}")]
    Engine(String),
}
