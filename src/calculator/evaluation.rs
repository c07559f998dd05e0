//! The expression guard and evaluator.
//!
//! Wraps an [`ArithmeticEngine`] so that only sanitized text reaches it,
//! division is never truncated, and results come back as display strings.

use super::engine::{ArithmeticEngine, FastevalEngine};
use super::format::format_result;
use super::guard::{coerce_division, has_division, sanitize};
use super::EvaluationError;

/// Evaluates keypad text through an injected engine.
///
/// Holds no state besides the engine handle and an optional length cap,
/// so one evaluator can be reused for every "=" press.
#[derive(Clone, Debug, Default)]
pub struct Evaluator<E = FastevalEngine> {
    engine: E,
    max_length: Option<usize>,
}

impl<E: ArithmeticEngine> Evaluator<E> {
    /// Create an evaluator around an engine, with no length cap.
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            max_length: None,
        }
    }

    /// Reject trimmed input longer than `max` characters.
    pub fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    /// Evaluate an expression and format the result for display.
    pub fn evaluate(&self, input: &str) -> Result<String, EvaluationError> {
        let trimmed = sanitize(input, self.max_length)?;
        let to_eval = coerce_division(trimmed);

        let result = self
            .engine
            .evaluate(&to_eval)
            .map_err(EvaluationError::Engine)?;

        // Branch on the user's text, not the rewritten one.
        Ok(format_result(&result, has_division(trimmed)))
    }
}

/// Evaluate an expression with the default engine.
pub fn evaluate_expression(input: &str) -> Result<String, EvaluationError> {
    Evaluator::new(FastevalEngine::new()).evaluate(input)
}
