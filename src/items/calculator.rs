//! Calculator item representing a calculation result.

use crate::calculator::EvaluationError;

/// How a failed evaluation is shown to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorDisplay {
    /// Every error collapses to one fixed marker.
    Marker(String),
    /// The error's own message is shown.
    Detailed,
}

impl Default for ErrorDisplay {
    fn default() -> Self {
        Self::Marker("err".to_string())
    }
}

impl ErrorDisplay {
    pub fn render(&self, error: &EvaluationError) -> String {
        match self {
            Self::Marker(marker) => marker.clone(),
            Self::Detailed => format!("error: {}", error),
        }
    }
}

/// A calculator item representing a calculation result.
#[derive(Clone, Debug)]
pub struct CalculatorItem {
    /// The expression entered by the user.
    pub expression: String,
    /// The result, or the rendered error.
    pub display_result: String,
    /// The result for the clipboard.
    /// None if evaluation failed.
    pub clipboard_result: Option<String>,
    /// Whether this is an error result.
    pub is_error: bool,
}

impl CalculatorItem {
    /// Create a new calculator item from an evaluation outcome.
    pub fn from_outcome(
        expression: &str,
        outcome: Result<String, EvaluationError>,
        errors: &ErrorDisplay,
    ) -> Self {
        match outcome {
            Ok(result) => Self {
                expression: expression.to_string(),
                display_result: result.clone(),
                clipboard_result: Some(result),
                is_error: false,
            },
            Err(error) => Self {
                expression: expression.to_string(),
                display_result: errors.render(&error),
                clipboard_result: None,
                is_error: true,
            },
        }
    }

    /// Get the text to copy to clipboard.
    /// Returns the clipboard result for successful calculations,
    /// or the display result for errors (so user can still copy the error message).
    pub fn text_for_clipboard(&self) -> &str {
        self.clipboard_result
            .as_deref()
            .unwrap_or(&self.display_result)
    }
}
