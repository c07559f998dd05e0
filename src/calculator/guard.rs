//! Input sanitization for the calculator.
//!
//! Restricts raw keypad text to a safe alphabet and rewrites integer
//! literals so that division is never truncated by the engine.

use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use super::EvaluationError;

lazy_static! {
    /// Matches strings made only of digits, the four operators, parentheses,
    /// decimal points and whitespace.
    static ref ALLOWED_EXPR: Regex = Regex::new(
        r"^[0-9+\-*/().\s]+$"
    ).unwrap();

    /// Matches a numeric literal: a maximal run of digits and decimal points.
    static ref NUMBER_TOKEN: Regex = Regex::new(
        r"[0-9.]+"
    ).unwrap();
}

/// Trim `input` and check it against the allow-list.
///
/// Returns the trimmed slice. The allow-list runs on the trimmed text
/// before any rewriting.
pub fn sanitize(input: &str, max_length: Option<usize>) -> Result<&str, EvaluationError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(EvaluationError::EmptyExpression);
    }

    if let Some(max) = max_length {
        let length = trimmed.chars().count();
        if length > max {
            return Err(EvaluationError::TooLong { length, max });
        }
    }

    if !ALLOWED_EXPR.is_match(trimmed) {
        return Err(EvaluationError::InvalidCharacters);
    }

    Ok(trimmed)
}

/// Check if the expression divides anywhere.
pub fn has_division(expr: &str) -> bool {
    expr.contains('/')
}

/// Force floating-point semantics when the expression divides.
///
/// Every integer literal gets a `.0` suffix. Literals that already contain
/// a decimal point are left alone. Expressions without `/` are returned
/// unchanged.
pub fn coerce_division(expr: &str) -> Cow<'_, str> {
    if !has_division(expr) {
        return Cow::Borrowed(expr);
    }

    NUMBER_TOKEN.replace_all(expr, |caps: &Captures| {
        let token = &caps[0];
        if token.contains('.') {
            token.to_string()
        } else {
            format!("{}.0", token)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_trims() {
        assert_eq!(sanitize("  2 + 2 ", None), Ok("2 + 2"));
        assert_eq!(sanitize("\t(1+2)*3\n", None), Ok("(1+2)*3"));
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(sanitize("", None), Err(EvaluationError::EmptyExpression));
        assert_eq!(sanitize("   ", None), Err(EvaluationError::EmptyExpression));
    }

    #[test]
    fn test_disallowed_characters_rejected() {
        for input in ["3+4;", "2^8", "sin(0)", "a", "1_000", "10 % 3", "1,5", "err"] {
            assert_eq!(
                sanitize(input, None),
                Err(EvaluationError::InvalidCharacters),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_length_cap() {
        assert_eq!(sanitize("1+1", Some(3)), Ok("1+1"));
        assert_eq!(
            sanitize(" 1+12 ", Some(3)),
            Err(EvaluationError::TooLong { length: 4, max: 3 })
        );
    }

    #[test]
    fn test_coerce_integer_tokens() {
        assert_eq!(coerce_division("7/2"), "7.0/2.0");
        assert_eq!(coerce_division("10/4+3"), "10.0/4.0+3.0");
        assert_eq!(coerce_division("(1+2)/3"), "(1.0+2.0)/3.0");
        assert_eq!(coerce_division("12 / 345"), "12.0 / 345.0");
    }

    #[test]
    fn test_coerce_leaves_decimals_alone() {
        assert_eq!(coerce_division("7.5/2"), "7.5/2.0");
        assert_eq!(coerce_division("1/0.25"), "1.0/0.25");
        assert_eq!(coerce_division(".5/2"), ".5/2.0");
    }

    #[test]
    fn test_coerce_without_division_is_borrowed() {
        assert!(matches!(coerce_division("2+3*4"), Cow::Borrowed("2+3*4")));
    }
}
