//! The arithmetic engine seam.
//!
//! The guard never parses arithmetic itself. It hands sanitized text to an
//! [`ArithmeticEngine`] and formats whatever [`NumericResult`] comes back.

use std::collections::BTreeMap;

/// Largest magnitude at which every integer is exactly representable in `f64`.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// A dynamically typed value produced by an engine.
#[derive(Clone, Debug, PartialEq)]
pub enum NumericResult {
    Int(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    Text(String),
    /// A value of some other kind, already rendered by the engine.
    Other(String),
}

/// Parses and evaluates an arithmetic expression with no variables bound
/// and no custom functions.
pub trait ArithmeticEngine {
    fn evaluate(&self, expression: &str) -> Result<NumericResult, String>;
}

impl<E: ArithmeticEngine + ?Sized> ArithmeticEngine for &E {
    fn evaluate(&self, expression: &str) -> Result<NumericResult, String> {
        (**self).evaluate(expression)
    }
}

/// Engine backed by fasteval.
///
/// fasteval always yields an `f64`. Expressions written purely in integer
/// literals without division come back as [`NumericResult::Int64`] so they
/// keep the integer display path.
#[derive(Clone, Copy, Debug, Default)]
pub struct FastevalEngine;

impl FastevalEngine {
    pub fn new() -> Self {
        Self
    }
}

impl ArithmeticEngine for FastevalEngine {
    fn evaluate(&self, expression: &str) -> Result<NumericResult, String> {
        // Use an empty namespace (no custom variables)
        let mut namespace = BTreeMap::<String, f64>::new();

        let value =
            fasteval::ez_eval(expression, &mut namespace).map_err(|e| format!("{:?}", e))?;

        if value.is_nan() {
            return Err("Not a Number".to_string());
        }
        if value.is_infinite() {
            let msg = if value.is_sign_positive() {
                "Infinity"
            } else {
                "-Infinity"
            };
            return Err(msg.to_string());
        }

        Ok(classify(expression, value))
    }
}

fn classify(expression: &str, value: f64) -> NumericResult {
    let integer_literals_only = !expression.contains('.') && !expression.contains('/');

    if integer_literals_only && value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER {
        NumericResult::Int64(value as i64)
    } else {
        NumericResult::Float64(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_expression_is_int64() {
        let engine = FastevalEngine::new();
        assert_eq!(engine.evaluate("2+3*4"), Ok(NumericResult::Int64(14)));
        assert_eq!(engine.evaluate("2-5"), Ok(NumericResult::Int64(-3)));
    }

    #[test]
    fn test_decimal_and_division_are_float64() {
        let engine = FastevalEngine::new();
        assert_eq!(engine.evaluate("7.0/2.0"), Ok(NumericResult::Float64(3.5)));
        assert_eq!(engine.evaluate("1.5+1.5"), Ok(NumericResult::Float64(3.0)));
    }

    #[test]
    fn test_division_by_zero_is_an_error() {
        let engine = FastevalEngine::new();
        assert_eq!(engine.evaluate("1.0/0.0"), Err("Infinity".to_string()));
        assert_eq!(engine.evaluate("-1.0/0.0"), Err("-Infinity".to_string()));
    }

    #[test]
    fn test_parse_errors_are_reported() {
        let engine = FastevalEngine::new();
        assert!(engine.evaluate("(1+2").is_err());
        assert!(engine.evaluate("2 +* 2").is_err());
    }

    #[test]
    fn test_huge_integers_fall_back_to_float() {
        assert!(matches!(
            classify("1", 1e20),
            NumericResult::Float64(v) if v == 1e20
        ));
    }
}
