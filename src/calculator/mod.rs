//! Calculator module for evaluating keypad expressions.
//!
//! This module provides functionality to:
//! - Reject input outside the calculator alphabet
//! - Force floating-point division before evaluation
//! - Evaluate expressions through a pluggable arithmetic engine
//! - Format results for display and copy them to the clipboard

mod clipboard;
mod engine;
mod error;
mod evaluation;
mod format;
mod guard;

pub use clipboard::copy_to_clipboard;
pub use engine::{ArithmeticEngine, FastevalEngine, NumericResult};
pub use error::EvaluationError;
pub use evaluation::{Evaluator, evaluate_expression};
pub use format::format_result;
pub use guard::{coerce_division, sanitize};
