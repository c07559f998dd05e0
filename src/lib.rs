//! A keypad calculator with a guarded arithmetic-expression evaluator.
//!
//! [`calculator::Evaluator`] is the core: it sanitizes keypad text, forces
//! floating-point division and formats what the engine returns.
//! [`keypad::Keypad`] models the button grid that feeds it.

pub mod calculator;
pub mod config;
pub mod items;
pub mod keypad;

pub use calculator::{EvaluationError, Evaluator, evaluate_expression};
pub use config::Config;
