//! Keypad state for the calculator front end.
//!
//! Buttons append to a single text buffer. `C` clears it and `=` replaces
//! it with the evaluation result, or with the error text when evaluation
//! fails, so further presses continue from what is on screen.

mod key;

pub use key::{Key, LAYOUT, UnknownKey};

use tracing::debug;

use crate::calculator::{ArithmeticEngine, Evaluator, FastevalEngine};
use crate::items::{CalculatorItem, ErrorDisplay};

pub struct Keypad<E = FastevalEngine> {
    buffer: String,
    evaluator: Evaluator<E>,
    errors: ErrorDisplay,
    last: Option<CalculatorItem>,
}

impl<E: ArithmeticEngine> Keypad<E> {
    pub fn new(evaluator: Evaluator<E>, errors: ErrorDisplay) -> Self {
        Self {
            buffer: String::new(),
            evaluator,
            errors,
            last: None,
        }
    }

    /// Current text on the display.
    pub fn display(&self) -> &str {
        &self.buffer
    }

    /// Result of the most recent `=` press.
    pub fn last_result(&self) -> Option<&CalculatorItem> {
        self.last.as_ref()
    }

    pub fn press(&mut self, key: Key) -> &str {
        match key {
            Key::Clear => self.buffer.clear(),
            Key::Equals => self.evaluate(),
            Key::Digit(c) | Key::Operator(c) => self.buffer.push(c),
        }
        &self.buffer
    }

    /// Press each key in `keys`, skipping whitespace.
    ///
    /// Nothing is pressed if any character is not a key.
    pub fn press_sequence(&mut self, keys: &str) -> Result<&str, UnknownKey> {
        let keys = keys
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| Key::from_char(c).ok_or_else(|| UnknownKey(c.to_string())))
            .collect::<Result<Vec<_>, _>>()?;

        for key in keys {
            self.press(key);
        }
        Ok(&self.buffer)
    }

    fn evaluate(&mut self) {
        let outcome = self.evaluator.evaluate(&self.buffer);
        match &outcome {
            Ok(result) => debug!(expression = %self.buffer, %result, "Evaluated expression"),
            Err(e) => debug!(expression = %self.buffer, error = %e, "Evaluation failed"),
        }

        let item = CalculatorItem::from_outcome(&self.buffer, outcome, &self.errors);

        self.buffer = item.display_result.clone();
        self.last = Some(item);
    }
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new(Evaluator::default(), ErrorDisplay::default())
    }
}
