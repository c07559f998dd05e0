//! Calculator buttons.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Button labels in reading order, four per row.
pub const LAYOUT: [&str; 16] = [
    "7", "8", "9", "/", //
    "4", "5", "6", "*", //
    "1", "2", "3", "-", //
    "C", "0", "=", "+",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown key: {0:?}")]
pub struct UnknownKey(pub String);

/// A single keypad button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// One of `0`..=`9`.
    Digit(char),
    /// One of `+ - * /`.
    Operator(char),
    /// `C`: clear the buffer.
    Clear,
    /// `=`: evaluate the buffer.
    Equals,
}

impl Key {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Self::Digit(c)),
            '+' | '-' | '*' | '/' => Some(Self::Operator(c)),
            'C' | 'c' => Some(Self::Clear),
            '=' => Some(Self::Equals),
            _ => None,
        }
    }

    /// Text appended to the buffer, if this key appends anything.
    pub fn text(&self) -> Option<char> {
        match self {
            Self::Digit(c) | Self::Operator(c) => Some(*c),
            Self::Clear | Self::Equals => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(c) | Self::Operator(c) => write!(f, "{}", c),
            Self::Clear => f.write_str("C"),
            Self::Equals => f.write_str("="),
        }
    }
}

impl FromStr for Key {
    type Err = UnknownKey;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let mut chars = label.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c).ok_or_else(|| UnknownKey(label.to_string())),
            _ => Err(UnknownKey(label.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_layout_label_parses() {
        for label in LAYOUT {
            let key: Key = label.parse().unwrap();
            assert_eq!(key.to_string(), label);
        }
    }

    #[test]
    fn test_unknown_labels() {
        assert_eq!("x".parse::<Key>(), Err(UnknownKey("x".to_string())));
        assert!("".parse::<Key>().is_err());
        assert!("12".parse::<Key>().is_err());
        assert!("(".parse::<Key>().is_err());
    }

    #[test]
    fn test_key_text() {
        assert_eq!(Key::Digit('7').text(), Some('7'));
        assert_eq!(Key::Operator('/').text(), Some('/'));
        assert_eq!(Key::Clear.text(), None);
        assert_eq!(Key::Equals.text(), None);
    }
}
