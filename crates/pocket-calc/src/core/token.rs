//! Input tokens and their button labels
//!
//! Every button press is classified into a closed [`Token`] enum so the
//! engine can dispatch with an exhaustive `match`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult};

/// Binary arithmetic operators on the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Division (÷)
    Divide,
    /// Multiplication (×)
    Multiply,
    /// Subtraction (−)
    Subtract,
    /// Addition (+)
    Add,
}

impl Operator {
    /// All operators in keypad order (top to bottom)
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Returns the button label for this operator
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Divide => "÷",
            Self::Multiply => "×",
            Self::Subtract => "−",
            Self::Add => "+",
        }
    }

    /// Applies the operator to two numbers
    #[must_use]
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Divide => lhs / rhs,
            Self::Multiply => lhs * rhs,
            Self::Subtract => lhs - rhs,
            Self::Add => lhs + rhs,
        }
    }

    /// Parses an operator from its button label
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "÷" => Some(Self::Divide),
            "×" => Some(Self::Multiply),
            "−" => Some(Self::Subtract),
            "+" => Some(Self::Add),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A decimal digit, always in 0-9
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digit(u8);

impl Digit {
    /// Every digit in ascending order
    pub const ALL: [Self; 10] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
    ];

    /// Creates a digit, or `None` above 9
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Returns the numeric value
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the digit as an ASCII character
    #[must_use]
    pub const fn to_char(self) -> char {
        (b'0' + self.0) as char
    }

    fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).and_then(|d| Self::new(d as u8))
    }
}

impl TryFrom<u8> for Digit {
    type Error = CalcError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(CalcError::InvalidDigit(value))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single unit of calculator input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// A digit 0-9
    Digit(Digit),
    /// The decimal point
    Point,
    /// A binary operator
    Operator(Operator),
    /// Evaluate the pending operation
    Equals,
    /// Reset everything
    Clear,
    /// Flip the sign of the display
    ToggleSign,
    /// Divide the display by 100
    Percent,
}

impl Token {
    /// Creates a digit token, rejecting values above 9
    pub fn digit(d: u8) -> CalcResult<Self> {
        Digit::try_from(d).map(Self::Digit)
    }

    /// Returns the button label for this token
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Point => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::ToggleSign => "±".to_string(),
            Self::Percent => "%".to_string(),
        }
    }

    /// Returns the text this token contributes to the display, if it is
    /// part of number entry
    #[must_use]
    pub fn entry_char(&self) -> Option<char> {
        match self {
            Self::Digit(d) => Some(d.to_char()),
            Self::Point => Some('.'),
            Self::Operator(_) | Self::Equals | Self::Clear | Self::ToggleSign | Self::Percent => {
                None
            }
        }
    }

    /// Returns true for digit and point tokens
    #[must_use]
    pub const fn is_entry(&self) -> bool {
        matches!(self, Self::Digit(_) | Self::Point)
    }

    /// Parses a button label, also accepting `/`, `*` and `-` for the
    /// typographic operator symbols
    pub fn parse_lenient(label: &str) -> CalcResult<Self> {
        match label.trim() {
            "/" => Ok(Self::Operator(Operator::Divide)),
            "*" => Ok(Self::Operator(Operator::Multiply)),
            "-" => Ok(Self::Operator(Operator::Subtract)),
            other => other.parse(),
        }
    }

    /// Every token, in keypad reading order
    #[must_use]
    pub fn all() -> Vec<Self> {
        let mut tokens: Vec<Self> = Digit::ALL.iter().copied().map(Self::Digit).collect();
        tokens.push(Self::Point);
        tokens.extend(Operator::ALL.iter().copied().map(Self::Operator));
        tokens.extend([Self::Equals, Self::Clear, Self::ToggleSign, Self::Percent]);
        tokens
    }
}

impl FromStr for Token {
    type Err = CalcError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        if let Some(op) = Operator::from_symbol(label) {
            return Ok(Self::Operator(op));
        }
        match label {
            "." => Ok(Self::Point),
            "=" => Ok(Self::Equals),
            "C" => Ok(Self::Clear),
            "±" => Ok(Self::ToggleSign),
            "%" => Ok(Self::Percent),
            _ => {
                let mut chars = label.chars();
                match (chars.next().and_then(Digit::from_char), chars.next()) {
                    (Some(d), None) => Ok(Self::Digit(d)),
                    _ => Err(CalcError::UnknownToken(label.to_string())),
                }
            }
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
