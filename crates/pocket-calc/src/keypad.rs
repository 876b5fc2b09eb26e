//! Keypad layout
//!
//! Describes the button grid a presentation layer draws and maps button
//! clicks back to [`Token`]s. Layout:
//!
//! ```text
//! [ C ] [ ± ] [ % ] [ ÷ ]
//! [ 7 ] [ 8 ] [ 9 ] [ × ]
//! [ 4 ] [ 5 ] [ 6 ] [ − ]
//! [ 1 ] [ 2 ] [ 3 ] [ + ]
//! [    0    ] [ . ] [ = ]
//! ```

use serde::Serialize;

use crate::core::{Digit, Operator, Token};

/// Visual group a button belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonRole {
    /// Clear, sign toggle, percent
    Function,
    /// Arithmetic operators and equals
    Operation,
    /// The double-width zero key
    WideDigit,
    /// Digits and the decimal point
    Digit,
}

impl ButtonRole {
    /// Classifies a token into its button role
    #[must_use]
    pub const fn of(token: Token) -> Self {
        match token {
            Token::Clear | Token::ToggleSign | Token::Percent => Self::Function,
            Token::Operator(_) | Token::Equals => Self::Operation,
            Token::Digit(d) if d.value() == 0 => Self::WideDigit,
            Token::Digit(_) | Token::Point => Self::Digit,
        }
    }
}

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeypadButton {
    /// Token produced by a click
    #[serde(serialize_with = "serialize_label")]
    pub token: Token,
    /// Stable element ID
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// First grid column (0-indexed)
    pub col: usize,
    /// Number of columns covered
    pub span: usize,
    /// Visual group
    pub role: ButtonRole,
}

fn serialize_label<S: serde::Serializer>(token: &Token, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&token.label())
}

impl KeypadButton {
    /// Creates a button; zero spans two columns
    #[must_use]
    pub fn new(token: Token, row: usize, col: usize) -> Self {
        let role = ButtonRole::of(token);
        let span = if role == ButtonRole::WideDigit { 2 } else { 1 };
        Self {
            token,
            id: button_id(token),
            row,
            col,
            span,
            role,
        }
    }

    /// Returns the label drawn on the button
    #[must_use]
    pub fn label(&self) -> String {
        self.token.label()
    }

    /// Returns true if this button covers the given column
    #[must_use]
    pub fn covers(&self, col: usize) -> bool {
        (self.col..self.col + self.span).contains(&col)
    }
}

fn button_id(token: Token) -> String {
    match token {
        Token::Digit(d) => format!("btn-{d}"),
        Token::Point => "btn-point".to_string(),
        Token::Operator(op) => format!("btn-{}", op_name(op)),
        Token::Equals => "btn-equals".to_string(),
        Token::Clear => "btn-clear".to_string(),
        Token::ToggleSign => "btn-sign".to_string(),
        Token::Percent => "btn-percent".to_string(),
    }
}

const fn op_name(op: Operator) -> &'static str {
    match op {
        Operator::Divide => "divide",
        Operator::Multiply => "times",
        Operator::Subtract => "minus",
        Operator::Add => "plus",
    }
}

/// Calculator keypad
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard four-function keypad
    #[must_use]
    pub fn new() -> Self {
        use crate::core::Token::{Clear, Equals, Percent, Point, ToggleSign};
        let op = Token::Operator;
        let num = |d: usize| Token::Digit(Digit::ALL[d]);

        let layout: [&[Token]; 5] = [
            &[Clear, ToggleSign, Percent, op(Operator::Divide)],
            &[num(7), num(8), num(9), op(Operator::Multiply)],
            &[num(4), num(5), num(6), op(Operator::Subtract)],
            &[num(1), num(2), num(3), op(Operator::Add)],
            &[num(0), Point, Equals],
        ];

        let mut buttons = Vec::with_capacity(19);
        for (row, tokens) in layout.iter().enumerate() {
            let mut col = 0;
            for &token in *tokens {
                let button = KeypadButton::new(token, row, col);
                col += button.span;
                buttons.push(button);
            }
        }

        Self {
            buttons,
            rows: layout.len(),
            cols: 4,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets all buttons in reading order
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }

    /// Gets the buttons of one row
    pub fn row(&self, row: usize) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter().filter(move |b| b.row == row)
    }

    /// Gets the button covering a grid cell
    #[must_use]
    pub fn button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.row(row).find(|b| b.covers(col))
    }

    /// Finds a button by element ID
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds a button by its label
    #[must_use]
    pub fn find_by_label(&self, label: &str) -> Option<&KeypadButton> {
        let token: Token = label.parse().ok()?;
        self.buttons.iter().find(|b| b.token == token)
    }

    /// Processes a button click and returns its token
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<Token> {
        self.find_by_id(element_id).map(|b| b.token)
    }
}
