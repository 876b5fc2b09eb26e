//! Pocket Calc - immediate-execution four-function calculator
//!
//! The engine behind an on-screen calculator: digit entry, operator
//! chaining, equals, sign toggle, percent and clear. Input arrives as
//! button labels or [`Token`](core::Token)s; output is the display string.
//!
//! Operators evaluate immediately, left to right. `2 + 3 × 4 =` shows `20`.
//! Arithmetic is plain `f64`, so dividing by zero shows `Infinity` instead
//! of failing.
//!
//! # Example
//!
//! ```rust
//! use pocket_calc::prelude::*;
//!
//! let mut engine = Engine::new();
//! engine.apply_token(Token::digit(5).unwrap());
//! engine.apply_token(Token::digit(0).unwrap());
//! assert_eq!(engine.apply_token(Token::Percent), "0.5");
//!
//! // Labels work too
//! engine.press("×").unwrap();
//! engine.press("4").unwrap();
//! assert_eq!(engine.press("=").unwrap(), "2");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;
pub mod keypad;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{
        evaluate, format_number, parse_number, CalcError, CalcResult, DecimalPolicy, Digit,
        Engine, EngineConfig, EngineState, Operator, Token,
    };
    pub use crate::driver::CalculatorDriver;
    pub use crate::keypad::{ButtonRole, Keypad, KeypadButton};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let mut engine = Engine::new();
        assert_eq!(engine.press("8").unwrap(), "8");
        assert_eq!(format_number(parse_number("0.25")), "0.25");
        assert_eq!(evaluate("3", "4", Operator::Multiply), 12.0);
    }

    #[test]
    fn test_keypad_drives_engine() {
        let keypad = Keypad::new();
        let mut engine = Engine::new();
        for id in ["btn-9", "btn-minus", "btn-4", "btn-equals"] {
            let token = keypad.handle_click(id).unwrap();
            engine.apply_token(token);
        }
        assert_eq!(engine.display(), "5");
    }

    #[test]
    fn test_every_keypad_label_is_a_token() {
        let keypad = Keypad::new();
        for button in keypad.buttons() {
            assert_eq!(button.label().parse::<Token>().unwrap(), button.token);
        }
    }
}
