//! Calculator drivers
//!
//! A driver is anything that accepts button labels and shows a display:
//! the bare [`Engine`], a command-line session, a UI. The `verify_*`
//! functions describe the calculator's observable behavior once, so the
//! same checks run against every driver.
//!
//! ```rust
//! use pocket_calc::core::Engine;
//! use pocket_calc::driver::run_all_checks;
//!
//! let mut engine = Engine::new();
//! run_all_checks(&mut engine).unwrap();
//! ```

use crate::core::{CalcResult, Engine, Token};

/// Label-level interface to a calculator
pub trait CalculatorDriver {
    /// Presses one button by label
    fn press(&mut self, label: &str) -> CalcResult<()>;

    /// Gets the current display
    fn display(&self) -> String;

    /// Resets the calculator
    fn clear(&mut self);

    /// Presses several buttons in order and returns the final display
    fn press_all(&mut self, labels: &[&str]) -> CalcResult<String> {
        for label in labels {
            self.press(label)?;
        }
        Ok(self.display())
    }
}

impl CalculatorDriver for Engine {
    fn press(&mut self, label: &str) -> CalcResult<()> {
        Engine::press(self, label).map(|_| ())
    }

    fn display(&self) -> String {
        Engine::display(self).to_string()
    }

    fn clear(&mut self) {
        self.apply_token(Token::Clear);
    }
}

/// Verifies digits concatenate and a leading zero is replaced
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    assert_eq!(driver.press_all(&["1", "2", "3"])?, "123");
    driver.clear();

    assert_eq!(driver.press_all(&["0", "5"])?, "5");
    driver.clear();

    assert_eq!(driver.press_all(&["9", "0", "0"])?, "900");
    driver.clear();
    Ok(())
}

/// Verifies clear returns to "0" from any state
pub fn verify_clear<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    driver.press_all(&["8", "×", "3", "+"])?;
    driver.press("C")?;
    assert_eq!(driver.display(), "0");

    // The pending operation is gone too
    assert_eq!(driver.press_all(&["4", "="])?, "4");
    driver.clear();
    Ok(())
}

/// Verifies sign toggle is its own inverse
pub fn verify_sign_toggle<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    assert_eq!(driver.press_all(&["4", "2", "±"])?, "-42");
    assert_eq!(driver.press_all(&["±"])?, "42");
    driver.clear();
    Ok(())
}

/// Verifies operators chain left to right without precedence
pub fn verify_chained_evaluation<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    assert_eq!(driver.press_all(&["2", "+", "3", "×", "4", "="])?, "20");
    driver.clear();

    assert_eq!(driver.press_all(&["9", "−", "4", "÷", "5", "="])?, "1");
    driver.clear();
    Ok(())
}

/// Verifies equals without a pending operation changes nothing
pub fn verify_equals_without_operator<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    assert_eq!(driver.press_all(&["5", "="])?, "5");
    driver.clear();
    Ok(())
}

/// Verifies percent divides the display by 100
pub fn verify_percent<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    assert_eq!(driver.press_all(&["5", "0", "%"])?, "0.5");
    driver.clear();
    Ok(())
}

/// Verifies division by zero shows infinity
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    assert_eq!(driver.press_all(&["5", "÷", "0", "="])?, "Infinity");
    driver.clear();
    Ok(())
}

/// Verifies a second operator press only replaces the first
pub fn verify_operator_replacement<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    assert_eq!(driver.press_all(&["7", "+", "×", "2", "="])?, "14");
    driver.clear();
    Ok(())
}

/// Complete verification suite
pub fn run_all_checks<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    verify_digit_entry(driver)?;
    verify_clear(driver)?;
    verify_sign_toggle(driver)?;
    verify_chained_evaluation(driver)?;
    verify_equals_without_operator(driver)?;
    verify_percent(driver)?;
    verify_division_by_zero(driver)?;
    verify_operator_replacement(driver)?;
    Ok(())
}
