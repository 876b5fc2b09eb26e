//! Immediate-execution calculator engine
//!
//! The engine is a flat state machine over [`EngineState`]. Each call to
//! [`Engine::apply_token`] is one atomic transition and returns the new
//! display string. There is no operator precedence: every operator press
//! evaluates the running result against the current display, left to right.
//!
//! ```rust
//! use pocket_calc::core::Engine;
//!
//! let mut engine = Engine::new();
//! for label in ["2", "+", "3", "×", "4", "="] {
//!     engine.press(label).unwrap();
//! }
//! assert_eq!(engine.display(), "20");
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{evaluate, format_number, parse_number, CalcError, CalcResult, Operator, Token};

/// Display shown after construction and after clear
pub const INITIAL_DISPLAY: &str = "0";

/// How repeated decimal points are handled during number entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DecimalPolicy {
    /// Every point is appended as typed, and a point typed over `"0"`
    /// replaces it. `1 . . 2` displays `1..2`.
    #[default]
    Permissive,
    /// A second point in the same number is ignored, and a number started
    /// with a point displays as `0.`
    SinglePoint,
}

/// Engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Decimal point handling
    pub decimal_policy: DecimalPolicy,
}

impl EngineConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set decimal point handling
    #[must_use]
    pub const fn with_decimal_policy(mut self, decimal_policy: DecimalPolicy) -> Self {
        self.decimal_policy = decimal_policy;
        self
    }
}

/// The left-hand side of an operation that has not been evaluated yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pending {
    /// Left-hand operand as a display string
    pub operand: String,
    /// Operator waiting for its right-hand operand
    pub operator: Operator,
}

/// Complete interaction state of one calculator session
///
/// Operand and operator are stored together so a half-set pending
/// operation cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineState {
    /// String currently shown
    pub display: String,
    /// Operation waiting for its right-hand operand
    pub pending: Option<Pending>,
    /// Whether the next digit starts a fresh number
    pub awaiting_next_operand: bool,
}

impl Default for EngineState {
    fn default() -> Self {
        Self {
            display: INITIAL_DISPLAY.to_string(),
            pending: None,
            awaiting_next_operand: false,
        }
    }
}

impl EngineState {
    /// Returns the pending left-hand operand
    #[must_use]
    pub fn pending_operand(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.operand.as_str())
    }

    /// Returns the pending operator
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending.as_ref().map(|p| p.operator)
    }

    /// Returns true if this is the state produced by construction or clear
    #[must_use]
    pub fn is_initial(&self) -> bool {
        *self == Self::default()
    }

    /// Serializes the state to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Restores a state from JSON
    pub fn from_json(json: &str) -> CalcResult<Self> {
        serde_json::from_str(json).map_err(|e| CalcError::InvalidState(e.to_string()))
    }
}

/// Calculator engine owning one session's state
#[derive(Debug, Clone, Default)]
pub struct Engine {
    state: EngineState,
    config: EngineConfig,
}

impl Engine {
    /// Creates an engine in the initial state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with custom configuration
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            state: EngineState::default(),
            config,
        }
    }

    /// Creates an engine resuming from an existing state
    #[must_use]
    pub fn from_state(state: EngineState, config: EngineConfig) -> Self {
        Self { state, config }
    }

    /// Returns the current state
    #[must_use]
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Returns the configuration
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the display string
    #[must_use]
    pub fn display(&self) -> &str {
        &self.state.display
    }

    /// Applies one token and returns the new display
    pub fn apply_token(&mut self, token: Token) -> &str {
        match token {
            Token::Digit(_) | Token::Point => self.enter(token),
            Token::Operator(op) => self.operator(op),
            Token::Equals => self.equals(),
            Token::Clear => self.clear(),
            Token::ToggleSign => self.toggle_sign(),
            Token::Percent => self.percent(),
        }
        tracing::trace!(
            token = %token,
            display = %self.state.display,
            pending = ?self.state.pending,
            awaiting = self.state.awaiting_next_operand,
            "applied token"
        );
        &self.state.display
    }

    /// Parses a button label and applies it
    pub fn press(&mut self, label: &str) -> CalcResult<&str> {
        let token: Token = label.parse()?;
        Ok(self.apply_token(token))
    }

    /// Applies a sequence of tokens and returns the final display
    pub fn apply_all<I>(&mut self, tokens: I) -> &str
    where
        I: IntoIterator<Item = Token>,
    {
        for token in tokens {
            self.apply_token(token);
        }
        &self.state.display
    }

    fn enter(&mut self, token: Token) {
        let Some(ch) = token.entry_char() else {
            return;
        };
        let strict = self.config.decimal_policy == DecimalPolicy::SinglePoint;
        let state = &mut self.state;

        if state.awaiting_next_operand {
            state.awaiting_next_operand = false;
            state.display = fresh_entry(ch, strict);
            return;
        }

        if strict && ch == '.' && state.display.contains('.') {
            return;
        }
        if state.display == INITIAL_DISPLAY {
            state.display = fresh_entry(ch, strict);
        } else {
            state.display.push(ch);
        }
    }

    fn operator(&mut self, op: Operator) {
        let state = &mut self.state;

        state.pending = Some(match state.pending.take() {
            // Operator pressed twice in a row: swap it, evaluate nothing
            Some(pending) if state.awaiting_next_operand => {
                tracing::debug!(from = %pending.operator, to = %op, "replaced pending operator");
                Pending {
                    operator: op,
                    ..pending
                }
            }
            Some(pending) => {
                let result =
                    format_number(evaluate(&pending.operand, &state.display, pending.operator));
                tracing::debug!(result = %result, "chained evaluation");
                state.display.clone_from(&result);
                Pending {
                    operand: result,
                    operator: op,
                }
            }
            None => Pending {
                operand: state.display.clone(),
                operator: op,
            },
        });
        state.awaiting_next_operand = true;
    }

    fn equals(&mut self) {
        let state = &mut self.state;
        let Some(pending) = state.pending.take() else {
            return;
        };
        state.display =
            format_number(evaluate(&pending.operand, &state.display, pending.operator));
        state.awaiting_next_operand = true;
    }

    fn clear(&mut self) {
        self.state = EngineState::default();
    }

    fn toggle_sign(&mut self) {
        let display = &mut self.state.display;
        if let Some(stripped) = display.strip_prefix('-') {
            *display = stripped.to_string();
        } else {
            display.insert(0, '-');
        }
    }

    fn percent(&mut self) {
        let value = parse_number(&self.state.display) / 100.0;
        self.state.display = format_number(value);
    }
}

/// Display text for the first character of a new number
fn fresh_entry(ch: char, strict: bool) -> String {
    if strict && ch == '.' {
        "0.".to_string()
    } else {
        ch.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(engine: &mut Engine, labels: &[&str]) -> String {
        for label in labels {
            engine.press(label).unwrap();
        }
        engine.display().to_string()
    }

    fn calc(labels: &[&str]) -> String {
        run(&mut Engine::new(), labels)
    }

    // ===== Construction =====

    #[test]
    fn test_engine_new_is_initial() {
        let engine = Engine::new();
        assert_eq!(engine.display(), "0");
        assert!(engine.state().is_initial());
        assert_eq!(engine.state().pending_operand(), None);
        assert_eq!(engine.state().pending_operator(), None);
        assert!(!engine.state().awaiting_next_operand);
        assert_eq!(engine.config().decimal_policy, DecimalPolicy::Permissive);
    }

    #[test]
    fn test_engine_with_config() {
        let config = EngineConfig::new().with_decimal_policy(DecimalPolicy::SinglePoint);
        let engine = Engine::with_config(config);
        assert_eq!(engine.config().decimal_policy, DecimalPolicy::SinglePoint);
        assert!(engine.state().is_initial());
    }

    // ===== Digit entry =====

    #[test]
    fn test_digits_concatenate() {
        assert_eq!(calc(&["1", "2", "3"]), "123");
    }

    #[test]
    fn test_digit_replaces_initial_zero() {
        assert_eq!(calc(&["0", "5"]), "5");
        assert_eq!(calc(&["0", "0", "0"]), "0");
    }

    #[test]
    fn test_zero_after_digit_appends() {
        assert_eq!(calc(&["5", "0", "0"]), "500");
    }

    #[test]
    fn test_apply_token_returns_display() {
        let mut engine = Engine::new();
        assert_eq!(engine.apply_token(Token::digit(4).unwrap()), "4");
        assert_eq!(engine.apply_token(Token::digit(2).unwrap()), "42");
    }

    #[test]
    fn test_apply_all() {
        let mut engine = Engine::new();
        let display = engine.apply_all([
            Token::digit(6).unwrap(),
            Token::Operator(Operator::Multiply),
            Token::digit(7).unwrap(),
            Token::Equals,
        ]);
        assert_eq!(display, "42");
    }

    #[test]
    fn test_press_unknown_label() {
        let mut engine = Engine::new();
        assert!(matches!(
            engine.press("sqrt"),
            Err(CalcError::UnknownToken(_))
        ));
        assert!(engine.state().is_initial());
    }

    // ===== Decimal points =====

    #[test]
    fn test_permissive_point_appends() {
        assert_eq!(calc(&["1", ".", "5"]), "1.5");
    }

    #[test]
    fn test_permissive_point_replaces_initial_zero() {
        assert_eq!(calc(&["."]), ".");
        assert_eq!(calc(&[".", "5"]), ".5");
    }

    #[test]
    fn test_permissive_allows_repeated_points() {
        assert_eq!(calc(&["1", ".", ".", "2"]), "1..2");
        assert_eq!(calc(&["1", ".", "2", ".", "3"]), "1.2.3");
    }

    #[test]
    fn test_permissive_malformed_display_parses_prefix() {
        // "1.2.3" evaluates as 1.2
        assert_eq!(calc(&["1", ".", "2", ".", "3", "+", "1", "="]), "2.2");
        // a lone point evaluates as NaN
        assert_eq!(calc(&[".", "+", "1", "="]), "NaN");
    }

    #[test]
    fn test_single_point_ignores_second_point() {
        let mut engine =
            Engine::with_config(EngineConfig::new().with_decimal_policy(DecimalPolicy::SinglePoint));
        assert_eq!(run(&mut engine, &["1", ".", ".", "2", "."]), "1.2");
    }

    #[test]
    fn test_single_point_fresh_number_starts_with_zero() {
        let config = EngineConfig::new().with_decimal_policy(DecimalPolicy::SinglePoint);
        let mut engine = Engine::with_config(config);
        assert_eq!(run(&mut engine, &[".", "5"]), "0.5");

        let mut engine = Engine::with_config(config);
        assert_eq!(run(&mut engine, &["3", "+", ".", "5", "="]), "3.5");
    }

    // ===== Operators =====

    #[test]
    fn test_operator_stores_operand() {
        let mut engine = Engine::new();
        run(&mut engine, &["1", "2", "+"]);
        assert_eq!(engine.state().pending_operand(), Some("12"));
        assert_eq!(engine.state().pending_operator(), Some(Operator::Add));
        assert!(engine.state().awaiting_next_operand);
        assert_eq!(engine.display(), "12");
    }

    #[test]
    fn test_digit_after_operator_starts_fresh() {
        let mut engine = Engine::new();
        run(&mut engine, &["1", "2", "+", "3"]);
        assert_eq!(engine.display(), "3");
        assert!(!engine.state().awaiting_next_operand);
    }

    #[test]
    fn test_chained_evaluation_is_left_to_right() {
        assert_eq!(calc(&["2", "+", "3", "×", "4", "="]), "20");
        assert_eq!(calc(&["1", "0", "−", "4", "÷", "2", "="]), "3");
    }

    #[test]
    fn test_chained_operator_shows_running_result() {
        let mut engine = Engine::new();
        run(&mut engine, &["2", "+", "3", "×"]);
        assert_eq!(engine.display(), "5");
        assert_eq!(engine.state().pending_operand(), Some("5"));
        assert_eq!(engine.state().pending_operator(), Some(Operator::Multiply));
    }

    #[test]
    fn test_double_operator_only_swaps() {
        let mut engine = Engine::new();
        run(&mut engine, &["7", "+", "×"]);
        assert_eq!(engine.state().pending_operand(), Some("7"));
        assert_eq!(engine.state().pending_operator(), Some(Operator::Multiply));
        assert_eq!(run(&mut engine, &["2", "="]), "14");
    }

    #[test]
    fn test_operator_then_equals_reuses_display() {
        assert_eq!(calc(&["7", "+", "="]), "14");
    }

    #[test]
    fn test_operator_after_equals_continues_from_result() {
        assert_eq!(calc(&["2", "+", "3", "=", "×", "4", "="]), "20");
    }

    // ===== Equals =====

    #[test]
    fn test_equals_without_pending_is_noop() {
        let mut engine = Engine::new();
        run(&mut engine, &["5", "="]);
        assert_eq!(engine.display(), "5");
        assert!(!engine.state().awaiting_next_operand);
        // digits keep appending since equals did nothing
        assert_eq!(run(&mut engine, &["3"]), "53");
    }

    #[test]
    fn test_equals_clears_pending() {
        let mut engine = Engine::new();
        run(&mut engine, &["8", "−", "3", "="]);
        assert_eq!(engine.display(), "5");
        assert_eq!(engine.state().pending, None);
        assert!(engine.state().awaiting_next_operand);
        assert_eq!(run(&mut engine, &["9"]), "9");
    }

    #[test]
    fn test_repeated_equals_is_noop() {
        assert_eq!(calc(&["2", "×", "3", "=", "="]), "6");
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(calc(&["5", "÷", "0", "="]), "Infinity");
        assert_eq!(calc(&["5", "±", "÷", "0", "="]), "-Infinity");
        assert_eq!(calc(&["0", "÷", "0", "="]), "NaN");
    }

    #[test]
    fn test_infinity_chains_through() {
        assert_eq!(calc(&["5", "÷", "0", "+", "1", "="]), "Infinity");
    }

    #[test]
    fn test_float_results_are_native() {
        assert_eq!(calc(&[".", "1", "+", ".", "2", "="]), "0.30000000000000004");
    }

    #[test]
    fn test_halfway_result_keeps_even_last_digit() {
        let mut engine = Engine::new();
        for ch in "12177839647464.0625".chars() {
            engine.press(&ch.to_string()).unwrap();
        }
        assert_eq!(run(&mut engine, &["+", "0", "="]), "12177839647464.062");
    }

    // ===== Clear =====

    #[test]
    fn test_clear_resets_everything() {
        let mut engine = Engine::new();
        run(&mut engine, &["9", "×", "8", "+"]);
        assert_eq!(engine.apply_token(Token::Clear), "0");
        assert!(engine.state().is_initial());
    }

    #[test]
    fn test_clear_keeps_config() {
        let config = EngineConfig::new().with_decimal_policy(DecimalPolicy::SinglePoint);
        let mut engine = Engine::with_config(config);
        run(&mut engine, &["1", "C"]);
        assert_eq!(*engine.config(), config);
    }

    // ===== Sign toggle =====

    #[test]
    fn test_toggle_sign() {
        assert_eq!(calc(&["5", "±"]), "-5");
        assert_eq!(calc(&["5", "±", "±"]), "5");
    }

    #[test]
    fn test_toggle_sign_on_zero() {
        assert_eq!(calc(&["±"]), "-0");
        // "-0" is not the initial "0", so digits append
        assert_eq!(calc(&["±", "5"]), "-05");
        assert_eq!(calc(&["±", "5", "+", "1", "="]), "-4");
    }

    #[test]
    fn test_toggle_sign_leaves_pending_alone() {
        let mut engine = Engine::new();
        run(&mut engine, &["4", "+", "±"]);
        assert_eq!(engine.display(), "-4");
        assert_eq!(engine.state().pending_operand(), Some("4"));
        assert!(engine.state().awaiting_next_operand);
        assert_eq!(run(&mut engine, &["="]), "0");
    }

    // ===== Percent =====

    #[test]
    fn test_percent() {
        assert_eq!(calc(&["5", "0", "%"]), "0.5");
        assert_eq!(calc(&["5", "%"]), "0.05");
    }

    #[test]
    fn test_percent_of_negative() {
        assert_eq!(calc(&["2", "5", "±", "%"]), "-0.25");
    }

    #[test]
    fn test_percent_of_lone_point_is_nan() {
        assert_eq!(calc(&[".", "%"]), "NaN");
    }

    #[test]
    fn test_percent_as_right_operand() {
        assert_eq!(calc(&["2", "0", "0", "×", "5", "%", "="]), "10");
    }

    // ===== State serialization =====

    #[test]
    fn test_state_json_round_trip() {
        let mut engine = Engine::new();
        run(&mut engine, &["1", "2", "÷"]);
        let json = engine.state().to_json().unwrap();
        let restored = EngineState::from_json(&json).unwrap();
        assert_eq!(&restored, engine.state());

        let mut resumed = Engine::from_state(restored, EngineConfig::default());
        assert_eq!(run(&mut resumed, &["4", "="]), "3");
    }

    #[test]
    fn test_state_from_invalid_json() {
        assert!(matches!(
            EngineState::from_json("{\"display\":1}"),
            Err(CalcError::InvalidState(_))
        ));
    }

    #[test]
    fn test_decimal_policy_serde_names() {
        let json = serde_json::to_string(&DecimalPolicy::SinglePoint).unwrap();
        assert_eq!(json, "\"single-point\"");
    }
}
