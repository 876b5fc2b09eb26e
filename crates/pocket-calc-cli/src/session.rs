//! A calculator session driven by command-line labels
//!
//! Labels are what a user can type in a shell: the keypad labels, the
//! ASCII operators `/ * -`, and runs of digits such as `125` or `0.5`,
//! which press one button per character.

use pocket_calc::core::{CalcError, CalcResult, Engine, EngineConfig, EngineState, Token};
use pocket_calc::driver::CalculatorDriver;

use crate::error::{CliError, CliResult};

/// Expands one command-line label into the buttons it presses
pub fn tokenize_label(label: &str) -> CalcResult<Vec<Token>> {
    if let Ok(token) = Token::parse_lenient(label) {
        return Ok(vec![token]);
    }
    let is_number = !label.is_empty() && label.chars().all(|c| c.is_ascii_digit() || c == '.');
    if !is_number {
        return Err(CalcError::UnknownToken(label.to_string()));
    }
    label
        .chars()
        .map(|c| Token::parse_lenient(c.encode_utf8(&mut [0; 4])))
        .collect()
}

/// One non-empty line of a script
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    /// 1-based line number
    pub number: usize,
    /// Labels on the line
    pub labels: Vec<String>,
}

/// Splits a script into labelled lines; `#` starts a comment
pub fn parse_script(text: &str) -> Vec<ScriptLine> {
    text.lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let code = line.split_once('#').map_or(line, |(code, _)| code);
            let labels: Vec<String> = code.split_whitespace().map(str::to_string).collect();
            (!labels.is_empty()).then(|| ScriptLine {
                number: i + 1,
                labels,
            })
        })
        .collect()
}

/// Calculator session owned by one CLI invocation
#[derive(Debug, Default)]
pub struct Session {
    engine: Engine,
    presses: usize,
}

impl Session {
    /// Creates a session with the given engine settings
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            engine: Engine::with_config(config),
            presses: 0,
        }
    }

    /// Returns the engine
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Returns the current engine state
    #[must_use]
    pub fn state(&self) -> &EngineState {
        self.engine.state()
    }

    /// Number of buttons pressed so far
    #[must_use]
    pub fn presses(&self) -> usize {
        self.presses
    }

    /// Presses every button a label stands for
    pub fn press_label(&mut self, label: &str) -> CalcResult<&EngineState> {
        let tokens = tokenize_label(label)?;
        self.presses += tokens.len();
        self.engine.apply_all(tokens);
        tracing::debug!(label, display = self.engine.display(), "pressed");
        Ok(self.engine.state())
    }

    /// Runs a script, calling `on_line` with the state after each line
    pub fn run_script<F>(&mut self, text: &str, mut on_line: F) -> CliResult<()>
    where
        F: FnMut(&EngineState) -> CliResult<()>,
    {
        for line in parse_script(text) {
            for label in &line.labels {
                self.press_label(label)
                    .map_err(|e| CliError::script(line.number, e))?;
            }
            on_line(self.engine.state())?;
        }
        Ok(())
    }
}

impl CalculatorDriver for Session {
    fn press(&mut self, label: &str) -> CalcResult<()> {
        self.press_label(label).map(|_| ())
    }

    fn display(&self) -> String {
        self.engine.display().to_string()
    }

    fn clear(&mut self) {
        self.engine.apply_token(Token::Clear);
    }
}
