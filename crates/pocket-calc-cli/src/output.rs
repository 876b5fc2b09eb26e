//! Output formatting

use std::io::Write;

use console::{Style, StyledObject};
use pocket_calc::core::EngineState;
use pocket_calc::keypad::{ButtonRole, Keypad, KeypadButton};
use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::CliResult;

/// Width of one keypad cell in characters
const CELL_WIDTH: usize = 5;

/// Machine-readable snapshot of a session
#[derive(Debug, Serialize)]
struct StateReport<'a> {
    display: &'a str,
    pending_operand: Option<&'a str>,
    pending_operator: Option<&'static str>,
    awaiting_next_operand: bool,
}

impl<'a> From<&'a EngineState> for StateReport<'a> {
    fn from(state: &'a EngineState) -> Self {
        Self {
            display: &state.display,
            pending_operand: state.pending_operand(),
            pending_operator: state.pending_operator().map(|op| op.symbol()),
            awaiting_next_operand: state.awaiting_next_operand,
        }
    }
}

/// Writes engine states and the keypad to a terminal or pipe
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    format: OutputFormat,
    use_color: bool,
}

impl Printer {
    /// Create a new printer
    #[must_use]
    pub const fn new(format: OutputFormat, use_color: bool) -> Self {
        Self { format, use_color }
    }

    /// Writes one state as a line
    pub fn write_state<W: Write>(&self, out: &mut W, state: &EngineState) -> CliResult<()> {
        match self.format {
            OutputFormat::Plain => writeln!(out, "{}", state.display)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, &StateReport::from(state))?;
                writeln!(out)?;
            }
        }
        Ok(())
    }

    /// Writes the keypad grid, colored by button role
    pub fn write_keypad<W: Write>(&self, out: &mut W, keypad: &Keypad) -> CliResult<()> {
        let (rows, _) = keypad.dimensions();
        for row in 0..rows {
            let cells: Vec<String> = keypad.row(row).map(|b| self.cell(b)).collect();
            writeln!(out, "{}", cells.join(" "))?;
        }
        Ok(())
    }

    /// Writes the keypad as pretty JSON
    pub fn write_keypad_json<W: Write>(&self, out: &mut W, keypad: &Keypad) -> CliResult<()> {
        serde_json::to_writer_pretty(&mut *out, keypad.buttons())?;
        writeln!(out)?;
        Ok(())
    }

    fn cell(&self, button: &KeypadButton) -> String {
        let width = CELL_WIDTH * button.span + (button.span - 1);
        let text = format!("[{:^inner$}]", button.label(), inner = width - 2);
        if self.use_color {
            role_style(button.role).apply_to(text).to_string()
        } else {
            text
        }
    }
}

fn role_style(role: ButtonRole) -> Style {
    match role {
        ButtonRole::Function => Style::new().dim(),
        ButtonRole::Operation => Style::new().yellow().bold(),
        ButtonRole::WideDigit | ButtonRole::Digit => Style::new(),
    }
}

/// Styles an error prefix for stderr
#[must_use]
pub fn error_prefix(use_color: bool) -> StyledObject<&'static str> {
    let style = if use_color {
        Style::new().red().bold()
    } else {
        Style::new()
    };
    style.apply_to("error:")
}
