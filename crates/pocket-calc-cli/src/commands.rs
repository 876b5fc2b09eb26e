//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Pocket Calc: immediate-execution four-function calculator
#[derive(Parser, Debug)]
#[command(name = "pocket-calc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Press buttons and print the display
    Press(PressArgs),

    /// Press buttons read from a file or stdin
    Run(RunArgs),

    /// Show the keypad layout
    Keypad(KeypadArgs),

    /// Show configuration
    Config(ConfigArgs),
}

/// Engine options shared by the commands that press buttons
#[derive(Parser, Debug, Clone, Default)]
pub struct EngineArgs {
    /// Ignore a second decimal point within one number
    #[arg(long)]
    pub strict_decimal: bool,

    /// Output format
    #[arg(long, default_value = "plain")]
    pub format: FormatArg,
}

/// Arguments for the press command
#[derive(Parser, Debug)]
pub struct PressArgs {
    /// Button labels, e.g. `2 + 3 × 4 =`
    #[arg(required = true, allow_hyphen_values = true)]
    pub labels: Vec<String>,

    /// Print the display after every button instead of only the last
    #[arg(long)]
    pub each: bool,

    /// Engine options
    #[command(flatten)]
    pub engine: EngineArgs,
}

/// Arguments for the run command
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Script with whitespace-separated labels (stdin if omitted)
    pub file: Option<PathBuf>,

    /// Engine options
    #[command(flatten)]
    pub engine: EngineArgs,
}

/// Arguments for the keypad command
#[derive(Parser, Debug)]
pub struct KeypadArgs {
    /// Print the keypad as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Engine options
    #[command(flatten)]
    pub engine: EngineArgs,
}

/// Color argument for CLI
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

/// Output format argument
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum FormatArg {
    /// Display string only
    #[default]
    Plain,
    /// Full engine state as JSON
    Json,
}

impl From<FormatArg> for crate::config::OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Plain => Self::Plain,
            FormatArg::Json => Self::Json,
        }
    }
}
