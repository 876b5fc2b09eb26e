//! Pocket Calc CLI library
//!
//! Command-line host for the pocket-calc engine. Labels typed on the
//! command line, in a script file or on stdin are pressed in order and the
//! display is printed after each step.

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

mod commands;
mod config;
mod error;
pub mod logging;
mod output;
pub mod session;

pub use commands::{
    Cli, ColorArg, Commands, ConfigArgs, EngineArgs, FormatArg, KeypadArgs, PressArgs, RunArgs,
};
pub use config::{CliConfig, ColorChoice, OutputFormat, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{error_prefix, Printer};
pub use session::{parse_script, tokenize_label, ScriptLine, Session};

/// Builds the configuration from global flags and per-command engine options
#[must_use]
pub fn build_config(cli: &Cli, engine: Option<&EngineArgs>) -> CliConfig {
    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);
    let color: ColorChoice = cli.color.clone().into();
    let config = CliConfig::new().with_verbosity(verbosity).with_color(color);

    match engine {
        Some(args) => config
            .with_format(args.format.into())
            .with_strict_decimal(args.strict_decimal),
        None => config,
    }
}
