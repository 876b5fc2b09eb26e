//! Pocket Calc CLI binary

use std::io::{self, Read, Write};
use std::process::ExitCode;

use clap::Parser;
use pocket_calc::keypad::Keypad;
use pocket_calc_cli::{
    build_config, error_prefix, logging, Cli, CliConfig, CliError, CliResult, Commands, KeypadArgs,
    PressArgs, Printer, RunArgs, Session,
};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let engine_args = match &cli.command {
        Commands::Press(args) => Some(&args.engine),
        Commands::Run(args) => Some(&args.engine),
        Commands::Config(args) => Some(&args.engine),
        Commands::Keypad(_) => None,
    };
    let config = build_config(&cli, engine_args);
    let use_color = config.color.should_color();
    console::set_colors_enabled(use_color);
    console::set_colors_enabled_stderr(use_color);

    match run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", error_prefix(use_color));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, config: &CliConfig) -> CliResult<()> {
    logging::init(config.verbosity, config.color.should_color())?;
    tracing::debug!(?config, "starting");

    let printer = Printer::new(config.format, config.color.should_color());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Commands::Press(args) => run_press(args, config, &printer, &mut out),
        Commands::Run(args) => run_script(args, config, &printer, &mut out),
        Commands::Keypad(args) => run_keypad(args, config, &printer, &mut out),
        Commands::Config(_) => {
            writeln!(out, "{}", config.to_json()?)?;
            Ok(())
        }
    }
}

fn run_press<W: Write>(
    args: &PressArgs,
    config: &CliConfig,
    printer: &Printer,
    out: &mut W,
) -> CliResult<()> {
    let mut session = Session::new(config.engine);
    for label in &args.labels {
        let state = session.press_label(label)?;
        if args.each && !config.verbosity.is_quiet() {
            printer.write_state(out, state)?;
        }
    }
    tracing::info!(presses = session.presses(), "done");

    if !args.each && !config.verbosity.is_quiet() {
        printer.write_state(out, session.state())?;
    }
    Ok(())
}

fn run_script<W: Write>(
    args: &RunArgs,
    config: &CliConfig,
    printer: &Printer,
    out: &mut W,
) -> CliResult<()> {
    let text = match &args.file {
        Some(path) => std::fs::read_to_string(path).map_err(|source| CliError::ReadScript {
            path: path.clone(),
            source,
        })?,
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            text
        }
    };

    let quiet = config.verbosity.is_quiet();
    let mut session = Session::new(config.engine);
    session.run_script(&text, |state| {
        if !quiet {
            printer.write_state(&mut *out, state)?;
        }
        Ok(())
    })?;
    tracing::info!(presses = session.presses(), "script finished");
    Ok(())
}

fn run_keypad<W: Write>(
    args: &KeypadArgs,
    config: &CliConfig,
    printer: &Printer,
    out: &mut W,
) -> CliResult<()> {
    if config.verbosity.is_quiet() {
        return Ok(());
    }
    let keypad = Keypad::new();
    if args.json {
        printer.write_keypad_json(out, &keypad)
    } else {
        printer.write_keypad(out, &keypad)
    }
}
