//! keypad-calc: drive the calculator from a terminal
//!
//! ## Usage
//!
//! ```bash
//! keypad-calc --keys "123*45="          # one sequence, print the display
//! keypad-calc --keys "5/0=" --json      # display fields as JSON
//! echo "2+3*4=" | keypad-calc -v        # one display line per input line
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used))]

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use keypad_calculator::prelude::*;
use tracing_subscriber::EnvFilter;

/// Keystroke-driven desk calculator
#[derive(Debug, Parser)]
#[command(name = "keypad-calc", version, about)]
struct Cli {
    /// Keystrokes to apply, e.g. "12*3=" or "5 EXP 3 +/- ="
    #[arg(short, long)]
    keys: Option<String>,

    /// JSON file overriding display limits and sentinel texts
    #[arg(short, long, env = "KEYPAD_CALC_CONFIG")]
    config: Option<PathBuf>,

    /// Print display fields as JSON instead of a text line
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout stays machine-readable. `RUST_LOG` wins over
/// the verbosity flag when set.
fn setup_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("keypad_calculator={level},keypad_calc={level}"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> CalcResult<()> {
    let config = match &cli.config {
        Some(path) => CalculatorConfig::from_path(path)?,
        None => CalculatorConfig::default(),
    };
    tracing::debug!(?config, "configuration loaded");

    let mut calc = InputController::with_config(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(keys) = &cli.keys {
        calc.type_keys(keys)?;
        return print_display(&mut out, calc.display(), cli.json);
    }

    for line in io::stdin().lock().lines() {
        let line = line?;
        calc.type_keys(&line)?;
        print_display(&mut out, calc.display(), cli.json)?;
    }
    Ok(())
}

fn print_display(out: &mut impl Write, display: &DisplayFields, json: bool) -> CalcResult<()> {
    if json {
        serde_json::to_writer(&mut *out, display)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{display}")?;
    }
    Ok(())
}
