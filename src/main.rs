use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use keycalc::Config;
use keycalc::calculator::{Evaluator, FastevalEngine, copy_to_clipboard};
use keycalc::items::{CalculatorItem, ErrorDisplay};
use keycalc::keypad::Keypad;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "keycalc", version, about)]
struct Args {
    /// Expressions to evaluate (reads one per line from stdin if none are given)
    expressions: Vec<String>,

    /// Replay a sequence of keypad buttons, e.g. "78+9=", and print the display
    #[arg(long, conflicts_with = "expressions")]
    keys: Option<String>,

    /// Copy the last successful result to the clipboard
    #[arg(long)]
    copy: bool,

    /// Path to config.toml (defaults to ~/.config/keycalc/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Show error messages instead of the error marker
    #[arg(long)]
    detailed: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref())?;
    if args.detailed {
        config.detailed_errors = true;
    }

    init_logging(&config.log_level);
    debug!(?config, "Loaded configuration");

    let evaluator = config.evaluator();
    let errors = config.error_display();

    if let Some(keys) = &args.keys {
        let mut keypad = Keypad::new(evaluator, errors);
        let display = keypad.press_sequence(keys)?;
        println!("{}", display);

        let copied = keypad
            .last_result()
            .and_then(|item| item.clipboard_result.as_deref());
        if args.copy {
            copy_result(copied)?;
        }
        return Ok(ExitCode::SUCCESS);
    }

    let items = if args.expressions.is_empty() {
        evaluate_stdin(&evaluator, &errors)?
    } else {
        args.expressions
            .iter()
            .map(|expr| evaluate_one(&evaluator, &errors, expr))
            .collect()
    };

    if args.copy {
        let last_success = items.iter().rev().find_map(|item| item.clipboard_result.as_deref());
        copy_result(last_success)?;
    }

    if items.iter().any(|item| item.is_error) {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_env("KEYCALC_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn evaluate_one(
    evaluator: &Evaluator<FastevalEngine>,
    errors: &ErrorDisplay,
    expression: &str,
) -> CalculatorItem {
    let item = CalculatorItem::from_outcome(expression, evaluator.evaluate(expression), errors);
    println!("{}", item.display_result);
    item
}

fn evaluate_stdin(
    evaluator: &Evaluator<FastevalEngine>,
    errors: &ErrorDisplay,
) -> Result<Vec<CalculatorItem>> {
    let mut items = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        items.push(evaluate_one(evaluator, errors, &line));
    }
    Ok(items)
}

fn copy_result(result: Option<&str>) -> Result<()> {
    match result {
        Some(text) => {
            copy_to_clipboard(text)?;
            info!(%text, "Copied result to clipboard");
        }
        None => warn!("No successful result to copy"),
    }
    Ok(())
}
