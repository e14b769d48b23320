//! The apc command-line calculator.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

use apc::prelude::*;

/// An arbitrary-precision calculator for any radix 2-36.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Expression to evaluate; starts an interactive session when omitted
    expr: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.expr {
        Some(expr) => {
            let mut stdout = io::stdout();
            print_outcome(&mut stdout, &expr)?;
        }
        None => repl()?,
    }
    Ok(())
}

/// Reads lines from stdin until EOF or a quit command, evaluating each.
fn repl() -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, " = ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            writeln!(stdout, "^D")?;
            return Ok(());
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "q" || line == "quit" {
            return Ok(());
        }

        print_outcome(&mut stdout, line)?;
    }
}

/// Evaluates one expression and prints ` = <result>` or its error
/// category. Recoverable errors are part of normal operation, not process
/// failures.
fn print_outcome(out: &mut impl Write, line: &str) -> Result<()> {
    match eval_str(line) {
        Ok(value) => {
            let text = value.to_string_radix(value.radix() != RADIX_DEFAULT, true);
            writeln!(out, " = {text}")?;
        }
        Err(err) => {
            writeln!(out, " = {}", err.category())?;
        }
    }
    Ok(())
}
