use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::frontend::parse_line;
use crate::system::EquationSystem;

const HELP: &str = "Unknown command. s to solve, q to quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    Solve,
    Quit,
    Unknown(char),
    Equation(&'a str),
}

/// Single-character lines are commands; everything else is an equation.
pub fn parse_command(line: &str) -> Command<'_> {
    let mut chars = line.chars();
    match (chars.next(), chars.next()) {
        (Some('s'), None) => Command::Solve,
        (Some('q'), None) => Command::Quit,
        (Some(c), None) => Command::Unknown(c),
        _ => Command::Equation(line),
    }
}

fn print_banner(output: &mut impl Write) -> Result<()> {
    writeln!(output, "Linear Equation Solver v{}", env!("CARGO_PKG_VERSION"))?;
    writeln!(output)?;
    writeln!(output, "Enter Linear Equation System, s to solve")?;
    Ok(())
}

/// Reads lines until `q` or end of input, returning every equation that
/// parsed. Lines with syntax errors are reported and dropped.
pub fn run(
    input: impl BufRead,
    output: &mut impl Write,
    banner: bool,
) -> Result<EquationSystem> {
    if banner {
        print_banner(output).context("unable to write banner")?;
    }

    let mut system = EquationSystem::new();
    for line in input.lines() {
        let line = line.context("unable to read input line")?;
        let command = parse_command(&line);
        log::debug!("command {:?}", command);
        match command {
            Command::Solve => write!(output, "{}", system)?,
            Command::Quit => break,
            Command::Unknown(_) => writeln!(output, "{}", HELP)?,
            Command::Equation(text) => match parse_line(text) {
                Ok(terms) => system.push(terms),
                Err(err) => {
                    log::warn!("discarding {:?}: {}", text, err);
                    writeln!(output, "Syntax error: {}", err)?;
                }
            },
        }
    }
    output.flush()?;
    Ok(system)
}
