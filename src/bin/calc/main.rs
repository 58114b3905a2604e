use std::collections::VecDeque;

use anyhow::{anyhow, Context, Result};
use calc::{format_tokens, CalcError, Trace};
use cfg_if::cfg_if;
use log::{debug, warn};

#[cfg(feature = "tui")]
mod tui;

const PROMPT: &str = "calc> ";

fn main() -> Result<()> {
    env_logger::init();

    println!("calc {}", env!("CARGO_PKG_VERSION"));

    cfg_if! {
    if #[cfg(feature = "tui")] {
        tui::drive()?
    } else {
        plain_drive()?
    }
    }

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn plain_drive() -> Result<()> {
    use std::io::{self, Write};

    let mut buffer = String::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        stdout.write_all(PROMPT.as_bytes())?;
        stdout.flush()?;
        if stdin.read_line(&mut buffer)? == 0 {
            break;
        }

        if eval(&buffer) == EvalState::Done {
            break;
        }
        buffer.truncate(0);
    }

    Ok(())
}

#[derive(Eq, PartialEq)]
enum EvalState {
    Regular,
    Done,
}

fn eval(buffer: &str) -> EvalState {
    let line = buffer.trim();
    if "exit" == line {
        return EvalState::Done;
    }
    if line.is_empty() {
        return EvalState::Regular;
    }

    match scan_eval(line) {
        Ok(trace) => {
            println!("tokens: {}", format_tokens(&trace.tokens));
            println!("postfix: {}", format_tokens(&trace.postfix));
            println!("tree: {}", trace.tree);
            println!("solution: {}", trace.value);
        }
        Err(e) => {
            warn!("{:?}", e);
            if let Some(CalcError::InvalidCharacter(_, col)) = CalcError::extract(&e) {
                point_at(buffer, *col);
            }
            let mut stack: VecDeque<_> = e.chain().rev().collect();

            print_error(
                stack
                    .pop_front()
                    .expect("chain contains at least the error"),
            );

            for error in stack {
                println!("cause: {}", error);
            }
        }
    }

    EvalState::Regular
}

fn scan_eval(line: &str) -> Result<Trace> {
    let trace = calc::trace(line).with_context(|| anyhow!("evaluating {:?}", line))?;
    debug!("depth: {}", trace.tree.depth());
    Ok(trace)
}

/// Marks column `col` of the trimmed line, assuming `buffer` was echoed after the prompt.
fn point_at(buffer: &str, col: usize) {
    let indent = buffer.chars().take_while(|c| c.is_whitespace()).count();
    println!("{}^", " ".repeat(PROMPT.len() + indent + col));
}

fn print_error(error: &(dyn std::error::Error + 'static)) {
    cfg_if! {
    if #[cfg(feature = "tui")] {
        use colored::Colorize;
        println!("{} {}", "error:".red().bold(), error);
    } else {
        println!("error: {}", error);
    }
    }
}
