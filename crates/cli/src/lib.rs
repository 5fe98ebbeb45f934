//! Shared plumbing for the `fib-memo` and `fib-iter` programs.

use std::io::{BufRead, Write};

use eyre::Result;
use fibseq::{Cache, Fibonacci, Overflow};
use log::debug;

mod args;
pub use args::{log_level, Strategy};

pub const PROMPT: &str = "Enter the number of Fibonacci terms to calculate: ";
pub const LABEL: &str = "Fibonacci Series: ";

pub fn init_logging(level: &str) {
    pretty_env_logger::formatted_builder().filter_level(log_level(level)).init();
}

/// Print the first `count` terms, prompting on `out` and reading from `input` if `count` is not given.
pub fn run_memo(count: Option<usize>, capacity: usize, input: impl BufRead, out: &mut impl Write) -> Result<()> {
    let count = match count {
        Some(count) => count,
        None => {
            write!(out, "{PROMPT}")?;
            out.flush()?;
            fibseq::input::read_count(input)?
        }
    };

    let terms = Cache::with_capacity(capacity).series(count)?;
    let line = terms.iter().map(|t| t.to_string()).collect::<Vec<_>>().join(" ");

    writeln!(out, "{LABEL}{line}")?;
    Ok(())
}

#[derive(Debug, Clone, Copy)]
pub struct IterOptions {
    pub steps: u64,
    pub overflow: Overflow,
    pub strategy: Strategy,
    pub print: bool,
}

/// Advance `(0, 1)` and return the final pair, printing it to `out` if asked to.
pub fn run_iter(options: IterOptions, out: &mut impl Write) -> Result<Fibonacci> {
    let IterOptions { steps, overflow, strategy, print } = options;
    let mut fib = Fibonacci::new();

    match (strategy, overflow) {
        (Strategy::Jump, Overflow::Wrap) => fib = fib.jump(steps),
        (Strategy::Jump, _) => {
            // the other policies end within 46 steps
            debug!("{overflow:?} needs the step loop, ignoring the jump strategy");
            fib.advance(steps, overflow)?;
        }
        (Strategy::Loop, _) => {
            let advanced = fib.advance(steps, overflow)?;
            debug!("{advanced:?}");
        }
    }

    debug!("final state after {steps} steps: {fib}");
    if print {
        writeln!(out, "{fib}")?;
    }

    Ok(fib)
}
