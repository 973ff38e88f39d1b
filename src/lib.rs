//! The `run` function is the kernel of the application. The `args` module parses
//! the command line, and the `io` module hides I/O details.
//!
//! Each input file is treated as a set of words:
//! * `tokens` splits its text into word and number tokens,
//! * `sorted_set` sorts those tokens and drops the duplicates, and
//! * `operations` merges the two resulting sets.

#![cfg_attr(debug_assertions, allow(dead_code, unused_imports))]
#![deny(unused_must_use)]
#![deny(clippy::all)]
#![allow(clippy::needless_return)]
#![deny(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![deny(missing_docs)]

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub mod args;
use crate::args::{Args, Command};
pub mod error;
use crate::error::UsageError;
pub(crate) mod help;
pub mod io;
pub mod operations;
pub mod sorted_set;
use crate::sorted_set::{to_sorted_set, WordSet};
pub(crate) mod style;
pub use crate::style::ColorChoice;
pub mod tokens;

/// Carries out `command`: prints the help message, or calculates the
/// requested set operation and writes the result to a new file in `dir`.
pub fn execute(command: &Command, color: ColorChoice, dir: &Path) -> Result<()> {
    match command {
        Command::Help => help::print(color),
        Command::Run(args) => run(args, dir).map(|_| ()),
    }
}

/// Reads both operands, calculates `args.op` on their sets of words, and
/// writes the result to the next free `output<N>.txt` in `dir`, returning its
/// path. Nothing is written unless both operands could be read.
pub fn run(args: &Args, dir: &Path) -> Result<PathBuf> {
    let first = tokens::to_lowercase(&io::read_text(&args.set1)?);
    let second = tokens::to_lowercase(&io::read_text(&args.set2)?);

    let result = operations::calculate(args.op, word_set(&first), word_set(&second));
    debug!(op = %args.op, words = result.len(), "calculated");

    let path = io::next_output_path(dir)?;
    io::write_new(&path, |out| result.output_to(out))?;
    info!(path = %path.display(), words = result.len(), "wrote {} result", args.op);
    Ok(path)
}

/// The lowercase word set of an operand's text
fn word_set(text: &[u8]) -> WordSet<'_> {
    let set = to_sorted_set(tokens::tokenize(text));
    debug!(distinct = set.len(), "built word set");
    set
}

/// The message for a usage error, as shown to the user
#[must_use]
pub fn usage_message(err: &UsageError, color: ColorChoice) -> String {
    format!("{} {err}", style::colored(color).title("Error:"))
}
