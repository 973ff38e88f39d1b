//! Code to parse the command line using `clap`, and definitions of the parsed
//! result.
//!
//! `setops` takes a single argument of the form
//! `set1=<file>;set2=<file>;operation=<union|difference|intersection>`.
//! Spaces anywhere in it are ignored, as are keys other than those three.

use clap::Parser;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::UsageError;
use crate::style::ColorChoice;

/// Returns the color choice from the command line, along with what the rest
/// of the command line asks for. The color choice comes back even when the
/// rest is unusable, so that the error message can be styled.
pub fn parsed() -> (ColorChoice, Result<Command, UsageError>) {
    let parsed = CliArgs::parse();
    (parsed.color, command_from(&parsed.operands()))
}

/// What the command line asks us to do
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// Print the help message
    Help,
    /// Calculate a set operation
    Run(Args),
}

/// A validated request: both files exist and the operation is known.
#[derive(Debug, PartialEq, Eq)]
pub struct Args {
    /// The first operand
    pub set1: PathBuf,
    /// The second operand
    pub set2: PathBuf,
    /// `op` is the set operation requested
    pub op: OpName,
}

/// Name of the requested operation
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum OpName {
    /// Words present in either file
    Union,
    /// Words present in the first file but not the second
    Diff,
    /// Words present in both files
    Intersect,
}

impl FromStr for OpName {
    type Err = UsageError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "union" => Ok(OpName::Union),
            "difference" => Ok(OpName::Diff),
            "intersection" => Ok(OpName::Intersect),
            _ => Err(UsageError::UnrecognizedOperation(s.to_string())),
        }
    }
}

impl fmt::Display for OpName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OpName::Union => "union",
            OpName::Diff => "difference",
            OpName::Intersect => "intersection",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Parser)]
#[command(name = "setops", version, disable_help_flag = true)]
/// `CliArgs` contains the raw command line.
struct CliArgs {
    /// Use color in help and error messages
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,
    /// The `set1=...;set2=...;operation=...` string. Hyphen values are
    /// allowed so that `-h` style help words land here.
    #[arg(allow_hyphen_values = true)]
    operand: Option<String>,
    /// Anything after the operand, kept only to report too many arguments.
    /// Options such as `--color` are still recognized here.
    #[arg(hide = true)]
    rest: Vec<String>,
}

impl CliArgs {
    fn operands(self) -> Vec<String> {
        self.operand.into_iter().chain(self.rest).collect()
    }
}

const HELP_WORDS: [&str; 6] = ["h", "help", "-h", "-help", "--h", "--help"];

const SET1: &str = "set1";
const SET2: &str = "set2";
const OPERATION: &str = "operation";

/// Turns the positional arguments into a `Command`, checking, in order: the
/// argument count, whether help was asked for, that every key is present,
/// that both files exist, and that the operation is known.
pub fn command_from(args: &[String]) -> Result<Command, UsageError> {
    let arg = match args {
        [] => return Err(UsageError::NotEnoughArguments),
        [arg] => arg,
        _ => return Err(UsageError::TooManyArguments),
    };
    if HELP_WORDS.contains(&arg.as_str()) {
        return Ok(Command::Help);
    }

    let arg = arg.replace(' ', "");
    let kwargs = Kwargs::parse(&arg);
    let set1 = kwargs.get(SET1)?;
    let set2 = kwargs.get(SET2)?;
    let operation = kwargs.get(OPERATION)?;

    let set1 = existing_file(set1)?;
    let set2 = existing_file(set2)?;
    let op = operation.parse()?;
    Ok(Command::Run(Args { set1, set2, op }))
}

fn existing_file(name: &str) -> Result<PathBuf, UsageError> {
    let path = PathBuf::from(name);
    if path.exists() {
        Ok(path)
    } else {
        Err(UsageError::FileNotFound(path))
    }
}

/// The `key=value` pairs of the argument, in the order given. A pair with no
/// `=` has an empty value.
struct Kwargs<'a>(Vec<(&'a str, &'a str)>);

impl<'a> Kwargs<'a> {
    fn parse(arg: &'a str) -> Self {
        Kwargs(arg.split(';').map(|kv| kv.split_once('=').unwrap_or((kv, ""))).collect())
    }

    /// The value of the first pair with key `key`
    fn get(&self, key: &'static str) -> Result<&'a str, UsageError> {
        self.0
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
            .ok_or(UsageError::MissingKey(key))
    }
}
