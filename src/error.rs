//! Errors in how `setops` was invoked. These are reported to the user as a
//! single `Error: ...` line and end the run without writing any output.
use std::path::PathBuf;
use thiserror::Error;

/// Something wrong with the command line or the files it names
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    /// No argument given
    #[error("not enough arguments")]
    NotEnoughArguments,
    /// More than one argument given
    #[error("too many arguments")]
    TooManyArguments,
    /// One of `set1`, `set2`, `operation` is absent
    #[error("missing key '{0}'")]
    MissingKey(&'static str),
    /// A file operand doesn't exist or can't be read
    #[error("file '{}' does not exist", .0.display())]
    FileNotFound(PathBuf),
    /// The `operation` value isn't one we know
    #[error("operation '{0}' does not exist\nValid operations: [difference|union|intersection]")]
    UnrecognizedOperation(String),
}
