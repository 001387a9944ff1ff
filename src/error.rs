use crate::constants::exit_codes;
use std::{io::Write, path::PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Error getting current directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    #[error("Error walking directory {}: {source}", root.display())]
    WalkStart { root: PathBuf, source: walkdir::Error },

    #[error("Error opening file {}: {source}", path.display())]
    Open { path: PathBuf, source: std::io::Error },

    #[error("Error reading file {}: {source}", path.display())]
    Read { path: PathBuf, source: std::io::Error },

    #[error("Error creating file {}: {source}", path.display())]
    Create { path: PathBuf, source: std::io::Error },

    #[error("Error writing to file {}: {source}", path.display())]
    Write { path: PathBuf, source: std::io::Error },

    #[error("Error flushing file {}: {source}", path.display())]
    Flush { path: PathBuf, source: std::io::Error },
}

/// Convenience type alias for Results with the crate error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Writes a fatal error as a single line, the way per-file errors are reported.
pub fn report_error<W: Write>(err: &Error, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{err}")
}

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stdout, next to the rest of the run's output,
/// and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    if report_error(&err, &mut std::io::stdout()).is_err() {
        eprintln!("{err}");
    }
    std::process::exit(exit_codes::FAILURE);
}
