//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while parsing benchmark output
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Line {line}: invalid number '{token}'")]
    InvalidNumber { line: usize, token: String },

    #[error("Format '{0}' cannot be parsed line by line")]
    NotLineDelimited(&'static str),

    #[error("Line {line}: '{marker}' is not followed by a value")]
    MissingValue { line: usize, marker: String },
}

/// Errors that can occur while aggregating a trace
#[derive(Error, Debug, PartialEq)]
pub enum AggregateError {
    #[error("Trace is empty")]
    EmptyTrace,

    #[error("Last timestamp is zero, cannot normalize")]
    ZeroTimestamp,
}

/// Errors that can occur during chart rendering
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("No data to plot")]
    EmptySeries,

    #[error("Plot data is not finite ({0})")]
    NonFiniteData(&'static str),

    #[error("Drawing failed: {0}")]
    Drawing(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to read file: {0}")]
    ReadFailed(std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

/// Errors that can occur while running a benchmark executable
#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Failed to start {}: {source}", .path.display())]
    SpawnFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Benchmark stdout was not captured")]
    MissingStdout,

    #[error("Failed to wait for benchmark: {0}")]
    WaitFailed(std::io::Error),

    #[error("Benchmark output invalid: {0}")]
    Parse(#[from] ParseError),
}
