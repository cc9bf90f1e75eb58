//! Benchmark output parsing.
//!
//! This module handles:
//! - Tab-delimited breakdown, timestamped and single-column lines
//! - Sentinel-delimited median blocks
//! - The in-memory trace model

pub mod median_blocks;
pub mod schema;
pub mod tab_delimited;

// Re-export main types
pub use schema::{Record, Trace, TraceFormat};

use crate::utils::error::ParseError;
use log::info;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parse a line-oriented stream in the given format
///
/// **Public** - main entry point for parsing, works on files,
/// subprocess pipes and in-memory buffers alike
pub fn parse_reader<R: BufRead>(reader: R, format: TraceFormat) -> Result<Trace, ParseError> {
    match format {
        TraceFormat::MedianBlocks => median_blocks::parse_blocks(reader),
        other => tab_delimited::parse_lines(reader, other),
    }
}

/// Parse an in-memory string
pub fn parse_str(input: &str, format: TraceFormat) -> Result<Trace, ParseError> {
    parse_reader(input.as_bytes(), format)
}

/// Parse a log file
///
/// # Errors
/// * `ParseError::FileNotFound` - the path does not resolve to a file
pub fn parse_file(path: impl AsRef<Path>, format: TraceFormat) -> Result<Trace, ParseError> {
    let path = path.as_ref();

    if !path.is_file() {
        return Err(ParseError::FileNotFound(path.to_path_buf()));
    }

    info!("Reading {} trace from: {}", format.name(), path.display());
    let file = File::open(path)?;
    parse_reader(BufReader::new(file), format)
}
