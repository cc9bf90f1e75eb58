//! JSON trace summary writer and reader.

use super::validate_path;
use crate::aggregator::TraceSummary;
use crate::utils::error::OutputError;
use log::info;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Write a trace summary to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_summary(
    summary: &TraceSummary,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing summary to: {}", output_path.display());

    validate_path(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, summary).map_err(OutputError::SerializationFailed)?;

    info!("Summary written successfully ({} points)", summary.points);

    Ok(())
}

/// Read a trace summary from a JSON file
///
/// **Public** - used by the validate command and tests
pub fn read_summary(input_path: impl AsRef<Path>) -> Result<TraceSummary, OutputError> {
    let input_path = input_path.as_ref();

    let file = File::open(input_path).map_err(OutputError::ReadFailed)?;
    let reader = BufReader::new(file);

    let summary =
        serde_json::from_reader(reader).map_err(OutputError::SerializationFailed)?;

    Ok(summary)
}
