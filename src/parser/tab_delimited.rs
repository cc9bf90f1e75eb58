//! Parser for tab-delimited benchmark output.
//!
//! Every line is one record. Field counts are fixed per format and a
//! malformed line aborts the parse; nothing is skipped or repaired.

use super::schema::{Record, Trace, TraceFormat};
use crate::utils::config::FIELD_DELIMITER;
use crate::utils::error::ParseError;
use log::debug;
use std::io::BufRead;

/// Parse a tab-delimited stream into a trace
///
/// **Public** - used by `parse_reader` for every non-sentinel format
///
/// # Errors
/// * `ParseError::Io` - the stream could not be read
/// * `ParseError::FieldCount` - a line has the wrong number of fields
/// * `ParseError::InvalidNumber` - a field is not a number
pub fn parse_lines<R: BufRead>(reader: R, format: TraceFormat) -> Result<Trace, ParseError> {
    let mut trace = Trace::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let record = parse_line(&line, index + 1, format)?;
        trace.push(record);
    }

    debug!("Parsed {} {} records", trace.len(), format.name());
    Ok(trace)
}

/// Parse one line into a record
///
/// `line_no` is 1-based and doubles as the timestamp for formats
/// without an explicit time column.
pub fn parse_line(line: &str, line_no: usize, format: TraceFormat) -> Result<Record, ParseError> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();

    match format {
        TraceFormat::Breakdown { fields: expected } => {
            check_field_count(&fields, expected, line_no)?;
            let values = fields
                .iter()
                .map(|token| parse_float(token, line_no))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Record::new(line_no as f64, values))
        }

        TraceFormat::Timestamped { divisor } => {
            check_field_count(&fields, 2, line_no)?;
            let timestamp = parse_integer(fields[0], line_no)?;
            let latency = parse_integer(fields[1], line_no)?;
            Ok(Record::new(
                timestamp as f64,
                vec![latency as f64 / divisor],
            ))
        }

        TraceFormat::Single => {
            check_field_count(&fields, 1, line_no)?;
            let latency = parse_float(fields[0], line_no)?;
            Ok(Record::new(line_no as f64, vec![latency]))
        }

        // Sentinel blocks span several lines and have their own parser
        TraceFormat::MedianBlocks => Err(ParseError::NotLineDelimited(format.name())),
    }
}

fn check_field_count(fields: &[&str], expected: usize, line_no: usize) -> Result<(), ParseError> {
    if fields.len() != expected {
        return Err(ParseError::FieldCount {
            line: line_no,
            expected,
            found: fields.len(),
        });
    }
    Ok(())
}

/// Parse a finite floating point field, tolerating surrounding whitespace
///
/// `inf` and `NaN` are rejected like any other non-numeric token.
pub fn parse_float(token: &str, line_no: usize) -> Result<f64, ParseError> {
    token
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ParseError::InvalidNumber {
            line: line_no,
            token: token.to_string(),
        })
}

/// Parse an integer field, tolerating surrounding whitespace
pub fn parse_integer(token: &str, line_no: usize) -> Result<i64, ParseError> {
    token
        .trim()
        .parse::<i64>()
        .map_err(|_| ParseError::InvalidNumber {
            line: line_no,
            token: token.to_string(),
        })
}
