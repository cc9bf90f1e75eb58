//! Parser for sentinel-delimited median blocks.
//!
//! ```text
//! <<<
//! Count: 12 Average: 4.1
//! Min: 1  Median: 5  Max: 9
//! Median: 3
//! >>>
//! ```
//!
//! Each `<<<` advances the block timestamp. Every `Median:` token inside
//! an open block adds the next token to the block sum, and `>>>` emits
//! the record. A block left open is dropped, but its timestamp is still
//! consumed.

use super::schema::{Record, Trace};
use super::tab_delimited::parse_float;
use crate::utils::config::{BLOCK_CLOSE, BLOCK_OPEN, MEDIAN_TOKEN};
use crate::utils::error::ParseError;
use log::{debug, warn};
use std::io::BufRead;

/// Parse a sentinel-delimited stream into a trace
///
/// **Public** - used by `parse_reader` for `TraceFormat::MedianBlocks`
///
/// # Errors
/// * `ParseError::Io` - the stream could not be read
/// * `ParseError::InvalidNumber` - a median value is not a number
/// * `ParseError::MissingValue` - `Median:` ends its line
pub fn parse_blocks<R: BufRead>(reader: R) -> Result<Trace, ParseError> {
    let mut trace = Trace::new();
    let mut timestamp: u64 = 0;
    let mut open_sum: Option<f64> = None;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        let trimmed = line.trim();

        if trimmed == BLOCK_OPEN {
            if open_sum.is_some() {
                debug!("Line {}: block {} was never closed", line_no, timestamp);
            }
            timestamp += 1;
            open_sum = Some(0.0);
            continue;
        }

        if trimmed == BLOCK_CLOSE {
            match open_sum.take() {
                Some(sum) => trace.push(Record::new(timestamp as f64, vec![sum])),
                None => debug!("Line {}: '{}' without an open block", line_no, BLOCK_CLOSE),
            }
            continue;
        }

        if let Some(sum) = open_sum.as_mut() {
            *sum += sum_medians(trimmed, line_no)?;
        }
    }

    if open_sum.is_some() {
        warn!("Trailing block {} was not closed and is dropped", timestamp);
    }

    debug!("Parsed {} median blocks", trace.len());
    Ok(trace)
}

/// Sum every value that follows a `Median:` token on one line
fn sum_medians(line: &str, line_no: usize) -> Result<f64, ParseError> {
    let mut tokens = line.split_whitespace();
    let mut sum = 0.0;

    while let Some(token) = tokens.next() {
        if token != MEDIAN_TOKEN {
            continue;
        }
        let value = tokens.next().ok_or_else(|| ParseError::MissingValue {
            line: line_no,
            marker: MEDIAN_TOKEN.to_string(),
        })?;
        sum += parse_float(value, line_no)?;
    }

    Ok(sum)
}
