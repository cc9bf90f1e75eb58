//! Timestamp de-duplication and axis normalization.

use crate::parser::{Record, Trace};
use crate::utils::error::AggregateError;
use log::debug;

/// Rescale raw timestamps so the last one maps to `scale`
///
/// **Public** - `normalized[i] = raw[i] / raw[last] * scale`
///
/// The output has the same length as the input and keeps its ordering.
/// A single non-zero timestamp normalizes to exactly `[scale]`.
///
/// # Errors
/// * `AggregateError::EmptyTrace` - no timestamps
/// * `AggregateError::ZeroTimestamp` - the last timestamp is zero
pub fn normalize(raw: &[f64], scale: f64) -> Result<Vec<f64>, AggregateError> {
    let last = *raw.last().ok_or(AggregateError::EmptyTrace)?;

    if last == 0.0 {
        return Err(AggregateError::ZeroTimestamp);
    }

    Ok(raw.iter().map(|t| (t / last) * scale).collect())
}

/// Average consecutive records that share a timestamp
///
/// **Public** - input must be sorted by timestamp. Out-of-order input
/// is not re-sorted: a timestamp that reappears later starts a new run.
pub fn average_by_timestamp(trace: &Trace) -> Trace {
    let mut merged = Trace::new();
    let mut run: Option<(f64, Vec<f64>, usize)> = None;

    for record in trace.records() {
        let continues_run = matches!(&run, Some((timestamp, _, _)) if *timestamp == record.timestamp);

        if continues_run {
            if let Some((_, sums, count)) = run.as_mut() {
                for (sum, value) in sums.iter_mut().zip(&record.values) {
                    *sum += value;
                }
                *count += 1;
            }
        } else {
            if let Some(finished) = run.take() {
                merged.push(close_run(finished));
            }
            run = Some((record.timestamp, record.values.clone(), 1));
        }
    }

    if let Some(finished) = run {
        merged.push(close_run(finished));
    }

    debug!("Merged {} records into {} timestamps", trace.len(), merged.len());
    merged
}

fn close_run((timestamp, sums, count): (f64, Vec<f64>, usize)) -> Record {
    let values = sums.into_iter().map(|sum| sum / count as f64).collect();
    Record::new(timestamp, values)
}
