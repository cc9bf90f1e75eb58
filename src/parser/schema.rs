//! In-memory trace model shared by the parser and the aggregator.

use std::fmt;

/// One logical input record: a timestamp and its latency values
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Raw timestamp (line or block index, or the parsed first column)
    pub timestamp: f64,

    /// Latency values, one per column
    pub values: Vec<f64>,
}

impl Record {
    pub fn new(timestamp: f64, values: Vec<f64>) -> Self {
        Self { timestamp, values }
    }

    /// Sum of all values (total latency of the record)
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }
}

/// Ordered sequence of records in arrival order
///
/// Append-only: records are pushed while parsing and never reordered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trace {
    records: Vec<Record>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Raw timestamps in arrival order
    pub fn timestamps(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.timestamp).collect()
    }

    /// Number of values per record (0 for an empty trace)
    pub fn arity(&self) -> usize {
        self.records.first().map_or(0, |r| r.values.len())
    }
}

impl FromIterator<Record> for Trace {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

/// Input convention of a benchmark output stream
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TraceFormat {
    /// `fields` tab-separated stage latencies per line, timestamp = line number
    Breakdown { fields: usize },

    /// `timestamp<TAB>latency` integer pairs, latency divided by `divisor`
    Timestamped { divisor: f64 },

    /// One latency per line, timestamp = line number
    Single,

    /// `<<<` ... `>>>` blocks whose `Median:` values are summed
    MedianBlocks,
}

impl TraceFormat {
    /// Short name used on the command line and in summaries
    pub fn name(&self) -> &'static str {
        match self {
            TraceFormat::Breakdown { .. } => "breakdown",
            TraceFormat::Timestamped { .. } => "timestamped",
            TraceFormat::Single => "single",
            TraceFormat::MedianBlocks => "median-blocks",
        }
    }
}

impl fmt::Display for TraceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceFormat::Breakdown { fields } => write!(f, "breakdown ({} columns)", fields),
            TraceFormat::Timestamped { divisor } => {
                write!(f, "timestamped (latency / {})", divisor)
            }
            other => f.write_str(other.name()),
        }
    }
}
