//! Plot-ready series built from a trace.
//!
//! The aggregator turns a trace into an x-axis and one value series per
//! column. With several columns the series are stacked: band i spans
//! from the sum of stages before i to the sum up to and including i.

use super::config::{AggregatorConfig, DedupPolicy};
use super::normalize::{average_by_timestamp, normalize};
use crate::parser::Trace;
use crate::utils::config::{STAGE_COUNT, STAGE_NAMES};
use crate::utils::error::AggregateError;
use log::debug;

/// One value series aligned with the x-axis
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Legend label, `None` for unlabelled series
    pub label: Option<String>,
    pub values: Vec<f64>,
}

impl Series {
    pub fn new(label: Option<String>, values: Vec<f64>) -> Self {
        Self { label, values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Region between two cumulative curves of a stacked chart
#[derive(Debug, Clone, PartialEq)]
pub struct StackBand {
    pub label: Option<String>,
    pub lower: Vec<f64>,
    pub upper: Vec<f64>,
}

/// X-axis plus aligned value series, ready for charting
#[derive(Debug, Clone, PartialEq)]
pub struct PlotData {
    pub axis: Vec<f64>,
    pub series: Vec<Series>,
}

impl PlotData {
    /// Number of points on the axis
    pub fn len(&self) -> usize {
        self.axis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axis.is_empty() || self.series.is_empty()
    }

    /// More than one series is drawn as a stacked area chart
    pub fn is_stacked(&self) -> bool {
        self.series.len() > 1
    }

    pub fn has_labels(&self) -> bool {
        self.series.iter().any(|s| s.label.is_some())
    }

    /// Total latency at each point (sum over all series)
    pub fn totals(&self) -> Vec<f64> {
        (0..self.len())
            .map(|i| self.series.iter().map(|s| s.values[i]).sum())
            .collect()
    }

    /// Cumulative bands for a stacked chart, bottom stage first
    pub fn stack_bands(&self) -> Vec<StackBand> {
        let mut baseline = vec![0.0; self.len()];
        let mut bands = Vec::with_capacity(self.series.len());

        for series in &self.series {
            let upper: Vec<f64> = baseline
                .iter()
                .zip(&series.values)
                .map(|(base, value)| base + value)
                .collect();

            bands.push(StackBand {
                label: series.label.clone(),
                lower: baseline,
                upper: upper.clone(),
            });
            baseline = upper;
        }

        bands
    }

    /// Largest total latency, used for the y range
    pub fn max_total(&self) -> f64 {
        self.totals().into_iter().fold(0.0, f64::max)
    }
}

/// Aggregate a trace into plot data
///
/// **Public** - main entry point for aggregation
///
/// # Algorithm
/// 1. Merge repeated timestamps if the policy asks for it
/// 2. Normalize the timestamps when a scale is configured
/// 3. Transpose records into one series per column
/// 4. Attach stage names to an eight-column breakdown
///
/// # Errors
/// * `AggregateError::EmptyTrace` - the trace has no records
/// * `AggregateError::ZeroTimestamp` - normalization would divide by zero
pub fn aggregate(trace: &Trace, config: &AggregatorConfig) -> Result<PlotData, AggregateError> {
    if trace.is_empty() {
        return Err(AggregateError::EmptyTrace);
    }

    let merged;
    let trace = match config.dedup {
        DedupPolicy::AverageByTimestamp => {
            merged = average_by_timestamp(trace);
            &merged
        }
        DedupPolicy::None => trace,
    };

    let raw_axis = trace.timestamps();
    let axis = match config.scale {
        Some(scale) => normalize(&raw_axis, scale)?,
        None => raw_axis,
    };

    let columns = transpose(trace);
    let label_stages = config.label_stages && columns.len() == STAGE_COUNT;

    let series = columns
        .into_iter()
        .enumerate()
        .map(|(i, values)| {
            let label = label_stages.then(|| STAGE_NAMES[i].to_string());
            Series::new(label, values)
        })
        .collect::<Vec<_>>();

    debug!(
        "Aggregated {} points into {} series",
        axis.len(),
        series.len()
    );

    Ok(PlotData { axis, series })
}

/// One column vector per record field
fn transpose(trace: &Trace) -> Vec<Vec<f64>> {
    let arity = trace.arity();
    let mut columns = vec![Vec::with_capacity(trace.len()); arity];

    for record in trace.records() {
        for (column, value) in columns.iter_mut().zip(&record.values) {
            column.push(*value);
        }
    }

    columns
}
