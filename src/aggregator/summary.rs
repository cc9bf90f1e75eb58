//! JSON summary of an aggregated trace.
//!
//! The summary is written next to a chart so runs can be compared
//! without re-parsing the benchmark output. Schema is versioned.

use super::metrics::{
    calculate_latency_distribution, calculate_stage_shares, LatencyDistribution, StageShare,
};
use super::series::PlotData;
use crate::parser::TraceFormat;
use crate::utils::config::SUMMARY_SCHEMA_VERSION;
use serde::{Deserialize, Serialize};

/// Top-level summary structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceSummary {
    /// Schema version for compatibility checking
    pub version: String,

    /// Input file or experiment label
    pub source: String,

    /// Input format name
    pub format: String,

    /// Scale constant of the axis, absent for raw timestamps
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub scale: Option<f64>,

    pub points: usize,
    pub axis: Vec<f64>,
    pub series: Vec<SeriesSummary>,
    pub totals: Vec<f64>,
    pub stages: Vec<StageShare>,
    pub distribution: LatencyDistribution,

    /// Timestamp when the summary was generated
    pub generated_at: String,
}

/// One labelled value series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesSummary {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub label: Option<String>,
    pub values: Vec<f64>,
}

/// Convert plot data to the summary format
///
/// **Public** - used by commands to create JSON output
pub fn to_summary(
    plot: &PlotData,
    source: &str,
    format: TraceFormat,
    scale: Option<f64>,
) -> TraceSummary {
    use chrono::Utc;

    TraceSummary {
        version: SUMMARY_SCHEMA_VERSION.to_string(),
        source: source.to_string(),
        format: format.name().to_string(),
        scale,
        points: plot.len(),
        axis: plot.axis.clone(),
        series: plot
            .series
            .iter()
            .map(|s| SeriesSummary {
                label: s.label.clone(),
                values: s.values.clone(),
            })
            .collect(),
        totals: plot.totals(),
        stages: calculate_stage_shares(plot),
        distribution: calculate_latency_distribution(plot),
        generated_at: Utc::now().to_rfc3339(),
    }
}
