//! Aggregation of parsed traces into plot-ready series and metrics.
//!
//! This module transforms a trace into:
//! - A normalized (or raw) x-axis
//! - One value series per stage, stackable into bands
//! - Stage shares and latency distribution statistics

pub mod config;
pub mod metrics;
pub mod normalize;
pub mod series;
pub mod summary;

// Re-export main types and functions
pub use config::{AggregatorConfig, DedupPolicy};
pub use metrics::{
    calculate_latency_distribution, calculate_stage_shares, dominant_stage,
    generate_text_summary, LatencyDistribution, StageShare,
};
pub use normalize::{average_by_timestamp, normalize};
pub use series::{aggregate, PlotData, Series, StackBand};
pub use summary::{to_summary, SeriesSummary, TraceSummary};
