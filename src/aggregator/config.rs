//! Aggregator configuration.
//!
//! One configuration value describes every supported log shape: the
//! input format, whether repeated timestamps are merged, the scale of
//! the normalized axis and whether stage names are attached.

use crate::parser::TraceFormat;
use crate::utils::config::{LATENCY_DIVISOR, PERCENT_SCALE, STAGE_COUNT, THROUGHPUT_SCALE};

/// How records sharing a timestamp are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DedupPolicy {
    /// Keep every record
    #[default]
    None,

    /// Average consecutive records with the same timestamp
    AverageByTimestamp,
}

/// Aggregator configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatorConfig {
    pub format: TraceFormat,
    pub dedup: DedupPolicy,

    /// Scale constant K of the normalized axis, `None` keeps raw timestamps
    pub scale: Option<f64>,

    /// Attach stage names to an eight-column breakdown
    pub label_stages: bool,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self::stage_breakdown()
    }
}

impl AggregatorConfig {
    /// Labelled eight-stage breakdown on a 0-100 axis
    pub fn stage_breakdown() -> Self {
        Self {
            format: TraceFormat::Breakdown {
                fields: STAGE_COUNT,
            },
            dedup: DedupPolicy::None,
            scale: Some(PERCENT_SCALE),
            label_stages: true,
        }
    }

    /// Unlabelled breakdown with an arbitrary column count on a 0-100 axis
    pub fn bottleneck_breakdown(fields: usize) -> Self {
        Self {
            format: TraceFormat::Breakdown { fields },
            dedup: DedupPolicy::None,
            scale: Some(PERCENT_SCALE),
            label_stages: false,
        }
    }

    /// `timestamp<TAB>latency` pairs averaged per timestamp, raw axis
    pub fn timestamped_latency() -> Self {
        Self {
            format: TraceFormat::Timestamped {
                divisor: LATENCY_DIVISOR,
            },
            dedup: DedupPolicy::AverageByTimestamp,
            scale: None,
            label_stages: false,
        }
    }

    /// One latency per line on a 0-100 axis
    pub fn single_latency() -> Self {
        Self {
            format: TraceFormat::Single,
            dedup: DedupPolicy::None,
            scale: Some(PERCENT_SCALE),
            label_stages: false,
        }
    }

    /// Median blocks on the 0-300 throughput axis
    pub fn median_blocks() -> Self {
        Self {
            format: TraceFormat::MedianBlocks,
            dedup: DedupPolicy::None,
            scale: Some(THROUGHPUT_SCALE),
            label_stages: false,
        }
    }

    pub fn with_scale(mut self, scale: Option<f64>) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_stage_labels(mut self, label_stages: bool) -> Self {
        self.label_stages = label_stages;
        self
    }

    pub fn with_dedup(mut self, dedup: DedupPolicy) -> Self {
        self.dedup = dedup;
        self
    }
}
