//! Stage metrics computed from aggregated plot data.
//!
//! Stage shares show which pipeline stage dominates read latency.
//! These are the first place to look when a build regresses.

use super::series::PlotData;
use log::debug;
use serde::{Deserialize, Serialize};

/// Mean latency of one stage and its share of the total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageShare {
    /// Stage label, or `stage_<n>` for unlabelled series
    pub stage: String,

    /// Mean latency over all points
    pub mean: f64,

    /// Percentage of the summed latency of all stages
    pub percentage: f64,
}

/// Distribution of per-point total latency
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LatencyDistribution {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub max: f64,
}

impl LatencyDistribution {
    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "Points: {} | Mean: {:.3} | Median: {:.3} | Max: {:.3}",
            self.count, self.mean, self.median, self.max
        )
    }
}

/// Calculate the share of each stage in total latency
///
/// **Public** - returned in stage order, not sorted
pub fn calculate_stage_shares(plot: &PlotData) -> Vec<StageShare> {
    let sums: Vec<f64> = plot
        .series
        .iter()
        .map(|s| s.values.iter().sum())
        .collect();
    let grand_total: f64 = sums.iter().sum();
    let points = plot.len().max(1) as f64;

    plot.series
        .iter()
        .zip(sums)
        .enumerate()
        .map(|(i, (series, sum))| StageShare {
            stage: series
                .label
                .clone()
                .unwrap_or_else(|| format!("stage_{}", i + 1)),
            mean: sum / points,
            percentage: if grand_total > 0.0 {
                (sum / grand_total) * 100.0
            } else {
                0.0
            },
        })
        .collect()
}

/// Stage with the largest share, if any latency was recorded
pub fn dominant_stage(shares: &[StageShare]) -> Option<&StageShare> {
    shares
        .iter()
        .filter(|s| s.percentage > 0.0)
        .max_by(|a, b| a.percentage.total_cmp(&b.percentage))
}

/// Calculate distribution statistics of per-point totals
pub fn calculate_latency_distribution(plot: &PlotData) -> LatencyDistribution {
    let mut totals = plot.totals();
    if totals.is_empty() {
        return LatencyDistribution::default();
    }

    let count = totals.len();
    let mean = totals.iter().sum::<f64>() / count as f64;
    totals.sort_by(f64::total_cmp);

    let dist = LatencyDistribution {
        count,
        mean,
        median: totals[count / 2],
        max: totals[count - 1],
    };
    debug!("Latency distribution: {}", dist.summary());
    dist
}

/// Render stage shares as a text table
pub fn generate_text_summary(shares: &[StageShare], dist: &LatencyDistribution) -> String {
    let mut lines = Vec::new();

    lines.push(format!("  {:<28} {:>14} {:>9}", "STAGE", "MEAN LATENCY", "SHARE"));
    lines.push(format!("  {}", "-".repeat(53)));

    for share in shares {
        let bar = "#".repeat((share.percentage / 5.0) as usize);
        lines.push(format!(
            "  {:<28} {:>14.3} {:>8.1}% {}",
            share.stage, share.mean, share.percentage, bar
        ));
    }

    lines.push(format!("  {}", "-".repeat(53)));
    lines.push(format!("  {}", dist.summary()));

    if let Some(top) = dominant_stage(shares) {
        lines.push(format!(
            "  Dominant stage: {} ({:.1}%)",
            top.stage, top.percentage
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::series::Series;

    fn plot() -> PlotData {
        PlotData {
            axis: vec![50.0, 100.0],
            series: vec![
                Series::new(Some("GET_SNAPSHOT_TIME".to_string()), vec![1.0, 3.0]),
                Series::new(None, vec![3.0, 5.0]),
            ],
        }
    }

    #[test]
    fn test_stage_shares() {
        let shares = calculate_stage_shares(&plot());

        assert_eq!(shares.len(), 2);
        assert_eq!(shares[0].stage, "GET_SNAPSHOT_TIME");
        assert_eq!(shares[0].mean, 2.0);
        assert!((shares[0].percentage - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(shares[1].stage, "stage_2");
        assert_eq!(dominant_stage(&shares).unwrap().stage, "stage_2");
    }

    #[test]
    fn test_latency_distribution() {
        let dist = calculate_latency_distribution(&plot());
        assert_eq!(dist.count, 2);
        assert_eq!(dist.mean, 6.0);
        assert_eq!(dist.median, 8.0);
        assert_eq!(dist.max, 8.0);
    }

    #[test]
    fn test_all_zero_has_no_dominant_stage() {
        let plot = PlotData {
            axis: vec![100.0],
            series: vec![Series::new(None, vec![0.0])],
        };
        let shares = calculate_stage_shares(&plot);
        assert_eq!(shares[0].percentage, 0.0);
        assert!(dominant_stage(&shares).is_none());
    }

    #[test]
    fn test_text_summary_mentions_stages() {
        let plot = plot();
        let text = generate_text_summary(
            &calculate_stage_shares(&plot),
            &calculate_latency_distribution(&plot),
        );
        assert!(text.contains("GET_SNAPSHOT_TIME"));
        assert!(text.contains("Dominant stage: stage_2"));
    }
}
