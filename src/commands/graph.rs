//! Graph command implementation.
//!
//! Charts a benchmark log that was saved to a file:
//! 1. Parses the log in the chosen format
//! 2. Aggregates it (de-duplication, normalization, stage series)
//! 3. Renders a line or stacked area chart
//! 4. Writes the chart and, optionally, a JSON summary

use crate::aggregator::{
    aggregate, calculate_latency_distribution, calculate_stage_shares, generate_text_summary,
    to_summary, AggregatorConfig,
};
use crate::chart::{render_chart, ChartConfig};
use crate::output::{write_summary, write_svg};
use crate::parser::parse_file;
use crate::utils::config::{PERCENT_SCALE, STAGE_COUNT};
use anyhow::{Context, Result};
use clap::ValueEnum;
use log::{debug, info};
use std::path::PathBuf;

/// Input format selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum InputFormat {
    /// Tab-separated stage latencies, one read per line
    #[default]
    Breakdown,
    /// `timestamp<TAB>latency` pairs, averaged per timestamp
    Timestamped,
    /// One latency per line
    Single,
    /// `<<<` / `>>>` blocks of `Median:` values
    MedianBlocks,
}

/// Arguments for the graph command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct GraphArgs {
    /// Log file to chart (None prints `ERROR : No File`)
    pub input: Option<PathBuf>,

    pub format: InputFormat,

    /// Column count for the breakdown format
    pub fields: usize,

    /// Override the scale constant of the normalized axis
    pub scale: Option<f64>,

    /// Keep raw timestamps instead of normalizing
    pub raw_axis: bool,

    /// Label an eight-column breakdown with stage names
    pub labels: bool,

    /// Chart path (defaults to `<input>.svg`)
    pub output_svg: Option<PathBuf>,

    /// Optional JSON summary path
    pub output_json: Option<PathBuf>,

    /// Chart title
    pub title: Option<String>,

    /// Print stage shares to stdout
    pub print_summary: bool,
}

impl Default for GraphArgs {
    fn default() -> Self {
        Self {
            input: None,
            format: InputFormat::Breakdown,
            fields: STAGE_COUNT,
            scale: None,
            raw_axis: false,
            labels: false,
            output_svg: None,
            output_json: None,
            title: None,
            print_summary: false,
        }
    }
}

impl GraphArgs {
    /// Aggregator configuration for the selected format and overrides
    pub fn aggregator_config(&self) -> AggregatorConfig {
        let preset = match self.format {
            InputFormat::Breakdown if self.fields == STAGE_COUNT => {
                AggregatorConfig::stage_breakdown()
            }
            InputFormat::Breakdown => AggregatorConfig::bottleneck_breakdown(self.fields),
            InputFormat::Timestamped => AggregatorConfig::timestamped_latency(),
            InputFormat::Single => AggregatorConfig::single_latency(),
            InputFormat::MedianBlocks => AggregatorConfig::median_blocks(),
        };

        let scale = if self.raw_axis {
            None
        } else {
            self.scale.or(preset.scale)
        };

        preset.with_scale(scale).with_stage_labels(self.labels)
    }

    /// Chart path, `<input>.svg` unless given
    pub fn chart_path(&self, input: &std::path::Path) -> PathBuf {
        self.output_svg
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{}.svg", input.display())))
    }
}

/// Execute the graph command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// Path of the written chart, or `None` when no input file was given
///
/// # Errors
/// * Input file not found
/// * Malformed log lines
/// * Empty trace or zero final timestamp
/// * Chart or file write failures
pub fn execute_graph(args: GraphArgs) -> Result<Option<PathBuf>> {
    let Some(input) = args.input.as_ref() else {
        println!("ERROR : No File");
        return Ok(None);
    };

    let config = args.aggregator_config();
    debug!("Aggregator config: {:?}", config);

    let trace = parse_file(input, config.format)
        .with_context(|| format!("Failed to parse {}", input.display()))?;

    let plot = aggregate(&trace, &config)
        .with_context(|| format!("Failed to aggregate {}", input.display()))?;

    let chart_config = ChartConfig::new()
        .with_title(
            args.title
                .clone()
                .unwrap_or_else(|| input.display().to_string()),
        )
        .with_x_desc(axis_description(config.scale));

    let svg = render_chart(&plot, &chart_config).context("Failed to render chart")?;

    let chart_path = args.chart_path(input);
    write_svg(&svg, &chart_path).context("Failed to write chart")?;
    info!("✓ Chart written to: {}", chart_path.display());

    if let Some(json_path) = &args.output_json {
        let source = input.display().to_string();
        let summary = to_summary(&plot, &source, config.format, config.scale);
        write_summary(&summary, json_path).context("Failed to write summary JSON")?;
        info!("✓ Summary written to: {}", json_path.display());
    }

    if args.print_summary {
        println!(
            "{}",
            generate_text_summary(
                &calculate_stage_shares(&plot),
                &calculate_latency_distribution(&plot)
            )
        );
    }

    Ok(Some(chart_path))
}

/// X-axis description for a scale constant
fn axis_description(scale: Option<f64>) -> String {
    match scale {
        Some(k) if k == PERCENT_SCALE => "Transaction lifetime (%)".to_string(),
        Some(k) => format!("Normalized progress (0-{})", k),
        None => "Timestamp".to_string(),
    }
}

/// Validate graph arguments
///
/// **Public** - can be called before execute_graph for early validation
pub fn validate_graph_args(args: &GraphArgs) -> Result<()> {
    if args.format == InputFormat::Breakdown && args.fields == 0 {
        anyhow::bail!("fields must be greater than 0");
    }

    if let Some(scale) = args.scale {
        if !scale.is_finite() || scale <= 0.0 {
            anyhow::bail!("scale must be a positive number");
        }
    }

    if args.raw_axis && args.scale.is_some() {
        anyhow::bail!("--scale cannot be combined with --raw-axis");
    }

    Ok(())
}
