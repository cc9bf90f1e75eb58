//! Run command implementation.
//!
//! The run command, for each selected (workload, system) pair:
//! 1. Checks the benchmark executable exists
//! 2. Runs it and parses the stage breakdown from stdout
//! 3. Aggregates onto the 0-100 lifetime axis
//! 4. Renders a labelled stacked chart
//! 5. Writes `<result_dir>/<workload>_<system>.svg`

use crate::aggregator::{
    aggregate, calculate_latency_distribution, calculate_stage_shares, generate_text_summary,
    to_summary, AggregatorConfig,
};
use crate::chart::{render_chart, ChartConfig};
use crate::output::{write_summary, write_svg};
use crate::runner::{select_experiments, BenchmarkProcess, Experiment, SystemFilter, WorkloadFilter};
use crate::utils::config::DEFAULT_RESULT_DIR;
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the run command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct RunArgs {
    pub workload: WorkloadFilter,
    pub system: SystemFilter,

    /// Directory holding the benchmark executables
    pub bin_dir: PathBuf,

    /// Directory charts are written to
    pub result_dir: PathBuf,

    /// Also write a JSON summary next to each chart
    pub write_json: bool,

    /// Print stage shares to stdout
    pub print_summary: bool,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            workload: WorkloadFilter::Both,
            system: SystemFilter::Both,
            bin_dir: PathBuf::from("."),
            result_dir: PathBuf::from(DEFAULT_RESULT_DIR),
            write_json: false,
            print_summary: false,
        }
    }
}

/// What a run produced
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunReport {
    /// Charts written, in run order
    pub charts: Vec<PathBuf>,

    /// Executable whose absence stopped the run
    pub missing_executable: Option<String>,
}

/// Execute the run command
///
/// **Public** - main entry point called from main.rs
///
/// A missing executable prints `ERROR : <name> does not exist` and ends
/// the whole run cleanly; later pairs are not attempted.
///
/// # Errors
/// * Benchmark could not be started or its output is malformed
/// * Empty trace
/// * Chart or file write failures
pub fn execute_run(args: RunArgs) -> Result<RunReport> {
    let start_time = Instant::now();
    let experiments = select_experiments(args.workload, args.system);
    let mut report = RunReport::default();

    debug!("Selected {} experiments", experiments.len());

    for experiment in experiments {
        let process = BenchmarkProcess::new(args.bin_dir.join(experiment.executable));
        debug!("Checking benchmark: {}", process.path().display());

        if !process.exists() {
            println!("ERROR : {} does not exist", experiment.executable);
            report.missing_executable = Some(experiment.executable.to_string());
            return Ok(report);
        }

        println!("Running Experiment {}...", experiment);
        let chart_path = run_experiment(experiment, &process, &args)?;
        report.charts.push(chart_path);
    }

    info!(
        "Run completed in {:.2}s ({} charts)",
        start_time.elapsed().as_secs_f64(),
        report.charts.len()
    );

    Ok(report)
}

/// Run one experiment and write its chart
///
/// **Private** - internal helper for execute_run
fn run_experiment(
    experiment: &Experiment,
    process: &BenchmarkProcess,
    args: &RunArgs,
) -> Result<PathBuf> {
    let config = AggregatorConfig::stage_breakdown();
    let label = experiment.label();

    let trace = process
        .run(config.format)
        .with_context(|| format!("Experiment {} failed", experiment))?;

    let plot = aggregate(&trace, &config)
        .with_context(|| format!("Failed to aggregate {} output", experiment))?;

    let chart_config = ChartConfig::new().with_title(format!("Get latency breakdown {}", experiment));
    let svg = render_chart(&plot, &chart_config).context("Failed to render chart")?;

    let chart_path = args.result_dir.join(format!("{}.svg", label));
    write_svg(&svg, &chart_path).context("Failed to write chart")?;
    info!("✓ Chart written to: {}", chart_path.display());

    if args.write_json {
        let summary = to_summary(&plot, &label, config.format, config.scale);
        let json_path = args.result_dir.join(format!("{}.json", label));
        write_summary(&summary, &json_path).context("Failed to write summary JSON")?;
    }

    if args.print_summary {
        println!("\n{}", "=".repeat(60));
        println!("STAGE BREAKDOWN {}", experiment);
        println!("{}", "=".repeat(60));
        println!(
            "{}",
            generate_text_summary(
                &calculate_stage_shares(&plot),
                &calculate_latency_distribution(&plot)
            )
        );
    }

    Ok(chart_path)
}

/// Validate run arguments
///
/// **Public** - can be called before execute_run for early validation
pub fn validate_run_args(args: &RunArgs) -> Result<()> {
    if args.bin_dir.as_os_str().is_empty() {
        anyhow::bail!("Binary directory cannot be empty");
    }

    if !args.bin_dir.is_dir() {
        anyhow::bail!("Binary directory does not exist: {}", args.bin_dir.display());
    }

    if args.result_dir.as_os_str().is_empty() {
        anyhow::bail!("Result directory cannot be empty");
    }

    Ok(())
}
