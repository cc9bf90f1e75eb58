//! Latency Breakdown CLI
//!
//! Runs the snapshot-read benchmarks and charts their latency breakdown.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use latency_breakdown::commands::{
    display_formats, display_version, execute_graph, execute_run, validate_graph_args,
    validate_run_args, validate_summary_file, GraphArgs, InputFormat, RunArgs,
};
use latency_breakdown::runner::{SystemFilter, WorkloadFilter};
use latency_breakdown::utils::config::{DEFAULT_RESULT_DIR, STAGE_COUNT};

/// Latency Breakdown - stage latency charts for RocksDB benchmarks
#[derive(Parser, Debug)]
#[command(name = "latency-breakdown")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the benchmark executables and chart each run
    Run {
        /// Type of workload
        #[arg(long, value_enum, default_value_t = WorkloadFilter::Both)]
        workload: WorkloadFilter,

        /// Experiment target system
        #[arg(long, value_enum, default_value_t = SystemFilter::Both)]
        rocksdb: SystemFilter,

        /// Directory holding the benchmark executables
        #[arg(long, default_value = ".")]
        bin_dir: PathBuf,

        /// Directory charts are written to
        #[arg(long, default_value = DEFAULT_RESULT_DIR)]
        result_dir: PathBuf,

        /// Also write a JSON summary per run
        #[arg(long)]
        json: bool,

        /// Print stage shares to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Chart a saved benchmark log
    Graph {
        /// Log file to chart
        file: Option<PathBuf>,

        /// Input format
        #[arg(short, long, value_enum, default_value_t = InputFormat::Breakdown)]
        format: InputFormat,

        /// Column count of the breakdown format
        #[arg(long, default_value_t = STAGE_COUNT)]
        fields: usize,

        /// Scale constant of the normalized axis
        #[arg(long)]
        scale: Option<f64>,

        /// Keep raw timestamps on the x-axis
        #[arg(long)]
        raw_axis: bool,

        /// Label eight-column breakdowns with stage names
        #[arg(long)]
        labels: bool,

        /// Output path for the SVG chart (defaults to <FILE>.svg)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output path for a JSON summary (optional)
        #[arg(long)]
        json: Option<PathBuf>,

        /// Chart title
        #[arg(long)]
        title: Option<String>,

        /// Print stage shares to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Validate a summary JSON file
    Validate {
        /// Path to summary JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display supported input formats
    Formats {
        /// Show stage column details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Run {
            workload,
            rocksdb,
            bin_dir,
            result_dir,
            json,
            summary,
        } => {
            let args = RunArgs {
                workload,
                system: rocksdb,
                bin_dir,
                result_dir,
                write_json: json,
                print_summary: summary,
            };

            validate_run_args(&args)?;
            execute_run(args)?;
        }

        Commands::Graph {
            file,
            format,
            fields,
            scale,
            raw_axis,
            labels,
            output,
            json,
            title,
            summary,
        } => {
            let args = GraphArgs {
                input: file,
                format,
                fields,
                scale,
                raw_axis,
                labels,
                output_svg: output,
                output_json: json,
                title,
                print_summary: summary,
            };

            validate_graph_args(&args)?;
            execute_graph(args)?;
        }

        Commands::Validate { file } => {
            validate_summary_file(file)?;
        }

        Commands::Formats { show } => {
            display_formats(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
