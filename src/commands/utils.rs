use crate::output::read_summary;
use crate::utils::config::{
    BLOCK_CLOSE, BLOCK_OPEN, LATENCY_DIVISOR, MEDIAN_TOKEN, STAGE_NAMES, SUMMARY_SCHEMA_VERSION,
    THROUGHPUT_SCALE,
};
use anyhow::Result;
use std::path::PathBuf;

/// Validate a trace summary JSON file
pub fn validate_summary_file(file_path: PathBuf) -> Result<()> {
    println!("Validating summary: {}", file_path.display());

    let summary = read_summary(&file_path)?;

    println!("✓ Valid summary JSON");
    println!("  Version: {}", summary.version);
    println!("  Source: {}", summary.source);
    println!("  Format: {}", summary.format);
    println!("  Points: {}", summary.points);
    println!("  Series: {}", summary.series.len());
    println!("  {}", summary.distribution.summary());

    if summary.axis.len() != summary.points || summary.totals.len() != summary.points {
        anyhow::bail!("Summary axis and totals do not match the point count");
    }

    Ok(())
}

/// Display supported input formats
pub fn display_formats(show_details: bool) {
    println!("Latency Breakdown Input Formats");
    println!("Summary Schema Version: {}", SUMMARY_SCHEMA_VERSION);
    println!();
    println!("  breakdown      - N tab-separated stage latencies per line (default N = 8)");
    println!("  timestamped    - timestamp<TAB>latency, latency / {}, averaged per timestamp", LATENCY_DIVISOR);
    println!("  single         - one latency per line");
    println!(
        "  median-blocks  - '{}' ... '{}' blocks, '{}' values summed, 0-{} axis",
        BLOCK_OPEN, BLOCK_CLOSE, MEDIAN_TOKEN, THROUGHPUT_SCALE
    );

    if show_details {
        println!();
        println!("Stage columns of an eight-column breakdown:");
        for (i, stage) in STAGE_NAMES.iter().enumerate() {
            println!("  {}. {}", i + 1, stage);
        }
    } else {
        println!();
        println!("Use --show for stage column details");
    }
}

/// Display version information
pub fn display_version() {
    println!("Latency Breakdown v{}", env!("CARGO_PKG_VERSION"));
    println!("Summary Schema: v{}", SUMMARY_SCHEMA_VERSION);
    println!();
    println!("Latency breakdown charts for RocksDB snapshot-read benchmarks.");
}
