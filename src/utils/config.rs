//! Configuration and constants for the CLI.

/// Current JSON summary schema version
pub const SUMMARY_SCHEMA_VERSION: &str = "1.0.0";

/// Pipeline stages reported by the benchmark, in column order
pub const STAGE_NAMES: &[&str] = &[
    "GET_SNAPSHOT_TIME",
    "GET_FROM_MEMTABLE_TIME",
    "GET_FROM_LEVEL_1",
    "GET_FROM_LEVEL_2",
    "GET_FROM_LEVEL_3",
    "GET_FROM_LEVEL_4",
    "GET_FROM_LEVEL_5",
    "GET_POST_PROCESS_TIME",
];

/// Column count of a full stage breakdown line
pub const STAGE_COUNT: usize = 8;

// Scale constants for the normalized axis
pub const PERCENT_SCALE: f64 = 100.0;
pub const THROUGHPUT_SCALE: f64 = 300.0;

// Timestamped logs report latency in sub-units
pub const LATENCY_DIVISOR: f64 = 1000.0;

// Sentinel-delimited median blocks
pub const BLOCK_OPEN: &str = "<<<";
pub const BLOCK_CLOSE: &str = ">>>";
pub const MEDIAN_TOKEN: &str = "Median:";

/// Field delimiter of benchmark output lines
pub const FIELD_DELIMITER: char = '\t';

/// Directory charts are written to by the experiment runner
pub const DEFAULT_RESULT_DIR: &str = "./result";

// Chart defaults
pub const DEFAULT_CHART_WIDTH: u32 = 1200;
pub const DEFAULT_CHART_HEIGHT: u32 = 700;
pub const DEFAULT_AREA_OPACITY: f64 = 0.5;
pub const DEFAULT_LEGEND_FONT_SIZE: f64 = 11.0; // small legend, eight stages stacked
pub const DEFAULT_CAPTION_FONT_SIZE: f64 = 22.0;
