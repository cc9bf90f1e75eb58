//! Chart emission.
//!
//! Converts aggregated plot data into SVG line or stacked area charts.

pub mod generator;

// Re-export main types
pub use generator::{render_chart, ChartConfig};
