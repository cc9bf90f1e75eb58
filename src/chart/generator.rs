//! SVG chart generation using plotters.
//!
//! A single series is drawn as a line. Several series are drawn as a
//! stacked area chart: each stage fills the band between the running
//! cumulative sum before it and the sum including it.

use crate::aggregator::{PlotData, StackBand};
use crate::utils::config::{
    DEFAULT_AREA_OPACITY, DEFAULT_CAPTION_FONT_SIZE, DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH,
    DEFAULT_LEGEND_FONT_SIZE,
};
use crate::utils::error::ChartError;
use log::info;
use plotters::prelude::*;

const FONT_FAMILY: &str = "sans-serif";

/// Chart configuration
///
/// Passed explicitly to `render_chart`; there is no process-wide
/// plotting state.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub caption_font_size: f64,
    pub legend_font_size: f64,
    pub area_opacity: f64,
    pub x_desc: String,
    pub y_desc: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "Get Latency Breakdown".to_string(),
            width: DEFAULT_CHART_WIDTH,
            height: DEFAULT_CHART_HEIGHT,
            caption_font_size: DEFAULT_CAPTION_FONT_SIZE,
            legend_font_size: DEFAULT_LEGEND_FONT_SIZE,
            area_opacity: DEFAULT_AREA_OPACITY,
            x_desc: "Transaction lifetime (%)".to_string(),
            y_desc: "Latency".to_string(),
        }
    }
}

impl ChartConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_x_desc(mut self, desc: impl Into<String>) -> Self {
        self.x_desc = desc.into();
        self
    }
}

fn drawing_error(e: impl std::fmt::Display) -> ChartError {
    ChartError::Drawing(e.to_string())
}

/// Render plot data to an SVG document
///
/// **Public** - main entry point for chart emission
///
/// # Errors
/// * `ChartError::EmptySeries` - nothing to plot
/// * `ChartError::Drawing` - plotters failed to lay out the chart
pub fn render_chart(plot: &PlotData, config: &ChartConfig) -> Result<String, ChartError> {
    if plot.is_empty() {
        return Err(ChartError::EmptySeries);
    }

    let (x_range, y_range) = chart_ranges(plot)?;
    let mut svg = String::new();

    {
        let root = SVGBackend::with_string(&mut svg, (config.width, config.height))
            .into_drawing_area();
        root.fill(&WHITE).map_err(drawing_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(
                &config.title,
                (FONT_FAMILY, config.caption_font_size).into_font(),
            )
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(70)
            .build_cartesian_2d(x_range, y_range)
            .map_err(drawing_error)?;

        chart
            .configure_mesh()
            .x_desc(config.x_desc.as_str())
            .y_desc(config.y_desc.as_str())
            .draw()
            .map_err(drawing_error)?;

        if plot.is_stacked() {
            for (i, band) in plot.stack_bands().iter().enumerate() {
                let color = Palette99::pick(i).mix(config.area_opacity);
                let anno = chart
                    .draw_series(std::iter::once(Polygon::new(
                        band_outline(&plot.axis, band),
                        color.filled(),
                    )))
                    .map_err(drawing_error)?;

                if let Some(label) = &band.label {
                    anno.label(label.as_str()).legend(move |(x, y)| {
                        Rectangle::new([(x, y - 5), (x + 12, y + 5)], color.filled())
                    });
                }
            }
        } else {
            let series = &plot.series[0];
            let color = Palette99::pick(0).to_rgba();
            let points: Vec<(f64, f64)> = plot
                .axis
                .iter()
                .copied()
                .zip(series.values.iter().copied())
                .collect();

            let anno = chart
                .draw_series(LineSeries::new(points, color.stroke_width(2)))
                .map_err(drawing_error)?;

            if let Some(label) = &series.label {
                anno.label(label.as_str()).legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 12, y)], color.stroke_width(2))
                });
            }
        }

        if plot.has_labels() {
            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperLeft)
                .label_font((FONT_FAMILY, config.legend_font_size).into_font())
                .background_style(&WHITE.mix(0.8))
                .border_style(&BLACK)
                .draw()
                .map_err(drawing_error)?;
        }

        root.present().map_err(drawing_error)?;
    }

    info!(
        "Chart rendered: {} points, {} series ({} bytes)",
        plot.len(),
        plot.series.len(),
        svg.len()
    );
    Ok(svg)
}

/// Closed outline of a band: upper curve forwards, lower curve backwards
fn band_outline(axis: &[f64], band: &StackBand) -> Vec<(f64, f64)> {
    let upper = axis.iter().copied().zip(band.upper.iter().copied());
    let lower = axis
        .iter()
        .copied()
        .zip(band.lower.iter().copied())
        .rev();
    upper.chain(lower).collect()
}

/// Axis ranges with a little headroom, never degenerate
///
/// Infinite or NaN bounds are rejected; plotters cannot lay out a mesh
/// over them.
fn chart_ranges(
    plot: &PlotData,
) -> Result<(std::ops::Range<f64>, std::ops::Range<f64>), ChartError> {
    if plot.axis.iter().any(|x| !x.is_finite()) {
        return Err(ChartError::NonFiniteData("x-axis"));
    }

    let x_min = plot.axis.iter().copied().fold(f64::INFINITY, f64::min).min(0.0);
    let mut x_max = plot.axis.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if x_max <= x_min {
        x_max = x_min + 1.0;
    }

    let values_finite = plot
        .series
        .iter()
        .all(|s| s.values.iter().all(|v| v.is_finite()));
    let y_peak = if plot.is_stacked() {
        plot.max_total()
    } else {
        plot.series[0].values.iter().copied().fold(0.0, f64::max)
    };
    let y_max = if y_peak > 0.0 { y_peak * 1.1 } else { 1.0 };

    if !values_finite || !y_max.is_finite() {
        return Err(ChartError::NonFiniteData("latency"));
    }

    Ok((x_min..x_max, 0.0..y_max))
}
