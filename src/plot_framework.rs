// src/plot_framework.rs

use plotters::backend::BitMapBackend;
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::PathElement;
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, WHITE};
use plotters::style::{Color, RGBColor};

use std::error::Error;
use std::ops::Range;
use std::path::Path;

use crate::constants::{ALPHA_GRID, COLOR_GRID, LINE_WIDTH_LEGEND};
use crate::font_config::{
    FONT_TUPLE_AXIS_LABEL, FONT_TUPLE_CHART_TITLE, FONT_TUPLE_LEGEND, FONT_TUPLE_MAIN_TITLE,
};
use crate::types::SeriesPoints;

/// Axis range used by panels that have nothing to plot.
pub const EMPTY_PANEL_RANGE: Range<f64> = 0.0..1.0;

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}

/// Y-axis tick text: "k"/"M" notation for large magnitudes, decimals for
/// small fractional values, integers otherwise.
pub fn format_y_tick(y: f64) -> String {
    if y.abs() >= 1_000_000.0 {
        format!("{:.1}M", y / 1_000_000.0)
    } else if y.abs() >= 1000.0 {
        format!("{:.0}k", y / 1000.0)
    } else if y.abs() < 1.0 && y.fract() != 0.0 {
        format!("{:.2}", y)
    } else if y.abs() < 10.0 && y.fract() != 0.0 {
        format!("{:.1}", y)
    } else {
        format!("{:.0}", y)
    }
}

#[derive(Debug, Clone)]
pub struct PlotSeries {
    pub data: SeriesPoints,
    pub label: String,
    pub color: RGBColor,
    pub opacity: f64, // 0.0 to 1.0
    pub stroke_width: u32,
}

/// One subplot of the composite figure.
#[derive(Debug, Clone)]
pub struct PanelConfig {
    pub title: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub series: Vec<PlotSeries>,
    pub x_label: String,
    pub grid: bool,
    pub show_legend: bool,
}

impl PanelConfig {
    /// A titled panel with axes and grid but no lines.
    pub fn empty(title: String, x_label: &str) -> Self {
        Self {
            title,
            x_range: EMPTY_PANEL_RANGE,
            y_range: EMPTY_PANEL_RANGE,
            series: Vec::new(),
            x_label: x_label.to_string(),
            grid: true,
            show_legend: false,
        }
    }

    pub fn has_data(&self) -> bool {
        self.series.iter().any(|s| !s.data.is_empty())
    }
}

/// Panels stacked top to bottom under one figure title.
#[derive(Debug, Clone)]
pub struct CompositeFigure {
    pub title: String,
    pub panels: Vec<PanelConfig>,
}

/// Draws a single panel: caption, mesh, line series and optional legend.
fn draw_panel(
    area: &DrawingArea<BitMapBackend, Shift>,
    panel: &PanelConfig,
) -> Result<(), Box<dyn Error>> {
    let x_formatter = |x: &f64| format!("{:.0}", x);
    let y_formatter = |y: &f64| format_y_tick(*y);

    // Degenerate ranges would collapse the coordinate system.
    let x_range = if panel.x_range.end > panel.x_range.start {
        panel.x_range.clone()
    } else {
        EMPTY_PANEL_RANGE
    };
    let y_range = if panel.y_range.end > panel.y_range.start {
        panel.y_range.clone()
    } else {
        EMPTY_PANEL_RANGE
    };

    let mut chart = ChartBuilder::on(area)
        .caption(&panel.title, FONT_TUPLE_CHART_TITLE)
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range, y_range)?;

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(&panel.x_label)
        .x_labels(10)
        .y_labels(6)
        .x_label_formatter(&x_formatter)
        .y_label_formatter(&y_formatter)
        .label_style(FONT_TUPLE_AXIS_LABEL);
    if panel.grid {
        mesh.bold_line_style(COLOR_GRID.mix(ALPHA_GRID))
            .light_line_style(COLOR_GRID.mix(ALPHA_GRID * 0.3));
    } else {
        mesh.disable_mesh();
    }
    mesh.draw()?;

    let mut legend_series_count = 0;
    for s in &panel.series {
        if s.data.is_empty() {
            continue;
        }
        let color = s.color;
        let opacity = s.opacity;
        let series = chart.draw_series(LineSeries::new(
            s.data.iter().cloned(),
            color.mix(opacity).stroke_width(s.stroke_width),
        ))?;

        if !s.label.is_empty() {
            series.label(&s.label).legend(move |(x, y)| {
                PathElement::new(
                    vec![(x, y), (x + 20, y)],
                    color.mix(opacity).stroke_width(LINE_WIDTH_LEGEND),
                )
            });
            legend_series_count += 1;
        }
    }

    if panel.show_legend && legend_series_count > 0 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(FONT_TUPLE_LEGEND)
            .draw()?;
    }

    Ok(())
}

/// Renders the figure to a PNG at `output_path`, one row per panel.
///
/// An existing file at `output_path` is overwritten.
pub fn draw_composite_plot(
    figure: &CompositeFigure,
    output_path: &Path,
    pixel_size: (u32, u32),
) -> Result<(), Box<dyn Error>> {
    let root_area = BitMapBackend::new(output_path, pixel_size).into_drawing_area();
    root_area.fill(&WHITE)?;
    let titled_area = root_area.titled(&figure.title, FONT_TUPLE_MAIN_TITLE)?;
    let margined_area = titled_area.margin(5, 5, 10, 10);
    let panel_areas = margined_area.split_evenly((figure.panels.len().max(1), 1));

    for (area, panel) in panel_areas.iter().zip(&figure.panels) {
        draw_panel(area, panel)?;
        log::debug!(
            "Drew panel '{}' with {} series",
            panel.title,
            panel.series.len()
        );
    }

    root_area.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_range_pads_by_fifteen_percent() {
        let (min, max) = calculate_range(0.0, 10.0);
        assert!((min - -1.5).abs() < 1e-12);
        assert!((max - 11.5).abs() < 1e-12);
    }

    #[test]
    fn test_calculate_range_flat_series() {
        assert_eq!(calculate_range(3.0, 3.0), (2.5, 3.5));
    }

    #[test]
    fn test_calculate_range_swapped_inputs() {
        assert_eq!(calculate_range(10.0, 0.0), calculate_range(0.0, 10.0));
    }

    #[test]
    fn test_empty_panel_has_grid_and_no_data() {
        let panel = PanelConfig::empty("TEMP".to_string(), "Sample");
        assert!(panel.grid);
        assert!(!panel.has_data());
        assert_eq!(panel.x_range, EMPTY_PANEL_RANGE);
    }
}

// src/plot_framework.rs
