// src/plot_functions/plot_session_summary.rs

use ndarray_stats::QuantileExt;
use std::path::{Path, PathBuf};

use crate::axis_names::axis_name;
use crate::config::RenderConfig;
use crate::constants::{
    ALPHA_ACC_LINE, ALPHA_SINGLE_LINE, COLOR_CYCLE, FIGURE_TITLE_PREFIX, LINE_WIDTH_PLOT,
    X_LABEL_SAMPLE,
};
use crate::data_analysis::eda_filter::{filter_eda, EdaFilterParams, EdaFilterReport};
use crate::data_analysis::unit_scaling::scale_tri_axis;
use crate::data_input::channel::{Channel, ChannelData};
use crate::data_input::signal_loader::load_channel;
use crate::error::SummaryError;
use crate::plot_framework::{
    calculate_range, draw_composite_plot, CompositeFigure, PanelConfig, PlotSeries,
};
use crate::types::{SignalSeries, TriAxisSeries};

/// The figure for one session plus what the EDA filter did, if it ran.
#[derive(Debug, Clone)]
pub struct SessionSummary {
    pub figure: CompositeFigure,
    pub eda_report: Option<EdaFilterReport>,
}

/// Min and max of a series; `None` when empty.
fn value_bounds(samples: &SignalSeries) -> Option<(f64, f64)> {
    let min = *samples.min().ok()?;
    let max = *samples.max().ok()?;
    Some((min, max))
}

/// X axis spans the sample indices; a lone sample still gets a unit-wide axis.
fn sample_index_range(len: usize) -> std::ops::Range<f64> {
    0.0..(len.saturating_sub(1).max(1) as f64)
}

fn indexed_points(samples: &SignalSeries) -> Vec<(f64, f64)> {
    samples
        .iter()
        .enumerate()
        .map(|(i, &v)| (i as f64, v))
        .collect()
}

/// Panel with one line plotted against sample index. An empty series keeps
/// the panel but notes that filtering removed everything.
fn single_series_panel(title: String, samples: &SignalSeries) -> PanelConfig {
    let Some((min, max)) = value_bounds(samples) else {
        return PanelConfig::empty(format!("{title} (All data filtered out)"), X_LABEL_SAMPLE);
    };
    let (y_min, y_max) = calculate_range(min, max);

    PanelConfig {
        title,
        x_range: sample_index_range(samples.len()),
        y_range: y_min..y_max,
        series: vec![PlotSeries {
            data: indexed_points(samples),
            label: String::new(),
            color: COLOR_CYCLE[0],
            opacity: ALPHA_SINGLE_LINE,
            stroke_width: LINE_WIDTH_PLOT,
        }],
        x_label: X_LABEL_SAMPLE.to_string(),
        grid: true,
        show_legend: false,
    }
}

/// Panel with X, Y and Z lines sharing one y range, with a legend.
fn tri_axis_panel(title: String, axes: &TriAxisSeries) -> PanelConfig {
    let bounds = axes
        .iter()
        .filter_map(value_bounds)
        .reduce(|(lo_a, hi_a), (lo_b, hi_b)| (lo_a.min(lo_b), hi_a.max(hi_b)));
    let Some((min, max)) = bounds else {
        return PanelConfig::empty(format!("{title} (All data filtered out)"), X_LABEL_SAMPLE);
    };
    let (y_min, y_max) = calculate_range(min, max);
    let len = axes.iter().map(|a| a.len()).max().unwrap_or(0);

    let series = axes
        .iter()
        .enumerate()
        .map(|(axis_index, samples)| PlotSeries {
            data: indexed_points(samples),
            label: axis_name(axis_index).to_string(),
            color: COLOR_CYCLE[axis_index % COLOR_CYCLE.len()],
            opacity: ALPHA_ACC_LINE,
            stroke_width: LINE_WIDTH_PLOT,
        })
        .collect();

    PanelConfig {
        title,
        x_range: sample_index_range(len),
        y_range: y_min..y_max,
        series,
        x_label: X_LABEL_SAMPLE.to_string(),
        grid: true,
        show_legend: true,
    }
}

/// Applies the channel's transform and lays out its panel.
fn channel_panel(
    channel: Channel,
    data: ChannelData,
    config: &RenderConfig,
) -> (PanelConfig, Option<EdaFilterReport>) {
    let base_title = channel.base_title().to_string();
    match (channel, data) {
        (Channel::Eda, ChannelData::Single(samples)) => {
            let params = EdaFilterParams::from(config);
            let filtered = filter_eda(&samples, &params);
            println!(
                "-> EDA Filtered: {} samples remaining.",
                filtered.report
            );
            let title = base_title + &params.title_suffix();
            (
                single_series_panel(title, &filtered.samples),
                Some(filtered.report),
            )
        }
        (_, ChannelData::Single(samples)) => (single_series_panel(base_title, &samples), None),
        (_, ChannelData::TriAxis(axes)) => {
            let scaled = scale_tri_axis(&axes, config.acc_scale_divisor);
            (tri_axis_panel(base_title, &scaled), None)
        }
    }
}

/// Loads every known channel of a session and builds its composite figure.
///
/// Never fails: a missing, empty or malformed file only changes the title of
/// its own panel.
pub fn build_session_figure(session_dir: &Path, config: &RenderConfig) -> SessionSummary {
    let session_name = session_dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| session_dir.display().to_string());

    let mut panels = Vec::with_capacity(Channel::ALL.len());
    let mut eda_report = None;

    for channel in Channel::ALL {
        let path = session_dir.join(channel.file_name());
        let panel = match load_channel(&path, channel, config) {
            Ok(Some(data)) => {
                let (panel, report) = channel_panel(channel, data, config);
                if report.is_some() {
                    eda_report = report;
                }
                panel
            }
            Ok(None) => PanelConfig::empty(
                format!("{} (No data collected)", channel.base_title()),
                X_LABEL_SAMPLE,
            ),
            Err(e) => {
                println!("Error plotting {}: {}", channel.file_name(), e);
                log::warn!("{}: {:?}", path.display(), e);
                PanelConfig::empty(
                    format!("Could not plot {}: {}", channel.base_title(), e),
                    X_LABEL_SAMPLE,
                )
            }
        };
        panels.push(panel);
    }

    SessionSummary {
        figure: CompositeFigure {
            title: format!("{FIGURE_TITLE_PREFIX}: {session_name}"),
            panels,
        },
        eda_report,
    }
}

/// Builds the session figure and writes it into the session directory.
///
/// Returns the path of the written image. Only a failure to render or save
/// the image is an error.
pub fn generate_session_summary(
    session_dir: &Path,
    config: &RenderConfig,
) -> Result<PathBuf, SummaryError> {
    println!("\nProcessing data in: {}...", session_dir.display());

    let summary = build_session_figure(session_dir, config);
    let output_path = session_dir.join(&config.output_file_name);

    draw_composite_plot(&summary.figure, &output_path, config.pixel_size()).map_err(|e| {
        SummaryError::Save {
            path: output_path.clone(),
            reason: e.to_string(),
        }
    })?;

    log::info!(
        "Wrote {} panel(s) to '{}'",
        summary.figure.panels.len(),
        output_path.display()
    );
    Ok(output_path)
}


// src/plot_functions/plot_session_summary.rs
