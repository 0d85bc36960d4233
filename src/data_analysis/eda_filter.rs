// src/data_analysis/eda_filter.rs

use ndarray::{s, Array1, ArrayView1};
use std::fmt;

use crate::config::RenderConfig;

/// Settling-time trim and artifact clamp applied to the EDA channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdaFilterParams {
    /// Leading samples dropped, only when the series is longer than this.
    pub discard_count: usize,
    /// Inclusive upper bound; larger samples are removed.
    pub max_threshold: f64,
}

impl From<&RenderConfig> for EdaFilterParams {
    fn from(config: &RenderConfig) -> Self {
        Self {
            discard_count: config.eda_discard_count,
            max_threshold: config.eda_max_threshold,
        }
    }
}

impl EdaFilterParams {
    /// Panel title suffix describing the applied rules.
    pub fn title_suffix(&self) -> String {
        format!(
            " (First {} cut, >{:?}µS removed)",
            self.discard_count, self.max_threshold
        )
    }
}

/// Sample counts before and after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdaFilterReport {
    pub original_count: usize,
    pub retained_count: usize,
}

impl fmt::Display for EdaFilterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.original_count, self.retained_count)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilteredEda {
    /// Surviving samples, re-indexed from 0 in their original order.
    pub samples: Array1<f64>,
    pub report: EdaFilterReport,
}

/// Drops the settling window from the front of the series.
///
/// Series no longer than `discard_count` pass through untouched rather than
/// being emptied.
pub fn discard_settling(samples: ArrayView1<'_, f64>, discard_count: usize) -> ArrayView1<'_, f64> {
    if samples.len() > discard_count {
        samples.slice_move(s![discard_count..])
    } else {
        samples
    }
}

/// Applies the settling trim, then keeps samples `<= max_threshold`.
///
/// Filtering is stable: no sample is reordered, only removed. The result may
/// be empty.
pub fn filter_eda(samples: &Array1<f64>, params: &EdaFilterParams) -> FilteredEda {
    let original_count = samples.len();
    let settled = discard_settling(samples.view(), params.discard_count);

    let kept: Array1<f64> = settled
        .iter()
        .copied()
        .filter(|&value| value <= params.max_threshold)
        .collect();

    let report = EdaFilterReport {
        original_count,
        retained_count: kept.len(),
    };
    log::debug!(
        "EDA filter: {} settled of {}, {} within threshold {}",
        settled.len(),
        original_count,
        report.retained_count,
        params.max_threshold
    );

    FilteredEda {
        samples: kept,
        report,
    }
}


// src/data_analysis/eda_filter.rs
