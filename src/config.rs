// src/config.rs

use std::path::PathBuf;

use crate::constants::{
    ACC_SCALE_DIVISOR, EDA_DISCARD_COUNT, EDA_MAX_THRESHOLD, FIGURE_HEIGHT_IN, FIGURE_WIDTH_IN,
    MIN_CHANNEL_FILE_BYTES, OUTPUT_DPI, OUTPUT_ROOT_DIR, SUMMARY_OUTPUT_FILE,
};

/// Everything a render run depends on, passed explicitly to the selector,
/// loader, filter and plotter. `Default` carries the compiled-in constants.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub root_dir: PathBuf,
    pub eda_discard_count: usize,
    pub eda_max_threshold: f64,
    pub acc_scale_divisor: f64,
    pub dpi: u32,
    pub figure_size_in: (f64, f64),
    pub min_file_bytes: u64,
    pub output_file_name: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from(OUTPUT_ROOT_DIR),
            eda_discard_count: EDA_DISCARD_COUNT,
            eda_max_threshold: EDA_MAX_THRESHOLD,
            acc_scale_divisor: ACC_SCALE_DIVISOR,
            dpi: OUTPUT_DPI,
            figure_size_in: (FIGURE_WIDTH_IN, FIGURE_HEIGHT_IN),
            min_file_bytes: MIN_CHANNEL_FILE_BYTES,
            output_file_name: SUMMARY_OUTPUT_FILE.to_string(),
        }
    }
}

impl RenderConfig {
    /// Bitmap size in pixels for the configured figure size and DPI.
    pub fn pixel_size(&self) -> (u32, u32) {
        let (w_in, h_in) = self.figure_size_in;
        let dpi = f64::from(self.dpi);
        ((w_in * dpi).round() as u32, (h_in * dpi).round() as u32)
    }
}
