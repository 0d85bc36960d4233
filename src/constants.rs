// src/constants.rs

use plotters::style::RGBColor;

// Session root and output.
pub const OUTPUT_ROOT_DIR: &str = "output";
pub const SUMMARY_OUTPUT_FILE: &str = "summary_graphs_updated.png";

// Channel file names inside a session directory.
pub const BVP_FILE: &str = "BVP.csv";
pub const EDA_FILE: &str = "EDA.csv";
pub const TEMP_FILE: &str = "TEMP.csv";
pub const ACC_FILE: &str = "ACC.csv";

// A channel file must be larger than this many bytes to count as collected data.
pub const MIN_CHANNEL_FILE_BYTES: u64 = 10;

// EDA cleaning rules.
pub const EDA_DISCARD_COUNT: usize = 250; // Leading samples dropped as sensor settling time
pub const EDA_MAX_THRESHOLD: f64 = 10.0; // µS, inclusive upper bound

// Raw accelerometer units per g.
pub const ACC_SCALE_DIVISOR: f64 = 64.0;

// Figure geometry. Pixel size is FIGURE_SIZE_IN * OUTPUT_DPI.
pub const OUTPUT_DPI: u32 = 150;
pub const FIGURE_WIDTH_IN: f64 = 12.0;
pub const FIGURE_HEIGHT_IN: f64 = 16.0;

// Titles and labels.
pub const FIGURE_TITLE_PREFIX: &str = "Empatica E4 Data Session";
pub const X_LABEL_SAMPLE: &str = "Sample";

// Font sizes.
pub const FONT_SIZE_MAIN_TITLE: i32 = 32;
pub const FONT_SIZE_CHART_TITLE: i32 = 22;
pub const FONT_SIZE_AXIS_LABEL: i32 = 16;
pub const FONT_SIZE_LEGEND: i32 = 16;

// --- Plot Color Assignments ---
// Classic matplotlib cycle: every panel restarts at the first colour.
pub const COLOR_CYCLE: [RGBColor; 3] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
];
pub const COLOR_GRID: RGBColor = RGBColor(0, 0, 0);

// Opacity
pub const ALPHA_ACC_LINE: f64 = 0.7;
pub const ALPHA_SINGLE_LINE: f64 = 1.0;
pub const ALPHA_GRID: f64 = 0.3;

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 1;
pub const LINE_WIDTH_LEGEND: u32 = 2;

// src/constants.rs
