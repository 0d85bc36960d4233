// src/types.rs
// Type aliases shared by the loader, analysis and plot modules

use crate::axis_names::AXIS_COUNT;
use ndarray::Array1;

// Compile-time assertion: the accelerometer file layout is fixed at three columns.
const _: () = assert!(AXIS_COUNT == 3, "ACC.csv carries exactly three axes");

/// One channel's samples in on-disk row order.
pub type SignalSeries = Array1<f64>;

/// X, Y, Z series of the accelerometer.
pub type TriAxisSeries = [SignalSeries; AXIS_COUNT];

/// (sample index, value) pairs ready for a line series.
pub type SeriesPoints = Vec<(f64, f64)>;
