// src/data_analysis/unit_scaling.rs

use crate::types::{SignalSeries, TriAxisSeries};

/// Converts raw sensor units to physical units by dividing every sample.
pub fn scale_series(samples: &SignalSeries, divisor: f64) -> SignalSeries {
    samples / divisor
}

/// Scales each accelerometer axis independently.
pub fn scale_tri_axis(axes: &TriAxisSeries, divisor: f64) -> TriAxisSeries {
    std::array::from_fn(|axis_index| scale_series(&axes[axis_index], divisor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_scale_tri_axis_per_axis() {
        let raw = [array![64.0, -32.0], array![0.0, 128.0], array![1.0, -64.0]];
        let scaled = scale_tri_axis(&raw, 64.0);
        for axis_index in 0..3 {
            for (raw_value, scaled_value) in raw[axis_index].iter().zip(scaled[axis_index].iter()) {
                assert_eq!(*scaled_value, raw_value / 64.0);
            }
        }
        assert_eq!(scaled[0], array![1.0, -0.5]);
        assert_eq!(scaled[2], array![0.015625, -1.0]);
    }
}
