//! Centralized accelerometer axis naming
//!
//! Provides the X/Y/Z names used for ACC.csv columns and legend entries.

/// Number of accelerometer axes (columns in ACC.csv).
pub const AXIS_COUNT: usize = 3;

/// Get the standard axis name for a given column index
///
/// # Arguments
/// * `index` - Column index (0=X, 1=Y, 2=Z)
///
/// # Panics
/// Panics if index is greater than 2
pub fn axis_name(index: usize) -> &'static str {
    match index {
        0 => "X",
        1 => "Y",
        2 => "Z",
        _ => panic!(
            "Invalid axis index: {}. Expected 0 (X), 1 (Y), or 2 (Z)",
            index
        ),
    }
}

/// Get all axis names as a static array
pub const AXIS_NAMES: [&str; AXIS_COUNT] = ["X", "Y", "Z"];
