// src/data_analysis/mod.rs

pub mod eda_filter;
pub mod unit_scaling;

// src/data_analysis/mod.rs
