// src/plot_functions/mod.rs

pub mod plot_session_summary;

// src/plot_functions/mod.rs
