// src/data_input/mod.rs

pub mod channel;
pub mod signal_loader;

// src/data_input/mod.rs
