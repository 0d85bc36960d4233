// src/lib.rs - Library interface for the session selector and summary renderer

pub mod axis_names;
pub mod config;
pub mod constants;
pub mod data_analysis;
pub mod data_input;
pub mod error;
pub mod font_config;
pub mod plot_framework;
pub mod plot_functions;
pub mod session_selector;
pub mod types;

pub use config::RenderConfig;
pub use error::{ChannelError, InputError, SelectorError, SummaryError};

/// Crate version as compiled.
pub fn crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
