// src/main.rs

use anyhow::{Context, Result};
use std::io::{self, Write};
use std::process::ExitCode;

use e4_session_render::config::RenderConfig;
use e4_session_render::crate_version;
use e4_session_render::error::SelectorError;
use e4_session_render::plot_functions::plot_session_summary::generate_session_summary;
use e4_session_render::session_selector::{list_sessions, select_session};

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let config = RenderConfig::default();
    log::info!("e4_session_render {}", crate_version());
    log::debug!("Configuration: {:?}", config);

    // A missing root is reported, then handled like an empty root.
    let sessions = match list_sessions(&config.root_dir) {
        Ok(sessions) => sessions,
        Err(e @ SelectorError::RootMissing(_)) => {
            println!("Error: {e}");
            Vec::new()
        }
        Err(e) => return Err(e).context("listing session folders"),
    };

    if sessions.is_empty() {
        println!(
            "No session data found in '{}/'.",
            config.root_dir.display()
        );
        return Ok(ExitCode::SUCCESS);
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let Some(index) = select_session(&sessions, stdin.lock(), &mut stdout)
        .context("reading session selection")?
    else {
        println!("\nNo session selected.");
        return Ok(ExitCode::SUCCESS);
    };
    stdout.flush().context("flushing stdout")?;

    let session_dir = config.root_dir.join(&sessions[index]);
    log::info!("Selected session '{}'", session_dir.display());

    match generate_session_summary(&session_dir, &config) {
        Ok(output_path) => {
            println!("SUCCESS: Graphs saved to: {}", output_path.display());
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!("Error saving file: {e}");
            Ok(ExitCode::FAILURE)
        }
    }
}

// src/main.rs
