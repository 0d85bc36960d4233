// src/session_selector.rs

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::error::{InputError, SelectorError};

/// Names of the immediate subdirectories of `root_dir`, sorted ascending.
///
/// Plain files are ignored. A missing root is reported as
/// [`SelectorError::RootMissing`] so the caller can tell the operator and
/// treat it as an empty list.
pub fn list_sessions(root_dir: &Path) -> Result<Vec<String>, SelectorError> {
    if !root_dir.exists() {
        return Err(SelectorError::RootMissing(root_dir.to_path_buf()));
    }

    let io_err = |source: io::Error| SelectorError::Io {
        path: root_dir.to_path_buf(),
        source,
    };

    let mut sessions = Vec::new();
    for entry in fs::read_dir(root_dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        // Path::is_dir follows symlinks, so a linked session folder still counts.
        if !entry.path().is_dir() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => sessions.push(name),
            Err(raw) => log::warn!("Skipping session folder with non UTF-8 name: {:?}", raw),
        }
    }
    sessions.sort();
    log::debug!(
        "Found {} session folder(s) in '{}'",
        sessions.len(),
        root_dir.display()
    );
    Ok(sessions)
}

/// Turns one line of operator input into a zero-based index into a list of
/// `count` sessions. Accepted values are the integers `1..=count`.
pub fn parse_selection(raw_line: &str, count: usize) -> Result<usize, InputError> {
    let trimmed = raw_line.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;

    match usize::try_from(value) {
        Ok(number) if (1..=count).contains(&number) => Ok(number - 1),
        _ => Err(InputError::OutOfRange { value, max: count }),
    }
}

/// Prints the numbered menu framing the session names.
pub fn print_session_menu<W: Write>(sessions: &[String], out: &mut W) -> io::Result<()> {
    writeln!(out, "\n=== Available Sessions ===")?;
    for (idx, name) in sessions.iter().enumerate() {
        writeln!(out, "{}. {}", idx + 1, name)?;
    }
    writeln!(out, "==========================")
}

/// Shows the menu and prompts until the operator enters a valid number.
///
/// Invalid entries print the validation message and prompt again. Returns
/// `Ok(None)` when the input is closed before a valid choice was made.
pub fn select_session<R: BufRead, W: Write>(
    sessions: &[String],
    mut input: R,
    out: &mut W,
) -> io::Result<Option<usize>> {
    print_session_menu(sessions, out)?;

    let mut line = String::new();
    loop {
        write!(out, "Select a session number (1-{}): ", sessions.len())?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        match parse_selection(&line, sessions.len()) {
            Ok(index) => return Ok(Some(index)),
            Err(e) => {
                log::debug!("Rejected menu input {:?}: {:?}", line.trim(), e);
                writeln!(out, "{e}")?;
            }
        }
    }
}


// src/session_selector.rs
