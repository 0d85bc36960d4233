// src/error.rs

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to enumerate the session root.
#[derive(Debug, Error)]
pub enum SelectorError {
    #[error("Directory '{}' not found.", .0.display())]
    RootMissing(PathBuf),
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Rejected menu input. The display text is what the operator sees before re-prompting.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Please enter a valid number.")]
    NotANumber(String),
    #[error("Invalid number. Please try again.")]
    OutOfRange { value: i64, max: usize },
}

/// A channel file that exists but cannot be turned into samples.
#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("row {row}: {source}")]
    Csv {
        row: usize,
        #[source]
        source: csv::Error,
    },
    #[error("row {row}: expected {expected} column(s), found {found}")]
    ColumnCount {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("row {row}, column {column}: could not convert '{value}' to a finite number")]
    InvalidNumber {
        row: usize,
        column: usize,
        value: String,
    },
}

/// Failure to serialise the composite figure.
#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("could not save '{}': {reason}", path.display())]
    Save { path: PathBuf, reason: String },
}

// src/error.rs
