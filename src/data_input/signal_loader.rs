// src/data_input/signal_loader.rs

use csv::ReaderBuilder;
use ndarray::Array1;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

use crate::config::RenderConfig;
use crate::data_input::channel::{Channel, ChannelData};
use crate::error::ChannelError;

/// Loads one channel file from a session directory.
///
/// Returns:
/// * `Ok(None)` when the file is missing, no larger than
///   `config.min_file_bytes`, or holds no rows ("no data collected").
/// * `Ok(Some(data))` with one series per column, in row order.
/// * `Err(_)` when the file exists but cannot be read or parsed.
pub fn load_channel(
    path: &Path,
    channel: Channel,
    config: &RenderConfig,
) -> Result<Option<ChannelData>, ChannelError> {
    let io_err = |source: io::Error| ChannelError::Io {
        path: path.to_path_buf(),
        source,
    };

    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("{}: not present", path.display());
            return Ok(None);
        }
        Err(e) => return Err(io_err(e)),
    };
    if metadata.len() <= config.min_file_bytes {
        log::debug!(
            "{}: {} bytes, treating as no data",
            path.display(),
            metadata.len()
        );
        return Ok(None);
    }

    let file = File::open(path).map_err(io_err)?;
    let columns = parse_columns(file, channel.column_count())?;
    log::debug!(
        "{}: parsed {} row(s)",
        path.display(),
        columns.first().map_or(0, Vec::len)
    );

    if columns.first().map_or(true, Vec::is_empty) {
        return Ok(None);
    }
    Ok(Some(into_channel_data(channel, columns)))
}

/// Parses headerless comma-separated rows with exactly `column_count` numeric
/// fields each. Returns the values column-major. Blank lines are skipped.
pub fn parse_columns<R: Read>(
    reader: R,
    column_count: usize,
) -> Result<Vec<Vec<f64>>, ChannelError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); column_count];

    for (record_index, result) in rdr.records().enumerate() {
        let record = result.map_err(|source| ChannelError::Csv {
            row: record_index + 1,
            source,
        })?;
        // Report file line numbers so the operator can find the bad row.
        let row = record
            .position()
            .map_or(record_index + 1, |p| p.line() as usize);

        if record.len() != column_count {
            return Err(ChannelError::ColumnCount {
                row,
                expected: column_count,
                found: record.len(),
            });
        }

        for (column, field) in record.iter().enumerate() {
            let value = field
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| ChannelError::InvalidNumber {
                    row,
                    column: column + 1,
                    value: field.to_string(),
                })?;
            columns[column].push(value);
        }
    }

    Ok(columns)
}

fn into_channel_data(channel: Channel, columns: Vec<Vec<f64>>) -> ChannelData {
    let mut series = columns.into_iter().map(Array1::from);
    if channel.is_tri_axis() {
        ChannelData::TriAxis(std::array::from_fn(|_| {
            series.next().unwrap_or_else(|| Array1::zeros(0))
        }))
    } else {
        ChannelData::Single(series.next().unwrap_or_else(|| Array1::zeros(0)))
    }
}


// src/data_input/signal_loader.rs
