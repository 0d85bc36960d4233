// src/data_input/channel.rs

use crate::axis_names::AXIS_COUNT;
use crate::constants::{ACC_FILE, BVP_FILE, EDA_FILE, TEMP_FILE};
use crate::types::{SignalSeries, TriAxisSeries};

/// The four signal files a session may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Blood volume pulse.
    Bvp,
    /// Electrodermal activity, µS.
    Eda,
    /// Skin temperature, °C.
    Temp,
    /// Tri-axial accelerometer, raw units of 1/64 g.
    Acc,
}

impl Channel {
    /// Panel order in the composite figure.
    pub const ALL: [Channel; 4] = [Channel::Bvp, Channel::Eda, Channel::Temp, Channel::Acc];

    pub fn file_name(self) -> &'static str {
        match self {
            Channel::Bvp => BVP_FILE,
            Channel::Eda => EDA_FILE,
            Channel::Temp => TEMP_FILE,
            Channel::Acc => ACC_FILE,
        }
    }

    /// Panel title before any outcome suffix.
    pub fn base_title(self) -> &'static str {
        match self {
            Channel::Bvp => "BVP",
            Channel::Eda => "EDA (µS)",
            Channel::Temp => "Temperature (°C)",
            Channel::Acc => "Accelerometer (g)",
        }
    }

    pub fn is_tri_axis(self) -> bool {
        matches!(self, Channel::Acc)
    }

    /// Numeric columns per row in the channel's file.
    pub fn column_count(self) -> usize {
        if self.is_tri_axis() {
            AXIS_COUNT
        } else {
            1
        }
    }
}

/// Samples of one loaded channel, shaped by the file it came from.
#[derive(Debug, Clone, PartialEq)]
pub enum ChannelData {
    Single(SignalSeries),
    TriAxis(TriAxisSeries),
}

impl ChannelData {
    /// Number of rows (samples per axis).
    pub fn len(&self) -> usize {
        match self {
            ChannelData::Single(samples) => samples.len(),
            ChannelData::TriAxis(axes) => axes[0].len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}


// src/data_input/channel.rs
