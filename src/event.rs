//! Inputs supplied by the recording reader and annotation source.
use serde::{Deserialize, Serialize};

use crate::label::RawLabel;
use crate::table::WindowTable;

/// A discrete event: onset sample and its description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Onset in samples from the first sample of the recording.
    pub onset: i64,
    pub label: RawLabel,
}

impl Event {
    pub fn new(onset: i64, label: impl Into<RawLabel>) -> Self {
        Self { onset, label: label.into() }
    }
}

/// Length and sampling rate of a continuous recording.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Recording {
    /// Number of samples per channel.
    pub n_times: usize,
    /// Sampling rate in Hz.
    pub sfreq: f64,
}

impl Recording {
    pub fn new(n_times: usize, sfreq: f64) -> Self {
        Self { n_times, sfreq }
    }

    /// Inclusive end of each window of `table`, in seconds at this recording's rate.
    pub fn window_tmax(&self, table: &WindowTable) -> f64 {
        table.tmax(self.sfreq)
    }
}

/// Onsets of `events`, in input order.
pub fn onsets_of(events: &[Event]) -> Vec<i64> {
    events.iter().map(|e| e.onset).collect()
}
