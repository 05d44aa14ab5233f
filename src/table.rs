//! Final window table.
//!
//! [`build_table`] zips the aligned columns produced by a windower with the
//! resolved integer targets.  The resulting [`WindowTable`] is what a
//! consumer uses to slice the signal (see [`crate::extract`]).
use serde::{Deserialize, Serialize};

use crate::error::{Result, WindowError};

/// One window: which trial it came from, its position inside that trial,
/// its `[start, stop)` sample range and its integer target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowRecord {
    pub trial_index: usize,
    pub window_in_trial: usize,
    pub start: i64,
    pub stop: i64,
    pub target: i64,
}

impl WindowRecord {
    /// Window length in samples.
    pub fn n_samples(&self) -> i64 {
        self.stop - self.start
    }
}

/// Ordered, immutable sequence of [`WindowRecord`]s sharing one window size.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowTable {
    window_size: i64,
    records: Vec<WindowRecord>,
}

/// Assemble a [`WindowTable`] from parallel columns.
///
/// # Errors
///
/// [`WindowError::ShapeMismatch`] if the five columns do not all have the same
/// length.  That only happens when a windower is broken; user input cannot
/// cause it.
pub fn build_table(
    window_size: i64,
    trial_index: &[usize],
    window_in_trial: &[usize],
    starts: &[i64],
    stops: &[i64],
    targets: &[i64],
) -> Result<WindowTable> {
    let n = starts.len();
    if [trial_index.len(), window_in_trial.len(), stops.len(), targets.len()]
        .iter()
        .any(|&len| len != n)
    {
        return Err(WindowError::ShapeMismatch {
            trial: trial_index.len(),
            window: window_in_trial.len(),
            start: n,
            stop: stops.len(),
            target: targets.len(),
        });
    }

    let records = (0..n)
        .map(|i| WindowRecord {
            trial_index: trial_index[i],
            window_in_trial: window_in_trial[i],
            start: starts[i],
            stop: stops[i],
            target: targets[i],
        })
        .collect();

    Ok(WindowTable { window_size, records })
}

impl WindowTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn window_size(&self) -> i64 {
        self.window_size
    }

    pub fn get(&self, index: usize) -> Option<&WindowRecord> {
        self.records.get(index)
    }

    pub fn records(&self) -> &[WindowRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WindowRecord> {
        self.records.iter()
    }

    pub fn starts(&self) -> Vec<i64> {
        self.records.iter().map(|r| r.start).collect()
    }

    pub fn stops(&self) -> Vec<i64> {
        self.records.iter().map(|r| r.stop).collect()
    }

    pub fn targets(&self) -> Vec<i64> {
        self.records.iter().map(|r| r.target).collect()
    }

    pub fn window_in_trial(&self) -> Vec<usize> {
        self.records.iter().map(|r| r.window_in_trial).collect()
    }

    pub fn trial_indices(&self) -> Vec<usize> {
        self.records.iter().map(|r| r.trial_index).collect()
    }

    /// Number of trials that contributed at least one window.
    pub fn n_trials(&self) -> usize {
        // Records are grouped by trial, so counting boundaries is enough.
        self.records
            .windows(2)
            .filter(|w| w[0].trial_index != w[1].trial_index)
            .count()
            + usize::from(!self.records.is_empty())
    }

    /// Time of the last sample of a window relative to its start, in seconds.
    ///
    /// The window end is inclusive here: `(window_size - 1) / sfreq`.
    pub fn tmax(&self, sfreq: f64) -> f64 {
        (self.window_size - 1) as f64 / sfreq
    }
}

impl<'a> IntoIterator for &'a WindowTable {
    type Item = &'a WindowRecord;
    type IntoIter = std::slice::Iter<'a, WindowRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
