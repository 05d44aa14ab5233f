//! Window boundary computation.
//!
//! Two strategies produce the same [`WindowBounds`] columns:
//!
//! ```text
//! events:  onset + start_offset                   onset + stop_offset
//!          |-------|-------|-------|----|             (trial region)
//!          [  w0  ][  w1  ][  w2  ]                   stride-spaced, must fit
//!                               [  w3  ]              end-aligned, may overlap w2
//!
//! grid:    start_offset                   candidate_bound   alignment_target
//!          [  w0  ][  w1  ][  w2  ]...           |                 | (n_times)
//! ```
//!
//! * [`compute_event_windows`] tiles each trial region around an event onset.
//! * [`compute_grid_windows`] tiles the whole recording as one synthetic trial.
//!
//! [`WindowStrategy`] selects between them from a [`WindowingConfig`].
use crate::config::WindowingConfig;
use crate::error::{Result, WindowError};
use crate::validate::validate;

/// Aligned per-window columns: `trial_index[i]`, `window_in_trial[i]`,
/// `starts[i]` and `stops[i]` all describe window `i`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowBounds {
    pub trial_index: Vec<usize>,
    pub window_in_trial: Vec<usize>,
    pub starts: Vec<i64>,
    pub stops: Vec<i64>,
}

impl WindowBounds {
    fn with_capacity(n: usize) -> Self {
        Self {
            trial_index: Vec::with_capacity(n),
            window_in_trial: Vec::with_capacity(n),
            starts: Vec::with_capacity(n),
            stops: Vec::with_capacity(n),
        }
    }

    fn push(&mut self, trial: usize, i_window: usize, start: i64, size: i64) {
        self.trial_index.push(trial);
        self.window_in_trial.push(i_window);
        self.starts.push(start);
        self.stops.push(start + size);
    }

    /// Number of windows.
    pub fn len(&self) -> usize {
        self.starts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }
}

/// Compute windows inside `[onset + start_offset, onset + stop_offset)` for
/// every onset, in input order.
///
/// Window starts are generated every `stride` samples from the trial start
/// while they lie before the trial stop, and kept only if the whole window
/// fits.  Unless `drop_last` is set, a trial whose last kept window does not
/// end exactly on the trial stop gets one more window right-aligned to it;
/// that window may overlap its predecessor.
///
/// A trial narrower than `size` keeps no stride-spaced window and is skipped
/// entirely, including the end-aligned window.
///
/// # Errors
///
/// * [`WindowError::InvalidWindowParameters`] for a non-positive size or stride.
/// * [`WindowError::NegativeStart`] if a window would start before sample 0.
/// * [`WindowError::OverlappingTrials`] if window starts, concatenated over
///   trials, are not strictly increasing.
///
/// # Examples
///
/// ```
/// use supercrop::windower::compute_event_windows;
///
/// let b = compute_event_windows(&[100], 0, 350, 100, 100, false).unwrap();
/// assert_eq!(b.starts, vec![100, 200, 300, 350]);
/// assert_eq!(b.window_in_trial, vec![0, 1, 2, 3]);
/// ```
pub fn compute_event_windows(
    onsets: &[i64],
    start_offset: i64,
    stop_offset: i64,
    size: i64,
    stride: i64,
    drop_last: bool,
) -> Result<WindowBounds> {
    validate(size, stride, start_offset, Some(stop_offset))?;

    // Grows with the windows that fit; the region size alone says nothing
    // about how many that is.
    let mut out = WindowBounds::default();
    let mut skipped = 0usize;

    for (trial, &onset) in onsets.iter().enumerate() {
        let trial_start = onset + start_offset;
        let trial_stop = onset + stop_offset;
        let last_fit = trial_stop.saturating_sub(size);
        let first = out.len();

        for (i_window, start) in (trial_start..trial_stop)
            .step_by(stride as usize)
            .take_while(|&s| s <= last_fit)
            .enumerate()
        {
            out.push(trial, i_window, start, size);
        }

        let n_kept = out.len() - first;
        if n_kept == 0 {
            skipped += 1;
            continue;
        }
        if !drop_last && out.stops[out.len() - 1] != trial_stop {
            out.push(trial, n_kept, trial_stop - size, size);
        }
    }

    check_order(&out)?;

    log::debug!(
        "event windows: {} trials -> {} windows ({} trials narrower than {} samples skipped)",
        onsets.len(),
        out.len(),
        skipped,
        size
    );
    Ok(out)
}

/// Compute evenly spaced windows over a whole recording of `n_times` samples.
///
/// Starts run from `start_offset` every `stride` samples while they lie before
/// `candidate_bound` (`stop_offset`, or `n_times` when absent).
///
/// * `drop_last = true` drops the last generated start, whether or not its
///   window would overflow.
/// * `drop_last = false` moves the last start so the window ends on
///   `alignment_target`, which is always `n_times`, even when `stop_offset`
///   ends the candidates earlier.
///
/// All windows belong to trial 0 and are indexed by their position.
///
/// # Examples
///
/// ```
/// use supercrop::windower::compute_grid_windows;
///
/// let b = compute_grid_windows(1000, 0, None, 250, 250, true).unwrap();
/// assert_eq!(b.starts, vec![0, 250, 500]);
/// ```
pub fn compute_grid_windows(
    n_times: i64,
    start_offset: i64,
    stop_offset: Option<i64>,
    size: i64,
    stride: i64,
    drop_last: bool,
) -> Result<WindowBounds> {
    validate(size, stride, start_offset, stop_offset)?;

    let candidate_bound = stop_offset.unwrap_or(n_times);
    let alignment_target = n_times;

    let mut starts: Vec<i64> = (start_offset..candidate_bound)
        .step_by(stride as usize)
        .collect();

    if drop_last {
        starts.pop();
    } else if let Some(last) = starts.last_mut() {
        if *last + size != alignment_target {
            *last = alignment_target - size;
        }
    }

    let mut out = WindowBounds::with_capacity(starts.len());
    for (i_window, &start) in starts.iter().enumerate() {
        if start < 0 {
            return Err(WindowError::NegativeStart { trial_index: 0, start });
        }
        out.push(0, i_window, start, size);
    }

    log::debug!(
        "grid windows: {} samples, starts in [{}, {}) -> {} windows",
        n_times,
        start_offset,
        candidate_bound,
        out.len()
    );
    Ok(out)
}

/// Starts must be non-negative and strictly increasing across the whole
/// output; equal or decreasing starts mean two trial regions overlap.
fn check_order(bounds: &WindowBounds) -> Result<()> {
    let mut previous: Option<i64> = None;
    for (&start, &trial_index) in bounds.starts.iter().zip(&bounds.trial_index) {
        if start < 0 {
            return Err(WindowError::NegativeStart { trial_index, start });
        }
        if let Some(previous_start) = previous {
            if start <= previous_start {
                return Err(WindowError::OverlappingTrials {
                    trial_index,
                    start,
                    previous_start,
                });
            }
        }
        previous = Some(start);
    }
    Ok(())
}

/// How window anchors are obtained for one recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowStrategy<'a> {
    /// Trial regions around discrete event onsets (samples, ascending).
    Events { onsets: &'a [i64] },
    /// One uniform tiling of a recording of `n_times` samples.
    Grid { n_times: i64 },
}

impl WindowStrategy<'_> {
    /// Compute window bounds with the offsets, size, stride and drop policy of `cfg`.
    ///
    /// Event anchoring needs `cfg.trial_stop_offset_samples`; without it this
    /// returns [`WindowError::MissingStopOffset`].
    pub fn compute(&self, cfg: &WindowingConfig) -> Result<WindowBounds> {
        match *self {
            WindowStrategy::Events { onsets } => match cfg.trial_stop_offset_samples {
                Some(stop_offset) => compute_event_windows(
                    onsets,
                    cfg.trial_start_offset_samples,
                    stop_offset,
                    cfg.window_size_samples,
                    cfg.window_stride_samples,
                    cfg.drop_last_window,
                ),
                None => {
                    // Bad sizes are reported before the missing stop offset.
                    cfg.validate()?;
                    Err(WindowError::MissingStopOffset)
                }
            },
            WindowStrategy::Grid { n_times } => compute_grid_windows(
                n_times,
                cfg.trial_start_offset_samples,
                cfg.trial_stop_offset_samples,
                cfg.window_size_samples,
                cfg.window_stride_samples,
                cfg.drop_last_window,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_windows_exact_fit() {
        let b = compute_event_windows(&[100], 0, 400, 100, 100, true).unwrap();
        assert_eq!(b.starts, vec![100, 200, 300]);
        assert_eq!(b.stops, vec![200, 300, 400]);
        assert_eq!(b.window_in_trial, vec![0, 1, 2]);
        assert_eq!(b.trial_index, vec![0, 0, 0]);
    }

    #[test]
    fn exact_fit_adds_no_end_aligned_window() {
        let keep = compute_event_windows(&[100], 0, 400, 100, 100, false).unwrap();
        let drop = compute_event_windows(&[100], 0, 400, 100, 100, true).unwrap();
        assert_eq!(keep, drop);
    }

    #[test]
    fn end_aligned_window_overlaps_previous() {
        let b = compute_event_windows(&[100], 0, 350, 100, 100, false).unwrap();
        assert_eq!(b.starts, vec![100, 200, 300, 350]);
        assert_eq!(b.window_in_trial, vec![0, 1, 2, 3]);
        // [300, 400) and [350, 450) share 50 samples.
        assert!(b.stops[2] > b.starts[3]);

        let dropped = compute_event_windows(&[100], 0, 350, 100, 100, true).unwrap();
        assert_eq!(dropped.starts, vec![100, 200, 300]);
    }

    #[test]
    fn negative_start_offset_reaches_before_onset() {
        let b = compute_event_windows(&[500, 1500], -200, 300, 250, 250, true).unwrap();
        assert_eq!(b.starts, vec![300, 550, 1300, 1550]);
        assert_eq!(b.trial_index, vec![0, 0, 1, 1]);
        assert_eq!(b.window_in_trial, vec![0, 1, 0, 1]);
    }

    #[test]
    fn window_index_resets_per_trial() {
        let b = compute_event_windows(&[0, 1000], 0, 300, 100, 100, false).unwrap();
        assert_eq!(b.window_in_trial, vec![0, 1, 2, 0, 1, 2]);
    }

    #[test]
    fn narrow_trial_is_skipped() {
        let b = compute_event_windows(&[0, 1000], 0, 50, 100, 10, false).unwrap();
        assert!(b.is_empty());

        // Only the narrow trial is affected.
        let b = compute_event_windows(&[0], 0, 99, 100, 10, false).unwrap();
        assert!(b.is_empty());
        let b = compute_event_windows(&[0], 0, 100, 100, 10, false).unwrap();
        assert_eq!(b.starts, vec![0]);
    }

    #[test]
    fn inverted_offsets_yield_nothing() {
        let b = compute_event_windows(&[1000], 100, 0, 10, 10, false).unwrap();
        assert!(b.is_empty());
    }

    #[test]
    fn no_onsets_no_windows() {
        let b = compute_event_windows(&[], 0, 400, 100, 100, false).unwrap();
        assert!(b.is_empty());
    }

    #[test]
    fn overlapping_trials_rejected() {
        let err = compute_event_windows(&[100, 250], 0, 400, 100, 100, true).unwrap_err();
        assert_eq!(
            err,
            WindowError::OverlappingTrials { trial_index: 1, start: 250, previous_start: 400 }
        );
    }

    #[test]
    fn unsorted_onsets_rejected() {
        let err = compute_event_windows(&[1000, 0], 0, 100, 100, 100, true).unwrap_err();
        assert!(matches!(err, WindowError::OverlappingTrials { trial_index: 1, .. }));
    }

    #[test]
    fn window_before_recording_start_rejected() {
        let err = compute_event_windows(&[50], -100, 100, 100, 100, true).unwrap_err();
        assert_eq!(err, WindowError::NegativeStart { trial_index: 0, start: -50 });
    }

    #[test]
    fn grid_drop_last_discards_final_start() {
        let b = compute_grid_windows(1000, 0, None, 250, 250, true).unwrap();
        assert_eq!(b.starts, vec![0, 250, 500]);
    }

    #[test]
    fn grid_keeps_last_when_it_lands_on_end() {
        let b = compute_grid_windows(1000, 0, None, 250, 250, false).unwrap();
        assert_eq!(b.starts, vec![0, 250, 500, 750]);
        assert_eq!(b.stops, vec![250, 500, 750, 1000]);
        assert_eq!(b.window_in_trial, vec![0, 1, 2, 3]);
        assert!(b.trial_index.iter().all(|&t| t == 0));
    }

    #[test]
    fn grid_right_aligns_last_window() {
        let b = compute_grid_windows(1100, 0, None, 250, 250, false).unwrap();
        assert_eq!(b.starts, vec![0, 250, 500, 750, 850]);
    }

    #[test]
    fn grid_aligns_to_recording_end_not_stop_offset() {
        let b = compute_grid_windows(1000, 0, Some(600), 100, 200, false).unwrap();
        assert_eq!(b.starts, vec![0, 200, 900]);
        assert_eq!(*b.stops.last().unwrap(), 1000);
    }

    #[test]
    fn grid_without_candidates_is_empty() {
        let b = compute_grid_windows(1000, 1000, None, 100, 100, false).unwrap();
        assert!(b.is_empty());
        let b = compute_grid_windows(1000, 1000, None, 100, 100, true).unwrap();
        assert!(b.is_empty());
    }

    #[test]
    fn huge_region_single_window() {
        let b = compute_event_windows(&[0], 0, 1 << 62, 1 << 62, 1, true).unwrap();
        assert_eq!(b.starts, vec![0]);
        assert_eq!(b.stops, vec![1 << 62]);

        let b = compute_event_windows(&[0, 1 << 40], 0, 1 << 30, (1 << 30) - 1, 1, false).unwrap();
        assert_eq!(b.starts, vec![0, 1, 1 << 40, (1 << 40) + 1]);
        assert_eq!(b.window_in_trial, vec![0, 1, 0, 1]);
    }

    #[test]
    fn grid_negative_start_offset_rejected() {
        let err = compute_grid_windows(1000, -50, None, 100, 100, true).unwrap_err();
        assert_eq!(err, WindowError::NegativeStart { trial_index: 0, start: -50 });
    }

    #[test]
    fn grid_shorter_than_window_rejected() {
        let err = compute_grid_windows(80, 0, None, 100, 100, false).unwrap_err();
        assert_eq!(err, WindowError::NegativeStart { trial_index: 0, start: -20 });
    }

    #[test]
    fn strategy_dispatch() {
        let cfg = WindowingConfig {
            trial_stop_offset_samples: Some(400),
            window_size_samples: 100,
            window_stride_samples: 100,
            drop_last_window: true,
            ..WindowingConfig::default()
        };
        let events = WindowStrategy::Events { onsets: &[100] }.compute(&cfg).unwrap();
        assert_eq!(events.starts, vec![100, 200, 300]);

        let grid = WindowStrategy::Grid { n_times: 1000 }.compute(&cfg).unwrap();
        assert_eq!(grid.starts, vec![0, 100, 200]);
    }

    #[test]
    fn event_strategy_needs_stop_offset() {
        let cfg = WindowingConfig::default();
        assert_eq!(
            WindowStrategy::Events { onsets: &[0] }.compute(&cfg),
            Err(WindowError::MissingStopOffset)
        );
    }

    #[test]
    fn invalid_size_reported_before_missing_stop() {
        let cfg = WindowingConfig { window_size_samples: 0, ..WindowingConfig::default() };
        assert!(matches!(
            WindowStrategy::Events { onsets: &[0] }.compute(&cfg),
            Err(WindowError::InvalidWindowParameters(_))
        ));
    }
}
