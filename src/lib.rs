//! # supercrop — window indexing for continuous EEG recordings
//!
//! `supercrop` computes the sample boundaries of fixed-size, possibly
//! overlapping windows ("supercrops") cut from a continuous multi-channel
//! recording, together with an integer target per window.  It does not read
//! files or touch the signal itself, except through the optional
//! [`extract`] helpers.
//!
//! ## Pipeline overview
//!
//! ```text
//! events / recording length
//!   │
//!   ├─ validate                  window size > 0, stride > 0
//!   ├─ windower                  event-anchored trial regions  |  uniform grid
//!   ├─ overlap check             starts strictly increasing across trials
//!   ├─ label                     raw label → integer target (memoized)
//!   └─ table::build_table        [trial, window_in_trial, start, stop, target]
//!        │
//!        └─→ WindowTable   (→ extract::extract_windows  [W, C, size] f32)
//! ```
//!
//! ## Quick start
//!
//! ```
//! use supercrop::{create_windows_from_events, Event, LabelMapping, WindowingConfig};
//!
//! let events = vec![Event::new(100, "left"), Event::new(1000, "right")];
//! let mapping = LabelMapping::from([("left".to_string(), 0), ("right".to_string(), 1)]);
//!
//! let cfg = WindowingConfig {
//!     trial_stop_offset_samples: Some(350),
//!     window_size_samples: 100,
//!     window_stride_samples: 100,
//!     ..WindowingConfig::default()
//! };
//! let table = create_windows_from_events(&events, &cfg, Some(&mapping))?;
//!
//! assert_eq!(table.starts(), vec![100, 200, 300, 350, 1000, 1100, 1200, 1250]);
//! assert_eq!(table.targets(), vec![0, 0, 0, 0, 1, 1, 1, 1]);
//! # Ok::<(), supercrop::WindowError>(())
//! ```
//!
//! ## Fixed-length windows
//!
//! ```
//! use supercrop::{create_fixed_length_windows, RawLabel, Recording, WindowingConfig};
//!
//! let rec = Recording::new(1000, 250.0);
//! let cfg = WindowingConfig {
//!     window_size_samples: 250,
//!     window_stride_samples: 250,
//!     drop_last_window: true,
//!     ..WindowingConfig::default()
//! };
//! let table = create_fixed_length_windows(&rec, &[RawLabel::Code(2)], &cfg, None)?;
//! assert_eq!(table.starts(), vec![0, 250, 500]);
//! # Ok::<(), supercrop::WindowError>(())
//! ```

pub mod config;
pub mod error;
pub mod event;
pub mod extract;
pub mod label;
pub mod table;
pub mod validate;
pub mod windower;

// ── Crate-root re-exports ─────────────────────────────────────────────────

pub use config::{secs_to_samples, WindowingConfig};
pub use error::{Result, WindowError};
pub use event::{Event, Recording};
pub use extract::{extract_windows, WindowedRecording};
pub use label::{resolve, LabelMapping, LabelResolver, RawLabel};
pub use table::{build_table, WindowRecord, WindowTable};
pub use validate::validate;
pub use windower::{compute_event_windows, compute_grid_windows, WindowBounds, WindowStrategy};

/// Cut windows around discrete events.
///
/// Each event defines the trial region
/// `[onset + trial_start_offset_samples, onset + trial_stop_offset_samples)`,
/// which is tiled with windows of `window_size_samples` every
/// `window_stride_samples`.  Unless `cfg.drop_last_window` is set, every trial
/// whose tiling stops short of the region end gets one more window
/// right-aligned to it.  Each window inherits the target of its event.
///
/// Events must be in ascending onset order.
///
/// # Errors
///
/// * [`WindowError::InvalidWindowParameters`]: non-positive size or stride.
/// * [`WindowError::MissingStopOffset`]: `cfg.trial_stop_offset_samples` is `None`.
/// * [`WindowError::NegativeStart`]: a window would start before sample 0.
/// * [`WindowError::OverlappingTrials`]: trial regions overlap.
/// * [`WindowError::MissingLabelMapping`] / [`WindowError::UnmappedLabel`]:
///   a windowed event has a name label that cannot be mapped.
pub fn create_windows_from_events(
    events: &[Event],
    cfg: &WindowingConfig,
    mapping: Option<&LabelMapping>,
) -> Result<WindowTable> {
    let onsets = event::onsets_of(events);
    let bounds = WindowStrategy::Events { onsets: &onsets }.compute(cfg)?;

    // Only windowed trials need a resolvable label.
    let mut resolver = LabelResolver::new(mapping);
    let targets = bounds
        .trial_index
        .iter()
        .map(|&trial| resolver.resolve(&events[trial].label))
        .collect::<Result<Vec<i64>>>()?;

    build_table(
        cfg.window_size_samples,
        &bounds.trial_index,
        &bounds.window_in_trial,
        &bounds.starts,
        &bounds.stops,
        &targets,
    )
}

/// Tile a whole recording with evenly spaced windows sharing one target.
///
/// `targets` is the recording's target table and must hold exactly one entry.
/// Windows start at `cfg.trial_start_offset_samples` and are generated every
/// `window_stride_samples` before `cfg.trial_stop_offset_samples` (or the end
/// of the recording).  With `cfg.drop_last_window` the last generated window
/// is always discarded; otherwise it is moved to end on the last sample of
/// the recording.
///
/// # Errors
///
/// * [`WindowError::InvalidWindowParameters`]: non-positive size or stride.
/// * [`WindowError::UnsupportedTargetCount`]: `targets.len() != 1`.
/// * [`WindowError::NegativeStart`]: the recording is shorter than a window.
/// * [`WindowError::MissingLabelMapping`] / [`WindowError::UnmappedLabel`].
pub fn create_fixed_length_windows(
    recording: &Recording,
    targets: &[RawLabel],
    cfg: &WindowingConfig,
    mapping: Option<&LabelMapping>,
) -> Result<WindowTable> {
    let bounds = WindowStrategy::Grid { n_times: recording.n_times as i64 }.compute(cfg)?;

    let [label] = targets else {
        return Err(WindowError::UnsupportedTargetCount(targets.len()));
    };
    let target = resolve(label, mapping)?;
    let targets = vec![target; bounds.len()];

    build_table(
        cfg.window_size_samples,
        &bounds.trial_index,
        &bounds.window_in_trial,
        &bounds.starts,
        &bounds.stops,
        &targets,
    )
}
