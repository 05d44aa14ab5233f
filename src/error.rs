//! Error types for window computation.
//!
//! Every failure is a deterministic function of the inputs; nothing here is
//! retried or logged. Variants carry enough context (trial index, offending
//! start sample) to diagnose a bad call without re-running it.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, WindowError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WindowError {
    /// Non-positive window size or stride.
    #[error("invalid window parameters: {0}")]
    InvalidWindowParameters(String),

    /// Event-anchored windowing was asked for without a trial stop offset.
    #[error("event-anchored windowing requires a trial stop offset")]
    MissingStopOffset,

    /// Window starts across trials are not strictly increasing.
    #[error(
        "trials overlap: window start {start} of trial {trial_index} does not \
         follow previous start {previous_start}"
    )]
    OverlappingTrials {
        trial_index: usize,
        start: i64,
        previous_start: i64,
    },

    /// A window would begin before the first sample of the recording.
    #[error("window start {start} of trial {trial_index} is negative")]
    NegativeStart { trial_index: usize, start: i64 },

    /// Raw label is not an integer and no mapping was supplied.
    #[error("a mapping from {label:?} to an integer target is required")]
    MissingLabelMapping { label: String },

    /// Raw label is not a key of the supplied mapping.
    #[error("label {label:?} has no entry in the target mapping")]
    UnmappedLabel { label: String },

    /// Grid windowing takes exactly one per-recording target.
    #[error("expected exactly one target for the recording, got {0}")]
    UnsupportedTargetCount(usize),

    /// Parallel window columns differ in length.
    #[error(
        "window table columns differ in length: trial={trial} window={window} \
         start={start} stop={stop} target={target}"
    )]
    ShapeMismatch {
        trial: usize,
        window: usize,
        start: usize,
        stop: usize,
        target: usize,
    },

    /// A window does not lie inside the signal it is sliced from.
    #[error("window {index} [{start}, {stop}) lies outside a recording of {n_times} samples")]
    WindowOutOfRange {
        index: usize,
        start: i64,
        stop: i64,
        n_times: usize,
    },

    /// Seconds could not be converted to samples.
    #[error("cannot convert {seconds} s to samples at {sfreq} Hz")]
    InvalidDuration { seconds: f64, sfreq: f64 },
}
