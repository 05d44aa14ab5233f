//! Windowing configuration.
//!
//! [`WindowingConfig`] holds every tunable parameter shared by the
//! event-anchored and fixed-length windowers.  All values are in samples;
//! use [`WindowingConfig::from_secs`] to derive them from durations.
use serde::{Deserialize, Serialize};

use crate::error::{Result, WindowError};
use crate::validate::validate;

/// Configuration for cutting a recording into windows.
///
/// All fields are `pub` so you can construct one with struct-update syntax:
///
/// ```
/// use supercrop::WindowingConfig;
///
/// let cfg = WindowingConfig {
///     trial_stop_offset_samples: Some(1000),
///     window_stride_samples: 500,   // 50 % overlap
///     ..WindowingConfig::default()
/// };
/// assert_eq!(cfg.window_size_samples, 1280);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowingConfig {
    /// Start of each trial region relative to its event onset, in samples.
    ///
    /// Negative values reach back before the onset.  In fixed-length mode this
    /// is the absolute sample the first window starts at.
    ///
    /// Default: `0`.
    pub trial_start_offset_samples: i64,

    /// Exclusive end of each trial region relative to its event onset.
    ///
    /// Required for event-anchored windowing.  In fixed-length mode `None`
    /// means "the end of the recording"; a value bounds where window starts
    /// are generated, while the last window is still right-aligned to the
    /// physical end of the recording unless it is dropped.
    ///
    /// Default: `None`.
    pub trial_stop_offset_samples: Option<i64>,

    /// Length of every window in samples.
    ///
    /// Default: `1280` (5 s at 256 Hz).
    pub window_size_samples: i64,

    /// Distance between consecutive window starts within a trial.
    ///
    /// Default: `1280` (non-overlapping).
    pub window_stride_samples: i64,

    /// Drop trailing samples instead of adding a final window that is
    /// right-aligned to the trial (or recording) end.
    ///
    /// Default: `false`.
    pub drop_last_window: bool,
}

impl Default for WindowingConfig {
    /// Non-overlapping 5 s windows at 256 Hz, keeping the end-aligned window.
    fn default() -> Self {
        Self {
            trial_start_offset_samples: 0,
            trial_stop_offset_samples: None,
            window_size_samples: 1280,
            window_stride_samples: 1280,
            drop_last_window: false,
        }
    }
}

impl WindowingConfig {
    /// Build a configuration from durations in seconds.
    ///
    /// Each duration is converted with `round(seconds × sfreq)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use supercrop::WindowingConfig;
    /// let cfg = WindowingConfig::from_secs(256.0, -0.5, Some(4.0), 2.0, 1.0, true).unwrap();
    /// assert_eq!(cfg.trial_start_offset_samples, -128);
    /// assert_eq!(cfg.trial_stop_offset_samples, Some(1024));
    /// assert_eq!(cfg.window_size_samples, 512);
    /// assert_eq!(cfg.window_stride_samples, 256);
    /// ```
    pub fn from_secs(
        sfreq: f64,
        start_offset_s: f64,
        stop_offset_s: Option<f64>,
        window_size_s: f64,
        window_stride_s: f64,
        drop_last_window: bool,
    ) -> Result<Self> {
        Ok(Self {
            trial_start_offset_samples: secs_to_samples(start_offset_s, sfreq)?,
            trial_stop_offset_samples: stop_offset_s
                .map(|s| secs_to_samples(s, sfreq))
                .transpose()?,
            window_size_samples: secs_to_samples(window_size_s, sfreq)?,
            window_stride_samples: secs_to_samples(window_stride_s, sfreq)?,
            drop_last_window,
        })
    }

    /// Check window size and stride, see [`validate`].
    pub fn validate(&self) -> Result<()> {
        validate(
            self.window_size_samples,
            self.window_stride_samples,
            self.trial_start_offset_samples,
            self.trial_stop_offset_samples,
        )
    }
}

/// Convert a duration in seconds to a (possibly negative) sample count.
pub fn secs_to_samples(seconds: f64, sfreq: f64) -> Result<i64> {
    let samples = (seconds * sfreq).round();
    if !(sfreq.is_finite() && sfreq > 0.0) || !samples.is_finite() {
        return Err(WindowError::InvalidDuration { seconds, sfreq });
    }
    Ok(samples as i64)
}
