//! Precondition check shared by both windowers.
use crate::error::{Result, WindowError};

/// Reject a non-positive window size or stride.
///
/// Offsets are accepted as given: a stop offset at or before the start offset
/// is not an error, it simply yields no windows.
pub fn validate(
    window_size: i64,
    stride: i64,
    _start_offset: i64,
    _stop_offset: Option<i64>,
) -> Result<()> {
    if window_size <= 0 {
        return Err(WindowError::InvalidWindowParameters(format!(
            "window size has to be larger than 0, got {window_size}"
        )));
    }
    if stride <= 0 {
        return Err(WindowError::InvalidWindowParameters(format!(
            "window stride has to be larger than 0, got {stride}"
        )));
    }
    Ok(())
}
