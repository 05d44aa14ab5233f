/// Shared helpers for windowing tests.
use supercrop::{Event, LabelMapping, WindowTable, WindowingConfig};

#[allow(unused)]
/// Motor-imagery style mapping used across tests.
pub fn mi_mapping() -> LabelMapping {
    LabelMapping::from([
        ("left_hand".to_string(), 0),
        ("right_hand".to_string(), 1),
        ("feet".to_string(), 2),
        ("tongue".to_string(), 3),
    ])
}

#[allow(unused)]
/// `n` trials, `spacing` samples apart starting at `first`, labels cycling
/// through the four motor-imagery classes.
pub fn mi_events(n: usize, first: i64, spacing: i64) -> Vec<Event> {
    const CLASSES: [&str; 4] = ["left_hand", "right_hand", "feet", "tongue"];
    (0..n)
        .map(|i| Event::new(first + i as i64 * spacing, CLASSES[i % 4]))
        .collect()
}

#[allow(unused)]
/// Event-anchored config in samples.
pub fn event_cfg(start: i64, stop: i64, size: i64, stride: i64, drop_last: bool) -> WindowingConfig {
    WindowingConfig {
        trial_start_offset_samples: start,
        trial_stop_offset_samples: Some(stop),
        window_size_samples: size,
        window_stride_samples: stride,
        drop_last_window: drop_last,
    }
}

#[allow(unused)]
/// Every window has the configured length and in-trial indices count up from 0.
pub fn assert_table_invariants(table: &WindowTable) {
    let size = table.window_size();
    let mut prev: Option<(usize, usize)> = None;
    for (i, rec) in table.iter().enumerate() {
        assert_eq!(rec.stop - rec.start, size, "window {i}: length");
        assert!(rec.start >= 0, "window {i}: negative start {}", rec.start);
        match prev {
            Some((trial, w)) if trial == rec.trial_index => {
                assert_eq!(rec.window_in_trial, w + 1, "window {i}: index gap");
            }
            _ => assert_eq!(rec.window_in_trial, 0, "window {i}: first index in trial"),
        }
        prev = Some((rec.trial_index, rec.window_in_trial));
    }
}
