//! Window extraction.
//!
//! Slices continuous [C, T] data at the sample ranges of a [`WindowTable`].
//! Windows may overlap, so every window gets its own copy in
//! [`extract_windows`]; [`WindowedRecording`] hands out views instead.
use ndarray::{s, Array2, Array3, ArrayView2};

use crate::error::{Result, WindowError};
use crate::table::{WindowRecord, WindowTable};

fn check_range(index: usize, rec: &WindowRecord, size: i64, n_times: usize) -> Result<()> {
    let out_of_range = WindowError::WindowOutOfRange {
        index,
        start: rec.start,
        stop: rec.stop,
        n_times,
    };
    let Some(end) = rec.start.checked_add(size).map(|e| e.max(rec.stop)) else {
        return Err(out_of_range);
    };
    if rec.start < 0 || rec.stop < rec.start || end as u64 > n_times as u64 {
        return Err(out_of_range);
    }
    Ok(())
}

/// Copy every window of `table` out of `data` ([C, T]) into [W, C, window_size].
pub fn extract_windows(data: &Array2<f32>, table: &WindowTable) -> Result<Array3<f32>> {
    let (n_ch, n_t) = data.dim();
    let size = table.window_size().max(0) as usize;

    let mut out = Array3::<f32>::zeros((table.len(), n_ch, size));
    for (w, rec) in table.iter().enumerate() {
        check_range(w, rec, table.window_size(), n_t)?;
        let start = rec.start as usize;
        out.slice_mut(s![w, .., ..])
            .assign(&data.slice(s![.., start..start + size]));
    }
    Ok(out)
}

/// A recording paired with its window table, indexable like a dataset.
///
/// `get(i)` returns `(x, y, record)`: the [C, window_size] view of window `i`,
/// its integer target, and the full boundary record.
#[derive(Debug, Clone)]
pub struct WindowedRecording {
    data: Array2<f32>,
    table: WindowTable,
}

impl WindowedRecording {
    /// Pair `data` ([C, T]) with `table`, checking every window lies inside it.
    pub fn new(data: Array2<f32>, table: WindowTable) -> Result<Self> {
        let n_t = data.ncols();
        for (w, rec) in table.iter().enumerate() {
            check_range(w, rec, table.window_size(), n_t)?;
        }
        Ok(Self { data, table })
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn table(&self) -> &WindowTable {
        &self.table
    }

    pub fn n_channels(&self) -> usize {
        self.data.nrows()
    }

    pub fn get(&self, index: usize) -> Option<(ArrayView2<'_, f32>, i64, &WindowRecord)> {
        let rec = self.table.get(index)?;
        let x = self
            .data
            .slice(s![.., rec.start as usize..rec.stop as usize]);
        Some((x, rec.target, rec))
    }

    pub fn iter(&self) -> impl Iterator<Item = (ArrayView2<'_, f32>, i64, &WindowRecord)> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }
}
