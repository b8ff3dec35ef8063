//! Sort-based accumulator implementation for SpGEMM
//!
//! Collects products in an unsorted list, then stable-sorts by column and sums
//! runs of equal columns. Used for very wide outputs where a dense buffer per
//! row would cost more than the products themselves.

use num_traits::Num;
use std::ops::AddAssign;

use crate::accumulator::Accumulator;

/// Sort-based accumulator for a single row of sparse matrix multiplication
pub struct SortAccumulator<T> {
    /// Unsorted `(column, product)` pairs of the current row
    entries: Vec<(usize, T)>,
}

impl<T> SortAccumulator<T>
where
    T: Copy + Num + AddAssign,
{
    /// Create a new sort-based accumulator
    ///
    /// # Arguments
    ///
    /// * `initial_capacity` - Initial capacity for the temporary storage
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(initial_capacity),
        }
    }
}

impl<T> Accumulator<T> for SortAccumulator<T>
where
    T: Copy + Num + AddAssign,
{
    fn reset(&mut self) {
        self.entries.clear();
    }

    fn accumulate(&mut self, col: usize, val: T) {
        self.entries.push((col, val));
    }

    fn drain_into(&mut self, col_idx: &mut Vec<usize>, values: &mut Vec<T>) {
        // Stable, so equal columns are summed in the order they arrived
        self.entries.sort_by_key(|&(col, _)| col);

        let mut iter = self.entries.drain(..);
        if let Some((mut current_col, mut current_val)) = iter.next() {
            for (col, val) in iter {
                if col == current_col {
                    current_val += val;
                } else {
                    if !current_val.is_zero() {
                        col_idx.push(current_col);
                        values.push(current_val);
                    }
                    current_col = col;
                    current_val = val;
                }
            }
            if !current_val.is_zero() {
                col_idx.push(current_col);
                values.push(current_val);
            }
        }
    }
}
