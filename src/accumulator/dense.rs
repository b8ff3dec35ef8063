//! Dense accumulator implementation for SpGEMM
//!
//! One zeroed slot per output column. Products are added in place and the row
//! is emitted by a left-to-right sweep, which yields ascending columns without
//! sorting. The sweep re-zeroes every slot it emits so the buffer is clean for
//! the next row.

use num_traits::Num;
use std::ops::AddAssign;

use crate::accumulator::Accumulator;

/// Dense accumulator for a single row of sparse matrix multiplication
pub struct DenseAccumulator<T> {
    /// The dense accumulation array, one slot per output column
    values: Vec<T>,

    /// Number of products accumulated since the last drain
    pending: usize,
}

impl<T> DenseAccumulator<T>
where
    T: Copy + Num + AddAssign,
{
    /// Create a new dense accumulator with specified column capacity
    ///
    /// # Arguments
    ///
    /// * `n_cols` - The number of columns in the output matrix (C)
    pub fn new(n_cols: usize) -> Self {
        Self {
            values: vec![T::zero(); n_cols],
            pending: 0,
        }
    }

    /// Width of the accumulator
    pub fn n_cols(&self) -> usize {
        self.values.len()
    }
}

impl<T> Accumulator<T> for DenseAccumulator<T>
where
    T: Copy + Num + AddAssign,
{
    fn reset(&mut self) {
        if self.pending > 0 {
            self.values.iter_mut().for_each(|v| *v = T::zero());
            self.pending = 0;
        }
    }

    fn accumulate(&mut self, col: usize, val: T) {
        self.values[col] += val;
        self.pending += 1;
    }

    fn drain_into(&mut self, col_idx: &mut Vec<usize>, values: &mut Vec<T>) {
        // Nothing was added, every slot is still zero
        if self.pending == 0 {
            return;
        }

        for (col, slot) in self.values.iter_mut().enumerate() {
            if !slot.is_zero() {
                col_idx.push(col);
                values.push(*slot);
                *slot = T::zero();
            }
        }
        self.pending = 0;
    }
}
