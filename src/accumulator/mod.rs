//! Row accumulators for sparse matrix multiplication
//!
//! An accumulator gathers the partial products `a_ik * b_kj` of one output
//! row and then emits that row in CSR order. Two strategies are provided:
//!
//! - [`DenseAccumulator`]: a zeroed buffer as wide as the output, swept left
//!   to right. Work per row is proportional to the number of output columns.
//! - [`SortAccumulator`]: an unsorted list of products that is sorted and
//!   reduced per row. Memory is proportional to the products of the row, so
//!   it is used when the output is too wide for a dense buffer.
//!
//! Both emit exactly the same entries for the same input.

pub mod dense;
pub mod sort;

use num_traits::Num;
use std::ops::AddAssign;

use crate::matrix::SparseMatrixCSR;

pub use dense::DenseAccumulator;
pub use sort::SortAccumulator;

/// Trait for accumulators that handle intermediate products in SpGEMM
pub trait Accumulator<T>
where
    T: Copy + Num + AddAssign,
{
    /// Discard everything accumulated so far
    fn reset(&mut self);

    /// Accumulate a single product into column `col`
    fn accumulate(&mut self, col: usize, val: T);

    /// Append the nonzero entries of the current row, in ascending column
    /// order, to `col_idx` and `values`, leaving the accumulator empty
    ///
    /// Positions whose sum is exactly zero are not emitted.
    fn drain_into(&mut self, col_idx: &mut Vec<usize>, values: &mut Vec<T>);
}

/// Feeds every product of row `a_row` of `A` with `B` into `acc`
///
/// For each stored `(k, a_ik)` of the row, row `k` of `B` is scanned and
/// `a_ik * b_kj` is accumulated at column `j`.
pub fn accumulate_row<T, A>(
    a_row: usize,
    a: &SparseMatrixCSR<T>,
    b: &SparseMatrixCSR<T>,
    acc: &mut A,
) where
    T: Copy + Num + AddAssign,
    A: Accumulator<T> + ?Sized,
{
    for a_idx in a.row_ptr[a_row]..a.row_ptr[a_row + 1] {
        let b_row = a.col_idx[a_idx];
        let a_val = a.values[a_idx];

        for b_idx in b.row_ptr[b_row]..b.row_ptr[b_row + 1] {
            acc.accumulate(b.col_idx[b_idx], a_val * b.values[b_idx]);
        }
    }
}
