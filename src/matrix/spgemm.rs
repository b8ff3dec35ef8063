//! Sparse general matrix-matrix multiplication (SpGEMM)
//!
//! Row-by-row "dense accumulate, sparse output": every output row is gathered
//! in an accumulator and appended to the result, so `row_ptr` is known as soon
//! as the row is done. The result vectors grow geometrically as rows are
//! appended.

use num_traits::Num;
use std::ops::AddAssign;
use std::time::Instant;

use crate::accumulator::{accumulate_row, Accumulator, DenseAccumulator, SortAccumulator};
use crate::error::{Result, SparseError};
use crate::matrix::config::{AccumulatorKind, SpgemmConfig};
use crate::matrix::SparseMatrixCSR;

/// Computes `C = A × B` with the default [`SpgemmConfig`].
///
/// Positions whose accumulated value is exactly zero are not stored.
///
/// # Errors
///
/// Returns [`SparseError::ShapeMismatch`] if `A.n_cols != B.n_rows`.
///
/// # Examples
///
/// ```
/// use sparse_csr::{multiply_matrices, SparseMatrixCSR};
///
/// // A = [1 2; 0 3], B = [4 5; 6 7]
/// let a = SparseMatrixCSR::new(2, 2, vec![0, 2, 3], vec![0, 1, 1], vec![1.0, 2.0, 3.0]);
/// let b = SparseMatrixCSR::new(2, 2, vec![0, 2, 4], vec![0, 1, 0, 1], vec![4.0, 5.0, 6.0, 7.0]);
///
/// let c = multiply_matrices(&a, &b).unwrap();
/// assert_eq!(c.values, vec![16.0, 19.0, 18.0, 21.0]);
/// ```
pub fn multiply_matrices<T>(
    a: &SparseMatrixCSR<T>,
    b: &SparseMatrixCSR<T>,
) -> Result<SparseMatrixCSR<T>>
where
    T: Copy + Num + AddAssign,
{
    multiply_matrices_with(a, b, &SpgemmConfig::default())
}

/// Computes `C = A × B`, choosing the row accumulator from `config`.
pub fn multiply_matrices_with<T>(
    a: &SparseMatrixCSR<T>,
    b: &SparseMatrixCSR<T>,
    config: &SpgemmConfig,
) -> Result<SparseMatrixCSR<T>>
where
    T: Copy + Num + AddAssign,
{
    if a.n_cols != b.n_rows {
        return Err(SparseError::ShapeMismatch {
            op: "multiplication",
            lhs: a.shape(),
            rhs: b.shape(),
        });
    }

    let start = Instant::now();
    let kind = config.accumulator_for(b.n_cols);

    let c = match kind {
        AccumulatorKind::Dense => multiply_rows(a, b, DenseAccumulator::new(b.n_cols)),
        AccumulatorKind::Sort => {
            let capacity = std::cmp::min(b.nnz(), 1024);
            multiply_rows(a, b, SortAccumulator::new(capacity))
        }
    };

    log::debug!(
        "multiplication: {}x{} by {}x{} -> nnz {} ({:?} accumulator, {:?})",
        a.n_rows,
        a.n_cols,
        b.n_rows,
        b.n_cols,
        c.nnz(),
        kind,
        start.elapsed()
    );

    Ok(c)
}

fn multiply_rows<T, A>(
    a: &SparseMatrixCSR<T>,
    b: &SparseMatrixCSR<T>,
    mut acc: A,
) -> SparseMatrixCSR<T>
where
    T: Copy + Num + AddAssign,
    A: Accumulator<T>,
{
    let n_rows = a.n_rows;

    let mut row_ptr = Vec::with_capacity(n_rows + 1);
    let mut col_idx = Vec::new();
    let mut values = Vec::new();
    row_ptr.push(0);

    acc.reset();
    for i in 0..n_rows {
        accumulate_row(i, a, b, &mut acc);
        acc.drain_into(&mut col_idx, &mut values);
        row_ptr.push(col_idx.len());
    }

    SparseMatrixCSR {
        n_rows,
        n_cols: b.n_cols,
        row_ptr,
        col_idx,
        values,
    }
}
