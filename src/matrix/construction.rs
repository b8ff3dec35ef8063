//! Building CSR matrices from unsorted coordinate triples

use num_traits::Num;

use crate::error::{Result, SparseError};
use crate::matrix::SparseMatrixCSR;

/// Builds a CSR matrix from parallel arrays of 0-based `(row, col, value)` triples.
///
/// The triples are stable-sorted by row and then column, `row_ptr` is derived
/// from the per-row counts, and each entry is placed through a per-row write
/// cursor seeded from those offsets. Repeated coordinates are kept as separate
/// adjacent entries; call [`SparseMatrixCSR::sum_duplicates`] to merge them.
///
/// # Errors
///
/// Returns [`SparseError::InvalidStructure`] if the arrays differ in length, an
/// index lies outside `n_rows x n_cols`, or the row offsets for `n_rows` rows
/// cannot be allocated.
pub fn from_triplets<T>(
    n_rows: usize,
    n_cols: usize,
    rows: &[usize],
    cols: &[usize],
    values: &[T],
) -> Result<SparseMatrixCSR<T>>
where
    T: Copy + Num,
{
    let nnz = values.len();
    if rows.len() != nnz || cols.len() != nnz {
        return Err(SparseError::InvalidStructure(format!(
            "triplet arrays differ in length: {} rows, {} cols, {} values",
            rows.len(),
            cols.len(),
            nnz
        )));
    }
    if let Some(k) = (0..nnz).find(|&k| rows[k] >= n_rows || cols[k] >= n_cols) {
        return Err(SparseError::InvalidStructure(format!(
            "triplet ({}, {}) outside {}x{}",
            rows[k], cols[k], n_rows, n_cols
        )));
    }

    // Stable: equal coordinates keep their input order
    let mut order: Vec<usize> = (0..nnz).collect();
    order.sort_by(|&a, &b| rows[a].cmp(&rows[b]).then(cols[a].cmp(&cols[b])));

    let mut row_ptr = zeroed_offsets(n_rows)?;
    // row_ptr[i + 1] counts the entries of row i
    for &row in rows {
        row_ptr[row + 1] += 1;
    }
    for i in 0..n_rows {
        row_ptr[i + 1] += row_ptr[i];
    }

    let mut col_idx = vec![0usize; nnz];
    let mut csr_values = vec![T::zero(); nnz];

    // row_ptr[i] doubles as the write cursor of row i
    for &k in &order {
        let row = rows[k];
        let pos = row_ptr[row];
        col_idx[pos] = cols[k];
        csr_values[pos] = values[k];
        row_ptr[row] += 1;
    }

    // Each cursor now sits at the start of the following row
    for i in (1..=n_rows).rev() {
        row_ptr[i] = row_ptr[i - 1];
    }
    row_ptr[0] = 0;

    Ok(SparseMatrixCSR {
        n_rows,
        n_cols,
        row_ptr,
        col_idx,
        values: csr_values,
    })
}

/// Allocates `n_rows + 1` zeroed offsets, failing instead of aborting when the
/// dimension is too large to hold in memory
fn zeroed_offsets(n_rows: usize) -> Result<Vec<usize>> {
    let too_large = || {
        SparseError::InvalidStructure(format!(
            "cannot allocate row offsets for {} rows",
            n_rows
        ))
    };

    let len = n_rows.checked_add(1).ok_or_else(too_large)?;
    let mut offsets = Vec::new();
    offsets.try_reserve_exact(len).map_err(|_| too_large())?;
    offsets.resize(len, 0);
    Ok(offsets)
}
