//! Transpose by counting sort over column indices

use num_traits::Num;

use crate::matrix::SparseMatrixCSR;

/// Returns `Aᵗ` as a new CSR matrix.
///
/// Row `j` of the result collects the entries of column `j` of `A`. Source
/// rows are visited in order and each entry goes to the next free slot of its
/// destination row, so the result's columns come out ascending without a sort.
pub fn transpose_matrix<T>(a: &SparseMatrixCSR<T>) -> SparseMatrixCSR<T>
where
    T: Copy + Num,
{
    let n_rows = a.n_cols;
    let nnz = a.nnz();

    // row_ptr[j + 1] counts the entries of source column j
    let mut row_ptr = vec![0usize; n_rows + 1];
    for &col in &a.col_idx {
        row_ptr[col + 1] += 1;
    }
    for j in 0..n_rows {
        row_ptr[j + 1] += row_ptr[j];
    }

    let mut col_idx = vec![0usize; nnz];
    let mut values = vec![T::zero(); nnz];

    // row_ptr[j] doubles as the write cursor of destination row j
    for i in 0..a.n_rows {
        for k in a.row_ptr[i]..a.row_ptr[i + 1] {
            let dest_row = a.col_idx[k];
            let dest = row_ptr[dest_row];
            col_idx[dest] = i;
            values[dest] = a.values[k];
            row_ptr[dest_row] += 1;
        }
    }

    // Each cursor now sits at the start of the following row
    for j in (1..=n_rows).rev() {
        row_ptr[j] = row_ptr[j - 1];
    }
    row_ptr[0] = 0;

    SparseMatrixCSR {
        n_rows,
        n_cols: a.n_rows,
        row_ptr,
        col_idx,
        values,
    }
}
