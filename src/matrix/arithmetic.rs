//! Element-wise addition and subtraction by row-wise sorted merge

use num_traits::Num;

use crate::error::{Result, SparseError};
use crate::matrix::SparseMatrixCSR;

/// Computes `C = A + B`.
///
/// Entries whose sum cancels to zero are still stored, so `C.nnz()` is the
/// size of the union of both sparsity patterns.
///
/// # Errors
///
/// Returns [`SparseError::ShapeMismatch`] if the operands differ in shape.
///
/// # Examples
///
/// ```
/// use sparse_csr::{add_matrices, SparseMatrixCSR};
///
/// let a = SparseMatrixCSR::new(2, 2, vec![0, 1, 1], vec![0], vec![1.0]);
/// let b = SparseMatrixCSR::new(2, 2, vec![0, 2, 2], vec![0, 1], vec![2.0, 4.0]);
///
/// let c = add_matrices(&a, &b).unwrap();
/// assert_eq!(c.col_idx, vec![0, 1]);
/// assert_eq!(c.values, vec![3.0, 4.0]);
/// ```
pub fn add_matrices<T>(
    a: &SparseMatrixCSR<T>,
    b: &SparseMatrixCSR<T>,
) -> Result<SparseMatrixCSR<T>>
where
    T: Copy + Num,
{
    merge_matrices(a, b, "addition", |x, y| x + y, |y| y)
}

/// Computes `C = A - B`.
///
/// Entries present only in `B` are negated. Like [`add_matrices`], exact
/// cancellations are kept as stored zeros.
///
/// # Errors
///
/// Returns [`SparseError::ShapeMismatch`] if the operands differ in shape.
pub fn subtract_matrices<T>(
    a: &SparseMatrixCSR<T>,
    b: &SparseMatrixCSR<T>,
) -> Result<SparseMatrixCSR<T>>
where
    T: Copy + Num,
{
    merge_matrices(a, b, "subtraction", |x, y| x - y, |y| T::zero() - y)
}

/// Two-pointer merge of each pair of rows.
///
/// `both` combines values stored at the same column, `b_only` maps values
/// present only in `b`. Values present only in `a` are copied unchanged.
fn merge_matrices<T, F, G>(
    a: &SparseMatrixCSR<T>,
    b: &SparseMatrixCSR<T>,
    op: &'static str,
    both: F,
    b_only: G,
) -> Result<SparseMatrixCSR<T>>
where
    T: Copy + Num,
    F: Fn(T, T) -> T,
    G: Fn(T) -> T,
{
    if a.shape() != b.shape() {
        return Err(SparseError::ShapeMismatch {
            op,
            lhs: a.shape(),
            rhs: b.shape(),
        });
    }

    let n_rows = a.n_rows;
    let capacity = a.nnz() + b.nnz();

    let mut row_ptr = Vec::with_capacity(n_rows + 1);
    let mut col_idx = Vec::with_capacity(capacity);
    let mut values = Vec::with_capacity(capacity);
    row_ptr.push(0);

    for i in 0..n_rows {
        let (mut pa, end_a) = (a.row_ptr[i], a.row_ptr[i + 1]);
        let (mut pb, end_b) = (b.row_ptr[i], b.row_ptr[i + 1]);

        while pa < end_a && pb < end_b {
            let col_a = a.col_idx[pa];
            let col_b = b.col_idx[pb];

            if col_a < col_b {
                col_idx.push(col_a);
                values.push(a.values[pa]);
                pa += 1;
            } else if col_b < col_a {
                col_idx.push(col_b);
                values.push(b_only(b.values[pb]));
                pb += 1;
            } else {
                col_idx.push(col_a);
                values.push(both(a.values[pa], b.values[pb]));
                pa += 1;
                pb += 1;
            }
        }

        col_idx.extend_from_slice(&a.col_idx[pa..end_a]);
        values.extend_from_slice(&a.values[pa..end_a]);

        col_idx.extend_from_slice(&b.col_idx[pb..end_b]);
        values.extend(b.values[pb..end_b].iter().map(|&v| b_only(v)));

        row_ptr.push(col_idx.len());
    }

    log::debug!(
        "{}: {}x{} with nnz {} and {} -> nnz {}",
        op,
        n_rows,
        a.n_cols,
        a.nnz(),
        b.nnz(),
        col_idx.len()
    );

    Ok(SparseMatrixCSR {
        n_rows,
        n_cols: a.n_cols,
        row_ptr,
        col_idx,
        values,
    })
}
