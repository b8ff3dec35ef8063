//! Conversions between `SparseMatrixCSR` and `sprs`

use num_traits::Num;
use sprs::CsMat;

use crate::error::Result;
use crate::matrix::SparseMatrixCSR;

/// Converts our CSR matrix to a `sprs` CSR `CsMat`
///
/// # Errors
///
/// `sprs` requires strictly ascending columns per row, so matrices with
/// unsorted or repeated columns are rejected with
/// [`SparseError::InvalidStructure`](crate::SparseError::InvalidStructure).
pub fn to_sprs_csr<T>(matrix: &SparseMatrixCSR<T>) -> Result<CsMat<T>>
where
    T: Copy + Num + Default,
{
    matrix.check_structure()?;

    Ok(CsMat::new(
        (matrix.n_rows, matrix.n_cols),
        matrix.row_ptr.clone(),
        matrix.col_idx.clone(),
        matrix.values.clone(),
    ))
}

/// Converts a `sprs` matrix to our CSR format, converting CSC input first
pub fn from_sprs_csr<T>(matrix: CsMat<T>) -> SparseMatrixCSR<T>
where
    T: Copy + Num + Default,
{
    let matrix = if matrix.is_csr() {
        matrix
    } else {
        matrix.to_csr()
    };

    let (n_rows, n_cols) = matrix.shape();
    let (indptr, indices, data) = matrix.into_raw_storage();

    SparseMatrixCSR::new(n_rows, n_cols, indptr, indices, data)
}
