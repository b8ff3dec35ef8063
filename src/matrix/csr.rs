//! Compressed Sparse Row (CSR) matrix format implementation

use std::fmt;

use ndarray::Array2;
use num_traits::Num;

use crate::error::{Result, SparseError};

/// A sparse matrix in Compressed Sparse Row (CSR) format
///
/// The CSR format stores a sparse matrix using three arrays:
/// - row_ptr: Array of size n_rows + 1 containing indices into col_idx and values arrays
/// - col_idx: Array of size nnz containing column indices of non-zero elements
/// - values: Array of size nnz containing the non-zero values
///
/// Every operation in this crate expects the column indices of each row to be
/// strictly ascending and produces matrices that keep that property. A matrix
/// is owned outright: operations borrow their operands and hand back a new
/// matrix.
#[derive(Clone, PartialEq)]
pub struct SparseMatrixCSR<T> {
    /// Number of rows in the matrix
    pub n_rows: usize,

    /// Number of columns in the matrix
    pub n_cols: usize,

    /// Row pointers (size: n_rows + 1)
    /// row_ptr[i] is the index in col_idx and values where row i starts
    /// row_ptr[n_rows] is equal to nnz
    pub row_ptr: Vec<usize>,

    /// Column indices (size: nnz)
    pub col_idx: Vec<usize>,

    /// Stored values (size: nnz)
    pub values: Vec<T>,
}

impl<T> SparseMatrixCSR<T>
where
    T: Copy + Num,
{
    /// Creates a new CSR matrix with the given dimensions and data
    ///
    /// # Arguments
    ///
    /// * `n_rows` - Number of rows
    /// * `n_cols` - Number of columns
    /// * `row_ptr` - Row pointers
    /// * `col_idx` - Column indices
    /// * `values` - Stored values
    ///
    /// # Panics
    ///
    /// Panics if the input arrays are inconsistent:
    /// - row_ptr.len() must be n_rows + 1
    /// - col_idx.len() must equal values.len()
    /// - row_ptr[n_rows] must equal col_idx.len()
    pub fn new(
        n_rows: usize,
        n_cols: usize,
        row_ptr: Vec<usize>,
        col_idx: Vec<usize>,
        values: Vec<T>,
    ) -> Self {
        assert_eq!(row_ptr.len(), n_rows + 1, "row_ptr.len() must be n_rows + 1");
        assert_eq!(
            col_idx.len(),
            values.len(),
            "col_idx.len() must equal values.len()"
        );
        assert_eq!(
            row_ptr[n_rows],
            col_idx.len(),
            "row_ptr[n_rows] must equal col_idx.len()"
        );

        for &col in &col_idx {
            assert!(
                col < n_cols,
                "Column index {} out of bounds (n_cols = {})",
                col,
                n_cols
            );
        }

        Self {
            n_rows,
            n_cols,
            row_ptr,
            col_idx,
            values,
        }
    }

    /// Fallible counterpart of [`SparseMatrixCSR::new`].
    ///
    /// Checks the offsets and column bounds but not the per-row ordering; use
    /// [`SparseMatrixCSR::check_structure`] for the full invariant.
    pub fn try_new(
        n_rows: usize,
        n_cols: usize,
        row_ptr: Vec<usize>,
        col_idx: Vec<usize>,
        values: Vec<T>,
    ) -> Result<Self> {
        let matrix = Self {
            n_rows,
            n_cols,
            row_ptr,
            col_idx,
            values,
        };
        matrix.check_offsets()?;
        Ok(matrix)
    }

    /// Returns the number of stored elements in the matrix
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Returns `(n_rows, n_cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }

    /// Returns an iterator over the stored elements in row i
    ///
    /// Each item is a tuple (col_idx, value) representing a stored element
    pub fn row_iter(&self, i: usize) -> impl Iterator<Item = (usize, &T)> {
        assert!(i < self.n_rows, "Row index out of bounds");

        let start = self.row_ptr[i];
        let end = self.row_ptr[i + 1];

        self.col_idx[start..end]
            .iter()
            .zip(&self.values[start..end])
            .map(|(&col, val)| (col, val))
    }

    /// Iterates over all stored elements as `(row, col, value)` in row-major order
    pub fn triplets(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        (0..self.n_rows).flat_map(move |i| {
            let start = self.row_ptr[i];
            let end = self.row_ptr[i + 1];
            (start..end).map(move |k| (i, self.col_idx[k], self.values[k]))
        })
    }

    /// Creates an empty matrix with the given dimensions
    pub fn zeros(n_rows: usize, n_cols: usize) -> Self {
        Self {
            n_rows,
            n_cols,
            row_ptr: vec![0; n_rows + 1],
            col_idx: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Creates an identity matrix of the given size
    pub fn identity(n: usize) -> Self {
        Self {
            n_rows: n,
            n_cols: n,
            row_ptr: (0..=n).collect(),
            col_idx: (0..n).collect(),
            values: vec![T::one(); n],
        }
    }

    /// Verifies every CSR invariant, including strictly ascending columns per row
    pub fn check_structure(&self) -> Result<()> {
        self.check_offsets()?;

        for i in 0..self.n_rows {
            let row = &self.col_idx[self.row_ptr[i]..self.row_ptr[i + 1]];
            if let Some(pos) = row.windows(2).position(|w| w[0] >= w[1]) {
                return Err(SparseError::InvalidStructure(format!(
                    "row {} is not strictly ascending at columns {} and {}",
                    i,
                    row[pos],
                    row[pos + 1]
                )));
            }
        }

        Ok(())
    }

    /// Returns `true` if some row stores the same column more than once
    pub fn has_duplicate_entries(&self) -> bool {
        (0..self.n_rows).any(|i| {
            self.col_idx[self.row_ptr[i]..self.row_ptr[i + 1]]
                .windows(2)
                .any(|w| w[0] == w[1])
        })
    }

    /// Returns a copy where adjacent entries sharing a column are summed into one
    ///
    /// Matrices read from Matrix Market keep repeated coordinates next to each
    /// other, so this restores the strictly ascending invariant for them.
    pub fn sum_duplicates(&self) -> Self {
        let mut row_ptr = Vec::with_capacity(self.n_rows + 1);
        let mut col_idx: Vec<usize> = Vec::with_capacity(self.nnz());
        let mut values: Vec<T> = Vec::with_capacity(self.nnz());
        row_ptr.push(0);

        for i in 0..self.n_rows {
            let row_start = col_idx.len();
            for (col, &val) in self.row_iter(i) {
                if col_idx.len() > row_start && col_idx.last() == Some(&col) {
                    let last = values.len() - 1;
                    values[last] = values[last] + val;
                } else {
                    col_idx.push(col);
                    values.push(val);
                }
            }
            row_ptr.push(col_idx.len());
        }

        Self {
            n_rows: self.n_rows,
            n_cols: self.n_cols,
            row_ptr,
            col_idx,
            values,
        }
    }

    /// Expands the matrix into a dense array, summing repeated coordinates
    pub fn to_dense(&self) -> Array2<T> {
        let mut dense = Array2::zeros((self.n_rows, self.n_cols));
        for (i, j, val) in self.triplets() {
            dense[[i, j]] = dense[[i, j]] + val;
        }
        dense
    }

    fn check_offsets(&self) -> Result<()> {
        let invalid = |msg: String| Err(SparseError::InvalidStructure(msg));

        if self.row_ptr.len() != self.n_rows + 1 {
            return invalid(format!(
                "row_ptr has {} entries, expected {}",
                self.row_ptr.len(),
                self.n_rows + 1
            ));
        }
        if self.col_idx.len() != self.values.len() {
            return invalid(format!(
                "col_idx has {} entries but values has {}",
                self.col_idx.len(),
                self.values.len()
            ));
        }
        if self.row_ptr[0] != 0 {
            return invalid(format!("row_ptr[0] is {}, expected 0", self.row_ptr[0]));
        }
        if let Some(i) = self.row_ptr.windows(2).position(|w| w[0] > w[1]) {
            return invalid(format!("row_ptr decreases after row {}", i));
        }
        if self.row_ptr[self.n_rows] != self.col_idx.len() {
            return invalid(format!(
                "row_ptr[n_rows] is {} but nnz is {}",
                self.row_ptr[self.n_rows],
                self.col_idx.len()
            ));
        }
        if let Some(&col) = self.col_idx.iter().find(|&&col| col >= self.n_cols) {
            return invalid(format!(
                "column index {} out of bounds (n_cols = {})",
                col, self.n_cols
            ));
        }

        Ok(())
    }
}

impl<T: fmt::Debug + Copy + Num> fmt::Debug for SparseMatrixCSR<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SparseMatrixCSR {{")?;
        writeln!(f, "  dimensions: {} × {}", self.n_rows, self.n_cols)?;
        writeln!(f, "  nnz: {}", self.nnz())?;

        let max_rows_to_print = 5.min(self.n_rows);

        if max_rows_to_print > 0 {
            writeln!(f, "  content sample:")?;

            for i in 0..max_rows_to_print {
                write!(f, "    row {}: ", i)?;
                let start = self.row_ptr[i];
                let end = self.row_ptr[i + 1];

                if start == end {
                    writeln!(f, "(empty)")?;
                } else {
                    let max_elements = 5.min(end - start);

                    for j in start..(start + max_elements) {
                        write!(f, "({}, {:?}) ", self.col_idx[j], self.values[j])?;
                    }

                    if end - start > max_elements {
                        write!(f, "... ({} more)", end - start - max_elements)?;
                    }

                    writeln!(f)?;
                }
            }

            if self.n_rows > max_rows_to_print {
                writeln!(f, "    ... ({} more rows)", self.n_rows - max_rows_to_print)?;
            }
        }

        write!(f, "}}")
    }
}
