//! Plain-text dump of the three CSR arrays

use std::fmt::Display;
use std::io::{self, Write};

use num_traits::Num;

use crate::matrix::SparseMatrixCSR;

/// Writes the entry count, `row_ptr`, `col_idx` and the values (4 decimals).
///
/// ```text
/// Number of non-zeros: 3
/// Row Pointer: 0 1 2 3
/// Column Index: 0 1 0
/// Values: 5.0000 3.0000 2.0000
/// ```
///
/// Every listed item is followed by a single space.
pub fn write_matrix<W, T>(out: &mut W, matrix: &SparseMatrixCSR<T>) -> io::Result<()>
where
    W: Write + ?Sized,
    T: Copy + Num + Display,
{
    writeln!(out, "Number of non-zeros: {}", matrix.nnz())?;

    write!(out, "Row Pointer: ")?;
    for ptr in &matrix.row_ptr {
        write!(out, "{} ", ptr)?;
    }

    write!(out, "\nColumn Index: ")?;
    for col in &matrix.col_idx {
        write!(out, "{} ", col)?;
    }

    write!(out, "\nValues: ")?;
    for val in &matrix.values {
        write!(out, "{:.4} ", val)?;
    }

    writeln!(out)
}

/// [`write_matrix`] to standard output
pub fn print_matrix<T>(matrix: &SparseMatrixCSR<T>) -> io::Result<()>
where
    T: Copy + Num + Display,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_matrix(&mut out, matrix)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_matrix() {
        let m = SparseMatrixCSR::new(3, 3, vec![0, 1, 2, 3], vec![0, 1, 0], vec![5.0, 3.0, 2.0]);

        let mut out = Vec::new();
        write_matrix(&mut out, &m).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Number of non-zeros: 3\n\
             Row Pointer: 0 1 2 3 \n\
             Column Index: 0 1 0 \n\
             Values: 5.0000 3.0000 2.0000 \n"
        );
    }

    #[test]
    fn test_write_empty_matrix() {
        let m = SparseMatrixCSR::<f64>::zeros(2, 2);

        let mut out = Vec::new();
        write_matrix(&mut out, &m).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Number of non-zeros: 0\nRow Pointer: 0 0 0 \nColumn Index: \nValues: \n"
        );
    }

    #[test]
    fn test_negative_values_rounded() {
        let m = SparseMatrixCSR::new(1, 1, vec![0, 1], vec![0], vec![-1.0 / 3.0]);

        let mut out = Vec::new();
        write_matrix(&mut out, &m).unwrap();

        assert!(String::from_utf8(out).unwrap().ends_with("Values: -0.3333 \n"));
    }
}
