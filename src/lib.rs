//! # sparse-csr: Compressed Sparse Row matrices from Matrix Market files
//!
//! Loads sparse matrices from Matrix Market text into CSR form and implements
//! the four basic structural operations on them. Every operation works on the
//! stored entries only and costs time proportional to the entry count, not to
//! the matrix dimensions.
//!
//! ## Overview
//!
//! - **Loading**: [`read_matrix_market`] parses a file, stable-sorts the
//!   coordinates and derives the row offsets ([`from_triplets`]).
//! - **Addition / subtraction**: [`add_matrices`] and [`subtract_matrices`]
//!   merge each pair of sorted rows. Exact cancellations stay stored as zeros.
//! - **Multiplication**: [`multiply_matrices`] builds each output row in a
//!   dense accumulator and sweeps it into the result.
//! - **Transpose**: [`transpose_matrix`] inverts columns into rows with a
//!   counting sort.
//! - **Inspection**: [`write_matrix`] dumps the three CSR arrays.
//!
//! Operations borrow their operands and return a freshly allocated matrix.
//!
//! ## Usage
//!
//! ```
//! use sparse_csr::{parse_matrix_market, transpose_matrix, multiply_matrices};
//!
//! let text = "%%MatrixMarket matrix coordinate real general\n\
//!             3 3 3\n\
//!             1 1 5.0\n\
//!             2 2 3.0\n\
//!             3 1 2.0\n";
//!
//! let a = parse_matrix_market(text.as_bytes()).unwrap();
//! assert_eq!(a.row_ptr, vec![0, 1, 2, 3]);
//! assert_eq!(a.col_idx, vec![0, 1, 0]);
//!
//! let at = transpose_matrix(&a);
//! let ata = multiply_matrices(&at, &a).unwrap();
//! assert_eq!(ata.shape(), (3, 3));
//! ```

pub mod accumulator;
pub mod error;
pub mod io;
pub mod matrix;
pub mod utils;

// Re-export primary components
pub use accumulator::{Accumulator, DenseAccumulator, SortAccumulator};
pub use error::{ParseErrorKind, Result, SparseError};
pub use io::{
    parse_matrix_market, print_matrix, read_matrix_market, write_matrix, DuplicatePolicy,
    MatrixMarketReader, ReaderOptions,
};
pub use matrix::{
    add_matrices, from_triplets, multiply_matrices, multiply_matrices_with, subtract_matrices,
    transpose_matrix, AccumulatorKind, SparseMatrixCSR, SpgemmConfig,
};
pub use utils::{from_sprs_csr, to_sprs_csr};

/// Version information for the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
