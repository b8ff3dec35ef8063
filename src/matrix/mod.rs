// Matrix data structures and operations

pub mod arithmetic;
pub mod config;
pub mod construction;
pub mod csr;
pub mod spgemm;
pub mod transpose;

pub use arithmetic::{add_matrices, subtract_matrices};
pub use config::{AccumulatorKind, SpgemmConfig};
pub use construction::from_triplets;
pub use csr::SparseMatrixCSR;
pub use spgemm::{multiply_matrices, multiply_matrices_with};
pub use transpose::transpose_matrix;
