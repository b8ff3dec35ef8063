//! Reading matrices from text and dumping them for inspection

pub mod diagnostic;
pub mod matrix_market;

pub use diagnostic::{print_matrix, write_matrix};
pub use matrix_market::{
    parse_matrix_market, read_matrix_market, DuplicatePolicy, MatrixMarketReader, ReaderOptions,
};
