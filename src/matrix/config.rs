//! Configuration for sparse matrix multiplication

/// Output widths up to this many columns use the dense accumulator.
///
/// 16M columns is a 128 MiB `f64` buffer, beyond which the per-row sweep costs
/// more than sorting the products of typical rows.
pub const DEFAULT_DENSE_ACCUM_THRESHOLD: usize = 1 << 24;

/// Which accumulator a multiplication uses for its output rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccumulatorKind {
    /// Zeroed buffer as wide as the output, swept per row
    Dense,
    /// Sorted list of products, reduced per row
    Sort,
}

/// Configuration for [`multiply_matrices_with`](crate::multiply_matrices_with)
#[derive(Debug, Clone)]
pub struct SpgemmConfig {
    /// Largest output width that is still multiplied with a dense accumulator
    pub dense_accum_threshold: usize,
}

impl Default for SpgemmConfig {
    fn default() -> Self {
        Self {
            dense_accum_threshold: DEFAULT_DENSE_ACCUM_THRESHOLD,
        }
    }
}

impl SpgemmConfig {
    /// Create a config with the given dense accumulator threshold
    pub fn with_dense_threshold(dense_accum_threshold: usize) -> Self {
        Self {
            dense_accum_threshold,
        }
    }

    /// Pick the accumulator for an output with `n_cols` columns
    pub fn accumulator_for(&self, n_cols: usize) -> AccumulatorKind {
        if n_cols <= self.dense_accum_threshold {
            AccumulatorKind::Dense
        } else {
            AccumulatorKind::Sort
        }
    }
}
