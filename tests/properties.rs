//! Property-based tests for the algebraic behaviour of the CSR operations
//!
//! Values are small nonzero integers stored as f64, so every sum and product
//! is exact and results can be compared for equality.

use std::collections::BTreeMap;

use proptest::prelude::*;
use sparse_csr::{
    add_matrices, from_triplets, multiply_matrices, multiply_matrices_with, parse_matrix_market,
    subtract_matrices, transpose_matrix, SparseMatrixCSR, SpgemmConfig,
};

// ============================================================================
// Strategies
// ============================================================================

fn nonzero_value() -> impl Strategy<Value = f64> {
    prop_oneof![-9i32..=-1, 1i32..=9].prop_map(f64::from)
}

/// Canonical matrix of the given shape: sorted rows, no repeats, no stored zeros
fn matrix_with_shape(n_rows: usize, n_cols: usize) -> impl Strategy<Value = SparseMatrixCSR<f64>> {
    prop::collection::vec((0..n_rows, 0..n_cols, nonzero_value()), 0..=n_rows * n_cols).prop_map(
        move |entries| {
            let mut unique = BTreeMap::new();
            for (row, col, val) in entries {
                unique.entry((row, col)).or_insert(val);
            }

            let rows: Vec<usize> = unique.keys().map(|&(row, _)| row).collect();
            let cols: Vec<usize> = unique.keys().map(|&(_, col)| col).collect();
            let values: Vec<f64> = unique.values().copied().collect();

            from_triplets(n_rows, n_cols, &rows, &cols, &values).unwrap()
        },
    )
}

fn matrix() -> impl Strategy<Value = SparseMatrixCSR<f64>> {
    (1usize..8, 1usize..8).prop_flat_map(|(n_rows, n_cols)| matrix_with_shape(n_rows, n_cols))
}

fn same_shape_pair() -> impl Strategy<Value = (SparseMatrixCSR<f64>, SparseMatrixCSR<f64>)> {
    (1usize..8, 1usize..8).prop_flat_map(|(n_rows, n_cols)| {
        (
            matrix_with_shape(n_rows, n_cols),
            matrix_with_shape(n_rows, n_cols),
        )
    })
}

fn multipliable_pair() -> impl Strategy<Value = (SparseMatrixCSR<f64>, SparseMatrixCSR<f64>)> {
    (1usize..8, 1usize..8, 1usize..8)
        .prop_flat_map(|(m, k, n)| (matrix_with_shape(m, k), matrix_with_shape(k, n)))
}

fn to_matrix_market(matrix: &SparseMatrixCSR<f64>, reverse: bool) -> String {
    let mut entries: Vec<_> = matrix.triplets().collect();
    if reverse {
        entries.reverse();
    }

    let mut text = format!(
        "%%MatrixMarket matrix coordinate real general\n{} {} {}\n",
        matrix.n_rows,
        matrix.n_cols,
        matrix.nnz()
    );
    for (row, col, val) in entries {
        text.push_str(&format!("{} {} {}\n", row + 1, col + 1, val));
    }
    text
}

// ============================================================================
// Structural validity
// ============================================================================

proptest! {
    /// Property: every operation yields valid CSR with strictly ascending rows
    #[test]
    fn prop_results_are_valid_csr((a, b) in same_shape_pair()) {
        prop_assert!(add_matrices(&a, &b).unwrap().check_structure().is_ok());
        prop_assert!(subtract_matrices(&a, &b).unwrap().check_structure().is_ok());
        prop_assert!(transpose_matrix(&a).check_structure().is_ok());

        let bt = transpose_matrix(&b);
        prop_assert!(multiply_matrices(&a, &bt).unwrap().check_structure().is_ok());
    }

    /// Property: loading is insensitive to the order of lines in the file
    #[test]
    fn prop_loader_canonicalizes(a in matrix(), reverse in any::<bool>()) {
        let text = to_matrix_market(&a, reverse);

        let loaded = parse_matrix_market(text.as_bytes()).unwrap();

        prop_assert!(loaded.check_structure().is_ok());
        prop_assert_eq!(loaded, a);
    }
}

// ============================================================================
// Algebraic properties
// ============================================================================

proptest! {
    /// Property: A + 0 == A
    #[test]
    fn prop_additive_identity(a in matrix()) {
        let zero = SparseMatrixCSR::zeros(a.n_rows, a.n_cols);

        prop_assert_eq!(add_matrices(&a, &zero).unwrap(), a.clone());
        prop_assert_eq!(add_matrices(&zero, &a).unwrap(), a);
    }

    /// Property: A - A keeps A's pattern with every stored value 0.0
    #[test]
    fn prop_subtraction_self_inverse(a in matrix()) {
        let c = subtract_matrices(&a, &a).unwrap();

        prop_assert_eq!(c.nnz(), a.nnz());
        prop_assert_eq!(&c.row_ptr, &a.row_ptr);
        prop_assert_eq!(&c.col_idx, &a.col_idx);
        prop_assert!(c.values.iter().all(|&v| v == 0.0));
    }

    /// Property: addition commutes and agrees with dense arithmetic
    #[test]
    fn prop_addition_matches_dense((a, b) in same_shape_pair()) {
        let ab = add_matrices(&a, &b).unwrap();
        let ba = add_matrices(&b, &a).unwrap();

        prop_assert_eq!(ab.to_dense(), &a.to_dense() + &b.to_dense());
        prop_assert_eq!(ab, ba);
    }

    /// Property: A - B agrees with dense arithmetic
    #[test]
    fn prop_subtraction_matches_dense((a, b) in same_shape_pair()) {
        let c = subtract_matrices(&a, &b).unwrap();
        prop_assert_eq!(c.to_dense(), &a.to_dense() - &b.to_dense());
    }

    /// Property: (Aᵗ)ᵗ == A
    #[test]
    fn prop_transpose_involution(a in matrix()) {
        let t = transpose_matrix(&a);

        prop_assert_eq!(t.shape(), (a.n_cols, a.n_rows));
        prop_assert_eq!(t.nnz(), a.nnz());
        prop_assert_eq!(transpose_matrix(&t), a);
    }

    /// Property: A × I == A and I × A == A
    #[test]
    fn prop_multiplication_identity(a in matrix()) {
        let right = SparseMatrixCSR::identity(a.n_cols);
        let left = SparseMatrixCSR::identity(a.n_rows);

        prop_assert_eq!(multiply_matrices(&a, &right).unwrap(), a.clone());
        prop_assert_eq!(multiply_matrices(&left, &a).unwrap(), a);
    }

    /// Property: A × B agrees with dense multiplication and stores no zeros
    #[test]
    fn prop_multiplication_matches_dense((a, b) in multipliable_pair()) {
        let c = multiply_matrices(&a, &b).unwrap();

        prop_assert_eq!(c.shape(), (a.n_rows, b.n_cols));
        prop_assert_eq!(c.to_dense(), a.to_dense().dot(&b.to_dense()));
        prop_assert!(c.values.iter().all(|&v| v != 0.0));
    }

    /// Property: both accumulators produce identical products
    #[test]
    fn prop_accumulators_agree((a, b) in multipliable_pair()) {
        let dense = multiply_matrices(&a, &b).unwrap();
        let sorted = multiply_matrices_with(&a, &b, &SpgemmConfig::with_dense_threshold(0)).unwrap();

        prop_assert_eq!(dense, sorted);
    }

    /// Property: (A × B)ᵗ == Bᵗ × Aᵗ
    #[test]
    fn prop_transpose_of_product((a, b) in multipliable_pair()) {
        let lhs = transpose_matrix(&multiply_matrices(&a, &b).unwrap());
        let rhs = multiply_matrices(&transpose_matrix(&b), &transpose_matrix(&a)).unwrap();

        prop_assert_eq!(lhs, rhs);
    }
}
