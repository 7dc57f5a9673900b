//! Property-based tests for the matrix algorithms.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::decompose::{ldu, lu};
    use crate::functions::{companion_matrix, det, inverse, norm1, norm_frob, norm_inf, trace};
    use crate::matrix::Matrix;
    use sable_poly::DensePoly;
    use sable_rings::{Q, Ring};

    // Strategy for generating small rational entries
    fn small_q() -> impl Strategy<Value = Q> {
        (-20i64..20).prop_map(Q::from_integer)
    }

    fn nonzero_q() -> impl Strategy<Value = Q> {
        (-20i64..20)
            .prop_filter("entry must be non-zero", |n| *n != 0)
            .prop_map(Q::from_integer)
    }

    // Strategy for matrices with the given dimension ranges
    fn matrix(
        rows: std::ops::Range<usize>,
        cols: std::ops::Range<usize>,
    ) -> impl Strategy<Value = Matrix<Q>> {
        (rows, cols).prop_flat_map(|(r, c)| {
            proptest::collection::vec(proptest::collection::vec(small_q(), c), r)
                .prop_map(Matrix::from_rows)
        })
    }

    // Strategy for square matrices with all leading principal minors
    // non-zero, built as L * D * U with a non-zero diagonal: elimination
    // and the decompositions never hit a zero pivot on these.
    fn well_conditioned(n: usize) -> impl Strategy<Value = Matrix<Q>> {
        (
            proptest::collection::vec(small_q(), n * n),
            proptest::collection::vec(nonzero_q(), n),
            proptest::collection::vec(small_q(), n * n),
        )
            .prop_map(move |(lo, di, up)| {
                let mut l = Matrix::identity(n);
                let mut d = Matrix::zeros(n, n);
                let mut u = Matrix::identity(n);
                for i in 0..n {
                    d[(i, i)] = di[i].clone();
                    for j in 0..n {
                        if i > j {
                            l[(i, j)] = lo[i * n + j].clone();
                        } else if i < j {
                            u[(i, j)] = up[i * n + j].clone();
                        }
                    }
                }
                l.mm(&d).unwrap().mm(&u).unwrap()
            })
    }

    // Strategy for small integer-valued float matrices
    fn float_matrix() -> impl Strategy<Value = Matrix<f64>> {
        (1..5usize, 1..5usize).prop_flat_map(|(r, c)| {
            proptest::collection::vec(
                proptest::collection::vec((-10i64..10).prop_map(|n| n as f64), c),
                r,
            )
            .prop_map(Matrix::from_rows)
        })
    }

    // Strategy for monic polynomials of degree 1..=5
    fn monic_poly() -> impl Strategy<Value = DensePoly<Q>> {
        proptest::collection::vec(small_q(), 1..6).prop_map(|mut coeffs| {
            coeffs.push(Q::from_integer(1));
            DensePoly::new(coeffs)
        })
    }

    fn is_zero_matrix(m: &Matrix<Q>) -> bool {
        (0..m.num_rows()).all(|i| m.row(i).iter().all(Ring::is_zero))
    }

    proptest! {
        #[test]
        fn transpose_is_an_involution(a in matrix(1..5, 1..5)) {
            prop_assert_eq!(a.transpose().transpose(), a);
        }

        #[test]
        fn identity_is_neutral_for_mm(a in (1..5usize).prop_flat_map(|n| matrix(n..n + 1, n..n + 1))) {
            let id = Matrix::identity(a.num_rows());
            prop_assert_eq!(a.mm(&id).unwrap(), a.clone());
            prop_assert_eq!(id.mm(&a).unwrap(), a);
        }

        #[test]
        fn inverse_round_trips(a in (1..4usize).prop_flat_map(well_conditioned)) {
            let mut inv = a.clone();
            inverse(&mut inv).unwrap();
            prop_assert_eq!(inv.mm(&a).unwrap(), Matrix::identity(a.num_rows()));
        }

        #[test]
        fn ldu_reconstructs_the_input(a in (1..4usize).prop_flat_map(well_conditioned)) {
            let f = ldu(&a).unwrap();
            prop_assert_eq!(f.l.mm(&f.d).unwrap().mm(&f.u).unwrap(), a);
        }

        #[test]
        fn lu_reconstructs_the_input(a in (1..4usize).prop_flat_map(well_conditioned)) {
            let f = lu(&a).unwrap();
            prop_assert_eq!(f.l.mm(&f.u).unwrap(), a);
        }

        #[test]
        fn det_is_multiplicative(
            (a, b) in (1..4usize).prop_flat_map(|n| (well_conditioned(n), well_conditioned(n)))
        ) {
            let ab = a.mm(&b).unwrap();
            // The product can still have a zero leading minor; the
            // unguarded LDU would divide by zero on it.
            prop_assume!(lu(&ab).is_ok());
            prop_assert_eq!(det(&ab).unwrap(), det(&a).unwrap() * det(&b).unwrap());
        }

        #[test]
        fn norms_are_non_negative_and_definite(a in matrix(1..5, 1..5)) {
            let zero = Q::from_integer(0);
            prop_assert!(norm1(&a) >= zero);
            prop_assert!(norm_inf(&a) >= zero);
            prop_assert_eq!(norm1(&a) == zero, is_zero_matrix(&a));
            prop_assert_eq!(norm_inf(&a) == zero, is_zero_matrix(&a));
        }

        #[test]
        fn frobenius_norm_is_non_negative_and_definite(a in float_matrix()) {
            let norm = norm_frob(&a);
            prop_assert!(norm >= 0.0);
            let all_zero = (0..a.num_rows()).all(|i| a.row(i).iter().all(|v| *v == 0.0));
            prop_assert_eq!(norm == 0.0, all_zero);
        }

        #[test]
        fn companion_trace_is_negated_second_coefficient(p in monic_poly()) {
            let c = companion_matrix(&p).unwrap();
            let deg = p.degree();
            prop_assert_eq!(trace(&c).unwrap(), -p.coeff(deg - 1));
        }
    }
}
