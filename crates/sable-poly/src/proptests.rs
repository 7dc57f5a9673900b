//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::dense::DensePoly;
    use sable_rings::Q;

    // Strategy for generating small rational coefficients
    fn small_coeff() -> impl Strategy<Value = Q> {
        (-100i64..100i64).prop_map(Q::from_integer)
    }

    // Strategy for generating small polynomials (degree 0-4)
    fn small_poly() -> impl Strategy<Value = DensePoly<Q>> {
        proptest::collection::vec(small_coeff(), 1..=5).prop_map(DensePoly::new)
    }

    proptest! {
        // Polynomial ring axioms

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            let left = a.mul(&b.add(&c));
            let right = a.mul(&b).add(&a.mul(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_sub_self_is_zero(a in small_poly()) {
            prop_assert!(a.sub(&a).is_zero());
        }

        #[test]
        fn poly_eval_is_a_ring_homomorphism(a in small_poly(), b in small_poly(), x in small_coeff()) {
            prop_assert_eq!(a.add(&b).eval(&x), a.eval(&x) + b.eval(&x));
            prop_assert_eq!(a.mul(&b).eval(&x), a.eval(&x) * b.eval(&x));
        }

        #[test]
        fn poly_set_coeff_then_read_back(a in small_poly(), i in 0usize..8, c in small_coeff()) {
            let mut p = a;
            p.set_coeff(i, c.clone());
            prop_assert_eq!(p.coeff(i), c);
        }

        #[test]
        fn poly_degree_of_product_adds(a in small_poly(), b in small_poly()) {
            prop_assume!(!a.is_zero() && !b.is_zero());
            // Over an integral domain leading coefficients cannot cancel
            prop_assert_eq!(a.mul(&b).degree(), a.degree() + b.degree());
        }
    }
}
