//! Algebraic structure traits.
//!
//! This module defines the scalar traits that parameterize the matrix
//! container and its algorithms. A generic bound on these traits makes an
//! invalid scalar instantiation fail at build time with a clear diagnostic.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A ring is a set with addition and multiplication operations.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative with identity `one()`
/// - Multiplication distributes over addition
/// - Every element has an additive inverse (`neg`)
///
/// Unlike a strict algebraic ring, `PartialEq` rather than `Eq` is
/// required so that IEEE floats qualify.
pub trait Ring:
    Clone + PartialEq + Debug + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// Computes self + self + ... (n times).
    fn mul_by_scalar(&self, n: i64) -> Self {
        if n == 0 {
            return Self::zero();
        }

        let mut result = self.clone();
        let abs_n = n.unsigned_abs();

        for _ in 1..abs_n {
            result = result + self.clone();
        }

        if n < 0 {
            -result
        } else {
            result
        }
    }
}

/// A ring with a compatible order, supporting absolute values.
///
/// `PartialOrd` rather than `Ord` so that floats qualify; the matrix
/// norms only ever compare non-negative sums.
pub trait OrderedRing: Ring + PartialOrd {
    /// Returns the absolute value.
    fn abs(&self) -> Self;

    /// Returns the sign: -1, 0, or 1.
    fn signum(&self) -> i8;
}

/// A field is a ring where every non-zero element has a multiplicative
/// inverse.
pub trait Field: Ring + Div<Output = Self> {
    /// Computes the multiplicative inverse.
    ///
    /// Returns `None` if the element is zero.
    fn inv(&self) -> Option<Self>;

    /// Divides by another element.
    ///
    /// # Panics
    ///
    /// Panics if `other` is zero.
    fn field_div(&self, other: &Self) -> Self {
        self.clone() * other.inv().expect("division by zero")
    }
}

/// An ordered field with square roots, i.e. a model of the reals.
pub trait RealField: Field + OrderedRing {
    /// Returns the non-negative square root.
    fn sqrt(&self) -> Self;
}
