//! The field of rational numbers Q.
//!
//! Rationals are exact, so elimination over `Q` is free of rounding:
//! properties like inverse round-trips and LDU reconstruction hold with
//! equality rather than within a tolerance.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use dashu::base::{Abs, Inverse, ParseError, Signed as DashuSigned};
use dashu::integer::IBig;
use dashu::rational::RBig;

use crate::traits::{Field, OrderedRing, Ring};

/// An arbitrary precision rational number.
///
/// Rationals are always stored in lowest terms with a positive denominator.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Q(RBig);

impl Q {
    /// Creates a new rational from numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(numerator: i64, denominator: i64) -> Self {
        assert!(denominator != 0, "denominator cannot be zero");
        let (n, d) = if denominator < 0 {
            (-numerator, denominator.unsigned_abs())
        } else {
            (numerator, denominator.unsigned_abs())
        };
        Self(RBig::from_parts(IBig::from(n), d.into()))
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: i64) -> Self {
        Self(RBig::from(n))
    }

    /// Returns true if this rational is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.0.denominator().is_one()
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Panics
    ///
    /// Panics if the rational is zero.
    #[must_use]
    pub fn recip(&self) -> Self {
        assert!(!self.0.is_zero(), "cannot take reciprocal of zero");
        Self(self.0.clone().inv())
    }

    /// Returns the inner `dashu::RBig`.
    #[must_use]
    pub fn into_inner(self) -> RBig {
        self.0
    }

    /// Returns a reference to the inner `dashu::RBig`.
    #[must_use]
    pub fn as_inner(&self) -> &RBig {
        &self.0
    }
}

impl Ring for Q {
    fn zero() -> Self {
        Self(RBig::ZERO)
    }

    fn one() -> Self {
        Self(RBig::ONE)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }
}

impl OrderedRing for Q {
    fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    fn signum(&self) -> i8 {
        if self.0.is_zero() {
            0
        } else if DashuSigned::is_positive(&self.0) {
            1
        } else {
            -1
        }
    }
}

impl Field for Q {
    fn inv(&self) -> Option<Self> {
        if self.0.is_zero() {
            None
        } else {
            Some(self.recip())
        }
    }
}

impl num_traits::Zero for Q {
    fn zero() -> Self {
        Self(RBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl num_traits::One for Q {
    fn one() -> Self {
        Self(RBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }
}

impl Add for Q {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Q {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Q {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Div for Q {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self(self.0 / rhs.0)
    }
}

impl Neg for Q {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Q {
    fn from(n: i64) -> Self {
        Self::from_integer(n)
    }
}

impl From<i32> for Q {
    fn from(n: i32) -> Self {
        Self::from_integer(i64::from(n))
    }
}

impl fmt::Debug for Q {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q({})", self.0)
    }
}

impl fmt::Display for Q {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.0.numerator())
        } else {
            write!(f, "{}/{}", self.0.numerator(), self.0.denominator())
        }
    }
}

impl FromStr for Q {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(RBig::from_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_ops() {
        let a = Q::new(1, 2);
        let b = Q::new(1, 3);

        // 1/2 + 1/3 = 5/6
        assert_eq!(a.clone() + b.clone(), Q::new(5, 6));

        // 1/2 * 1/3 = 1/6
        assert_eq!(a.clone() * b.clone(), Q::new(1, 6));

        // (1/2) / (1/3) = 3/2
        assert_eq!(a / b, Q::new(3, 2));
    }

    #[test]
    fn test_reduction() {
        // 4/6 should reduce to 2/3
        assert_eq!(Q::new(4, 6), Q::new(2, 3));
    }

    #[test]
    fn test_negative_denominator() {
        assert_eq!(Q::new(1, -2), Q::new(-1, 2));
    }

    #[test]
    fn test_inverse() {
        let a = Q::new(3, 5);
        let inv = a.clone().inv().unwrap();
        assert!((a * inv).is_one());
        assert_eq!(Q::zero().inv(), None);
    }

    #[test]
    fn test_display_parse_round_trip() {
        for q in [Q::from_integer(3), Q::new(-2, 3), Q::zero()] {
            let text = q.to_string();
            assert_eq!(text.parse::<Q>().unwrap(), q);
        }
        assert_eq!(Q::new(2, 3).to_string(), "2/3");
        assert_eq!(Q::from_integer(-7).to_string(), "-7");
    }
}
