//! Scalar trait implementations for the primitive IEEE floats.
//!
//! Floats are only approximately a field: zero checks are exact-equality
//! checks, and callers of the elimination routines get IEEE `inf`/`NaN`
//! where an exact scalar would panic or fail.

#![allow(clippy::float_cmp)]

use crate::traits::{Field, OrderedRing, RealField, Ring};

macro_rules! impl_float_scalar {
    ($t:ty) => {
        impl Ring for $t {
            fn zero() -> Self {
                0.0
            }

            fn one() -> Self {
                1.0
            }

            fn is_zero(&self) -> bool {
                *self == 0.0
            }

            fn is_one(&self) -> bool {
                *self == 1.0
            }

            fn mul_by_scalar(&self, n: i64) -> Self {
                #[allow(clippy::cast_precision_loss)]
                let scale = n as $t;
                self * scale
            }
        }

        impl OrderedRing for $t {
            fn abs(&self) -> Self {
                <$t>::abs(*self)
            }

            fn signum(&self) -> i8 {
                if *self == 0.0 {
                    0
                } else if *self > 0.0 {
                    1
                } else {
                    -1
                }
            }
        }

        impl Field for $t {
            fn inv(&self) -> Option<Self> {
                if *self == 0.0 {
                    None
                } else {
                    Some(self.recip())
                }
            }
        }

        impl RealField for $t {
            fn sqrt(&self) -> Self {
                <$t>::sqrt(*self)
            }
        }
    };
}

impl_float_scalar!(f32);
impl_float_scalar!(f64);
