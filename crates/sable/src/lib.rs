//! # Sable
//!
//! A dense linear-algebra kernel for small-to-moderate matrices.
//!
//! Sable provides an owned, row-major matrix container over a generic
//! scalar ring, together with elimination-based algorithms where
//! correctness and algorithmic clarity matter more than cache-tuned
//! throughput.
//!
//! ## Features
//!
//! - **Generic scalars**: exact rationals (`Q`) or IEEE floats
//! - **Gauss-Jordan elimination**: in-place reduction to reduced
//!   row-echelon form, restartable per step
//! - **Triangular factorizations**: LU and LDU without permutations
//! - **Derived operations**: determinant, inverse, trace, norms,
//!   Householder reflectors, companion matrices
//!
//! ## Quick Start
//!
//! ```rust
//! use sable::prelude::*;
//!
//! let mut m = Matrix::from_rows(vec![
//!     vec![Q::from_integer(2), Q::from_integer(1), Q::from_integer(5)],
//!     vec![Q::from_integer(1), Q::from_integer(3), Q::from_integer(10)],
//! ]);
//! eliminate(&mut m).unwrap();
//! assert_eq!(m[(0, 2)], Q::from_integer(1));
//! assert_eq!(m[(1, 2)], Q::from_integer(3));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use sable_linalg as linalg;
pub use sable_poly as poly;
pub use sable_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use sable_linalg::elimination::{back_substitute, eliminate};
    pub use sable_linalg::{
        companion_matrix, det, householder_matrix, inverse, ldu, lu, norm1, norm_frob, norm_inf,
        trace, Ldu, LinalgError, Lu, Matrix,
    };
    pub use sable_poly::DensePoly;
    pub use sable_rings::{Field, OrderedRing, RealField, Ring, Q};
}
