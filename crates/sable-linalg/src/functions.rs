//! Operations derived from the container and the reduction algorithms:
//! determinant, inverse, trace, norms, and the special-matrix builders.

use sable_poly::DensePoly;
use sable_rings::{Field, OrderedRing, RealField, Ring};

use crate::decompose;
use crate::elimination;
use crate::error::LinalgError;
use crate::matrix::Matrix;

/// Computes the determinant as the product of the LDU pivot diagonal.
///
/// Inherits [`ldu`](decompose::ldu)'s behavior on a zero interior pivot:
/// non-finite values over floats, a panic over exact scalars.
///
/// # Errors
///
/// [`LinalgError::SquareRequired`] for a non-square input.
pub fn det<R: Field>(m: &Matrix<R>) -> Result<R, LinalgError> {
    let f = decompose::ldu(m)?;

    let mut det = R::one();
    for i in 0..m.num_rows() {
        det = det * f.d[(i, i)].clone();
    }
    Ok(det)
}

/// Replaces `m` in place with its inverse.
///
/// Reduces the augmented matrix `[M | I]` to reduced row-echelon form and
/// extracts the right half. `m` is left unmodified on error.
///
/// # Errors
///
/// [`LinalgError::SquareRequired`] for a non-square input;
/// [`LinalgError::StuckPivot`] if the reduction stalls (in particular for
/// singular input).
pub fn inverse<R: Field>(m: &mut Matrix<R>) -> Result<(), LinalgError> {
    if !m.is_square() {
        return Err(LinalgError::SquareRequired);
    }

    let n = m.num_rows();
    let mut aug = Matrix::zeros(n, 2 * n);
    for i in 0..n {
        for j in 0..n {
            aug[(i, j)] = m[(i, j)].clone();
        }
        aug[(i, n + i)] = R::one();
    }

    elimination::eliminate(&mut aug)?;

    for i in 0..n {
        for j in 0..n {
            m[(i, j)] = aug[(i, n + j)].clone();
        }
    }
    Ok(())
}

/// Sums the diagonal entries.
///
/// # Errors
///
/// [`LinalgError::SquareRequired`] for a non-square input.
pub fn trace<R: Ring>(m: &Matrix<R>) -> Result<R, LinalgError> {
    if !m.is_square() {
        return Err(LinalgError::SquareRequired);
    }

    let mut sum = R::zero();
    for i in 0..m.num_rows() {
        sum = sum + m[(i, i)].clone();
    }
    Ok(sum)
}

/// The maximum over columns of the column's absolute-value sum.
#[must_use]
pub fn norm1<R: OrderedRing>(m: &Matrix<R>) -> R {
    let mut best = R::zero();
    for j in 0..m.num_cols() {
        let mut sum = R::zero();
        for i in 0..m.num_rows() {
            sum = sum + m[(i, j)].abs();
        }
        if sum > best {
            best = sum;
        }
    }
    best
}

/// The maximum over rows of the row's absolute-value sum.
#[must_use]
pub fn norm_inf<R: OrderedRing>(m: &Matrix<R>) -> R {
    let mut best = R::zero();
    for i in 0..m.num_rows() {
        let sum = m
            .row(i)
            .iter()
            .fold(R::zero(), |acc, v| acc + v.abs());
        if sum > best {
            best = sum;
        }
    }
    best
}

/// The square root of the sum of squares of all entries.
#[must_use]
pub fn norm_frob<R: RealField>(m: &Matrix<R>) -> R {
    let mut sum = R::zero();
    for i in 0..m.num_rows() {
        for v in m.row(i) {
            sum = sum + v.clone() * v.clone();
        }
    }
    sum.sqrt()
}

/// Builds the Householder reflector `I - 2 v vᵗ` from a column vector.
///
/// The caller must pre-normalize `v` to unit norm; no normalization is
/// performed here.
///
/// # Errors
///
/// [`LinalgError::DimensionMismatch`] unless `v` has exactly one column.
pub fn householder_matrix<R: Field>(v: &Matrix<R>) -> Result<Matrix<R>, LinalgError> {
    if v.num_cols() != 1 {
        return Err(LinalgError::DimensionMismatch);
    }

    let n = v.num_rows();
    let outer = v.mm(&v.transpose())?;
    Matrix::identity(n).sub(&outer.scale(&R::one().mul_by_scalar(2)))
}

/// Builds the companion matrix of a monic polynomial.
///
/// The result is `deg × deg` with ones on the sub-diagonal and the last
/// column equal to the negated coefficients of `p`, lowest degree first
/// from top to bottom. Its characteristic polynomial is `p`.
///
/// # Errors
///
/// [`LinalgError::DimensionMismatch`] if `p` is the zero polynomial or
/// its leading coefficient is not 1.
pub fn companion_matrix<R: Ring>(p: &DensePoly<R>) -> Result<Matrix<R>, LinalgError> {
    if !p.is_monic() {
        return Err(LinalgError::DimensionMismatch);
    }

    let deg = p.degree();
    let mut c = Matrix::zeros(deg, deg);
    for i in 1..deg {
        c[(i, i - 1)] = R::one();
    }
    for i in 0..deg {
        c[(i, deg - 1)] = -p.coeff(i);
    }
    Ok(c)
}
