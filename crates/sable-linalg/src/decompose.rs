//! Triangular factorizations of square matrices.
//!
//! Both factorizations run the same multiplier-recording reduction: at
//! each step the entries below the pivot are divided by it and stored
//! back as multipliers, then the trailing sub-matrix is updated by
//! subtracting the pivot row scaled by each multiplier. No permutations
//! are performed.

use sable_rings::Field;

use crate::error::LinalgError;
use crate::matrix::Matrix;

/// An LU factorization: `l * u` reconstructs the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lu<R> {
    /// Unit lower-triangular factor.
    pub l: Matrix<R>,
    /// Upper-triangular factor (pivots on the diagonal).
    pub u: Matrix<R>,
}

/// An LDU factorization: `l * d * u` reconstructs the input whenever all
/// leading principal minors are non-zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ldu<R> {
    /// Unit lower-triangular factor.
    pub l: Matrix<R>,
    /// Diagonal factor of pivot values.
    pub d: Matrix<R>,
    /// Unit upper-triangular factor.
    pub u: Matrix<R>,
}

/// Runs the multiplier-recording reduction on a copy of `original`.
///
/// After step `s`, column `s` below the diagonal holds the multipliers
/// and the trailing sub-matrix is the Schur complement. `guarded`
/// selects whether a zero pivot is an error or divides through.
fn reduce<R: Field>(original: &Matrix<R>, guarded: bool) -> Result<Matrix<R>, LinalgError> {
    if !original.is_square() {
        return Err(LinalgError::SquareRequired);
    }

    let n = original.num_rows();
    let mut m = original.clone();

    for step in 0..n.saturating_sub(1) {
        let divider = m[(step, step)].clone();
        if guarded && divider.is_zero() {
            return Err(LinalgError::StuckPivot);
        }

        for i in step + 1..n {
            m[(i, step)] = m[(i, step)].clone() / divider.clone();
        }
        for i in step + 1..n {
            for j in step + 1..n {
                m[(i, j)] = m[(i, j)].clone() - m[(step, j)].clone() * m[(i, step)].clone();
            }
        }
    }

    Ok(m)
}

/// Computes the LDU factorization of a square matrix.
///
/// The input is left unmodified. `l` is unit lower-triangular with the
/// recorded multipliers below the diagonal, `d` is the diagonal of pivot
/// values, and `u` is unit upper-triangular with
/// `u[(i, j)] = reduced[(i, j)] / reduced[(i, i)]` above the diagonal.
///
/// There is no zero-pivot guard on this path: a zero interior pivot
/// divides through unguarded (IEEE non-finite values over floats, a
/// panic over exact scalars). Use [`lu`] for the guarded reduction.
///
/// # Errors
///
/// [`LinalgError::SquareRequired`] for a non-square input.
pub fn ldu<R: Field>(original: &Matrix<R>) -> Result<Ldu<R>, LinalgError> {
    let m = reduce(original, false)?;
    let n = m.num_rows();

    let mut res = Ldu {
        l: Matrix::zeros(n, n),
        d: Matrix::zeros(n, n),
        u: Matrix::zeros(n, n),
    };

    for i in 0..n {
        for j in 0..n {
            if i == j {
                res.l[(i, j)] = R::one();
                res.d[(i, j)] = m[(i, j)].clone();
                res.u[(i, j)] = R::one();
            } else if i > j {
                res.l[(i, j)] = m[(i, j)].clone();
            } else {
                res.u[(i, j)] = m[(i, j)].clone() / m[(i, i)].clone();
            }
        }
    }

    Ok(res)
}

/// Computes the LU factorization of a square matrix.
///
/// The input is left unmodified. `l` is unit lower-triangular, `u` is
/// upper-triangular with the pivots on its diagonal, and `l * u`
/// reconstructs the input. Unlike [`ldu`], this path is pivot-guarded.
///
/// # Errors
///
/// [`LinalgError::SquareRequired`] for a non-square input;
/// [`LinalgError::StuckPivot`] if an interior pivot is zero.
pub fn lu<R: Field>(original: &Matrix<R>) -> Result<Lu<R>, LinalgError> {
    let m = reduce(original, true)?;
    let n = m.num_rows();

    let mut res = Lu {
        l: Matrix::identity(n),
        u: Matrix::zeros(n, n),
    };

    for i in 0..n {
        for j in 0..n {
            if i > j {
                res.l[(i, j)] = m[(i, j)].clone();
            } else {
                res.u[(i, j)] = m[(i, j)].clone();
            }
        }
    }

    Ok(res)
}
