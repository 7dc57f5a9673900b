//! Gauss-Jordan elimination.
//!
//! Both phases operate in place on a single matrix and are driven by an
//! explicit `step` counter, each independently restartable from any step.
//! The forward phase requires at least as many columns as rows — extra
//! columns carry an augmented right-hand side or identity block — and
//! fails on a zero pivot: no row interchange is ever attempted, so a
//! stuck pivot is fatal even when the system is non-singular under a
//! different pivot order.

use sable_rings::Field;

use crate::error::LinalgError;
use crate::matrix::Matrix;

/// Reduces `m` in place to reduced row-echelon form.
///
/// Runs forward elimination from step 0, then falls through into
/// [`back_substitute`]. Equivalent to [`eliminate_from`] with step 0.
///
/// # Errors
///
/// [`LinalgError::DimensionMismatch`] if `m` has fewer columns than rows;
/// [`LinalgError::StuckPivot`] on a zero pivot.
pub fn eliminate<R: Field>(m: &mut Matrix<R>) -> Result<(), LinalgError> {
    eliminate_from(m, 0)
}

/// Forward elimination restarted from `step`.
///
/// At step `s` the pivot is `m[(s, s)]`; every row below has
/// `multiplier = m[(i, s)] / pivot` times row `s` subtracted from it,
/// restricted to columns `s..` (columns left of `s` are already zero).
/// After the final step the matrix is handed to [`back_substitute`], so
/// a successful call leaves `m` in reduced row-echelon form.
///
/// # Errors
///
/// [`LinalgError::DimensionMismatch`] if `m` has fewer columns than rows;
/// [`LinalgError::StuckPivot`] on a zero pivot.
pub fn eliminate_from<R: Field>(m: &mut Matrix<R>, step: usize) -> Result<(), LinalgError> {
    let rows = m.num_rows();
    let cols = m.num_cols();
    if cols < rows {
        return Err(LinalgError::DimensionMismatch);
    }

    for s in step..rows {
        let pivot = m[(s, s)].clone();
        if pivot.is_zero() {
            return Err(LinalgError::StuckPivot);
        }

        for i in s + 1..rows {
            let multiplier = m[(i, s)].clone() / pivot.clone();
            for j in s..cols {
                m[(i, j)] = m[(i, j)].clone() - m[(s, j)].clone() * multiplier.clone();
            }
        }
    }

    back_substitute_from(m, 0);
    Ok(())
}

/// Back-substitution from the last row upward. Equivalent to
/// [`back_substitute_from`] with step 0.
pub fn back_substitute<R: Field>(m: &mut Matrix<R>) {
    back_substitute_from(m, 0);
}

/// Back-substitution restarted from `step` (counted from the bottom row).
///
/// Each pivot row is normalized to a leading 1 by dividing columns
/// `p..` by the pivot, then the pivot's column is cleared from every row
/// above. There is no zero-pivot guard in this phase: a zero pivot
/// divides through unguarded, exactly as in the forward-eliminated
/// matrices this phase is meant to receive, where pivots are non-zero.
pub fn back_substitute_from<R: Field>(m: &mut Matrix<R>, step: usize) {
    let rows = m.num_rows();
    let cols = m.num_cols();

    for s in step..rows {
        let level = rows - s - 1;
        let pivot = m[(level, level)].clone();

        for v in &mut m.row_mut(level)[level..] {
            *v = v.clone() / pivot.clone();
        }

        for i in 0..level {
            let reference = m[(i, level)].clone();
            for j in level..cols {
                m[(i, j)] = m[(i, j)].clone() - reference.clone() * m[(level, j)].clone();
            }
        }
    }
}
