//! Dense matrix container.
//!
//! Matrices are stored in row-major order and exclusively own their
//! backing buffer: `Clone` deep-copies, so no aliasing between distinct
//! values is ever observable. Entry access through `Index` performs no
//! bounds checking beyond the backing `Vec`, mirroring the cost model of
//! raw array indexing; `get`/`get_mut` are the checked alternatives.

use std::ops::{Index, IndexMut};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use sable_rings::Ring;

use crate::error::LinalgError;

/// Seed for [`Matrix::randomize`]. The generator is rebuilt from this
/// seed on every call, so successive fills (even on different instances)
/// reproduce the identical sequence.
const RANDOMIZE_SEED: u64 = 0;

/// Dense matrix stored in row-major order.
///
/// Entry `(i, j)` lives at linear offset `i * num_cols + j`. The buffer
/// length always equals `num_rows * num_cols`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<R> {
    /// Matrix entries in row-major order.
    data: Vec<R>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
}

impl<R: Ring> Matrix<R> {
    /// Creates a new matrix filled with zeros.
    #[must_use]
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        Self::filled(num_rows, num_cols, R::zero())
    }

    /// Creates a new matrix with every entry set to `fill`.
    #[must_use]
    pub fn filled(num_rows: usize, num_cols: usize, fill: R) -> Self {
        Self {
            data: vec![fill; num_rows * num_cols],
            num_rows,
            num_cols,
        }
    }

    /// Creates a matrix from a 2D vector.
    ///
    /// # Panics
    ///
    /// Panics if the rows do not all have the same length.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<R>>) -> Self {
        if rows.is_empty() {
            return Self::zeros(0, 0);
        }
        let num_rows = rows.len();
        let num_cols = rows[0].len();
        let data: Vec<R> = rows.into_iter().flatten().collect();
        assert_eq!(data.len(), num_rows * num_cols);
        Self {
            data,
            num_rows,
            num_cols,
        }
    }

    /// Creates an identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = R::one();
        }
        m
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Checks if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.num_rows == self.num_cols
    }

    /// Reallocates to the new dimensions, zero-filling every entry.
    ///
    /// All prior contents are discarded, not preserved.
    pub fn resize(&mut self, num_rows: usize, num_cols: usize) {
        self.data = vec![R::zero(); num_rows * num_cols];
        self.num_rows = num_rows;
        self.num_cols = num_cols;
    }

    /// Returns a reference to the entry at (row, col).
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&R> {
        if row < self.num_rows && col < self.num_cols {
            Some(&self.data[row * self.num_cols + col])
        } else {
            None
        }
    }

    /// Returns a mutable reference to the entry at (row, col).
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut R> {
        if row < self.num_rows && col < self.num_cols {
            Some(&mut self.data[row * self.num_cols + col])
        } else {
            None
        }
    }

    /// Returns a slice of the specified row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[R] {
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// Returns a mutable slice of the specified row.
    pub fn row_mut(&mut self, row: usize) -> &mut [R] {
        let start = row * self.num_cols;
        &mut self.data[start..start + self.num_cols]
    }

    /// Returns the transpose of the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut result = Self::zeros(self.num_cols, self.num_rows);
        for i in 0..self.num_rows {
            for j in 0..self.num_cols {
                result[(j, i)] = self[(i, j)].clone();
            }
        }
        result
    }

    /// Scales all entries by a scalar.
    #[must_use]
    pub fn scale(&self, scalar: &R) -> Self {
        Self {
            data: self
                .data
                .iter()
                .map(|v| v.clone() * scalar.clone())
                .collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        }
    }

    /// Element-wise sum.
    ///
    /// # Errors
    ///
    /// [`LinalgError::DimensionMismatch`] unless both operands have
    /// identical dimensions.
    pub fn add(&self, other: &Self) -> Result<Self, LinalgError> {
        let mut result = self.clone();
        result.add_assign(other)?;
        Ok(result)
    }

    /// In-place element-wise sum. The receiver is unchanged on error.
    ///
    /// # Errors
    ///
    /// [`LinalgError::DimensionMismatch`] unless both operands have
    /// identical dimensions.
    pub fn add_assign(&mut self, other: &Self) -> Result<(), LinalgError> {
        if self.num_rows != other.num_rows || self.num_cols != other.num_cols {
            return Err(LinalgError::DimensionMismatch);
        }
        for (a, b) in self.data.iter_mut().zip(other.data.iter()) {
            *a = a.clone() + b.clone();
        }
        Ok(())
    }

    /// Element-wise difference.
    ///
    /// # Errors
    ///
    /// [`LinalgError::DimensionMismatch`] unless both operands have
    /// identical dimensions.
    pub fn sub(&self, other: &Self) -> Result<Self, LinalgError> {
        let mut result = self.clone();
        result.sub_assign(other)?;
        Ok(result)
    }

    /// In-place element-wise difference. The receiver is unchanged on
    /// error.
    ///
    /// # Errors
    ///
    /// [`LinalgError::DimensionMismatch`] unless both operands have
    /// identical dimensions.
    pub fn sub_assign(&mut self, other: &Self) -> Result<(), LinalgError> {
        if self.num_rows != other.num_rows || self.num_cols != other.num_cols {
            return Err(LinalgError::DimensionMismatch);
        }
        for (a, b) in self.data.iter_mut().zip(other.data.iter()) {
            *a = a.clone() - b.clone();
        }
        Ok(())
    }

    /// Matrix-matrix multiply: C = A * B.
    ///
    /// The result has dimensions `(self.num_rows, other.num_cols)`; each
    /// entry is the inner product of a row of `self` and a column of
    /// `other`. Classic triple loop, no blocking.
    ///
    /// # Errors
    ///
    /// [`LinalgError::DimensionMismatch`] unless
    /// `self.num_cols == other.num_rows`.
    pub fn mm(&self, other: &Self) -> Result<Self, LinalgError> {
        if self.num_cols != other.num_rows {
            return Err(LinalgError::DimensionMismatch);
        }

        let mut result = Self::zeros(self.num_rows, other.num_cols);
        for i in 0..self.num_rows {
            for j in 0..other.num_cols {
                let mut sum = R::zero();
                for k in 0..self.num_cols {
                    sum = sum + self[(i, k)].clone() * other[(k, j)].clone();
                }
                result[(i, j)] = sum;
            }
        }
        Ok(result)
    }

    /// In-place matrix multiply: `self = self * other`. The receiver is
    /// unchanged on error.
    ///
    /// # Errors
    ///
    /// [`LinalgError::DimensionMismatch`] unless
    /// `self.num_cols == other.num_rows`.
    pub fn mm_assign(&mut self, other: &Self) -> Result<(), LinalgError> {
        *self = self.mm(other)?;
        Ok(())
    }

    /// Fills every entry with a value drawn uniformly from the integers
    /// 1 through 10.
    ///
    /// The generator is reseeded identically on every call, so repeated
    /// calls reproduce the same fill sequence.
    pub fn randomize(&mut self) {
        let mut rng = ChaCha8Rng::seed_from_u64(RANDOMIZE_SEED);
        for v in &mut self.data {
            *v = R::one().mul_by_scalar(rng.gen_range(1..=10));
        }
    }
}

impl<R: Ring> Default for Matrix<R> {
    /// A 0×0 matrix.
    fn default() -> Self {
        Self::zeros(0, 0)
    }
}

impl<R> Index<(usize, usize)> for Matrix<R> {
    type Output = R;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.num_cols + col]
    }
}

impl<R> IndexMut<(usize, usize)> for Matrix<R> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row * self.num_cols + col]
    }
}
