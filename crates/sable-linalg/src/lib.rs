//! # sable-linalg
//!
//! Dense linear algebra for small-to-moderate matrices.
//!
//! This crate provides:
//! - A row-major matrix container generic over a scalar ring
//! - Gauss-Jordan elimination to reduced row-echelon form
//! - Triangular LU / LDU factorizations
//! - Determinant, inverse, trace, matrix norms
//! - Householder reflector and companion-matrix builders
//! - A symmetric text format for loading and storing matrices
//!
//! ## Failure model
//!
//! Shape-dependent operations return [`LinalgError`], a payload-free
//! tagged enum: callers branch on the kind. A zero pivot during
//! elimination is always fatal — no row interchange is attempted, even
//! when the system would be solvable with a different pivot order.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod decompose;
pub mod elimination;
pub mod error;
pub mod functions;
pub mod io;
pub mod matrix;

#[cfg(test)]
mod proptests;

pub use decompose::{ldu, lu, Ldu, Lu};
pub use error::LinalgError;
pub use functions::{
    companion_matrix, det, householder_matrix, inverse, norm1, norm_frob, norm_inf, trace,
};
pub use matrix::Matrix;
