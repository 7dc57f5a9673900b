//! Failure kinds shared by the matrix algorithms.

use thiserror::Error;

/// Errors raised by matrix operations and algorithms.
///
/// All three kinds are payload-free markers; discrimination is by kind,
/// not by message. None of them is retried or logged internally.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum LinalgError {
    /// Operand shapes are incompatible for the requested operation.
    #[error("operand dimensions are incompatible")]
    DimensionMismatch,

    /// The operation is defined only for square matrices.
    #[error("operation requires a square matrix")]
    SquareRequired,

    /// Elimination hit a zero pivot; no row interchange is attempted.
    #[error("elimination stuck on a zero pivot")]
    StuckPivot,
}
