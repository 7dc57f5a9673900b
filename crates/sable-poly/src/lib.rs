//! # sable-poly
//!
//! Dense univariate polynomial arithmetic for sable.
//!
//! This crate provides the polynomial collaborator consumed by the
//! companion-matrix builder in `sable-linalg`: coefficient lookup and
//! assignment by power index, degree queries, and schoolbook arithmetic.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod dense;

#[cfg(test)]
mod proptests;

pub use dense::DensePoly;
