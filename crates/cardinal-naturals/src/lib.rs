//! # cardinal-naturals
//!
//! Arbitrary precision natural number arithmetic for Cardinal.
//!
//! This crate provides:
//! - An arbitrary precision non-negative integer (`Natural`)
//! - Schoolbook addition, subtraction, multiplication
//! - Euclidean division with remainder
//! - Binary exponentiation
//!
//! ## Performance Notes
//!
//! - Values with few digits are stored inline on the stack
//! - Larger values spill to the heap transparently

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod natural;

#[cfg(test)]
mod proptests;

pub use error::{ArithmeticError, ParseNaturalError};
pub use natural::Natural;
