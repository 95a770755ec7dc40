//! # cardinal-numtheory
//!
//! Number-theoretic algorithms over Cardinal naturals.
//!
//! This crate builds on `cardinal-naturals` to provide:
//! - Euclidean gcd (two and three arguments) and lcm
//! - Modular addition, subtraction, multiplication and exponentiation
//! - Trial-division factorization of machine-width integers
//!
//! Every function here is a pure function of its arguments; failures
//! surface as `Result` values carrying the arithmetic error from the
//! underlying operation.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod euclid;
pub mod factor;
pub mod modular;


pub use euclid::{gcd, gcd3, lcm};
pub use factor::factorize;
pub use modular::{add_mod, mul_mod, pow_mod, sub_mod};
