//! # Cardinal
//!
//! Arbitrary precision natural number arithmetic and number theory.
//!
//! Cardinal provides a canonical-form non-negative integer of unbounded
//! magnitude together with the classic number-theoretic algorithms built
//! on top of it.
//!
//! ## Features
//!
//! - **Canonical representation**: one digit sequence per value, no
//!   leading zeros, round-trips through its decimal text form
//! - **Explicit failure**: subtraction below zero, zero divisors and
//!   malformed input surface as `Result` errors, never panics
//! - **Number theory**: Euclidean gcd/lcm, modular arithmetic, bounded
//!   modular exponentiation, trial-division factorization
//!
//! ## Quick Start
//!
//! ```rust
//! use cardinal::prelude::*;
//!
//! let a: Natural = "36".parse().unwrap();
//! let b: Natural = "12".parse().unwrap();
//! assert_eq!((&a * &b).to_string(), "432");
//! assert_eq!(gcd(&a, &b).to_string(), "12");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use cardinal_naturals as naturals;
pub use cardinal_numtheory as numtheory;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use cardinal_naturals::{ArithmeticError, Natural, ParseNaturalError};
    pub use cardinal_numtheory::{
        add_mod, factorize, gcd, gcd3, lcm, mul_mod, pow_mod, sub_mod,
    };
}
