//! Error types for natural number construction and arithmetic.

use thiserror::Error;

/// Errors that can occur when parsing a decimal string into a `Natural`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ParseNaturalError {
    /// The input string was empty.
    #[error("empty input")]
    Empty,

    /// The input contained a character outside `0..=9`.
    #[error("invalid digit {ch:?} at position {index}")]
    InvalidDigit {
        /// The offending character.
        ch: char,
        /// Byte offset of the character in the input.
        index: usize,
    },
}

/// Errors that can occur during natural number arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// A subtraction would produce a negative value, which naturals
    /// cannot represent.
    #[error("subtraction would produce a negative value")]
    NegativeResult,

    /// A division or modular reduction was given a zero divisor.
    #[error("division by zero")]
    DivisionByZero,
}
