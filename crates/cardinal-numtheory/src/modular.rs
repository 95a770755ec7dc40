//! Modular arithmetic over naturals.
//!
//! All operations take the modulus as their last argument and reduce the
//! result into `[0, m)`. A zero modulus is rejected with
//! `ArithmeticError::DivisionByZero`, propagated from the underlying
//! remainder operation.

use cardinal_naturals::{ArithmeticError, Natural};
use num_traits::One;

/// Computes `(a + b) mod m`.
///
/// # Errors
///
/// Returns [`ArithmeticError::DivisionByZero`] when `m` is zero.
pub fn add_mod(a: &Natural, b: &Natural, m: &Natural) -> Result<Natural, ArithmeticError> {
    (a + b).checked_rem(m)
}

/// Computes `(a - b) mod m`.
///
/// When `a < b` the subtraction runs as `(a + m) - b`; the single added
/// `m` compensates for naturals having no negative intermediates.
///
/// # Errors
///
/// Returns [`ArithmeticError::DivisionByZero`] when `m` is zero, and
/// [`ArithmeticError::NegativeResult`] when `b` exceeds even `a + m`.
pub fn sub_mod(a: &Natural, b: &Natural, m: &Natural) -> Result<Natural, ArithmeticError> {
    if a >= b {
        a.checked_sub(b)?.checked_rem(m)
    } else {
        (a + m).checked_sub(b)?.checked_rem(m)
    }
}

/// Computes `(a * b) mod m`.
///
/// # Errors
///
/// Returns [`ArithmeticError::DivisionByZero`] when `m` is zero.
pub fn mul_mod(a: &Natural, b: &Natural, m: &Natural) -> Result<Natural, ArithmeticError> {
    (a * b).checked_rem(m)
}

/// Computes `a^exp mod m` by binary exponentiation.
///
/// The base is reduced before the loop and every product is reduced
/// immediately, so intermediate values never grow past two reduced
/// operands' worth of digits. The accumulator starts at `1 mod m`, which
/// keeps the result inside `[0, m)` even for `exp == 0` with `m == 1`.
///
/// # Errors
///
/// Returns [`ArithmeticError::DivisionByZero`] when `m` is zero.
pub fn pow_mod(a: &Natural, mut exp: u64, m: &Natural) -> Result<Natural, ArithmeticError> {
    let mut result = Natural::one().checked_rem(m)?;
    let mut base = a.checked_rem(m)?;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(&result, &base, m)?;
        }
        base = mul_mod(&base, &base, m)?;
        exp >>= 1;
    }
    Ok(result)
}
