//! Euclidean gcd and lcm.

use cardinal_naturals::{ArithmeticError, Natural};
use num_traits::Zero;

/// Computes the greatest common divisor by the Euclidean algorithm.
///
/// `(a, b)` is replaced by `(b, a mod b)` until `b` reaches zero, so
/// `gcd(a, 0) == a` and in particular `gcd(0, 0) == 0`.
#[must_use]
pub fn gcd(a: &Natural, b: &Natural) -> Natural {
    let mut a = a.clone();
    let mut b = b.clone();
    while !b.is_zero() {
        let r = a
            .checked_rem(&b)
            .expect("loop guard keeps the divisor nonzero");
        a = b;
        b = r;
    }
    a
}

/// Computes the greatest common divisor of three values.
///
/// gcd is associative, so the pairing order does not matter.
#[must_use]
pub fn gcd3(a: &Natural, b: &Natural, c: &Natural) -> Natural {
    gcd(&gcd(a, b), c)
}

/// Computes the least common multiple as `(a * b) / gcd(a, b)`.
///
/// # Errors
///
/// Returns [`ArithmeticError::DivisionByZero`] when both arguments are
/// zero: `gcd(0, 0) == 0` leaves the defining quotient undefined, and no
/// implicit zero result is invented for it.
pub fn lcm(a: &Natural, b: &Natural) -> Result<Natural, ArithmeticError> {
    (a * b).checked_div(&gcd(a, b))
}
