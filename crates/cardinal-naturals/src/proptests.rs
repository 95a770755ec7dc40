//! Property-based tests for natural number arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::{ArithmeticError, Natural};

    // Strategy for canonical decimal strings well beyond machine width
    fn big_decimal() -> impl Strategy<Value = String> {
        "[1-9][0-9]{0,39}"
    }

    fn nat(s: &str) -> Natural {
        s.parse().expect("strategy produces valid decimals")
    }

    proptest! {
        // Canonicalization

        #[test]
        fn parse_display_round_trip(s in big_decimal()) {
            let a = nat(&s);
            prop_assert_eq!(a.to_string().parse::<Natural>().unwrap(), a);
        }

        #[test]
        fn leading_zeros_are_stripped(s in "0{1,5}[0-9]{1,20}") {
            let a = nat(&s);
            let text = a.to_string();
            prop_assert!(text == "0" || !text.starts_with('0'));
        }

        // Agreement with native arithmetic on machine-width inputs

        #[test]
        fn add_matches_native(a in any::<u64>(), b in any::<u64>()) {
            let sum = Natural::from(a) + Natural::from(b);
            prop_assert_eq!(sum.to_string(), (u128::from(a) + u128::from(b)).to_string());
        }

        #[test]
        fn mul_matches_native(a in any::<u64>(), b in any::<u64>()) {
            let product = Natural::from(a) * Natural::from(b);
            prop_assert_eq!(product.to_string(), (u128::from(a) * u128::from(b)).to_string());
        }

        #[test]
        fn ordering_matches_native(a in any::<u64>(), b in any::<u64>()) {
            prop_assert_eq!(Natural::from(a).cmp(&Natural::from(b)), a.cmp(&b));
        }

        // Ring identities on large operands

        #[test]
        fn add_commutative(a in big_decimal(), b in big_decimal()) {
            let a = nat(&a);
            let b = nat(&b);
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn mul_commutative(a in big_decimal(), b in big_decimal()) {
            let a = nat(&a);
            let b = nat(&b);
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn mul_distributes_over_add(
            a in big_decimal(),
            b in big_decimal(),
            c in big_decimal()
        ) {
            let a = nat(&a);
            let b = nat(&b);
            let c = nat(&c);
            prop_assert_eq!(&a * &(&b + &c), &a * &b + &a * &c);
        }

        // Subtraction

        #[test]
        fn sub_then_add_restores(a in big_decimal(), b in big_decimal()) {
            let a = nat(&a);
            let b = nat(&b);
            let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
            let diff = hi.checked_sub(&lo).unwrap();
            prop_assert_eq!(diff + lo, hi);
        }

        #[test]
        fn sub_fails_when_minuend_smaller(a in big_decimal(), b in big_decimal()) {
            let a = nat(&a);
            let b = nat(&b);
            if a < b {
                prop_assert_eq!(a.checked_sub(&b), Err(ArithmeticError::NegativeResult));
            }
        }

        // Euclidean division

        #[test]
        fn div_rem_euclidean_identity(a in big_decimal(), d in big_decimal()) {
            let a = nat(&a);
            let d = nat(&d);
            let (q, r) = a.div_rem(&d).unwrap();
            prop_assert!(r < d);
            prop_assert_eq!(q * d + r, a);
        }

        #[test]
        fn div_by_zero_fails(a in big_decimal()) {
            let a = nat(&a);
            prop_assert_eq!(
                a.div_rem(&Natural::zero()),
                Err(ArithmeticError::DivisionByZero)
            );
        }

        // Exponentiation

        #[test]
        fn pow_matches_repeated_multiplication(a in 0u64..50, e in 0u64..8) {
            let base = Natural::from(a);
            let mut expected = Natural::from(1u64);
            for _ in 0..e {
                expected = expected * &base;
            }
            prop_assert_eq!(base.pow(e), expected);
        }
    }
}
