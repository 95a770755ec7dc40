//! Number Theory Walkthrough
//!
//! Demonstrates Cardinal's arbitrary precision arithmetic and the
//! number-theoretic algorithms layered on top of it.
//!
//! Run with: cargo run --example number_theory

use cardinal::prelude::*;

// Helper to parse a decimal literal
fn n(s: &str) -> Natural {
    s.parse().expect("literal is a valid decimal")
}

fn main() {
    println!("=== Cardinal: Number Theory Walkthrough ===\n");

    example_1_elementary_arithmetic();
    example_2_division_and_failure();
    example_3_gcd_and_lcm();
    example_4_modular_arithmetic();
    example_5_factorization();
}

fn example_1_elementary_arithmetic() {
    println!("Example 1: Elementary arithmetic");

    let a = n("36");
    let b = n("12");
    println!("  {a} + {b} = {}", &a + &b);
    println!("  {a} * {b} = {}", &a * &b);
    println!("  {a} ^ 5  = {}", a.pow(5));

    // Way past machine width
    let big = n("2").pow(256);
    println!("  2 ^ 256  = {big}");
    println!();
}

fn example_2_division_and_failure() {
    println!("Example 2: Euclidean division and explicit failure");

    let a = n("17");
    let d = n("5");
    match a.div_rem(&d) {
        Ok((q, r)) => println!("  {a} = {q} * {d} + {r}"),
        Err(e) => println!("  error: {e}"),
    }

    match n("5").checked_sub(&n("17")) {
        Ok(diff) => println!("  5 - 17 = {diff}"),
        Err(e) => println!("  5 - 17 fails: {e}"),
    }

    match a.div_rem(&n("0")) {
        Ok(_) => unreachable!(),
        Err(e) => println!("  17 / 0 fails: {e}"),
    }
    println!();
}

fn example_3_gcd_and_lcm() {
    println!("Example 3: gcd and lcm");

    println!("  gcd(36, 12)      = {}", gcd(&n("36"), &n("12")));
    println!("  gcd(36, 12, 18)  = {}", gcd3(&n("36"), &n("12"), &n("18")));
    match lcm(&n("36"), &n("12")) {
        Ok(l) => println!("  lcm(36, 12)      = {l}"),
        Err(e) => println!("  lcm(36, 12) fails: {e}"),
    }
    println!();
}

fn example_4_modular_arithmetic() {
    println!("Example 4: Modular arithmetic");

    let m = n("497");
    println!("  (40 + 500) mod 497 = {}", add_mod(&n("40"), &n("500"), &m).unwrap());
    println!("  (17 - 5) mod 6     = {}", sub_mod(&n("17"), &n("5"), &n("6")).unwrap());
    println!("  (40 * 50) mod 497  = {}", mul_mod(&n("40"), &n("50"), &m).unwrap());
    println!("  4 ^ 13 mod 497     = {}", pow_mod(&n("4"), 13, &m).unwrap());
    println!();
}

fn example_5_factorization() {
    println!("Example 5: Trial-division factorization");

    for value in [60u64, 1024, 104_729, 600_851_475_143] {
        println!("  {value} = {:?}", factorize(value));
    }
    println!();
}
