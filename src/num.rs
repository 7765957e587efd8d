//! Number-theory utilities
//!
//! Primality testing by trial division, the Euclidean algorithm, and
//! prime listing over a range.

use std::ops::RangeInclusive;

/// Check whether `n` is prime.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let limit = (n as f64).sqrt() as i64;
    let mut divisor = 3;
    while divisor <= limit {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// Greatest common divisor by the Euclidean algorithm.
///
/// The result is non-negative; `gcd(0, 0)` is 0.
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a
}

/// List the primes within an inclusive range, in ascending order.
pub fn primes_in_range(range: RangeInclusive<i64>) -> Vec<i64> {
    range.filter(|&n| is_prime(n)).collect()
}
