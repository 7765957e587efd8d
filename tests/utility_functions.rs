//! Parameterized tests for the sequence and number-theory utilities

use rstest::rstest;

use arbor::num::{gcd, is_prime, primes_in_range};
use arbor::seq::{is_palindrome, last, penultimate, run_length_decode, run_length_encode};

#[rstest]
#[case(2, true)]
#[case(3, true)]
#[case(4, false)]
#[case(7, true)]
#[case(9, false)]
#[case(97, true)]
#[case(1, false)]
#[case(0, false)]
#[case(-5, false)]
fn test_is_prime(#[case] n: i64, #[case] expected: bool) {
    assert_eq!(is_prime(n), expected);
}

#[rstest]
#[case(36, 63, 9)]
#[case(63, 36, 9)]
#[case(17, 5, 1)]
#[case(0, 12, 12)]
#[case(-36, 63, 9)]
fn test_gcd(#[case] a: i64, #[case] b: i64, #[case] expected: i64) {
    assert_eq!(gcd(a, b), expected);
}

#[test]
fn test_primes_in_range() {
    assert_eq!(primes_in_range(7..=31), vec![7, 11, 13, 17, 19, 23, 29, 31]);
}

#[test]
fn test_sequence_accessors() {
    let fib = [1, 1, 2, 3, 5, 8];
    assert_eq!(last(&fib), Some(&8));
    assert_eq!(penultimate(&fib), Some(&5));
}

#[rstest]
#[case(&[1, 2, 3, 2, 1], true)]
#[case(&[1, 2, 2, 1], true)]
#[case(&[1, 2, 3], false)]
#[case(&[], true)]
fn test_is_palindrome(#[case] seq: &[i32], #[case] expected: bool) {
    assert_eq!(is_palindrome(seq), expected);
}

#[test]
fn test_run_length_round_trip() {
    let chars: Vec<char> = "aaaabccaadeeee".chars().collect();
    let encoded = run_length_encode(&chars);
    assert_eq!(encoded.len(), 6);
    assert_eq!(run_length_decode(&encoded), chars);
}
