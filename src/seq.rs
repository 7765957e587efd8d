//! Sequence utilities
//!
//! Small slice helpers used alongside the tree module: end-of-sequence
//! accessors, a palindrome check, and run-length encoding.

/// Return the last element, or `None` for an empty slice.
pub fn last<T>(seq: &[T]) -> Option<&T> {
    seq.last()
}

/// Return the next-to-last element, or `None` if there are fewer than two.
pub fn penultimate<T>(seq: &[T]) -> Option<&T> {
    if seq.len() >= 2 {
        seq.get(seq.len() - 2)
    } else {
        None
    }
}

/// Check whether a sequence reads the same forwards and backwards.
pub fn is_palindrome<T: PartialEq>(seq: &[T]) -> bool {
    seq.iter().eq(seq.iter().rev())
}

/// Run-length encode a sequence into `(count, value)` pairs.
///
/// Each pair describes a maximal run of equal consecutive values; an
/// empty input encodes to an empty output.
pub fn run_length_encode<T: PartialEq + Clone>(seq: &[T]) -> Vec<(usize, T)> {
    let mut runs: Vec<(usize, T)> = Vec::new();

    for value in seq {
        match runs.last_mut() {
            Some((count, current)) if current == value => *count += 1,
            _ => runs.push((1, value.clone())),
        }
    }

    runs
}

/// Expand `(count, value)` pairs back into the sequence they encode.
pub fn run_length_decode<T: Clone>(runs: &[(usize, T)]) -> Vec<T> {
    let mut seq = Vec::new();
    for (count, value) in runs {
        for _ in 0..*count {
            seq.push(value.clone());
        }
    }
    seq
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last() {
        assert_eq!(last(&[1, 1, 2, 3, 5, 8]), Some(&8));
        assert_eq!(last::<i32>(&[]), None);
    }

    #[test]
    fn test_penultimate() {
        assert_eq!(penultimate(&[1, 1, 2, 3, 5, 8]), Some(&5));
        assert_eq!(penultimate(&[1]), None);
        assert_eq!(penultimate::<i32>(&[]), None);
    }

    #[test]
    fn test_palindrome() {
        assert!(is_palindrome(&[1, 2, 3, 2, 1]));
        assert!(is_palindrome(&[1, 2, 2, 1]));
        assert!(!is_palindrome(&[1, 2, 3]));
        assert!(is_palindrome::<i32>(&[]));
        assert!(is_palindrome(&[7]));
    }

    #[test]
    fn test_encode() {
        let chars: Vec<char> = "aaaabccaadeeee".chars().collect();
        assert_eq!(
            run_length_encode(&chars),
            vec![(4, 'a'), (1, 'b'), (2, 'c'), (2, 'a'), (1, 'd'), (4, 'e')]
        );
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(run_length_encode::<char>(&[]), vec![]);
    }

    #[test]
    fn test_decode() {
        let runs = [(4, 'a'), (1, 'b'), (2, 'c'), (2, 'a'), (1, 'd'), (4, 'e')];
        let decoded: String = run_length_decode(&runs).into_iter().collect();
        assert_eq!(decoded, "aaaabccaadeeee");
    }

    #[test]
    fn test_decode_inverts_encode() {
        let seq = vec![1, 1, 1, 2, 3, 3, 1];
        assert_eq!(run_length_decode(&run_length_encode(&seq)), seq);
    }
}
