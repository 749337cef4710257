//! Full Levenshtein distance.

use super::common::{lev, oracle_levenshtein, sym};
use distance::{
    levenshtein, levenshtein_by, levenshtein_normalized, DistanceError, Fallible, Sequence,
};

#[test]
fn test_classic_pairs() {
    let cases = [
        ("kitten", "sitting", 3),
        ("flaw", "lawn", 2),
        ("saturday", "sunday", 3),
        ("foo", "fo", 1),
        ("foo", "foob", 1),
        ("foo", "foobaz", 3),
        ("abc", "abc", 0),
        ("abc", "cba", 2),
        ("intention", "execution", 5),
    ];
    for (a, b, expected) in cases {
        assert_eq!(lev(a, b), expected, "{:?} vs {:?}", a, b);
        assert_eq!(lev(b, a), expected, "{:?} vs {:?} (swapped)", b, a);
    }
}

#[test]
fn test_empty_side_is_other_length() {
    assert_eq!(lev("", ""), 0);
    assert_eq!(lev("", "hello"), 5);
    assert_eq!(lev("hello", ""), 5);
}

#[test]
fn test_normalized_divides_by_longer() {
    let n = levenshtein_normalized(&sym("kitten"), &sym("sitting")).unwrap();
    assert!((n - 3.0 / 7.0).abs() < 1e-12);
    assert_eq!(levenshtein_normalized(&sym(""), &sym("")).unwrap(), 0.0);
    assert_eq!(levenshtein_normalized(&sym(""), &sym("abc")).unwrap(), 1.0);
    assert_eq!(levenshtein_normalized(&sym("abc"), &sym("xyz")).unwrap(), 1.0);
}

#[test]
fn test_unicode_counts_scalar_values() {
    assert_eq!(lev("naïve", "naive"), 1);
    assert_eq!(lev("東京", "京都"), 2);
    // Bytewise the same edit costs two
    let bytes = levenshtein("naïve".as_bytes(), "naive".as_bytes()).unwrap();
    assert_eq!(bytes.get(), 2);
}

fn tokens(text: &str) -> Vec<String> {
    text.split(' ').map(String::from).collect()
}

#[test]
fn test_tokens() {
    let a = tokens("the quick brown fox");
    let b = tokens("the brown fox jumps");
    assert_eq!(levenshtein(&a, &b).unwrap().get(), 2);
}

#[test]
fn test_matches_full_matrix_on_longer_inputs() {
    let a = "the quick brown fox jumps over the lazy dog";
    let b = "a quick brown dog leaps over lazy foxes";
    let ca: Vec<char> = a.chars().collect();
    let cb: Vec<char> = b.chars().collect();
    assert_eq!(lev(a, b), oracle_levenshtein(&ca, &cb));
}

#[test]
fn test_oracle_failure_propagates_with_positions() {
    let mut eq = Fallible(|a: &char, b: &char| {
        if *a == '!' || *b == '!' {
            Err(format!("cannot compare {:?} and {:?}", a, b))
        } else {
            Ok(a == b)
        }
    });
    let err = levenshtein_by(&sym("ab!"), &sym("abcd"), &mut eq).unwrap_err();
    match err {
        DistanceError::ComparisonFailure { left, right, reason } => {
            assert_eq!(left, 2);
            assert!(right < 4);
            assert!(reason.contains("cannot compare"));
        }
        other => panic!("expected comparison failure, got {:?}", other),
    }
}

/// Claims any length without storing anything.
struct Phantom {
    len: usize,
    item: char,
}

impl Sequence for Phantom {
    type Item = char;

    fn len(&self) -> usize {
        self.len
    }

    fn item(&self, _index: usize) -> &char {
        &self.item
    }
}

fn phantom(len: usize) -> Phantom {
    Phantom { len, item: 'a' }
}

#[test]
fn test_oversized_column_is_an_allocation_failure() {
    let result = levenshtein(&phantom(usize::MAX / 4), &phantom(1));
    assert!(
        matches!(result, Err(DistanceError::AllocationFailure { .. })),
        "got {:?}",
        result
    );
    // Same outcome with the arguments swapped
    let result = levenshtein(&phantom(1), &phantom(usize::MAX / 4));
    assert!(matches!(result, Err(DistanceError::AllocationFailure { .. })));
}

#[test]
fn test_column_size_overflow_is_an_allocation_failure() {
    let result = levenshtein(&phantom(usize::MAX), &phantom(1));
    assert_eq!(
        result,
        Err(DistanceError::AllocationFailure {
            requested: usize::MAX
        })
    );
}
