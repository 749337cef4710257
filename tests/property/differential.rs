//! Differential tests against strsim and a full-matrix reference.

use super::common::{ham, lev, oracle_levenshtein, wide_word_strategy};
use proptest::prelude::*;

fn unicode_word() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec!['a', 'é', 'ß', 'ö', '東', '京', 'z', '🦀']),
        0..10,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn prop_levenshtein_matches_strsim(a in wide_word_strategy(), b in wide_word_strategy()) {
        prop_assert_eq!(lev(&a, &b), strsim::levenshtein(&a, &b));
    }

    #[test]
    fn prop_levenshtein_matches_strsim_on_unicode(a in unicode_word(), b in unicode_word()) {
        prop_assert_eq!(lev(&a, &b), strsim::levenshtein(&a, &b));
    }

    #[test]
    fn prop_hamming_matches_strsim(a in unicode_word(), b in unicode_word()) {
        match strsim::hamming(&a, &b) {
            Ok(expected) => prop_assert_eq!(ham(&a, &b), expected),
            Err(_) => prop_assert!(distance::hamming(
                &distance::Symbols::new(&a),
                &distance::Symbols::new(&b)
            )
            .is_err()),
        }
    }

    #[test]
    fn prop_levenshtein_matches_full_matrix_on_bytes(
        a in prop::collection::vec(0u8..4, 0..24),
        b in prop::collection::vec(0u8..4, 0..24),
    ) {
        let got = distance::levenshtein(&a, &b).unwrap().get();
        prop_assert_eq!(got, oracle_levenshtein(&a, &b));
    }
}
