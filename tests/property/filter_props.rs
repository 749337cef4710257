//! The filter keeps exactly the candidates the quick engine accepts.

use super::common::{quick, sym, word_strategy};
use distance::filter_within_two;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_filter_is_quick_in_order(
        reference in word_strategy(),
        candidates in prop::collection::vec(word_strategy(), 0..20),
    ) {
        let expected: Vec<(u8, String)> = candidates
            .iter()
            .filter_map(|c| quick(&reference, c).map(|d| (d, c.clone())))
            .collect();
        let symbols: Vec<_> = candidates.iter().map(|c| sym(c)).collect();
        let got: Vec<(u8, String)> = filter_within_two(sym(&reference), &symbols)
            .map(|(d, c)| (d, c.to_string()))
            .collect();
        prop_assert_eq!(got, expected);
    }
}
