// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the bounded quick distance.
//!
//! The quick engine must agree with the full table on every pair within two
//! edits, and say "more than 2" for everything else. Hamming must never be
//! below Levenshtein on equal lengths.

#![no_main]

use arbitrary::Arbitrary;
use distance::{hamming, levenshtein, quick_distance, Symbols};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct PairInput {
    first: String,
    second: String,
}

fuzz_target!(|input: PairInput| {
    // Cap lengths to keep the O(nm) reference fast
    let first: String = input.first.chars().take(64).collect();
    let second: String = input.second.chars().take(64).collect();
    let (a, b) = (Symbols::new(&first), Symbols::new(&second));

    let full = levenshtein(&a, &b).expect("small inputs always allocate").get();
    let quick = quick_distance(&a, &b);

    // INVARIANT 1: exact up to two, None beyond
    let expected = if full <= 2 { Some(full as u8) } else { None };
    assert_eq!(
        quick, expected,
        "quick={:?} full={} for {:?} vs {:?}",
        quick, full, first, second
    );

    // INVARIANT 2: symmetric
    assert_eq!(quick, quick_distance(&b, &a));

    // INVARIANT 3: Hamming bounds Levenshtein from above
    if let Ok(ham) = hamming(&a, &b) {
        assert!(ham.get() >= full, "hamming {} < levenshtein {}", ham.get(), full);
    }
});
