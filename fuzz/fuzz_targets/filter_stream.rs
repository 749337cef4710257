// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the candidate filter.
//!
//! Every kept pair must carry the candidate's quick distance, order must
//! follow the source, and nothing the quick engine accepts may be dropped.

#![no_main]

use arbitrary::Arbitrary;
use distance::{filter_within_two, quick_distance, Symbols};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FilterInput {
    reference: String,
    candidates: Vec<String>,
}

fuzz_target!(|input: FilterInput| {
    let reference = Symbols::new(&input.reference);
    let candidates: Vec<Symbols> = input
        .candidates
        .iter()
        .take(256)
        .map(|c| Symbols::new(c))
        .collect();

    let expected: Vec<(u8, &Symbols)> = candidates
        .iter()
        .filter_map(|c| quick_distance(&reference, c).map(|d| (d, c)))
        .collect();
    let kept: Vec<(u8, &Symbols)> = filter_within_two(reference.clone(), &candidates).collect();

    assert_eq!(kept, expected);
    assert!(kept.iter().all(|&(d, _)| d <= 2));
});
