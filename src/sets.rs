// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Set-overlap distances: order and multiplicity are ignored.

use std::collections::HashSet;
use std::hash::Hash;

use crate::sequence::Sequence;

fn element_set<S>(seq: &S) -> HashSet<&S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Hash + Eq,
{
    (0..seq.len()).map(|i| seq.item(i)).collect()
}

/// `1 - |A ∩ B| / |A ∪ B|` over the distinct elements of each sequence.
///
/// `0.0` when both are empty.
pub fn jaccard<S>(seq1: &S, seq2: &S) -> f64
where
    S: Sequence + ?Sized,
    S::Item: Hash + Eq,
{
    let (set1, set2) = (element_set(seq1), element_set(seq2));
    let union = set1.union(&set2).count();
    if union == 0 {
        return 0.0;
    }
    let common = set1.intersection(&set2).count();
    1.0 - common as f64 / union as f64
}

/// `1 - 2|A ∩ B| / (|A| + |B|)` over the distinct elements of each sequence.
///
/// `0.0` when both are empty.
pub fn sorensen<S>(seq1: &S, seq2: &S) -> f64
where
    S: Sequence + ?Sized,
    S::Item: Hash + Eq,
{
    let (set1, set2) = (element_set(seq1), element_set(seq2));
    let total = set1.len() + set2.len();
    if total == 0 {
        return 0.0;
    }
    let common = set1.intersection(&set2).count();
    1.0 - (2 * common) as f64 / total as f64
}
