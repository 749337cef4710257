// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the distance invariants.
//!
//! Debug-mode assertions, zero-cost in release builds. They catch an engine
//! producing a value that can't be a distance at all, which is cheaper to find
//! here than three layers up in a ranking.
//!
//! | Contract                          | Invariant                                   |
//! |-----------------------------------|---------------------------------------------|
//! | `check_distance_bounded`          | raw ≤ denominator (or both zero)            |
//! | `check_normalized_in_unit_range`  | normalized value in `[0, 1]`                |
//! | `check_bounded_result`            | quick result in `{0, 1, 2}`                 |
//! | `check_length_gap_lower_bound`    | `|len1 - len2| ≤ distance`                  |

/// Bounded quick distances never report more than this.
pub const MAX_QUICK_DISTANCE: u8 = 2;

/// A raw count never exceeds the length it is normalized against.
///
/// # Panics (debug builds only)
/// Panics if `raw > denominator`.
#[inline]
pub fn check_distance_bounded(raw: usize, denominator: usize) {
    debug_assert!(
        raw <= denominator,
        "Contract violation: distance {} exceeds denominator {}",
        raw,
        denominator
    );
}

/// # Panics (debug builds only)
/// Panics if `value` is outside `[0, 1]` or NaN.
#[inline]
pub fn check_normalized_in_unit_range(value: f64) {
    debug_assert!(
        (0.0..=1.0).contains(&value),
        "Contract violation: normalized distance {} outside [0, 1]",
        value
    );
}

/// # Panics (debug builds only)
/// Panics if a quick result is above [`MAX_QUICK_DISTANCE`].
#[inline]
pub fn check_bounded_result(result: Option<u8>) {
    if let Some(d) = result {
        debug_assert!(
            d <= MAX_QUICK_DISTANCE,
            "Contract violation: quick distance {} > {}",
            d,
            MAX_QUICK_DISTANCE
        );
    }
}

/// Every length difference has to be paid for with insertions or deletions.
///
/// # Panics (debug builds only)
/// Panics if `|len1 - len2| > distance`.
#[inline]
pub fn check_length_gap_lower_bound(len1: usize, len2: usize, distance: usize) {
    debug_assert!(
        len1.abs_diff(len2) <= distance,
        "Contract violation: lengths {} and {} can't be {} edits apart",
        len1,
        len2,
        distance
    );
}
