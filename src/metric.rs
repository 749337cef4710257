// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Distance values: a raw count plus the denominator it normalizes against.

use std::fmt;

/// A raw distance and the length it is normalized by.
///
/// Hamming normalizes by the common length, Levenshtein by the longer of the
/// two. A zero denominator means both inputs were empty, which normalizes to
/// `0.0` (identical) instead of dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Distance {
    raw: usize,
    denominator: usize,
}

impl Distance {
    pub(crate) fn new(raw: usize, denominator: usize) -> Self {
        crate::contracts::check_distance_bounded(raw, denominator);
        Distance { raw, denominator }
    }

    /// The edit or mismatch count.
    #[inline]
    pub fn get(self) -> usize {
        self.raw
    }

    /// The length the count is normalized against.
    #[inline]
    pub fn denominator(self) -> usize {
        self.denominator
    }

    /// `raw / denominator` in `[0, 1]`; `0.0` when both inputs were empty.
    pub fn normalized(self) -> f64 {
        if self.denominator == 0 {
            return 0.0;
        }
        let value = self.raw as f64 / self.denominator as f64;
        crate::contracts::check_normalized_in_unit_range(value);
        value
    }
}

impl From<Distance> for usize {
    fn from(distance: Distance) -> usize {
        distance.raw
    }
}

impl PartialEq<usize> for Distance {
    fn eq(&self, other: &usize) -> bool {
        self.raw == *other
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
