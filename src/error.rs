// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Everything that can go wrong while measuring a distance.
//!
//! None of these are retried or downgraded into a distance value. The "more
//! than 2" outcome of [`quick_distance`](crate::quick_distance) is not an error
//! and never shows up here.

use std::fmt;

/// Error type for the distance engines and the candidate filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DistanceError {
    /// Hamming distance requested on sequences of different lengths.
    LengthMismatch { left: usize, right: usize },
    /// A candidate is not a sequence of the expected element type.
    TypeMismatch {
        position: usize,
        expected: &'static str,
        found: String,
    },
    /// The caller-supplied equality oracle failed while comparing two elements.
    ComparisonFailure {
        left: usize,
        right: usize,
        reason: String,
    },
    /// The working column for the edit-distance table could not be reserved.
    AllocationFailure { requested: usize },
}

impl DistanceError {
    /// Wrap an oracle failure at positions `left` / `right`.
    pub(crate) fn comparison(left: usize, right: usize, reason: impl fmt::Display) -> Self {
        DistanceError::ComparisonFailure {
            left,
            right,
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for DistanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistanceError::LengthMismatch { left, right } => {
                write!(
                    f,
                    "expected two sequences of the same length, got {} and {}",
                    left, right
                )
            }
            DistanceError::TypeMismatch {
                position,
                expected,
                found,
            } => {
                write!(
                    f,
                    "candidate {} should be a {}, found {}",
                    position, expected, found
                )
            }
            DistanceError::ComparisonFailure {
                left,
                right,
                reason,
            } => {
                write!(
                    f,
                    "failed to compare elements at {} and {}: {}",
                    left, right, reason
                )
            }
            DistanceError::AllocationFailure { requested } => {
                write!(
                    f,
                    "could not allocate a working column of {} cells",
                    requested
                )
            }
        }
    }
}

impl std::error::Error for DistanceError {}
