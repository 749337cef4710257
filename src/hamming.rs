// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Hamming distance: positional mismatches between equal-length sequences.

use crate::equality::{same_at, ByValue, Equality};
use crate::error::DistanceError;
use crate::metric::Distance;
use crate::sequence::Sequence;

/// Number of positions at which `seq1` and `seq2` differ.
///
/// Fails with [`DistanceError::LengthMismatch`] before comparing anything if
/// the lengths differ. Normalizing divides by that common length.
///
/// ```
/// use distance::{hamming, Symbols};
///
/// let d = hamming(&Symbols::new("abc"), &Symbols::new("abd")).unwrap();
/// assert_eq!(d.get(), 1);
/// ```
pub fn hamming<S>(seq1: &S, seq2: &S) -> Result<Distance, DistanceError>
where
    S: Sequence + ?Sized,
    S::Item: PartialEq,
{
    hamming_by(seq1, seq2, &mut ByValue)
}

/// [`hamming`] with a caller-supplied equality oracle.
pub fn hamming_by<S, E>(seq1: &S, seq2: &S, eq: &mut E) -> Result<Distance, DistanceError>
where
    S: Sequence + ?Sized,
    E: Equality<S::Item> + ?Sized,
{
    let len = seq1.len();
    if len != seq2.len() {
        return Err(DistanceError::LengthMismatch {
            left: len,
            right: seq2.len(),
        });
    }

    let mut dist = 0;
    for i in 0..len {
        if !same_at(eq, seq1, i, seq2, i)? {
            dist += 1;
        }
    }

    Ok(Distance::new(dist, len))
}

/// `hamming(seq1, seq2)` divided by the common length; `0.0` for two empty inputs.
pub fn hamming_normalized<S>(seq1: &S, seq2: &S) -> Result<f64, DistanceError>
where
    S: Sequence + ?Sized,
    S::Item: PartialEq,
{
    hamming(seq1, seq2).map(Distance::normalized)
}
