// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance over arbitrary sequences, in linear space.
//!
//! The textbook table `D[i][j]` has one row per element of the longer sequence
//! and one column per element of the shorter. Only one column is ever live:
//! the outer loop walks the shorter sequence and rewrites the column in place,
//! carrying the diagonal predecessor in a scalar since its cell gets
//! overwritten before it is read.
//!
//! The column is sized by the longer sequence, so the outer loop runs
//! `min(n, m)` times over a contiguous buffer.

use crate::equality::{same_at, ByValue, Equality};
use crate::error::DistanceError;
use crate::metric::Distance;
use crate::sequence::Sequence;

/// Minimum number of insertions, deletions and substitutions turning `seq1`
/// into `seq2`.
///
/// Normalizing divides by the longer length.
///
/// ```
/// use distance::{levenshtein, Symbols};
///
/// let d = levenshtein(&Symbols::new("kitten"), &Symbols::new("sitting")).unwrap();
/// assert_eq!(d.get(), 3);
/// ```
pub fn levenshtein<S>(seq1: &S, seq2: &S) -> Result<Distance, DistanceError>
where
    S: Sequence + ?Sized,
    S::Item: PartialEq,
{
    levenshtein_by(seq1, seq2, &mut ByValue)
}

/// [`levenshtein`] with a caller-supplied equality oracle.
///
/// The first failing comparison aborts the table and is returned as-is.
pub fn levenshtein_by<S, E>(seq1: &S, seq2: &S, eq: &mut E) -> Result<Distance, DistanceError>
where
    S: Sequence + ?Sized,
    E: Equality<S::Item> + ?Sized,
{
    let (len1, len2) = (seq1.len(), seq2.len());
    let longest = len1.max(len2);

    // Pure insertions or deletions, no table needed
    if len1 == 0 || len2 == 0 {
        return Ok(Distance::new(longest, longest));
    }

    let dist = if len1 >= len2 {
        column_distance(seq1, seq2, eq)?
    } else {
        column_distance_swapped(seq1, seq2, eq)?
    };

    crate::contracts::check_length_gap_lower_bound(len1, len2, dist);
    Ok(Distance::new(dist, longest))
}

/// `levenshtein(seq1, seq2)` divided by the longer length; `0.0` for two empty inputs.
pub fn levenshtein_normalized<S>(seq1: &S, seq2: &S) -> Result<f64, DistanceError>
where
    S: Sequence + ?Sized,
    S::Item: PartialEq,
{
    levenshtein(seq1, seq2).map(Distance::normalized)
}

/// Single-column DP with `long.len() >= short.len() > 0`.
fn column_distance<S, E>(long: &S, short: &S, eq: &mut E) -> Result<usize, DistanceError>
where
    S: Sequence + ?Sized,
    E: Equality<S::Item> + ?Sized,
{
    run_columns(long.len(), short.len(), |y, x| {
        same_at(&mut *eq, long, y, short, x)
    })
}

/// Same table with the arguments swapped. Error positions still refer to
/// `(seq1, seq2)` in the caller's order.
fn column_distance_swapped<S, E>(short: &S, long: &S, eq: &mut E) -> Result<usize, DistanceError>
where
    S: Sequence + ?Sized,
    E: Equality<S::Item> + ?Sized,
{
    run_columns(long.len(), short.len(), |y, x| {
        same_at(&mut *eq, short, x, long, y)
    })
}

fn run_columns<F>(long_len: usize, short_len: usize, mut same: F) -> Result<usize, DistanceError>
where
    F: FnMut(usize, usize) -> Result<bool, DistanceError>,
{
    let cells = long_len
        .checked_add(1)
        .ok_or(DistanceError::AllocationFailure {
            requested: long_len,
        })?;
    let mut column: Vec<usize> = Vec::new();
    column
        .try_reserve_exact(cells)
        .map_err(|_| DistanceError::AllocationFailure { requested: cells })?;
    column.extend(0..cells);

    for x in 1..=short_len {
        column[0] = x;
        // D[x-1][0], the diagonal for y = 1
        let mut last = x - 1;
        for y in 1..=long_len {
            let old = column[y];
            let cost = usize::from(!same(y - 1, x - 1)?);
            column[y] = (column[y] + 1).min(column[y - 1] + 1).min(last + cost);
            last = old;
        }
    }

    Ok(column[long_len])
}
