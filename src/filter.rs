// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Lazily keep the candidates within two edits of a reference.
//!
//! Typical use is pruning a dictionary down to plausible spelling suggestions
//! before doing anything expensive. The filter pulls one candidate at a time,
//! so the source can be a generator, a file reader, or anything else too big
//! to hold in memory. Pairs come out in arrival order; sort them yourself if
//! you want the closest first.
//!
//! ```
//! use distance::{filter_within_two, Symbols};
//!
//! let words = ["fo", "bar", "foob", "foo", "foobaz"].map(Symbols::new);
//! let hits: Vec<(u8, String)> = filter_within_two(Symbols::new("foo"), words)
//!     .map(|(d, w)| (d, w.to_string()))
//!     .collect();
//! assert_eq!(
//!     hits,
//!     vec![(1, "fo".into()), (1, "foob".into()), (0, "foo".into())]
//! );
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::iter::{Fuse, FusedIterator};

use tracing::{debug, trace};

use crate::equality::Equality;
use crate::error::DistanceError;
use crate::quick::{quick_distance, quick_distance_by};
use crate::sequence::Sequence;

/// Candidates within two edits of `reference`, as `(distance, candidate)`.
pub fn filter_within_two<S, I>(reference: S, candidates: I) -> Filter<S, I::IntoIter>
where
    S: Sequence,
    S::Item: PartialEq,
    I: IntoIterator,
    I::Item: Borrow<S>,
{
    Filter {
        reference,
        source: candidates.into_iter().fuse(),
        position: 0,
    }
}

/// [`filter_within_two`] over a fallible source with a caller-supplied oracle.
///
/// The source's own error type is kept; comparison failures are converted into
/// it. The first error from either is yielded once and ends the scan. Nothing
/// after it is looked at.
pub fn try_filter_within_two<S, I, C, X, E>(
    reference: S,
    candidates: I,
    eq: E,
) -> TryFilter<S, I::IntoIter, E>
where
    S: Sequence,
    I: IntoIterator<Item = Result<C, X>>,
    C: Borrow<S>,
    X: From<DistanceError> + fmt::Display,
    E: Equality<S::Item>,
{
    TryFilter {
        reference,
        source: candidates.into_iter().fuse(),
        eq,
        position: 0,
        halted: false,
    }
}

/// Iterator returned by [`filter_within_two`].
#[derive(Debug, Clone)]
pub struct Filter<S, I> {
    reference: S,
    source: Fuse<I>,
    position: usize,
}

impl<S, I> Filter<S, I> {
    pub fn reference(&self) -> &S {
        &self.reference
    }

    /// Candidates pulled from the source so far, kept or not.
    pub fn scanned(&self) -> usize {
        self.position
    }
}

impl<S, I> Iterator for Filter<S, I>
where
    S: Sequence,
    S::Item: PartialEq,
    I: Iterator,
    I::Item: Borrow<S>,
{
    type Item = (u8, I::Item);

    fn next(&mut self) -> Option<Self::Item> {
        for candidate in self.source.by_ref() {
            let position = self.position;
            self.position += 1;
            match quick_distance(&self.reference, Borrow::<S>::borrow(&candidate)) {
                Some(d) => {
                    trace!(position, distance = d, "candidate kept");
                    return Some((d, candidate));
                }
                None => trace!(position, "candidate skipped"),
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.source.size_hint().1)
    }
}

impl<S, I> FusedIterator for Filter<S, I>
where
    S: Sequence,
    S::Item: PartialEq,
    I: Iterator,
    I::Item: Borrow<S>,
{
}

/// Iterator returned by [`try_filter_within_two`].
#[derive(Debug)]
pub struct TryFilter<S, I, E> {
    reference: S,
    source: Fuse<I>,
    eq: E,
    position: usize,
    halted: bool,
}

impl<S, I, E> TryFilter<S, I, E> {
    pub fn reference(&self) -> &S {
        &self.reference
    }

    /// Candidates pulled from the source so far, kept or not.
    pub fn scanned(&self) -> usize {
        self.position
    }

    fn halt<X: fmt::Display>(&mut self, err: X) -> X {
        debug!(position = self.position, error = %err, "filter halted");
        self.halted = true;
        err
    }
}

impl<S, I, C, X, E> Iterator for TryFilter<S, I, E>
where
    S: Sequence,
    I: Iterator<Item = Result<C, X>>,
    C: Borrow<S>,
    X: From<DistanceError> + fmt::Display,
    E: Equality<S::Item>,
{
    type Item = Result<(u8, C), X>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.halted {
            let candidate = match self.source.next()? {
                Ok(candidate) => candidate,
                Err(err) => return Some(Err(self.halt(err))),
            };
            let position = self.position;
            self.position += 1;
            match quick_distance_by(
                &self.reference,
                Borrow::<S>::borrow(&candidate),
                &mut self.eq,
            ) {
                Ok(Some(d)) => {
                    trace!(position, distance = d, "candidate kept");
                    return Some(Ok((d, candidate)));
                }
                Ok(None) => trace!(position, "candidate skipped"),
                Err(err) => return Some(Err(self.halt(X::from(err)))),
            }
        }
        None
    }
}
