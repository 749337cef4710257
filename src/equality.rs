// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The equality oracle: how two elements are compared.
//!
//! Most callers want plain `==`, which is [`ByValue`] and can't fail. Callers
//! whose comparison can fail (a lookup, a decode, a remote check) wrap a closure
//! in [`Fallible`]. The engines surface such failures as
//! [`DistanceError::ComparisonFailure`](crate::DistanceError::ComparisonFailure)
//! instead of counting them as mismatches.

use std::convert::Infallible;
use std::fmt;

use crate::error::DistanceError;
use crate::sequence::Sequence;

/// Pairwise element equality, possibly fallible.
pub trait Equality<T: ?Sized> {
    type Error: fmt::Display;

    fn equal(&mut self, left: &T, right: &T) -> Result<bool, Self::Error>;
}

/// `PartialEq` equality.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByValue;

impl<T: PartialEq + ?Sized> Equality<T> for ByValue {
    type Error = Infallible;

    #[inline]
    fn equal(&mut self, left: &T, right: &T) -> Result<bool, Infallible> {
        Ok(left == right)
    }
}

/// Caller-supplied comparison that may fail.
///
/// ```
/// use distance::{levenshtein_by, Fallible};
///
/// let a = [1, 2, 3];
/// let b = [1, 2, 4];
/// let mut eq = Fallible(|x: &i32, y: &i32| Ok::<_, String>(x == y));
/// assert_eq!(levenshtein_by(&a[..], &b[..], &mut eq).unwrap().get(), 1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F>(pub F);

impl<T, E, F> Equality<T> for Fallible<F>
where
    T: ?Sized,
    E: fmt::Display,
    F: FnMut(&T, &T) -> Result<bool, E>,
{
    type Error = E;

    #[inline]
    fn equal(&mut self, left: &T, right: &T) -> Result<bool, E> {
        (self.0)(left, right)
    }
}

impl<T: ?Sized, Q: Equality<T> + ?Sized> Equality<T> for &mut Q {
    type Error = Q::Error;

    #[inline]
    fn equal(&mut self, left: &T, right: &T) -> Result<bool, Q::Error> {
        (**self).equal(left, right)
    }
}

/// Compare `seq1[i]` with `seq2[j]`, tagging oracle failures with both positions.
#[inline]
pub(crate) fn same_at<S, E>(
    eq: &mut E,
    seq1: &S,
    i: usize,
    seq2: &S,
    j: usize,
) -> Result<bool, DistanceError>
where
    S: Sequence + ?Sized,
    E: Equality<S::Item> + ?Sized,
{
    eq.equal(seq1.item(i), seq2.item(j))
        .map_err(|reason| DistanceError::comparison(i, j, reason))
}
