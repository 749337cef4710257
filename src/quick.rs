// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bounded edit distance: is it 0, 1, 2, or more?
//!
//! Spelling suggestion rarely cares about anything past two edits, and
//! deciding "≤ 2" doesn't need the O(nm) table. With the longer sequence
//! first, the length gap fixes how many deletions any ≤ 2 alignment must use,
//! which leaves only a handful of ways to spend the two allowed edits:
//!
//! | gap | models                                   |
//! |-----|------------------------------------------|
//! | 0   | substitute+substitute, delete+insert, insert+delete |
//! | 1   | substitute+delete, delete+substitute     |
//! | 2   | delete+delete                            |
//! | > 2 | none, the gap alone is more than 2 edits |
//!
//! Each model is replayed by one interpreter: walk both sequences in step, and
//! on a mismatch spend the model's next action. Whatever is left over at the
//! end must be covered by the model's unspent deletions (or insertions). A
//! model that succeeds describes a real alignment, so the smallest successful
//! count is the exact distance whenever that distance is at most 2.
//!
//! O(n) time per model, no allocation.

use std::convert::Infallible;

use crate::contracts::{check_bounded_result, MAX_QUICK_DISTANCE};
use crate::equality::Equality;
use crate::error::DistanceError;
use crate::sequence::Sequence;

/// Numeric form of "more than 2 edits apart".
pub const SENTINEL: i8 = -1;

/// One step a model may take on a mismatch.
///
/// Named from the longer sequence's point of view: `Delete` drops one of its
/// elements, `Insert` adds one to the shorter side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditAction {
    /// Advance the longer sequence only.
    Delete,
    /// Advance the shorter sequence only.
    Insert,
    /// Advance both.
    Substitute,
}

/// An ordered pair of edit actions spent on the first and second mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EditModel([EditAction; 2]);

use EditAction::{Delete, Insert, Substitute};

const EQUAL_LENGTH: [EditModel; 3] = [
    EditModel([Substitute, Substitute]),
    EditModel([Delete, Insert]),
    EditModel([Insert, Delete]),
];
const ONE_LONGER: [EditModel; 2] = [
    EditModel([Substitute, Delete]),
    EditModel([Delete, Substitute]),
];
const TWO_LONGER: [EditModel; 1] = [EditModel([Delete, Delete])];

impl EditModel {
    pub const fn new(first: EditAction, second: EditAction) -> Self {
        EditModel([first, second])
    }

    pub fn actions(&self) -> &[EditAction; 2] {
        &self.0
    }

    /// Models worth trying when the longer sequence has `gap` extra elements.
    ///
    /// Empty for `gap > 2`: no alignment within two edits exists.
    pub fn for_length_gap(gap: usize) -> &'static [EditModel] {
        match gap {
            0 => &EQUAL_LENGTH,
            1 => &ONE_LONGER,
            2 => &TWO_LONGER,
            _ => &[],
        }
    }

    /// How many of `action` remain once `spent` actions have been used.
    fn unspent(&self, spent: usize, action: EditAction) -> usize {
        self.0[spent..].iter().filter(|&&a| a == action).count()
    }

    /// Replay this model over `long` (length `long_len`) and `short`.
    ///
    /// `same(i, j)` compares `long[i]` with `short[j]`. Returns the number of
    /// edits spent, or `None` if the model can't align the two.
    fn replay<X, F>(
        &self,
        long_len: usize,
        short_len: usize,
        same: &mut F,
    ) -> Result<Option<usize>, X>
    where
        F: FnMut(usize, usize) -> Result<bool, X>,
    {
        let (mut i, mut j, mut spent) = (0, 0, 0);

        while i < long_len && j < short_len {
            if same(i, j)? {
                i += 1;
                j += 1;
                continue;
            }
            let Some(&action) = self.0.get(spent) else {
                // Third mismatch
                return Ok(None);
            };
            spent += 1;
            match action {
                Delete => i += 1,
                Insert => j += 1,
                Substitute => {
                    i += 1;
                    j += 1;
                }
            }
        }

        // At most one side has a tail left
        let (tail, absorbing) = if i < long_len {
            (long_len - i, Delete)
        } else {
            (short_len - j, Insert)
        };
        if tail > self.unspent(spent, absorbing) {
            return Ok(None);
        }

        Ok(Some(spent + tail))
    }
}

/// Edit distance between `seq1` and `seq2` if it is at most 2, `None` otherwise.
///
/// Exact for every pair within two edits. Never use it where a precise value
/// above 2 matters: `None` only says "more than 2".
///
/// ```
/// use distance::{quick_distance, Symbols};
///
/// assert_eq!(quick_distance(&Symbols::new("foo"), &Symbols::new("fo")), Some(1));
/// assert_eq!(quick_distance(&Symbols::new("foo"), &Symbols::new("foobaz")), None);
/// ```
pub fn quick_distance<S>(seq1: &S, seq2: &S) -> Option<u8>
where
    S: Sequence + ?Sized,
    S::Item: PartialEq,
{
    let same = |i: usize, j: usize| Ok::<_, Infallible>(seq1.item(i) == seq2.item(j));
    match bounded(seq1.len(), seq2.len(), same) {
        Ok(result) => result,
        Err(never) => match never {},
    }
}

/// [`quick_distance`] with a caller-supplied equality oracle.
pub fn quick_distance_by<S, E>(seq1: &S, seq2: &S, eq: &mut E) -> Result<Option<u8>, DistanceError>
where
    S: Sequence + ?Sized,
    E: Equality<S::Item> + ?Sized,
{
    let same = |i: usize, j: usize| {
        eq.equal(seq1.item(i), seq2.item(j))
            .map_err(|reason| DistanceError::comparison(i, j, reason))
    };
    bounded(seq1.len(), seq2.len(), same)
}

/// Map a quick result to its numeric form: the distance, or [`SENTINEL`].
pub fn to_code(result: Option<u8>) -> i8 {
    result.map_or(SENTINEL, |d| d as i8)
}

/// `same(i, j)` compares `seq1[i]` with `seq2[j]` in the caller's order.
fn bounded<X, F>(len1: usize, len2: usize, mut same: F) -> Result<Option<u8>, X>
where
    F: FnMut(usize, usize) -> Result<bool, X>,
{
    let result = if len1 >= len2 {
        try_models(len1, len2, &mut same)?
    } else {
        try_models(len2, len1, &mut |i, j| same(j, i))?
    };
    check_bounded_result(result);
    Ok(result)
}

fn try_models<X, F>(long_len: usize, short_len: usize, same: &mut F) -> Result<Option<u8>, X>
where
    F: FnMut(usize, usize) -> Result<bool, X>,
{
    let gap = long_len - short_len;
    let mut best: Option<usize> = None;

    for model in EditModel::for_length_gap(gap) {
        if let Some(spent) = model.replay(long_len, short_len, same)? {
            best = Some(best.map_or(spent, |b| b.min(spent)));
            // The length gap is a lower bound on the distance
            if spent == gap {
                break;
            }
        }
    }

    Ok(best
        .filter(|&d| d <= usize::from(MAX_QUICK_DISTANCE))
        .map(|d| d as u8))
}
