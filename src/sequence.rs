// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! What the engines need from a sequence: a length and O(1) element access.
//!
//! Two kinds of adapters live here. [`Symbols`] is a contiguous fixed-width
//! buffer of code points, which is how text gets compared (one element per
//! `char`, so `"café"` has length 4, not 5). Slices, arrays and `Vec`s cover
//! every other indexable collection: bytes, tokens, structured records.
//!
//! The algorithms are written once against [`Sequence`]; nothing in the
//! engines knows which adapter it is looking at.

use std::ops::Deref;

/// An ordered, finite, indexable collection of opaque elements.
pub trait Sequence {
    type Item;

    /// Number of elements.
    fn len(&self) -> usize;

    /// Element at `index`. Callers stay within `0..len()`.
    fn item(&self, index: usize) -> &Self::Item;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Sequence for [T] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn item(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn item(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    fn item(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<S: Sequence + ?Sized> Sequence for &S {
    type Item = S::Item;

    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn item(&self, index: usize) -> &S::Item {
        (**self).item(index)
    }
}

/// Text decoded into one `char` per slot.
///
/// `str` itself can't be a [`Sequence`]: indexing the n-th code point of UTF-8
/// is O(n). Decoding once up front buys O(1) access for the O(n·m) table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Symbols {
    chars: Vec<char>,
}

impl Symbols {
    pub fn new(text: &str) -> Self {
        Symbols {
            chars: text.chars().collect(),
        }
    }

    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }
}

impl From<&str> for Symbols {
    fn from(text: &str) -> Self {
        Symbols::new(text)
    }
}

impl From<String> for Symbols {
    fn from(text: String) -> Self {
        Symbols::new(&text)
    }
}

impl From<Vec<char>> for Symbols {
    fn from(chars: Vec<char>) -> Self {
        Symbols { chars }
    }
}

impl Deref for Symbols {
    type Target = [char];

    fn deref(&self) -> &[char] {
        &self.chars
    }
}

impl std::fmt::Display for Symbols {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{}", c))
    }
}

impl Sequence for Symbols {
    type Item = char;

    #[inline]
    fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    fn item(&self, index: usize) -> &char {
        &self.chars[index]
    }
}
