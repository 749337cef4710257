//! Hamming, Levenshtein and bounded quick-Levenshtein distances between
//! arbitrary sequences.
//!
//! Elements are opaque: anything that can be indexed in O(1) and compared for
//! equality works. Text goes through [`Symbols`] (one element per `char`);
//! slices, arrays and `Vec`s cover tokens, bytes and records.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐
//! │ sequence.rs  │   │ equality.rs  │   length + item(i)   /   a == b (maybe fallible)
//! └──────┬───────┘   └──────┬───────┘
//!        └────────┬─────────┘
//!        ┌────────┼──────────────────┬──────────────┐
//!        ▼        ▼                  ▼              ▼
//! ┌────────────┐ ┌────────────────┐ ┌──────────┐ ┌─────────┐
//! │ hamming.rs │ │ levenshtein.rs │ │ quick.rs │ │ sets.rs │
//! └────────────┘ └────────────────┘ └────┬─────┘ └─────────┘
//!                                        ▼
//!                                  ┌───────────┐
//!                                  │ filter.rs │  lazy (distance, candidate) stream
//!                                  └───────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use distance::{hamming, levenshtein, quick_distance, Symbols};
//!
//! let (a, b) = (Symbols::new("kitten"), Symbols::new("sitting"));
//! assert_eq!(levenshtein(&a, &b).unwrap().get(), 3);
//! assert_eq!(quick_distance(&a, &b), None);
//!
//! let d = hamming(&Symbols::new("abc"), &Symbols::new("abd")).unwrap();
//! assert!((d.normalized() - 1.0 / 3.0).abs() < 1e-12);
//! ```

// Module declarations
pub mod contracts;
mod equality;
mod error;
mod filter;
mod hamming;
mod levenshtein;
mod metric;
mod quick;
mod sequence;
mod sets;

// Re-exports for public API
pub use equality::{ByValue, Equality, Fallible};
pub use error::DistanceError;
pub use filter::{filter_within_two, try_filter_within_two, Filter, TryFilter};
pub use hamming::{hamming, hamming_by, hamming_normalized};
pub use levenshtein::{levenshtein, levenshtein_by, levenshtein_normalized};
pub use metric::Distance;
pub use quick::{quick_distance, quick_distance_by, to_code, EditAction, EditModel, SENTINEL};
pub use sequence::{Sequence, Symbols};
pub use sets::{jaccard, sorensen};
