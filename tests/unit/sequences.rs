//! Sequence adapters and user-defined element types.

use super::common::sym;
use distance::{hamming, levenshtein, quick_distance, Sequence, Symbols};

#[test]
fn test_symbols_round_trip_text() {
    let s = Symbols::new("héllo wörld");
    assert_eq!(s.len(), 11);
    assert_eq!(*s.item(1), 'é');
    assert_eq!(s.to_string(), "héllo wörld");
    assert_eq!(Symbols::from("abc"), Symbols::from(String::from("abc")));
    assert_eq!(Symbols::from(vec!['a', 'b']), sym("ab"));
    assert!(Symbols::default().is_empty());
}

#[test]
fn test_arrays_slices_and_vecs_agree() {
    let a = [1u8, 2, 3, 4];
    let b = [1u8, 3, 3, 4];
    let from_array = levenshtein(&a, &b).unwrap().get();
    let from_slice = levenshtein(&a[..], &b[..]).unwrap().get();
    let from_vec = levenshtein(&a.to_vec(), &b.to_vec()).unwrap().get();
    assert_eq!(from_array, 1);
    assert_eq!(from_slice, 1);
    assert_eq!(from_vec, 1);
}

/// A record compared on one field only.
#[derive(Debug)]
struct Reading {
    sensor: &'static str,
    #[allow(dead_code)]
    value: f32,
}

impl PartialEq for Reading {
    fn eq(&self, other: &Self) -> bool {
        self.sensor == other.sensor
    }
}

fn reading(sensor: &'static str, value: f32) -> Reading {
    Reading { sensor, value }
}

#[test]
fn test_custom_elements_use_their_own_equality() {
    let a = vec![reading("t1", 0.5), reading("t2", 1.0), reading("t3", 2.0)];
    let b = vec![reading("t1", 9.0), reading("t3", 2.0)];
    assert_eq!(levenshtein(&a, &b).unwrap().get(), 1);
    assert_eq!(quick_distance(&a, &b), Some(1));
    assert!(hamming(&a, &b).is_err());
}

/// A sequence backed by something that isn't a slice.
struct Repeated {
    item: char,
    times: usize,
}

impl Sequence for Repeated {
    type Item = char;

    fn len(&self) -> usize {
        self.times
    }

    fn item(&self, _index: usize) -> &char {
        &self.item
    }
}

#[test]
fn test_custom_sequence_type() {
    let a = Repeated {
        item: 'a',
        times: 5,
    };
    let b = Repeated {
        item: 'a',
        times: 3,
    };
    assert_eq!(levenshtein(&a, &b).unwrap().get(), 2);
    assert_eq!(quick_distance(&a, &b), Some(2));
    let c = Repeated {
        item: 'b',
        times: 5,
    };
    assert_eq!(hamming(&a, &c).unwrap().get(), 5);
}
