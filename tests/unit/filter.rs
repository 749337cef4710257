//! The lazy within-two-edits filter.

use std::cell::Cell;

use super::common::sym;
use distance::{
    filter_within_two, try_filter_within_two, ByValue, DistanceError, Fallible, Symbols,
};

fn words(list: &[&str]) -> Vec<Symbols> {
    list.iter().map(|w| sym(w)).collect()
}

#[test]
fn test_keeps_arrival_order() {
    let candidates = words(&["fo", "bar", "foob", "foo", "foobaz"]);
    let hits: Vec<(u8, String)> = filter_within_two(sym("foo"), &candidates)
        .map(|(d, w)| (d, w.to_string()))
        .collect();
    assert_eq!(
        hits,
        vec![
            (1, "fo".to_string()),
            (1, "foob".to_string()),
            (0, "foo".to_string())
        ]
    );
}

#[test]
fn test_empty_source_yields_nothing() {
    let candidates: Vec<Symbols> = Vec::new();
    assert_eq!(filter_within_two(sym("foo"), candidates).count(), 0);
}

#[test]
fn test_nothing_within_two() {
    let candidates = words(&["kitten", "sitting", "xyz"]);
    let mut filter = filter_within_two(sym("foo"), candidates);
    assert!(filter.next().is_none());
    assert_eq!(filter.scanned(), 3);
    // Fused
    assert!(filter.next().is_none());
}

#[test]
fn test_pulls_only_what_it_needs() {
    let pulled = Cell::new(0usize);
    let source = ["zzzz", "foo", "fooo", "zzzz"].into_iter().map(|w| {
        pulled.set(pulled.get() + 1);
        sym(w)
    });
    let mut filter = filter_within_two(sym("foo"), source);
    assert_eq!(filter.next().map(|(d, _)| d), Some(0));
    assert_eq!(pulled.get(), 2);
    assert_eq!(filter.next().map(|(d, _)| d), Some(1));
    assert_eq!(pulled.get(), 3);
}

#[test]
fn test_unbounded_source() {
    let source = (0u32..).map(|n| sym(&format!("word{}", n)));
    let hits: Vec<String> = filter_within_two(sym("word7"), source)
        .take(3)
        .map(|(_, w)| w.to_string())
        .collect();
    assert_eq!(hits, vec!["word0", "word1", "word2"]);
}

#[test]
fn test_reference_is_kept() {
    let filter = filter_within_two(sym("foo"), Vec::<Symbols>::new());
    assert_eq!(filter.reference(), &sym("foo"));
}

#[test]
fn test_try_filter_passes_through_until_error() {
    let source: Vec<Result<Symbols, DistanceError>> = vec![
        Ok(sym("fo")),
        Ok(sym("bar")),
        Err(DistanceError::TypeMismatch {
            position: 2,
            expected: "string",
            found: "number".to_string(),
        }),
        Ok(sym("foo")),
    ];
    let mut filter = try_filter_within_two(sym("foo"), source, ByValue);
    assert_eq!(filter.next().unwrap().unwrap().0, 1);
    assert!(matches!(
        filter.next(),
        Some(Err(DistanceError::TypeMismatch { position: 2, .. }))
    ));
    // "foo" after the error is never looked at
    assert!(filter.next().is_none());
    assert!(filter.next().is_none());
}

#[test]
fn test_try_filter_halts_on_comparison_failure() {
    let source: Vec<Result<Symbols, DistanceError>> =
        vec![Ok(sym("foo")), Ok(sym("f#o")), Ok(sym("fo"))];
    let eq = Fallible(|a: &char, b: &char| {
        if *a == '#' || *b == '#' {
            Err("unsupported symbol")
        } else {
            Ok(a == b)
        }
    });
    let results: Vec<_> = try_filter_within_two(sym("foo"), source, eq).collect();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].as_ref().unwrap().0, 0);
    assert!(matches!(
        results[1],
        Err(DistanceError::ComparisonFailure { .. })
    ));
}

#[test]
fn test_try_filter_with_anyhow_source() {
    let source = vec![Ok(sym("foo")), Err(anyhow::anyhow!("disk on fire"))];
    let results: Vec<anyhow::Result<(u8, Symbols)>> =
        try_filter_within_two(sym("foo"), source, ByValue).collect();
    assert_eq!(results.len(), 2);
    assert_eq!(results[1].as_ref().unwrap_err().to_string(), "disk on fire");
}
