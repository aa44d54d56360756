//! Tests for the normalized edit-distance ratio

use crate::app::services::fuel_mapper::similarity_ratio;

#[test]
fn test_identical_strings() {
    assert_eq!(similarity_ratio("diesel", "diesel"), 1.0);
}

#[test]
fn test_empty_strings_are_identical() {
    assert_eq!(similarity_ratio("", ""), 1.0);
}

#[test]
fn test_disjoint_strings() {
    assert_eq!(similarity_ratio("abc", "xyz"), 0.0);
}

#[test]
fn test_single_edit() {
    // one substitution over six characters
    let ratio = similarity_ratio("diesel", "diesal");
    assert!((ratio - (1.0 - 1.0 / 6.0)).abs() < 1e-9);
}

#[test]
fn test_length_mismatch() {
    // "ea92" vs "ea920": one insertion over max length 5
    let ratio = similarity_ratio("ea92", "ea920");
    assert!((ratio - 0.8).abs() < 1e-9);
}

#[test]
fn test_khmer_compares_per_character() {
    // one character differs out of seven, not a byte-level comparison
    let ratio = similarity_ratio("ម៉ាស៊ូត", "ម៉ាស៊ូរ");
    assert!(ratio > 0.8);
}

#[test]
fn test_symmetry() {
    assert_eq!(
        similarity_ratio("regular", "regulr"),
        similarity_ratio("regulr", "regular")
    );
}
