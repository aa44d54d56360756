//! Tests for input normalization

use crate::app::services::report_parser::preprocess::preprocess;
use crate::constants::MAX_LINE_CHARS;

#[test]
fn test_bom_stripped() {
    assert_eq!(preprocess("\u{feff}Diesel 100 350"), "Diesel 100 350");
}

#[test]
fn test_tabs_become_space_runs() {
    let result = preprocess("Diesel\t100\t350");
    assert_eq!(result, "Diesel    100    350");
    // the run is wide enough for the multi-space splitter to see a boundary
    assert!(result.contains("  "));
}

#[test]
fn test_khmer_digits_mapped_to_ascii() {
    assert_eq!(preprocess("ម៉ាស៊ូត ១២០០ ៤២០១"), "ម៉ាស៊ូត 1200 4201");
}

#[test]
fn test_carriage_returns_dropped() {
    assert_eq!(preprocess("line one\r\nline two"), "line one\nline two");
}

#[test]
fn test_control_characters_stripped() {
    assert_eq!(preprocess("Die\u{0000}sel\u{0007} 100"), "Diesel 100");
}

#[test]
fn test_multi_space_runs_preserved() {
    // multi-space is a meaningful delimiter for later stages
    assert_eq!(preprocess("Diesel   100   350"), "Diesel   100   350");
}

#[test]
fn test_empty_input_yields_empty_output() {
    assert_eq!(preprocess(""), "");
}

#[test]
fn test_overlong_line_truncated_at_cap() {
    let long_line = "x".repeat(MAX_LINE_CHARS * 2);
    let result = preprocess(&long_line);
    assert_eq!(result.chars().count(), MAX_LINE_CHARS);
}

#[test]
fn test_line_structure_survives() {
    let input = "header\nDiesel\t100\n\nfooter";
    let result = preprocess(input);
    assert_eq!(result.lines().count(), 4);
}
