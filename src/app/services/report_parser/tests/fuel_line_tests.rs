//! Tests for the layered fuel-line splitter

use crate::app::services::report_parser::fuel_line::{FuelLineParser, clean_number};

fn parser() -> FuelLineParser {
    FuelLineParser::new()
}

#[test]
fn test_tab_delimited_line() {
    let raw = parser().parse_line("Diesel\t1200.5\t4201.75").unwrap();
    assert_eq!(raw.raw_label, "Diesel");
    assert_eq!(raw.volume, 1200.5);
    assert_eq!(raw.amount, 4201.75);
}

#[test]
fn test_multi_space_aligned_columns() {
    let raw = parser().parse_line("សាំងធម្មតា    950   3325.50").unwrap();
    assert_eq!(raw.raw_label, "សាំងធម្មតា");
    assert_eq!(raw.volume, 950.0);
    assert_eq!(raw.amount, 3325.50);
}

#[test]
fn test_single_space_regex_shape() {
    let raw = parser().parse_line("EA95 420 1680").unwrap();
    assert_eq!(raw.raw_label, "EA95");
    assert_eq!(raw.volume, 420.0);
    assert_eq!(raw.amount, 1680.0);
}

#[test]
fn test_amount_omitted_defaults_to_zero() {
    let raw = parser().parse_line("Diesel 850").unwrap();
    assert_eq!(raw.volume, 850.0);
    assert_eq!(raw.amount, 0.0);
}

#[test]
fn test_multi_word_label_whitespace_fallback() {
    let raw = parser().parse_line("* Premium Diesel 100 350").unwrap();
    assert_eq!(raw.raw_label, "* Premium Diesel");
    assert_eq!(raw.volume, 100.0);
    assert_eq!(raw.amount, 350.0);
}

#[test]
fn test_currency_and_unit_decorations_cleaned() {
    let raw = parser().parse_line("ម៉ាស៊ូត  1,200.5L  $4,201.75").unwrap();
    assert_eq!(raw.volume, 1200.5);
    assert_eq!(raw.amount, 4201.75);
}

#[test]
fn test_zero_volume_rejects_line() {
    assert!(parser().parse_line("Diesel 0 350").is_none());
}

#[test]
fn test_negative_volume_rejects_line() {
    assert!(parser().parse_line("Diesel  -5  350").is_none());
}

#[test]
fn test_header_row_is_not_data() {
    assert!(parser().parse_line("Fuel  Volume  Amount").is_none());
}

#[test]
fn test_plain_prose_is_not_data() {
    assert!(parser().parse_line("report for last week").is_none());
    assert!(parser().parse_line("").is_none());
}

#[test]
fn test_purely_numeric_line_rejected() {
    // no alphabetic label: noise, not a fuel line
    assert!(parser().parse_line("100  350").is_none());
}

#[test]
fn test_clean_number_strips_decorations() {
    assert_eq!(clean_number("1,200.5L"), Some(1200.5));
    assert_eq!(clean_number("$4201.75"), Some(4201.75));
    assert_eq!(clean_number("-5"), Some(-5.0));
}

#[test]
fn test_clean_number_empty_extraction() {
    assert_eq!(clean_number("Volume"), None);
    assert_eq!(clean_number(""), None);
}

#[test]
fn test_clean_number_malformed_degrades_to_zero() {
    // digits survive extraction but the float parse fails
    assert_eq!(clean_number("1.2.3"), Some(0.0));
}
