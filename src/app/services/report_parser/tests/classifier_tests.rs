//! Tests for structural line classification

use crate::app::models::LineRole;
use crate::app::services::report_parser::classifier::LineClassifier;
use crate::app::services::report_parser::fuel_line::FuelLineParser;

fn classify(line: &str) -> LineRole {
    LineClassifier::new().classify(line, &FuelLineParser::new())
}

#[test]
fn test_pump_marker_variants() {
    assert_eq!(classify("Pump 1"), LineRole::PumpMarker);
    assert_eq!(classify("PUMP #2"), LineRole::PumpMarker);
    assert_eq!(classify("Dispenser no. 3"), LineRole::PumpMarker);
    assert_eq!(classify("ម៉ាស៊ីនបូម 2"), LineRole::PumpMarker);
}

#[test]
fn test_pump_word_without_number_is_not_marker() {
    assert_ne!(classify("Pump maintenance done"), LineRole::PumpMarker);
}

#[test]
fn test_section_boundaries() {
    assert_eq!(classify("Summary"), LineRole::SectionBoundary);
    assert_eq!(classify("TOTAL SALES: 2570.5L | $8932.25"), LineRole::SectionBoundary);
    assert_eq!(classify("សរុប"), LineRole::SectionBoundary);
}

#[test]
fn test_header_row() {
    assert_eq!(classify("Fuel Type  Volume  Amount"), LineRole::Header);
    assert_eq!(classify("Type Qty Price"), LineRole::Header);
}

#[test]
fn test_fuel_data_via_speculative_parse() {
    assert_eq!(classify("Diesel  1200.5  4201.75"), LineRole::FuelData);
    assert_eq!(classify("EA92 950 3325"), LineRole::FuelData);
}

#[test]
fn test_unclassified_prose() {
    assert_eq!(classify("thank you and see you tomorrow"), LineRole::Unclassified);
}

#[test]
fn test_classify_lines_skips_empty_and_keeps_indices() {
    let text = "Pump 1\n\nDiesel  100  350\n\nSummary";
    let lines = LineClassifier::new().classify_lines(text, &FuelLineParser::new());

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].index, 0);
    assert_eq!(lines[1].index, 2);
    assert_eq!(lines[2].index, 4);
    assert_eq!(lines[1].role, LineRole::FuelData);
}

#[test]
fn test_classification_rule_order_pump_before_data() {
    // "Pump 1" could parse as label+number; the pump rule must win
    assert_eq!(classify("Pump 1"), LineRole::PumpMarker);
}
