//! Tests for the fuel-label mapping cascade

use crate::app::models::FuelType;
use crate::app::services::fuel_mapper::FuelTypeMapper;
use crate::config::ParserConfig;
use std::collections::HashMap;

fn default_mapper() -> FuelTypeMapper {
    FuelTypeMapper::new(ParserConfig::default().fuel_mapping)
}

#[test]
fn test_exact_lookup() {
    let mapper = default_mapper();
    assert_eq!(mapper.map("EA92"), FuelType::Regular);
    assert_eq!(mapper.map("Diesel"), FuelType::Diesel);
    assert_eq!(mapper.map("EA95"), FuelType::Super);
}

#[test]
fn test_case_insensitive_lookup() {
    let mapper = default_mapper();
    assert_eq!(mapper.map("ea92"), FuelType::Regular);
    assert_eq!(mapper.map("DIESEL"), FuelType::Diesel);
}

#[test]
fn test_khmer_diesel_label() {
    let mapper = default_mapper();
    assert_eq!(mapper.map("ម៉ាស៊ូត"), FuelType::Diesel);
    assert_eq!(mapper.map("ប្រេងម៉ាស៊ូត"), FuelType::Diesel);
}

#[test]
fn test_substring_containment() {
    let mapper = default_mapper();
    // Label decorated with template noise still contains a dictionary key
    assert_eq!(mapper.map("Diesel (premium)"), FuelType::Diesel);
    assert_eq!(mapper.map("* EA95 *"), FuelType::Super);
}

#[test]
fn test_similarity_match_typo() {
    let mapper = default_mapper();
    // One substitution away from "diesel"
    assert_eq!(mapper.map("Diesal"), FuelType::Diesel);
}

#[test]
fn test_keyword_inference() {
    let mut table = HashMap::new();
    table.insert("placeholder".to_string(), FuelType::Other("x".into()));
    let mapper = FuelTypeMapper::new(table);

    assert_eq!(mapper.map("fuel 92 grade"), FuelType::Regular);
    assert_eq!(mapper.map("grade 95 petrol"), FuelType::Super);
}

#[test]
fn test_unmatched_label_preserved_as_other() {
    let mapper = default_mapper();
    match mapper.map("Kerosene") {
        FuelType::Other(label) => assert_eq!(label, "Kerosene"),
        other => panic!("expected Other, got {:?}", other),
    }
}

#[test]
fn test_whitespace_trimmed_before_lookup() {
    let mapper = default_mapper();
    assert_eq!(mapper.map("  Diesel  "), FuelType::Diesel);
}

#[test]
fn test_injected_table_overrides_defaults() {
    let mut table = HashMap::new();
    table.insert("LPG".to_string(), FuelType::Other("LPG".into()));
    table.insert("B7".to_string(), FuelType::Diesel);
    let mapper = FuelTypeMapper::new(table);

    assert_eq!(mapper.map("B7"), FuelType::Diesel);
    assert_eq!(mapper.map("LPG"), FuelType::Other("LPG".into()));
}
