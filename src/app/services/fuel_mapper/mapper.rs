//! Cascading fuel-label to canonical-category mapper

use std::collections::HashMap;
use tracing::debug;

use super::similarity::similarity_ratio;
use crate::app::models::FuelType;
use crate::constants::{FUEL_CONTAINMENT_BOOST, FUEL_SIMILARITY_THRESHOLD, fuel_keywords};

/// Canonicalizes raw fuel labels against an injected mapping table
///
/// The mapper owns its dictionary (plus a lowercased index built once at
/// construction) and is read-only afterwards, so a single instance is safe
/// to share across concurrent parse invocations.
#[derive(Debug, Clone)]
pub struct FuelTypeMapper {
    /// Raw label to category table, exactly as injected
    mapping: HashMap<String, FuelType>,

    /// Lowercased view of the table for case-insensitive lookup
    lowercase_mapping: HashMap<String, FuelType>,
}

impl FuelTypeMapper {
    /// Build a mapper from an injected label table
    pub fn new(mapping: HashMap<String, FuelType>) -> Self {
        let lowercase_mapping = mapping
            .iter()
            .map(|(label, fuel_type)| (label.to_lowercase(), fuel_type.clone()))
            .collect();

        Self {
            mapping,
            lowercase_mapping,
        }
    }

    /// Map a raw label to its canonical category
    ///
    /// Never fails: unrecognized labels come back as `Other(cleaned)` so the
    /// entry survives into the report instead of being discarded.
    pub fn map(&self, raw_label: &str) -> FuelType {
        let cleaned = raw_label.trim();
        if cleaned.is_empty() {
            return FuelType::Other(String::new());
        }

        // 1. Exact lookup
        if let Some(fuel_type) = self.mapping.get(cleaned) {
            return fuel_type.clone();
        }

        // 2. Case-insensitive lookup
        let lowered = cleaned.to_lowercase();
        if let Some(fuel_type) = self.lowercase_mapping.get(&lowered) {
            return fuel_type.clone();
        }

        // 3. Bidirectional substring containment, longest key wins
        if let Some(fuel_type) = self.containment_match(&lowered) {
            return fuel_type;
        }

        // 4. Similarity-ratio scoring
        if let Some(fuel_type) = self.similarity_match(&lowered) {
            return fuel_type;
        }

        // 5. Keyword inference per category
        if let Some(fuel_type) = infer_from_keywords(&lowered) {
            return fuel_type;
        }

        // 6. Preserve the label rather than discard the entry
        debug!("fuel label '{}' did not match any category", cleaned);
        FuelType::Other(cleaned.to_string())
    }

    /// Substring containment in either direction, preferring the longest key
    fn containment_match(&self, lowered: &str) -> Option<FuelType> {
        let mut best: Option<(usize, &FuelType)> = None;

        for (key, fuel_type) in &self.lowercase_mapping {
            if lowered.contains(key.as_str()) || key.contains(lowered) {
                let key_len = key.chars().count();
                if best.is_none_or(|(best_len, _)| key_len > best_len) {
                    best = Some((key_len, fuel_type));
                }
            }
        }

        best.map(|(_, fuel_type)| fuel_type.clone())
    }

    /// Best similarity-scored key, accepted only above the fixed threshold
    fn similarity_match(&self, lowered: &str) -> Option<FuelType> {
        let mut best: Option<(f64, &FuelType)> = None;

        for (key, fuel_type) in &self.lowercase_mapping {
            let mut score = similarity_ratio(lowered, key);
            if lowered.contains(key.as_str()) || key.contains(lowered) {
                score += FUEL_CONTAINMENT_BOOST;
            }

            if best.is_none_or(|(best_score, _)| score > best_score) {
                best = Some((score, fuel_type));
            }
        }

        match best {
            Some((score, fuel_type)) if score >= FUEL_SIMILARITY_THRESHOLD => {
                debug!("fuzzy fuel match '{}' with score {:.2}", lowered, score);
                Some(fuel_type.clone())
            }
            _ => None,
        }
    }
}

/// Last-resort category inference from per-category keyword fragments
fn infer_from_keywords(lowered: &str) -> Option<FuelType> {
    if fuel_keywords::DIESEL_LIKE.iter().any(|kw| lowered.contains(kw)) {
        return Some(FuelType::Diesel);
    }
    if fuel_keywords::SUPER_LIKE.iter().any(|kw| lowered.contains(kw)) {
        return Some(FuelType::Super);
    }
    if fuel_keywords::REGULAR_LIKE.iter().any(|kw| lowered.contains(kw)) {
        return Some(FuelType::Regular);
    }
    None
}
