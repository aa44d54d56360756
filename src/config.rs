//! Configuration management for the parsing pipeline.
//!
//! Provides the injectable [`ParserConfig`] that carries the fuel-label
//! mapping table, the known-location and company-prefix lists, the totals
//! tolerances, and the input size caps. Station templates drift over time;
//! drift is handled by updating this data, never by forking parser code.

use crate::app::models::FuelType;
use crate::constants::{self, fuel_labels};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration for a [`crate::ReportParser`] instance
///
/// Built once, passed by value at construction, and treated as read-only
/// thereafter. [`ParserConfig::default`] reproduces the constants derived
/// from the historical report templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Raw fuel label to canonical category mapping table
    pub fuel_mapping: HashMap<String, FuelType>,

    /// Closed list of known station locations (Khmer and Latin spellings)
    pub known_locations: Vec<String>,

    /// Known company prefix tokens, matched case-insensitively
    pub company_prefixes: Vec<String>,

    /// Percentage difference below which a reported total is authoritative
    pub totals_tight_tolerance_pct: f64,

    /// Percentage difference above which the calculated total wins
    pub totals_wide_tolerance_pct: f64,

    /// Hard input cap in characters
    pub max_input_chars: usize,

    /// Hard input cap in lines
    pub max_input_lines: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        let mut fuel_mapping = HashMap::new();
        for label in fuel_labels::DIESEL {
            fuel_mapping.insert((*label).to_string(), FuelType::Diesel);
        }
        for label in fuel_labels::REGULAR {
            fuel_mapping.insert((*label).to_string(), FuelType::Regular);
        }
        for label in fuel_labels::SUPER {
            fuel_mapping.insert((*label).to_string(), FuelType::Super);
        }

        Self {
            fuel_mapping,
            known_locations: constants::KNOWN_LOCATIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            company_prefixes: constants::COMPANY_PREFIXES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            totals_tight_tolerance_pct: constants::TOTALS_TIGHT_TOLERANCE_PCT,
            totals_wide_tolerance_pct: constants::TOTALS_WIDE_TOLERANCE_PCT,
            max_input_chars: constants::MAX_INPUT_CHARS,
            max_input_lines: constants::MAX_INPUT_LINES,
        }
    }
}

impl ParserConfig {
    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.fuel_mapping.is_empty() {
            return Err(Error::configuration(
                "fuel mapping table must not be empty",
            ));
        }

        if self.totals_tight_tolerance_pct < 0.0 || self.totals_wide_tolerance_pct < 0.0 {
            return Err(Error::configuration(
                "totals tolerances must be non-negative percentages",
            ));
        }

        if self.totals_tight_tolerance_pct >= self.totals_wide_tolerance_pct {
            return Err(Error::configuration(format!(
                "tight tolerance {}% must be below wide tolerance {}%",
                self.totals_tight_tolerance_pct, self.totals_wide_tolerance_pct
            )));
        }

        if self.max_input_chars == 0 || self.max_input_lines == 0 {
            return Err(Error::configuration("input size caps must be positive"));
        }

        Ok(())
    }

    /// Load configuration from a JSON file, validating after deserialization
    pub fn from_json_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("failed to read config file {}", path.display()), e))?;

        let config: Self = serde_json::from_str(&content).map_err(|e| {
            Error::serialization(format!("invalid config file {}", path.display()), e)
        })?;

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ParserConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.fuel_mapping.get("EA92"), Some(&FuelType::Regular));
        assert_eq!(config.fuel_mapping.get("ម៉ាស៊ូត"), Some(&FuelType::Diesel));
    }

    #[test]
    fn test_inverted_tolerances_rejected() {
        let config = ParserConfig {
            totals_tight_tolerance_pct: 10.0,
            totals_wide_tolerance_pct: 2.0,
            ..ParserConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_mapping_rejected() {
        let config = ParserConfig {
            fuel_mapping: HashMap::new(),
            ..ParserConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
