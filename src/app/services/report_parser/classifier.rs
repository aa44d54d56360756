//! Structural role assignment for report lines
//!
//! Classification happens once, right after preprocessing, and every
//! downstream stage reads the same classified list instead of re-deriving
//! structure. Rules are ordered; the first that matches wins.

use regex::Regex;
use tracing::trace;

use super::fuel_line::FuelLineParser;
use crate::app::models::{ClassifiedLine, LineRole};
use crate::constants::{HEADER_WORDS, SECTION_KEYWORDS};

/// Maximum token count for the header-row heuristic
const HEADER_MAX_TOKENS: usize = 6;

/// Maximum token length for the header-row heuristic
const HEADER_MAX_TOKEN_LEN: usize = 12;

/// Assigns a [`LineRole`] to every non-empty line
#[derive(Debug, Clone)]
pub struct LineClassifier {
    /// Pump label word followed by a number ("Pump 1", "ម៉ាស៊ីនបូម 2")
    pump_marker: Regex,
}

impl LineClassifier {
    pub fn new() -> Self {
        Self {
            pump_marker: Regex::new(r"(?i)^(?:pump|dispenser|ម៉ាស៊ីនបូម|ប៉ុម)\s*(?:no\.?|#)?\s*\d+\b")
                .expect("static regex"),
        }
    }

    /// Classify every non-empty trimmed line of preprocessed text
    pub fn classify_lines(&self, text: &str, fuel_parser: &FuelLineParser) -> Vec<ClassifiedLine> {
        text.lines()
            .enumerate()
            .filter_map(|(index, raw)| {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return None;
                }

                let role = self.classify(trimmed, fuel_parser);
                trace!("line {} classified as {:?}: '{}'", index, role, trimmed);

                Some(ClassifiedLine {
                    text: raw.to_string(),
                    role,
                    index,
                })
            })
            .collect()
    }

    /// Ordered classification rules for a single trimmed line
    pub fn classify(&self, trimmed: &str, fuel_parser: &FuelLineParser) -> LineRole {
        if self.pump_marker.is_match(trimmed) {
            return LineRole::PumpMarker;
        }

        let lowered = trimmed.to_lowercase();
        if SECTION_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
            return LineRole::SectionBoundary;
        }

        if is_header_row(&lowered) {
            return LineRole::Header;
        }

        // Speculative parse: if the fuel-line contract would succeed, the
        // line is data. The parse is cheap and side-effect free.
        if fuel_parser.parse_line(trimmed).is_some() {
            return LineRole::FuelData;
        }

        LineRole::Unclassified
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Token-count and token-length heuristic for table header rows
fn is_header_row(lowered: &str) -> bool {
    let tokens: Vec<&str> = lowered.split_whitespace().collect();
    if tokens.len() < 2 || tokens.len() > HEADER_MAX_TOKENS {
        return false;
    }

    if tokens.iter().any(|t| t.chars().count() > HEADER_MAX_TOKEN_LEN) {
        return false;
    }

    tokens
        .iter()
        .any(|t| HEADER_WORDS.iter().any(|hw| t.contains(hw)))
}
