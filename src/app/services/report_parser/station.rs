//! Cascading station-identity resolution
//!
//! Station names appear in wildly different places and shapes depending on
//! the report template: a labeled field ("សាខាស្ថានីយ: បាត់ដំបង"), a company
//! prefix followed by a Khmer location ("PTT ភ្នំពេញ"), a bare location
//! name, or nothing recognizable at all. Strategies run in order over the
//! leading lines; confidence decreases monotonically down the cascade and
//! the returned name is always non-empty except for the sentinel case.

use regex::Regex;
use tracing::debug;

use crate::app::models::{ClassifiedLine, DetectionStrategy, StationIdentity};
use crate::constants::{
    FALLBACK_RUN_MIN, MANAGER_LABELS, SCRIPT_RUN_MIN, STATION_DENYLIST,
    STATION_FALLBACK_SCAN_LINES, STATION_LABELS, STATION_SCAN_LINES,
};

/// Resolves station identity from classified report lines
#[derive(Debug, Clone)]
pub struct StationIdentifier {
    /// Labeled station field ("សាខាស្ថានីយ: <name>")
    station_label: Regex,

    /// Labeled manager field ("ឈ្មោះប្រធានស្ថានីយ: <name>")
    manager_label: Regex,

    /// Contiguous run of Khmer script
    khmer_run: Regex,

    /// Date-like substrings removed before the first-line fallback
    date_like: Regex,

    /// Company prefix token as a standalone word
    prefix: Regex,

    known_locations: Vec<String>,
}

impl StationIdentifier {
    pub fn new(company_prefixes: &[String], known_locations: &[String]) -> Self {
        let label_alt = STATION_LABELS.join("|");
        let manager_alt = MANAGER_LABELS.join("|");
        let prefix_alt = if company_prefixes.is_empty() {
            // never-matching alternative keeps the regex well-formed
            r"\b\B".to_string()
        } else {
            company_prefixes
                .iter()
                .map(|p| regex::escape(p))
                .collect::<Vec<_>>()
                .join("|")
        };

        Self {
            station_label: Regex::new(&format!(r"(?i)(?:{label_alt})\s*[:៖]\s*(.+)"))
                .expect("static regex"),
            manager_label: Regex::new(&format!(r"(?i)(?:{manager_alt})\s*[:៖]\s*(.+)"))
                .expect("static regex"),
            khmer_run: Regex::new(r"\p{Khmer}+").expect("static regex"),
            date_like: Regex::new(r"\d{1,4}[-/.]\d{1,2}[-/.]\d{1,4}").expect("static regex"),
            prefix: Regex::new(&format!(r"(?i)\b(?:{prefix_alt})\b")).expect("static regex"),
            known_locations: known_locations.to_vec(),
        }
    }

    /// Run the strategy cascade over the leading classified lines
    pub fn identify(&self, lines: &[ClassifiedLine]) -> StationIdentity {
        let candidates: Vec<&str> = lines
            .iter()
            .take(STATION_SCAN_LINES)
            .map(|l| l.text.trim())
            .collect();

        let identity = self
            .exact_prefix(&candidates)
            .or_else(|| self.known_location(&candidates))
            .or_else(|| self.script_extraction(&candidates))
            .or_else(|| self.fallback_scan(&candidates))
            .or_else(|| self.first_line_fallback(&candidates))
            .unwrap_or_else(StationIdentity::unknown);

        debug!(
            "station resolved via {:?} (confidence {:.2}): '{}'",
            identity.strategy, identity.confidence, identity.name
        );
        identity
    }

    /// Labeled manager field anywhere in the leading lines
    pub fn extract_manager(&self, lines: &[ClassifiedLine]) -> Option<String> {
        lines
            .iter()
            .take(STATION_SCAN_LINES)
            .find_map(|line| self.manager_label.captures(line.text.trim()))
            .map(|caps| caps[1].trim().to_string())
            .filter(|name| !name.is_empty())
    }

    /// Strategy 1: labeled station field, or company prefix immediately
    /// followed by a Khmer location phrase
    fn exact_prefix(&self, candidates: &[&str]) -> Option<StationIdentity> {
        for line in candidates {
            if let Some(caps) = self.station_label.captures(line) {
                let name = caps[1].trim().to_string();
                if !name.is_empty() {
                    return Some(StationIdentity::new(
                        name,
                        DetectionStrategy::ExactPrefix,
                        0.95,
                    ));
                }
            }

            if let Some(prefix_match) = self.prefix.find(line) {
                let after = &line[prefix_match.end()..];
                if let Some(run) = self.khmer_run.find(after.trim_start_matches([' ', ':', '៖'])) {
                    if run.start() == 0 && run.as_str().chars().count() >= SCRIPT_RUN_MIN {
                        return Some(StationIdentity::new(
                            format!("{} {}", prefix_match.as_str(), run.as_str()),
                            DetectionStrategy::ExactPrefix,
                            0.95,
                        ));
                    }
                }
            }
        }
        None
    }

    /// Strategy 2: a known location name anywhere in a candidate line
    fn known_location(&self, candidates: &[&str]) -> Option<StationIdentity> {
        for (i, line) in candidates.iter().enumerate() {
            let Some(location) = self
                .known_locations
                .iter()
                .find(|loc| line.to_lowercase().contains(&loc.to_lowercase()))
            else {
                continue;
            };

            let nearby_prefix = self.prefix_near(candidates, i);
            let (name, confidence) = match nearby_prefix {
                Some(prefix) => (format!("{} {}", prefix, location), 0.90),
                None => (location.clone(), 0.80),
            };
            return Some(StationIdentity::new(
                name,
                DetectionStrategy::KnownLocation,
                confidence,
            ));
        }
        None
    }

    /// Strategy 3: a long-enough Khmer run that is not a structural word
    fn script_extraction(&self, candidates: &[&str]) -> Option<StationIdentity> {
        for (i, line) in candidates.iter().enumerate() {
            let run = self
                .khmer_run
                .find_iter(line)
                .map(|m| m.as_str())
                .filter(|run| run.chars().count() >= SCRIPT_RUN_MIN)
                .find(|run| !is_denylisted(run));

            if let Some(run) = run {
                let (name, confidence) = match self.prefix_near(candidates, i) {
                    Some(prefix) => (format!("{} {}", prefix, run), 0.85),
                    None => (run.to_string(), 0.75),
                };
                return Some(StationIdentity::new(
                    name,
                    DetectionStrategy::ScriptExtraction,
                    confidence,
                ));
            }
        }
        None
    }

    /// Strategy 4: longest Khmer run anywhere in the first few lines
    fn fallback_scan(&self, candidates: &[&str]) -> Option<StationIdentity> {
        let longest = candidates
            .iter()
            .take(STATION_FALLBACK_SCAN_LINES)
            .flat_map(|line| self.khmer_run.find_iter(line))
            .map(|m| m.as_str())
            .max_by_key(|run| run.chars().count())?;

        if longest.chars().count() < FALLBACK_RUN_MIN {
            return None;
        }

        Some(StationIdentity::new(
            longest.to_string(),
            DetectionStrategy::FallbackScan,
            0.60,
        ))
    }

    /// Strategy 5: first non-empty line, cleaned of boilerplate and dates
    fn first_line_fallback(&self, candidates: &[&str]) -> Option<StationIdentity> {
        let first = candidates.first()?;

        let without_dates = self.date_like.replace_all(first, " ");
        let cleaned: String = without_dates
            .split_whitespace()
            .filter(|token| !is_denylisted(token))
            .collect::<Vec<_>>()
            .join(" ");

        if cleaned.is_empty() {
            return None;
        }

        Some(StationIdentity::new(
            cleaned,
            DetectionStrategy::FirstLine,
            0.50,
        ))
    }

    /// A company prefix in the candidate line or either adjacent line
    fn prefix_near(&self, candidates: &[&str], index: usize) -> Option<String> {
        let lo = index.saturating_sub(1);
        let hi = (index + 1).min(candidates.len() - 1);

        candidates[lo..=hi]
            .iter()
            .find_map(|line| self.prefix.find(line))
            .map(|m| m.as_str().to_string())
    }
}

/// Whether a token matches the structural-word denylist
fn is_denylisted(token: &str) -> bool {
    let lowered = token.to_lowercase();
    STATION_DENYLIST
        .iter()
        .any(|deny| lowered == *deny || lowered.contains(deny))
}
