//! Pump and summary section location and collection
//!
//! Sections are delimited by classified boundary lines: a `PumpMarker`
//! opens a per-pump block, a "Summary" boundary opens the pre-aggregated
//! block, and a "Total" boundary carrying numbers closes everything and
//! supplies the explicitly reported totals. Sections that parse to zero
//! fuel lines are discarded rather than emitted empty.

use regex::Regex;
use tracing::debug;

use super::fuel_line::{FuelLineParser, RawFuelLine};
use crate::app::models::{ClassifiedLine, LineRole};
use crate::constants::TOTAL_KEYWORDS;

/// A collected section of raw fuel lines, pre-canonicalization
#[derive(Debug, Clone, PartialEq)]
pub struct RawSection {
    pub label: String,
    pub lines: Vec<RawFuelLine>,
}

/// Collects sections from classified lines; owns the number pattern used
/// to recognize explicit totals lines.
#[derive(Debug, Clone)]
pub struct SectionCollector {
    number: Regex,
}

impl SectionCollector {
    pub fn new() -> Self {
        Self {
            number: Regex::new(r"\d[\d,]*(?:\.\d+)?").expect("static regex"),
        }
    }

    /// Collect every pump section: a `PumpMarker` line followed by fuel
    /// data, terminated by the next boundary of any kind
    pub fn collect_pump_sections(
        &self,
        lines: &[ClassifiedLine],
        fuel_parser: &FuelLineParser,
    ) -> Vec<RawSection> {
        let mut sections = Vec::new();
        let mut current: Option<RawSection> = None;

        for line in lines {
            match line.role {
                LineRole::PumpMarker => {
                    push_if_non_empty(&mut sections, current.take());
                    current = Some(RawSection {
                        label: line.text.trim().to_string(),
                        lines: Vec::new(),
                    });
                }
                LineRole::SectionBoundary => {
                    push_if_non_empty(&mut sections, current.take());
                }
                LineRole::FuelData => {
                    if let Some(section) = current.as_mut() {
                        if let Some(raw) = fuel_parser.parse_line(&line.text) {
                            section.lines.push(raw);
                        }
                    }
                }
                LineRole::Header | LineRole::Unclassified => {}
            }
        }

        push_if_non_empty(&mut sections, current);
        debug!("collected {} pump section(s)", sections.len());
        sections
    }

    /// Collect the "Summary" section when present
    ///
    /// Tolerates one header line directly after the opener. Returns `None`
    /// when no summary boundary exists or the section parses to zero lines.
    pub fn collect_summary_section(
        &self,
        lines: &[ClassifiedLine],
        fuel_parser: &FuelLineParser,
    ) -> Option<RawSection> {
        let opener = lines
            .iter()
            .position(|line| line.role == LineRole::SectionBoundary && self.is_summary_opener(&line.text))?;

        let mut section = RawSection {
            label: lines[opener].text.trim().to_string(),
            lines: Vec::new(),
        };

        for (offset, line) in lines[opener + 1..].iter().enumerate() {
            match line.role {
                LineRole::PumpMarker | LineRole::SectionBoundary => break,
                LineRole::Header if offset == 0 => continue,
                LineRole::FuelData => {
                    if let Some(raw) = fuel_parser.parse_line(&line.text) {
                        section.lines.push(raw);
                    }
                }
                _ => {}
            }
        }

        if section.lines.is_empty() {
            None
        } else {
            debug!("summary section with {} fuel line(s)", section.lines.len());
            Some(section)
        }
    }

    /// Parse the explicitly reported totals from a "Total" boundary line
    ///
    /// Follows the template `TOTAL SALES: <vol>L | $<amt>`: the first
    /// number is the volume, the second the amount.
    pub fn extract_explicit_total(&self, lines: &[ClassifiedLine]) -> Option<(f64, f64)> {
        for line in lines {
            if line.role != LineRole::SectionBoundary || !self.is_total_line(&line.text) {
                continue;
            }

            let numbers: Vec<f64> = self
                .number
                .find_iter(&line.text)
                .filter_map(|m| m.as_str().replace(',', "").parse().ok())
                .collect();

            if numbers.len() >= 2 {
                debug!("explicit totals line: {} L / {}", numbers[0], numbers[1]);
                return Some((numbers[0], numbers[1]));
            }
        }
        None
    }

    /// Scan the whole document for fuel-data lines; the least reliable
    /// assembly path, used only when no section structure exists
    pub fn direct_scan(
        &self,
        lines: &[ClassifiedLine],
        fuel_parser: &FuelLineParser,
    ) -> Vec<RawFuelLine> {
        lines
            .iter()
            .filter(|line| line.role == LineRole::FuelData)
            .filter_map(|line| fuel_parser.parse_line(&line.text))
            .collect()
    }

    /// A boundary opens the summary block when it names "summary" (or the
    /// Khmer equivalent) without carrying totals figures
    fn is_summary_opener(&self, text: &str) -> bool {
        let lowered = text.trim().to_lowercase();
        let named = lowered.contains("summary") || lowered.contains("សរុប");
        named && !self.is_total_line(text)
    }

    /// A totals line names "total" (or the Khmer equivalent) and carries
    /// at least two numbers
    fn is_total_line(&self, text: &str) -> bool {
        let lowered = text.trim().to_lowercase();
        let named = TOTAL_KEYWORDS.iter().any(|kw| lowered.contains(kw));
        named && self.number.find_iter(text).count() >= 2
    }
}

impl Default for SectionCollector {
    fn default() -> Self {
        Self::new()
    }
}

fn push_if_non_empty(sections: &mut Vec<RawSection>, section: Option<RawSection>) {
    if let Some(section) = section {
        if !section.lines.is_empty() {
            sections.push(section);
        }
    }
}
