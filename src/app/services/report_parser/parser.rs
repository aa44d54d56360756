//! Core parsing orchestration and the public [`ReportParser`] entry point

use std::collections::HashMap;
use tracing::{debug, info};

use super::classifier::LineClassifier;
use super::dates::DateExtractor;
use super::fuel_line::{FuelLineParser, RawFuelLine};
use super::preprocess::preprocess;
use super::sections::SectionCollector;
use super::station::StationIdentifier;
use crate::app::models::{
    ClassifiedLine, FuelEntry, FuelType, ParsedReport, ParsingMethod, PumpSection, ReportRecord,
};
use crate::app::services::fuel_mapper::FuelTypeMapper;
use crate::app::services::reconciler;
use crate::app::services::validator::Validator;
use crate::config::ParserConfig;
use crate::{Error, Result};

/// The report parsing engine
///
/// Construction compiles every pattern table and builds the fuel mapping
/// index; afterwards the parser holds no mutable state, so one instance can
/// serve concurrent parse invocations without locking. Each call to
/// [`parse`](ReportParser::parse) reads the input string and produces a
/// fresh [`ParsedReport`]; nothing persists between calls.
#[derive(Debug, Clone)]
pub struct ReportParser {
    config: ParserConfig,
    classifier: LineClassifier,
    fuel_line_parser: FuelLineParser,
    station_identifier: StationIdentifier,
    date_extractor: DateExtractor,
    section_collector: SectionCollector,
    fuel_mapper: FuelTypeMapper,
    validator: Validator,
}

impl ReportParser {
    /// Build a parser from validated configuration
    pub fn new(config: ParserConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            classifier: LineClassifier::new(),
            fuel_line_parser: FuelLineParser::new(),
            station_identifier: StationIdentifier::new(
                &config.company_prefixes,
                &config.known_locations,
            ),
            date_extractor: DateExtractor::new(),
            section_collector: SectionCollector::new(),
            fuel_mapper: FuelTypeMapper::new(config.fuel_mapping.clone()),
            validator: Validator::new(),
            config,
        })
    }

    /// Parse one report text into a canonical record
    ///
    /// Returns `Err` only for input that cannot be parsed at all (empty or
    /// over the size caps); every other condition degrades into warnings
    /// and the validation score. Parsing the same text twice yields
    /// identical output.
    pub fn parse(&self, input: &str) -> Result<ParsedReport> {
        self.check_input_caps(input)?;

        if input.trim().is_empty() {
            return Err(Error::EmptyInput);
        }

        let text = preprocess(input);
        let lines = self.classifier.classify_lines(&text, &self.fuel_line_parser);
        if lines.is_empty() {
            // e.g. input consisting entirely of control characters
            return Err(Error::EmptyInput);
        }
        debug!("classified {} non-empty line(s)", lines.len());

        // Station and date extraction are independent of section structure
        let station = self.station_identifier.identify(&lines);
        let manager_name = self.station_identifier.extract_manager(&lines);
        let date = self.date_extractor.extract(&lines);

        // Locate sections and the explicitly reported totals
        let summary = self
            .section_collector
            .collect_summary_section(&lines, &self.fuel_line_parser);
        let pump_sections = self.pump_sections(&lines);
        let explicit_total = self.section_collector.extract_explicit_total(&lines);

        // Assemble fuel data in decreasing reliability order
        let pump_count = pump_sections.len();
        let (fuel_data, parsing_method) =
            self.assemble_fuel_data(summary.map(|s| s.lines), &pump_sections, &lines);

        let totals = reconciler::reconcile(&fuel_data, explicit_total, &self.config);
        let validation =
            self.validator
                .validate(&station, &date, &fuel_data, &totals, parsing_method);

        info!(
            "parsed report for '{}' on {}: {} fuel entr(ies) via {}, score {:.0}",
            station.name,
            date.canonical,
            fuel_data.len(),
            parsing_method,
            validation.score
        );

        Ok(ParsedReport {
            station,
            manager_name,
            report_date: date.canonical,
            fuel_data,
            total_volume: totals.total_volume,
            total_amount: totals.total_amount,
            pump_count,
            validation,
            parsing_method,
        })
    }

    /// Parse directly to the flat wire record consumed by collaborators
    pub fn parse_to_record(&self, input: &str) -> Result<ReportRecord> {
        Ok(ReportRecord::from(&self.parse(input)?))
    }

    /// Reject input over the hard size caps before any pattern matching
    fn check_input_caps(&self, input: &str) -> Result<()> {
        let chars = input.chars().count();
        let line_count = input.lines().count();

        if chars > self.config.max_input_chars || line_count > self.config.max_input_lines {
            return Err(Error::oversized_input(
                chars,
                line_count,
                self.config.max_input_chars,
                self.config.max_input_lines,
            ));
        }
        Ok(())
    }

    /// Collect pump sections with canonicalized entries
    fn pump_sections(&self, lines: &[ClassifiedLine]) -> Vec<PumpSection> {
        self.section_collector
            .collect_pump_sections(lines, &self.fuel_line_parser)
            .into_iter()
            .filter_map(|raw| {
                let entries = self.canonicalize(raw.lines);
                if entries.is_empty() {
                    None
                } else {
                    Some(PumpSection {
                        pump_label: raw.label,
                        entries,
                    })
                }
            })
            .collect()
    }

    /// Choose the fuel-data source: summary > aggregated pumps > direct scan
    fn assemble_fuel_data(
        &self,
        summary_lines: Option<Vec<RawFuelLine>>,
        pump_sections: &[PumpSection],
        lines: &[ClassifiedLine],
    ) -> (Vec<FuelEntry>, ParsingMethod) {
        if let Some(raw_lines) = summary_lines {
            let entries = self.canonicalize(raw_lines);
            if !entries.is_empty() {
                return (dedupe_entries(entries), ParsingMethod::SummarySection);
            }
        }

        if !pump_sections.is_empty() {
            let all_entries: Vec<FuelEntry> = pump_sections
                .iter()
                .flat_map(|section| section.entries.iter().cloned())
                .collect();
            return (dedupe_entries(all_entries), ParsingMethod::AggregatedPumps);
        }

        let scanned = self
            .section_collector
            .direct_scan(lines, &self.fuel_line_parser);
        let entries = self.canonicalize(scanned);
        if entries.is_empty() {
            (Vec::new(), ParsingMethod::Empty)
        } else {
            (dedupe_entries(entries), ParsingMethod::DirectScan)
        }
    }

    /// Map raw fuel lines through the label canonicalizer
    fn canonicalize(&self, raw_lines: Vec<RawFuelLine>) -> Vec<FuelEntry> {
        raw_lines
            .into_iter()
            .filter_map(|raw| {
                let fuel_type = self.fuel_mapper.map(&raw.raw_label);
                FuelEntry::new(raw.raw_label, fuel_type, raw.volume, raw.amount)
            })
            .collect()
    }
}

impl Default for ReportParser {
    fn default() -> Self {
        // Default configuration always validates
        Self::new(ParserConfig::default()).expect("default configuration is valid")
    }
}

/// Merge entries sharing a canonical fuel type, preserving first-seen order
/// and summing volumes and amounts
fn dedupe_entries(entries: Vec<FuelEntry>) -> Vec<FuelEntry> {
    let mut order: Vec<FuelType> = Vec::new();
    let mut merged: HashMap<FuelType, FuelEntry> = HashMap::new();

    for entry in entries {
        match merged.get_mut(&entry.fuel_type) {
            Some(existing) => {
                existing.volume += entry.volume;
                existing.amount += entry.amount;
                existing.unit_price = if existing.volume > 0.0 {
                    existing.amount / existing.volume
                } else {
                    0.0
                };
            }
            None => {
                order.push(entry.fuel_type.clone());
                merged.insert(entry.fuel_type.clone(), entry);
            }
        }
    }

    order
        .into_iter()
        .filter_map(|fuel_type| merged.remove(&fuel_type))
        .collect()
}
