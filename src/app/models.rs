//! Data models for report processing
//!
//! This module contains the core data structures for representing classified
//! report lines, fuel entries, station identity, and the terminal
//! [`ParsedReport`] artifact together with its serializable wire shape.

use crate::constants;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Line Classification
// =============================================================================

/// Structural role assigned to a report line by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineRole {
    /// Table header row ("Fuel  Volume  Amount")
    Header,
    /// Start of a per-pump block ("Pump 1", "ម៉ាស៊ីន 2")
    PumpMarker,
    /// A line carrying a fuel label with volume/amount figures
    FuelData,
    /// Section boundary ("Summary", "Total", "សរុប")
    SectionBoundary,
    /// Anything the ordered rules could not place
    Unclassified,
}

/// A report line with its classification, produced once and read-only after
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedLine {
    pub text: String,
    pub role: LineRole,
    pub index: usize,
}

// =============================================================================
// Fuel Entries
// =============================================================================

/// Canonical fuel category, a closed set all raw labels normalize into
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FuelType {
    Diesel,
    Regular,
    Super,
    /// Unrecognized label, preserved rather than discarded
    Other(String),
}

impl FuelType {
    /// Human-readable canonical label, used in the wire format
    pub fn label(&self) -> &str {
        match self {
            FuelType::Diesel => "Diesel",
            FuelType::Regular => "Regular",
            FuelType::Super => "Super",
            FuelType::Other(raw) => raw,
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One canonicalized fuel line: category, volume in litres, monetary amount
///
/// Invariant: `volume > 0` and `amount >= 0`. Lines that clean to a
/// non-positive volume are rejected during line parsing and never reach
/// this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelEntry {
    /// Label exactly as it appeared in the source line
    pub raw_fuel_type: String,

    /// Canonical category the raw label mapped to
    pub fuel_type: FuelType,

    /// Sold volume in litres
    pub volume: f64,

    /// Sales amount (currency units as reported)
    pub amount: f64,

    /// Derived price per litre; 0 when volume is not positive
    pub unit_price: f64,
}

impl FuelEntry {
    /// Create an entry, deriving the unit price. Returns `None` for
    /// non-positive volumes: zero or negative figures are noise
    /// (header fragments, correction lines), not valid zero entries.
    pub fn new(raw_fuel_type: String, fuel_type: FuelType, volume: f64, amount: f64) -> Option<Self> {
        if volume <= 0.0 || amount < 0.0 {
            return None;
        }

        Some(Self {
            raw_fuel_type,
            fuel_type,
            unit_price: amount / volume,
            volume,
            amount,
        })
    }
}

/// A per-pump block of fuel entries, transient during parsing
///
/// Pump sections only exist to derive aggregated fuel data when a report
/// carries no summary section; they are not part of the final output.
#[derive(Debug, Clone, PartialEq)]
pub struct PumpSection {
    pub pump_label: String,
    pub entries: Vec<FuelEntry>,
}

// =============================================================================
// Station Identity
// =============================================================================

/// Which strategy of the identification cascade produced the station name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionStrategy {
    /// Company prefix immediately followed by a Khmer location phrase
    ExactPrefix,
    /// A known location name appeared in a candidate line
    KnownLocation,
    /// A sufficiently long Khmer script run, denylist-filtered
    ScriptExtraction,
    /// Longest Khmer run anywhere in the leading lines
    FallbackScan,
    /// First non-empty line, cleaned of boilerplate
    FirstLine,
    /// Every strategy failed; the sentinel name is in use
    Unresolved,
}

/// Resolved station identity with detection provenance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationIdentity {
    /// Station name; non-empty except for the "Unknown Station" sentinel
    pub name: String,

    /// Strategy that produced the name
    pub strategy: DetectionStrategy,

    /// Detection confidence in [0, 1], monotonically decreasing down the cascade
    pub confidence: f64,
}

impl StationIdentity {
    pub fn new(name: String, strategy: DetectionStrategy, confidence: f64) -> Self {
        Self {
            name,
            strategy,
            confidence,
        }
    }

    /// The sentinel identity returned when the whole cascade fails
    pub fn unknown() -> Self {
        Self {
            name: constants::UNKNOWN_STATION.to_string(),
            strategy: DetectionStrategy::Unresolved,
            confidence: 0.0,
        }
    }

    /// Whether this is the unresolved sentinel
    pub fn is_unknown(&self) -> bool {
        self.strategy == DetectionStrategy::Unresolved
    }
}

// =============================================================================
// Parse Result
// =============================================================================

/// How the report's fuel data was assembled, in decreasing reliability order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParsingMethod {
    /// Pre-aggregated summary section found in the document
    SummarySection,
    /// Summed across per-pump sections
    AggregatedPumps,
    /// Full-document fuel-line scan; no section structure detected
    DirectScan,
    /// No fuel data found anywhere
    Empty,
}

impl fmt::Display for ParsingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ParsingMethod::SummarySection => "summary_section",
            ParsingMethod::AggregatedPumps => "aggregated_pumps",
            ParsingMethod::DirectScan => "direct_scan",
            ParsingMethod::Empty => "empty",
        };
        write!(f, "{}", s)
    }
}

/// Outcome of the validation check battery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// False when any error-class check failed
    pub is_valid: bool,

    /// Fraction of checks passed, scaled to 0-100
    pub score: f64,

    /// Error-class findings (missing required field, no fuel data)
    pub errors: Vec<String>,

    /// Warning-class findings (date fallback, totals mismatch, low confidence)
    pub warnings: Vec<String>,
}

/// The terminal artifact of a parse invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedReport {
    /// Resolved station identity
    pub station: StationIdentity,

    /// Station manager name when the labeled template carried one
    pub manager_name: Option<String>,

    /// Report date in canonical dd/mm/yy form
    pub report_date: String,

    /// Deduplicated fuel entries in first-seen order, volumes and amounts
    /// summed per canonical category
    pub fuel_data: Vec<FuelEntry>,

    /// Total sold volume after reconciliation
    pub total_volume: f64,

    /// Total sales amount after reconciliation
    pub total_amount: f64,

    /// Number of pump sections found (0 unless pump-structured)
    pub pump_count: usize,

    /// Validation outcome
    pub validation: ValidationResult,

    /// How the fuel data was assembled
    pub parsing_method: ParsingMethod,
}

// =============================================================================
// Wire Format
// =============================================================================

/// One fuel entry in the wire shape consumed by downstream collaborators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelRecord {
    pub fuel_type: String,
    pub volume: f64,
    pub amount: f64,
}

/// Flat serializable view of a [`ParsedReport`]
///
/// This is the interface boundary with the persistence collaborator (which
/// keys storage by `(station_name, report_date)`) and the presentation
/// collaborator (which renders `fuel_data` and the totals).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRecord {
    pub station_name: String,
    pub report_date: String,
    pub fuel_data: Vec<FuelRecord>,
    pub total_volume: f64,
    pub total_amount: f64,
    pub validation_score: f64,
    pub is_valid: bool,
    pub warnings: Vec<String>,
    pub parsing_method: ParsingMethod,
}

impl From<&ParsedReport> for ReportRecord {
    fn from(report: &ParsedReport) -> Self {
        Self {
            station_name: report.station.name.clone(),
            report_date: report.report_date.clone(),
            fuel_data: report
                .fuel_data
                .iter()
                .map(|entry| FuelRecord {
                    fuel_type: entry.fuel_type.label().to_string(),
                    volume: entry.volume,
                    amount: entry.amount,
                })
                .collect(),
            total_volume: report.total_volume,
            total_amount: report.total_amount,
            validation_score: report.validation.score,
            is_valid: report.validation.is_valid,
            warnings: report.validation.warnings.clone(),
            parsing_method: report.parsing_method,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuel_entry_rejects_non_positive_volume() {
        assert!(FuelEntry::new("Diesel".into(), FuelType::Diesel, 0.0, 100.0).is_none());
        assert!(FuelEntry::new("Diesel".into(), FuelType::Diesel, -5.0, 100.0).is_none());
    }

    #[test]
    fn test_fuel_entry_unit_price() {
        let entry = FuelEntry::new("EA92".into(), FuelType::Regular, 200.0, 700.0).unwrap();
        assert!((entry.unit_price - 3.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_station_sentinel() {
        let station = StationIdentity::unknown();
        assert!(station.is_unknown());
        assert_eq!(station.name, "Unknown Station");
        assert_eq!(station.confidence, 0.0);
    }

    #[test]
    fn test_parsing_method_serializes_snake_case() {
        let json = serde_json::to_string(&ParsingMethod::AggregatedPumps).unwrap();
        assert_eq!(json, "\"aggregated_pumps\"");
        assert_eq!(ParsingMethod::SummarySection.to_string(), "summary_section");
    }

    #[test]
    fn test_report_record_flattens_station_and_validation() {
        let report = ParsedReport {
            station: StationIdentity::new(
                "PTT ភ្នំពេញ".into(),
                DetectionStrategy::ExactPrefix,
                0.95,
            ),
            manager_name: None,
            report_date: "15/03/25".into(),
            fuel_data: vec![
                FuelEntry::new("Diesel".into(), FuelType::Diesel, 100.0, 350.0).unwrap(),
            ],
            total_volume: 100.0,
            total_amount: 350.0,
            pump_count: 0,
            validation: ValidationResult {
                is_valid: true,
                score: 100.0,
                errors: vec![],
                warnings: vec![],
            },
            parsing_method: ParsingMethod::SummarySection,
        };

        let record = ReportRecord::from(&report);
        assert_eq!(record.station_name, "PTT ភ្នំពេញ");
        assert_eq!(record.fuel_data.len(), 1);
        assert_eq!(record.fuel_data[0].fuel_type, "Diesel");
        assert!(record.is_valid);
    }
}
