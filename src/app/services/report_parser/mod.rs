//! Report parsing pipeline for semi-structured fuel-station sales reports
//!
//! This module is the core of the library: it turns free-form report text
//! (mixed Khmer/English, tab- or space-delimited pseudo-tables, inconsistent
//! date notations) into a canonical [`crate::app::models::ParsedReport`].
//! The input is not a fixed grammar, so every stage is a cascade of
//! strategies that degrades gracefully instead of demanding a schema.
//!
//! ## Architecture
//!
//! The pipeline is organized into logical components:
//! - [`parser`] - Orchestration and the public [`ReportParser`] entry point
//! - [`preprocess`] - Encoding cleanup and localized digit normalization
//! - [`classifier`] - Per-line structural role assignment
//! - [`station`] - Cascading station-identity strategies
//! - [`dates`] - Multi-format date extraction and canonicalization
//! - [`sections`] - Pump/summary section location and collection
//! - [`fuel_line`] - Layered splitting of individual fuel-data lines
//!
//! ## Usage
//!
//! ```rust
//! use report_processor::{ParserConfig, ReportParser};
//!
//! # fn example() -> report_processor::Result<()> {
//! let parser = ReportParser::new(ParserConfig::default())?;
//! let report = parser.parse("សាខាស្ថានីយ: បាត់ដំបង\n15/03/2025\nDiesel  1200.5  4201.75")?;
//!
//! println!("{} on {}: {:.1} L", report.station.name, report.report_date, report.total_volume);
//! # Ok(())
//! # }
//! ```

pub mod classifier;
pub mod dates;
pub mod fuel_line;
pub mod parser;
pub mod preprocess;
pub mod sections;
pub mod station;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use classifier::LineClassifier;
pub use dates::{DateExtractor, DateSource, ExtractedDate};
pub use fuel_line::{FuelLineParser, RawFuelLine};
pub use parser::ReportParser;
pub use station::StationIdentifier;
