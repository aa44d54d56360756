//! Report Processor Library
//!
//! A Rust library for converting free-form fuel-station sales reports
//! (mixed Khmer/English, tab- or space-delimited pseudo-tables) into
//! validated, canonical records suitable for storage and aggregation.
//!
//! This library provides tools for:
//! - Normalizing encoding artifacts and localized digit glyphs
//! - Classifying report lines into structural roles
//! - Resolving station identity through a cascading strategy chain
//! - Extracting and canonicalizing report dates across many notations
//! - Parsing pump and summary sections into per-fuel volume/amount entries
//! - Canonicalizing free-form fuel labels to a closed category set
//! - Reconciling calculated against reported totals
//! - Scoring every parse with a 0-100 validation score

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod fuel_mapper;
        pub mod reconciler;
        pub mod report_parser;
        pub mod validator;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{FuelEntry, FuelType, ParsedReport, ReportRecord, StationIdentity};
pub use app::services::report_parser::ReportParser;
pub use config::ParserConfig;

/// Result type alias for the report processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for report processing operations
///
/// Every recoverable parsing condition is handled inside the pipeline via
/// cascades and fallbacks; only conditions that prevent parsing from starting
/// at all (empty or oversized input) surface as errors from the parse call.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Input was empty or contained only whitespace
    #[error("empty input: report text contains no parseable content")]
    EmptyInput,

    /// Input exceeded the hard size caps enforced before pattern matching
    #[error(
        "oversized input: {chars} chars / {lines} lines exceeds cap of {max_chars} chars / {max_lines} lines"
    )]
    OversizedInput {
        chars: usize,
        lines: usize,
        max_chars: usize,
        max_lines: usize,
    },

    /// Configuration error
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// I/O operation failed (CLI file handling)
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error (wire records, config files)
    #[error("serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an oversized input error from observed and permitted sizes
    pub fn oversized_input(chars: usize, lines: usize, max_chars: usize, max_lines: usize) -> Self {
        Self::OversizedInput {
            chars,
            lines,
            max_chars,
            max_lines,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a serialization error with context
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}
