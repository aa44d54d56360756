//! Consistency-check battery and validation scoring
//!
//! Every parse gets scored out of the full check battery so downstream
//! logic can decide how much to trust it. Error-class failures (missing
//! required data) flip `is_valid`; warning-class findings (date fallback,
//! totals discrepancy, low station confidence) accumulate without
//! invalidating the report. Nothing is silently dropped: both lists are
//! returned verbatim to the caller.

use regex::Regex;
use tracing::debug;

use super::reconciler::ReconciledTotals;
use super::report_parser::dates::ExtractedDate;
use crate::app::models::{FuelEntry, ParsingMethod, StationIdentity, ValidationResult};
use crate::constants::LOW_CONFIDENCE_THRESHOLD;

/// Runs the validation battery over an assembled parse
#[derive(Debug, Clone)]
pub struct Validator {
    /// Canonical dd/mm/yy shape
    canonical_date: Regex,
}

impl Validator {
    pub fn new() -> Self {
        Self {
            canonical_date: Regex::new(r"^\d{2}/\d{2}/\d{2}$").expect("static regex"),
        }
    }

    /// Score a parse: each independent check contributes pass/fail, the
    /// score is passed/total scaled to 0-100
    pub fn validate(
        &self,
        station: &StationIdentity,
        date: &ExtractedDate,
        fuel_data: &[FuelEntry],
        totals: &ReconciledTotals,
        parsing_method: ParsingMethod,
    ) -> ValidationResult {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        let mut passed = 0usize;
        let mut total = 0usize;

        let mut check = |ok: bool| {
            total += 1;
            if ok {
                passed += 1;
            }
            ok
        };

        // 1. Required fields present (error-class)
        let required_present =
            !station.name.is_empty() && !date.canonical.is_empty() && !fuel_data.is_empty();
        if !check(required_present) {
            errors.push("Missing required fields: station, date, and fuel data are all mandatory".to_string());
        }

        // 2. Station resolved past the sentinel (error-class)
        if !check(!station.is_unknown()) {
            errors.push("Station could not be resolved; 'Unknown Station' sentinel in use".to_string());
        }

        // 3. Date in canonical form (warning-class)
        if !check(self.canonical_date.is_match(&date.canonical)) {
            warnings.push(format!(
                "Report date '{}' is not in canonical dd/mm/yy form",
                date.canonical
            ));
        }

        // 4. Fuel data non-empty (error-class)
        if !check(!fuel_data.is_empty()) {
            errors.push("No fuel data found in report".to_string());
        }

        // 5. No negative figures survived upstream filtering (error-class)
        let no_negatives = fuel_data.iter().all(|e| e.volume > 0.0 && e.amount >= 0.0);
        if !check(no_negatives) {
            errors.push("Negative volume or amount present in fuel data".to_string());
        }

        // 6. Totals consistent within the wide tolerance (warning-class)
        if !check(totals.within_wide_tolerance) {
            warnings.push("Reported and calculated totals diverge beyond tolerance".to_string());
        }

        // Warning-only observations, outside the scored battery
        if date.is_fallback() {
            warnings.push("Date fallback used: no recognizable date, defaulted to current date".to_string());
        }
        if !station.is_unknown() && station.confidence < LOW_CONFIDENCE_THRESHOLD {
            warnings.push(format!(
                "Low station confidence: {:.2} via {:?}",
                station.confidence, station.strategy
            ));
        }
        warnings.extend(totals.warnings.iter().cloned());

        // A report with no fuel data at all carries no usable signal;
        // the score collapses to 0 regardless of incidental passes.
        let score = if parsing_method == ParsingMethod::Empty {
            0.0
        } else {
            (passed as f64 / total as f64) * 100.0
        };

        let is_valid = errors.is_empty();
        debug!(
            "validation: {}/{} checks passed, score {:.0}, valid={}",
            passed, total, score, is_valid
        );

        ValidationResult {
            is_valid,
            score,
            errors,
            warnings,
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}
