//! Layered splitting of individual fuel-data lines
//!
//! A fuel-data line carries a label followed by one or two numbers, but the
//! delimiter varies by station template: tabs, aligned space runs, or single
//! spaces. Splitting is attempted in decreasing order of structure until a
//! strategy yields at least two fields; numeric cleaning then decides whether
//! the line is real data.

use regex::Regex;
use tracing::trace;

/// One raw fuel line before canonicalization: label, volume, amount
#[derive(Debug, Clone, PartialEq)]
pub struct RawFuelLine {
    pub raw_label: String,
    pub volume: f64,
    pub amount: f64,
}

/// Splits a single line into a label and numeric fields
///
/// Owns its compiled patterns; read-only after construction.
#[derive(Debug, Clone)]
pub struct FuelLineParser {
    /// Runs of two or more spaces (aligned pseudo-table columns)
    multi_space: Regex,

    /// `<label in Khmer/Latin script> <number> <number>`
    label_two_numbers: Regex,

    /// `<label> <number>` with the amount omitted
    label_one_number: Regex,
}

impl FuelLineParser {
    pub fn new() -> Self {
        Self {
            multi_space: Regex::new(r" {2,}").expect("static regex"),
            label_two_numbers: Regex::new(
                r"^(?P<label>[\p{Khmer}A-Za-z][\p{Khmer}A-Za-z0-9 ()./*-]*?)\s+(?P<volume>-?[\d,]+(?:\.\d+)?)\s*L?\s+\$?(?P<amount>-?[\d,]+(?:\.\d+)?)\s*$",
            )
            .expect("static regex"),
            label_one_number: Regex::new(
                r"^(?P<label>[\p{Khmer}A-Za-z][\p{Khmer}A-Za-z0-9 ()./*-]*?)\s+(?P<volume>-?[\d,]+(?:\.\d+)?)\s*L?\s*$",
            )
            .expect("static regex"),
        }
    }

    /// Attempt to parse one line into a raw fuel triple
    ///
    /// Returns `None` when no strategy extracts a label plus a positive
    /// volume. Zero and negative volumes reject the whole line: they are
    /// header fragments or correction noise, not valid zero entries.
    pub fn parse_line(&self, line: &str) -> Option<RawFuelLine> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }

        let fields = self
            .split_tabs(trimmed)
            .or_else(|| self.split_multi_space(trimmed))
            .or_else(|| self.match_label_numbers(trimmed))
            .or_else(|| self.split_whitespace_tail(trimmed))?;

        let (raw_label, volume_token, amount_token) = fields;

        let raw_label = raw_label.trim().to_string();
        if raw_label.is_empty() || !raw_label.chars().any(|c| c.is_alphabetic()) {
            return None;
        }

        let volume = clean_number(&volume_token)?;
        if volume <= 0.0 {
            trace!("rejecting line with non-positive volume: '{}'", trimmed);
            return None;
        }

        // A missing or malformed amount degrades to 0, it does not reject
        let amount = amount_token
            .as_deref()
            .and_then(clean_number_str)
            .unwrap_or(0.0);
        if amount < 0.0 {
            return None;
        }

        Some(RawFuelLine {
            raw_label,
            volume,
            amount,
        })
    }

    /// (a) tab-delimited columns
    fn split_tabs(&self, line: &str) -> Option<(String, String, Option<String>)> {
        if !line.contains('\t') {
            return None;
        }
        let parts: Vec<&str> = line.split('\t').map(str::trim).filter(|p| !p.is_empty()).collect();
        fields_from_parts(&parts)
    }

    /// (b) runs of two or more spaces
    fn split_multi_space(&self, line: &str) -> Option<(String, String, Option<String>)> {
        let parts: Vec<&str> = self
            .multi_space
            .split(line)
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();
        if parts.len() < 2 {
            return None;
        }
        fields_from_parts(&parts)
    }

    /// (c)/(d) regex shapes with explicit script classes
    fn match_label_numbers(&self, line: &str) -> Option<(String, String, Option<String>)> {
        if let Some(caps) = self.label_two_numbers.captures(line) {
            return Some((
                caps["label"].to_string(),
                caps["volume"].to_string(),
                Some(caps["amount"].to_string()),
            ));
        }
        if let Some(caps) = self.label_one_number.captures(line) {
            return Some((caps["label"].to_string(), caps["volume"].to_string(), None));
        }
        None
    }

    /// (e) naive whitespace split, last two tokens treated as the numbers
    fn split_whitespace_tail(&self, line: &str) -> Option<(String, String, Option<String>)> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 3 {
            return None;
        }

        let amount = tokens[tokens.len() - 1];
        let volume = tokens[tokens.len() - 2];
        if !looks_numeric(volume) || !looks_numeric(amount) {
            return None;
        }

        Some((
            tokens[..tokens.len() - 2].join(" "),
            volume.to_string(),
            Some(amount.to_string()),
        ))
    }
}

impl Default for FuelLineParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Interpret a delimited part list as (label, volume, amount?)
fn fields_from_parts(parts: &[&str]) -> Option<(String, String, Option<String>)> {
    match parts.len() {
        0 | 1 => None,
        2 => Some((parts[0].to_string(), parts[1].to_string(), None)),
        n => Some((
            parts[..n - 2].join(" "),
            parts[n - 2].to_string(),
            Some(parts[n - 1].to_string()),
        )),
    }
}

/// Whether a token carries at least one digit
fn looks_numeric(token: &str) -> bool {
    token.chars().any(|c| c.is_ascii_digit())
}

/// Strip everything that is not a digit, decimal point, or leading sign,
/// then parse. Returns `None` when nothing numeric remains.
pub fn clean_number(token: &str) -> Option<f64> {
    clean_number_str(token)
}

fn clean_number_str(token: &str) -> Option<f64> {
    let negative = token.trim_start().starts_with('-');
    let cleaned: String = token
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    if cleaned.is_empty() || !cleaned.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }

    // Best-effort: a token that survives digit extraction but still fails
    // to parse (e.g. "1.2.3") is treated as 0 rather than rejecting the line
    let value = cleaned.parse::<f64>().unwrap_or(0.0);
    Some(if negative { -value } else { value })
}
