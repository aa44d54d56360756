//! Multi-format date extraction and canonicalization
//!
//! Report templates disagree on date notation: "27-Dec-2025", "15/03/2025",
//! "2025-03-15", Khmer month names, bare numeric tuples. The extractor tries
//! a date-range pattern first (taking the start date), then an ordered list
//! of single-date formats, then a numeric-tuple permutation fallback, and
//! finally the current system date. Whatever matched, the output is always
//! the single canonical `dd/mm/yy` form; canonicalization lives here, at the
//! engine boundary, so every consumer receives one format.

use chrono::{Local, NaiveDate};
use regex::Regex;
use tracing::debug;

use crate::app::models::ClassifiedLine;
use crate::constants::CANONICAL_DATE_FORMAT;

/// Which extraction stage produced the date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSource {
    /// Start date of a "date ... to ... date" range
    RangeStart,
    /// One of the ordered single-date formats
    SingleFormat,
    /// Digit-order permutation over a numeric token tuple
    NumericTuple,
    /// Nothing recognizable anywhere; current system date used
    CurrentDate,
}

/// An extracted date with canonical rendering and provenance
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedDate {
    pub date: NaiveDate,
    /// Canonical dd/mm/yy rendering
    pub canonical: String,
    pub source: DateSource,
}

impl ExtractedDate {
    fn new(date: NaiveDate, source: DateSource) -> Self {
        Self {
            canonical: date.format(CANONICAL_DATE_FORMAT).to_string(),
            date,
            source,
        }
    }

    /// Whether the extractor fell back to the current system date
    pub fn is_fallback(&self) -> bool {
        self.source == DateSource::CurrentDate
    }
}

/// Month-name spellings normalized to fixed 3-letter abbreviations before
/// format matching. Khmer month names cover the localized templates.
const MONTH_NAMES: &[(&str, &str)] = &[
    ("january", "Jan"),
    ("february", "Feb"),
    ("march", "Mar"),
    ("april", "Apr"),
    ("june", "Jun"),
    ("july", "Jul"),
    ("august", "Aug"),
    ("september", "Sep"),
    ("october", "Oct"),
    ("november", "Nov"),
    ("december", "Dec"),
    ("មករា", "Jan"),
    ("កុម្ភៈ", "Feb"),
    ("មីនា", "Mar"),
    ("មេសា", "Apr"),
    ("ឧសភា", "May"),
    ("មិថុនា", "Jun"),
    ("កក្កដា", "Jul"),
    ("សីហា", "Aug"),
    ("កញ្ញា", "Sep"),
    ("តុលា", "Oct"),
    ("វិច្ឆិកា", "Nov"),
    ("ធ្នូ", "Dec"),
];

const MONTH_ABBREVS: &[&str] = &[
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Extracts and canonicalizes the report date; always yields a value
#[derive(Debug, Clone)]
pub struct DateExtractor {
    /// Full/localized month names, longest alternatives first
    month_names: Regex,

    /// Range separator ("to", Khmer "ដល់")
    range_split: Regex,

    /// day - 3-letter month - year
    day_month_name: Regex,

    /// Slash, dash, dot numeric formats in priority order
    slash_dmy4: Regex,
    slash_dmy2: Regex,
    iso: Regex,
    dash_dmy4: Regex,
    dot_dmy: Regex,

    /// Contiguous numeric tokens for the permutation fallback
    number_token: Regex,
}

impl DateExtractor {
    pub fn new() -> Self {
        let name_alt = MONTH_NAMES
            .iter()
            .map(|(name, _)| *name)
            .collect::<Vec<_>>()
            .join("|");

        Self {
            month_names: Regex::new(&format!(r"(?i){name_alt}")).expect("static regex"),
            range_split: Regex::new(r"(?i)\s+to\s+|ដល់").expect("static regex"),
            day_month_name: Regex::new(
                r"(?i)\b(\d{1,2})[-/. ]\s*(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*[-/. ,]\s*(\d{2,4})\b",
            )
            .expect("static regex"),
            slash_dmy4: Regex::new(r"\b(\d{1,2})/(\d{1,2})/(\d{4})\b").expect("static regex"),
            slash_dmy2: Regex::new(r"\b(\d{1,2})/(\d{1,2})/(\d{2})\b").expect("static regex"),
            iso: Regex::new(r"\b(\d{4})-(\d{1,2})-(\d{1,2})\b").expect("static regex"),
            dash_dmy4: Regex::new(r"\b(\d{1,2})-(\d{1,2})-(\d{4})\b").expect("static regex"),
            dot_dmy: Regex::new(r"\b(\d{1,2})\.(\d{1,2})\.(\d{2,4})\b").expect("static regex"),
            number_token: Regex::new(r"\d+").expect("static regex"),
        }
    }

    /// Extract the report date from classified lines; never fails
    pub fn extract(&self, lines: &[ClassifiedLine]) -> ExtractedDate {
        let normalized: Vec<String> = lines
            .iter()
            .map(|line| self.normalize_month_names(line.text.trim()))
            .collect();

        // 1. Date range: take the start date
        for line in &normalized {
            if let Some(date) = self.try_range(line) {
                return ExtractedDate::new(date, DateSource::RangeStart);
            }
        }

        // 2. Ordered single-date formats, each tried over every line
        if let Some(date) = self.try_single_formats(&normalized) {
            return ExtractedDate::new(date, DateSource::SingleFormat);
        }

        // 3. Numeric tuple permutations
        for line in &normalized {
            if let Some(date) = self.try_numeric_tuple(line) {
                return ExtractedDate::new(date, DateSource::NumericTuple);
            }
        }

        // 4. Current system date
        debug!("no recognizable date; falling back to current system date");
        ExtractedDate::new(Local::now().date_naive(), DateSource::CurrentDate)
    }

    /// Replace full or localized month names with 3-letter abbreviations
    fn normalize_month_names(&self, line: &str) -> String {
        self.month_names
            .replace_all(line, |caps: &regex::Captures| {
                let matched = caps[0].to_lowercase();
                MONTH_NAMES
                    .iter()
                    .find(|(name, _)| *name == matched)
                    .map(|(_, abbrev)| (*abbrev).to_string())
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .to_string()
    }

    /// "date ... to ... date": both sides must parse; the start wins
    fn try_range(&self, line: &str) -> Option<NaiveDate> {
        let parts: Vec<&str> = self.range_split.split(line).collect();
        if parts.len() < 2 {
            return None;
        }

        let start = self.parse_single(parts[0])?;
        self.parse_single(parts[1])?;
        Some(start)
    }

    /// Ordered formats, each tried over every line before the next format
    fn try_single_formats(&self, lines: &[String]) -> Option<NaiveDate> {
        for line in lines {
            if let Some(date) = self.try_day_month_name(line) {
                return Some(date);
            }
        }

        for (pattern, order) in self.numeric_formats() {
            for line in lines {
                if let Some(date) = capture_date(pattern, order, line) {
                    return Some(date);
                }
            }
        }

        None
    }

    /// Ordered single-date matching within one text fragment (range sides)
    fn parse_single(&self, text: &str) -> Option<NaiveDate> {
        if let Some(date) = self.try_day_month_name(text) {
            return Some(date);
        }

        self.numeric_formats()
            .into_iter()
            .find_map(|(pattern, order)| capture_date(pattern, order, text))
    }

    /// Numeric format patterns in priority order
    fn numeric_formats(&self) -> [(&Regex, DigitOrder); 5] {
        [
            (&self.slash_dmy4, DigitOrder::Dmy),
            (&self.slash_dmy2, DigitOrder::Dmy),
            (&self.iso, DigitOrder::Ymd),
            (&self.dash_dmy4, DigitOrder::Dmy),
            (&self.dot_dmy, DigitOrder::Dmy),
        ]
    }

    /// day - 3-letter month name - year, anywhere in the text
    fn try_day_month_name(&self, text: &str) -> Option<NaiveDate> {
        let caps = self.day_month_name.captures(text)?;
        let day: u32 = caps[1].parse().ok()?;
        let month = month_from_abbrev(&caps[2])?;
        let year = normalize_year(caps[3].parse().ok()?);
        NaiveDate::from_ymd_opt(year, month, day)
    }

    /// Three or more contiguous numeric tokens, trying ymd, dmy, ydm orders
    fn try_numeric_tuple(&self, line: &str) -> Option<NaiveDate> {
        // Contiguous means adjacent whitespace-separated tokens that are
        // entirely numeric; words in between break the run.
        let tokens: Vec<Option<i64>> = line
            .split_whitespace()
            .map(|t| {
                if self.number_token.is_match(t) && t.chars().all(|c| c.is_ascii_digit()) {
                    t.parse().ok()
                } else {
                    None
                }
            })
            .collect();

        for run in tokens.split(|t| t.is_none()) {
            let numbers: Vec<i64> = run.iter().filter_map(|t| *t).collect();
            if let Some(date) = self.tuple_from_run(&numbers) {
                return Some(date);
            }
        }

        None
    }

    /// First valid permutation over 3-windows of a numeric run
    fn tuple_from_run(&self, tokens: &[i64]) -> Option<NaiveDate> {
        if tokens.len() < 3 {
            return None;
        }

        for window in tokens.windows(3) {
            let (a, b, c) = (window[0], window[1], window[2]);
            for order in [DigitOrder::Ymd, DigitOrder::Dmy, DigitOrder::Ydm] {
                if let Some(date) = order.build_from_tuple(a, b, c) {
                    debug!("numeric tuple {:?} accepted as {:?}", window, order);
                    return Some(date);
                }
            }
        }

        None
    }
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply one numeric pattern to a text, building a calendar-valid date
fn capture_date(pattern: &Regex, order: DigitOrder, text: &str) -> Option<NaiveDate> {
    let caps = pattern.captures(text)?;
    let a: i32 = caps[1].parse().ok()?;
    let b: u32 = caps[2].parse().ok()?;
    let c: i32 = caps[3].parse().ok()?;
    order.build(a, b, c)
}

/// Digit-order interpretation for three-field numeric dates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DigitOrder {
    Ymd,
    Dmy,
    Ydm,
}

impl DigitOrder {
    /// Build from pre-assigned capture positions (a, b, c left to right)
    fn build(self, a: i32, b: u32, c: i32) -> Option<NaiveDate> {
        match self {
            DigitOrder::Ymd => NaiveDate::from_ymd_opt(normalize_year(a), b, c as u32),
            DigitOrder::Dmy => NaiveDate::from_ymd_opt(normalize_year(c), b, a as u32),
            DigitOrder::Ydm => NaiveDate::from_ymd_opt(normalize_year(a), c as u32, b),
        }
    }

    /// Build from raw tuple values with range pre-checks
    fn build_from_tuple(self, a: i64, b: i64, c: i64) -> Option<NaiveDate> {
        let (y, m, d) = match self {
            DigitOrder::Ymd => (a, b, c),
            DigitOrder::Dmy => (c, b, a),
            DigitOrder::Ydm => (a, c, b),
        };

        if !(1..=9999).contains(&y) || !(1..=12).contains(&m) || !(1..=31).contains(&d) {
            return None;
        }

        NaiveDate::from_ymd_opt(normalize_year(y as i32), m as u32, d as u32)
    }
}

/// Two-digit years shift to the 2000s, three-digit to the 1900s
fn normalize_year(year: i32) -> i32 {
    match year {
        0..=99 => year + 2000,
        100..=999 => year + 1900,
        y => y,
    }
}

/// Month number from a fixed 3-letter abbreviation, case-insensitive
fn month_from_abbrev(abbrev: &str) -> Option<u32> {
    let lowered = abbrev.to_lowercase();
    MONTH_ABBREVS
        .iter()
        .position(|m| *m == lowered)
        .map(|i| i as u32 + 1)
}
