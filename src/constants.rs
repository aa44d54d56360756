//! Application constants for the report processor
//!
//! This module contains all default keyword sets, pattern fragments,
//! tolerances, and size caps used throughout the parsing pipeline.
//! Everything here is a default; the injectable [`crate::config::ParserConfig`]
//! can override the data-driven pieces (fuel mapping, locations, prefixes).

// =============================================================================
// Input Size Caps
// =============================================================================

/// Maximum accepted input size in characters; larger inputs are rejected
/// with a dedicated oversize error rather than parsed.
pub const MAX_INPUT_CHARS: usize = 20_000;

/// Maximum accepted input size in lines.
pub const MAX_INPUT_LINES: usize = 500;

/// Per-line length cap applied during preprocessing, before any regex runs.
/// Bounds worst-case backtracking cost against corrupted or adversarial input.
pub const MAX_LINE_CHARS: usize = 512;

/// Number of leading lines inspected by the station identity cascade.
pub const STATION_SCAN_LINES: usize = 5;

/// Number of leading lines inspected by the station fallback script scan.
pub const STATION_FALLBACK_SCAN_LINES: usize = 3;

// =============================================================================
// Script and Digit Handling
// =============================================================================

/// Khmer digit glyphs U+17E0..U+17E9, index-aligned with ASCII 0..9.
pub const KHMER_DIGITS: &[char] = &['០', '១', '២', '៣', '៤', '៥', '៦', '៧', '៨', '៩'];

/// Width of the space run substituted for each tab character. Preserves the
/// column-like structure of tab-delimited pseudo-tables so that the
/// multi-space delimiter stage still sees a boundary.
pub const TAB_SPACE_WIDTH: usize = 4;

/// Minimum Khmer-script run length for the script-based station strategy.
pub const SCRIPT_RUN_MIN: usize = 3;

/// Minimum Khmer-script run length for the station fallback scan.
pub const FALLBACK_RUN_MIN: usize = 4;

// =============================================================================
// Structural Keywords
// =============================================================================

/// Section boundary keywords, matched case-insensitively. "សរុប" is the
/// Khmer equivalent of "total"/"summary" used by several station templates.
pub const SECTION_KEYWORDS: &[&str] = &["summary", "total", "សរុប"];

/// Keywords that mark an explicit totals line rather than a section opener.
pub const TOTAL_KEYWORDS: &[&str] = &["total", "សរុប"];

/// Words expected in a table header row.
pub const HEADER_WORDS: &[&str] = &[
    "fuel", "type", "volume", "litre", "liter", "qty", "amount", "price", "sales", "ប្រភេទ",
    "បរិមាណ", "តម្លៃ",
];

/// Structural words that must never be mistaken for a station name.
pub const STATION_DENYLIST: &[&str] = &[
    "summary",
    "report",
    "daily",
    "total",
    "sales",
    "station",
    "របាយការណ៍",
    "ប្រចាំថ្ងៃ",
    "សរុប",
];

/// Known company prefix tokens (exact set, matched case-insensitively).
pub const COMPANY_PREFIXES: &[&str] = &["PTT", "PTC", "KPL", "TELA"];

/// Field labels that introduce the station name in labeled report templates.
pub const STATION_LABELS: &[&str] = &["សាខាស្ថានីយ", "Station"];

/// Field labels that introduce the station manager name.
pub const MANAGER_LABELS: &[&str] = &["ឈ្មោះប្រធានស្ថានីយ", "Manager"];

/// Closed list of known station locations, Khmer and Latin spellings.
pub const KNOWN_LOCATIONS: &[&str] = &[
    "ភ្នំពេញ",
    "សៀមរាប",
    "បាត់ដំបង",
    "កំពត",
    "តាខ្មៅ",
    "ព្រៃវែង",
    "កណ្ដាល",
    "Phnom Penh",
    "Siem Reap",
    "Battambang",
    "Kampot",
    "Takhmao",
    "Prey Veng",
    "Kandal",
    "Poipet",
    "Sihanoukville",
];

/// Station-name sentinel returned when the entire cascade fails.
pub const UNKNOWN_STATION: &str = "Unknown Station";

// =============================================================================
// Fuel Categories
// =============================================================================

/// Default raw-label to canonical-category mapping table.
///
/// Derived from labels observed across historical report templates. The
/// table is data, not code: stations with new templates are handled by
/// extending the injected configuration, never by forking the parser.
pub mod fuel_labels {
    /// Labels that map to Diesel.
    pub const DIESEL: &[&str] = &["Diesel", "diesel", "DO", "ម៉ាស៊ូត", "ប្រេងម៉ាស៊ូត"];

    /// Labels that map to Regular gasoline (EA92 grade).
    pub const REGULAR: &[&str] = &["EA92", "Regular", "regular", "សាំងធម្មតា", "92"];

    /// Labels that map to Super gasoline (EA95 grade).
    pub const SUPER: &[&str] = &["EA95", "Super", "super", "សាំងស៊ុបពែរ", "95"];
}

/// Keyword fragments for last-resort fuel-category inference.
pub mod fuel_keywords {
    pub const DIESEL_LIKE: &[&str] = &["diesel", "ម៉ាស៊ូត", "do"];
    pub const REGULAR_LIKE: &[&str] = &["ea92", "92", "regular", "ធម្មតា"];
    pub const SUPER_LIKE: &[&str] = &["ea95", "95", "super", "ស៊ុប"];
}

/// Minimum similarity ratio for fuzzy fuel-label matching.
pub const FUEL_SIMILARITY_THRESHOLD: f64 = 0.6;

/// Similarity boost applied when one label contains the other.
pub const FUEL_CONTAINMENT_BOOST: f64 = 0.3;

// =============================================================================
// Totals Reconciliation Tolerances
// =============================================================================

/// Below this percentage difference the explicitly reported total is kept
/// as authoritative without comment.
pub const TOTALS_TIGHT_TOLERANCE_PCT: f64 = 2.0;

/// Above this percentage difference the calculated total overrides the
/// reported one and a warning is emitted.
pub const TOTALS_WIDE_TOLERANCE_PCT: f64 = 10.0;

// =============================================================================
// Validation
// =============================================================================

/// Station-detection confidence below which a warning is attached.
pub const LOW_CONFIDENCE_THRESHOLD: f64 = 0.6;

/// Canonical date format emitted by the date extractor (chrono format string).
pub const CANONICAL_DATE_FORMAT: &str = "%d/%m/%y";
