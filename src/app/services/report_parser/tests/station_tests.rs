//! Tests for the station-identity cascade

use crate::app::models::{ClassifiedLine, DetectionStrategy, LineRole};
use crate::app::services::report_parser::station::StationIdentifier;
use crate::config::ParserConfig;

fn identifier() -> StationIdentifier {
    let config = ParserConfig::default();
    StationIdentifier::new(&config.company_prefixes, &config.known_locations)
}

fn lines(texts: &[&str]) -> Vec<ClassifiedLine> {
    texts
        .iter()
        .enumerate()
        .map(|(index, text)| ClassifiedLine {
            text: (*text).to_string(),
            role: LineRole::Unclassified,
            index,
        })
        .collect()
}

#[test]
fn test_labeled_station_field() {
    let identity = identifier().identify(&lines(&["សាខាស្ថានីយ: បាត់ដំបង", "15/03/2025"]));

    assert_eq!(identity.name, "បាត់ដំបង");
    assert_eq!(identity.strategy, DetectionStrategy::ExactPrefix);
    assert_eq!(identity.confidence, 0.95);
}

#[test]
fn test_prefix_followed_by_khmer_location() {
    let identity = identifier().identify(&lines(&["PTT ភ្នំពេញ", "Daily Report"]));

    assert_eq!(identity.name, "PTT ភ្នំពេញ");
    assert_eq!(identity.strategy, DetectionStrategy::ExactPrefix);
    assert_eq!(identity.confidence, 0.95);
}

#[test]
fn test_known_location_with_adjacent_prefix() {
    let identity = identifier().identify(&lines(&["PTC", "Station at Kampot"]));

    assert_eq!(identity.strategy, DetectionStrategy::KnownLocation);
    assert_eq!(identity.confidence, 0.90);
    assert!(identity.name.contains("PTC"));
    assert!(identity.name.contains("Kampot"));
}

#[test]
fn test_known_location_without_prefix() {
    let identity = identifier().identify(&lines(&["report from Siem Reap", "15/03/2025"]));

    assert_eq!(identity.strategy, DetectionStrategy::KnownLocation);
    assert_eq!(identity.confidence, 0.80);
    assert_eq!(identity.name, "Siem Reap");
}

#[test]
fn test_script_extraction_skips_denylisted_runs() {
    // របាយការណ៍ ("report") is structural; ត្បូងឃ្មុំ is a real name
    let identity = identifier().identify(&lines(&["របាយការណ៍ ត្បូងឃ្មុំ"]));

    assert_eq!(identity.strategy, DetectionStrategy::ScriptExtraction);
    assert_eq!(identity.name, "ត្បូងឃ្មុំ");
    assert_eq!(identity.confidence, 0.75);
}

#[test]
fn test_first_line_fallback_cleans_boilerplate() {
    let identity = identifier().identify(&lines(&["Best Gas 15/03/2025 Daily Report"]));

    assert_eq!(identity.strategy, DetectionStrategy::FirstLine);
    assert_eq!(identity.confidence, 0.50);
    assert_eq!(identity.name, "Best Gas");
}

#[test]
fn test_sentinel_when_everything_fails() {
    let identity = identifier().identify(&lines(&["Daily Report", "Summary"]));

    assert!(identity.is_unknown());
    assert_eq!(identity.name, "Unknown Station");
    assert_eq!(identity.confidence, 0.0);
}

#[test]
fn test_confidence_decreases_down_the_cascade() {
    let exact = identifier().identify(&lines(&["PTT ភ្នំពេញ"]));
    let location = identifier().identify(&lines(&["somewhere in Kampot"]));
    let fallback = identifier().identify(&lines(&["Best Gas"]));

    assert!(exact.confidence > location.confidence);
    assert!(location.confidence > fallback.confidence);
}

#[test]
fn test_manager_extraction() {
    let identifier = identifier();
    let manager = identifier.extract_manager(&lines(&[
        "សាខាស្ថានីយ: បាត់ដំបង",
        "ឈ្មោះប្រធានស្ថានីយ : សុខ ចាន់ថា",
    ]));

    assert_eq!(manager.as_deref(), Some("សុខ ចាន់ថា"));
}

#[test]
fn test_manager_absent() {
    assert!(identifier().extract_manager(&lines(&["PTT ភ្នំពេញ"])).is_none());
}
