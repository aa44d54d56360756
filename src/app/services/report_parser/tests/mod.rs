//! Tests for the report parsing pipeline

pub mod classifier_tests;
pub mod fuel_line_tests;
pub mod preprocess_tests;
pub mod station_tests;
