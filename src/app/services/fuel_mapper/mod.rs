//! Fuel-label canonicalization service
//!
//! This module maps free-form fuel labels from report lines onto the closed
//! [`FuelType`] category set. Station templates spell the same product many
//! ways ("Diesel", "DO", "ម៉ាស៊ូត"), so lookup runs as a cascade:
//!
//! 1. exact dictionary lookup
//! 2. case-insensitive dictionary lookup
//! 3. bidirectional substring containment, preferring the longest key
//! 4. similarity-ratio scoring with a containment boost
//! 5. per-category keyword inference
//! 6. `Other(cleaned label)` as the data-preserving last resort
//!
//! The dictionary is injected configuration, never hardcoded, so template
//! drift is handled by updating data.

pub mod mapper;
pub mod similarity;

#[cfg(test)]
pub mod tests;

pub use mapper::FuelTypeMapper;
pub use similarity::similarity_ratio;
