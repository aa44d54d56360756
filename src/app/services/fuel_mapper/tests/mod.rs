//! Tests for fuel-label canonicalization

pub mod mapper_tests;
pub mod similarity_tests;
