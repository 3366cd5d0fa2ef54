//! Shared test fixtures for CarTaylor crates.
//!
//! This crate provides catalog values and documents for testing.
//! It does NOT depend on `cartaylor-engine` so the engine can use it as a
//! dev-dependency without a cycle.
//!
//! - [`vehicle`] - standard vehicle categories, part types and documents
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! cartaylor-test = { workspace = true }
//! ```
//!
//! ```ignore
//! use cartaylor_test::vehicle::{v8, manual, TEST_CATALOG_JSON};
//! ```

pub mod vehicle;

pub use vehicle::{
    automatic, engine, exterior, interior, leather, manual, red, ruled_document, transmission, v6,
    v8, SCENARIO_CATALOG_JSON, SCENARIO_CATEGORIES, TEST_CATALOG_JSON,
};
