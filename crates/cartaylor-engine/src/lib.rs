//! Constraint model and validation engine for CarTaylor.
//!
//! - [`Catalog`]: the closed universe of categories and part types
//! - [`CompatibilityStore`]: symmetric incompatibilities and directed
//!   requirements between part types
//! - [`Configuration`]: one selection per category, checked for validity and
//!   completeness against the two above
//!
//! Every check recomputes from the current selections and rule graphs, so
//! a rule edit is visible to the very next validation.

pub mod catalog;
pub mod compatibility;
pub mod configuration;
pub mod error;

pub use catalog::Catalog;
pub use compatibility::{CompatibilityChecker, CompatibilityManager, CompatibilityStore};
pub use configuration::{Configuration, ConfigurationStatus, Violation};
pub use error::{LoadError, LoadResult};
