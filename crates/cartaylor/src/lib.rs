//! CarTaylor - a vehicle configurator in Rust
//!
//! Pick one part per category from a catalog and check the selection
//! against incompatibility and requirement rules.
//!
//! # Example
//!
//! ```rust
//! use cartaylor::prelude::*;
//!
//! let mut configurator = Configurator::from_document(
//!     ["Engine", "Transmission"],
//!     &CatalogDocument::from_json_str(r#"{
//!         "partTypes": [
//!             { "name": "V8", "category": "Engine", "price": 10000 },
//!             { "name": "Manual", "category": "Transmission", "price": 0 }
//!         ],
//!         "requirements": [ { "part": "V8", "targets": ["Manual"] } ]
//!     }"#).unwrap(),
//! ).unwrap();
//!
//! configurator.select("V8").unwrap();
//! assert!(!configurator.is_valid());
//!
//! configurator.select("Transmission/Manual").unwrap();
//! assert!(configurator.is_valid() && configurator.is_complete());
//! assert_eq!(configurator.total_price(), 10_000);
//! ```

// Value types
pub use cartaylor_core::{
    CarTaylorError, Category, Part, PartFactory, PartType, PropertyManager, Result,
};

// Documents and settings
pub use cartaylor_config::{
    CatalogDocument, ConfigError, ConfiguratorConfig, PartTypeRecord, ReportConfig, ReportFormat,
    RuleRecord,
};

// Constraint model
pub use cartaylor_engine::{
    Catalog, CompatibilityChecker, CompatibilityManager, CompatibilityStore, Configuration,
    ConfigurationStatus, LoadError, Violation,
};

mod configurator;
pub mod report;

pub use configurator::Configurator;
pub use report::Element;

/// Installs the colored console logger.
#[cfg(feature = "console")]
pub use cartaylor_console::init as init_console;

pub mod prelude {
    pub use super::report::{Element, HtmlRenderer, TextRenderer};
    pub use super::{
        CatalogDocument, Category, CompatibilityChecker, CompatibilityManager, Configurator,
        ConfiguratorConfig, PartType, Violation,
    };
}
