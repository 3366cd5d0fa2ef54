//! Configuration system for CarTaylor.
//!
//! Two documents live here:
//! - [`CatalogDocument`], the part-type list (and optional compatibility
//!   rules) a catalog is loaded from, in JSON, TOML or YAML
//! - [`ConfiguratorConfig`], the `cartaylor.toml` settings file
//!
//! # Examples
//!
//! Parse a catalog document:
//!
//! ```
//! use cartaylor_config::CatalogDocument;
//!
//! let doc = CatalogDocument::from_json_str(r#"{
//!     "partTypes": [
//!         { "name": "V8", "category": "Engine", "price": 10000 },
//!         { "name": "Manual", "category": "Transmission", "price": 0 }
//!     ],
//!     "requirements": [ { "part": "V8", "targets": ["Manual"] } ]
//! }"#).unwrap();
//!
//! assert_eq!(doc.part_types.len(), 2);
//! assert_eq!(doc.requirements[0].targets, vec!["Manual"]);
//! ```
//!
//! Use default settings when the file is missing:
//!
//! ```
//! use cartaylor_config::ConfiguratorConfig;
//!
//! let config = ConfiguratorConfig::load("cartaylor.toml").unwrap_or_default();
//! assert_eq!(config.categories.len(), 4);
//! ```

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default settings file name looked up by the CLI.
pub const DEFAULT_CONFIG_FILE: &str = "cartaylor.toml";

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Serialization format of a document on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Toml,
    Yaml,
}

impl DocumentFormat {
    /// Picks the format from a file extension; anything unknown is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::Toml,
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// A catalog description: the part types to load and optional rules.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDocument {
    /// Part types, each tagged with a pre-registered category name.
    pub part_types: Vec<PartTypeRecord>,

    /// Symmetric "cannot coexist" rules.
    #[serde(default)]
    pub incompatibilities: Vec<RuleRecord>,

    /// Directed "needs" rules.
    #[serde(default)]
    pub requirements: Vec<RuleRecord>,
}

impl CatalogDocument {
    /// Reads a document, choosing the format from the file extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        Self::from_str_as(&contents, DocumentFormat::from_path(path))
    }

    pub fn from_str_as(s: &str, format: DocumentFormat) -> Result<Self, ConfigError> {
        match format {
            DocumentFormat::Json => Self::from_json_str(s),
            DocumentFormat::Toml => Self::from_toml_str(s),
            DocumentFormat::Yaml => Self::from_yaml_str(s),
        }
    }

    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Renders the document as pretty JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// One part type entry of a catalog document.
///
/// The price is signed so a negative value reaches the loader and is
/// reported as such instead of failing as a generic parse error.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PartTypeRecord {
    pub name: String,
    pub category: String,
    pub price: i64,

    /// Properties of produced parts, each with its allowed values.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Vec<String>>,
}

impl PartTypeRecord {
    pub fn new(name: impl Into<String>, category: impl Into<String>, price: i64) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            price,
            properties: BTreeMap::new(),
        }
    }

    pub fn with_property<I, S>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.properties
            .insert(name.into(), values.into_iter().map(Into::into).collect());
        self
    }
}

/// A rule from one part to a set of target parts.
///
/// Parts are referenced by bare name or as `Category/Name`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RuleRecord {
    pub part: String,
    pub targets: Vec<String>,
}

impl RuleRecord {
    pub fn new<I, S>(part: impl Into<String>, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            part: part.into(),
            targets: targets.into_iter().map(Into::into).collect(),
        }
    }
}

/// Configurator settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ConfiguratorConfig {
    /// Catalog document to load at startup; empty catalog when unset.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Closed category set the catalog is seeded with.
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,

    /// Report rendering settings.
    #[serde(default)]
    pub report: ReportConfig,
}

fn default_categories() -> Vec<String> {
    ["Engine", "Transmission", "Exterior", "Interior"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for ConfiguratorConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            categories: default_categories(),
            report: ReportConfig::default(),
        }
    }
}

impl ConfiguratorConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML or fails
    /// [`ConfiguratorConfig::validate`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    ///
    /// A relative `catalog_path` is taken relative to the file's directory.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        Ok(Self::from_toml_str(&contents)?.anchored_at(path))
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file; paths resolve as in
    /// [`ConfiguratorConfig::from_toml_file`].
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        Ok(Self::from_yaml_str(&contents)?.anchored_at(path))
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn anchored_at(mut self, settings_file: &Path) -> Self {
        if let (Some(catalog), Some(dir)) = (&self.catalog_path, settings_file.parent()) {
            if catalog.is_relative() {
                self.catalog_path = Some(dir.join(catalog));
            }
        }
        self
    }

    /// Sets the catalog document path.
    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }

    /// Replaces the category set.
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the report format.
    pub fn with_report_format(mut self, format: ReportFormat) -> Self {
        self.report.format = format;
        self
    }

    /// Checks the category set: non-empty, no blank names, no duplicates.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.categories.is_empty() {
            return Err(ConfigError::Invalid(
                "at least one category is required".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        for name in &self.categories {
            if name.trim().is_empty() {
                return Err(ConfigError::Invalid(
                    "category names must not be blank".to_string(),
                ));
            }
            if !seen.insert(name.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate category '{}'",
                    name
                )));
            }
        }
        Ok(())
    }
}

/// Report rendering settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ReportConfig {
    #[serde(default)]
    pub format: ReportFormat,

    /// Currency symbol appended to prices in HTML reports.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "€".to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::default(),
            currency: default_currency(),
        }
    }
}

/// Output format of configuration descriptions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    /// Line-oriented plain text.
    #[default]
    Text,

    /// HTML fragment.
    Html,
}
