//! Composition root wiring catalog, rules and configuration together.

use std::collections::HashSet;
use std::io::{self, Write};

use cartaylor_config::{CatalogDocument, ConfiguratorConfig, ReportConfig, ReportFormat};
use cartaylor_core::{CarTaylorError, Category, PartType, Result};
use cartaylor_engine::{
    Catalog, CompatibilityChecker, CompatibilityStore, Configuration, ConfigurationStatus,
    Violation,
};
use tracing::info;

use crate::report::{Element, HtmlRenderer, TextRenderer};

/// Owns one catalog, one rule store and one configuration.
///
/// Queries go through the accessors; selections are edited through
/// [`Configurator::configuration_mut`] (or the name-based helpers) and rules
/// through [`Configurator::compatibility_manager_mut`]. Every status query
/// recomputes from the current state.
#[derive(Debug, Clone, Default)]
pub struct Configurator {
    catalog: Catalog,
    compatibility: CompatibilityStore,
    configuration: Configuration,
    report: ReportConfig,
}

impl Configurator {
    /// Wraps a catalog with empty rules and an empty configuration.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            compatibility: CompatibilityStore::new(),
            configuration: Configuration::new(),
            report: ReportConfig::default(),
        }
    }

    /// Builds a catalog over `categories` and loads the document's part
    /// types and rules into it.
    pub fn from_document<I, S>(categories: I, document: &CatalogDocument) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut catalog = Catalog::with_categories(categories)?;
        catalog.load_document(document)?;
        let mut configurator = Self::new(catalog);
        configurator.load_rules(document)?;
        Ok(configurator)
    }

    /// Builds a configurator from settings, loading `catalog_path` if set.
    pub fn from_config(config: &ConfiguratorConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|err| CarTaylorError::InvalidArgument(err.to_string()))?;

        let document = match &config.catalog_path {
            Some(path) => {
                info!(event = "catalog_source", path = %path.display());
                CatalogDocument::from_path(path)
                    .map_err(|err| CarTaylorError::Load(format!("{}: {}", path.display(), err)))?
            }
            None => CatalogDocument::default(),
        };

        let configurator = Self::from_document(config.categories.iter().cloned(), &document)?;
        Ok(configurator.with_report_config(config.report.clone()))
    }

    pub fn with_report_config(mut self, report: ReportConfig) -> Self {
        self.report = report;
        self
    }

    /// Applies the rule records of a document to the rule store.
    pub fn load_rules(&mut self, document: &CatalogDocument) -> Result<()> {
        self.compatibility.load_rules(&self.catalog, document)?;
        Ok(())
    }

    pub fn categories(&self) -> HashSet<Category> {
        self.catalog.categories()
    }

    pub fn category(&self, name: &str) -> Option<Category> {
        self.catalog.category(name)
    }

    pub fn part_types(&self) -> HashSet<PartType> {
        self.catalog.part_types()
    }

    /// Part types available for a category.
    pub fn variants(&self, category: &Category) -> HashSet<PartType> {
        self.catalog.part_types_for_category(category)
    }

    /// Part types of the category with this name.
    pub fn variants_by_name(&self, category: &str) -> Result<HashSet<PartType>> {
        let category = self.require_category(category)?;
        Ok(self.variants(&category))
    }

    /// Resolves `Name` or `Category/Name` to a catalog part type.
    pub fn part(&self, reference: &str) -> Result<PartType> {
        self.catalog
            .resolve_part(reference)
            .map_err(|err| CarTaylorError::InvalidArgument(err.to_string()))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn configuration_mut(&mut self) -> &mut Configuration {
        &mut self.configuration
    }

    /// Read-only view of the rules.
    pub fn compatibility_checker(&self) -> &dyn CompatibilityChecker {
        &self.compatibility
    }

    pub fn compatibility_manager_mut(&mut self) -> &mut CompatibilityStore {
        &mut self.compatibility
    }

    /// Selects a part by reference. Returns the part it replaced.
    pub fn select(&mut self, reference: &str) -> Result<Option<PartType>> {
        let part = self.part(reference)?;
        Ok(self.configuration.select_part(part))
    }

    /// Selects the part named `part` within the category named `category`.
    pub fn select_by_name(&mut self, category: &str, part: &str) -> Result<Option<PartType>> {
        let category = self.require_category(category)?;
        let mut candidates: Vec<_> = self
            .catalog
            .iter_part_types()
            .filter(|pt| pt.category() == &category && pt.name() == part)
            .cloned()
            .collect();
        match candidates.len() {
            0 => Err(CarTaylorError::InvalidArgument(format!(
                "no part '{}' in category '{}'",
                part, category
            ))),
            1 => Ok(self.configuration.select_part(candidates.remove(0))),
            _ => Err(CarTaylorError::InvalidArgument(format!(
                "part '{}' in category '{}' is ambiguous",
                part, category
            ))),
        }
    }

    /// Clears the selection of the category with this name.
    pub fn unselect_by_name(&mut self, category: &str) -> Result<Option<PartType>> {
        let category = self.require_category(category)?;
        Ok(self.configuration.unselect_part_type(&category))
    }

    pub fn is_valid(&self) -> bool {
        self.configuration.is_valid(&self.compatibility)
    }

    pub fn is_complete(&self) -> bool {
        self.configuration.is_complete(&self.catalog)
    }

    pub fn total_price(&self) -> i64 {
        self.configuration.total_price()
    }

    pub fn violations(&self) -> Vec<Violation> {
        self.configuration.violations(&self.compatibility)
    }

    pub fn status(&self) -> ConfigurationStatus {
        self.configuration.status(&self.catalog, &self.compatibility)
    }

    /// Plain-text description of the current configuration.
    pub fn describe(&self) -> String {
        TextRenderer::new().render(Element::Configuration(&self.configuration))
    }

    /// Writes [`Configurator::describe`] to stdout.
    pub fn print_description(&self) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(self.describe().as_bytes())?;
        stdout.flush()
    }

    pub fn html_description(&self) -> String {
        HtmlRenderer::new(&self.catalog, &self.compatibility)
            .with_currency(&self.report.currency)
            .render(&self.configuration)
    }

    /// Description in the configured report format.
    pub fn report(&self) -> String {
        match self.report.format {
            ReportFormat::Text => self.describe(),
            ReportFormat::Html => self.html_description(),
        }
    }

    fn require_category(&self, name: &str) -> Result<Category> {
        self.catalog.category(name).ok_or_else(|| {
            CarTaylorError::InvalidArgument(format!("unknown category '{}'", name))
        })
    }
}

#[cfg(test)]
mod tests;
