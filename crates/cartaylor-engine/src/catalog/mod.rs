//! The closed universe of categories and part types.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use cartaylor_config::{CatalogDocument, PartTypeRecord};
use cartaylor_core::{
    standard_categories, CarTaylorError, Category, Part, PartType, PropertyManager, Result,
};
use tracing::info;

use crate::error::{LoadError, LoadResult};


/// Categories and part types known to a configurator.
///
/// The category set is fixed when the catalog is built; loading only adds
/// part types, each of which must belong to a known category.
///
/// # Example
///
/// ```
/// use cartaylor_engine::Catalog;
///
/// let mut catalog = Catalog::with_categories(["Engine", "Transmission"]).unwrap();
/// catalog.load_json_str(r#"{ "partTypes": [
///     { "name": "V8", "category": "Engine", "price": 10000 }
/// ] }"#).unwrap();
///
/// let engine = catalog.category("Engine").unwrap();
/// assert_eq!(catalog.part_types_for_category(&engine).len(), 1);
/// assert!(catalog.load_json_str(r#"{ "partTypes": [
///     { "name": "Red", "category": "Exterior", "price": 0 }
/// ] }"#).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: BTreeMap<String, Category>,
    part_types: HashSet<PartType>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Creates an empty catalog seeded with the standard vehicle categories.
    pub fn new() -> Self {
        Self::from_categories(standard_categories())
    }

    /// Creates an empty catalog over a custom closed category set.
    pub fn with_categories<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let categories = names
            .into_iter()
            .map(Category::new)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_categories(categories))
    }

    pub fn from_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        Self {
            categories: categories
                .into_iter()
                .map(|c| (c.name().to_string(), c))
                .collect(),
            part_types: HashSet::new(),
        }
    }

    pub fn categories(&self) -> HashSet<Category> {
        self.categories.values().cloned().collect()
    }

    /// Categories in name order, without copying.
    pub fn iter_categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.values()
    }

    pub fn category(&self, name: &str) -> Option<Category> {
        self.categories.get(name).cloned()
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn part_types(&self) -> HashSet<PartType> {
        self.part_types.clone()
    }

    pub fn iter_part_types(&self) -> impl Iterator<Item = &PartType> {
        self.part_types.iter()
    }

    pub fn part_types_for_category(&self, category: &Category) -> HashSet<PartType> {
        self.part_types
            .iter()
            .filter(|pt| pt.category() == category)
            .cloned()
            .collect()
    }

    pub fn contains(&self, part_type: &PartType) -> bool {
        self.part_types.contains(part_type)
    }

    /// Number of part types.
    pub fn len(&self) -> usize {
        self.part_types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.part_types.is_empty()
    }

    /// Adds a single part type whose category must already be known.
    pub fn add_part_type(&mut self, part_type: PartType) -> Result<()> {
        if !self.categories.contains_key(part_type.category().name()) {
            return Err(CarTaylorError::InvalidArgument(format!(
                "category '{}' is not part of the catalog",
                part_type.category()
            )));
        }
        self.part_types.insert(part_type);
        Ok(())
    }

    /// Loads every part type of a document.
    ///
    /// All records are checked before any is inserted: on error the
    /// catalog is left as it was. Returns the number of part types added;
    /// records equal to an existing part type are merged, not counted.
    pub fn load_document(&mut self, document: &CatalogDocument) -> LoadResult<usize> {
        let staged = document
            .part_types
            .iter()
            .enumerate()
            .map(|(index, record)| self.build_part_type(index, record))
            .collect::<LoadResult<Vec<_>>>()?;

        let before = self.part_types.len();
        self.part_types.extend(staged);
        let loaded = self.part_types.len() - before;

        info!(
            event = "catalog_loaded",
            part_count = self.part_types.len() as u64,
            category_count = self.categories.len() as u64,
        );
        Ok(loaded)
    }

    pub fn load_json_str(&mut self, json: &str) -> LoadResult<usize> {
        let document = CatalogDocument::from_json_str(json)?;
        self.load_document(&document)
    }

    /// Loads a document from disk; the format follows the file extension.
    pub fn load_path(&mut self, path: impl AsRef<Path>) -> LoadResult<usize> {
        let document = CatalogDocument::from_path(path)?;
        self.load_document(&document)
    }

    /// Resolves `Name` or `Category/Name` to a single part type.
    pub fn resolve_part(&self, reference: &str) -> LoadResult<PartType> {
        let mut matches = match reference.split_once('/') {
            Some((category, name)) if self.categories.contains_key(category) => self
                .part_types
                .iter()
                .filter(|pt| pt.category().name() == category && pt.name() == name)
                .collect::<Vec<_>>(),
            _ => self
                .part_types
                .iter()
                .filter(|pt| pt.name() == reference)
                .collect::<Vec<_>>(),
        };

        match matches.len() {
            0 => Err(LoadError::UnknownPart(reference.to_string())),
            1 => Ok(matches.remove(0).clone()),
            _ => Err(LoadError::AmbiguousPart(reference.to_string())),
        }
    }

    fn build_part_type(
        &self,
        index: usize,
        record: &PartTypeRecord,
    ) -> LoadResult<PartType> {
        let category = self.categories.get(&record.category).cloned().ok_or_else(|| {
            LoadError::UnknownCategory {
                part: record.name.clone(),
                category: record.category.clone(),
            }
        })?;
        if record.price < 0 {
            return Err(LoadError::NegativePrice {
                part: record.name.clone(),
                price: record.price,
            });
        }
        let part_type = PartType::new(record.name.clone(), category, record.price)
            .map_err(|source| LoadError::InvalidRecord { index, source })?;

        let properties = record.properties.clone();
        Ok(part_type.with_factory(move |pt| {
            let mut manager = PropertyManager::new();
            for (name, values) in &properties {
                manager.add_property(name.clone(), values.iter().cloned());
            }
            Ok(Part::with_properties(pt.clone(), manager))
        }))
    }
}
