//! Part instances.

use std::collections::BTreeSet;

use super::{Category, PartType, PropertyManager};
use crate::error::Result;

/// A concrete part produced from a [`PartType`].
#[derive(Debug, Clone)]
pub struct Part {
    part_type: PartType,
    properties: PropertyManager,
}

impl Part {
    /// Creates a part without properties.
    pub fn new(part_type: PartType) -> Self {
        Self::with_properties(part_type, PropertyManager::new())
    }

    pub fn with_properties(part_type: PartType, properties: PropertyManager) -> Self {
        Self {
            part_type,
            properties,
        }
    }

    pub fn name(&self) -> &str {
        self.part_type.name()
    }

    pub fn part_type(&self) -> &PartType {
        &self.part_type
    }

    pub fn category(&self) -> &Category {
        self.part_type.category()
    }

    pub fn properties(&self) -> &PropertyManager {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut PropertyManager {
        &mut self.properties
    }

    pub fn property_names(&self) -> BTreeSet<String> {
        self.properties.property_names()
    }

    pub fn property(&self, name: &str) -> Option<String> {
        self.properties.property(name)
    }

    pub fn set_property(&mut self, name: &str, value: &str) -> Result<()> {
        self.properties.set_property(name, value)
    }

    pub fn available_property_values(&self, name: &str) -> BTreeSet<String> {
        self.properties.available_property_values(name)
    }
}
