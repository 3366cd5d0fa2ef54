//! Named properties with a closed set of allowed values.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{CarTaylorError, Result};

#[derive(Debug, Clone, Default)]
struct Property {
    value: Option<String>,
    allowed: BTreeSet<String>,
}

/// Holds the properties of a part instance.
///
/// A property is declared with the values it accepts and starts unset.
///
/// # Example
///
/// ```
/// use cartaylor_core::PropertyManager;
///
/// let mut props = PropertyManager::new();
/// props.add_property("color", ["red", "blue"]);
///
/// assert_eq!(props.property("color"), None);
/// props.set_property("color", "blue").unwrap();
/// assert_eq!(props.property("color").as_deref(), Some("blue"));
/// assert!(props.set_property("color", "yellow").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PropertyManager {
    properties: BTreeMap<String, Property>,
}

impl PropertyManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a property, replacing any previous declaration of that name.
    pub fn add_property<I, S>(&mut self, name: impl Into<String>, allowed: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.properties.insert(
            name.into(),
            Property {
                value: None,
                allowed: allowed.into_iter().map(Into::into).collect(),
            },
        );
    }

    pub fn property_names(&self) -> BTreeSet<String> {
        self.properties.keys().cloned().collect()
    }

    /// Current value of a property; `None` when unknown or unset.
    pub fn property(&self, name: &str) -> Option<String> {
        self.properties.get(name).and_then(|p| p.value.clone())
    }

    /// Sets a property to one of its allowed values.
    pub fn set_property(&mut self, name: &str, value: &str) -> Result<()> {
        let property = self.properties.get_mut(name).ok_or_else(|| {
            CarTaylorError::InvalidArgument(format!("unknown property '{}'", name))
        })?;
        if !property.allowed.contains(value) {
            return Err(CarTaylorError::InvalidArgument(format!(
                "value '{}' is not allowed for property '{}'",
                value, name
            )));
        }
        property.value = Some(value.to_string());
        Ok(())
    }

    /// Allowed values of a property; empty for unknown properties.
    pub fn available_property_values(&self, name: &str) -> BTreeSet<String> {
        self.properties
            .get(name)
            .map(|p| p.allowed.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}
