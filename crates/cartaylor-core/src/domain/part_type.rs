//! Part types: the selectable options of a category.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use super::{Category, Part};
use crate::error::{CarTaylorError, Result};

/// Produces a part instance for a part type.
///
/// Stored on the part type itself; failures are ordinary error returns.
pub type PartFactory = Arc<dyn Fn(&PartType) -> Result<Part> + Send + Sync>;

/// A selectable option within a category, with a price.
///
/// Identity covers the name, the category AND the price: two part types that
/// only differ by price are distinct, so compatibility rules recorded for one
/// do not apply to the other. The factory takes no part in identity.
///
/// # Example
///
/// ```
/// use cartaylor_core::{Category, PartType};
///
/// let engine = Category::new("Engine").unwrap();
/// let v8 = PartType::new("V8", engine.clone(), 10_000).unwrap();
/// let repriced = PartType::new("V8", engine.clone(), 12_000).unwrap();
///
/// assert_eq!(v8.qualified_name(), "Engine/V8");
/// assert_ne!(v8, repriced);
/// assert!(PartType::new("V12", engine, -1).is_err());
/// ```
#[derive(Clone)]
pub struct PartType {
    name: Arc<str>,
    category: Category,
    price: i64,
    factory: Option<PartFactory>,
}

impl PartType {
    /// Creates a part type without a factory.
    ///
    /// Fails when the name is blank or the price is negative.
    pub fn new(name: impl Into<String>, category: Category, price: i64) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CarTaylorError::Invariant(format!(
                "part type name in category '{}' must not be blank",
                category
            )));
        }
        if price < 0 {
            return Err(CarTaylorError::Invariant(format!(
                "part type '{}' has negative price {}",
                name, price
            )));
        }
        Ok(Self {
            name: name.into(),
            category,
            price,
            factory: None,
        })
    }

    /// Attaches a factory used by [`PartType::instantiate`].
    pub fn with_factory<F>(mut self, factory: F) -> Self
    where
        F: Fn(&PartType) -> Result<Part> + Send + Sync + 'static,
    {
        self.factory = Some(Arc::new(factory));
        self
    }

    /// Attaches the plain factory producing property-less parts.
    pub fn with_default_factory(self) -> Self {
        self.with_factory(|part_type| Ok(Part::new(part_type.clone())))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn price(&self) -> i64 {
        self.price
    }

    /// Returns `Category/Name`, the unambiguous reference form.
    pub fn qualified_name(&self) -> String {
        format!("{}/{}", self.category, self.name)
    }

    pub fn has_factory(&self) -> bool {
        self.factory.is_some()
    }

    /// Produces a new part instance of this type.
    pub fn instantiate(&self) -> Result<Part> {
        match &self.factory {
            Some(factory) => factory(self),
            None => Err(CarTaylorError::Instantiation(format!(
                "part type '{}' has no factory",
                self.qualified_name()
            ))),
        }
    }
}

impl PartialEq for PartType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.category == other.category && self.price == other.price
    }
}

impl Eq for PartType {}

impl Hash for PartType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.category.hash(state);
        self.price.hash(state);
    }
}

impl PartialOrd for PartType {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Category first so sorted listings group by category.
impl Ord for PartType {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category
            .cmp(&other.category)
            .then_with(|| self.name.cmp(&other.name))
            .then_with(|| self.price.cmp(&other.price))
    }
}

impl fmt::Debug for PartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PartType")
            .field("name", &self.name)
            .field("category", &self.category.name())
            .field("price", &self.price)
            .field("has_factory", &self.factory.is_some())
            .finish()
    }
}

impl fmt::Display for PartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
