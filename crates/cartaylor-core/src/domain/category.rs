//! Categories group mutually-exclusive options.

use std::fmt;
use std::sync::Arc;

use crate::error::{CarTaylorError, Result};

/// Name of the engine category.
pub const ENGINE: &str = "Engine";
/// Name of the transmission category.
pub const TRANSMISSION: &str = "Transmission";
/// Name of the exterior category.
pub const EXTERIOR: &str = "Exterior";
/// Name of the interior category.
pub const INTERIOR: &str = "Interior";

/// A named grouping of mutually-exclusive options.
///
/// Two categories are equal when their names are equal.
///
/// # Example
///
/// ```
/// use cartaylor_core::Category;
///
/// let engine = Category::new("Engine").unwrap();
/// assert_eq!(engine.name(), "Engine");
/// assert_eq!(engine, Category::new("Engine").unwrap());
///
/// assert!(Category::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Category {
    name: Arc<str>,
}

impl Category {
    /// Creates a category, rejecting blank names.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CarTaylorError::Invariant(
                "category name must not be blank".to_string(),
            ));
        }
        Ok(Self { name: name.into() })
    }

    /// Returns the category name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// The four vehicle categories every standard catalog is seeded with.
pub fn standard_categories() -> Vec<Category> {
    [ENGINE, TRANSMISSION, EXTERIOR, INTERIOR]
        .into_iter()
        .map(|name| Category {
            name: Arc::from(name),
        })
        .collect()
}
