//! Catalog value types.
//!
//! Categories and part types are immutable once built and validated at
//! construction. Part instances are produced on demand from a part type's
//! factory and carry their own mutable properties.

mod category;
mod part;
mod part_type;
mod property;

#[cfg(test)]
mod tests;

pub use category::{standard_categories, Category, ENGINE, EXTERIOR, INTERIOR, TRANSMISSION};
pub use part::Part;
pub use part_type::{PartFactory, PartType};
pub use property::PropertyManager;
