//! Compatibility rules between part types.
//!
//! Two relations are kept:
//! - incompatibilities, always symmetric: recording A↔B stores both
//!   directions and removing either direction removes both
//! - requirements, directed: A→B says selecting A needs B, nothing more
//!
//! Consumers that must not edit rules receive a `&dyn CompatibilityChecker`.

mod store;


use std::collections::HashSet;

use cartaylor_core::PartType;

pub use store::CompatibilityStore;

/// Read-only view of the compatibility rules.
///
/// Every getter returns an owned copy; an empty set when nothing is recorded.
pub trait CompatibilityChecker {
    /// Parts that cannot coexist with `reference`.
    fn incompatibilities(&self, reference: &PartType) -> HashSet<PartType>;

    /// Parts that must be selected whenever `reference` is.
    fn requirements(&self, reference: &PartType) -> HashSet<PartType>;

    fn is_incompatible(&self, reference: &PartType, target: &PartType) -> bool {
        self.incompatibilities(reference).contains(target)
    }

    fn is_required_by(&self, required: &PartType, reference: &PartType) -> bool {
        self.requirements(reference).contains(required)
    }
}

/// Rule editing on top of [`CompatibilityChecker`].
pub trait CompatibilityManager: CompatibilityChecker {
    /// Records `reference`↔`t` for every target, in both directions.
    fn add_incompatibilities(&mut self, reference: &PartType, targets: &[PartType]);

    /// Drops `reference`↔`target` in both directions; no-op when absent.
    fn remove_incompatibility(&mut self, reference: &PartType, target: &PartType);

    /// Records `reference`→`t` for every target; no reverse edge.
    fn add_requirements(&mut self, reference: &PartType, targets: &[PartType]);

    /// Drops `reference`→`target` only; no-op when absent.
    fn remove_requirement(&mut self, reference: &PartType, target: &PartType);
}
