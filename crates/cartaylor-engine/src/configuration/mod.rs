//! Per-category selections and their evaluation.

mod analysis;


use std::collections::{BTreeSet, HashMap, HashSet};

use cartaylor_core::{Category, PartType};
use tracing::{debug, trace};

use crate::catalog::Catalog;
use crate::compatibility::CompatibilityChecker;

pub use analysis::{ConfigurationStatus, Violation};

/// The current selection: at most one part type per category.
///
/// Validity and completeness are independent and always recomputed from the
/// current selections and the rules passed in; nothing is cached.
///
/// # Example
///
/// ```
/// use cartaylor_core::PartType;
/// use cartaylor_engine::{Catalog, CompatibilityStore, Configuration};
///
/// let catalog = Catalog::with_categories(["Engine"]).unwrap();
/// let engine = catalog.category("Engine").unwrap();
/// let v8 = PartType::new("V8", engine.clone(), 10_000).unwrap();
/// let v6 = PartType::new("V6", engine, 8_000).unwrap();
///
/// let mut configuration = Configuration::new();
/// configuration.select_part(v8);
/// configuration.select_part(v6.clone());
///
/// assert_eq!(configuration.selected_parts().len(), 1);
/// assert_eq!(configuration.total_price(), 8_000);
/// assert!(configuration.is_complete(&catalog));
/// assert!(configuration.is_valid(&CompatibilityStore::new()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Configuration {
    selections: HashMap<Category, PartType>,
}

impl Configuration {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects a part, replacing whatever its category held.
    ///
    /// Returns the replaced part, if any.
    pub fn select_part(&mut self, part: PartType) -> Option<PartType> {
        debug!(event = "part_selected", part = %part.qualified_name());
        self.selections.insert(part.category().clone(), part)
    }

    /// Clears the selection of one category.
    pub fn unselect_part_type(&mut self, category: &Category) -> Option<PartType> {
        let removed = self.selections.remove(category);
        if removed.is_some() {
            debug!(event = "part_unselected", category = %category);
        }
        removed
    }

    /// Empties all selections.
    pub fn clear(&mut self) {
        self.selections.clear();
        debug!(event = "configuration_cleared");
    }

    /// Snapshot of the selected parts.
    pub fn selected_parts(&self) -> HashSet<PartType> {
        self.selections.values().cloned().collect()
    }

    /// Selected parts in category order.
    pub fn sorted_parts(&self) -> Vec<PartType> {
        let mut parts: Vec<_> = self.selections.values().cloned().collect();
        parts.sort();
        parts
    }

    pub fn selection_for_category(&self, category: &Category) -> Option<&PartType> {
        self.selections.get(category)
    }

    pub fn is_selected(&self, part: &PartType) -> bool {
        self.selections.get(part.category()) == Some(part)
    }

    /// Number of occupied categories.
    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// True when every catalog category holds a selection.
    ///
    /// A category without any part type makes completeness unreachable.
    pub fn is_complete(&self, catalog: &Catalog) -> bool {
        catalog
            .iter_categories()
            .all(|category| self.selections.contains_key(category))
    }

    /// Catalog categories without a selection, in name order.
    pub fn missing_categories(&self, catalog: &Catalog) -> Vec<Category> {
        catalog
            .iter_categories()
            .filter(|category| !self.selections.contains_key(*category))
            .cloned()
            .collect()
    }

    /// Checks the selection against the rules.
    ///
    /// Fails when a selected part is incompatible with another selected part
    /// (itself included), or requires a part that is not selected. The empty
    /// selection is valid.
    pub fn is_valid(&self, checker: &dyn CompatibilityChecker) -> bool {
        let selected = self.selected_parts();

        let conflict_free = selected
            .iter()
            .all(|part| checker.incompatibilities(part).is_disjoint(&selected));
        let valid = conflict_free
            && selected
                .iter()
                .all(|part| checker.requirements(part).is_subset(&selected));

        debug!(event = "validation", valid, selected = selected.len() as u64);
        valid
    }

    /// Every rule the selection breaks, in a stable order.
    ///
    /// Each incompatible pair is reported once. Empty exactly when
    /// [`Configuration::is_valid`] holds.
    pub fn violations(&self, checker: &dyn CompatibilityChecker) -> Vec<Violation> {
        let selected = self.selected_parts();
        let mut violations = BTreeSet::new();

        for part in &selected {
            for other in checker.incompatibilities(part).intersection(&selected) {
                trace!(
                    event = "conflict",
                    part = %part.qualified_name(),
                    with = %other.qualified_name(),
                );
                violations.insert(Violation::conflict(part.clone(), other.clone()));
            }
            for required in checker.requirements(part).difference(&selected) {
                trace!(
                    event = "missing_requirement",
                    part = %part.qualified_name(),
                    required = %required.qualified_name(),
                );
                violations.insert(Violation::MissingRequirement {
                    part: part.clone(),
                    required: required.clone(),
                });
            }
        }

        violations.into_iter().collect()
    }

    /// Sum of the selected prices; not reconciled with validity.
    ///
    /// Saturates at `i64::MAX` instead of overflowing.
    pub fn total_price(&self) -> i64 {
        self.selections
            .values()
            .map(PartType::price)
            .fold(0i64, i64::saturating_add)
    }

    /// Evaluates validity, completeness and price in one pass.
    pub fn status(
        &self,
        catalog: &Catalog,
        checker: &dyn CompatibilityChecker,
    ) -> ConfigurationStatus {
        let violations = self.violations(checker);
        let missing_categories = self.missing_categories(catalog);
        let status = ConfigurationStatus {
            valid: violations.is_empty(),
            complete: missing_categories.is_empty(),
            total_price: self.total_price(),
            violations,
            missing_categories,
        };
        debug!(
            event = "validation",
            valid = status.valid,
            complete = status.complete,
            violation_count = status.violations.len() as u64,
        );
        status
    }
}
