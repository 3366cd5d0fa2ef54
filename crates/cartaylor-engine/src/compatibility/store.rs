//! In-memory rule graphs.

use std::collections::{HashMap, HashSet};

use cartaylor_config::{CatalogDocument, RuleRecord};
use cartaylor_core::PartType;
use tracing::{debug, info};

use super::{CompatibilityChecker, CompatibilityManager};
use crate::catalog::Catalog;
use crate::error::LoadResult;

type Relation = HashMap<PartType, HashSet<PartType>>;

/// Owned storage for incompatibility and requirement edges.
///
/// A part with no remaining edge has no entry, so adding then removing a
/// rule restores the exact previous state.
///
/// # Example
///
/// ```
/// use cartaylor_core::{Category, PartType};
/// use cartaylor_engine::{CompatibilityChecker, CompatibilityManager, CompatibilityStore};
///
/// let engine = Category::new("Engine").unwrap();
/// let gearbox = Category::new("Transmission").unwrap();
/// let v8 = PartType::new("V8", engine, 10_000).unwrap();
/// let manual = PartType::new("Manual", gearbox, 0).unwrap();
///
/// let mut store = CompatibilityStore::new();
/// store.add_incompatibilities(&v8, &[manual.clone()]);
/// assert!(store.incompatibilities(&manual).contains(&v8));
///
/// store.add_requirements(&manual, &[v8.clone()]);
/// assert!(store.requirements(&v8).is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CompatibilityStore {
    incompatibilities: Relation,
    requirements: Relation,
}

impl CompatibilityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies the rule records of a document.
    ///
    /// References are resolved through the catalog; every reference is
    /// resolved before the first edge is inserted.
    pub fn load_rules(
        &mut self,
        catalog: &Catalog,
        document: &CatalogDocument,
    ) -> LoadResult<()> {
        let resolve = |records: &[RuleRecord]| {
            records
                .iter()
                .map(|record| -> LoadResult<(PartType, Vec<PartType>)> {
                    let part = catalog.resolve_part(&record.part)?;
                    let targets = record
                        .targets
                        .iter()
                        .map(|target| catalog.resolve_part(target))
                        .collect::<LoadResult<Vec<_>>>()?;
                    Ok((part, targets))
                })
                .collect::<LoadResult<Vec<_>>>()
        };
        let incompatibilities = resolve(&document.incompatibilities)?;
        let requirements = resolve(&document.requirements)?;

        for (part, targets) in &incompatibilities {
            self.add_incompatibilities(part, targets);
        }
        for (part, targets) in &requirements {
            self.add_requirements(part, targets);
        }

        info!(
            event = "rules_loaded",
            incompatibility_rules = incompatibilities.len() as u64,
            requirement_rules = requirements.len() as u64,
        );
        Ok(())
    }

    /// Drops every rule.
    pub fn clear(&mut self) {
        self.incompatibilities.clear();
        self.requirements.clear();
    }

    /// True when no rule of either kind is recorded.
    pub fn is_empty(&self) -> bool {
        self.incompatibilities.is_empty() && self.requirements.is_empty()
    }

    /// Number of unordered incompatible pairs.
    pub fn incompatibility_count(&self) -> usize {
        let mut directed = 0;
        let mut reflexive = 0;
        for (part, targets) in &self.incompatibilities {
            directed += targets.len();
            if targets.contains(part) {
                reflexive += 1;
            }
        }
        (directed - reflexive) / 2 + reflexive
    }

    /// Number of directed requirement edges.
    pub fn requirement_count(&self) -> usize {
        self.requirements.values().map(HashSet::len).sum()
    }
}

fn link(relation: &mut Relation, from: &PartType, to: &PartType) {
    relation.entry(from.clone()).or_default().insert(to.clone());
}

fn unlink(relation: &mut Relation, from: &PartType, to: &PartType) {
    if let Some(targets) = relation.get_mut(from) {
        targets.remove(to);
        if targets.is_empty() {
            relation.remove(from);
        }
    }
}

impl CompatibilityChecker for CompatibilityStore {
    fn incompatibilities(&self, reference: &PartType) -> HashSet<PartType> {
        self.incompatibilities
            .get(reference)
            .cloned()
            .unwrap_or_default()
    }

    fn requirements(&self, reference: &PartType) -> HashSet<PartType> {
        self.requirements.get(reference).cloned().unwrap_or_default()
    }

    fn is_incompatible(&self, reference: &PartType, target: &PartType) -> bool {
        self.incompatibilities
            .get(reference)
            .is_some_and(|targets| targets.contains(target))
    }

    fn is_required_by(&self, required: &PartType, reference: &PartType) -> bool {
        self.requirements
            .get(reference)
            .is_some_and(|targets| targets.contains(required))
    }
}

impl CompatibilityManager for CompatibilityStore {
    fn add_incompatibilities(&mut self, reference: &PartType, targets: &[PartType]) {
        for target in targets {
            link(&mut self.incompatibilities, reference, target);
            link(&mut self.incompatibilities, target, reference);
            debug!(
                event = "incompatibility_added",
                part = %reference.qualified_name(),
                target = %target.qualified_name(),
            );
        }
    }

    fn remove_incompatibility(&mut self, reference: &PartType, target: &PartType) {
        unlink(&mut self.incompatibilities, reference, target);
        unlink(&mut self.incompatibilities, target, reference);
        debug!(
            event = "incompatibility_removed",
            part = %reference.qualified_name(),
            target = %target.qualified_name(),
        );
    }

    fn add_requirements(&mut self, reference: &PartType, targets: &[PartType]) {
        for target in targets {
            link(&mut self.requirements, reference, target);
            debug!(
                event = "requirement_added",
                part = %reference.qualified_name(),
                target = %target.qualified_name(),
            );
        }
    }

    fn remove_requirement(&mut self, reference: &PartType, target: &PartType) {
        unlink(&mut self.requirements, reference, target);
        debug!(
            event = "requirement_removed",
            part = %reference.qualified_name(),
            target = %target.qualified_name(),
        );
    }
}
