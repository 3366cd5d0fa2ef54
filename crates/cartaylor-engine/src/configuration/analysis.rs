//! Explanations of why a configuration is invalid or incomplete.

use std::fmt;

use cartaylor_core::{Category, PartType};

/// A broken compatibility rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Violation {
    /// Two selected parts cannot coexist. `part <= with`.
    Conflict { part: PartType, with: PartType },

    /// A selected part needs a part that is not selected.
    MissingRequirement { part: PartType, required: PartType },
}

impl Violation {
    /// Builds a conflict with its two parts in canonical order.
    pub fn conflict(a: PartType, b: PartType) -> Self {
        if a <= b {
            Self::Conflict { part: a, with: b }
        } else {
            Self::Conflict { part: b, with: a }
        }
    }

    /// The selected part the violation is attributed to.
    pub fn part(&self) -> &PartType {
        match self {
            Self::Conflict { part, .. } | Self::MissingRequirement { part, .. } => part,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Conflict { part, with } => write!(
                f,
                "{} is incompatible with {}",
                part.qualified_name(),
                with.qualified_name()
            ),
            Self::MissingRequirement { part, required } => write!(
                f,
                "{} requires {}",
                part.qualified_name(),
                required.qualified_name()
            ),
        }
    }
}

/// Snapshot of a configuration's evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationStatus {
    pub valid: bool,
    pub complete: bool,
    pub total_price: i64,
    pub violations: Vec<Violation>,
    pub missing_categories: Vec<Category>,
}

impl ConfigurationStatus {
    /// Valid and complete: the price can be trusted as final.
    pub fn is_final(&self) -> bool {
        self.valid && self.complete
    }
}
