//! Minimal add/remove delta between two displayed point sets

use ahash::AHashSet;
use geo::NamedPoint;

/// The minimal delta turning one displayed set into another.
///
/// Points present in both sets are left untouched; callers that need
/// attribute updates must remove and re-add.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnnotationDiff {
    /// Points in the new set whose id is absent from the old (new-set order)
    pub to_add: Vec<NamedPoint>,
    /// Identifiers in the old set absent from the new (old-set order)
    pub to_remove: Vec<String>,
}

impl AnnotationDiff {
    /// Compute the delta between two sets keyed by point id.
    ///
    /// Output is deterministic: `to_add` follows the insertion order of
    /// `new`, `to_remove` the insertion order of `old`.
    pub fn between(old: &[NamedPoint], new: &[NamedPoint]) -> Self {
        let old_ids: AHashSet<&str> = old.iter().map(|p| p.id.as_str()).collect();
        let new_ids: AHashSet<&str> = new.iter().map(|p| p.id.as_str()).collect();

        let to_add = new
            .iter()
            .filter(|p| !old_ids.contains(p.id.as_str()))
            .cloned()
            .collect();
        let to_remove = old
            .iter()
            .filter(|p| !new_ids.contains(p.id.as_str()))
            .map(|p| p.id.clone())
            .collect();

        Self { to_add, to_remove }
    }

    /// Whether there are no changes
    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }
}
