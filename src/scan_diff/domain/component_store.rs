use super::Component;
use std::collections::{BTreeMap, BTreeSet};

/// Ordered, deduplicated collection of components for one scan document.
///
/// Components are keyed by canonical name; adding a name that already exists
/// merges its vulnerability identifiers into the existing entry. Both levels
/// are kept in ascending lexical order by the underlying B-trees.
#[derive(Debug, Default, Clone)]
pub struct ComponentStore {
    entries: BTreeMap<String, BTreeSet<String>>,
}

impl ComponentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a component and merges the given identifiers into its set.
    ///
    /// Empty identifiers are skipped. The component is recorded even when no
    /// identifier survives, matching scanners that list affected packages
    /// without CVE ids.
    pub fn add<I, S>(&mut self, name: impl Into<String>, vulnerability_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entry = self.entries.entry(name.into()).or_default();
        for id in vulnerability_ids {
            let id = id.into();
            if !id.is_empty() {
                entry.insert(id);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Materializes the store as a name-sorted component list
    pub fn into_components(self) -> Vec<Component> {
        self.entries
            .into_iter()
            .map(|(name, ids)| Component::new(name, ids))
            .collect()
    }
}
