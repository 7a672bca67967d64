use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{CategoryCatalog, CategoryKey};

/// Which categories are expanded in the filter panel.
///
/// The key set always equals the key set of the catalog it was built from.
/// Expansion is independent of the selection: collapsing a category keeps its
/// options selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpansionState {
    expanded: BTreeMap<CategoryKey, bool>,
}

impl ExpansionState {
    /// Initializes the expansion from each category's default.
    #[must_use]
    pub fn from_catalog(catalog: &CategoryCatalog) -> Self {
        let expanded = catalog
            .categories()
            .iter()
            .map(|category| (category.key().clone(), category.expanded_by_default()))
            .collect();
        Self { expanded }
    }

    /// Flips a category, returning its new state, or `None` if the key is
    /// unknown.
    pub fn toggle(&mut self, key: &str) -> Option<bool> {
        let expanded = self.expanded.get_mut(key)?;
        *expanded = !*expanded;
        Some(*expanded)
    }

    /// Whether a category is expanded, or `None` if the key is unknown.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<bool> {
        self.expanded.get(key).copied()
    }

    /// The keys of all expanded categories.
    pub fn expanded_keys(&self) -> impl Iterator<Item = &CategoryKey> + '_ {
        self.expanded
            .iter()
            .filter_map(|(key, &expanded)| expanded.then_some(key))
    }

    /// Every tracked category with its state.
    pub fn iter(&self) -> impl Iterator<Item = (&CategoryKey, bool)> + '_ {
        self.expanded.iter().map(|(key, &expanded)| (key, expanded))
    }

    /// The number of tracked categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    /// Returns `true` if no categories are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}
