use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{CategoryKey, ExpansionState, SelectionState};

/// A point-in-time copy of an engine's state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    /// The selected option IDs.
    pub selected: SelectionState,
    /// Per-category expansion.
    pub expanded: ExpansionState,
    /// Whether the filter panel is shown.
    pub panel_open: bool,
    /// The number of selected options.
    pub total_selected: usize,
}

/// The selection grouped by category, for a query layer to turn into filter
/// clauses.
///
/// Only categories with at least one selected option appear. Values are raw
/// option IDs in display order; category-scoped IDs have their category
/// prefix removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionQuery {
    groups: BTreeMap<CategoryKey, Vec<String>>,
}

impl SelectionQuery {
    pub(crate) fn insert(&mut self, category: CategoryKey, values: Vec<String>) {
        if !values.is_empty() {
            self.groups.insert(category, values);
        }
    }

    /// The selected values of one category, if any are selected.
    #[must_use]
    pub fn get(&self, category: &str) -> Option<&[String]> {
        self.groups.get(category).map(Vec::as_slice)
    }

    /// Every non-empty group, ordered by category key.
    pub fn iter(&self) -> impl Iterator<Item = (&CategoryKey, &[String])> + '_ {
        self.groups
            .iter()
            .map(|(category, values)| (category, values.as_slice()))
    }

    /// The number of categories with an active selection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
