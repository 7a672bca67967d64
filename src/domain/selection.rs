use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::OptionId;

/// The set of currently selected option IDs, across all categories.
///
/// Selecting an already-selected ID and deselecting an absent ID are both
/// no-ops. The set knows nothing about categories; the engine resolves
/// ownership through the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionState {
    selected: BTreeSet<OptionId>,
}

impl SelectionState {
    /// Sets the membership of an option.
    ///
    /// Returns `true` if the membership changed.
    pub fn set(&mut self, id: &OptionId, selected: bool) -> bool {
        if selected {
            if self.selected.contains(id) {
                false
            } else {
                self.selected.insert(id.clone())
            }
        } else {
            self.selected.remove(id.as_str())
        }
    }

    /// Empties the set, returning the previous contents.
    #[must_use]
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Returns `true` if the option is selected.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// The number of selected options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// The selected IDs, in lexical order.
    pub fn iter(&self) -> impl Iterator<Item = &OptionId> + '_ {
        self.selected.iter()
    }
}

impl<'a> IntoIterator for &'a SelectionState {
    type Item = &'a OptionId;
    type IntoIter = std::collections::btree_set::Iter<'a, OptionId>;

    fn into_iter(self) -> Self::IntoIter {
        self.selected.iter()
    }
}
