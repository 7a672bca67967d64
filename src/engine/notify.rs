//! Selection-change notification.
//!
//! After every successful selection operation the engine sends a
//! [`SelectionChange`] to each registered [`SelectionListener`], in
//! registration order, before the operation returns.

use std::fmt;

use serde::Serialize;

use crate::domain::{CategoryKey, OptionId};

/// What caused a selection notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChangeCause {
    /// A single option was set to the given membership.
    Toggled {
        /// The option that was toggled.
        option: OptionId,
        /// The requested membership.
        selected: bool,
    },
    /// Every option of one category was deselected.
    CategoryCleared {
        /// The category that was cleared.
        category: CategoryKey,
    },
    /// The whole selection was cleared.
    ClearedAll,
    /// A new catalog was installed, which clears the selection.
    CatalogReplaced,
}

/// The event delivered to listeners after a selection operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionChange {
    /// The operation that produced this event.
    pub cause: ChangeCause,
    /// Every selected option ID after the operation, in lexical order.
    pub selected: Vec<OptionId>,
    /// The number of selected options after the operation.
    pub total_selected: usize,
    /// Whether the operation actually altered the selection.
    ///
    /// Operations notify even when they are no-ops; listeners that only care
    /// about real changes can skip events where this is `false`.
    pub changed: bool,
}

/// A consumer of selection changes, typically a listing component that
/// re-queries its results.
///
/// Any `FnMut(&SelectionChange)` closure is a listener.
pub trait SelectionListener {
    /// Called once per selection operation.
    fn on_selection_change(&mut self, change: &SelectionChange);
}

impl<F> SelectionListener for F
where
    F: FnMut(&SelectionChange),
{
    fn on_selection_change(&mut self, change: &SelectionChange) {
        self(change);
    }
}

/// Handle returned by [`FilterEngine::subscribe`](crate::FilterEngine::subscribe),
/// used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

/// The registered listeners of an engine.
#[derive(Default)]
pub struct Listeners {
    next_id: u64,
    entries: Vec<(ListenerId, Box<dyn SelectionListener + Send>)>,
}

impl Listeners {
    pub fn add(&mut self, listener: Box<dyn SelectionListener + Send>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub fn emit(&mut self, change: &SelectionChange) {
        for (_, listener) in &mut self.entries {
            listener.on_selection_change(change);
        }
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    fn change(changed: bool) -> SelectionChange {
        SelectionChange {
            cause: ChangeCause::ClearedAll,
            selected: Vec::new(),
            total_selected: 0,
            changed,
        }
    }

    #[test]
    fn emits_in_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut listeners = Listeners::default();

        for name in ["first", "second"] {
            let log = Arc::clone(&log);
            listeners.add(Box::new(move |_: &SelectionChange| {
                log.lock().unwrap().push(name);
            }));
        }

        listeners.emit(&change(true));

        assert_eq!(*log.lock().unwrap(), ["first", "second"]);
    }

    #[test]
    fn removed_listener_is_not_called() {
        let calls = Arc::new(Mutex::new(0));
        let mut listeners = Listeners::default();

        let counter = Arc::clone(&calls);
        let id = listeners.add(Box::new(move |_: &SelectionChange| {
            *counter.lock().unwrap() += 1;
        }));

        assert!(listeners.remove(id));
        assert!(!listeners.remove(id));
        listeners.emit(&change(false));

        assert_eq!(*calls.lock().unwrap(), 0);
        assert!(listeners.entries.is_empty());
    }

    #[test]
    fn cause_serializes_with_kind_tag() {
        let cause = ChangeCause::Toggled {
            option: OptionId::try_from("ac").unwrap(),
            selected: true,
        };

        let json = serde_json::to_value(&cause).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "kind": "toggled", "option": "ac", "selected": true })
        );
    }
}
