//! The filter selection engine.
//!
//! A [`FilterEngine`] owns a validated [`CategoryCatalog`] and the mutable
//! state of one filter session: the selection, the per-category expansion and
//! the panel visibility. All mutation goes through `&mut self`, so an engine
//! has exactly one writer at a time; hosts that share one engine between
//! threads wrap it in a mutex.

use std::path::Path;

use thiserror::Error;

use crate::domain::{
    CatalogError, CategoryCatalog, CategoryKey, Config, ExpansionState, FilterCategory,
    FilterOption, IdScope, OptionId, SelectionState, ids::SCOPE_SEPARATOR,
};

mod notify;
pub use notify::{ChangeCause, ListenerId, SelectionChange, SelectionListener};
use notify::Listeners;

mod snapshot;
pub use snapshot::{EngineSnapshot, SelectionQuery};

/// Errors returned by engine operations.
///
/// A failed operation leaves every part of the engine's state untouched.
#[derive(Debug, Error)]
pub enum FilterError {
    /// The option ID is not in the catalog.
    #[error("unknown filter option '{0}'")]
    UnknownOption(String),

    /// The category key is not in the catalog.
    #[error("unknown filter category '{0}'")]
    UnknownCategory(String),

    /// The catalog could not be loaded or failed validation.
    #[error("invalid catalog: {0}")]
    InvalidCatalog(#[from] CatalogError),
}

/// The selection state of one filter session.
///
/// # Examples
///
/// ```
/// use std::sync::{Arc, Mutex};
///
/// use facets::{
///     CategoryCatalog, CategoryKey, Config, FilterCategory, FilterEngine, FilterOption, IdScope,
///     OptionId,
/// };
///
/// let option = |id: &str| FilterOption::new(OptionId::try_from(id).unwrap(), id);
/// let catalog = CategoryCatalog::new(
///     vec![
///         FilterCategory::new(
///             CategoryKey::try_from("busType").unwrap(),
///             vec![option("ac"), option("nonAc"), option("sleeper")],
///         ),
///         FilterCategory::new(
///             CategoryKey::try_from("amenities").unwrap(),
///             vec![option("wifi"), option("charging")],
///         ),
///     ],
///     IdScope::Global,
/// )
/// .unwrap();
///
/// let mut engine = FilterEngine::new(catalog, &Config::default());
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
/// engine.subscribe(move |change: &facets::SelectionChange| {
///     sink.lock().unwrap().push(change.total_selected);
/// });
///
/// engine.toggle_option("ac", true).unwrap();
/// engine.toggle_option("wifi", true).unwrap();
///
/// assert_eq!(engine.total_selected_count(), 2);
/// assert_eq!(engine.selected_by_category("busType").unwrap().len(), 1);
/// assert_eq!(*seen.lock().unwrap(), [1, 2]);
/// ```
#[derive(Debug)]
pub struct FilterEngine {
    catalog: CategoryCatalog,
    selection: SelectionState,
    expansion: ExpansionState,
    panel_open: bool,
    listeners: Listeners,
}

impl FilterEngine {
    /// Starts a session over a validated catalog.
    ///
    /// The selection starts empty and each category takes its default
    /// expansion.
    #[must_use]
    pub fn new(catalog: CategoryCatalog, config: &Config) -> Self {
        let expansion = ExpansionState::from_catalog(&catalog);
        Self {
            catalog,
            selection: SelectionState::default(),
            expansion,
            panel_open: config.panel_open,
            listeners: Listeners::default(),
        }
    }

    /// Validates the categories and starts a session over them.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidCatalog`] if the categories do not form a
    /// valid catalog. No engine is created in that case.
    pub fn from_categories(
        categories: Vec<FilterCategory>,
        config: &Config,
    ) -> Result<Self, FilterError> {
        let catalog = CategoryCatalog::new(categories, config.id_scope)?;
        Ok(Self::new(catalog, config))
    }

    /// Loads a catalog file and starts a session over it.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidCatalog`] if the file cannot be read or
    /// parsed, or describes an invalid catalog.
    pub fn load(path: &Path, config: &Config) -> Result<Self, FilterError> {
        let catalog = CategoryCatalog::load(path, config.id_scope)?;
        Ok(Self::new(catalog, config))
    }

    /// The catalog this session runs over.
    #[must_use]
    pub const fn catalog(&self) -> &CategoryCatalog {
        &self.catalog
    }

    /// The current selection.
    #[must_use]
    pub const fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// The current per-category expansion.
    #[must_use]
    pub const fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    /// Registers a listener for selection changes.
    pub fn subscribe<L>(&mut self, listener: L) -> ListenerId
    where
        L: SelectionListener + Send + 'static,
    {
        self.listeners.add(Box::new(listener))
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// Sets an option's membership in the selection.
    ///
    /// `selected` is the target membership rather than a flip, so repeating a
    /// call is a no-op. Listeners are notified on success either way.
    ///
    /// Returns `true` if the selection changed.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::UnknownOption`] if no category has this option.
    pub fn toggle_option(&mut self, id: &str, selected: bool) -> Result<bool, FilterError> {
        let option = self
            .catalog
            .option(id)
            .ok_or_else(|| FilterError::UnknownOption(id.to_string()))?
            .id()
            .clone();

        let changed = self.selection.set(&option, selected);
        tracing::debug!(
            "Set option {option} to {} ({})",
            if selected { "selected" } else { "deselected" },
            if changed { "changed" } else { "unchanged" }
        );

        self.notify(ChangeCause::Toggled { option, selected }, changed);
        Ok(changed)
    }

    /// Flips a category between expanded and collapsed, returning the new
    /// state. The selection is untouched and listeners are not notified.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::UnknownCategory`] if the key is not in the
    /// catalog.
    pub fn toggle_section(&mut self, key: &str) -> Result<bool, FilterError> {
        let expanded = self
            .expansion
            .toggle(key)
            .ok_or_else(|| FilterError::UnknownCategory(key.to_string()))?;
        tracing::debug!(
            "Category {key} {}",
            if expanded { "expanded" } else { "collapsed" }
        );
        Ok(expanded)
    }

    /// Empties the selection in one step and notifies listeners, even if it
    /// was already empty.
    ///
    /// Returns the number of options that were deselected.
    pub fn clear_all(&mut self) -> usize {
        let removed = self.selection.take().len();
        tracing::debug!("Cleared {removed} selected options");
        self.notify(ChangeCause::ClearedAll, removed > 0);
        removed
    }

    /// Deselects every option of one category and notifies listeners.
    ///
    /// Returns the number of options that were deselected.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::UnknownCategory`] if the key is not in the
    /// catalog.
    pub fn clear_category(&mut self, key: &str) -> Result<usize, FilterError> {
        let category = self
            .catalog
            .category(key)
            .ok_or_else(|| FilterError::UnknownCategory(key.to_string()))?;
        let category_key = category.key().clone();

        let removed = category
            .options()
            .iter()
            .filter(|option| self.selection.set(option.id(), false))
            .count();

        tracing::debug!("Cleared {removed} selected options in {category_key}");
        self.notify(
            ChangeCause::CategoryCleared {
                category: category_key,
            },
            removed > 0,
        );
        Ok(removed)
    }

    /// Shows or hides the filter panel.
    pub fn set_panel_open(&mut self, open: bool) {
        tracing::debug!("Filter panel {}", if open { "opened" } else { "closed" });
        self.panel_open = open;
    }

    /// Flips the panel visibility, returning the new state.
    pub fn toggle_panel(&mut self) -> bool {
        self.set_panel_open(!self.panel_open);
        self.panel_open
    }

    /// Whether the filter panel is shown.
    #[must_use]
    pub const fn is_panel_open(&self) -> bool {
        self.panel_open
    }

    /// Installs the catalog of a new search context.
    ///
    /// The selection is cleared, the expansion is rebuilt from the new
    /// catalog's defaults, and listeners are notified. Panel visibility and
    /// listeners carry over.
    pub fn replace_catalog(&mut self, catalog: CategoryCatalog) {
        let had_selection = !self.selection.is_empty();

        self.expansion = ExpansionState::from_catalog(&catalog);
        self.catalog = catalog;
        self.selection = SelectionState::default();

        tracing::info!(
            "Replaced catalog ({} categories, {} options)",
            self.catalog.len(),
            self.catalog.option_count()
        );
        self.notify(ChangeCause::CatalogReplaced, had_selection);
    }

    /// The number of selected options.
    #[must_use]
    pub fn total_selected_count(&self) -> usize {
        self.selection.len()
    }

    /// Returns `true` if at least one option is selected.
    #[must_use]
    pub fn has_active_selection(&self) -> bool {
        self.total_selected_count() > 0
    }

    /// The selected options of one category, in display order.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::UnknownCategory`] if the key is not in the
    /// catalog.
    pub fn selected_by_category(&self, key: &str) -> Result<Vec<&OptionId>, FilterError> {
        if !self.catalog.contains_category(key) {
            return Err(FilterError::UnknownCategory(key.to_string()));
        }

        let mut selected: Vec<_> = self
            .selection
            .iter()
            .filter_map(|id| {
                let owner = self.catalog.owner_of(id)?;
                (owner.key().as_str() == key).then(|| (self.catalog.position_of(id), id))
            })
            .collect();
        selected.sort_by_key(|(position, _)| *position);

        Ok(selected.into_iter().map(|(_, id)| id).collect())
    }

    /// Whether a category is expanded.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::UnknownCategory`] if the key is not in the
    /// catalog.
    pub fn is_expanded(&self, key: &str) -> Result<bool, FilterError> {
        self.expansion
            .get(key)
            .ok_or_else(|| FilterError::UnknownCategory(key.to_string()))
    }

    /// The category an option belongs to.
    #[must_use]
    pub fn category_of(&self, id: &str) -> Option<&CategoryKey> {
        self.catalog.owner_of(id).map(FilterCategory::key)
    }

    /// The selected options with their categories, in display order.
    ///
    /// This is the list a sidebar renders as removable filter chips.
    #[must_use]
    pub fn active_filters(&self) -> Vec<(&FilterCategory, &FilterOption)> {
        self.catalog
            .categories()
            .iter()
            .flat_map(|category| {
                category
                    .options()
                    .iter()
                    .filter(|option| self.selection.contains(option.id()))
                    .map(move |option| (category, option))
            })
            .collect()
    }

    /// A copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            selected: self.selection.clone(),
            expanded: self.expansion.clone(),
            panel_open: self.panel_open,
            total_selected: self.selection.len(),
        }
    }

    /// The selection grouped by category, with raw option values.
    #[must_use]
    pub fn selection_query(&self) -> SelectionQuery {
        let mut query = SelectionQuery::default();

        for category in self.catalog.categories() {
            let values = category
                .options()
                .iter()
                .filter(|option| self.selection.contains(option.id()))
                .map(|option| raw_value(option.id(), category.key(), self.catalog.scope()))
                .collect();
            query.insert(category.key().clone(), values);
        }

        query
    }

    fn notify(&mut self, cause: ChangeCause, changed: bool) {
        let change = SelectionChange {
            cause,
            selected: self.selection.iter().cloned().collect(),
            total_selected: self.selection.len(),
            changed,
        };
        self.listeners.emit(&change);
    }
}

fn raw_value(id: &OptionId, category: &CategoryKey, scope: IdScope) -> String {
    let id = id.as_str();
    match scope {
        IdScope::Global => id.to_string(),
        IdScope::Category => id
            .strip_prefix(category.as_str())
            .and_then(|rest| rest.strip_prefix(SCOPE_SEPARATOR))
            .unwrap_or(id)
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::domain::catalog::tests::{bus_catalog, category};

    fn engine() -> FilterEngine {
        FilterEngine::new(bus_catalog(), &Config::default())
    }

    fn ids(selected: &[&OptionId]) -> Vec<String> {
        selected.iter().map(ToString::to_string).collect()
    }

    /// Records every notification the engine emits.
    fn record(engine: &mut FilterEngine) -> Arc<Mutex<Vec<SelectionChange>>> {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        engine.subscribe(move |change: &SelectionChange| {
            sink.lock().unwrap().push(change.clone());
        });
        log
    }

    /// Scenario: `ac` and `wifi` selected.
    fn scenario_a() -> FilterEngine {
        let mut engine = engine();
        engine.toggle_option("ac", true).unwrap();
        engine.toggle_option("wifi", true).unwrap();
        engine
    }

    #[test]
    fn starts_empty() {
        let engine = engine();

        assert_eq!(engine.total_selected_count(), 0);
        assert!(!engine.has_active_selection());
        assert!(engine.selected_by_category("busType").unwrap().is_empty());
        assert!(engine.is_panel_open());
        assert!(engine.is_expanded("busType").unwrap());
        assert!(!engine.is_expanded("amenities").unwrap());
    }

    #[test]
    fn panel_default_follows_config() {
        let config = Config {
            panel_open: false,
            ..Config::default()
        };
        let engine = FilterEngine::new(bus_catalog(), &config);

        assert!(!engine.is_panel_open());
    }

    #[test]
    fn selections_are_grouped_by_category() {
        let engine = scenario_a();

        assert_eq!(engine.total_selected_count(), 2);
        assert!(engine.has_active_selection());
        assert_eq!(ids(&engine.selected_by_category("busType").unwrap()), ["ac"]);
        assert_eq!(ids(&engine.selected_by_category("amenities").unwrap()), ["wifi"]);
    }

    #[test]
    fn toggle_section_leaves_selection_alone() {
        let mut engine = scenario_a();
        let before = engine.selection().clone();

        assert!(!engine.toggle_section("busType").unwrap());
        assert!(!engine.is_expanded("busType").unwrap());
        assert_eq!(engine.selection(), &before);

        // Collapsed categories keep their selections.
        assert_eq!(ids(&engine.selected_by_category("busType").unwrap()), ["ac"]);
    }

    #[test]
    fn engine_is_usable_after_clear_all() {
        let mut engine = scenario_a();

        assert_eq!(engine.clear_all(), 2);
        assert_eq!(engine.total_selected_count(), 0);

        engine.toggle_option("ac", true).unwrap();
        assert_eq!(engine.total_selected_count(), 1);
    }

    #[test]
    fn unknown_option_is_rejected_without_side_effects() {
        let mut engine = scenario_a();
        let log = record(&mut engine);
        let before = engine.snapshot();

        let err = engine
            .toggle_option("nonexistent", true)
            .expect_err("unknown option should be rejected");

        match err {
            FilterError::UnknownOption(id) => assert_eq!(id, "nonexistent"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(engine.snapshot(), before);
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn unknown_category_is_rejected_everywhere() {
        let mut engine = scenario_a();
        let before = engine.snapshot();

        assert!(matches!(
            engine.toggle_section("operators"),
            Err(FilterError::UnknownCategory(_))
        ));
        assert!(matches!(
            engine.selected_by_category("operators"),
            Err(FilterError::UnknownCategory(_))
        ));
        assert!(matches!(
            engine.clear_category("operators"),
            Err(FilterError::UnknownCategory(_))
        ));
        assert!(matches!(
            engine.is_expanded("operators"),
            Err(FilterError::UnknownCategory(_))
        ));
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn select_then_deselect_is_inverse() {
        let mut engine = scenario_a();
        let before = engine.selection().clone();

        assert!(engine.toggle_option("sleeper", true).unwrap());
        assert!(engine.toggle_option("sleeper", false).unwrap());

        assert_eq!(engine.selection(), &before);
    }

    #[test]
    fn repeated_select_is_idempotent() {
        let mut engine = engine();

        assert!(engine.toggle_option("charging", true).unwrap());
        let once = engine.selection().clone();
        assert!(!engine.toggle_option("charging", true).unwrap());

        assert_eq!(engine.selection(), &once);
    }

    #[test]
    fn clear_all_is_idempotent() {
        let mut engine = scenario_a();

        engine.clear_all();
        let once = engine.snapshot();
        assert_eq!(engine.clear_all(), 0);

        assert_eq!(engine.snapshot(), once);
        assert_eq!(engine.total_selected_count(), 0);
    }

    #[test]
    fn category_views_partition_the_selection() {
        let mut engine = engine();
        for id in ["sleeper", "ac", "charging", "wifi", "nonAc"] {
            engine.toggle_option(id, true).unwrap();
        }
        engine.toggle_option("nonAc", false).unwrap();

        let mut union = Vec::new();
        for key in engine.catalog().keys() {
            let selected = engine.selected_by_category(key).unwrap();
            let category = engine.catalog().category(key).unwrap();
            for id in &selected {
                assert!(category.contains(id));
                assert!(engine.selection().contains(id));
            }
            union.extend(ids(&selected));
        }

        union.sort();
        let all: Vec<_> = engine.selection().iter().map(ToString::to_string).collect();
        assert_eq!(union, all);
    }

    #[test]
    fn category_view_uses_display_order() {
        let mut engine = engine();
        engine.toggle_option("sleeper", true).unwrap();
        engine.toggle_option("ac", true).unwrap();
        engine.toggle_option("nonAc", true).unwrap();

        assert_eq!(
            ids(&engine.selected_by_category("busType").unwrap()),
            ["ac", "nonAc", "sleeper"]
        );
    }

    #[test]
    fn notifies_after_every_selection_operation() {
        let mut engine = engine();
        let log = record(&mut engine);

        engine.toggle_option("ac", true).unwrap();
        engine.toggle_option("ac", true).unwrap();
        engine.toggle_section("amenities").unwrap();
        engine.set_panel_open(false);
        engine.clear_all();
        engine.clear_all();

        let log = log.lock().unwrap();
        let causes: Vec<_> = log.iter().map(|change| (&change.cause, change.changed)).collect();
        let ac = OptionId::try_from("ac").unwrap();
        assert_eq!(
            causes,
            [
                (&ChangeCause::Toggled { option: ac.clone(), selected: true }, true),
                (&ChangeCause::Toggled { option: ac, selected: true }, false),
                (&ChangeCause::ClearedAll, true),
                (&ChangeCause::ClearedAll, false),
            ]
        );
        assert_eq!(log[0].total_selected, 1);
        assert_eq!(log[0].selected.len(), 1);
        assert_eq!(log[2].total_selected, 0);
        assert!(log[2].selected.is_empty());
    }

    #[test]
    fn unsubscribed_listener_stops_receiving() {
        let mut engine = engine();
        let calls = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&calls);
        let id = engine.subscribe(move |_: &SelectionChange| {
            *counter.lock().unwrap() += 1;
        });

        engine.toggle_option("wifi", true).unwrap();
        assert!(engine.unsubscribe(id));
        engine.toggle_option("wifi", false).unwrap();

        assert_eq!(*calls.lock().unwrap(), 1);
    }

    #[test]
    fn clear_category_only_touches_that_category() {
        let mut engine = scenario_a();
        engine.toggle_option("sleeper", true).unwrap();
        let log = record(&mut engine);

        assert_eq!(engine.clear_category("busType").unwrap(), 2);

        assert!(engine.selected_by_category("busType").unwrap().is_empty());
        assert_eq!(ids(&engine.selected_by_category("amenities").unwrap()), ["wifi"]);

        let log = log.lock().unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(
            log[0].cause,
            ChangeCause::CategoryCleared {
                category: CategoryKey::try_from("busType").unwrap()
            }
        );
    }

    #[test]
    fn panel_is_independent_of_selection_and_expansion() {
        let mut engine = scenario_a();
        let selection = engine.selection().clone();
        let expansion = engine.expansion().clone();

        engine.set_panel_open(false);
        assert!(!engine.is_panel_open());
        assert!(engine.toggle_panel());

        assert_eq!(engine.selection(), &selection);
        assert_eq!(engine.expansion(), &expansion);
    }

    #[test]
    fn replacing_catalog_resets_session_state() {
        let mut engine = scenario_a();
        engine.set_panel_open(false);
        let log = record(&mut engine);

        let catalog = CategoryCatalog::new(
            vec![
                category("operators", &["redline", "bluebird"]).expanded(true),
                category("departureTime", &["morning"]),
            ],
            IdScope::Global,
        )
        .unwrap();
        engine.replace_catalog(catalog);

        assert_eq!(engine.total_selected_count(), 0);
        let keys: Vec<_> = engine.expansion().iter().map(|(key, _)| key.to_string()).collect();
        assert_eq!(keys, ["departureTime", "operators"]);
        assert!(engine.is_expanded("operators").unwrap());
        assert!(!engine.is_panel_open());
        assert!(matches!(
            engine.toggle_option("ac", true),
            Err(FilterError::UnknownOption(_))
        ));

        let log = log.lock().unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].cause, ChangeCause::CatalogReplaced);
        assert!(log[0].changed);
    }

    #[test]
    fn invalid_categories_create_no_engine() {
        let err = FilterEngine::from_categories(
            vec![category("busType", &["basic"]), category("amenities", &["basic"])],
            &Config::default(),
        )
        .expect_err("colliding IDs should be rejected");

        assert!(matches!(
            err,
            FilterError::InvalidCatalog(CatalogError::DuplicateOption { .. })
        ));
    }

    #[test]
    fn category_scope_accepts_shared_raw_ids() {
        let config = Config {
            id_scope: IdScope::Category,
            ..Config::default()
        };
        let mut engine = FilterEngine::from_categories(
            vec![category("busType", &["basic", "sleeper"]), category("amenities", &["basic"])],
            &config,
        )
        .unwrap();

        engine.toggle_option("busType:basic", true).unwrap();
        assert!(matches!(
            engine.toggle_option("basic", true),
            Err(FilterError::UnknownOption(_))
        ));

        assert_eq!(ids(&engine.selected_by_category("busType").unwrap()), ["busType:basic"]);
        assert!(engine.selected_by_category("amenities").unwrap().is_empty());

        let query = engine.selection_query();
        assert_eq!(query.get("busType"), Some(&["basic".to_string()][..]));
        assert_eq!(query.get("amenities"), None);
    }

    #[test]
    fn active_filters_follow_display_order() {
        let mut engine = engine();
        engine.toggle_option("wifi", true).unwrap();
        engine.toggle_option("sleeper", true).unwrap();
        engine.toggle_option("ac", true).unwrap();

        let chips: Vec<_> = engine
            .active_filters()
            .into_iter()
            .map(|(category, option)| format!("{}/{}", category.key(), option.id()))
            .collect();
        assert_eq!(chips, ["busType/ac", "busType/sleeper", "amenities/wifi"]);
        assert_eq!(engine.category_of("wifi").map(CategoryKey::as_str), Some("amenities"));
    }

    #[test]
    fn selection_query_groups_non_empty_categories() {
        let engine = scenario_a();
        let query = engine.selection_query();

        assert_eq!(query.len(), 2);
        assert_eq!(query.get("busType"), Some(&["ac".to_string()][..]));
        assert_eq!(query.get("amenities"), Some(&["wifi".to_string()][..]));
        assert!(self::engine().selection_query().is_empty());
    }

    #[test]
    fn snapshot_serializes_state() {
        let engine = scenario_a();

        let json = serde_json::to_value(engine.snapshot()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "selected": ["ac", "wifi"],
                "expanded": { "amenities": false, "busType": true },
                "panel_open": true,
                "total_selected": 2,
            })
        );
    }

    #[test]
    fn engine_can_move_between_threads() {
        fn assert_send<T: Send>() {}
        assert_send::<FilterEngine>();
    }
}
