//! Faceted Filter Selection
//!
//! A catalog of filter categories is loaded once per search context. The
//! [`FilterEngine`] tracks which options are selected, which categories are
//! expanded and whether the filter panel is shown, and notifies listeners
//! whenever the selection changes.

pub mod domain;
pub use domain::{
    CatalogError, CategoryCatalog, CategoryKey, Config, ExpansionState, FilterCategory,
    FilterOption, IdScope, OptionId, SelectionState,
};

/// The stateful selection engine and its notification contract.
pub mod engine;
pub use engine::{
    ChangeCause, EngineSnapshot, FilterEngine, FilterError, ListenerId, SelectionChange,
    SelectionListener, SelectionQuery,
};
