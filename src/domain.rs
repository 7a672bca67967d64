//! Domain models for faceted filtering.
//!
//! This module contains the core domain types including validated
//! identifiers, the static category catalog, engine configuration, and the
//! selection and expansion state containers.

/// Category catalog model and loading.
pub mod catalog;
pub use catalog::{CatalogError, CategoryCatalog, FilterCategory, FilterOption};

mod config;
pub use config::{Config, IdScope};

mod expansion;
pub use expansion::ExpansionState;

/// Validated identifier types for categories and options.
pub mod ids;
pub use ids::{CategoryKey, OptionId};

mod selection;
pub use selection::SelectionState;
