//! The static catalog of filter categories and their options.
//!
//! A [`CategoryCatalog`] is supplied once per search context. It is validated
//! as a whole when it is built: either every category and option is accepted,
//! or nothing is.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{CategoryKey, IdScope, OptionId};

/// A single selectable value within a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    id: OptionId,
    label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    count: Option<u64>,
}

impl FilterOption {
    /// Creates an option with no result count.
    #[must_use]
    pub fn new(id: OptionId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            count: None,
        }
    }

    /// Sets the informational result count shown next to the option.
    #[must_use]
    pub const fn with_count(mut self, count: u64) -> Self {
        self.count = Some(count);
        self
    }

    /// The option ID, as used in the engine's selection set.
    #[must_use]
    pub const fn id(&self) -> &OptionId {
        &self.id
    }

    /// The display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The number of results this option matches, if known.
    #[must_use]
    pub const fn count(&self) -> Option<u64> {
        self.count
    }
}

/// A named group of related options, e.g. bus type or amenities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCategory {
    key: CategoryKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(default)]
    options: Vec<FilterOption>,
    #[serde(default)]
    expanded: bool,
}

impl FilterCategory {
    /// Creates a collapsed category with the given options, in display order.
    #[must_use]
    pub const fn new(key: CategoryKey, options: Vec<FilterOption>) -> Self {
        Self {
            key,
            label: None,
            options,
            expanded: false,
        }
    }

    /// Sets whether the category starts out expanded.
    #[must_use]
    pub const fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    /// Sets the display heading. Defaults to the key.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// The category key.
    #[must_use]
    pub const fn key(&self) -> &CategoryKey {
        &self.key
    }

    /// The display heading, falling back to the key.
    #[must_use]
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or_else(|| self.key.as_str())
    }

    /// The options in display order.
    #[must_use]
    pub fn options(&self) -> &[FilterOption] {
        &self.options
    }

    /// Whether the category is expanded when a session starts.
    #[must_use]
    pub const fn expanded_by_default(&self) -> bool {
        self.expanded
    }

    /// Returns `true` if the option belongs to this category.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.options.iter().any(|option| option.id.as_str() == id)
    }
}

/// Errors that can occur when building or loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two categories share a key.
    #[error("duplicate category key '{0}'")]
    DuplicateCategory(CategoryKey),

    /// An option ID occurs more than once in the flat ID space.
    #[error("option '{option}' is defined in both '{first}' and '{second}'")]
    DuplicateOption {
        /// The colliding option ID.
        option: OptionId,
        /// The category that defined the ID first.
        first: CategoryKey,
        /// The category that defined it again.
        second: CategoryKey,
    },

    /// The catalog file could not be read.
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        /// Path of the catalog file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The catalog file is malformed.
    #[error("failed to parse catalog file {path}: {message}")]
    Parse {
        /// Path of the catalog file.
        path: PathBuf,
        /// Deserializer message.
        message: String,
    },
}

/// On-disk catalog formats, picked by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// TOML (the default).
    Toml,
    /// YAML (`.yaml`, `.yml`).
    Yaml,
    /// JSON (`.json`).
    Json,
}

impl Format {
    /// Infers the format from a path's extension, defaulting to TOML.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Self::Yaml,
            Some("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

/// The full, validated set of filter categories for one search context.
///
/// Besides the ordered categories, the catalog holds a reverse index from
/// every option ID to its position, built once during validation.
///
/// # Examples
///
/// ```
/// use facets::{CategoryCatalog, CategoryKey, FilterCategory, FilterOption, IdScope, OptionId};
///
/// let option = |id: &str| FilterOption::new(OptionId::try_from(id).unwrap(), id);
/// let key = |k: &str| CategoryKey::try_from(k).unwrap();
///
/// let catalog = CategoryCatalog::new(
///     vec![
///         FilterCategory::new(key("busType"), vec![option("basic"), option("sleeper")]),
///         FilterCategory::new(key("amenities"), vec![option("basic")]),
///     ],
///     IdScope::Category,
/// )
/// .unwrap();
///
/// assert_eq!(catalog.owner_of("amenities:basic").unwrap().key().as_str(), "amenities");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCatalog {
    categories: Vec<FilterCategory>,
    scope: IdScope,

    /// Category key to position in `categories`.
    positions: HashMap<CategoryKey, usize>,

    /// Option ID to (category position, option position).
    owners: HashMap<OptionId, (usize, usize)>,
}

impl CategoryCatalog {
    /// Validates the categories and builds the catalog.
    ///
    /// With [`IdScope::Category`], every option ID is rewritten as
    /// `category:option` before uniqueness is checked.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateCategory`] if two categories share a
    /// key, and [`CatalogError::DuplicateOption`] if an option ID occurs
    /// twice in the (scoped) ID space.
    pub fn new(mut categories: Vec<FilterCategory>, scope: IdScope) -> Result<Self, CatalogError> {
        if scope == IdScope::Category {
            for category in &mut categories {
                for option in &mut category.options {
                    option.id = option.id.scoped(&category.key);
                }
            }
        }

        let mut positions = HashMap::with_capacity(categories.len());
        let mut owners: HashMap<OptionId, (usize, usize)> = HashMap::new();

        for (category_index, category) in categories.iter().enumerate() {
            if positions.insert(category.key.clone(), category_index).is_some() {
                return Err(CatalogError::DuplicateCategory(category.key.clone()));
            }

            for (option_index, option) in category.options.iter().enumerate() {
                if let Some((first, _)) =
                    owners.insert(option.id.clone(), (category_index, option_index))
                {
                    return Err(CatalogError::DuplicateOption {
                        option: option.id.clone(),
                        first: categories[first].key.clone(),
                        second: category.key.clone(),
                    });
                }
            }
        }

        tracing::debug!(
            "Validated catalog with {} categories and {} options",
            categories.len(),
            owners.len()
        );

        Ok(Self {
            categories,
            scope,
            positions,
            owners,
        })
    }

    /// Loads a catalog file, choosing the format from its extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// catalog it describes is invalid.
    pub fn load(path: &Path, scope: IdScope) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::parse(&content, Format::from_path(path), scope).map_err(|e| match e {
            CatalogError::Parse { message, .. } => CatalogError::Parse {
                path: path.to_path_buf(),
                message,
            },
            other => other,
        })?;

        tracing::info!(
            "Loaded catalog from {} ({} categories)",
            path.display(),
            catalog.len()
        );
        Ok(catalog)
    }

    /// Parses catalog text in the given format.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] (with an empty path) if the text is
    /// malformed, or a validation error if the catalog is invalid.
    pub fn parse(content: &str, format: Format, scope: IdScope) -> Result<Self, CatalogError> {
        let parse_error = |message: String| CatalogError::Parse {
            path: PathBuf::new(),
            message,
        };

        let file: Versions = match format {
            Format::Toml => toml::from_str(content).map_err(|e| parse_error(e.to_string()))?,
            Format::Yaml => serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))?,
            Format::Json => serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?,
        };

        let Versions::V1 { categories } = file;
        Self::new(categories, scope)
    }

    /// The categories in display order.
    #[must_use]
    pub fn categories(&self) -> &[FilterCategory] {
        &self.categories
    }

    /// Looks up a category by key.
    #[must_use]
    pub fn category(&self, key: &str) -> Option<&FilterCategory> {
        self.positions.get(key).map(|&index| &self.categories[index])
    }

    /// Returns `true` if a category with this key exists.
    #[must_use]
    pub fn contains_category(&self, key: &str) -> bool {
        self.positions.contains_key(key)
    }

    /// Returns `true` if an option with this ID exists in any category.
    #[must_use]
    pub fn contains_option(&self, id: &str) -> bool {
        self.owners.contains_key(id)
    }

    /// The category an option belongs to.
    #[must_use]
    pub fn owner_of(&self, id: &str) -> Option<&FilterCategory> {
        self.owners
            .get(id)
            .map(|&(category, _)| &self.categories[category])
    }

    /// Looks up an option by ID.
    #[must_use]
    pub fn option(&self, id: &str) -> Option<&FilterOption> {
        self.owners
            .get(id)
            .map(|&(category, option)| &self.categories[category].options[option])
    }

    /// The display position of an option, as (category index, option index).
    #[must_use]
    pub fn position_of(&self, id: &str) -> Option<(usize, usize)> {
        self.owners.get(id).copied()
    }

    /// The category keys in display order.
    pub fn keys(&self) -> impl Iterator<Item = &CategoryKey> + '_ {
        self.categories.iter().map(FilterCategory::key)
    }

    /// The ID scoping the catalog was built with.
    #[must_use]
    pub const fn scope(&self) -> IdScope {
        self.scope
    }

    /// The number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Returns `true` if the catalog has no categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// The total number of options across all categories.
    #[must_use]
    pub fn option_count(&self) -> usize {
        self.owners.len()
    }
}

/// The serialized versions of a catalog file.
#[derive(Debug, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default)]
        categories: Vec<FilterCategory>,
    },
}
