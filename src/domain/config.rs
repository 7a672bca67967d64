use std::path::Path;

use serde::{Deserialize, Serialize};

/// Configuration for a filter engine.
///
/// This struct holds settings that control how a catalog's option IDs are
/// mapped into the engine's flat selection space and how the filter panel
/// starts out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// How option IDs are scoped when a catalog is loaded.
    pub id_scope: IdScope,

    /// Whether the filter panel is shown when an engine is created.
    pub panel_open: bool,
}

/// How option IDs enter the engine's flat ID space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum IdScope {
    /// Option IDs are used verbatim and must be unique across the whole
    /// catalog.
    #[default]
    Global,

    /// Option IDs are prefixed with their category key (`busType:ac`), so
    /// different categories may reuse the same raw ID.
    Category,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            id_scope: IdScope::default(),
            panel_open: default_panel_open(),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }
}

const fn default_panel_open() -> bool {
    true
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default)]
        id_scope: IdScope,

        #[serde(default = "default_panel_open")]
        panel_open: bool,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                id_scope,
                panel_open,
            } => Self {
                id_scope,
                panel_open,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            id_scope: config.id_scope,
            panel_open: config.panel_open,
        }
    }
}
