// src/config/file.rs
// File-based configuration from ~/.shopkeep/config.toml

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Categories recognized by "list ... <category>" when no config file says otherwise
pub const DEFAULT_CATEGORIES: &[&str] = &["Electronics", "Accessories", "Furniture"];

/// Top-level config structure
#[derive(Debug, Deserialize, Default, Clone)]
pub struct ShopkeepConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Catalog section
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Category names the list command picks out of free text
    #[serde(default = "default_categories")]
    pub known_categories: Vec<String>,
    /// Seed the demo catalog (used when SHOPKEEP_SEED is unset)
    pub seed: Option<bool>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            known_categories: default_categories(),
            seed: None,
        }
    }
}

fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

impl ShopkeepConfig {
    /// Load config from ~/.shopkeep/config.toml
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load config from an explicit path; missing or malformed files yield defaults
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    debug!(path = %path.display(), "Loaded config from file");
                    config
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Failed to parse config file");
                    Self::default()
                }
            },
            Err(_) => {
                debug!(path = %path.display(), "Config file not found, using defaults");
                Self::default()
            }
        }
    }

    fn config_path() -> PathBuf {
        super::shopkeep_dir().join("config.toml")
    }
}
