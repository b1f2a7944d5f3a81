// src/config/mod.rs
// Configuration: environment variables and the optional config file

pub mod env;
pub mod file;

pub use env::EnvConfig;
pub use file::{CatalogConfig, ShopkeepConfig};

use std::path::PathBuf;

/// Directory holding the database, `.env` and `config.toml`
pub fn shopkeep_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".shopkeep")
}
