// src/config/env.rs
// Environment-based configuration - every env var the binary reads

use std::path::PathBuf;
use tracing::{Level, debug};

/// Environment configuration
#[derive(Debug, Clone)]
pub struct EnvConfig {
    /// Database file (SHOPKEEP_DB)
    pub db_path: PathBuf,
    /// Seed the demo catalog into an empty database (SHOPKEEP_SEED)
    pub seed: Option<bool>,
}

impl EnvConfig {
    /// Load environment configuration (call once at startup, after dotenvy
    /// and after the tracing subscriber is installed)
    pub fn load() -> Self {
        let db_path = std::env::var("SHOPKEEP_DB")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| super::shopkeep_dir().join("shopkeep.db"));

        let config = Self {
            db_path,
            seed: parse_bool_env("SHOPKEEP_SEED"),
        };
        debug!(db = %config.db_path.display(), seed = ?config.seed, "Environment configuration loaded");
        config
    }

    /// Log level from SHOPKEEP_LOG_LEVEL, falling back to `default` for unset
    /// or unknown values.
    ///
    /// Read on its own so the subscriber can be installed before `load` logs.
    pub fn log_level_or(default: Level) -> Level {
        parse_level(std::env::var("SHOPKEEP_LOG_LEVEL").ok().as_deref(), default)
    }
}

fn parse_level(value: Option<&str>, default: Level) -> Level {
    value
        .and_then(|l| l.trim().parse().ok())
        .unwrap_or(default)
}

/// Parse a boolean environment variable
fn parse_bool_env(name: &str) -> Option<bool> {
    parse_bool(&std::env::var(name).ok()?)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_accepts_common_spellings() {
        for v in ["1", "true", "YES", " on "] {
            assert_eq!(parse_bool(v), Some(true), "{v}");
        }
        for v in ["0", "False", "no", "off"] {
            assert_eq!(parse_bool(v), Some(false), "{v}");
        }
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level(None, Level::WARN), Level::WARN);
        assert_eq!(parse_level(Some("debug"), Level::WARN), Level::DEBUG);
        assert_eq!(parse_level(Some(" TRACE "), Level::WARN), Level::TRACE);
        assert_eq!(parse_level(Some(""), Level::INFO), Level::INFO);
        assert_eq!(parse_level(Some("chatty"), Level::INFO), Level::INFO);
    }
}
