//! Config loader: reads `~/.herald/config.json` and merges env vars.
//!
//! # Loading precedence
//! 1. Defaults (from `Config::default()`)
//! 2. JSON file at `~/.herald/config.json`
//! 3. Environment variables `HERALD_<SECTION>__<FIELD>` (override JSON)

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::schema::Config;
use crate::error::{HeraldError, Result};

/// Default config file path.
pub fn get_config_path() -> PathBuf {
    crate::utils::get_data_path().join("config.json")
}

/// Load configuration from the given path (or the default one) + env vars.
///
/// Falls back to `Config::default()` if the file doesn't exist or can't be parsed.
pub fn load_config(path: Option<&Path>) -> Config {
    let config_path = path.map(PathBuf::from).unwrap_or_else(get_config_path);
    apply_env_overrides(load_config_from_path(&config_path))
}

fn load_config_from_path(path: &Path) -> Config {
    if !path.exists() {
        info!("No config file found at {}, using defaults", path.display());
        return Config::default();
    }

    debug!("Loading config from {}", path.display());

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            warn!("Failed to read config file {}: {}", path.display(), e);
            return Config::default();
        }
    };

    match serde_json::from_str(&content) {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to parse config JSON: {}", e);
            Config::default()
        }
    }
}

/// Save configuration to disk (pretty-printed JSON with camelCase keys).
pub fn save_config(config: &Config, path: Option<&Path>) -> Result<()> {
    let config_path = path.map(PathBuf::from).unwrap_or_else(get_config_path);

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            HeraldError::Config(format!("cannot create {}: {e}", parent.display()))
        })?;
    }

    let json = serde_json::to_string_pretty(config)
        .map_err(|e| HeraldError::Config(e.to_string()))?;

    std::fs::write(&config_path, json).map_err(|e| {
        HeraldError::Config(format!("cannot write {}: {e}", config_path.display()))
    })?;
    debug!("Config saved to {}", config_path.display());
    Ok(())
}

/// Apply environment variable overrides on top of a loaded config.
///
/// Supported overrides:
/// - `HERALD_DISPATCH__DEFAULT_CHANNEL` → `dispatch.default_channel`
/// - `HERALD_FILES__FOLDER` → `files.folder`
/// - `HERALD_FILES__NAMES` → `files.names` (comma-separated)
fn apply_env_overrides(mut config: Config) -> Config {
    if let Ok(val) = std::env::var("HERALD_DISPATCH__DEFAULT_CHANNEL") {
        config.dispatch.default_channel = val;
    }
    if let Ok(val) = std::env::var("HERALD_FILES__FOLDER") {
        config.files.folder = val;
    }
    if let Ok(val) = std::env::var("HERALD_FILES__NAMES") {
        let names: Vec<String> = val
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        if !names.is_empty() {
            config.files.names = names;
        }
    }
    config
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
