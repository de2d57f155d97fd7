//! Configuration schema.
//!
//! JSON on disk uses **camelCase** keys; Rust uses snake_case.
//! Every struct is `#[serde(default)]`, so partial files are fine.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────
// Root Config
// ─────────────────────────────────────────────

/// Root configuration: loaded from `~/.herald/config.json` + env vars.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub dispatch: DispatchConfig,
    pub files: FilesConfig,
}

// ─────────────────────────────────────────────
// Dispatch
// ─────────────────────────────────────────────

/// Notification dispatch settings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DispatchConfig {
    /// Channel type used by `herald send` when `--channel` is omitted.
    pub default_channel: String,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            default_channel: "email".to_string(),
        }
    }
}

// ─────────────────────────────────────────────
// Files
// ─────────────────────────────────────────────

/// Settings for the file-size reader.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct FilesConfig {
    /// Folder the names are resolved against (`~` is expanded).
    pub folder: String,
    /// File names, read in this order.
    pub names: Vec<String>,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            folder: ".".to_string(),
            names: vec!["a.txt".into(), "b.txt".into(), "c.txt".into()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.dispatch.default_channel, "email");
        assert_eq!(config.files.folder, ".");
        assert_eq!(config.files.names, vec!["a.txt", "b.txt", "c.txt"]);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{"files": {"names": ["x.txt"]}}"#).unwrap();
        assert_eq!(config.files.names, vec!["x.txt"]);
        assert_eq!(config.files.folder, ".");
        assert_eq!(config.dispatch.default_channel, "email");
    }

    #[test]
    fn test_camel_case_keys() {
        let raw = serde_json::to_value(Config::default()).unwrap();
        assert!(raw["dispatch"].get("defaultChannel").is_some());
        assert!(raw["dispatch"].get("default_channel").is_none());
    }
}
