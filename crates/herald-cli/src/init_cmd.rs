//! `herald init`: write a config file with default values.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;

use herald_core::config::{get_config_path, save_config, Config};

/// Write the default config to `path` (or `~/.herald/config.json`).
///
/// An existing file is left alone unless `force` is set.
pub fn run(path: Option<&Path>, force: bool) -> Result<()> {
    let config_path = path.map(PathBuf::from).unwrap_or_else(get_config_path);

    if config_path.exists() && !force {
        println!(
            "  {} config already exists at {} (use --force to overwrite)",
            "✓".green(),
            config_path.display()
        );
        return Ok(());
    }

    save_config(&Config::default(), Some(&config_path))
        .with_context(|| format!("failed to write {}", config_path.display()))?;
    println!(
        "  {} created config at {}",
        "✓".green(),
        config_path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use herald_core::config::load_config;

    #[test]
    fn test_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("herald").join("config.json");

        run(Some(&path), false).unwrap();
        assert!(path.exists());

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["files"]["names"][0], "a.txt");
    }

    #[test]
    fn test_keeps_existing_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"files": {"folder": "/keep"}}"#).unwrap();

        run(Some(&path), false).unwrap();
        assert_eq!(load_config(Some(&path)).files.folder, "/keep");

        run(Some(&path), true).unwrap();
        assert_eq!(load_config(Some(&path)).files.folder, ".");
    }
}
