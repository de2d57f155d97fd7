//! Shared CLI helpers: path expansion and error printing.

use std::path::PathBuf;

use colored::Colorize;

/// Expand `~` at the start of a path to the user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs_next::home_dir() {
            return home.join(rest);
        }
    }
    if path == "~" {
        if let Some(home) = dirs_next::home_dir() {
            return home;
        }
    }
    PathBuf::from(path)
}

/// Print an error line to stderr with a red prefix.
pub fn print_error(prefix: &str, err: &dyn std::fmt::Display) {
    eprintln!("{} {err}", prefix.red().bold());
}
