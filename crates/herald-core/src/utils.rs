//! Utility helpers: data directory and file-name resolution.

use std::path::{Path, PathBuf};

/// Get the Herald data directory (e.g. `~/.herald/`).
pub fn get_data_path() -> PathBuf {
    let home = home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join(".herald")
}

/// Join a file name onto a folder, leaving absolute names untouched.
pub fn resolve_in(folder: &Path, name: &str) -> PathBuf {
    let candidate = Path::new(name);
    if candidate.is_absolute() {
        candidate.to_path_buf()
    } else {
        folder.join(candidate)
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| std::env::var("USERPROFILE").ok().map(PathBuf::from))
}
