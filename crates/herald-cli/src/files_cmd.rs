//! `herald files`: print a list of text files and their total size.

use std::path::PathBuf;

use anyhow::Result;

use herald_core::config::FilesConfig;
use herald_core::files::{read_files, FileEntry};

use crate::helpers::{expand_tilde, print_error};

/// Resolve the folder and file list: CLI arguments win over config.
pub fn resolve_inputs(
    config: &FilesConfig,
    dir: Option<String>,
    files: Vec<String>,
) -> (PathBuf, Vec<String>) {
    let folder = expand_tilde(dir.as_deref().unwrap_or(&config.folder));
    let names = if files.is_empty() {
        config.names.clone()
    } else {
        files
    };
    (folder, names)
}

/// The block printed for one file: header line, then the content.
pub fn render_entry(entry: &FileEntry) -> String {
    format!("Content of {}:\n{}", entry.name, entry.content)
}

/// The closing line printed after every file was read.
pub fn render_total(total_bytes: usize) -> String {
    format!("Total size of all files: {total_bytes} bytes")
}

/// `herald files [--dir DIR] [FILE...]`
///
/// Each file is printed as soon as it is read; a failure stops the run and
/// is reported once.
pub async fn run(config: &FilesConfig, dir: Option<String>, files: Vec<String>) -> Result<()> {
    let (folder, names) = resolve_inputs(config, dir, files);

    let result = read_files(&folder, &names, |entry| {
        println!("{}", render_entry(entry));
    })
    .await;

    match result {
        Ok(report) => {
            println!("{}", render_total(report.total_bytes));
            Ok(())
        }
        Err(e) => {
            print_error("Error reading files:", &e);
            Err(e.into())
        }
    }
}
