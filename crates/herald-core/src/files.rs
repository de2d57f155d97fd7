//! File-size reader: reads a fixed list of text files one at a time and
//! totals their UTF-8 byte length.
//!
//! Reads are strictly sequential: each file is awaited before the next one
//! starts, and the first failure aborts the rest.

use std::path::Path;

use tracing::debug;

use crate::error::{HeraldError, Result};
use crate::utils::resolve_in;

/// One file that was read successfully.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileEntry {
    /// Name as given in the input list.
    pub name: String,
    pub content: String,
    /// UTF-8 byte length of `content`.
    pub bytes: usize,
}

/// Result of reading the whole list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileReport {
    /// Entries in input order.
    pub entries: Vec<FileEntry>,
    pub total_bytes: usize,
}

/// Read `files` (resolved against `folder`) in order and sum their sizes.
///
/// `on_entry` runs as soon as each file is read, so entries before a
/// failing file are still seen.
pub async fn read_files<F>(
    folder: &Path,
    files: &[String],
    mut on_entry: F,
) -> Result<FileReport>
where
    F: FnMut(&FileEntry),
{
    let mut report = FileReport::default();

    for name in files {
        let path = resolve_in(folder, name);
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| HeraldError::ReadFile {
                path: path.clone(),
                source,
            })?;

        let bytes = content.len();
        debug!(file = %path.display(), bytes, "read file");
        let entry = FileEntry {
            name: name.clone(),
            content,
            bytes,
        };
        on_entry(&entry);
        report.total_bytes += bytes;
        report.entries.push(entry);
    }

    Ok(report)
}
