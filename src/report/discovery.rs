//! Playlist export discovery

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// List the playlist exports directly inside `dir`
///
/// Only regular files whose extension matches `extension`
/// (case-insensitively) are returned, sorted by file name.
pub fn discover_playlists(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        bail!("Playlist directory not found: {:?}", dir);
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry =
            entry.with_context(|| format!("Failed to read playlist directory: {:?}", dir))?;

        if !entry.file_type().is_file() {
            continue;
        }

        let matches = entry
            .path()
            .extension()
            .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(extension))
            .unwrap_or(false);

        if matches {
            files.push(entry.into_path());
        } else {
            log::debug!("Ignoring {:?}", entry.path());
        }
    }

    log::info!("Found {} playlist export(s) in {:?}", files.len(), dir);
    Ok(files)
}
