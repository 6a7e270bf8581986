//! iTunes plist playlist export parsing
//!
//! Exports are read line by line rather than as XML: each line is
//! classified on its own and the track list is rebuilt from the order of
//! the classified entries.

mod classify;
mod reconcile;

pub use classify::{
    classify, ClassifiedEntry, EntryKind, ARTIST_MARKER, NAME_MARKER, TRACK_ID_MARKER,
};
pub use reconcile::reconcile;

use crate::model::Playlist;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read one playlist export from disk and reconcile its tracks
///
/// Read failures (missing file, invalid UTF-8) and malformed playlists are
/// both returned as errors carrying the file path.
pub fn parse_playlist_file(path: &Path) -> Result<Playlist> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read playlist export: {:?}", path))?;

    let playlist = reconcile(contents.lines())
        .with_context(|| format!("Failed to reconcile tracks in {:?}", path))?;

    log::debug!(
        "Parsed '{}' from {:?}: {} tracks ({} unknown)",
        playlist.name,
        path,
        playlist.len(),
        playlist.unknown_count()
    );

    Ok(playlist)
}
