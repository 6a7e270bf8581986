//! Report rendering

use super::config::OutputFormat;
use crate::model::Playlist;
use anyhow::{Context, Result};

/// Separator printed before every text report
pub const DIVIDER: &str = "\n\n==========\n";

/// Render all playlists in the requested format
pub fn render(playlists: &[Playlist], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(playlists)),
        OutputFormat::Json => render_json(playlists),
    }
}

/// Divider + report + newline for each playlist
pub fn render_text(playlists: &[Playlist]) -> String {
    playlists
        .iter()
        .map(|playlist| format!("{}{}\n", DIVIDER, playlist.report()))
        .collect()
}

pub fn render_json(playlists: &[Playlist]) -> Result<String> {
    let mut json =
        serde_json::to_string_pretty(playlists).context("Failed to serialize playlists")?;
    json.push('\n');
    Ok(json)
}
