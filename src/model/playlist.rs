use super::Track;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named, ordered list of tracks recovered from one export file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Playlist name
    pub name: String,

    /// Tracks in playlist order
    pub tracks: Vec<Track>,
}

impl Playlist {
    pub fn new(name: impl Into<String>, tracks: Vec<Track>) -> Self {
        Self {
            name: name.into(),
            tracks,
        }
    }

    /// Number of tracks in this playlist
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Number of placeholder tracks
    pub fn unknown_count(&self) -> usize {
        self.tracks.iter().filter(|t| t.is_unknown()).count()
    }

    /// Human-readable report: the name line followed by one line per track
    pub fn report(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Playlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.name)?;
        for track in &self.tracks {
            write!(f, "\n{}", track)?;
        }
        Ok(())
    }
}
