use serde::{Deserialize, Serialize};
use std::fmt;

/// Artist/title used for ids that cannot be resolved
pub const UNKNOWN: &str = "Unknown";

/// A single playlist entry recovered from an export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Track ID as written in the export
    pub id: String,

    /// Artist name
    pub artist: String,

    /// Track title
    pub name: String,
}

impl Track {
    pub fn new(id: impl Into<String>, artist: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            artist: artist.into(),
            name: name.into(),
        }
    }

    /// Placeholder for an id with no Artist/Name pair
    pub fn unknown(id: impl Into<String>) -> Self {
        Self::new(id, UNKNOWN, UNKNOWN)
    }

    /// Whether this track is an unresolved placeholder
    pub fn is_unknown(&self) -> bool {
        self.artist == UNKNOWN && self.name == UNKNOWN
    }
}

/// Renders as `<artist> - <name>`
impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.artist, self.name)
    }
}
