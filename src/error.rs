//! Errors raised while reconciling a playlist export

use crate::plist::EntryKind;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PlaylistError {
    /// One of the Track ID / Artist / Name lists is empty
    #[error("Malformed playlist: no {0} entries found")]
    MalformedPlaylist(EntryKind),
}
