//! Playlist data model
//!
//! Plain records produced by the reconciler and consumed by the report
//! renderers. Nothing here knows about the plist line format.

mod playlist;
mod track;

pub use playlist::Playlist;
pub use track::{Track, UNKNOWN};
