//! iTunes Playlister - track lists from iTunes playlist exports
//!
//! This library rebuilds the ordered track list of iTunes/Music plist
//! playlist exports and renders a readable report for each one.

pub mod error;
pub mod model;
pub mod plist;
pub mod report;

pub use error::PlaylistError;
pub use report::{ListerConfig, ReportPipeline};
