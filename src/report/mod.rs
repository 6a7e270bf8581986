//! Report generation: discovery, rendering and output

pub mod config;
pub mod discovery;
pub mod pipeline;
pub mod render;

pub use config::{ListerConfig, OutputFormat};
pub use discovery::discover_playlists;
pub use pipeline::{LoadedPlaylists, ReportPipeline, ReportSummary};
