//! Report configuration

use clap::ValueEnum;
use std::path::PathBuf;

/// Default file extension of playlist exports
pub const DEFAULT_EXTENSION: &str = "xml";

/// Configuration for a report run
#[derive(Debug, Clone)]
pub struct ListerConfig {
    /// Directory holding the playlist exports
    pub playlist_dir: PathBuf,

    /// Extension of files to pick up (compared case-insensitively)
    pub extension: String,

    /// Report destination (None = stdout)
    pub output: Option<PathBuf>,

    /// Report format
    pub format: OutputFormat,
}

/// How reports are written out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `<name>:` followed by `<artist> - <name>` lines, with dividers
    #[default]
    Text,

    /// Pretty-printed JSON array of playlists
    Json,
}

impl ListerConfig {
    /// Create a new configuration for the given directory
    pub fn new(playlist_dir: PathBuf) -> Self {
        Self {
            playlist_dir,
            extension: DEFAULT_EXTENSION.to_string(),
            output: None,
            format: OutputFormat::default(),
        }
    }

    /// Set the extension of playlist files
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        let extension = extension.into();
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    /// Write reports to a file instead of stdout
    pub fn with_output(mut self, output: PathBuf) -> Self {
        self.output = Some(output);
        self
    }

    /// Set report format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}
