//! Report pipeline orchestration

use super::config::ListerConfig;
use super::discovery::discover_playlists;
use super::render::render;
use crate::model::Playlist;
use crate::plist::parse_playlist_file;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Outcome of a report run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportSummary {
    /// Playlist exports found in the directory
    pub files_found: usize,

    /// Playlists successfully reconciled and written
    pub playlists_written: usize,

    /// Files that could not be read or reconciled
    pub files_skipped: usize,
}

/// Playlists loaded from a directory, plus the files that failed
#[derive(Debug, Default)]
pub struct LoadedPlaylists {
    pub playlists: Vec<Playlist>,
    pub skipped: Vec<PathBuf>,
}

/// Main report pipeline
pub struct ReportPipeline {
    config: ListerConfig,
}

impl ReportPipeline {
    /// Create a new report pipeline
    pub fn new(config: ListerConfig) -> Self {
        Self { config }
    }

    /// Run the complete report: discover, parse, render, write
    pub fn run(&self) -> Result<ReportSummary> {
        log::info!("Reading playlist exports from {:?}", self.config.playlist_dir);

        let files = discover_playlists(&self.config.playlist_dir, &self.config.extension)?;
        let loaded = self.load_playlists(&files);

        match self.config.output {
            Some(ref path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create report file: {:?}", path))?;
                self.write_report(&loaded.playlists, BufWriter::new(file))?;
                log::info!("Report written to {:?}", path);
            }
            None => {
                let stdout = io::stdout();
                self.write_report(&loaded.playlists, stdout.lock())?;
            }
        }

        Ok(ReportSummary {
            files_found: files.len(),
            playlists_written: loaded.playlists.len(),
            files_skipped: loaded.skipped.len(),
        })
    }

    /// Parse every file, skipping (and logging) the ones that fail
    pub fn load_playlists(&self, files: &[PathBuf]) -> LoadedPlaylists {
        let mut loaded = LoadedPlaylists::default();

        for (i, path) in files.iter().enumerate() {
            log::debug!("[{}/{}] Parsing {:?}", i + 1, files.len(), path);

            match parse_playlist_file(path) {
                Ok(playlist) => loaded.playlists.push(playlist),
                Err(e) => {
                    log::warn!("Skipping {:?}: {:#}", path, e);
                    loaded.skipped.push(path.clone());
                }
            }
        }

        loaded
    }

    /// Render playlists in the configured format and write them to `out`
    pub fn write_report<W: Write>(&self, playlists: &[Playlist], mut out: W) -> Result<()> {
        let report = render(playlists, self.config.format)?;
        out.write_all(report.as_bytes())
            .context("Failed to write report")?;
        out.flush().context("Failed to flush report")?;
        Ok(())
    }
}
