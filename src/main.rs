use anyhow::Result;
use clap::Parser;
use itunes_playlister::report::OutputFormat;
use itunes_playlister::{ListerConfig, ReportPipeline};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "itunes-playlister")]
#[command(about = "Print the track lists of iTunes playlist exports", long_about = None)]
struct Args {
    /// Directory containing exported playlists
    #[arg(short = 'd', long, default_value = "~/Documents/playlists")]
    dir: String,

    /// Extension of playlist export files
    #[arg(short = 'e', long, default_value = "xml")]
    extension: String,

    /// Write the report to this file instead of stdout
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Report format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Expand ~ in paths
    let dir = shellexpand::tilde(&args.dir);

    let mut config = ListerConfig::new(PathBuf::from(dir.as_ref()))
        .with_extension(args.extension)
        .with_format(args.format);

    if let Some(output) = args.output {
        config = config.with_output(output);
    }

    let summary = ReportPipeline::new(config).run()?;

    log::info!(
        "Done: {} file(s) found, {} playlist(s) written, {} skipped",
        summary.files_found,
        summary.playlists_written,
        summary.files_skipped
    );

    Ok(())
}
