use anyhow::{bail, Context, Result};
use clap::Parser;
use itunes_exporter::chooser::ConsoleChooser;
use itunes_exporter::settings::Settings;
use itunes_exporter::{ExportConfig, ExportPipeline, PlaylistFormat};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "itunes-exporter")]
#[command(about = "Export iTunes playlists to standalone playlist files", long_about = None)]
struct Args {
    /// Path to the iTunes library XML file
    #[arg(short = 'l', long)]
    library: Option<String>,

    /// Directory to export playlist files into
    #[arg(short = 'o', long)]
    output: Option<String>,

    /// Export only specific playlists (can be specified multiple times)
    #[arg(short = 'p', long = "playlist")]
    playlists: Vec<String>,

    /// Export all playlists without prompting
    #[arg(short = 'a', long)]
    all: bool,

    /// Playlist file format(s) to write: m3u8 or wpl
    #[arg(short = 'e', long = "format", default_value = "m3u8")]
    formats: Vec<String>,

    /// Text file listing playlist names to export, one per line
    #[arg(short = 'f', long)]
    file: Option<String>,

    /// Overwrite existing playlist files instead of renaming
    #[arg(long)]
    overwrite: bool,

    /// Settings file remembering previously used paths
    #[arg(long, default_value = "settings.toml")]
    settings: PathBuf,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut settings = Settings::load(&args.settings)?;

    // CLI paths win over remembered ones
    let library_path = resolve_path(args.library.as_deref(), settings.library_path.as_deref())
        .context("No library file given; pass --library or record one in the settings file")?;
    if !library_path.exists() {
        bail!("Library file {:?} does not exist", library_path);
    }

    let export_dir = resolve_path(args.output.as_deref(), settings.export_dir.as_deref())
        .context("No export directory given; pass --output or record one in the settings file")?;

    let formats = args
        .formats
        .iter()
        .map(|text| text.parse::<PlaylistFormat>().map_err(anyhow::Error::msg))
        .collect::<Result<Vec<_>>>()?;

    // Collect requested playlist names from flags and the optional list file
    let mut requested = args.playlists.clone();
    let playlist_file = args
        .file
        .as_deref()
        .map(|f| PathBuf::from(shellexpand::tilde(f).as_ref()));
    if let Some(path) = &playlist_file {
        requested.extend(read_playlist_names(path)?);
    }

    log::info!("Loading iTunes library...");
    let (library, load_diagnostics) = itunes_exporter::itunes::parse_library(&library_path)?;
    log::info!(
        "Library loaded: {} tracks, {} playlists",
        library.track_count(),
        library.playlist_count()
    );

    let mut config = ExportConfig::new(export_dir.clone())
        .with_formats(formats)
        .with_export_all(args.all)
        .with_overwrite(args.overwrite);
    if !requested.is_empty() {
        log::info!("Exporting {} requested playlist(s)", requested.len());
        config = config.with_playlists(requested);
    }

    let pipeline = ExportPipeline::new(config, ConsoleChooser::new());
    let report = pipeline.export(&library)?;

    // Non-fatal findings are reported at the end, after the export ran
    for diagnostic in load_diagnostics.iter().chain(report.diagnostics.iter()) {
        log::warn!("{}", diagnostic);
    }

    log::info!(
        "Finished: {} playlist file(s) written to {:?}",
        report.written.len(),
        export_dir
    );

    // Remember the paths that worked
    settings.library_path = Some(library_path);
    settings.export_dir = Some(export_dir);
    if playlist_file.is_some() {
        settings.playlist_file = playlist_file;
    }
    if let Err(err) = settings.save(&args.settings) {
        log::warn!("Could not save settings: {:#}", err);
    }

    Ok(())
}

/// Pick the CLI path if given (with ~ expansion), else the remembered one
fn resolve_path(cli: Option<&str>, remembered: Option<&Path>) -> Option<PathBuf> {
    match cli {
        Some(text) => Some(PathBuf::from(shellexpand::tilde(text).as_ref())),
        None => remembered.map(Path::to_path_buf),
    }
}

/// Read playlist names from a text file, one per line, skipping blanks
fn read_playlist_names(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read playlist list file {:?}", path))?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
