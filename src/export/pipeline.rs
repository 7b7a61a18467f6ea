//! Main export pipeline orchestration

use super::config::{ExportConfig, PlaylistFormat};
use super::writers::writer_for;
use crate::chooser::PlaylistChooser;
use crate::diag::{Diagnostic, Diagnostics};
use crate::model::{Library, PlaylistDescriptor, ResolvedPlaylist};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Outcome of an export run
#[derive(Debug)]
pub struct ExportReport {
    /// Playlist files written, in write order
    pub written: Vec<PathBuf>,

    /// Non-fatal findings (unresolved tracks, missing requested playlists)
    pub diagnostics: Diagnostics,
}

/// Resolves selected playlists against the catalog and writes them out
pub struct ExportPipeline<C: PlaylistChooser> {
    config: ExportConfig,
    chooser: C,
}

impl<C: PlaylistChooser> ExportPipeline<C> {
    /// Create a new export pipeline
    pub fn new(config: ExportConfig, chooser: C) -> Self {
        Self { config, chooser }
    }

    /// Run the complete export process
    pub fn export(&self, library: &Library) -> Result<ExportReport> {
        log::info!("Starting playlist export to {:?}", self.config.export_dir);

        std::fs::create_dir_all(&self.config.export_dir).with_context(|| {
            format!(
                "Failed to create export directory {:?}",
                self.config.export_dir
            )
        })?;

        let mut diagnostics = Diagnostics::new();
        let selected = self.select_playlists(library, &mut diagnostics)?;

        log::info!(
            "Exporting {} playlist(s) in {} format(s)",
            selected.len(),
            self.config.formats.len()
        );

        let mut written = Vec::new();
        for descriptor in selected {
            let resolved = library.resolve(descriptor, &mut diagnostics);
            log::info!(
                "Playlist \"{}\": {} tracks, {:.0}s total",
                resolved.name(),
                resolved.len(),
                resolved.total_duration_secs()
            );

            for &format in &self.config.formats {
                let path = self.write_playlist(&resolved, format)?;
                written.push(path);
            }
        }

        log::info!("Export complete: {} file(s) written", written.len());
        Ok(ExportReport {
            written,
            diagnostics,
        })
    }

    /// Decide which playlists to export: explicit filter, all, or chooser
    fn select_playlists<'a>(
        &self,
        library: &'a Library,
        diagnostics: &mut Diagnostics,
    ) -> Result<Vec<&'a PlaylistDescriptor>> {
        if self.config.export_all {
            return Ok(library.playlists().iter().collect());
        }

        match &self.config.playlist_filter {
            Some(names) => {
                let mut selected = Vec::new();
                for name in names {
                    match library.find_playlist(name) {
                        Some(descriptor) => selected.push(descriptor),
                        None => diagnostics.push(Diagnostic::MissingRequestedPlaylist {
                            name: name.clone(),
                        }),
                    }
                }
                Ok(selected)
            }
            None => self.chooser.choose(library),
        }
    }

    /// Serialize one playlist in one format, picking a free file name
    fn write_playlist(
        &self,
        playlist: &ResolvedPlaylist,
        format: PlaylistFormat,
    ) -> Result<PathBuf> {
        let writer = writer_for(format);
        let path = self.output_path(playlist.name(), writer.extension());

        let file = File::create(&path)
            .with_context(|| format!("Failed to create playlist file {:?}", path))?;
        let mut out = BufWriter::new(file);
        writer
            .write(playlist, &mut out)
            .with_context(|| format!("Failed to write playlist file {:?}", path))?;
        out.flush()
            .with_context(|| format!("Failed to flush playlist file {:?}", path))?;

        log::debug!("Wrote {:?}", path);
        Ok(path)
    }

    /// Output location for a playlist; occupied names get a " (2)" suffix
    fn output_path(&self, name: &str, extension: &str) -> PathBuf {
        let mut path = self.config.export_dir.join(format!("{}.{}", name, extension));

        if self.config.overwrite {
            return path;
        }

        let mut counter = 2;
        while path.exists() {
            let renamed = format!("{} ({}).{}", name, counter, extension);
            log::debug!("{}.{} exists, trying {}", name, extension, renamed);
            path = self.config.export_dir.join(renamed);
            counter += 1;
        }

        path
    }
}
