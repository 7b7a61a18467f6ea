//! Remembered paths between runs
//!
//! The previously chosen library file, export directory and playlist-names
//! file are persisted as a small TOML document so repeat invocations need no
//! arguments.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Paths remembered from previous runs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// iTunes library XML file
    pub library_path: Option<PathBuf>,

    /// Directory playlist files are exported into
    pub export_dir: Option<PathBuf>,

    /// Text file listing playlist names to export, one per line
    pub playlist_file: Option<PathBuf>,
}

impl Settings {
    /// Load settings from `path`; a missing file yields defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No settings file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {:?}", path))?;
        toml::from_str(&text).with_context(|| format!("Failed to parse settings file {:?}", path))
    }

    /// Persist settings to `path`
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = toml::to_string_pretty(self).context("Failed to serialize settings")?;
        fs::write(path, text).with_context(|| format!("Failed to write settings file {:?}", path))
    }
}
