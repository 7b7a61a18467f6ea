//! Export configuration

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Output playlist file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaylistFormat {
    /// Extended M3U, UTF-8
    M3u8,

    /// Windows Media Player playlist (SMIL)
    Wpl,
}

impl PlaylistFormat {
    /// File extension without the leading dot
    pub fn extension(&self) -> &'static str {
        match self {
            PlaylistFormat::M3u8 => "m3u8",
            PlaylistFormat::Wpl => "wpl",
        }
    }
}

impl FromStr for PlaylistFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "m3u8" => Ok(PlaylistFormat::M3u8),
            "wpl" => Ok(PlaylistFormat::Wpl),
            other => Err(format!("unknown playlist format \"{}\"", other)),
        }
    }
}

impl fmt::Display for PlaylistFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Configuration for the export process
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Directory the playlist files are written into
    pub export_dir: PathBuf,

    /// Formats to write for each selected playlist
    pub formats: Vec<PlaylistFormat>,

    /// Specific playlist names to export (None = ask or export all)
    pub playlist_filter: Option<Vec<String>>,

    /// Export every playlist without asking
    pub export_all: bool,

    /// Overwrite existing files instead of picking a fresh name
    pub overwrite: bool,
}

impl ExportConfig {
    /// Create a new export configuration with the default format
    pub fn new(export_dir: PathBuf) -> Self {
        Self {
            export_dir,
            formats: vec![PlaylistFormat::M3u8],
            playlist_filter: None,
            export_all: false,
            overwrite: false,
        }
    }

    /// Set specific playlists to export
    pub fn with_playlists(mut self, playlists: Vec<String>) -> Self {
        self.playlist_filter = Some(playlists);
        self
    }

    /// Set the output formats
    pub fn with_formats(mut self, formats: Vec<PlaylistFormat>) -> Self {
        self.formats = formats;
        self
    }

    /// Export all playlists without prompting
    pub fn with_export_all(mut self, export_all: bool) -> Self {
        self.export_all = export_all;
        self
    }

    /// Overwrite existing playlist files
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing_is_case_insensitive() {
        assert_eq!("M3U8".parse::<PlaylistFormat>(), Ok(PlaylistFormat::M3u8));
        assert_eq!("wpl".parse::<PlaylistFormat>(), Ok(PlaylistFormat::Wpl));
        assert!("flac".parse::<PlaylistFormat>().is_err());
    }

    #[test]
    fn test_builder_defaults() {
        let config = ExportConfig::new(PathBuf::from("/tmp/out"));
        assert_eq!(config.formats, vec![PlaylistFormat::M3u8]);
        assert!(config.playlist_filter.is_none());
        assert!(!config.export_all);
        assert!(!config.overwrite);
    }
}
