use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single music track as extracted from the library
///
/// Immutable once extracted; playlists reference tracks by identifier and
/// never carry mutated copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Numeric identifier, unique within the document
    pub id: u64,

    /// Track title
    pub title: String,

    /// Artist name (optional in the source)
    pub artist: Option<String>,

    /// Duration in milliseconds, as stored in the document
    pub duration_ms: u64,

    /// Normalized on-disk location, decoded from the raw URI
    pub location: PathBuf,
}

impl Track {
    /// Duration in seconds (stored milliseconds divided by 1000)
    pub fn duration_secs(&self) -> f64 {
        self.duration_ms as f64 / 1000.0
    }

    /// Artist name, or a placeholder when the document carries none
    pub fn artist_or_unknown(&self) -> &str {
        self.artist.as_deref().unwrap_or("Unknown Artist")
    }
}
