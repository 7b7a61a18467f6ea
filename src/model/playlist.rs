use super::Track;
use serde::{Deserialize, Serialize};

/// A playlist as described by the document, before track resolution
///
/// All fields are computed in one construction step from the source node;
/// there is no partially initialized state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistDescriptor {
    /// Playlist name
    pub name: String,

    /// Stable per-playlist token, unique across the document
    pub persistent_id: String,

    /// Persistent identifier of the enclosing folder; None = root level
    pub parent_id: Option<String>,

    /// Whether this entry is a folder (may contain other playlists)
    pub is_folder: bool,

    /// Whether the playlist carries embedded smart-filter metadata
    ///
    /// The criteria themselves are never evaluated; membership still comes
    /// from the explicit member list.
    pub is_smart: bool,

    /// Member track identifiers in playback order (duplicates permitted)
    pub members: Vec<u64>,
}

impl PlaylistDescriptor {
    /// Human-readable kind label, e.g. "Smart Playlist" or "Folder"
    pub fn kind_label(&self) -> String {
        let mut label = String::new();
        if self.is_smart {
            label.push_str("Smart ");
        }
        label.push_str(if self.is_folder { "Folder" } else { "Playlist" });
        label
    }
}

/// A playlist descriptor joined with its actual track records
///
/// Member identifiers that could not be found in the catalog are omitted
/// (and reported by the joiner); the remaining tracks keep playback order.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPlaylist<'a> {
    pub descriptor: &'a PlaylistDescriptor,
    pub tracks: Vec<&'a Track>,
}

impl ResolvedPlaylist<'_> {
    pub fn name(&self) -> &str {
        &self.descriptor.name
    }

    /// Sum of member track durations in seconds
    pub fn total_duration_secs(&self) -> f64 {
        self.tracks.iter().map(|t| t.duration_secs()).sum()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(is_folder: bool, is_smart: bool) -> PlaylistDescriptor {
        PlaylistDescriptor {
            name: "Test".to_string(),
            persistent_id: "A1".to_string(),
            parent_id: None,
            is_folder,
            is_smart,
            members: Vec::new(),
        }
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(descriptor(false, false).kind_label(), "Playlist");
        assert_eq!(descriptor(true, false).kind_label(), "Folder");
        assert_eq!(descriptor(false, true).kind_label(), "Smart Playlist");
        assert_eq!(descriptor(true, true).kind_label(), "Smart Folder");
    }

    #[test]
    fn test_empty_resolved_playlist_has_zero_duration() {
        let desc = descriptor(false, false);
        let resolved = ResolvedPlaylist {
            descriptor: &desc,
            tracks: Vec::new(),
        };
        assert!(resolved.is_empty());
        assert_eq!(resolved.total_duration_secs(), 0.0);
    }
}
