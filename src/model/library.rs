use super::{PlaylistDescriptor, ResolvedPlaylist, Track};
use crate::diag::{Diagnostic, Diagnostics};
use std::collections::HashMap;

/// Complete extracted library: the track catalog plus playlist descriptors
///
/// Built once per document, then shared read-only by any number of resolve
/// calls. Tracks keep their extraction order; lookup by identifier goes
/// through an index map.
#[derive(Debug, Clone, Default)]
pub struct Library {
    /// All tracks in document order
    tracks: Vec<Track>,

    /// Track identifier to position in `tracks`
    by_id: HashMap<u64, usize>,

    /// All playlist descriptors in document order
    playlists: Vec<PlaylistDescriptor>,
}

impl Library {
    /// Create a new empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a track to the catalog
    ///
    /// A duplicate identifier replaces the earlier mapping, matching the
    /// dictionary semantics of the source format.
    pub fn add_track(&mut self, track: Track) {
        self.by_id.insert(track.id, self.tracks.len());
        self.tracks.push(track);
    }

    /// Add a playlist descriptor
    pub fn add_playlist(&mut self, playlist: PlaylistDescriptor) {
        self.playlists.push(playlist);
    }

    /// Look up a track by identifier
    pub fn get_track(&self, id: u64) -> Option<&Track> {
        self.by_id.get(&id).map(|&index| &self.tracks[index])
    }

    /// All tracks in document order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// All playlist descriptors in document order
    pub fn playlists(&self) -> &[PlaylistDescriptor] {
        &self.playlists
    }

    /// Find a playlist descriptor by name
    pub fn find_playlist(&self, name: &str) -> Option<&PlaylistDescriptor> {
        self.playlists.iter().find(|p| p.name == name)
    }

    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    pub fn playlist_count(&self) -> usize {
        self.playlists.len()
    }

    /// Join a descriptor's member list against the track catalog
    ///
    /// Pure lookup: the catalog is never mutated, so resolving the same
    /// descriptor twice yields identical results. Each member identifier
    /// absent from the catalog is reported and omitted; the found tracks
    /// keep the member list's playback order.
    pub fn resolve<'a>(
        &'a self,
        descriptor: &'a PlaylistDescriptor,
        diagnostics: &mut Diagnostics,
    ) -> ResolvedPlaylist<'a> {
        let mut tracks = Vec::with_capacity(descriptor.members.len());

        for &track_id in &descriptor.members {
            match self.get_track(track_id) {
                Some(track) => tracks.push(track),
                None => diagnostics.push(Diagnostic::UnresolvedTrackId {
                    playlist: descriptor.name.clone(),
                    track_id,
                }),
            }
        }

        ResolvedPlaylist { descriptor, tracks }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn test_track(id: u64, title: &str, duration_ms: u64) -> Track {
        Track {
            id,
            title: title.to_string(),
            artist: Some("Artist X".to_string()),
            duration_ms,
            location: PathBuf::from(format!("C:/Music/{}.mp3", title)),
        }
    }

    fn test_library() -> Library {
        let mut lib = Library::new();
        lib.add_track(test_track(10, "Song A", 180_000));
        lib.add_track(test_track(12, "Song B", 240_000));
        lib
    }

    #[test]
    fn test_library_creation() {
        let lib = Library::new();
        assert_eq!(lib.track_count(), 0);
        assert_eq!(lib.playlist_count(), 0);
    }

    #[test]
    fn test_get_track() {
        let lib = test_library();
        assert_eq!(lib.get_track(10).unwrap().title, "Song A");
        assert!(lib.get_track(99).is_none());
    }

    #[test]
    fn test_tracks_keep_insertion_order() {
        let lib = test_library();
        let titles: Vec<_> = lib.tracks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Song A", "Song B"]);
    }

    #[test]
    fn test_resolve_preserves_member_order_and_duplicates() {
        let lib = test_library();
        let descriptor = PlaylistDescriptor {
            name: "Loop".to_string(),
            persistent_id: "A1".to_string(),
            parent_id: None,
            is_folder: false,
            is_smart: false,
            members: vec![12, 10, 12],
        };

        let mut diags = Diagnostics::new();
        let resolved = lib.resolve(&descriptor, &mut diags);

        let titles: Vec<_> = resolved.tracks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Song B", "Song A", "Song B"]);
        assert!(diags.is_empty());
        assert_eq!(resolved.total_duration_secs(), 660.0);
    }

    #[test]
    fn test_resolve_reports_each_missing_member() {
        let lib = test_library();
        let descriptor = PlaylistDescriptor {
            name: "Favorites".to_string(),
            persistent_id: "A1".to_string(),
            parent_id: None,
            is_folder: false,
            is_smart: false,
            members: vec![10, 11, 13],
        };

        let mut diags = Diagnostics::new();
        let resolved = lib.resolve(&descriptor, &mut diags);

        assert_eq!(resolved.len(), 1);
        assert_eq!(diags.len(), 2);
        assert_eq!(
            diags.records()[0],
            Diagnostic::UnresolvedTrackId {
                playlist: "Favorites".to_string(),
                track_id: 11,
            }
        );
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let lib = test_library();
        let descriptor = PlaylistDescriptor {
            name: "Favorites".to_string(),
            persistent_id: "A1".to_string(),
            parent_id: None,
            is_folder: false,
            is_smart: false,
            members: vec![10, 12],
        };

        let mut diags = Diagnostics::new();
        let first = lib.resolve(&descriptor, &mut diags);
        let second = lib.resolve(&descriptor, &mut diags);
        assert_eq!(first, second);
        assert!(diags.is_empty());
    }

    #[test]
    fn test_duplicate_track_id_last_wins() {
        let mut lib = Library::new();
        lib.add_track(test_track(10, "Old", 1_000));
        lib.add_track(test_track(10, "New", 2_000));
        assert_eq!(lib.get_track(10).unwrap().title, "New");
    }
}
