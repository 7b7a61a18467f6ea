//! Extended M3U (UTF-8) playlist writer

use super::PlaylistWriter;
use crate::model::ResolvedPlaylist;
use std::io::{self, Write};

/// Writes `#EXTM3U` playlists
pub struct M3u8Writer;

impl PlaylistWriter for M3u8Writer {
    fn extension(&self) -> &'static str {
        "m3u8"
    }

    fn write(&self, playlist: &ResolvedPlaylist, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "#EXTM3U")?;

        for track in &playlist.tracks {
            writeln!(
                out,
                "#EXTINF:{},{} - {}",
                track.duration_secs().round() as u64,
                track.title,
                track.artist_or_unknown()
            )?;
            writeln!(out, "{}", track.location.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PlaylistDescriptor, Track};
    use std::path::PathBuf;

    #[test]
    fn test_m3u8_output() {
        let track_a = Track {
            id: 10,
            title: "Song A".to_string(),
            artist: Some("Artist X".to_string()),
            duration_ms: 180_400,
            location: PathBuf::from("C:/Music/Song A.mp3"),
        };
        let track_b = Track {
            id: 11,
            title: "Song B".to_string(),
            artist: None,
            duration_ms: 240_000,
            location: PathBuf::from("C:/Music/Song B.mp3"),
        };
        let descriptor = PlaylistDescriptor {
            name: "Favorites".to_string(),
            persistent_id: "A1".to_string(),
            parent_id: None,
            is_folder: false,
            is_smart: false,
            members: vec![10, 11],
        };
        let playlist = ResolvedPlaylist {
            descriptor: &descriptor,
            tracks: vec![&track_a, &track_b],
        };

        let mut out = Vec::new();
        M3u8Writer.write(&playlist, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "#EXTM3U",
                "#EXTINF:180,Song A - Artist X",
                "C:/Music/Song A.mp3",
                "#EXTINF:240,Song B - Unknown Artist",
                "C:/Music/Song B.mp3",
            ]
        );
    }

    #[test]
    fn test_empty_playlist_is_just_the_header() {
        let descriptor = PlaylistDescriptor {
            name: "Empty".to_string(),
            persistent_id: "E0".to_string(),
            parent_id: None,
            is_folder: false,
            is_smart: false,
            members: Vec::new(),
        };
        let playlist = ResolvedPlaylist {
            descriptor: &descriptor,
            tracks: Vec::new(),
        };

        let mut out = Vec::new();
        M3u8Writer.write(&playlist, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "#EXTM3U\n");
    }
}
