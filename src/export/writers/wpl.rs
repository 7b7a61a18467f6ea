//! Windows Media Player (SMIL) playlist writer

use super::{xml_escape, PlaylistWriter};
use crate::model::ResolvedPlaylist;
use std::io::{self, Write};

const GENERATOR: &str = "itunes-exporter";

/// Writes `.wpl` playlists
pub struct WplWriter;

impl PlaylistWriter for WplWriter {
    fn extension(&self) -> &'static str {
        "wpl"
    }

    fn write(&self, playlist: &ResolvedPlaylist, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "<?wpl version=\"1.0\"?>")?;
        writeln!(out, "<smil>")?;
        writeln!(out, "\t<head>")?;
        writeln!(
            out,
            "\t\t<meta name=\"Generator\" content=\"{}\"/>",
            GENERATOR
        )?;
        writeln!(
            out,
            "\t\t<meta name=\"TotalDuration\" content=\"{}\"/>",
            playlist.total_duration_secs()
        )?;
        writeln!(
            out,
            "\t\t<meta name=\"ItemCount\" content=\"{}\"/>",
            playlist.len()
        )?;
        writeln!(out, "\t\t<title>{}</title>", xml_escape(playlist.name()))?;
        writeln!(out, "\t</head>")?;
        writeln!(out, "\t<body>")?;
        writeln!(out, "\t\t<seq>")?;

        for track in &playlist.tracks {
            writeln!(
                out,
                "\t\t\t<media src=\"{}\"/>",
                xml_escape(&track.location.display().to_string())
            )?;
        }

        writeln!(out, "\t\t</seq>")?;
        writeln!(out, "\t</body>")?;
        writeln!(out, "</smil>")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PlaylistDescriptor, Track};
    use std::path::PathBuf;

    #[test]
    fn test_wpl_output() {
        let track = Track {
            id: 10,
            title: "Song A".to_string(),
            artist: Some("Artist X".to_string()),
            duration_ms: 180_000,
            location: PathBuf::from("C:/Music/Rock & Roll.mp3"),
        };
        let descriptor = PlaylistDescriptor {
            name: "Mix <1>".to_string(),
            persistent_id: "A1".to_string(),
            parent_id: None,
            is_folder: false,
            is_smart: false,
            members: vec![10],
        };
        let playlist = ResolvedPlaylist {
            descriptor: &descriptor,
            tracks: vec![&track],
        };

        let mut out = Vec::new();
        WplWriter.write(&playlist, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("<?wpl version=\"1.0\"?>\n<smil>"));
        assert!(text.contains("<meta name=\"TotalDuration\" content=\"180\"/>"));
        assert!(text.contains("<meta name=\"ItemCount\" content=\"1\"/>"));
        assert!(text.contains("<title>Mix &lt;1&gt;</title>"));
        assert!(text.contains("<media src=\"C:/Music/Rock &amp; Roll.mp3\"/>"));
        assert!(text.trim_end().ends_with("</smil>"));
    }
}
