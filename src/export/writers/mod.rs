//! Format-specific playlist file writers
//!
//! Writers consume a resolved playlist and emit text; they never decide file
//! locations themselves.

mod m3u8;
mod wpl;

pub use m3u8::M3u8Writer;
pub use wpl::WplWriter;

use super::config::PlaylistFormat;
use crate::model::ResolvedPlaylist;
use std::io::{self, Write};

/// A playlist file format emitter
pub trait PlaylistWriter {
    /// File extension without the leading dot
    fn extension(&self) -> &'static str;

    /// Serialize the playlist into `out`
    fn write(&self, playlist: &ResolvedPlaylist, out: &mut dyn Write) -> io::Result<()>;
}

/// Writer for the given format
pub fn writer_for(format: PlaylistFormat) -> Box<dyn PlaylistWriter> {
    match format {
        PlaylistFormat::M3u8 => Box::new(M3u8Writer),
        PlaylistFormat::Wpl => Box::new(WplWriter),
    }
}

/// Escape text for embedding in an XML attribute or element
pub(crate) fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
