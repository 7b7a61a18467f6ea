//! iTunes library extraction
//!
//! Walks the parsed plist document and produces the normalized track catalog
//! and playlist descriptors.

mod hierarchy;
mod playlists;
mod tracks;

pub use hierarchy::ancestor_depth;
pub use playlists::extract_playlists;
pub use tracks::extract_tracks;

use crate::diag::{Diagnostics, LibraryError};
use crate::model::Library;
use crate::plist::{self, Element};
use std::path::Path;

/// Parse an iTunes library XML file into a `Library`
///
/// The document is parsed once; non-fatal findings (skipped tracks or
/// playlists) are returned alongside the library, never silently dropped.
pub fn parse_library(path: &Path) -> Result<(Library, Diagnostics), LibraryError> {
    log::info!("Parsing iTunes library from {:?}", path);
    let document = plist::load_document(path)?;
    load_catalogs(&document)
}

/// Extract both catalogs from an already-parsed document
pub fn load_catalogs(document: &Element) -> Result<(Library, Diagnostics), LibraryError> {
    let mut diagnostics = Diagnostics::new();

    let tracks = extract_tracks(document, &mut diagnostics)?;
    let playlists = extract_playlists(document, &mut diagnostics)?;

    let mut library = Library::new();
    for track in tracks {
        library.add_track(track);
    }
    for playlist in playlists {
        library.add_playlist(playlist);
    }

    log::info!(
        "Loaded library: {} tracks, {} playlists",
        library.track_count(),
        library.playlist_count()
    );

    Ok((library, diagnostics))
}
