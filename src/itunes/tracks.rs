//! Track catalog extraction from the "Tracks" section

use crate::diag::{Diagnostic, Diagnostics, LibraryError};
use crate::model::Track;
use crate::plist::{find_key, key_value_pairs, key_value_text, Element, DICT_TAG};
use std::path::PathBuf;

const TRACKS_SECTION: &str = "Tracks";

const TRACK_ID_KEY: &str = "Track ID";
const NAME_KEY: &str = "Name";
const ARTIST_KEY: &str = "Artist";
const TOTAL_TIME_KEY: &str = "Total Time";
const LOCATION_KEY: &str = "Location";

/// Extract all tracks from the document, in source order
///
/// A missing "Tracks" section is fatal. A malformed track group is skipped
/// with a diagnostic and extraction continues.
pub fn extract_tracks(
    document: &Element,
    diagnostics: &mut Diagnostics,
) -> Result<Vec<Track>, LibraryError> {
    let tracks_node = find_key(document, TRACKS_SECTION)
        .and_then(|key| key.value_element())
        .ok_or(LibraryError::MissingSection(TRACKS_SECTION))?;

    let mut tracks = Vec::new();

    // The Tracks dict pairs a numeric key with one dict per track
    for (index, (_, group)) in key_value_pairs(tracks_node).enumerate() {
        if group.tag != DICT_TAG {
            diagnostics.push(Diagnostic::MalformedTrack {
                index,
                reason: format!("expected a dict group, found <{}>", group.tag),
            });
            continue;
        }

        match build_track(group) {
            Ok(track) => tracks.push(track),
            Err(reason) => diagnostics.push(Diagnostic::MalformedTrack { index, reason }),
        }
    }

    log::info!("Extracted {} tracks from the library", tracks.len());
    Ok(tracks)
}

fn build_track(group: &Element) -> Result<Track, String> {
    let id = key_value_text(group, TRACK_ID_KEY)
        .ok_or_else(|| format!("missing \"{}\"", TRACK_ID_KEY))?
        .parse::<u64>()
        .map_err(|_| format!("unparseable \"{}\"", TRACK_ID_KEY))?;

    let title = key_value_text(group, NAME_KEY)
        .ok_or_else(|| format!("missing \"{}\"", NAME_KEY))?
        .to_string();

    let artist = key_value_text(group, ARTIST_KEY).map(str::to_string);

    let duration_ms = key_value_text(group, TOTAL_TIME_KEY)
        .ok_or_else(|| format!("missing \"{}\"", TOTAL_TIME_KEY))?
        .parse::<u64>()
        .map_err(|_| format!("unparseable \"{}\"", TOTAL_TIME_KEY))?;

    let raw_location =
        key_value_text(group, LOCATION_KEY).ok_or_else(|| format!("missing \"{}\"", LOCATION_KEY))?;
    let location = decode_location(raw_location)
        .ok_or_else(|| format!("no absolute path in location \"{}\"", raw_location))?;

    Ok(Track {
        id,
        title,
        artist,
        duration_ms,
        location,
    })
}

/// Decode a raw stored location into a normalized filesystem path
///
/// The stored value is a URL like `file://localhost/C:/Music/Song%20A.mp3`.
/// The first drive-letter substring is extracted, percent-decoded and its
/// separators swapped to the host platform's convention.
pub(crate) fn decode_location(raw: &str) -> Option<PathBuf> {
    let start = find_drive_path(raw)?;
    let decoded = urlencoding::decode(&raw[start..]).ok()?;
    Some(PathBuf::from(swap_separators(&decoded, cfg!(windows))))
}

/// Byte offset of the first `[A-Z]:` drive-letter pattern
fn find_drive_path(raw: &str) -> Option<usize> {
    raw.as_bytes()
        .windows(2)
        .position(|pair| pair[0].is_ascii_uppercase() && pair[1] == b':')
}

/// Replace foreign directory separators with the target platform's own
fn swap_separators(path: &str, windows: bool) -> String {
    if windows {
        path.replace('/', "\\")
    } else {
        path.replace('\\', "/")
    }
}
