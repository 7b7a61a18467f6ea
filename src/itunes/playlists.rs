//! Playlist descriptor extraction from the "Playlists" section

use crate::diag::{Diagnostic, Diagnostics, LibraryError};
use crate::model::PlaylistDescriptor;
use crate::plist::{find_first, find_key, key_bool, key_value_text, Element, ARRAY_TAG, DICT_TAG};

const PLAYLISTS_SECTION: &str = "Playlists";

const NAME_KEY: &str = "Name";
const PERSISTENT_ID_KEY: &str = "Playlist Persistent ID";
const PARENT_ID_KEY: &str = "Parent Persistent ID";
const FOLDER_KEY: &str = "Folder";
const SMART_INFO_KEY: &str = "Smart Info";
const TRACK_ID_KEY: &str = "Track ID";

/// Extract all playlist descriptors from the document, in source order
///
/// A missing "Playlists" section is fatal. A playlist entry missing its
/// required fields is skipped with a diagnostic.
pub fn extract_playlists(
    document: &Element,
    diagnostics: &mut Diagnostics,
) -> Result<Vec<PlaylistDescriptor>, LibraryError> {
    let playlists_node = find_key(document, PLAYLISTS_SECTION)
        .and_then(|key| key.value_element())
        .ok_or(LibraryError::MissingSection(PLAYLISTS_SECTION))?;

    let mut playlists = Vec::new();

    for (index, group) in playlists_node.children().iter().enumerate() {
        match build_descriptor(group, diagnostics) {
            Ok(descriptor) => playlists.push(descriptor),
            Err(reason) => diagnostics.push(Diagnostic::MalformedPlaylist { index, reason }),
        }
    }

    log::info!("Extracted {} playlists from the library", playlists.len());
    Ok(playlists)
}

/// Build one descriptor from a playlist dict in a single construction step
fn build_descriptor(
    group: &Element,
    diagnostics: &mut Diagnostics,
) -> Result<PlaylistDescriptor, String> {
    if group.tag != DICT_TAG {
        return Err(format!("expected a dict entry, found <{}>", group.tag));
    }

    let name = key_value_text(group, NAME_KEY)
        .ok_or_else(|| format!("missing \"{}\"", NAME_KEY))?
        .to_string();

    let persistent_id = key_value_text(group, PERSISTENT_ID_KEY)
        .ok_or_else(|| format!("missing \"{}\"", PERSISTENT_ID_KEY))?
        .to_string();

    let parent_id = key_value_text(group, PARENT_ID_KEY).map(str::to_string);
    let is_folder = key_bool(group, FOLDER_KEY);

    // Smart playlists are detected by key presence alone; the embedded
    // filter criteria are never evaluated
    let is_smart = find_key(group, SMART_INFO_KEY).is_some();

    let members = member_track_ids(group, &name, diagnostics);

    Ok(PlaylistDescriptor {
        name,
        persistent_id,
        parent_id,
        is_folder,
        is_smart,
        members,
    })
}

/// Member track identifiers from the playlist's nested item array
///
/// Each member is one dict holding a single Track ID pair. An absent or
/// empty array means zero members, not an error.
fn member_track_ids(group: &Element, name: &str, diagnostics: &mut Diagnostics) -> Vec<u64> {
    let Some(array) = find_first(group, ARRAY_TAG) else {
        return Vec::new();
    };

    let mut members = Vec::new();

    for (index, entry) in array
        .children()
        .iter()
        .filter(|e| e.tag == DICT_TAG)
        .enumerate()
    {
        match key_value_text(entry, TRACK_ID_KEY).and_then(|text| text.parse::<u64>().ok()) {
            Some(id) => members.push(id),
            None => diagnostics.push(Diagnostic::MalformedMemberEntry {
                playlist: name.to_string(),
                index,
            }),
        }
    }

    members
}
