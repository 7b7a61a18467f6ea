//! Error taxonomy and non-fatal diagnostics
//!
//! Fatal conditions (unreadable file, missing top-level section) abort the
//! run through `LibraryError`. Everything else is collected as `Diagnostic`
//! records in a `Diagnostics` sink that extractors receive explicitly; the
//! presentation layer decides how to display them.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal library errors - nothing useful can be extracted past these
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("failed to read library file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse library XML")]
    Xml(#[from] quick_xml::Error),

    /// The document has no "Tracks" or "Playlists" section at all
    #[error("no such library: missing \"{0}\" section")]
    MissingSection(&'static str),
}

/// Errors from following playlist parent links
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HierarchyError {
    #[error("playlist \"{playlist}\" references unknown parent {parent_id}")]
    BrokenParentLink { playlist: String, parent_id: String },

    #[error("parent chain of playlist \"{playlist}\" does not terminate")]
    ParentCycle { playlist: String },
}

/// A non-fatal finding produced during extraction or resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A track group was skipped (missing or unparseable required field)
    MalformedTrack { index: usize, reason: String },

    /// A playlist entry was skipped
    MalformedPlaylist { index: usize, reason: String },

    /// A playlist member entry carried no parseable track identifier
    MalformedMemberEntry { playlist: String, index: usize },

    /// A playlist referenced a track identifier absent from the catalog
    UnresolvedTrackId { playlist: String, track_id: u64 },

    /// A playlist requested for export does not exist in the library
    MissingRequestedPlaylist { name: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MalformedTrack { index, reason } => {
                write!(f, "skipped track entry #{}: {}", index, reason)
            }
            Diagnostic::MalformedPlaylist { index, reason } => {
                write!(f, "skipped playlist entry #{}: {}", index, reason)
            }
            Diagnostic::MalformedMemberEntry { playlist, index } => {
                write!(
                    f,
                    "playlist \"{}\": member entry #{} has no parseable track identifier",
                    playlist, index
                )
            }
            Diagnostic::UnresolvedTrackId { playlist, track_id } => {
                write!(
                    f,
                    "playlist \"{}\": could not find track with ID {}",
                    playlist, track_id
                )
            }
            Diagnostic::MissingRequestedPlaylist { name } => {
                write!(f, "playlist \"{}\" not found in the library", name)
            }
        }
    }
}

/// Ordered collection of diagnostics gathered during a run
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    records: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finding (also traced at debug level)
    pub fn push(&mut self, diagnostic: Diagnostic) {
        log::debug!("{}", diagnostic);
        self.records.push(diagnostic);
    }

    /// Move all records from `other` into this sink
    pub fn merge(&mut self, other: Diagnostics) {
        self.records.extend(other.records);
    }

    pub fn records(&self) -> &[Diagnostic] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
