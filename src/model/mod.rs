//! Unified data model for the extracted library
//!
//! These structures are independent of both the input plist format and the
//! output playlist formats.

mod library;
mod playlist;
mod track;

pub use library::Library;
pub use playlist::{PlaylistDescriptor, ResolvedPlaylist};
pub use track::Track;
