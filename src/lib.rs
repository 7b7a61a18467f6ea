//! iTunes Exporter - iTunes library to standalone playlist files
//!
//! This library parses an iTunes XML library export and writes selected
//! playlists as M3U8 or WPL files.

pub mod chooser;
pub mod diag;
pub mod export;
pub mod itunes;
pub mod model;
pub mod plist;
pub mod settings;

pub use export::config::{ExportConfig, PlaylistFormat};
pub use export::pipeline::{ExportPipeline, ExportReport};
