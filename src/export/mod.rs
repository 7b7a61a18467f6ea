//! Export orchestration and playlist file writers

pub mod config;
pub mod pipeline;
pub mod writers;

pub use config::{ExportConfig, PlaylistFormat};
pub use pipeline::{ExportPipeline, ExportReport};
