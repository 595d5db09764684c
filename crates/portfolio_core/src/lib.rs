//! Core rendering logic for the portfolio page.
//! This crate owns the data model, annotations, renderers and page wiring.

pub mod annotate;
pub mod config;
pub mod document;
pub mod logging;
pub mod model;
pub mod render;
pub mod repo;
pub mod service;
pub mod ui;
pub mod view;

pub use annotate::media::{is_video_url, resolve_kind};
pub use annotate::tags::{infer_tags, DEFAULT_TAG_LIMIT};
pub use config::{ConfigError, RenderConfig};
pub use document::{DocumentError, HostDocument};
pub use logging::{
    default_log_level, init_logging, logging_status, LogLevel, LogTarget, LoggingError,
};
pub use model::project::{slugify, CodeBlock, Media, MediaKind, Project, ProjectData, Section};
pub use repo::project_source::{
    source_for, FileProjectSource, HttpProjectSource, MemoryProjectSource, ProjectSource,
    SourceError, SourceResult,
};
pub use service::page_controller::{
    render_regions, LoadStatus, PageController, PageOutcome, RenderedRegions,
};
pub use ui::state::{MediaDescriptor, OpenMediaOutcome, UiState};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
