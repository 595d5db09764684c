//! Typed interaction handlers attached to view nodes.
//!
//! Actions serialize to `data-action` plus `data-*` parameters; the page
//! bindings script dispatches them to the UI state operations.

use crate::model::project::MediaKind;
use crate::ui::state::MediaDescriptor;

/// Default delay between switching tabs and revealing a project panel.
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 80;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Flip visibility of one toggle region.
    Toggle { target: String },
    /// Show a media item in the lightbox.
    OpenMedia(MediaDescriptor),
    /// Switch to `tab`, then reveal and scroll to `target` after `delay_ms`.
    ShowProject {
        tab: String,
        target: String,
        delay_ms: u64,
    },
    /// Copy the text content of `target` to the clipboard.
    CopyCode { target: String },
}

impl Action {
    pub fn toggle(target: impl Into<String>) -> Self {
        Self::Toggle {
            target: target.into(),
        }
    }

    pub fn open_media(title: impl Into<String>, url: impl Into<String>, kind: MediaKind) -> Self {
        Self::OpenMedia(MediaDescriptor::new(title, url, kind))
    }

    pub fn show_project(tab: impl Into<String>, target: impl Into<String>, delay_ms: u64) -> Self {
        Self::ShowProject {
            tab: tab.into(),
            target: target.into(),
            delay_ms,
        }
    }

    pub fn copy_code(target: impl Into<String>) -> Self {
        Self::CopyCode {
            target: target.into(),
        }
    }

    /// Stable action name written to `data-action`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Toggle { .. } => "toggle",
            Self::OpenMedia(_) => "open-media",
            Self::ShowProject { .. } => "show-project",
            Self::CopyCode { .. } => "copy-code",
        }
    }

    /// Attribute pairs in serialization order. Values are unescaped.
    pub fn data_attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = vec![("data-action", self.name().to_string())];
        match self {
            Self::Toggle { target } | Self::CopyCode { target } => {
                attrs.push(("data-target", target.clone()));
            }
            Self::OpenMedia(media) => {
                attrs.push(("data-title", media.title.clone()));
                attrs.push(("data-url", media.url.clone()));
                attrs.push(("data-kind", media.kind.as_str().to_string()));
            }
            Self::ShowProject {
                tab,
                target,
                delay_ms,
            } => {
                attrs.push(("data-tab", tab.clone()));
                attrs.push(("data-target", target.clone()));
                attrs.push(("data-delay", delay_ms.to_string()));
            }
        }
        attrs
    }
}
