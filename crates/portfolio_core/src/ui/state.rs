//! Toggle-region visibility and lightbox state.
//!
//! # Responsibility
//! - Track hidden/shown state per toggle-region id.
//! - Model lightbox open/close, including the new-context fallback when the
//!   host page has no modal.
//!
//! # Invariants
//! - Unknown region ids are hidden.
//! - Toggling an id twice restores its previous visibility.
//! - Closing the lightbox is idempotent.

use crate::annotate::media::render_modal_body;
use crate::config::RenderConfig;
use crate::model::project::MediaKind;
use crate::view::Node;
use log::{debug, info};
use std::collections::BTreeMap;

/// Key name that closes the lightbox.
pub const ESCAPE_KEY: &str = "Escape";

/// Media item requested for display in the lightbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaDescriptor {
    pub title: String,
    pub url: String,
    pub kind: MediaKind,
}

impl MediaDescriptor {
    pub fn new(title: impl Into<String>, url: impl Into<String>, kind: MediaKind) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            kind,
        }
    }
}

/// Result of [`UiState::open_media`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenMediaOutcome {
    /// Overlay populated with `title` and `body`, modal shown.
    Overlay { title: String, body: Node },
    /// No modal on the page; the caller opens `url` in a new browsing context.
    NewContext { url: String },
}

/// Explicit UI state injected into the renderers.
#[derive(Debug, Clone)]
pub struct UiState {
    visibility: BTreeMap<String, bool>,
    modal: Option<MediaDescriptor>,
    modal_available: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

impl UiState {
    /// Creates a state with every region hidden and a modal present.
    pub fn new() -> Self {
        Self {
            visibility: BTreeMap::new(),
            modal: None,
            modal_available: true,
        }
    }

    /// Creates a state seeded with the configured region overrides.
    ///
    /// `hidden_regions` wins when an id appears in both lists.
    pub fn from_config(config: &RenderConfig) -> Self {
        let mut state = Self::new();
        for id in &config.shown_regions {
            state.set_visible(id, true);
        }
        for id in &config.hidden_regions {
            state.set_visible(id, false);
        }
        state
    }

    /// Records whether the host page provides the modal elements.
    pub fn set_modal_available(&mut self, available: bool) {
        self.modal_available = available;
    }

    pub fn modal_available(&self) -> bool {
        self.modal_available
    }

    /// Sets a default visibility for `id` unless one is already recorded.
    pub fn seed(&mut self, id: &str, visible: bool) {
        self.visibility.entry(id.to_string()).or_insert(visible);
    }

    pub fn set_visible(&mut self, id: &str, visible: bool) {
        self.visibility.insert(id.to_string(), visible);
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.visibility.get(id).copied().unwrap_or(false)
    }

    /// Flips one region and returns its new visibility.
    pub fn toggle(&mut self, id: &str) -> bool {
        let visible = !self.is_visible(id);
        self.visibility.insert(id.to_string(), visible);
        debug!("event=region_toggled module=ui id={} visible={}", id, visible);
        visible
    }

    /// Opens the lightbox, or reports the new-context fallback.
    pub fn open_media(&mut self, media: MediaDescriptor) -> OpenMediaOutcome {
        if !self.modal_available {
            info!(
                "event=media_fallback module=ui status=ok kind={}",
                media.kind.as_str()
            );
            return OpenMediaOutcome::NewContext { url: media.url };
        }

        let outcome = OpenMediaOutcome::Overlay {
            title: media.title.clone(),
            body: render_modal_body(&media),
        };
        self.modal = Some(media);
        outcome
    }

    /// Clears the lightbox body and hides it.
    pub fn close_media(&mut self) {
        self.modal = None;
    }

    /// Handles a key press; returns whether it closed the lightbox.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key == ESCAPE_KEY && self.modal.is_some() {
            self.close_media();
            return true;
        }
        false
    }

    /// Media currently shown in the lightbox.
    pub fn modal(&self) -> Option<&MediaDescriptor> {
        self.modal.as_ref()
    }
}
