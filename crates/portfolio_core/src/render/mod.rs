//! Fragment renderers for the featured, solo and team regions.
//!
//! # Responsibility
//! - Turn loaded projects into full region HTML.
//! - Read initial toggle visibility from the injected [`UiState`].
//!
//! # Invariants
//! - Rendering is pure and idempotent: identical inputs yield identical bytes.
//! - Each renderer fully replaces its region; nothing is diffed.

pub mod common;
pub mod featured;
pub mod solo;
pub mod team;

use crate::model::project::ProjectData;
use crate::ui::state::UiState;

pub use common::load_error;
pub use featured::{featured_pool, render_featured, FeaturedCandidate, FEATURED_REGION_ID};
pub use solo::{render_solo, SOLO_REGION_ID};
pub use team::{render_team, TEAM_REGION_ID};

/// Seeds built-in default visibility for every region the renderers emit.
///
/// Values already present in `ui` (e.g. from configuration) are kept.
pub fn seed_defaults(ui: &mut UiState, data: &ProjectData) {
    solo::seed_defaults(ui, &data.solo_projects);
    team::seed_defaults(ui, &data.team_projects);
}
