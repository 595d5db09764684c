//! Page orchestration use-case.
//!
//! # Responsibility
//! - Load project data once, assign ids and render every region into the
//!   host page.
//! - Report load failures inside the page instead of escalating them.
//! - Hand back the UI state the rendered page starts from.
//!
//! # Invariants
//! - The data source is fetched exactly once per run; no retry.
//! - A missing mount point skips only its own region.
//! - `run` never returns an error; failures surface as in-page text.

use crate::config::RenderConfig;
use crate::document::HostDocument;
use crate::logging::sanitize_message;
use crate::model::project::ProjectData;
use crate::render::{
    featured_pool, load_error, render_featured, render_solo, render_team, seed_defaults,
    FEATURED_REGION_ID, SOLO_REGION_ID, TEAM_REGION_ID,
};
use crate::repo::project_source::{ProjectSource, SourceResult};
use crate::ui::state::UiState;
use log::{error, info, warn};

const MAX_REASON_LOG_CHARS: usize = 200;

/// How the data load ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loaded { solo: usize, team: usize },
    Failed { reason: String },
}

/// Region HTML produced from one data snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRegions {
    pub featured: String,
    pub solo: String,
    pub team: String,
}

/// Summary of one controller run.
#[derive(Debug, Clone)]
pub struct PageOutcome {
    pub status: LoadStatus,
    /// Region ids whose contents were replaced, in render order.
    pub rendered_regions: Vec<&'static str>,
    /// Region ids skipped because the page lacks the mount point.
    pub missing_regions: Vec<&'static str>,
    /// State matching the rendered page, ready for interaction.
    pub ui: UiState,
}

/// Controller over a project source implementation.
pub struct PageController<S: ProjectSource> {
    source: S,
    config: RenderConfig,
}

impl<S: ProjectSource> PageController<S> {
    pub fn new(source: S, config: RenderConfig) -> Self {
        Self { source, config }
    }

    /// Loads the data and assigns stable ids.
    pub fn load(&self) -> SourceResult<ProjectData> {
        let mut data = self.source.load()?;
        data.assign_ids();
        Ok(data)
    }

    /// Fetches, renders and injects every region of `doc`.
    pub fn run(&self, doc: &mut HostDocument) -> PageOutcome {
        let mut ui = UiState::from_config(&self.config);
        ui.set_modal_available(doc.has_modal());
        let mut mounts = MountReport::default();

        let status = match self.load() {
            Ok(data) => {
                seed_defaults(&mut ui, &data);
                let regions = render_regions(&data, &ui, &self.config);
                mounts.mount(doc, FEATURED_REGION_ID, &regions.featured);
                mounts.mount(doc, SOLO_REGION_ID, &regions.solo);
                mounts.mount(doc, TEAM_REGION_ID, &regions.team);
                info!(
                    "event=projects_loaded module=controller status=ok solo={} team={}",
                    data.solo_projects.len(),
                    data.team_projects.len()
                );
                LoadStatus::Loaded {
                    solo: data.solo_projects.len(),
                    team: data.team_projects.len(),
                }
            }
            Err(err) => {
                let reason = err.to_string();
                error!(
                    "event=projects_load_failed module=controller status=error location={} reason={}",
                    self.source.location(),
                    sanitize_message(&reason, MAX_REASON_LOG_CHARS)
                );
                let message = load_error(&reason).to_html();
                mounts.mount(doc, SOLO_REGION_ID, &message);
                mounts.mount(doc, TEAM_REGION_ID, &message);
                LoadStatus::Failed { reason }
            }
        };

        doc.inject_bindings();
        PageOutcome {
            status,
            rendered_regions: mounts.rendered,
            missing_regions: mounts.missing,
            ui,
        }
    }
}

/// Renders all three regions from one snapshot without touching a page.
pub fn render_regions(data: &ProjectData, ui: &UiState, config: &RenderConfig) -> RenderedRegions {
    let pool = featured_pool(&data.solo_projects, &data.team_projects);
    RenderedRegions {
        featured: render_featured(&pool, config),
        solo: render_solo(&data.solo_projects, ui, config),
        team: render_team(&data.team_projects, ui, config),
    }
}

#[derive(Default)]
struct MountReport {
    rendered: Vec<&'static str>,
    missing: Vec<&'static str>,
}

impl MountReport {
    fn mount(&mut self, doc: &mut HostDocument, id: &'static str, html: &str) {
        if doc.replace_inner(id, html) {
            info!(
                "event=region_rendered module=controller status=ok region={} bytes={}",
                id,
                html.len()
            );
            self.rendered.push(id);
        } else {
            warn!("event=region_missing module=controller status=skipped region={id}");
            self.missing.push(id);
        }
    }
}
