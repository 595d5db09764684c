//! Team projects region renderer.
//!
//! # Responsibility
//! - Render one expandable card per team project with narrative details,
//!   an optional media gallery and a responsibilities list.
//!
//! # Invariants
//! - Missing responsibilities render an explicit "none listed" message.
//! - Tag chips render only when at least one tag was inferred.

use crate::annotate::tags::infer_tags;
use crate::config::RenderConfig;
use crate::model::project::{Project, Section};
use crate::render::common::{
    details_button, media_gallery, region_class, section_header, small_toggle_button, tag_chips,
};
use crate::ui::state::UiState;
use crate::view::{Element, Node};

/// Mount-point id of the team region.
pub const TEAM_REGION_ID: &str = "teamprojects";

/// Shown when a team project lists no responsibilities.
pub const NO_RESPONSIBILITIES_MESSAGE: &str = "No responsibilities listed in JSON.";

const BOX_CLASS: &str = "rounded-xl border border-gray-800 bg-gray-950/30 p-4";

pub fn media_region_id(idx: usize) -> String {
    format!("teammedia{idx}")
}

/// Seeds the shown-by-default media gallery of every card.
pub fn seed_defaults(ui: &mut UiState, projects: &[Project]) {
    for idx in 0..projects.len() {
        ui.seed(&media_region_id(idx), true);
    }
}

pub fn team_view(projects: &[Project], ui: &UiState, config: &RenderConfig) -> Node {
    let mut nodes = vec![section_header(
        "Team Projects",
        "Professional work: responsibilities, delivery, and impact.",
    )];
    nodes.extend(
        projects
            .iter()
            .enumerate()
            .map(|(idx, project)| team_card(idx, project, ui, config).into()),
    );
    Node::fragment(nodes)
}

/// Renders the team region's full HTML.
pub fn render_team(projects: &[Project], ui: &UiState, config: &RenderConfig) -> String {
    team_view(projects, ui, config).to_html()
}

fn team_card(idx: usize, project: &Project, ui: &UiState, config: &RenderConfig) -> Element {
    let tags = infer_tags(project, config.tag_limit);
    let panel_id = project.id();

    let mut heading = Element::new("div")
        .child(
            Element::new("h3")
                .class("text-2xl font-bold text-gray-100")
                .text(project.title.as_str()),
        )
        .child(
            Element::new("p")
                .class("text-gray-300 mt-2 leading-relaxed")
                .child(Node::multiline(&project.description)),
        );
    if !tags.is_empty() {
        heading = heading.child(tag_chips(&tags));
    }

    let mut panel = Element::new("div")
        .id(panel_id)
        .class(region_class(ui, panel_id, "mt-5 space-y-4"));
    if !project.details.is_empty() {
        panel = panel.child(
            Element::new("div")
                .class(format!("{BOX_CLASS} space-y-2"))
                .attr("data-kind", "details")
                .children(
                    project
                        .details
                        .iter()
                        .map(|detail| Element::new("p").class("text-gray-300").text(detail.as_str())),
                ),
        );
    }
    if !project.media.is_empty() {
        let region_id = media_region_id(idx);
        panel = panel.child(
            Element::new("div")
                .class(BOX_CLASS)
                .attr("data-kind", "media")
                .child(
                    Element::new("div")
                        .class("flex items-center justify-between")
                        .child(
                            Element::new("p")
                                .class("text-gray-100 font-semibold")
                                .text("Media"),
                        )
                        .child(small_toggle_button(&region_id, "Toggle")),
                )
                .child(media_gallery(ui, &region_id, &project.media, &project.title)),
        );
    }
    panel = panel.child(responsibilities_box(&project.responsibilities));

    Element::new("article")
        .class("mb-6 rounded-2xl border border-gray-800 bg-gray-900/40 backdrop-blur-lg shadow-glow p-6")
        .attr("data-section", Section::Team.tab())
        .child(
            Element::new("div")
                .class("flex items-start justify-between gap-4")
                .child(heading)
                .child(details_button(panel_id)),
        )
        .child(panel)
}

fn responsibilities_box(responsibilities: &[String]) -> Element {
    let body: Node = if responsibilities.is_empty() {
        Element::new("p")
            .class("text-gray-400 text-sm")
            .text(NO_RESPONSIBILITIES_MESSAGE)
            .into()
    } else {
        Element::new("ul")
            .class("list-disc list-inside text-gray-300 space-y-1")
            .children(
                responsibilities
                    .iter()
                    .map(|item| Element::new("li").text(item.as_str())),
            )
            .into()
    };

    Element::new("div")
        .class(BOX_CLASS)
        .attr("data-kind", "responsibilities")
        .child(
            Element::new("p")
                .class("text-gray-100 font-semibold mb-2")
                .text("Key Responsibilities"),
        )
        .child(body)
}

#[cfg(test)]
mod tests {
    use super::{render_team, NO_RESPONSIBILITIES_MESSAGE};
    use crate::config::RenderConfig;
    use crate::model::project::Project;
    use crate::ui::state::UiState;

    fn team_project(description: &str) -> Project {
        let mut project = Project::new("Factory", description);
        project.id = Some("team_factory".to_string());
        project
    }

    #[test]
    fn missing_responsibilities_show_explicit_message() {
        let html = render_team(
            &[team_project("x")],
            &UiState::new(),
            &RenderConfig::default(),
        );
        assert!(html.contains(NO_RESPONSIBILITIES_MESSAGE));
        assert!(!html.contains("<ul"));
    }

    #[test]
    fn responsibilities_and_details_render_in_order() {
        let mut project = team_project("x");
        project.details = vec!["First".to_string(), "Second".to_string()];
        project.responsibilities = vec!["Lead".to_string(), "Ship".to_string()];
        let html = render_team(&[project], &UiState::new(), &RenderConfig::default());
        assert!(html.contains("<li>Lead</li><li>Ship</li>"));
        let first = html.find("First").expect("first detail");
        let second = html.find("Second").expect("second detail");
        assert!(first < second);
        assert!(!html.contains(NO_RESPONSIBILITIES_MESSAGE));
    }

    #[test]
    fn tags_are_omitted_when_none_inferred() {
        let html = render_team(
            &[team_project("plain text")],
            &UiState::new(),
            &RenderConfig::default(),
        );
        assert!(!html.contains("rounded-full"));

        let html = render_team(
            &[team_project("firebase backend")],
            &UiState::new(),
            &RenderConfig::default(),
        );
        assert!(html.contains(">Firebase</span>"));
    }
}
