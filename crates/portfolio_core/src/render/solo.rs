//! Solo projects region renderer.
//!
//! # Responsibility
//! - Render one expandable card per solo project.
//! - Nest independently toggleable Description, Media and Sample Code sections
//!   inside each card's details panel.
//!
//! # Invariants
//! - The Media section exists only when the project has media.
//! - The Sample Code section exists only when the project has code blocks.
//! - Code text is escaped for literal display.

use crate::annotate::tags::infer_tags;
use crate::config::RenderConfig;
use crate::model::project::{CodeBlock, Project, Section};
use crate::render::common::{
    details_button, media_gallery, region_class, section_header, small_toggle_button,
    tag_chips, thumbnail_or_placeholder,
};
use crate::ui::state::UiState;
use crate::view::{Action, Element, Node};

/// Mount-point id of the solo region.
pub const SOLO_REGION_ID: &str = "projects";

const SECTION_CLASS: &str = "rounded-xl border border-gray-800 bg-gray-950/30 p-4";
const THUMB_CLASS: &str = "w-full h-44 md:h-full object-cover";
const PLACEHOLDER_CLASS: &str = "w-full h-44 md:h-full";

pub fn description_region_id(idx: usize) -> String {
    format!("desc{idx}")
}

pub fn media_region_id(idx: usize) -> String {
    format!("media{idx}")
}

pub fn code_section_region_id(idx: usize) -> String {
    format!("codeBlock{idx}")
}

pub fn code_block_region_id(idx: usize, code_idx: usize) -> String {
    format!("code_{idx}_{code_idx}")
}

/// Seeds the shown-by-default section regions of every card.
///
/// Project panels and individual code blocks stay hidden.
pub fn seed_defaults(ui: &mut UiState, projects: &[Project]) {
    for idx in 0..projects.len() {
        ui.seed(&description_region_id(idx), true);
        ui.seed(&media_region_id(idx), true);
        ui.seed(&code_section_region_id(idx), true);
    }
}

pub fn solo_view(projects: &[Project], ui: &UiState, config: &RenderConfig) -> Node {
    let mut nodes = vec![section_header(
        "Solo Projects",
        "Personal projects showcasing gameplay, tools, and systems design.",
    )];
    nodes.extend(
        projects
            .iter()
            .enumerate()
            .map(|(idx, project)| solo_card(idx, project, ui, config).into()),
    );
    Node::fragment(nodes)
}

/// Renders the solo region's full HTML.
pub fn render_solo(projects: &[Project], ui: &UiState, config: &RenderConfig) -> String {
    solo_view(projects, ui, config).to_html()
}

fn solo_card(idx: usize, project: &Project, ui: &UiState, config: &RenderConfig) -> Element {
    let tags = infer_tags(project, config.tag_limit);
    let panel_id = project.id();

    let mut panel = Element::new("div")
        .id(panel_id)
        .class(region_class(ui, panel_id, "mt-6 space-y-6"))
        .child(description_section(idx, project, ui));
    if !project.media.is_empty() {
        panel = panel.child(media_section(idx, project, ui));
    }
    if !project.code_blocks.is_empty() {
        panel = panel.child(code_section(idx, &project.code_blocks, ui));
    }

    let summary = Element::new("div")
        .class("flex flex-col md:flex-row md:items-start md:justify-between gap-4")
        .child(
            Element::new("div")
                .child(
                    Element::new("h3")
                        .class("text-2xl font-bold text-gray-100")
                        .text(project.title.as_str()),
                )
                .child(
                    Element::new("p")
                        .class("text-gray-400 mt-2")
                        .text(project.summary()),
                )
                .child(tag_chips(&tags)),
        )
        .child(
            Element::new("div")
                .class("flex gap-2")
                .child(details_button(panel_id)),
        );

    Element::new("article")
        .class("mb-6 rounded-2xl border border-gray-800 bg-gray-900/40 backdrop-blur-lg shadow-glow overflow-hidden")
        .attr("data-section", Section::Solo.tab())
        .child(
            Element::new("div")
                .class("grid md:grid-cols-[220px_1fr] gap-0")
                .child(
                    Element::new("div")
                        .class("border-b md:border-b-0 md:border-r border-gray-800 bg-gray-950/40")
                        .child(thumbnail_or_placeholder(
                            project.thumbnail(),
                            &project.title,
                            THUMB_CLASS,
                            PLACEHOLDER_CLASS,
                        )),
                )
                .child(Element::new("div").class("p-6").child(summary).child(panel)),
        )
}

fn section_heading(title: &str, target: &str, button_label: &str) -> Element {
    Element::new("div")
        .class("flex items-center justify-between")
        .child(
            Element::new("h4")
                .class("font-semibold text-gray-100")
                .text(title),
        )
        .child(small_toggle_button(target, button_label))
}

fn description_section(idx: usize, project: &Project, ui: &UiState) -> Element {
    let region_id = description_region_id(idx);
    Element::new("section")
        .class(SECTION_CLASS)
        .attr("data-kind", "description")
        .child(section_heading("Description", &region_id, "Toggle"))
        .child(
            Element::new("div")
                .id(region_id.as_str())
                .class(region_class(ui, &region_id, "mt-3"))
                .child(
                    Element::new("p")
                        .class("text-gray-300 leading-relaxed")
                        .child(Node::multiline(&project.description)),
                ),
        )
}

fn media_section(idx: usize, project: &Project, ui: &UiState) -> Element {
    let region_id = media_region_id(idx);
    Element::new("section")
        .class(SECTION_CLASS)
        .attr("data-kind", "media")
        .child(section_heading("Media", &region_id, "Toggle"))
        .child(media_gallery(ui, &region_id, &project.media, &project.title))
}

fn code_section(idx: usize, blocks: &[CodeBlock], ui: &UiState) -> Element {
    let region_id = code_section_region_id(idx);
    Element::new("section")
        .class(SECTION_CLASS)
        .attr("data-kind", "code")
        .child(section_heading("Sample Code", &region_id, "Toggle All"))
        .child(
            Element::new("div")
                .id(region_id.as_str())
                .class(region_class(ui, &region_id, "mt-4 space-y-4"))
                .children(
                    blocks
                        .iter()
                        .enumerate()
                        .map(|(code_idx, block)| code_block(idx, code_idx, block, ui)),
                ),
        )
}

fn code_block(idx: usize, code_idx: usize, block: &CodeBlock, ui: &UiState) -> Element {
    let code_id = code_block_region_id(idx, code_idx);
    Element::new("div")
        .class("rounded-xl border border-gray-800 bg-black/40 overflow-hidden")
        .child(
            Element::new("div")
                .class("flex items-center justify-between px-3 py-2 border-b border-gray-800")
                .child(
                    Element::new("p")
                        .class("text-sm font-semibold text-gray-100")
                        .text(block.label.as_str()),
                )
                .child(
                    Element::new("div")
                        .class("flex gap-2")
                        .child(small_toggle_button(&code_id, "Toggle"))
                        .child(
                            Element::new("button")
                                .class("text-xs px-3 py-1 rounded-lg bg-blue-600 hover:bg-blue-500 text-white")
                                .on_click(Action::copy_code(code_id.as_str()))
                                .text("Copy"),
                        ),
                ),
        )
        .child(
            Element::new("pre")
                .id(code_id.as_str())
                .class(region_class(
                    ui,
                    &code_id,
                    "p-4 overflow-x-auto text-sm text-green-200 font-mono whitespace-pre",
                ))
                .text(block.code.as_str()),
        )
}

#[cfg(test)]
mod tests {
    use super::{code_block_region_id, render_solo, seed_defaults, solo_view};
    use crate::config::RenderConfig;
    use crate::model::project::{CodeBlock, Media, Project};
    use crate::ui::state::UiState;

    fn project_with_id(id: &str, title: &str, description: &str) -> Project {
        let mut project = Project::new(title, description);
        project.id = Some(id.to_string());
        project
    }

    #[test]
    fn code_is_escaped_and_code_blocks_start_hidden() {
        let mut project = project_with_id("p1", "Engine", "x");
        project.code_blocks = vec![CodeBlock::new("Generic", "List<int> a = b > c;")];
        let projects = vec![project];
        let mut ui = UiState::new();
        seed_defaults(&mut ui, &projects);

        let view = solo_view(&projects, &ui, &RenderConfig::default());
        let pre = view
            .find_by_id(&code_block_region_id(0, 0))
            .expect("code block should render");
        assert!(pre.get_attr("class").unwrap_or("").starts_with("hidden "));

        let html = view.to_html();
        assert!(html.contains("List&lt;int&gt; a = b &gt; c;"));
        assert!(html.contains("data-action=\"copy-code\" data-target=\"code_0_0\""));
    }

    #[test]
    fn description_keeps_line_breaks_and_region_is_shown_after_seeding() {
        let projects = vec![project_with_id("p1", "T", "line one\nline two")];
        let mut ui = UiState::new();
        seed_defaults(&mut ui, &projects);
        let view = solo_view(&projects, &ui, &RenderConfig::default());

        let desc = view.find_by_id("desc0").expect("description region");
        assert_eq!(desc.get_attr("class"), Some("mt-3"));
        assert!(view.to_html().contains("line one<br>line two"));

        let panel = view.find_by_id("p1").expect("details panel");
        assert!(panel.get_attr("class").unwrap_or("").starts_with("hidden"));
    }

    #[test]
    fn media_section_lists_every_entry() {
        let mut project = project_with_id("p1", "T", "x");
        project.media = vec![Media::new("a.png").with_label("A"), Media::new("b.mp4")];
        let html = render_solo(&[project], &UiState::new(), &RenderConfig::default());
        assert!(html.contains("data-kind=\"media\""));
        assert!(html.contains("id=\"media0\""));
        assert!(html.contains("data-url=\"b.mp4\""));
        assert!(html.contains("data-title=\"T\""));
        assert!(html.contains("data-title=\"A\""));
    }
}
