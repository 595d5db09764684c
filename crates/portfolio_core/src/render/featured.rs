//! Featured region renderer.
//!
//! # Responsibility
//! - Pick a small, priority-ordered subset of the combined solo+team pool.
//! - Render one highlight card per pick with a "View details" action.
//!
//! # Invariants
//! - Prioritized titles come first in list order; all other projects keep
//!   their input order (stable ordering).
//! - At most `featured_limit` cards are rendered, never more than
//!   `DEFAULT_FEATURED_LIMIT`.

use crate::annotate::tags::infer_tags;
use crate::config::{RenderConfig, DEFAULT_FEATURED_LIMIT};
use crate::model::project::{Project, Section};
use crate::render::common::{tag_chips, thumbnail_or_placeholder};
use crate::view::{Action, Element, Node};

/// Mount-point id of the featured region.
pub const FEATURED_REGION_ID: &str = "featured";

const CARD_CLASS: &str =
    "rounded-2xl border border-gray-800 bg-gray-950/40 overflow-hidden hover:shadow-glow transition";
const THUMB_CLASS: &str = "w-full h-40 object-cover border-b border-gray-800";
const PLACEHOLDER_CLASS: &str = "h-40 border-b border-gray-800";

/// One project of the featured pool together with its section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeaturedCandidate<'a> {
    pub project: &'a Project,
    pub section: Section,
}

/// Builds the combined pool: all solo projects, then all team projects.
pub fn featured_pool<'a>(solo: &'a [Project], team: &'a [Project]) -> Vec<FeaturedCandidate<'a>> {
    solo.iter()
        .map(|project| FeaturedCandidate {
            project,
            section: Section::Solo,
        })
        .chain(team.iter().map(|project| FeaturedCandidate {
            project,
            section: Section::Team,
        }))
        .collect()
}

/// Orders the pool by title priority and keeps the first `limit` entries.
pub fn select_featured<'a>(
    pool: &[FeaturedCandidate<'a>],
    priority: &[String],
    limit: usize,
) -> Vec<FeaturedCandidate<'a>> {
    let rank = |candidate: &FeaturedCandidate<'_>| {
        priority
            .iter()
            .position(|title| *title == candidate.project.title)
            .unwrap_or(usize::MAX)
    };
    let mut sorted = pool.to_vec();
    sorted.sort_by_key(rank);
    sorted.truncate(limit.min(DEFAULT_FEATURED_LIMIT));
    sorted
}

pub fn featured_view(pool: &[FeaturedCandidate<'_>], config: &RenderConfig) -> Node {
    let picked = select_featured(pool, &config.featured_priority, config.featured_limit);
    Node::fragment(
        picked
            .iter()
            .map(|candidate| featured_card(candidate, config).into()),
    )
}

/// Renders the featured region's full HTML.
pub fn render_featured(pool: &[FeaturedCandidate<'_>], config: &RenderConfig) -> String {
    featured_view(pool, config).to_html()
}

fn featured_card(candidate: &FeaturedCandidate<'_>, config: &RenderConfig) -> Element {
    let project = candidate.project;
    let tags = infer_tags(project, config.tag_limit);

    Element::new("div")
        .class(CARD_CLASS)
        .child(thumbnail_or_placeholder(
            project.thumbnail(),
            &project.title,
            THUMB_CLASS,
            PLACEHOLDER_CLASS,
        ))
        .child(
            Element::new("div")
                .class("p-4")
                .child(
                    Element::new("p")
                        .class("font-semibold text-gray-100")
                        .text(project.title.as_str()),
                )
                .child(
                    Element::new("p")
                        .class("text-sm text-gray-400 mt-1 line-clamp-3")
                        .text(project.summary()),
                )
                .child(tag_chips(&tags))
                .child(
                    Element::new("div").class("mt-4").child(
                        Element::new("button")
                            .class("px-3 py-2 rounded-xl bg-blue-600 hover:bg-blue-500 text-white text-sm transition")
                            .on_click(Action::show_project(
                                candidate.section.tab(),
                                project.id(),
                                config.reveal_delay_ms,
                            ))
                            .text("View details"),
                    ),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::{featured_pool, render_featured, select_featured};
    use crate::config::{RenderConfig, DEFAULT_FEATURED_LIMIT};
    use crate::model::project::{Project, Section};

    fn titled(titles: &[&str]) -> Vec<Project> {
        titles
            .iter()
            .map(|title| {
                let mut project = Project::new(*title, "");
                project.id = Some(title.to_lowercase());
                project
            })
            .collect()
    }

    #[test]
    fn priority_titles_lead_and_others_keep_input_order() {
        let solo = titled(&["A", "Play & Learn", "B"]);
        let team = titled(&["C", "Bimbo: Professional Driver Workshop"]);
        let pool = featured_pool(&solo, &team);
        let config = RenderConfig::default();

        let picked = select_featured(&pool, &config.featured_priority, 5);
        let titles: Vec<&str> = picked.iter().map(|c| c.project.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Play & Learn", "Bimbo: Professional Driver Workshop", "A", "B", "C"]
        );
        assert_eq!(picked[1].section, Section::Team);
    }

    #[test]
    fn selection_is_capped_at_limit() {
        let solo = titled(&["A", "B", "C", "D"]);
        let pool = featured_pool(&solo, &[]);
        assert_eq!(select_featured(&pool, &[], 3).len(), 3);
    }

    #[test]
    fn oversized_limit_still_caps_at_three() {
        let solo = titled(&["A", "B", "C", "D", "E", "F"]);
        let pool = featured_pool(&solo, &[]);
        assert_eq!(select_featured(&pool, &[], 10).len(), 3);
    }

    #[test]
    fn view_details_targets_section_tab() {
        let team = titled(&["Team X"]);
        let pool = featured_pool(&[], &team);
        let html = render_featured(&pool, &RenderConfig::default());
        assert!(html.contains("data-action=\"show-project\""));
        assert!(html.contains("data-tab=\"teamprojects\""));
        assert!(html.contains("data-target=\"team x\""));
        assert!(html.contains("data-delay=\"80\""));
        assert!(html.contains("data-placeholder=\"media\""));
    }
}
