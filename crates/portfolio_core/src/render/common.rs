//! Building blocks shared by the fragment renderers.

use crate::annotate::media::{descriptor_for, render_thumbnail, resolve_kind, THUMB_CLASS};
use crate::model::project::Media;
use crate::ui::state::{MediaDescriptor, UiState};
use crate::view::{Action, Element, Node};

const TAG_CHIP_CLASS: &str =
    "text-xs px-2 py-1 rounded-full border border-gray-800 bg-gray-950/40 text-gray-200";
const SMALL_BUTTON_CLASS: &str =
    "text-xs px-3 py-1 rounded-lg bg-gray-800 hover:bg-gray-700 border border-gray-700";
const PRIMARY_BUTTON_CLASS: &str =
    "px-4 py-2 rounded-xl bg-blue-600 hover:bg-blue-500 text-white text-sm transition";
const HEADER_CLASS: &str =
    "mb-6 rounded-2xl border border-gray-800 bg-gray-900/40 backdrop-blur-lg shadow-glow p-6";

/// Prefixes `base` with `hidden` unless the region is visible.
pub fn region_class(ui: &UiState, id: &str, base: &str) -> String {
    if ui.is_visible(id) {
        base.to_string()
    } else {
        format!("hidden {base}")
    }
}

/// Region heading block rendered above the cards.
pub fn section_header(title: &str, blurb: &str) -> Node {
    Element::new("div")
        .class(HEADER_CLASS)
        .child(
            Element::new("h2")
                .class("text-2xl font-bold text-blue-300")
                .text(title),
        )
        .child(Element::new("p").class("text-gray-300 mt-2").text(blurb))
        .into()
}

pub fn tag_chips(tags: &[&str]) -> Node {
    Element::new("div")
        .class("mt-3 flex flex-wrap gap-2")
        .children(
            tags.iter()
                .map(|tag| Element::new("span").class(TAG_CHIP_CLASS).text(*tag)),
        )
        .into()
}

/// Primary "Details" button toggling a project's panel.
pub fn details_button(target: &str) -> Element {
    Element::new("button")
        .class(PRIMARY_BUTTON_CLASS)
        .on_click(Action::toggle(target))
        .text("Details")
}

pub fn small_toggle_button(target: &str, label: &str) -> Element {
    Element::new("button")
        .class(SMALL_BUTTON_CLASS)
        .on_click(Action::toggle(target))
        .text(label)
}

/// Thumbnail wrapped in a lightbox button titled after the project, or a
/// placeholder block.
pub fn thumbnail_or_placeholder(
    media: Option<&Media>,
    title: &str,
    thumb_class: &str,
    placeholder_class: &str,
) -> Node {
    match media {
        Some(media) => Element::new("button")
            .class("w-full")
            .on_click(Action::OpenMedia(MediaDescriptor::new(
                title,
                media.url.as_str(),
                resolve_kind(media),
            )))
            .child(render_thumbnail(media, thumb_class))
            .into(),
        None => placeholder(placeholder_class),
    }
}

pub fn placeholder(class: &str) -> Node {
    Element::new("div")
        .class(format!("{class} bg-gradient-to-br from-gray-900 to-gray-950"))
        .attr("data-placeholder", "media")
        .into()
}

/// Grid of clickable media tiles inside toggle region `region_id`.
pub fn media_gallery(ui: &UiState, region_id: &str, media: &[Media], title: &str) -> Element {
    Element::new("div")
        .id(region_id)
        .class(region_class(ui, region_id, "mt-4 grid md:grid-cols-2 gap-4"))
        .children(media.iter().map(|item| media_tile(item, title)))
}

fn media_tile(media: &Media, title: &str) -> Element {
    Element::new("button")
        .class("text-left rounded-xl border border-gray-800 bg-gray-900/30 hover:bg-gray-900/60 overflow-hidden transition")
        .on_click(Action::OpenMedia(descriptor_for(media, title)))
        .child(render_thumbnail(media, THUMB_CLASS))
        .child(
            Element::new("div")
                .class("p-3")
                .child(
                    Element::new("p")
                        .class("text-sm font-semibold text-gray-100")
                        .text(media.label.as_str()),
                )
                .child(
                    Element::new("p")
                        .class("text-xs text-gray-400 mt-1")
                        .text("Click to expand"),
                ),
        )
}

/// Inline error shown in place of a region when loading fails.
pub fn load_error(reason: &str) -> Node {
    Element::new("p")
        .class("text-red-400")
        .text(format!("Could not load project data: {reason}"))
        .into()
}

#[cfg(test)]
mod tests {
    use super::{load_error, region_class, thumbnail_or_placeholder};
    use crate::ui::state::UiState;

    #[test]
    fn region_class_prefixes_hidden_for_hidden_regions() {
        let mut ui = UiState::new();
        assert_eq!(region_class(&ui, "x", "mt-3"), "hidden mt-3");
        ui.set_visible("x", true);
        assert_eq!(region_class(&ui, "x", "mt-3"), "mt-3");
    }

    #[test]
    fn missing_media_renders_placeholder_block() {
        let html = thumbnail_or_placeholder(None, "t", "thumb", "h-40").to_html();
        assert!(html.contains("data-placeholder=\"media\""));
        assert!(!html.contains("<img"));
        assert!(!html.contains("<video"));
    }

    #[test]
    fn load_error_escapes_reason() {
        let html = load_error("bad <json>").to_html();
        assert_eq!(
            html,
            "<p class=\"text-red-400\">Could not load project data: bad &lt;json&gt;</p>"
        );
    }
}
