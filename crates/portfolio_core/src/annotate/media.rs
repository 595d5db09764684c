//! Media classification and embeddable markup.
//!
//! # Responsibility
//! - Decide whether a media entry is an image or a video.
//! - Build thumbnail and lightbox markup for either kind.
//!
//! # Invariants
//! - An explicit media type always wins over URL inspection.
//! - Without an explicit type, only `.mp4`/`.webm` suffixes yield video.
//! - The `<source>` type follows the URL suffix (`video/webm` for `.webm`).

use crate::model::project::{Media, MediaKind};
use crate::ui::state::MediaDescriptor;
use crate::view::{Element, Node};

const VIDEO_SUFFIXES: &[&str] = &[".mp4", ".webm"];

/// CSS class used for gallery and featured thumbnails.
pub const THUMB_CLASS: &str = "w-full h-40 object-cover border-b border-gray-800";

/// Classifies one media entry.
pub fn resolve_kind(media: &Media) -> MediaKind {
    if let Some(kind) = media.kind {
        return kind;
    }
    if is_video_url(&media.url) {
        MediaKind::Video
    } else {
        MediaKind::Image
    }
}

/// Returns whether `url` ends in a recognized video suffix (case-insensitive).
pub fn is_video_url(url: &str) -> bool {
    let lowered = url.to_ascii_lowercase();
    VIDEO_SUFFIXES.iter().any(|suffix| lowered.ends_with(suffix))
}

/// MIME type declared on the single `<source>` element.
pub fn video_source_type(url: &str) -> &'static str {
    if url.to_ascii_lowercase().ends_with(".webm") {
        "video/webm"
    } else {
        "video/mp4"
    }
}

/// Builds the lightbox descriptor for a media entry shown under `fallback_title`.
pub fn descriptor_for(media: &Media, fallback_title: &str) -> MediaDescriptor {
    let title = if media.label.is_empty() {
        fallback_title
    } else {
        media.label.as_str()
    };
    MediaDescriptor::new(title, media.url.as_str(), resolve_kind(media))
}

/// Inline thumbnail: muted looping autoplay video, or a plain image.
pub fn render_thumbnail(media: &Media, class: &str) -> Node {
    match resolve_kind(media) {
        MediaKind::Video => Element::new("video")
            .class(class)
            .flag("autoplay")
            .flag("loop")
            .flag("muted")
            .flag("playsinline")
            .attr("preload", "metadata")
            .child(source_element(&media.url))
            .into(),
        MediaKind::Image => Element::new("img")
            .attr("src", media.url.as_str())
            .class(class)
            .attr("alt", media.label.as_str())
            .into(),
    }
}

/// Lightbox body: video with controls, or a full-width image.
pub fn render_modal_body(media: &MediaDescriptor) -> Node {
    match media.kind {
        MediaKind::Video => Element::new("video")
            .flag("controls")
            .flag("autoplay")
            .class("w-full rounded-xl")
            .child(source_element(&media.url))
            .into(),
        MediaKind::Image => Element::new("img")
            .attr("src", media.url.as_str())
            .class("w-full rounded-xl")
            .attr("alt", media.title.as_str())
            .into(),
    }
}

fn source_element(url: &str) -> Element {
    Element::new("source")
        .attr("src", url)
        .attr("type", video_source_type(url))
}

#[cfg(test)]
mod tests {
    use super::{
        descriptor_for, render_modal_body, render_thumbnail, resolve_kind, video_source_type,
        THUMB_CLASS,
    };
    use crate::model::project::{Media, MediaKind};

    #[test]
    fn mp4_without_type_is_video_with_autoplay_muted_loop() {
        let media = Media::new("clip.mp4");
        assert_eq!(resolve_kind(&media), MediaKind::Video);

        let html = render_thumbnail(&media, THUMB_CLASS).to_html();
        assert!(html.starts_with("<video "));
        assert!(html.contains(" autoplay"));
        assert!(html.contains(" loop"));
        assert!(html.contains(" muted"));
        assert!(html.contains(" playsinline"));
        assert!(html.contains("<source src=\"clip.mp4\" type=\"video/mp4\">"));
    }

    #[test]
    fn explicit_type_overrides_suffix() {
        let media = Media::new("poster.mp4").with_kind(MediaKind::Image);
        assert_eq!(resolve_kind(&media), MediaKind::Image);
        let media = Media::new("stream").with_kind(MediaKind::Video);
        assert_eq!(resolve_kind(&media), MediaKind::Video);
    }

    #[test]
    fn suffix_check_is_case_insensitive_and_defaults_to_image() {
        assert_eq!(resolve_kind(&Media::new("A.WEBM")), MediaKind::Video);
        assert_eq!(resolve_kind(&Media::new("shot.png")), MediaKind::Image);
        assert_eq!(resolve_kind(&Media::new("clip.mp4?x=1")), MediaKind::Image);
    }

    #[test]
    fn webm_source_is_declared_as_webm() {
        assert_eq!(video_source_type("a.webm"), "video/webm");
        assert_eq!(video_source_type("a.mp4"), "video/mp4");
    }

    #[test]
    fn image_thumbnail_uses_label_as_alt() {
        let media = Media::new("shot.png").with_label("Main menu");
        assert_eq!(
            render_thumbnail(&media, "c").to_html(),
            "<img src=\"shot.png\" class=\"c\" alt=\"Main menu\">"
        );
    }

    #[test]
    fn descriptor_falls_back_to_project_title() {
        let unlabeled = descriptor_for(&Media::new("a.png"), "Maze VR");
        assert_eq!(unlabeled.title, "Maze VR");
        let labeled = descriptor_for(&Media::new("a.png").with_label("Level 1"), "Maze VR");
        assert_eq!(labeled.title, "Level 1");
    }

    #[test]
    fn modal_video_has_controls_and_autoplay() {
        let descriptor = descriptor_for(&Media::new("clip.webm"), "Demo");
        let html = render_modal_body(&descriptor).to_html();
        assert!(html.starts_with("<video controls autoplay"));
        assert!(html.contains("type=\"video/webm\""));
    }
}
