//! Browser-side dispatch of rendered actions.
//!
//! The script mirrors [`crate::ui::state::UiState`] in the page: it listens
//! for clicks on `[data-action]` elements and for the Escape key. The host
//! page's modal close control carries `data-action="close-media"`.

/// Marker attribute identifying the injected bindings script.
pub const BINDINGS_MARKER: &str = "data-portfolio-bindings";

const BINDINGS_JS: &str = include_str!("../../assets/bindings.js");

/// Returns the complete `<script>` tag injected into host pages.
pub fn bindings_script_tag() -> String {
    format!("<script {BINDINGS_MARKER}>\n{BINDINGS_JS}</script>")
}

#[cfg(test)]
mod tests {
    use super::{bindings_script_tag, BINDINGS_MARKER};
    use crate::view::Action;

    #[test]
    fn script_handles_every_action_name() {
        let script = bindings_script_tag();
        assert!(script.contains(BINDINGS_MARKER));
        for action in [
            Action::toggle("x"),
            Action::copy_code("x"),
            Action::show_project("t", "x", 0),
        ] {
            assert!(script.contains(&format!("case \"{}\"", action.name())));
        }
        assert!(script.contains("case \"open-media\""));
        assert!(script.contains("case \"close-media\""));
    }
}
