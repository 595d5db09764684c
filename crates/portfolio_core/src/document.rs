//! Host page mount points.
//!
//! # Responsibility
//! - Locate elements by `id` in the hosting HTML page.
//! - Replace a mount point's contents and inject the page bindings.
//!
//! # Invariants
//! - Replacing a missing mount point is a no-op reported as `false`.
//! - Only the inner HTML of a mount point changes; its tag and attributes are
//!   preserved.
//! - The bindings script is injected at most once.

use crate::ui::bindings::{bindings_script_tag, BINDINGS_MARKER};
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::ops::Range;
use std::path::Path;

/// Ids of the lightbox elements the page may provide.
pub const MODAL_ELEMENT_IDS: [&str; 3] = ["mediaModal", "mediaModalTitle", "mediaModalBody"];

#[derive(Debug)]
pub enum DocumentError {
    Io {
        path: String,
        error: std::io::Error,
    },
}

impl Display for DocumentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, error } => write!(f, "host page I/O failed for `{path}`: {error}"),
        }
    }
}

impl Error for DocumentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { error, .. } => Some(error),
        }
    }
}

/// Mutable HTML host page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostDocument {
    html: String,
}

impl HostDocument {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        std::fs::read_to_string(path)
            .map(Self::new)
            .map_err(|error| DocumentError::Io {
                path: path.display().to_string(),
                error,
            })
    }

    pub fn save(&self, path: &Path) -> Result<(), DocumentError> {
        std::fs::write(path, &self.html).map_err(|error| DocumentError::Io {
            path: path.display().to_string(),
            error,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.html
    }

    pub fn has_mount(&self, id: &str) -> bool {
        self.inner_range(id).is_some()
    }

    /// Whether all lightbox elements are present.
    pub fn has_modal(&self) -> bool {
        MODAL_ELEMENT_IDS.iter().all(|id| self.has_mount(id))
    }

    /// Current inner HTML of a mount point.
    pub fn inner_html(&self, id: &str) -> Option<&str> {
        self.inner_range(id).map(|range| &self.html[range])
    }

    /// Replaces the inner HTML of mount point `id`.
    ///
    /// Returns `false` when the mount point does not exist.
    pub fn replace_inner(&mut self, id: &str, inner: &str) -> bool {
        match self.inner_range(id) {
            Some(range) => {
                self.html.replace_range(range, inner);
                true
            }
            None => false,
        }
    }

    /// Appends the bindings script before `</body>` (or at the end).
    pub fn inject_bindings(&mut self) {
        if self.html.contains(BINDINGS_MARKER) {
            return;
        }
        let script = bindings_script_tag();
        match self.html.to_ascii_lowercase().rfind("</body>") {
            Some(position) => self.html.insert_str(position, &script),
            None => self.html.push_str(&script),
        }
    }

    /// Byte range between the opening and the matching closing tag of `id`.
    fn inner_range(&self, id: &str) -> Option<Range<usize>> {
        let value = regex::escape(id);
        // Attribute name is case-insensitive; the value may be unquoted.
        let open_re = Regex::new(&format!(
            r#"<([A-Za-z][A-Za-z0-9-]*)\b[^>]*\s(?i:id)\s*=\s*(?:"{value}"[^>]*|'{value}'[^>]*|{value}(?:[\s/][^>]*)?)>"#
        ))
        .ok()?;
        let open = open_re.captures(&self.html)?;
        let whole = open.get(0)?;
        if whole.as_str().ends_with("/>") {
            return None;
        }
        let tag = open.get(1)?.as_str();
        let start = whole.end();

        let tag_re = Regex::new(&format!(r"(?i)<(/?){}\b[^>]*>", regex::escape(tag))).ok()?;
        let mut depth = 1usize;
        for caps in tag_re.captures_iter(&self.html[start..]) {
            let matched = caps.get(0)?;
            let closing = caps.get(1).is_some_and(|slash| !slash.as_str().is_empty());
            if closing {
                depth -= 1;
                if depth == 0 {
                    return Some(start..start + matched.start());
                }
            } else if !matched.as_str().ends_with("/>") {
                depth += 1;
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::HostDocument;
    use crate::ui::bindings::BINDINGS_MARKER;

    const PAGE: &str = r#"<html><body>
<section id="featured" class="grid"><div>old</div></section>
<div id="projects"><div><div>nested</div></div></div>
<div data-id="teamprojects"></div>
</body></html>"#;

    #[test]
    fn replace_inner_keeps_outer_tag_and_handles_nesting() {
        let mut doc = HostDocument::new(PAGE);
        assert!(doc.replace_inner("projects", "<p>new</p>"));
        assert!(doc.as_str().contains(r#"<div id="projects"><p>new</p></div>"#));
        assert!(doc
            .as_str()
            .contains(r#"<div data-id="teamprojects"></div>"#));
    }

    #[test]
    fn uppercase_and_unquoted_id_attributes_are_found() {
        let mut doc = HostDocument::new(
            "<body><DIV ID=\"projects\">a</DIV><div class=x id=teamprojects>b</div><div id=teamprojectsX>c</div></body>",
        );
        assert!(doc.replace_inner("projects", "solo"));
        assert!(doc.replace_inner("teamprojects", "team"));
        assert_eq!(doc.inner_html("projects"), Some("solo"));
        assert_eq!(doc.inner_html("teamprojects"), Some("team"));
        assert!(doc.as_str().contains("<div id=teamprojectsX>c</div>"));
    }

    #[test]
    fn missing_mount_point_is_a_noop() {
        let mut doc = HostDocument::new(PAGE);
        assert!(!doc.has_mount("teamprojects"));
        assert!(!doc.replace_inner("teamprojects", "x"));
        assert_eq!(doc.as_str(), PAGE);
    }

    #[test]
    fn inner_html_reads_current_contents() {
        let doc = HostDocument::new(PAGE);
        assert_eq!(doc.inner_html("featured"), Some("<div>old</div>"));
        assert!(!doc.has_modal());
    }

    #[test]
    fn bindings_are_injected_once_before_body_close() {
        let mut doc = HostDocument::new(PAGE);
        doc.inject_bindings();
        doc.inject_bindings();
        let html = doc.as_str();
        assert_eq!(html.matches(BINDINGS_MARKER).count(), 1);
        assert!(html.find(BINDINGS_MARKER).unwrap() < html.find("</body>").unwrap());
    }
}
