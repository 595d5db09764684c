//! Keyword-based tag inference.
//!
//! # Responsibility
//! - Derive short category labels from a project's free-text fields.
//!
//! # Invariants
//! - Output is deduplicated and ordered by checklist position.
//! - Output never exceeds the requested limit nor `DEFAULT_TAG_LIMIT`.
//! - Matching is case-insensitive substring search; false positives such as
//!   `vr` inside another word are accepted.

use crate::model::project::Project;

/// Default maximum number of tags shown per project.
pub const DEFAULT_TAG_LIMIT: usize = 5;

/// One checklist entry: any needle present in the text yields `label`.
struct TagRule {
    needles: &'static [&'static str],
    label: &'static str,
}

const TAG_RULES: &[TagRule] = &[
    TagRule {
        needles: &["vr"],
        label: "VR",
    },
    TagRule {
        needles: &["cave"],
        label: "CAVE",
    },
    TagRule {
        needles: &["addressable"],
        label: "Addressables",
    },
    TagRule {
        needles: &["behavior tree", "behaviour tree"],
        label: "Behavior Trees",
    },
    TagRule {
        needles: &["firebase"],
        label: "Firebase",
    },
    TagRule {
        needles: &["mobile", "android", "ios", "app store", "google play"],
        label: "Mobile",
    },
    TagRule {
        needles: &["timeline"],
        label: "Timeline",
    },
    TagRule {
        needles: &["pathfinding", "a*"],
        label: "Pathfinding",
    },
    TagRule {
        needles: &[" ai "],
        label: "AI",
    },
    TagRule {
        needles: &[" rag "],
        label: "RAG",
    },
    TagRule {
        needles: &["llms", "llm"],
        label: "LLM",
    },
];

/// Returns every label the checklist can produce, in checklist order.
pub fn known_tags() -> Vec<&'static str> {
    TAG_RULES.iter().map(|rule| rule.label).collect()
}

/// Builds the lowercase haystack searched by [`infer_tags`].
///
/// Layout: `description + " " + details.join(" ") + " " + responsibilities.join(" ")`.
pub fn tag_source_text(project: &Project) -> String {
    [
        project.description.as_str(),
        project.details.join(" ").as_str(),
        project.responsibilities.join(" ").as_str(),
    ]
    .join(" ")
    .to_lowercase()
}

/// Infers at most `limit` display tags for one project.
pub fn infer_tags(project: &Project, limit: usize) -> Vec<&'static str> {
    infer_tags_from_text(&tag_source_text(project), limit)
}

/// Infers tags from an already-lowercased haystack.
pub fn infer_tags_from_text(source: &str, limit: usize) -> Vec<&'static str> {
    let limit = limit.min(DEFAULT_TAG_LIMIT);
    let mut tags: Vec<&'static str> = Vec::new();
    for rule in TAG_RULES {
        if tags.len() == limit {
            break;
        }
        let matched = rule.needles.iter().any(|needle| source.contains(needle));
        if matched && !tags.contains(&rule.label) {
            tags.push(rule.label);
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::{
        infer_tags, infer_tags_from_text, known_tags, tag_source_text, DEFAULT_TAG_LIMIT,
    };
    use crate::model::project::Project;

    #[test]
    fn maze_vr_description_yields_single_vr_tag() {
        let project = Project::new("Maze VR", "A VR maze demo");
        assert_eq!(infer_tags(&project, DEFAULT_TAG_LIMIT), vec!["VR"]);
    }

    #[test]
    fn tags_follow_checklist_order_not_text_order() {
        let tags = infer_tags_from_text("uses llm agents on android with firebase", 5);
        assert_eq!(tags, vec!["Firebase", "Mobile", "LLM"]);
    }

    #[test]
    fn tags_are_capped_at_limit() {
        let source = "vr cave addressable behaviour tree firebase ios timeline a* llms";
        let tags = infer_tags_from_text(source, DEFAULT_TAG_LIMIT);
        assert_eq!(
            tags,
            vec!["VR", "CAVE", "Addressables", "Behavior Trees", "Firebase"]
        );
    }

    #[test]
    fn oversized_limit_still_caps_at_default() {
        let source = "vr cave addressable behaviour tree firebase ios timeline a* llms";
        assert_eq!(infer_tags_from_text(source, 11).len(), DEFAULT_TAG_LIMIT);
    }

    #[test]
    fn ai_and_rag_require_surrounding_spaces() {
        assert!(infer_tags_from_text("said the rain", 5).is_empty());
        assert_eq!(infer_tags_from_text("an ai assistant", 5), vec!["AI"]);
        assert_eq!(infer_tags_from_text("a rag pipeline", 5), vec!["RAG"]);
    }

    #[test]
    fn source_text_includes_details_and_responsibilities() {
        let mut project = Project::new("t", "Intro");
        project.details = vec!["Built for Android".to_string()];
        project.responsibilities = vec!["Timeline cutscenes".to_string()];
        let source = tag_source_text(&project);
        assert_eq!(source, "intro built for android timeline cutscenes");
        assert_eq!(infer_tags(&project, 5), vec!["Mobile", "Timeline"]);
    }

    #[test]
    fn every_known_tag_is_unique() {
        let tags = known_tags();
        let unique: std::collections::BTreeSet<_> = tags.iter().collect();
        assert_eq!(unique.len(), tags.len());
    }
}
