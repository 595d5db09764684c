//! Project domain model.
//!
//! # Responsibility
//! - Define the read-only snapshot shapes loaded from `projects.json`.
//! - Tolerate absent or wrongly-typed optional fields.
//!
//! # Invariants
//! - Deserialization of a single project never fails on optional fields;
//!   bad values collapse to empty defaults.
//! - Once an id is assigned it is never rewritten.
//!
//! # See also
//! - crate::service::page_controller

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

static NON_WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_\s-]").expect("valid non-word regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Page section a project is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Personal work, listed under the `projects` tab.
    Solo,
    /// Professional/collaborative work, listed under the `teamprojects` tab.
    Team,
}

impl Section {
    /// Tab identifier and mount-point id of the section.
    pub fn tab(self) -> &'static str {
        match self {
            Self::Solo => "projects",
            Self::Team => "teamprojects",
        }
    }

    /// Prefix applied to generated project ids.
    pub fn id_prefix(self) -> &'static str {
        match self {
            Self::Solo => "solo_",
            Self::Team => "team_",
        }
    }
}

/// Explicit media classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
        }
    }
}

/// One image or video reference attached to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Media {
    pub url: String,
    /// Empty when absent.
    pub label: String,
    /// Serialized as `type`; `None` means "infer from the URL".
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<MediaKind>,
}

impl Media {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            label: String::new(),
            kind: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_kind(mut self, kind: MediaKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Lenient decode of one media entry; `None` when `url` is not a string.
    fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let url = object.get("url")?.as_str()?.to_string();
        let label = string_or_empty(object.get("label"));
        // Any explicit, non-empty type is trusted; only "video" plays as video.
        let kind = match object.get("type").and_then(Value::as_str) {
            Some("") | None => None,
            Some("video") => Some(MediaKind::Video),
            Some(_) => Some(MediaKind::Image),
        };
        Some(Self { url, label, kind })
    }
}

/// Labeled sample code snippet (solo projects only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeBlock {
    pub label: String,
    /// Raw source text; escaped only when rendered.
    pub code: String,
}

impl CodeBlock {
    pub fn new(label: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            code: code.into(),
        }
    }

    fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        Some(Self {
            label: string_or_empty(object.get("label")),
            code: string_or_empty(object.get("code")),
        })
    }
}

/// Portfolio entry shared by the solo and team variants.
///
/// Team-only and solo-only fields stay empty for the other variant.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default, deserialize_with = "lenient_optional_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_media")]
    pub media: Vec<Media>,
    #[serde(default, deserialize_with = "lenient_code_blocks")]
    pub code_blocks: Vec<CodeBlock>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub details: Vec<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub responsibilities: Vec<String>,
}

impl Project {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    /// Returns the assigned id, or an empty string before assignment.
    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or("")
    }

    /// First line of the description, used as the card summary.
    pub fn summary(&self) -> &str {
        self.description.split('\n').next().unwrap_or("")
    }

    /// First media entry, used as the card thumbnail.
    pub fn thumbnail(&self) -> Option<&Media> {
        self.media.first()
    }

    /// Assigns `prefix + slug(title)` when no usable id is present.
    pub fn ensure_id(&mut self, section: Section) {
        let has_id = self
            .id
            .as_deref()
            .is_some_and(|value| !value.trim().is_empty());
        if !has_id {
            self.id = Some(format!("{}{}", section.id_prefix(), slugify(&self.title)));
        }
    }
}

/// Top-level `projects.json` document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectData {
    #[serde(default, deserialize_with = "lenient_projects")]
    pub solo_projects: Vec<Project>,
    #[serde(default, deserialize_with = "lenient_projects")]
    pub team_projects: Vec<Project>,
}

impl ProjectData {
    /// Parses a JSON document with default-to-empty semantics.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Assigns stable ids to every project that lacks one.
    pub fn assign_ids(&mut self) {
        for project in &mut self.solo_projects {
            project.ensure_id(Section::Solo);
        }
        for project in &mut self.team_projects {
            project.ensure_id(Section::Team);
        }
    }
}

/// Builds a URL/DOM-safe identifier from free text.
///
/// Lowercases and trims, strips characters outside `[A-Za-z0-9_]`, whitespace
/// and `-`, then collapses whitespace runs to a single `-`.
pub fn slugify(value: &str) -> String {
    let lowered = value.to_lowercase();
    let stripped = NON_WORD_RE.replace_all(lowered.trim(), "");
    WHITESPACE_RE.replace_all(&stripped, "-").into_owned()
}

fn string_or_empty(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_default()
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(string_or_empty(Some(&value)))
}

fn lenient_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().map(str::to_string))
}

fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(decode_array(&value, |item| item.as_str().map(str::to_string)))
}

fn lenient_media<'de, D>(deserializer: D) -> Result<Vec<Media>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(decode_array(&value, Media::from_value))
}

fn lenient_code_blocks<'de, D>(deserializer: D) -> Result<Vec<CodeBlock>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(decode_array(&value, CodeBlock::from_value))
}

fn lenient_projects<'de, D>(deserializer: D) -> Result<Vec<Project>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(decode_array(&value, |item| {
        if item.is_object() {
            Project::deserialize(item).ok()
        } else {
            None
        }
    }))
}

fn decode_array<T>(value: &Value, decode: impl Fn(&Value) -> Option<T>) -> Vec<T> {
    value
        .as_array()
        .map(|items| items.iter().filter_map(&decode).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::{slugify, MediaKind, Project, ProjectData, Section};

    #[test]
    fn slugify_strips_symbols_and_hyphenates_whitespace() {
        assert_eq!(slugify("  TEC: Virtual Factory "), "tec-virtual-factory");
        assert_eq!(slugify("Play & Learn"), "play-learn");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn ensure_id_keeps_existing_and_prefixes_generated() {
        let mut existing = Project::new("Anything", "");
        existing.id = Some("p1".to_string());
        existing.ensure_id(Section::Team);
        assert_eq!(existing.id(), "p1");

        let mut generated = Project::new("Bimbo: Driver Workshop", "");
        generated.ensure_id(Section::Team);
        assert_eq!(generated.id(), "team_bimbo-driver-workshop");
    }

    #[test]
    fn wrongly_typed_fields_collapse_to_defaults() {
        let data = ProjectData::from_json(
            r#"{"teamProjects":[{"title":7,"details":"oops","responsibilities":["a",3,"b"],
                "media":[{"url":"x.png","type":"VIDEO"},{"label":"no url"},{"url":"y.webm"}]}]}"#,
        )
        .unwrap();
        assert!(data.solo_projects.is_empty());
        let project = &data.team_projects[0];
        assert_eq!(project.title, "");
        assert!(project.details.is_empty());
        assert_eq!(project.responsibilities, vec!["a", "b"]);
        assert_eq!(project.media.len(), 2);
        assert_eq!(project.media[0].kind, Some(MediaKind::Image));
        assert_eq!(project.media[1].kind, None);
    }

    #[test]
    fn summary_is_first_description_line() {
        let project = Project::new("t", "first\nsecond");
        assert_eq!(project.summary(), "first");
    }
}
