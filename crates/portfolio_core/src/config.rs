//! Render configuration.
//!
//! # Responsibility
//! - Hold the tunables used by the renderers and the page controller.
//! - Load optional overrides from a TOML file.
//!
//! # Invariants
//! - Every field has a default; an empty file yields `RenderConfig::default()`.
//! - After validation `featured_limit` lies in `1..=DEFAULT_FEATURED_LIMIT`
//!   and `tag_limit` in `1..=DEFAULT_TAG_LIMIT`.

use crate::annotate::tags::DEFAULT_TAG_LIMIT;
use crate::view::action::DEFAULT_REVEAL_DELAY_MS;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Default number of projects shown in the featured region.
pub const DEFAULT_FEATURED_LIMIT: usize = 3;

/// Titles promoted to the front of the featured region, in order.
pub const DEFAULT_FEATURED_PRIORITY: &[&str] = &[
    "Play & Learn",
    "TEC: Virtual Factory",
    "Bimbo: Professional Driver Workshop",
];

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read config: {err}"),
            Self::Parse(err) => write!(f, "failed to parse config: {err}"),
            Self::Invalid(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        Self::Parse(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub featured_priority: Vec<String>,
    pub featured_limit: usize,
    pub tag_limit: usize,
    /// Delay before revealing a project after a featured tab switch.
    pub reveal_delay_ms: u64,
    /// Toggle regions initially shown.
    pub shown_regions: Vec<String>,
    /// Toggle regions forced hidden; overrides built-in shown defaults.
    pub hidden_regions: Vec<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            featured_priority: DEFAULT_FEATURED_PRIORITY
                .iter()
                .map(|title| title.to_string())
                .collect(),
            featured_limit: DEFAULT_FEATURED_LIMIT,
            tag_limit: DEFAULT_TAG_LIMIT,
            reveal_delay_ms: DEFAULT_REVEAL_DELAY_MS,
            shown_regions: Vec::new(),
            hidden_regions: Vec::new(),
        }
    }
}

impl RenderConfig {
    /// Parses and validates TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_limit("featured_limit", self.featured_limit, DEFAULT_FEATURED_LIMIT)?;
        check_limit("tag_limit", self.tag_limit, DEFAULT_TAG_LIMIT)
    }
}

fn check_limit(name: &str, value: usize, max: usize) -> Result<(), ConfigError> {
    if (1..=max).contains(&value) {
        return Ok(());
    }
    Err(ConfigError::Invalid(format!(
        "{name} must be between 1 and {max}, got {value}"
    )))
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, RenderConfig, DEFAULT_FEATURED_LIMIT};

    #[test]
    fn empty_toml_yields_defaults() {
        let config = RenderConfig::from_toml_str("").expect("empty config should parse");
        assert_eq!(config, RenderConfig::default());
        assert_eq!(config.featured_limit, DEFAULT_FEATURED_LIMIT);
        assert_eq!(config.featured_priority[0], "Play & Learn");
        assert_eq!(config.reveal_delay_ms, 80);
    }

    #[test]
    fn partial_toml_overrides_selected_fields() {
        let config = RenderConfig::from_toml_str(
            "featured_limit = 2\nshown_regions = [\"p1\"]\nfeatured_priority = [\"Maze VR\"]",
        )
        .expect("partial config should parse");
        assert_eq!(config.featured_limit, 2);
        assert_eq!(config.shown_regions, vec!["p1".to_string()]);
        assert_eq!(config.featured_priority, vec!["Maze VR".to_string()]);
        assert_eq!(config.tag_limit, 5);
    }

    #[test]
    fn zero_limits_are_rejected() {
        let err = RenderConfig::from_toml_str("tag_limit = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn limits_above_the_caps_are_rejected() {
        for text in ["tag_limit = 11", "featured_limit = 10"] {
            let err = RenderConfig::from_toml_str(text).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "{text} should be invalid");
        }
        let at_cap = RenderConfig::from_toml_str("tag_limit = 5\nfeatured_limit = 3")
            .expect("limits at the cap are accepted");
        assert_eq!(at_cap, RenderConfig::default());
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = RenderConfig::from_toml_str("featured_limit = \"three\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
