//! Project data source contracts and implementations.
//!
//! # Responsibility
//! - Fetch the raw `projects.json` document from a file or an HTTP URL.
//! - Turn non-success HTTP statuses into typed errors.
//!
//! # Invariants
//! - Every fetch is a single attempt; there is no retry or caching.
//! - HTTP requests ask intermediaries not to cache (`Cache-Control: no-store`).

use crate::model::project::ProjectData;
use log::debug;
use reqwest::blocking::Client;
use reqwest::header::CACHE_CONTROL;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub type SourceResult<T> = Result<T, SourceError>;

/// Failure while fetching or decoding project data.
#[derive(Debug)]
pub enum SourceError {
    Io {
        location: String,
        error: std::io::Error,
    },
    Http(reqwest::Error),
    /// Server answered with a non-success status; `location` is the document
    /// name, e.g. `projects.json`.
    Status { location: String, status: u16 },
    Parse(serde_json::Error),
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { location, error } => write!(f, "Could not read {location}: {error}"),
            Self::Http(err) => write!(f, "{err}"),
            Self::Status { location, status } => {
                write!(f, "Could not load {location} (HTTP {status})")
            }
            Self::Parse(err) => write!(f, "invalid project data: {err}"),
        }
    }
}

impl Error for SourceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { error, .. } => Some(error),
            Self::Http(err) => Some(err),
            Self::Status { .. } => None,
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<reqwest::Error> for SourceError {
    fn from(value: reqwest::Error) -> Self {
        Self::Http(value)
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Read-only access to the project data document.
pub trait ProjectSource {
    /// Human-readable location used in diagnostics.
    fn location(&self) -> &str;

    /// Fetches the raw JSON text.
    fn fetch_text(&self) -> SourceResult<String>;

    /// Fetches and decodes the document.
    fn load(&self) -> SourceResult<ProjectData> {
        let text = self.fetch_text()?;
        Ok(ProjectData::from_json(&text)?)
    }
}

impl<S: ProjectSource + ?Sized> ProjectSource for Box<S> {
    fn location(&self) -> &str {
        (**self).location()
    }

    fn fetch_text(&self) -> SourceResult<String> {
        (**self).fetch_text()
    }
}

/// Local file source.
pub struct FileProjectSource {
    path: PathBuf,
    location: String,
}

impl FileProjectSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let location = path.display().to_string();
        Self { path, location }
    }
}

impl ProjectSource for FileProjectSource {
    fn location(&self) -> &str {
        &self.location
    }

    fn fetch_text(&self) -> SourceResult<String> {
        debug!("event=source_fetch module=repo kind=file location={}", self.location);
        std::fs::read_to_string(&self.path).map_err(|error| SourceError::Io {
            location: self.location.clone(),
            error,
        })
    }
}

/// HTTP(S) source performing one no-cache `GET`.
pub struct HttpProjectSource {
    url: String,
    document: String,
    client: Client,
}

impl HttpProjectSource {
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        let document = document_name(&url);
        Self {
            url,
            document,
            client: Client::new(),
        }
    }
}

/// Last path segment of `url`, without query or fragment.
fn document_name(url: &str) -> String {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    match path.trim_end_matches('/').rsplit_once('/') {
        Some((_, name)) if !name.is_empty() => name.to_string(),
        _ => url.to_string(),
    }
}

impl ProjectSource for HttpProjectSource {
    fn location(&self) -> &str {
        &self.url
    }

    fn fetch_text(&self) -> SourceResult<String> {
        debug!("event=source_fetch module=repo kind=http location={}", self.url);
        let response = self
            .client
            .get(self.url.as_str())
            .header(CACHE_CONTROL, "no-store")
            .send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                location: self.document.clone(),
                status: status.as_u16(),
            });
        }
        Ok(response.text()?)
    }
}

/// In-memory source answering with a fixed body or a fixed HTTP status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryProjectSource {
    location: String,
    body: Option<String>,
    status: u16,
}

impl MemoryProjectSource {
    /// Source whose fetch succeeds with `body`.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            location: "projects.json".to_string(),
            body: Some(body.into()),
            status: 200,
        }
    }

    /// Source whose fetch fails with HTTP `status`.
    pub fn status(status: u16) -> Self {
        Self {
            location: "projects.json".to_string(),
            body: None,
            status,
        }
    }
}

impl ProjectSource for MemoryProjectSource {
    fn location(&self) -> &str {
        &self.location
    }

    fn fetch_text(&self) -> SourceResult<String> {
        match &self.body {
            Some(body) if (200..300).contains(&self.status) => Ok(body.clone()),
            _ => Err(SourceError::Status {
                location: self.location.clone(),
                status: self.status,
            }),
        }
    }
}

/// Picks the HTTP source for `http(s)://` locations and the file source otherwise.
pub fn source_for(location: &str) -> Box<dyn ProjectSource> {
    let trimmed = location.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Box::new(HttpProjectSource::new(trimmed))
    } else {
        Box::new(FileProjectSource::new(trimmed))
    }
}
