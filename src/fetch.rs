//! Configuration document retrieval

use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::profile::Profile;

/// Resource path of the configuration document relative to the page.
pub const DEFAULT_RESOURCE: &str = "data.json";

/// Default upper bound on the configuration body size.
pub const MAX_BODY_BYTES: u64 = 4 * 1024 * 1024;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Terminal failures of the configuration fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The resource answered with a non-success status.
    #[error("configuration unavailable at {location} (status {status})")]
    Unavailable { location: String, status: u16 },

    /// The request failed in transport or the body could not be parsed.
    #[error("configuration at {location} is invalid: {source}")]
    Invalid {
        location: String,
        #[source]
        source: BoxError,
    },
}

impl FetchError {
    fn invalid(location: impl fmt::Display, source: impl Into<BoxError>) -> Self {
        FetchError::Invalid {
            location: location.to_string(),
            source: source.into(),
        }
    }
}

/// Anything able to produce the configuration document.
pub trait ConfigSource {
    /// Fetches and parses the configuration document once.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Unavailable`] on a non-success status and
    /// [`FetchError::Invalid`] on transport or parse failure.
    fn fetch(&self) -> Result<Profile, FetchError>;

    /// Human readable location used in diagnostics.
    fn location(&self) -> String;
}

/// Uncached HTTP GET of the configuration document.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: Url,
    body_limit: u64,
}

impl HttpSource {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            body_limit: MAX_BODY_BYTES,
        }
    }

    /// Sets the largest accepted body size in bytes.
    pub fn with_body_limit(mut self, body_limit: u64) -> Self {
        self.body_limit = body_limit;
        self
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl ConfigSource for HttpSource {
    fn fetch(&self) -> Result<Profile, FetchError> {
        debug!(url = %self.url, "fetching configuration");

        let response = ureq::get(self.url.as_str())
            .set("Cache-Control", "no-store")
            .set("Pragma", "no-cache")
            .call();

        let response = match response {
            Ok(response) => response,
            Err(ureq::Error::Status(status, _)) => {
                return Err(FetchError::Unavailable {
                    location: self.location(),
                    status,
                });
            }
            Err(err @ ureq::Error::Transport(_)) => {
                return Err(FetchError::invalid(&self.url, err));
            }
        };

        // One byte past the limit tells an oversized body from one that fits
        let mut body = String::new();
        response
            .into_reader()
            .take(self.body_limit + 1)
            .read_to_string(&mut body)
            .map_err(|e| FetchError::invalid(&self.url, e))?;

        if body.len() as u64 > self.body_limit {
            return Err(FetchError::invalid(
                &self.url,
                format!("body exceeds {} bytes", self.body_limit),
            ));
        }

        Profile::from_json(&body).map_err(|e| FetchError::invalid(&self.url, e))
    }

    fn location(&self) -> String {
        self.url.to_string()
    }
}

/// Configuration document deployed as a file next to the page.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ConfigSource for FileSource {
    fn fetch(&self) -> Result<Profile, FetchError> {
        debug!(path = %self.path.display(), "reading configuration");

        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(FetchError::Unavailable {
                    location: self.location(),
                    status: 404,
                });
            }
            Err(e) => return Err(FetchError::invalid(self.path.display(), e)),
        };

        Profile::from_json(&text).map_err(|e| FetchError::invalid(self.path.display(), e))
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Resolved configuration source.
#[derive(Debug, Clone)]
pub enum Source {
    Http(HttpSource),
    File(FileSource),
}

impl Source {
    /// Resolves a configuration location.
    ///
    /// Absolute `http`/`https` URLs are fetched over the network. A relative
    /// location is joined against `origin` when one is given, otherwise it
    /// is read from disk.
    ///
    /// # Arguments
    ///
    /// * `location`: URL or path of the configuration document
    /// * `origin`: Optional base URL that relative locations resolve against
    ///
    /// # Errors
    ///
    /// Returns error if the location cannot be joined against the origin.
    pub fn resolve(location: &str, origin: Option<&Url>) -> Result<Self, url::ParseError> {
        if let Ok(url) = Url::parse(location)
            && matches!(url.scheme(), "http" | "https")
        {
            return Ok(Source::Http(HttpSource::new(url)));
        }

        match origin {
            Some(base) => Ok(Source::Http(HttpSource::new(base.join(location)?))),
            None => Ok(Source::File(FileSource::new(location))),
        }
    }

    /// Page URL implied by the source: the directory the document lives in.
    pub fn page_url(&self) -> Option<String> {
        match self {
            Source::Http(http) => http.url().join("./").ok().map(String::from),
            Source::File(_) => None,
        }
    }
}

impl ConfigSource for Source {
    fn fetch(&self) -> Result<Profile, FetchError> {
        match self {
            Source::Http(http) => http.fetch(),
            Source::File(file) => file.fetch(),
        }
    }

    fn location(&self) -> String {
        match self {
            Source::Http(http) => http.location(),
            Source::File(file) => file.location(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_resolve_absolute_url_is_http() {
        // Arrange & Act
        let source = Source::resolve("https://example.com/me/data.json", None).unwrap();

        // Assert
        assert!(matches!(source, Source::Http(_)));
        assert_eq!(source.location(), "https://example.com/me/data.json");
        assert_eq!(source.page_url().as_deref(), Some("https://example.com/me/"));
    }

    #[test]
    fn test_resolve_relative_against_origin() {
        // Arrange
        let origin = Url::parse("https://example.com/bio/").unwrap();

        // Act
        let source = Source::resolve(DEFAULT_RESOURCE, Some(&origin)).unwrap();

        // Assert
        assert_eq!(source.location(), "https://example.com/bio/data.json");
    }

    #[test]
    fn test_resolve_relative_without_origin_is_file() {
        // Arrange & Act
        let source = Source::resolve("site/data.json", None).unwrap();

        // Assert
        assert!(matches!(source, Source::File(_)));
        assert_eq!(source.page_url(), None);
    }

    #[test]
    fn test_file_source_reads_document() {
        // Arrange
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"title":"Jane"}}"#).unwrap();

        // Act
        let profile = FileSource::new(file.path()).fetch().unwrap();

        // Assert
        assert_eq!(profile.title(), Some("Jane"));
    }

    #[test]
    fn test_file_source_missing_is_unavailable() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("data.json"));

        // Act
        let result = source.fetch();

        // Assert
        assert!(
            matches!(result, Err(FetchError::Unavailable { status: 404, .. })),
            "Missing file should map to unavailable"
        );
    }

    #[test]
    fn test_file_source_malformed_is_invalid() {
        // Arrange
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        // Act
        let result = FileSource::new(file.path()).fetch();

        // Assert
        assert!(matches!(result, Err(FetchError::Invalid { .. })));
    }
}
