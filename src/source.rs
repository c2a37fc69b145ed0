//! Where the initial skills document comes from.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::config::SourceConfig;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} responded with status {status}")]
    Status { url: String, status: u16 },

    #[error("skills document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[async_trait]
pub trait SkillsSource: Send + Sync {
    /// Retrieve and parse the skills document.
    async fn fetch(&self) -> Result<Value, SourceError>;

    /// Human-readable location, used in logs.
    fn describe(&self) -> String;
}

/// JSON document on the local filesystem.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SkillsSource for FileSource {
    async fn fetch(&self) -> Result<Value, SourceError> {
        debug!("Reading skills from {}", self.path.display());
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SourceError::Io {
                path: self.path.clone(),
                source,
            })?;
        Ok(serde_json::from_str(&content)?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// JSON document served over HTTP(S).
pub struct HttpSource {
    url: String,
    client: Client,
}

impl HttpSource {
    /// `timeout` of `None` waits for the server indefinitely.
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, SourceError> {
        let url = url.into();
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|source| SourceError::Http {
            url: url.clone(),
            source,
        })?;
        Ok(Self { url, client })
    }
}

#[async_trait]
impl SkillsSource for HttpSource {
    async fn fetch(&self) -> Result<Value, SourceError> {
        debug!("Fetching skills from {}", self.url);

        let response =
            self.client
                .get(&self.url)
                .send()
                .await
                .map_err(|source| SourceError::Http {
                    url: self.url.clone(),
                    source,
                })?;

        if !response.status().is_success() {
            return Err(SourceError::Status {
                url: self.url.clone(),
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await.map_err(|source| SourceError::Http {
            url: self.url.clone(),
            source,
        })?;
        Ok(serde_json::from_str(&body)?)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// JSON text already in memory (stdin, tests).
pub struct StaticSource {
    content: String,
}

impl StaticSource {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

#[async_trait]
impl SkillsSource for StaticSource {
    async fn fetch(&self) -> Result<Value, SourceError> {
        Ok(serde_json::from_str(&self.content)?)
    }

    fn describe(&self) -> String {
        "<inline>".to_string()
    }
}

/// Pick an HTTP source for `http://`/`https://` locations, a file otherwise.
pub fn source_for(config: &SourceConfig) -> Result<Box<dyn SkillsSource>, SourceError> {
    let location = config.location.as_str();
    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Box::new(HttpSource::new(location, config.timeout())?))
    } else {
        Ok(Box::new(FileSource::new(location)))
    }
}
