//! JSON fetch collaborators
//!
//! The projects page never sees a fetch error: [`load_projects`] turns any
//! failure into an empty collection after logging it.

use crate::error::FetchError;
use async_trait::async_trait;
use folio_model::{LoadOutcome, ProjectCollection};
use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Source of raw JSON text
#[async_trait]
pub trait JsonSource: Send + Sync {
    /// Fetch the body at `location`
    async fn fetch_text(&self, location: &str) -> Result<String, FetchError>;
}

/// Reads documents relative to a root directory
#[derive(Debug, Clone)]
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    /// Create a file source rooted at `root`
    #[inline]
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl JsonSource for FileSource {
    async fn fetch_text(&self, location: &str) -> Result<String, FetchError> {
        let path = self.root.join(location);
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| FetchError::Io { path, source })
    }
}

/// Fetches documents over HTTP
#[derive(Debug, Clone, Default)]
pub struct HttpSource {
    client: reqwest::Client,
}

impl HttpSource {
    /// Create with a default client
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a preconfigured client
    #[inline]
    #[must_use]
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl JsonSource for HttpSource {
    async fn fetch_text(&self, location: &str) -> Result<String, FetchError> {
        let transport = |source| FetchError::Transport {
            location: location.to_string(),
            source,
        };
        let response = self.client.get(location).send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                location: location.to_string(),
                status: status.to_string(),
            });
        }
        response.text().await.map_err(transport)
    }
}

/// Picks [`HttpSource`] for `http(s)` locations and [`FileSource`] otherwise
#[derive(Debug, Clone)]
pub struct AutoSource {
    http: HttpSource,
    files: FileSource,
}

impl AutoSource {
    /// Create with local files resolved against `root`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            http: HttpSource::new(),
            files: FileSource::new(root),
        }
    }
}

#[async_trait]
impl JsonSource for AutoSource {
    async fn fetch_text(&self, location: &str) -> Result<String, FetchError> {
        if is_remote(location) {
            self.http.fetch_text(location).await
        } else {
            self.files.fetch_text(location).await
        }
    }
}

/// Whether `location` is an absolute `http(s)` URL
#[inline]
#[must_use]
pub fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Fetch and decode a JSON document
///
/// # Errors
///
/// Any [`FetchError`] from the source, or [`FetchError::Parse`].
pub async fn fetch_json<T, S>(source: &S, location: &str) -> Result<T, FetchError>
where
    T: DeserializeOwned,
    S: JsonSource + ?Sized,
{
    let text = source.fetch_text(location).await?;
    serde_json::from_str(&text).map_err(|source| FetchError::Parse {
        location: location.to_string(),
        source,
    })
}

async fn fetch_collection<S>(source: &S, location: &str) -> Result<ProjectCollection, FetchError>
where
    S: JsonSource + ?Sized,
{
    let text = source.fetch_text(location).await?;
    ProjectCollection::from_json(&text).map_err(|source| FetchError::Model {
        location: location.to_string(),
        source,
    })
}

/// Fetch the project list, reporting failure explicitly
pub async fn fetch_projects<S>(source: &S, location: &str) -> LoadOutcome
where
    S: JsonSource + ?Sized,
{
    match fetch_collection(source, location).await {
        Ok(collection) => LoadOutcome::Loaded(collection.as_slice().to_vec()),
        Err(e) => {
            tracing::error!(error = %e, "error fetching or parsing projects");
            LoadOutcome::Failed(e.to_string())
        }
    }
}

/// Fetch the project list; failure yields the empty collection
pub async fn load_projects<S>(source: &S, location: &str) -> ProjectCollection
where
    S: JsonSource + ?Sized,
{
    ProjectCollection::from_outcome(fetch_projects(source, location).await)
}
