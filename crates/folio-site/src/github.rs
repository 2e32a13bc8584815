//! GitHub REST client
//!
//! Only the two public, unauthenticated endpoints the site reads:
//! `GET /users/{login}` and `GET /users/{login}/repos`.

use crate::error::FetchError;
use crate::fetch::{fetch_json, HttpSource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Public profile of a GitHub account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubUser {
    pub login: String,
    pub public_repos: u32,
    pub public_gists: u32,
    pub followers: u32,
    pub following: u32,
    pub created_at: DateTime<Utc>,
}

/// One public repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    /// Size in kilobytes
    #[serde(default)]
    pub size: u64,
    pub html_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub pushed_at: Option<DateTime<Utc>>,
}

impl Repository {
    /// Last activity: push time, falling back to update time
    #[inline]
    #[must_use]
    pub fn last_activity(&self) -> DateTime<Utc> {
        self.pushed_at.unwrap_or(self.updated_at)
    }
}

/// Client for the GitHub REST API
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: HttpSource,
    api_base: String,
}

impl GitHubClient {
    /// User agent sent with every request; the API rejects requests without one
    pub const USER_AGENT: &'static str = concat!("folio/", env!("CARGO_PKG_VERSION"));

    /// Create a client for `api_base` (e.g. `https://api.github.com`)
    ///
    /// # Errors
    ///
    /// [`FetchError::Transport`] if the HTTP client cannot be built.
    pub fn new(api_base: impl Into<String>) -> Result<Self, FetchError> {
        let api_base = api_base.into();
        let client = reqwest::Client::builder()
            .user_agent(Self::USER_AGENT)
            .build()
            .map_err(|source| FetchError::Transport {
                location: api_base.clone(),
                source,
            })?;
        Ok(Self {
            http: HttpSource::with_client(client),
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    /// Profile URL for `login`
    #[must_use]
    pub fn user_url(&self, login: &str) -> String {
        format!("{}/users/{login}", self.api_base)
    }

    /// Repository listing URL for `login`: up to 100, most recently updated first
    #[must_use]
    pub fn repos_url(&self, login: &str) -> String {
        format!("{}/users/{login}/repos?per_page=100&sort=updated", self.api_base)
    }

    /// Fetch the public profile
    ///
    /// # Errors
    ///
    /// Any [`FetchError`].
    pub async fn user(&self, login: &str) -> Result<GitHubUser, FetchError> {
        let url = self.user_url(login);
        tracing::debug!(%url, "fetching GitHub user");
        fetch_json(&self.http, &url).await
    }

    /// Fetch public repositories
    ///
    /// # Errors
    ///
    /// Any [`FetchError`].
    pub async fn repositories(&self, login: &str) -> Result<Vec<Repository>, FetchError> {
        let url = self.repos_url(login);
        tracing::debug!(%url, "fetching GitHub repositories");
        let repos: Vec<Repository> = fetch_json(&self.http, &url).await?;
        tracing::info!(login, count = repos.len(), "fetched GitHub repositories");
        Ok(repos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_test_utils::{GITHUB_REPOS_JSON, GITHUB_USER_JSON};

    #[test]
    fn urls_strip_trailing_slash() {
        let client = GitHubClient::new("https://api.github.com/").unwrap();
        assert_eq!(client.user_url("octocat"), "https://api.github.com/users/octocat");
        assert_eq!(
            client.repos_url("octocat"),
            "https://api.github.com/users/octocat/repos?per_page=100&sort=updated"
        );
    }

    #[test]
    fn decodes_user_payload() {
        let user: GitHubUser = serde_json::from_str(GITHUB_USER_JSON).unwrap();
        assert_eq!(user.login, "AncientAbacus");
        assert_eq!(user.public_repos, 4);
        assert_eq!(user.created_at.to_rfc3339(), "2020-03-01T10:00:00+00:00");
    }

    #[test]
    fn decodes_repo_payload_with_nulls() {
        let repos: Vec<Repository> = serde_json::from_str(GITHUB_REPOS_JSON).unwrap();
        assert_eq!(repos.len(), 4);
        assert!(repos[1].description.is_none());
        assert!(repos[3].language.is_none());
        assert_eq!(repos[1].last_activity(), repos[1].updated_at);
        assert_eq!(repos[0].last_activity(), repos[0].pushed_at.unwrap());
    }
}
