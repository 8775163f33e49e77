use async_trait::async_trait;
use reqwest::{header, Client};

use crate::error::{Error, Result};
use crate::github::GitHubApi;
use crate::models::{GitHubUser, Repository};

pub const API_BASE: &str = "https://api.github.com";

// Single page only. The sort is a hint to the API; the aggregator re-sorts
// independently for the top-repository ranking.
const REPOS_PER_PAGE: u32 = 100;

pub struct GitHubClient {
    client: Client,
    base_url: String,
}

impl GitHubClient {
    pub fn new(token: Option<&str>) -> Result<Self> {
        Self::with_base_url(token, API_BASE)
    }

    pub fn with_base_url(token: Option<&str>, base_url: &str) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        if let Some(token) = token {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("Bearer {}", token))?,
            );
        }
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            header::HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("gitgazer/0.1"),
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl GitHubApi for GitHubClient {
    async fn get_user(&self, username: &str) -> Result<GitHubUser> {
        let url = format!("{}/users/{}", self.base_url, username);
        tracing::info!("Fetching user: {}", username);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        // Not-found and any other non-success status collapse into the same
        // outcome: the lookup failed for this login.
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!("User lookup failed: {} - {}", status, body);
            return Err(Error::UserNotFound {
                login: username.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| Error::Parse(format!("user record for {}: {}", username, e)))
    }

    async fn get_user_repos(&self, repos_url: &str) -> Result<Vec<Repository>> {
        let separator = if repos_url.contains('?') { "&" } else { "?" };
        let url = format!(
            "{}{}per_page={}&sort=stars",
            repos_url, separator, REPOS_PER_PAGE
        );
        tracing::info!("Fetching repositories: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::RepositoryFetch {
                detail: e.to_string(),
            })?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::RepositoryFetch {
                detail: format!("{} - {}", status, body),
            });
        }

        response.json().await.map_err(|e| Error::RepositoryFetch {
            detail: format!("malformed repository list: {}", e),
        })
    }
}
