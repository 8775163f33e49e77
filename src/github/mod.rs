pub mod client;

pub use client::GitHubClient;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{GitHubUser, Repository};

/// The HTTP capability the profile fetcher is built against.
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// Fetch a user record by login.
    async fn get_user(&self, username: &str) -> Result<GitHubUser>;

    /// Fetch one page of repositories from the `repos_url` reference
    /// returned with the user record.
    async fn get_user_repos(&self, repos_url: &str) -> Result<Vec<Repository>>;
}
