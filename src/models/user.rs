use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User record from `GET /users/{username}`, parsed at the API boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubUser {
    pub login: String,
    pub id: u64,
    pub name: Option<String>,
    pub avatar_url: String,
    pub bio: Option<String>,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
    pub repos_url: String,
    pub created_at: DateTime<Utc>,
}

impl GitHubUser {
    /// Display name, falling back to the login when the profile has none set.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.login)
    }
}
