use chrono::{DateTime, Utc};
use serde::Serialize;

use super::repo::Repository;
use super::user::GitHubUser;
use crate::error::Error;

/// One language's share of a user's repositories, with its display color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedLanguage {
    pub name: String,
    pub count: u32,
    pub color: &'static str,
}

/// Everything a successful fetch produces: the user record plus the
/// aggregates computed over their repository list.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileReport {
    pub user: GitHubUser,
    pub total_stars: u64,
    pub languages: Vec<RankedLanguage>,
    pub top_repositories: Vec<Repository>,
    /// Opaque URL for the external contribution chart, never fetched here.
    pub contribution_chart: String,
    pub fetched_at: DateTime<Utc>,
}

/// Result of the most recent fetch-and-aggregate request.
///
/// Exactly one outcome is current at any time; a new request replaces it
/// wholesale, never merging with prior state.
#[derive(Debug)]
pub enum RequestOutcome {
    Loading,
    Success(ProfileReport),
    Failure(Error),
}
