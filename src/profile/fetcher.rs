use chrono::Utc;

use crate::error::{Error, Result};
use crate::github::GitHubApi;
use crate::models::ProfileReport;
use crate::palette::language_color;
use crate::profile::aggregate;

/// Orchestrates the two-request fetch chain and the aggregation.
pub struct ProfileFetcher<A: GitHubApi> {
    api: A,
    chart_host: String,
    language_limit: usize,
    top_repo_limit: usize,
}

impl<A: GitHubApi> ProfileFetcher<A> {
    pub fn new(api: A, chart_host: impl Into<String>) -> Self {
        Self {
            api,
            chart_host: chart_host.into(),
            language_limit: aggregate::LANGUAGE_LIMIT,
            top_repo_limit: aggregate::TOP_REPOSITORY_LIMIT,
        }
    }

    pub fn with_limits(mut self, languages: usize, repositories: usize) -> Self {
        self.language_limit = languages;
        self.top_repo_limit = repositories;
        self
    }

    /// Fetch a user and their repositories, then aggregate into a report.
    ///
    /// The repository request depends on the `repos_url` reference returned
    /// with the user record, so the two calls are strictly sequential. There
    /// is no partial success: if either call fails the whole fetch fails.
    /// Single attempt per call, no retry.
    pub async fn fetch(&self, username: &str) -> Result<ProfileReport> {
        let username = username.trim();
        if username.is_empty() {
            return Err(Error::BlankUsername);
        }

        tracing::info!("Fetching GitHub profile for: {}", username);
        let user = self.api.get_user(username).await?;

        tracing::info!("Fetching repositories...");
        let repos = self.api.get_user_repos(&user.repos_url).await?;
        tracing::info!("Found {} repositories", repos.len());

        let total_stars = aggregate::total_stars(&repos);
        let languages = aggregate::rank_languages(&repos, language_color, self.language_limit);
        let top_repositories = aggregate::top_repositories(&repos, self.top_repo_limit);

        // Handed to the renderer as an opaque URL; never fetched here.
        let contribution_chart = format!("https://{}/{}", self.chart_host, user.login);

        Ok(ProfileReport {
            user,
            total_stars,
            languages,
            top_repositories,
            contribution_chart,
            fetched_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    use crate::models::{GitHubUser, Repository};

    fn sample_user(login: &str) -> GitHubUser {
        GitHubUser {
            login: login.to_string(),
            id: 583231,
            name: Some("The Octocat".to_string()),
            avatar_url: "https://avatars.example/u/583231".to_string(),
            bio: None,
            public_repos: 3,
            followers: 100,
            following: 9,
            repos_url: format!("https://api.github.com/users/{}/repos", login),
            created_at: "2011-01-25T18:44:36Z".parse().unwrap(),
        }
    }

    fn sample_repo(name: &str, language: Option<&str>, stars: u32) -> Repository {
        Repository {
            id: 0,
            name: name.to_string(),
            description: None,
            language: language.map(String::from),
            stargazers_count: stars,
            html_url: format!("https://github.com/octocat/{}", name),
        }
    }

    /// In-memory stand-in for the API: fails the user lookup for "missing"
    /// and the repository call for "norepos", and counts every request.
    struct StubApi {
        repos: Vec<Repository>,
        user_calls: Arc<AtomicU32>,
        repo_calls: Arc<AtomicU32>,
    }

    #[async_trait]
    impl GitHubApi for StubApi {
        async fn get_user(&self, username: &str) -> Result<GitHubUser> {
            self.user_calls.fetch_add(1, Ordering::SeqCst);
            if username == "missing" {
                return Err(Error::UserNotFound {
                    login: username.to_string(),
                    status: 404,
                });
            }
            Ok(sample_user(username))
        }

        async fn get_user_repos(&self, repos_url: &str) -> Result<Vec<Repository>> {
            self.repo_calls.fetch_add(1, Ordering::SeqCst);
            if repos_url.contains("norepos") {
                return Err(Error::RepositoryFetch {
                    detail: "HTTP 500".to_string(),
                });
            }
            Ok(self.repos.clone())
        }
    }

    fn fetcher_with(
        repos: Vec<Repository>,
    ) -> (ProfileFetcher<StubApi>, Arc<AtomicU32>, Arc<AtomicU32>) {
        let user_calls = Arc::new(AtomicU32::new(0));
        let repo_calls = Arc::new(AtomicU32::new(0));
        let api = StubApi {
            repos,
            user_calls: user_calls.clone(),
            repo_calls: repo_calls.clone(),
        };
        (
            ProfileFetcher::new(api, "ghchart.rrethy.dev"),
            user_calls,
            repo_calls,
        )
    }

    #[tokio::test]
    async fn blank_username_is_rejected_without_any_request() {
        let (fetcher, user_calls, repo_calls) = fetcher_with(Vec::new());
        for input in ["", "   ", "\t\n"] {
            let err = fetcher.fetch(input).await.unwrap_err();
            assert!(matches!(err, Error::BlankUsername));
            assert!(err.is_validation());
        }
        assert_eq!(user_calls.load(Ordering::SeqCst), 0);
        assert_eq!(repo_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn username_is_trimmed_before_lookup() {
        let (fetcher, _, _) = fetcher_with(Vec::new());
        let report = fetcher.fetch("  octocat  ").await.unwrap();
        assert_eq!(report.user.login, "octocat");
    }

    #[tokio::test]
    async fn user_not_found_short_circuits_before_repository_call() {
        let (fetcher, user_calls, repo_calls) = fetcher_with(Vec::new());
        let err = fetcher.fetch("missing").await.unwrap_err();
        assert!(matches!(err, Error::UserNotFound { .. }));
        assert_eq!(user_calls.load(Ordering::SeqCst), 1);
        assert_eq!(repo_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn repository_failure_fails_the_whole_fetch() {
        let (fetcher, _, repo_calls) = fetcher_with(Vec::new());
        let err = fetcher.fetch("norepos").await.unwrap_err();
        assert!(matches!(err, Error::RepositoryFetch { .. }));
        assert_eq!(repo_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn successful_fetch_aggregates_everything() {
        let repos = vec![
            sample_repo("go-big", Some("Go"), 10),
            sample_repo("go-small", Some("Go"), 5),
            sample_repo("rusty", Some("Rust"), 20),
        ];
        let (fetcher, _, _) = fetcher_with(repos);

        let report = fetcher.fetch("octocat").await.unwrap();
        assert_eq!(report.total_stars, 35);
        assert_eq!(report.languages.len(), 2);
        assert_eq!(report.languages[0].name, "Go");
        assert_eq!(report.languages[0].count, 2);
        assert_eq!(report.languages[0].color, "#00ADD8");
        let top: Vec<_> = report
            .top_repositories
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(top, vec!["rusty", "go-big", "go-small"]);
        assert_eq!(
            report.contribution_chart,
            "https://ghchart.rrethy.dev/octocat"
        );
    }

    #[tokio::test]
    async fn limits_are_configurable() {
        let repos = vec![
            sample_repo("a", Some("Go"), 3),
            sample_repo("b", Some("Rust"), 2),
            sample_repo("c", Some("C"), 1),
        ];
        let (fetcher, _, _) = fetcher_with(repos);
        let fetcher = fetcher.with_limits(1, 2);

        let report = fetcher.fetch("octocat").await.unwrap();
        assert_eq!(report.languages.len(), 1);
        assert_eq!(report.top_repositories.len(), 2);
    }
}
