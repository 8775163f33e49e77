//! Presentation adapter: turns a profile report into render-ready view
//! state and defines the injected render capability.

use serde::Serialize;

use crate::models::ProfileReport;

/// Labeled numeric series for the chart capability. The three vectors are
/// parallel, one entry per ranked language.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<u32>,
    pub colors: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LanguageRow {
    pub name: String,
    pub count: u32,
    pub color: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct RepositoryRow {
    pub name: String,
    pub url: String,
    pub description: String,
    pub stars: u32,
    /// Empty when the repository has no detected language.
    pub language: String,
}

/// Everything the render target needs for a successful request, with
/// fallbacks already applied.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileView {
    pub avatar_url: String,
    pub display_name: String,
    pub login: String,
    pub bio: String,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
    pub total_stars: u64,
    pub chart: ChartSeries,
    pub languages: Vec<LanguageRow>,
    pub top_repositories: Vec<RepositoryRow>,
    pub contribution_chart: String,
}

impl ProfileView {
    pub fn from_report(report: &ProfileReport) -> Self {
        let chart = ChartSeries {
            labels: report.languages.iter().map(|l| l.name.clone()).collect(),
            values: report.languages.iter().map(|l| l.count).collect(),
            colors: report.languages.iter().map(|l| l.color).collect(),
        };

        let languages = report
            .languages
            .iter()
            .map(|l| LanguageRow {
                name: l.name.clone(),
                count: l.count,
                color: l.color,
            })
            .collect();

        let top_repositories = report
            .top_repositories
            .iter()
            .map(|r| RepositoryRow {
                name: r.name.clone(),
                url: r.html_url.clone(),
                description: r
                    .description
                    .clone()
                    .filter(|d| !d.is_empty())
                    .unwrap_or_else(|| "No description".to_string()),
                stars: r.stargazers_count,
                language: r.language.clone().unwrap_or_default(),
            })
            .collect();

        Self {
            avatar_url: report.user.avatar_url.clone(),
            display_name: report.user.display_name().to_string(),
            login: report.user.login.clone(),
            bio: report
                .user
                .bio
                .clone()
                .filter(|b| !b.is_empty())
                .unwrap_or_else(|| "No bio available".to_string()),
            public_repos: report.user.public_repos,
            followers: report.user.followers,
            following: report.user.following,
            total_stars: report.total_stars,
            chart,
            languages,
            top_repositories,
            contribution_chart: report.contribution_chart.clone(),
        }
    }
}

/// The injected render capability. An implementation owns its display state
/// explicitly; there is no shared module-level handle.
///
/// Contract: after any completed request exactly one of the profile and
/// error views is active, and the loading indicator is visible only while a
/// request is in flight.
pub trait RenderTarget {
    fn set_loading(&mut self, loading: bool);
    fn show_profile(&mut self, view: &ProfileView);
    fn show_error(&mut self);
    fn prompt_blank_username(&mut self);
}
