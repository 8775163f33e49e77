use crate::error::{Error, Result};
use std::env;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_CHART_HOST: &str = "ghchart.rrethy.dev";

#[derive(Debug, Clone)]
pub struct Config {
    pub github_token: Option<String>,
    pub api_base: String,
    pub chart_host: String,
    pub language_limit: usize,
    pub top_repo_limit: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // The public API works without a token, just with a lower rate limit.
        let github_token = env::var("GITHUB_TOKEN")
            .ok()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        let api_base =
            env::var("GITHUB_API_URL").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());

        let chart_host =
            env::var("CONTRIB_CHART_HOST").unwrap_or_else(|_| DEFAULT_CHART_HOST.to_string());

        let language_limit = parse_limit("LANGUAGE_LIMIT", 8)?;
        let top_repo_limit = parse_limit("TOP_REPO_LIMIT", 6)?;

        Ok(Self {
            github_token,
            api_base,
            chart_host,
            language_limit,
            top_repo_limit,
        })
    }
}

fn parse_limit(var: &str, default: usize) -> Result<usize> {
    match env::var(var) {
        Ok(raw) => raw.trim().parse().map_err(|_| {
            Error::Config(format!("{} must be a positive integer, got '{}'", var, raw))
        }),
        Err(_) => Ok(default),
    }
}
