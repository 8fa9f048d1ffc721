use anyhow::{Context, Result};
use url::Url;

use crate::ranker::DEFAULT_TOP_REPOS;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Runtime settings, read from the environment (and a `.env` file, if present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root of the GitHub REST API. Overridable for GitHub Enterprise or a local mock.
    pub api_url: Url,
    /// How many repositories to show per profile.
    pub top_repos: usize,
}

impl Config {
    /// Reads `GITHUB_API_URL` and `TOP_REPOS` from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source; unset or blank values take defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let raw_url = var("GITHUB_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_url = Url::parse(raw_url.trim()).with_context(|| format!("Invalid GITHUB_API_URL '{raw_url}'"))?;

        let top_repos = match var("TOP_REPOS") {
            Some(raw) => {
                let count: usize = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("Invalid TOP_REPOS '{raw}'"))?;
                if count == 0 {
                    anyhow::bail!("TOP_REPOS must be at least 1");
                }
                count
            }
            None => DEFAULT_TOP_REPOS,
        };

        Ok(Self { api_url, top_repos })
    }
}
