use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use url::Url;

use crate::error::ProfileError;
use crate::models::{GitHubUser, Repository};

const LOG_TARGET: &str = "client";

/// Largest page the repository listing endpoint serves. Only the first page is read.
pub const REPOS_PER_PAGE: u32 = 100;

/// Creates a preconfigured HTTP client with required headers.
pub fn build_client() -> Result<Client> {
    use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};

    let mut headers = HeaderMap::new();
    let _ = headers.insert(USER_AGENT, HeaderValue::from_static("github-profile-finder"));
    let _ = headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github.v3+json"));

    Client::builder()
        .default_headers(headers)
        .build()
        .context("Failed to build HTTP client")
}

/// Anonymous client for the GitHub users API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(http: Client, base_url: Url) -> Result<Self> {
        if base_url.cannot_be_a_base() {
            anyhow::bail!("API base URL '{base_url}' cannot carry a path");
        }
        Ok(Self { http, base_url })
    }

    /// Appends path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            let _ = path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Fetches a GitHub user by username and classifies any failure.
    pub async fn fetch_user(&self, username: &str) -> Result<GitHubUser, ProfileError> {
        let url = self.endpoint(&["users", username]);
        log::debug!(target: LOG_TARGET, "GET {url}");

        let response = self.http.get(url).send().await.map_err(|e| {
            log::error!(target: LOG_TARGET, "Request for user '{username}' failed: {e}");
            ProfileError::NetworkError(e)
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ProfileError::NotFound);
        }
        if !status.is_success() {
            log::warn!(target: LOG_TARGET, "GitHub API returned {status} for user '{username}'");
            return Err(ProfileError::FetchError { status });
        }

        response.json::<GitHubUser>().await.map_err(|e| {
            log::error!(target: LOG_TARGET, "Failed to decode profile for '{username}': {e}");
            ProfileError::NetworkError(e)
        })
    }

    /// Fetches the first page of a user's public repositories, in API order.
    pub async fn fetch_user_repos(&self, username: &str) -> Result<Vec<Repository>> {
        let mut url = self.endpoint(&["users", username, "repos"]);
        let _ = url
            .query_pairs_mut()
            .append_pair("per_page", &REPOS_PER_PAGE.to_string());
        log::debug!(target: LOG_TARGET, "GET {url}");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .context("Failed to send repository request to GitHub API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("GitHub API error ({status}): {body}");
        }

        response
            .json::<Vec<Repository>>()
            .await
            .context("Failed to deserialize repository list")
    }
}

/// Downloads avatar image bytes and decodes them into raw RGBA pixels.
pub async fn download_avatar_pixels(client: &Client, url: &str, size: u32) -> Option<(Vec<u8>, u32, u32)> {
    if url.is_empty() {
        return None;
    }

    let sized_url = if url.contains('?') {
        format!("{url}&s={size}")
    } else {
        format!("{url}?s={size}")
    };

    let bytes = match client.get(&sized_url).send().await.and_then(reqwest::Response::error_for_status) {
        Ok(response) => response.bytes().await.ok()?,
        Err(e) => {
            log::warn!(target: LOG_TARGET, "Avatar download failed: {e}");
            return None;
        }
    };
    let image = image::load_from_memory(&bytes).ok()?;

    // GitHub may ignore the size hint for cached avatars.
    let rgba = image.thumbnail_exact(size, size).to_rgba8();
    let (w, h) = rgba.dimensions();

    Some((rgba.into_raw(), w, h))
}
